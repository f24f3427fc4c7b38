// store.rs — Settings stores
//
// The extension's key/value storage, reduced to what the icon engine
// reads: string values by key, plus a queue of change notifications the
// driver drains between turns.  A write that does not change the value
// produces no notification.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use crate::ehm::AppError;





/// One change notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingChange {
    pub key:   String,
    pub value: String,
}





pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError>;

    /// Changes since the last call, oldest first.
    fn take_changes(&mut self) -> Vec<SettingChange>;
}





////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    values:  HashMap<String, String>,
    changes: Vec<SettingChange>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store; seeding does not count as a change.
    pub fn with_values<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        MemorySettingsStore {
            values:  values.into_iter().map (|(k, v)| (k.to_string(), v.to_string())).collect(),
            changes: Vec::new(),
        }
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get (key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        if self.values.get (key).map (String::as_str) == Some (value) {
            return Ok (());
        }

        self.values.insert (key.to_string(), value.to_string());
        self.changes.push (SettingChange { key: key.to_string(), value: value.to_string() });
        Ok (())
    }

    fn take_changes(&mut self) -> Vec<SettingChange> {
        std::mem::take (&mut self.changes)
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  JsonFileSettingsStore
//
//  A flat JSON object of string values, e.g.
//
//    { "iconSize": "lg", "iconPack": "react" }
//
//  Every set() rewrites the file.  A missing file is an empty store.
//
////////////////////////////////////////////////////////////////////////////////

#[derive(Debug)]
pub struct JsonFileSettingsStore {
    path:    PathBuf,
    values:  BTreeMap<String, String>,
    changes: Vec<SettingChange>,
}

impl JsonFileSettingsStore {

    pub fn open(path: &Path) -> Result<Self, AppError> {
        let values = if path.exists() {
            let text = std::fs::read_to_string (path)?;
            serde_json::from_str (&text)?
        } else {
            BTreeMap::new()
        };

        Ok (JsonFileSettingsStore {
            path: path.to_path_buf(),
            values,
            changes: Vec::new(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), AppError> {
        let text = serde_json::to_string_pretty (&self.values)?;
        std::fs::write (&self.path, text)?;
        Ok (())
    }
}

impl SettingsStore for JsonFileSettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get (key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        if self.values.get (key).map (String::as_str) == Some (value) {
            return Ok (());
        }

        self.values.insert (key.to_string(), value.to_string());
        self.save()?;
        self.changes.push (SettingChange { key: key.to_string(), value: value.to_string() });
        Ok (())
    }

    fn take_changes(&mut self) -> Vec<SettingChange> {
        std::mem::take (&mut self.changes)
    }
}
