// reference_tables.rs — Immutable icon lookup tables
//
// Built once from the static defaults in icon_mapping, or from an icon
// theme manifest (JSON).  Lookups are exact key equality; any precedence
// between tables belongs to the resolver, never to the tables themselves.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::ehm::AppError;
use crate::icon_mapping;





////////////////////////////////////////////////////////////////////////////////

/// Identifier of a renderable icon asset.  Opaque to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct IconEntry(String);

impl IconEntry {
    pub fn new(id: impl Into<String>) -> Self {
        IconEntry(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IconEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for IconEntry {
    fn from(id: &str) -> Self {
        IconEntry(id.to_string())
    }
}





/// Key → icon map.
pub type IconTable = HashMap<String, IconEntry>;

/// Selects one of the tables held by ReferenceTables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    FileNames,
    FolderNames,
    FileExtensions,
    LanguageIds,
    FallbackFileNames,
    FallbackFileExtensions,
    LightFileNames,
    LightFolderNames,
    LightFileExtensions,
}





////////////////////////////////////////////////////////////////////////////////
//
//  Manifest
//
//  On-disk shape of an icon theme manifest.  Every section is optional so
//  a partial manifest simply yields empty tables for what it omits.
//
////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct Manifest {
    file_names:      IconTable,
    folder_names:    IconTable,
    file_extensions: IconTable,
    language_ids:    IconTable,
    light:           LightManifest,
    fallback:        FallbackManifest,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct LightManifest {
    file_names:      IconTable,
    folder_names:    IconTable,
    file_extensions: IconTable,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct FallbackManifest {
    file_names:      IconTable,
    file_extensions: IconTable,
}





////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Default)]
pub struct ReferenceTables {
    file_names:               IconTable,
    folder_names:             IconTable,
    file_extensions:          IconTable,
    language_ids:             IconTable,
    fallback_file_names:      IconTable,
    fallback_file_extensions: IconTable,
    light_file_names:         IconTable,
    light_folder_names:       IconTable,
    light_file_extensions:    IconTable,
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl ReferenceTables
//
//  Construction and lookup.
//
////////////////////////////////////////////////////////////////////////////////

impl ReferenceTables {

    ////////////////////////////////////////////////////////////////////////////
    //
    //  with_defaults
    //
    //  Tables populated from the bundled icon_mapping defaults.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn with_defaults() -> Self {
        ReferenceTables {
            file_names:               to_table (icon_mapping::DEFAULT_FILE_NAME_ICONS),
            folder_names:             to_table (icon_mapping::DEFAULT_FOLDER_NAME_ICONS),
            file_extensions:          to_table (icon_mapping::DEFAULT_EXTENSION_ICONS),
            language_ids:             to_table (icon_mapping::DEFAULT_LANGUAGE_ID_ICONS),
            fallback_file_names:      to_table (icon_mapping::DEFAULT_FALLBACK_FILE_NAME_ICONS),
            fallback_file_extensions: to_table (icon_mapping::DEFAULT_FALLBACK_EXTENSION_ICONS),
            light_file_names:         to_table (icon_mapping::DEFAULT_LIGHT_FILE_NAME_ICONS),
            light_folder_names:       to_table (icon_mapping::DEFAULT_LIGHT_FOLDER_NAME_ICONS),
            light_file_extensions:    to_table (icon_mapping::DEFAULT_LIGHT_EXTENSION_ICONS),
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  from_manifest_json
    //
    //  Parse an icon theme manifest.  Missing sections are empty.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn from_manifest_json(json: &str) -> Result<Self, AppError> {
        let manifest: Manifest = serde_json::from_str (json)?;

        Ok (ReferenceTables {
            file_names:               manifest.file_names,
            folder_names:             manifest.folder_names,
            file_extensions:          manifest.file_extensions,
            language_ids:             manifest.language_ids,
            fallback_file_names:      manifest.fallback.file_names,
            fallback_file_extensions: manifest.fallback.file_extensions,
            light_file_names:         manifest.light.file_names,
            light_folder_names:       manifest.light.folder_names,
            light_file_extensions:    manifest.light.file_extensions,
        })
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  from_manifest_file
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn from_manifest_file(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            return Err (AppError::PathNotFound (path.to_path_buf()));
        }

        let json = std::fs::read_to_string (path)?;
        Self::from_manifest_json (&json)
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  lookup
    //
    //  Case-sensitive exact match.  Callers that want a case-insensitive
    //  attempt pass an already-lowercased key.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn lookup(&self, table: Table, key: &str) -> Option<&IconEntry> {
        self.table (table).get (key)
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  len
    //
    //  Number of entries in one table.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn len(&self, table: Table) -> usize {
        self.table (table).len()
    }





    fn table(&self, table: Table) -> &IconTable {
        match table {
            Table::FileNames              => &self.file_names,
            Table::FolderNames            => &self.folder_names,
            Table::FileExtensions         => &self.file_extensions,
            Table::LanguageIds            => &self.language_ids,
            Table::FallbackFileNames      => &self.fallback_file_names,
            Table::FallbackFileExtensions => &self.fallback_file_extensions,
            Table::LightFileNames         => &self.light_file_names,
            Table::LightFolderNames       => &self.light_folder_names,
            Table::LightFileExtensions    => &self.light_file_extensions,
        }
    }
}





fn to_table(pairs: &[(&str, &str)]) -> IconTable {
    pairs.iter()
        .map (|&(key, icon)| (key.to_string(), IconEntry::from (icon)))
        .collect()
}
