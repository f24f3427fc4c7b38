// config/mod.rs — User settings and their sources
//
// Settings come from three layers, later layers winning:
//
//    built-in defaults → settings store (iconSize, iconPack)
//    → MIE environment variable (CLI only)
//
// Config remembers which layer supplied each value.  Store values are
// never rejected: an unknown size or pack degrades to the default.  The
// environment variable is validated entry by entry and problems are
// collected in a ValidationResult for the CLI to report.

mod env_overrides;
mod store;

use std::fmt;

use crate::environment_provider::{DefaultEnvironmentProvider, EnvironmentProvider};
use crate::icon_pack::ActivePack;
use crate::rate_shaper::DEFAULT_RUSH_BATCH;

pub use store::{JsonFileSettingsStore, MemorySettingsStore, SettingChange, SettingsStore};





/// Environment variable name
pub const MIE_ENV_VAR_NAME: &str = "MIE";

/// Settings store keys
pub const KEY_ICON_SIZE: &str = "iconSize";
pub const KEY_ICON_PACK: &str = "iconPack";





////////////////////////////////////////////////////////////////////////////////

/// Icon size tier.  The stylesheet maps each tier to a scale factor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum IconSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl IconSize
//
////////////////////////////////////////////////////////////////////////////////

impl IconSize {
    pub const ALL: [IconSize; 4] = [IconSize::Sm, IconSize::Md, IconSize::Lg, IconSize::Xl];





    pub fn from_name(name: &str) -> Option<IconSize> {
        match name.trim() {
            "sm" => Some (IconSize::Sm),
            "md" => Some (IconSize::Md),
            "lg" => Some (IconSize::Lg),
            "xl" => Some (IconSize::Xl),
            _    => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            IconSize::Sm => "sm",
            IconSize::Md => "md",
            IconSize::Lg => "lg",
            IconSize::Xl => "xl",
        }
    }

    /// Scale factor relative to the host's own icon size.
    pub fn scale(&self) -> f32 {
        match self {
            IconSize::Sm => 0.875,
            IconSize::Md => 1.0,
            IconSize::Lg => 1.125,
            IconSize::Xl => 1.25,
        }
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str (self.name())
    }
}





////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    IconSize,
    IconPack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingSource {
    Default,
    Store,
    Environment,
}





#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub icon_size:  IconSize,
    pub icon_pack:  ActivePack,
    pub rush_batch: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            icon_size:  IconSize::default(),
            icon_pack:  ActivePack::default(),
            rush_batch: DEFAULT_RUSH_BATCH,
        }
    }
}





////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    pub message:             String,
    pub entry:               String,
    pub invalid_text:        String,
    pub invalid_text_offset: usize,
}





#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ErrorInfo>,
}

impl ValidationResult {
    pub fn has_issues(&self) -> bool {
        !self.errors.is_empty()
    }
}





////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone)]
pub struct Config {
    settings:          Settings,
    size_source:       SettingSource,
    pack_source:       SettingSource,
    last_parse_result: ValidationResult,
}





impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl Config
//
////////////////////////////////////////////////////////////////////////////////

impl Config {

    ////////////////////////////////////////////////////////////////////////////
    //
    //  new
    //
    //  Built-in defaults only.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn new() -> Self {
        Config {
            settings:          Settings::default(),
            size_source:       SettingSource::Default,
            pack_source:       SettingSource::Default,
            last_parse_result: ValidationResult::default(),
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  load
    //
    //  Defaults overlaid with whatever the store holds.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn load(store: &dyn SettingsStore) -> Self {
        let mut config = Self::new();

        for key in [KEY_ICON_SIZE, KEY_ICON_PACK] {
            if let Some (value) = store.get (key) {
                config.apply_store_value (key, &value);
            }
        }

        config
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  load_with_environment
    //
    //  load() plus the MIE environment variable from the process
    //  environment.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn load_with_environment(store: &dyn SettingsStore) -> Self {
        Self::load_with_provider (store, &DefaultEnvironmentProvider)
    }

    pub fn load_with_provider(store: &dyn SettingsStore, provider: &dyn EnvironmentProvider) -> Self {
        let mut config = Self::load (store);
        config.apply_environment_overrides (provider);
        config
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  apply_store_value
    //
    //  Apply one store entry (at load or on a change notification).
    //  Returns the setting it touched, or None for keys we do not own.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn apply_store_value(&mut self, key: &str, value: &str) -> Option<SettingKey> {
        match key {
            KEY_ICON_SIZE => {
                let size = IconSize::from_name (value).unwrap_or_else (|| {
                    tracing::warn!(target: "material_icons_ext::config", value, "unknown icon size, using default");
                    IconSize::default()
                });

                self.settings.icon_size = size;
                self.size_source        = SettingSource::Store;
                Some (SettingKey::IconSize)
            }

            KEY_ICON_PACK => {
                self.settings.icon_pack = ActivePack::from_name (value);
                self.pack_source        = SettingSource::Store;
                Some (SettingKey::IconPack)
            }

            _ => {
                tracing::trace!(target: "material_icons_ext::config", key, "ignoring unrelated store key");
                None
            }
        }
    }





    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn source(&self, key: SettingKey) -> SettingSource {
        match key {
            SettingKey::IconSize => self.size_source,
            SettingKey::IconPack => self.pack_source,
        }
    }

    /// Problems found in the MIE environment variable by the last load.
    pub fn validate_environment_variable(&self) -> &ValidationResult {
        &self.last_parse_result
    }
}





#[cfg(test)]
mod tests {
    use super::*;

    ////////////////////////////////////////////////////////////////////////////
    //
    //  size_names_round_trip
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn size_names_round_trip() {
        for size in IconSize::ALL {
            assert_eq!(IconSize::from_name(size.name()), Some(size));
        }
        assert_eq!(IconSize::from_name("huge"), None);
        assert_eq!(IconSize::default(), IconSize::Md);
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  scales_increase_with_size
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn scales_increase_with_size() {
        let scales: Vec<f32> = IconSize::ALL.iter().map(|s| s.scale()).collect();
        assert_eq!(scales, vec![0.875, 1.0, 1.125, 1.25]);
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  defaults_without_store_values
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn defaults_without_store_values() {
        let config = Config::load(&MemorySettingsStore::new());

        assert_eq!(*config.settings(), Settings::default());
        assert_eq!(config.settings().rush_batch, 90);
        assert_eq!(config.source(SettingKey::IconSize), SettingSource::Default);
        assert_eq!(config.source(SettingKey::IconPack), SettingSource::Default);
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  store_values_apply
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn store_values_apply() {
        let store = MemorySettingsStore::with_values([(KEY_ICON_SIZE, "xl"), (KEY_ICON_PACK, "vue_vuex")]);
        let config = Config::load(&store);

        assert_eq!(config.settings().icon_size, IconSize::Xl);
        assert_eq!(config.settings().icon_pack, ActivePack::VueVuex);
        assert_eq!(config.source(SettingKey::IconSize), SettingSource::Store);
        assert_eq!(config.source(SettingKey::IconPack), SettingSource::Store);
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  invalid_store_values_degrade
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn invalid_store_values_degrade() {
        let store = MemorySettingsStore::with_values([(KEY_ICON_SIZE, "gigantic"), (KEY_ICON_PACK, "svelte")]);
        let config = Config::load(&store);

        assert_eq!(config.settings().icon_size, IconSize::Md);
        assert_eq!(config.settings().icon_pack, ActivePack::None);
        assert!(!config.validate_environment_variable().has_issues());
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  unrelated_keys_are_ignored
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn unrelated_keys_are_ignored() {
        let mut config = Config::new();
        assert_eq!(config.apply_store_value("theme", "dark"), None);
        assert_eq!(config.apply_store_value(KEY_ICON_SIZE, "sm"), Some(SettingKey::IconSize));
        assert_eq!(config.settings().icon_size, IconSize::Sm);
    }
}
