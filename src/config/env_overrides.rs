// env_overrides.rs — MIE environment variable parsing and override application
//
// Extends impl Config with the methods that read the MIE environment
// variable and apply its entries on top of the stored settings.
//
// Format: semicolon-separated key=value entries, e.g.
//
//    MIE=size=lg;pack=react
//
// Keys are case-insensitive.  Only the settings the CLI acts on are
// accepted; the rush batch belongs to the page driver.  A bad entry is reported and skipped; the
// remaining entries still apply.

use crate::environment_provider::EnvironmentProvider;
use crate::icon_pack::ActivePack;

use super::{Config, ErrorInfo, IconSize, SettingSource, MIE_ENV_VAR_NAME};





////////////////////////////////////////////////////////////////////////////////
//
//  impl Config — env var parsing methods
//
////////////////////////////////////////////////////////////////////////////////

impl Config {

    ////////////////////////////////////////////////////////////////////////////
    //
    //  apply_environment_overrides
    //
    //  Parse MIE and apply each valid entry.  Errors from the previous parse
    //  are discarded first.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub(super) fn apply_environment_overrides(&mut self, provider: &dyn EnvironmentProvider) {
        self.last_parse_result.errors.clear();

        let Some (env_value) = provider.get_env_var (MIE_ENV_VAR_NAME) else {
            return;
        };

        for entry_raw in env_value.split (';') {
            let entry = entry_raw.trim();
            if entry.is_empty() {
                continue;
            }
            self.process_override_entry (entry);
        }

        for error in &self.last_parse_result.errors {
            tracing::warn!(
                target: "material_icons_ext::config",
                entry = %error.entry,
                "{}: {}",
                MIE_ENV_VAR_NAME,
                error.message
            );
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  process_override_entry
    //
    ////////////////////////////////////////////////////////////////////////////

    fn process_override_entry(&mut self, entry: &str) {
        let Some ((key, value)) = parse_key_and_value (entry) else {
            self.push_error ("Invalid entry format (expected key = value)", entry, entry);
            return;
        };

        match key.to_ascii_lowercase().as_str() {
            "size" => match IconSize::from_name (&value.to_ascii_lowercase()) {
                Some (size) => {
                    self.settings.icon_size = size;
                    self.size_source        = SettingSource::Environment;
                }
                None => self.push_error ("Invalid icon size (expected sm, md, lg or xl)", entry, value),
            },

            "pack" => {
                let pack = ActivePack::from_name (&value.to_ascii_lowercase());

                // "none" is the only name that may legitimately map to None.
                if pack == ActivePack::None && !value.eq_ignore_ascii_case ("none") {
                    self.push_error ("Unknown icon pack", entry, value);
                    return;
                }

                self.settings.icon_pack = pack;
                self.pack_source        = SettingSource::Environment;
            }

            _ => self.push_error ("Unknown setting", entry, key),
        }
    }





    fn push_error(&mut self, message: &str, entry: &str, invalid_text: &str) {
        self.last_parse_result.errors.push (ErrorInfo {
            message:             message.into(),
            entry:               entry.into(),
            invalid_text:        invalid_text.into(),
            invalid_text_offset: entry.find (invalid_text).unwrap_or (0),
        });
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  parse_key_and_value
//
//  Split an entry on '=' into key and value, trimming whitespace.
//
////////////////////////////////////////////////////////////////////////////////

fn parse_key_and_value(entry: &str) -> Option<(&str, &str)> {
    let eq_pos = entry.find('=')?;
    let key = entry[..eq_pos].trim();
    let value = entry[eq_pos + 1..].trim();

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}





#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MemorySettingsStore, SettingKey, KEY_ICON_SIZE};
    use crate::environment_provider::mock_environment;

    fn config_with_env(value: &str) -> Config {
        let env = mock_environment(&[(MIE_ENV_VAR_NAME, value)]);
        Config::load_with_provider(&MemorySettingsStore::new(), &env)
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  all_keys_apply
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn all_keys_apply() {
        let config = config_with_env("size=lg; PACK = react ;");

        assert_eq!(config.settings().icon_size, IconSize::Lg);
        assert_eq!(config.settings().icon_pack, ActivePack::React);
        assert_eq!(config.source(SettingKey::IconSize), SettingSource::Environment);
        assert_eq!(config.source(SettingKey::IconPack), SettingSource::Environment);
        assert!(!config.validate_environment_variable().has_issues());
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  environment_beats_store
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn environment_beats_store() {
        let store = MemorySettingsStore::with_values([(KEY_ICON_SIZE, "sm")]);
        let env = mock_environment(&[(MIE_ENV_VAR_NAME, "size=xl")]);

        let config = Config::load_with_provider(&store, &env);
        assert_eq!(config.settings().icon_size, IconSize::Xl);
        assert_eq!(config.source(SettingKey::IconSize), SettingSource::Environment);
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  missing_variable_changes_nothing
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn missing_variable_changes_nothing() {
        let config = Config::load_with_provider(&MemorySettingsStore::new(), &mock_environment(&[]));
        assert_eq!(config.source(SettingKey::IconSize), SettingSource::Default);
        assert!(!config.validate_environment_variable().has_issues());
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  bad_entries_are_reported_and_skipped
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn bad_entries_are_reported_and_skipped() {
        let config = config_with_env("size=huge;pack=svelte;rush=60;color=red;oops;pack=nest");
        let errors = &config.validate_environment_variable().errors;

        let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Invalid icon size (expected sm, md, lg or xl)",
                "Unknown icon pack",
                "Unknown setting",
                "Unknown setting",
                "Invalid entry format (expected key = value)",
            ]
        );

        assert_eq!(errors[0].invalid_text, "huge");
        assert_eq!(errors[0].invalid_text_offset, 5);
        assert_eq!(errors[2].invalid_text, "rush");
        assert_eq!(errors[3].invalid_text, "color");

        assert_eq!(config.settings().icon_size, IconSize::Md);
        assert_eq!(config.settings().icon_pack, ActivePack::Nest);
        assert_eq!(config.settings().rush_batch, 90);
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  pack_none_is_valid
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn pack_none_is_valid() {
        let config = config_with_env("pack=none");
        assert!(!config.validate_environment_variable().has_issues());
        assert_eq!(config.source(SettingKey::IconPack), SettingSource::Environment);
    }
}
