// resolver.rs — Icon resolution engine
//
// Maps a FileSignal to a single icon through a strict priority chain:
//
//    submodule → symlink → name → lowercase name → extension
//    → language id → fallback name → fallback lowercase name
//    → fallback extension → default
//
// followed by the light-theme override and, last, the icon pack.  Each
// step short-circuits; a miss anywhere is just "try the next step".

use crate::file_signal::FileSignal;
use crate::icon_mapping::{ICON_FILE, ICON_FOLDER, ICON_FOLDER_GIT, ICON_FOLDER_SYMLINK};
use crate::icon_pack::{ActivePack, IconPackCatalog};
use crate::reference_tables::{IconEntry, ReferenceTables, Table};





////////////////////////////////////////////////////////////////////////////////

/// Which step of the chain produced the icon.  Reported alongside the icon
/// so tests and the CLI can tell a table hit from a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSource {
    Submodule,
    Symlink,
    Name,
    LowercaseName,
    Extension,
    LanguageId,
    FallbackName,
    FallbackLowercaseName,
    FallbackExtension,
    Default,
    Light,
    Pack,
}





#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub icon:   IconEntry,
    pub source: MatchSource,
}





////////////////////////////////////////////////////////////////////////////////

pub struct IconResolver {
    tables:  ReferenceTables,
    catalog: IconPackCatalog,
}





impl Default for IconResolver {
    fn default() -> Self {
        Self::new (ReferenceTables::with_defaults(), IconPackCatalog::bundled())
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl IconResolver
//
////////////////////////////////////////////////////////////////////////////////

impl IconResolver {

    pub fn new(tables: ReferenceTables, catalog: IconPackCatalog) -> Self {
        IconResolver { tables, catalog }
    }





    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    pub fn catalog(&self) -> &IconPackCatalog {
        &self.catalog
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  resolve
    //
    //  Icon for one entry.  Always Some for a valid signal; the Option is
    //  kept so callers treat "nothing to change" uniformly.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn resolve(&self, signal: &FileSignal, is_light_theme: bool, pack: ActivePack) -> Option<IconEntry> {
        self.resolve_detailed (signal, is_light_theme, pack).map (|r| r.icon)
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  resolve_detailed
    //
    //  resolve() plus the step that produced the icon.
    //
    //  The light override is skipped for the submodule/symlink icons; the
    //  pack lookup is not, since it is keyed on the name alone.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn resolve_detailed(&self, signal: &FileSignal, is_light_theme: bool, pack: ActivePack) -> Option<Resolution> {
        if signal.name.is_empty() {
            return None;
        }

        let mut resolution = self.resolve_primary (signal);

        let fixed = matches!(resolution.source, MatchSource::Submodule | MatchSource::Symlink);

        if is_light_theme && !fixed {
            if let Some (icon) = self.resolve_light (signal) {
                resolution = Resolution { icon, source: MatchSource::Light };
            }
        }

        if let Some (icon) = self.catalog.pack_match (pack, &signal.lower_name) {
            resolution = Resolution { icon, source: MatchSource::Pack };
        }

        Some (resolution)
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  resolve_primary
    //
    //  Steps 1–10 of the chain.  Directories only ever consult the folder
    //  table; every extension- and language-keyed step is file-only.
    //
    ////////////////////////////////////////////////////////////////////////////

    fn resolve_primary(&self, signal: &FileSignal) -> Resolution {
        let found = |icon: &IconEntry, source| Resolution { icon: icon.clone(), source };

        if signal.kind.is_submodule {
            return Resolution { icon: IconEntry::from (ICON_FOLDER_GIT), source: MatchSource::Submodule };
        }

        if signal.kind.is_symlink {
            return Resolution { icon: IconEntry::from (ICON_FOLDER_SYMLINK), source: MatchSource::Symlink };
        }

        let name_table = if signal.is_directory() { Table::FolderNames } else { Table::FileNames };

        if let Some (icon) = self.tables.lookup (name_table, &signal.name) {
            return found (icon, MatchSource::Name);
        }

        if let Some (icon) = self.tables.lookup (name_table, &signal.lower_name) {
            return found (icon, MatchSource::LowercaseName);
        }

        if signal.is_directory() {
            return Resolution { icon: IconEntry::from (ICON_FOLDER), source: MatchSource::Default };
        }

        let extension = signal.extension.as_deref();

        let steps: [(Table, Option<&str>, MatchSource); 5] = [
            (Table::FileExtensions,         extension,                         MatchSource::Extension),
            (Table::LanguageIds,            extension,                         MatchSource::LanguageId),
            (Table::FallbackFileNames,      Some (signal.name.as_str()),       MatchSource::FallbackName),
            (Table::FallbackFileNames,      Some (signal.lower_name.as_str()), MatchSource::FallbackLowercaseName),
            (Table::FallbackFileExtensions, extension,                         MatchSource::FallbackExtension),
        ];

        for (table, key, source) in steps {
            let Some (key) = key else { continue };

            if let Some (icon) = self.tables.lookup (table, key) {
                return found (icon, source);
            }
        }

        Resolution { icon: IconEntry::from (ICON_FILE), source: MatchSource::Default }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  resolve_light
    //
    //  Light-theme variant for the same keys, if one exists.
    //
    ////////////////////////////////////////////////////////////////////////////

    fn resolve_light(&self, signal: &FileSignal) -> Option<IconEntry> {
        if signal.is_directory() {
            return self.tables.lookup (Table::LightFolderNames, &signal.name).cloned();
        }

        self.tables.lookup (Table::LightFileNames, &signal.name)
            .or_else (|| {
                signal.extension.as_deref()
                    .and_then (|ext| self.tables.lookup (Table::LightFileExtensions, ext))
            })
            .cloned()
    }
}
