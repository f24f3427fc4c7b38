// icon_pack.rs — Framework icon packs
//
// An icon pack is an optional secondary theme selected in the settings.
// Folder packs (angular, react, vue) probe the asset catalog for a
// "folder-<pack>-<name>" icon; the nest pack matches file-name suffixes.
// A pack hit overrides whatever the primary resolver produced.

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::icon_mapping::{self, ICON_ASSET_SUFFIX};
use crate::reference_tables::IconEntry;





////////////////////////////////////////////////////////////////////////////////

/// The pack selected in the settings.  At most one is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ActivePack {
    #[default]
    None,
    Angular,
    AngularNgrx,
    React,
    ReactRedux,
    Vue,
    VueVuex,
    Nest,
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl ActivePack
//
////////////////////////////////////////////////////////////////////////////////

impl ActivePack {
    pub const ALL: [ActivePack; 8] = [
        ActivePack::None,
        ActivePack::Angular,
        ActivePack::AngularNgrx,
        ActivePack::React,
        ActivePack::ReactRedux,
        ActivePack::Vue,
        ActivePack::VueVuex,
        ActivePack::Nest,
    ];





    ////////////////////////////////////////////////////////////////////////////
    //
    //  from_name
    //
    //  Settings name → pack.  Anything unrecognized (including the empty
    //  string) is ActivePack::None: a bad setting disables the pack, it
    //  never fails.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn from_name(name: &str) -> ActivePack {
        match name.trim() {
            "angular"      => ActivePack::Angular,
            "angular_ngrx" => ActivePack::AngularNgrx,
            "react"        => ActivePack::React,
            "react_redux"  => ActivePack::ReactRedux,
            "vue"          => ActivePack::Vue,
            "vue_vuex"     => ActivePack::VueVuex,
            "nest"         => ActivePack::Nest,
            _              => ActivePack::None,
        }
    }





    pub fn name(&self) -> &'static str {
        match self {
            ActivePack::None        => "none",
            ActivePack::Angular     => "angular",
            ActivePack::AngularNgrx => "angular_ngrx",
            ActivePack::React       => "react",
            ActivePack::ReactRedux  => "react_redux",
            ActivePack::Vue         => "vue",
            ActivePack::VueVuex     => "vue_vuex",
            ActivePack::Nest        => "nest",
        }
    }
}

impl fmt::Display for ActivePack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  NEST_PATTERNS
//
//  Ordered (suffix pattern, icon) pairs; first match wins.
//
////////////////////////////////////////////////////////////////////////////////

static NEST_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        ("controller", "nest-controller"),
        ("middleware", "nest-middleware"),
        ("module",     "nest-module"),
        ("service",    "nest-service"),
        ("decorator",  "nest-decorator"),
        ("pipe",       "nest-pipe"),
        ("filter",     "nest-filter"),
        ("gateway",    "nest-gateway"),
        ("guard",      "nest-guard"),
        ("resolver",   "nest-resolver"),
    ]
    .into_iter()
    .map(|(kind, icon)| {
        let pattern = Regex::new(&format!(r"\.{kind}\.(t|j)s$")).expect("nest pattern is valid");
        (pattern, icon)
    })
    .collect()
});





////////////////////////////////////////////////////////////////////////////////

/// Set of known icon asset file names ("<id>.svg").
#[derive(Debug, Clone, Default)]
pub struct IconPackCatalog {
    assets: HashSet<String>,
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl IconPackCatalog
//
////////////////////////////////////////////////////////////////////////////////

impl IconPackCatalog {

    ////////////////////////////////////////////////////////////////////////////
    //
    //  bundled
    //
    //  Catalog of every asset shipped with the default tables.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn bundled() -> Self {
        Self::from_asset_names (icon_mapping::bundled_asset_names())
    }





    pub fn from_asset_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        IconPackCatalog {
            assets: names.into_iter().map (Into::into).collect(),
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  contains
    //
    //  True if "<icon_id>.svg" is a known asset.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn contains(&self, icon_id: &str) -> bool {
        self.assets.contains (&format!("{icon_id}{ICON_ASSET_SUFFIX}"))
    }





    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  pack_match
    //
    //  Pack-specific icon for a lowercased entry name, or None when no pack
    //  is active or the pack has nothing for this name.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn pack_match(&self, pack: ActivePack, lower_name: &str) -> Option<IconEntry> {
        match pack {
            ActivePack::None => None,

            ActivePack::Angular | ActivePack::AngularNgrx => {
                self.folder_icon ("folder-angular", lower_name)
            }

            ActivePack::React | ActivePack::ReactRedux => {
                self.folder_icon ("folder-react", lower_name)
            }

            ActivePack::Vue | ActivePack::VueVuex => {
                self.folder_icon ("folder-vuex", lower_name)
                    .or_else (|| self.folder_icon ("folder-vue", lower_name))
                    .or_else (|| (lower_name == "vue").then (|| IconEntry::from ("folder-vue")))
            }

            ActivePack::Nest => {
                NEST_PATTERNS.iter()
                    .find (|(pattern, _)| pattern.is_match (lower_name))
                    .map (|&(_, icon)| IconEntry::from (icon))
            }
        }
    }





    fn folder_icon(&self, prefix: &str, lower_name: &str) -> Option<IconEntry> {
        if lower_name.is_empty() {
            return None;
        }

        let icon_id = format!("{prefix}-{lower_name}");
        self.contains (&icon_id).then (|| IconEntry::new (icon_id))
    }
}
