// provider/mod.rs — Git host adapters
//
// A Provider is one supported Git host.  Everything host-specific is data
// in a static ProviderConfig (see hosts.rs): where rows, names and icons
// live in the page, how the theme and entry types are read, and how the
// icon is replaced.  CompiledProvider parses the selectors once and
// answers those questions against a Document.

pub mod hosts;

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::dom::{Document, NodeId, Selector};
use crate::ehm::AppError;
use crate::file_signal::EntryKind;
use crate::row_processor::{ICON_MARKER_ATTRIBUTE, ICON_MARKER_VALUE};





////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    GitHub,
    Bitbucket,
    Gitea,
    AzureDevOps,
    GitLab,
    Gitee,
    SourceForge,
}





/// Host patterns in detection order; the first match wins.
static HOST_PATTERNS: LazyLock<Vec<(Regex, Provider)>> = LazyLock::new(|| {
    [
        (r"^(?:[a-z0-9-]+\.)*github\.com$",      Provider::GitHub),
        (r"^(?:[a-z0-9-]+\.)*bitbucket\.org$",   Provider::Bitbucket),
        (r"^(?:[a-z0-9-]+\.)*gitea\.com$",       Provider::Gitea),
        (r"^dev\.azure\.com$",                   Provider::AzureDevOps),
        (r"^(?:[a-z0-9-]+\.)*gitlab\.com$",      Provider::GitLab),
        (r"^(?:[a-z0-9-]+\.)*gitee\.com$",       Provider::Gitee),
        (r"^(?:[a-z0-9-]+\.)*sourceforge\.net$", Provider::SourceForge),
    ]
    .into_iter()
    .map(|(pattern, provider)| (Regex::new(pattern).expect("host pattern is valid"), provider))
    .collect()
});





////////////////////////////////////////////////////////////////////////////////
//
//  impl Provider
//
////////////////////////////////////////////////////////////////////////////////

impl Provider {
    pub const ALL: [Provider; 7] = [
        Provider::GitHub,
        Provider::Bitbucket,
        Provider::Gitea,
        Provider::AzureDevOps,
        Provider::GitLab,
        Provider::Gitee,
        Provider::SourceForge,
    ];





    ////////////////////////////////////////////////////////////////////////////
    //
    //  detect
    //
    //  Provider for a page address, by host name.  Addresses that do not
    //  parse, have no host, or name an unsupported host give None.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn detect(address: &str) -> Option<Provider> {
        let url  = Url::parse (address.trim()).ok()?;
        let host = url.host_str()?.to_ascii_lowercase();

        HOST_PATTERNS
            .iter()
            .find (|(pattern, _)| pattern.is_match (&host))
            .map (|&(_, provider)| provider)
    }





    pub fn name(&self) -> &'static str {
        match self {
            Provider::GitHub      => "github",
            Provider::Bitbucket   => "bitbucket",
            Provider::Gitea       => "gitea",
            Provider::AzureDevOps => "azure",
            Provider::GitLab      => "gitlab",
            Provider::Gitee       => "gitee",
            Provider::SourceForge => "sourceforge",
        }
    }

    pub fn config(&self) -> &'static ProviderConfig {
        match self {
            Provider::GitHub      => &hosts::GITHUB,
            Provider::Bitbucket   => &hosts::BITBUCKET,
            Provider::Gitea       => &hosts::GITEA,
            Provider::AzureDevOps => &hosts::AZURE,
            Provider::GitLab      => &hosts::GITLAB,
            Provider::Gitee       => &hosts::GITEE,
            Provider::SourceForge => &hosts::SOURCEFORGE,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str (self.name())
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  Static host description
//
////////////////////////////////////////////////////////////////////////////////

#[derive(Debug)]
pub struct Selectors {
    /// One listing entry.
    pub row:      &'static str,

    /// Element (within the row) whose text is the entry name.
    pub filename: &'static str,

    /// The host's icon element within the row.
    pub icon:     &'static str,
}

/// Entry-type test.  A flag is set when any rule in its list holds.
#[derive(Debug)]
pub enum Rule {
    IconAttribute { name: &'static str, value: &'static str },
    IconClass(&'static str),
    IconMatches(&'static str),

    /// The row, or an element inside it, matches.
    RowMatches(&'static str),
}

#[derive(Debug)]
pub enum ThemeRule {
    AlwaysLight,

    /// Light unless the page matches this selector.
    DarkWhen(&'static str),

    /// `data-color-mode` on `<html>`: light, dark, or auto (follow the
    /// user's colour-scheme preference).
    ColorModeAttribute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceMode {
    /// Copy the old icon's attributes onto the new image and swap nodes.
    Swap,

    /// Hide the old icon and put the new image in front of it.
    HideAndInsert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnAdd {
    None,

    /// Re-process the row whenever this attribute changes on it.
    WatchAttribute(&'static str),
}

#[derive(Debug)]
pub struct ProviderConfig {
    pub selectors: Selectors,
    pub theme:     ThemeRule,
    pub directory: &'static [Rule],
    pub submodule: &'static [Rule],
    pub symlink:   &'static [Rule],
    pub replace:   ReplaceMode,
    pub on_add:    OnAdd,
}





////////////////////////////////////////////////////////////////////////////////
//
//  Compiled form
//
////////////////////////////////////////////////////////////////////////////////

#[derive(Debug)]
enum CompiledRule {
    IconAttribute { name: &'static str, value: &'static str },
    IconClass(&'static str),
    IconMatches(Selector),
    RowMatches(Selector),
}

#[derive(Debug)]
enum CompiledTheme {
    AlwaysLight,
    DarkWhen(Selector),
    ColorModeAttribute,
}





#[derive(Debug)]
pub struct CompiledProvider {
    provider:  Provider,
    row:       Selector,
    filename:  Selector,
    icon:      Selector,
    theme:     CompiledTheme,
    directory: Vec<CompiledRule>,
    submodule: Vec<CompiledRule>,
    symlink:   Vec<CompiledRule>,
    replace:   ReplaceMode,
    on_add:    OnAdd,
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl CompiledProvider
//
////////////////////////////////////////////////////////////////////////////////

impl CompiledProvider {

    pub fn compile(provider: Provider) -> Result<Self, AppError> {
        let config = provider.config();

        let theme = match config.theme {
            ThemeRule::AlwaysLight        => CompiledTheme::AlwaysLight,
            ThemeRule::DarkWhen (s)       => CompiledTheme::DarkWhen (Selector::parse (s)?),
            ThemeRule::ColorModeAttribute => CompiledTheme::ColorModeAttribute,
        };

        Ok (CompiledProvider {
            provider,
            row:       Selector::parse (config.selectors.row)?,
            filename:  Selector::parse (config.selectors.filename)?,
            icon:      Selector::parse (config.selectors.icon)?,
            theme,
            directory: compile_rules (config.directory)?,
            submodule: compile_rules (config.submodule)?,
            symlink:   compile_rules (config.symlink)?,
            replace:   config.replace,
            on_add:    config.on_add,
        })
    }





    pub fn provider(&self) -> Provider {
        self.provider
    }

    pub fn replace_mode(&self) -> ReplaceMode {
        self.replace
    }

    pub fn on_add(&self) -> OnAdd {
        self.on_add
    }

    pub fn is_row(&self, doc: &Document, node: NodeId) -> bool {
        doc.matches (node, &self.row)
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  rows
    //
    //  Every row at or below `scope`, in document order.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn rows(&self, doc: &Document, scope: NodeId) -> Vec<NodeId> {
        let mut rows = Vec::new();

        if self.is_row (doc, scope) {
            rows.push (scope);
        }

        rows.extend (doc.query_selector_all (scope, &self.row));
        rows
    }

    pub fn row_selector(&self) -> &Selector {
        &self.row
    }

    pub fn filename_element(&self, doc: &Document, row: NodeId) -> Option<NodeId> {
        doc.query_selector (row, &self.filename)
    }

    pub fn icon_element(&self, doc: &Document, row: NodeId) -> Option<NodeId> {
        doc.query_selector (row, &self.icon)
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  entry_kind
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn entry_kind(&self, doc: &Document, row: NodeId, icon: NodeId) -> EntryKind {
        let holds = |rules: &[CompiledRule]| rules.iter().any (|rule| rule.holds (doc, row, icon));

        EntryKind {
            is_directory: holds (&self.directory),
            is_submodule: holds (&self.submodule),
            is_symlink:   holds (&self.symlink),
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  is_light_theme
    //
    //  Read fresh on every call; the page can switch themes at any time.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn is_light_theme(&self, doc: &Document) -> bool {
        match &self.theme {
            CompiledTheme::AlwaysLight         => true,
            CompiledTheme::DarkWhen (selector) => !page_matches (doc, selector),

            CompiledTheme::ColorModeAttribute => {
                match doc.get_attribute (doc.document_element(), "data-color-mode") {
                    Some ("light") => true,
                    Some ("auto")  => doc.prefers_light_scheme(),
                    _              => false,
                }
            }
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  replace_icon
    //
    //  Put `new_icon` in place of the host icon `old_icon`.  Running this
    //  again for the same row never leaves more than one marker image.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn replace_icon(&self, doc: &mut Document, old_icon: NodeId, new_icon: NodeId) {
        match self.replace {
            ReplaceMode::Swap => {
                let inherited: Vec<(String, String)> = doc
                    .attributes (old_icon)
                    .iter()
                    .filter (|(name, _)| name != "src" && !name.starts_with (ICON_MARKER_ATTRIBUTE))
                    .cloned()
                    .collect();

                for (name, value) in &inherited {
                    doc.set_attribute (new_icon, name, value);
                }

                doc.replace_with (old_icon, new_icon);
            }

            ReplaceMode::HideAndInsert => {
                doc.set_attribute (old_icon, "style", "display: none");

                let previous_marker = doc
                    .previous_element_sibling (old_icon)
                    .filter (|&prev| doc.get_attribute (prev, ICON_MARKER_ATTRIBUTE) == Some (ICON_MARKER_VALUE));

                match previous_marker {
                    Some (previous) => { doc.replace_with (previous, new_icon); }
                    None            => { doc.insert_before (old_icon, new_icon); }
                }
            }
        }
    }
}





impl CompiledRule {
    fn holds(&self, doc: &Document, row: NodeId, icon: NodeId) -> bool {
        match self {
            CompiledRule::IconAttribute { name, value } => doc.get_attribute (icon, name) == Some (*value),
            CompiledRule::IconClass (class)              => doc.has_class (icon, class),
            CompiledRule::IconMatches (selector)         => doc.matches (icon, selector),
            CompiledRule::RowMatches (selector)          => {
                doc.matches (row, selector) || doc.query_selector (row, selector).is_some()
            }
        }
    }
}





fn compile_rules(rules: &'static [Rule]) -> Result<Vec<CompiledRule>, AppError> {
    rules
        .iter()
        .map (|rule| -> Result<CompiledRule, AppError> {
            Ok (match rule {
                Rule::IconAttribute { name, value } => CompiledRule::IconAttribute { name: *name, value: *value },
                Rule::IconClass (class)              => CompiledRule::IconClass (*class),
                Rule::IconMatches (s)                => CompiledRule::IconMatches (Selector::parse (s)?),
                Rule::RowMatches (s)                 => CompiledRule::RowMatches (Selector::parse (s)?),
            })
        })
        .collect()
}

fn page_matches(doc: &Document, selector: &Selector) -> bool {
    let root = doc.document_element();
    doc.matches (root, selector) || doc.query_selector (root, selector).is_some()
}
