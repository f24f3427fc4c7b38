// provider/hosts.rs — Per-host listing layouts
//
// One ProviderConfig per supported Git host.  Selectors are written
// against the host's repository file listing (and, where it has one, the
// file tree in the side panel).  Hosts whose replace mode is Swap list the
// marker image among their icon selectors so a re-run finds the icon it
// swapped in.

use crate::provider::{OnAdd, ProviderConfig, ReplaceMode, Rule, Selectors, ThemeRule};





pub static GITHUB: ProviderConfig = ProviderConfig {
    selectors: Selectors {
        row:      ".js-navigation-container[role=grid] > .js-navigation-item, \
                   file-tree .ActionList-content, \
                   a.tree-browser-result, \
                   .PRIVATE_TreeView-item-content, \
                   .react-directory-filename-column",
        filename: "div[role=\"rowheader\"] > span, \
                   .ActionList-item-label, \
                   a.tree-browser-result > marked-text, \
                   .PRIVATE_TreeView-item-content-text, \
                   .react-directory-filename-column a",
        icon:     ".octicon-file, \
                   .octicon-file-directory-fill, \
                   .octicon-file-directory-open-fill, \
                   .octicon-file-submodule, \
                   .octicon-file-symlink-file, \
                   .react-directory-filename-column > svg, \
                   img[data-material-icons-extension=\"icon\"]",
    },
    theme:     ThemeRule::ColorModeAttribute,
    directory: &[
        Rule::IconAttribute { name: "aria-label", value: "Directory" },
        Rule::IconClass ("octicon-file-directory-fill"),
        Rule::IconClass ("octicon-file-directory-open-fill"),
        Rule::IconClass ("icon-directory"),
    ],
    submodule: &[
        Rule::IconAttribute { name: "aria-label", value: "Submodule" },
        Rule::IconClass ("octicon-file-submodule"),
    ],
    symlink:   &[
        Rule::IconAttribute { name: "aria-label", value: "Symlink Directory" },
    ],
    replace:   ReplaceMode::Swap,
    on_add:    OnAdd::None,
};





pub static BITBUCKET: ProviderConfig = ProviderConfig {
    selectors: Selectors {
        row:      "table[data-qa=\"repository-directory\"] td > a",
        filename: "span",
        icon:     "svg, img[data-material-icons-extension=\"icon\"]",
    },
    theme:     ThemeRule::AlwaysLight,
    directory: &[
        Rule::IconMatches ("[aria-label=\"Directory,\"] > *"),
    ],
    submodule: &[
        Rule::IconMatches ("[aria-label=\"Submodule,\"] > *"),
    ],
    symlink:   &[],
    replace:   ReplaceMode::Swap,
    on_add:    OnAdd::None,
};





pub static GITEA: ProviderConfig = ProviderConfig {
    selectors: Selectors {
        row:      "#repo-files-table .repo-file-item, \
                   #repo-files-table tbody tr",
        filename: ".repo-file-cell.name > a, td.name a.entry-name, td.name a.muted",
        icon:     "svg.octicon-file, \
                   svg.octicon-file-directory-fill, \
                   svg.octicon-file-submodule, \
                   svg.octicon-file-directory-symlink, \
                   svg.octicon-file-symlink-file, \
                   img[data-material-icons-extension=\"icon\"]",
    },
    theme:     ThemeRule::DarkWhen ("html[data-theme*=\"dark\"], body.theme-arc-green"),
    directory: &[
        Rule::IconClass ("octicon-file-directory-fill"),
    ],
    submodule: &[
        Rule::IconClass ("octicon-file-submodule"),
    ],
    symlink:   &[
        Rule::IconClass ("octicon-file-directory-symlink"),
    ],
    replace:   ReplaceMode::Swap,
    on_add:    OnAdd::None,
};





pub static AZURE: ProviderConfig = ProviderConfig {
    selectors: Selectors {
        row:      "table.bolt-table tbody > a, .repos-changes-explorer-tree .bolt-tree-row",
        filename: "span.text-ellipsis",
        icon:     "span.icon-margin",
    },
    theme:     ThemeRule::DarkWhen ("body.ms-vss-web-vsts-theme-dark"),
    directory: &[
        Rule::IconClass ("repos-folder-icon"),
        Rule::IconClass ("repos-folder-open-icon"),
    ],
    submodule: &[],
    symlink:   &[],
    replace:   ReplaceMode::HideAndInsert,
    on_add:    OnAdd::WatchAttribute ("aria-expanded"),
};





pub static GITLAB: ProviderConfig = ProviderConfig {
    selectors: Selectors {
        row:      "table[data-testid=\"file-tree-table\"] tr.tree-item, \
                   .file-row, \
                   .tree-list-holder .file-row",
        filename: "td.tree-item-file-name a span, .file-row-name",
        icon:     "td.tree-item-file-name svg, td.tree-item-file-name i, .file-row-name svg",
    },
    theme:     ThemeRule::DarkWhen ("body.gl-dark, html.gl-dark"),
    directory: &[
        Rule::IconAttribute { name: "data-testid", value: "folder-icon" },
        Rule::IconAttribute { name: "data-testid", value: "folder-open-icon" },
        Rule::IconClass ("folder-icon"),
    ],
    submodule: &[
        Rule::IconAttribute { name: "data-testid", value: "folder-git-icon" },
    ],
    symlink:   &[
        Rule::IconAttribute { name: "data-testid", value: "symlink-icon" },
    ],
    replace:   ReplaceMode::HideAndInsert,
    on_add:    OnAdd::None,
};





pub static GITEE: ProviderConfig = ProviderConfig {
    selectors: Selectors {
        row:      "#git-project-content .tree-content .row.tree-item",
        filename: ".tree-list-item > a",
        icon:     "i.iconfont, img[data-material-icons-extension=\"icon\"]",
    },
    theme:     ThemeRule::AlwaysLight,
    directory: &[
        Rule::IconClass ("icon-folders"),
    ],
    submodule: &[
        Rule::IconClass ("icon-submodule"),
    ],
    symlink:   &[
        Rule::IconClass ("icon-file-shortcut"),
    ],
    replace:   ReplaceMode::Swap,
    on_add:    OnAdd::None,
};





pub static SOURCEFORGE: ProviderConfig = ProviderConfig {
    selectors: Selectors {
        row:      "table#files_list tbody tr, table.directory tbody tr",
        filename: "th[headers=\"files_name_h\"] span.name, td.nowrap > a",
        icon:     "th[headers=\"files_name_h\"] svg, td.nowrap > a > i.fa, img[data-material-icons-extension=\"icon\"]",
    },
    theme:     ThemeRule::AlwaysLight,
    directory: &[
        Rule::RowMatches ("tr.folder"),
        Rule::IconClass ("fa-folder"),
    ],
    submodule: &[],
    symlink:   &[
        Rule::IconClass ("fa-link"),
    ],
    replace:   ReplaceMode::Swap,
    on_add:    OnAdd::None,
};
