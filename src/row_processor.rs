// row_processor.rs — Per-row icon replacement
//
// One run over one listing row: read the entry name and type from the
// host markup, resolve the icon, build the replacement image and hand it
// to the host's replace strategy.  Rows that are not (yet) complete are
// skipped quietly; the rate shaper's follow-up run picks them up later.

use crate::dom::{Document, NodeId};
use crate::file_signal::FileSignal;
use crate::icon_mapping::ICON_ASSET_SUFFIX;
use crate::icon_pack::ActivePack;
use crate::provider::CompiledProvider;
use crate::reference_tables::IconEntry;
use crate::resolver::IconResolver;





/// Marks an image as ours; every attribute we own shares this prefix.
pub const ICON_MARKER_ATTRIBUTE: &str = "data-material-icons-extension";
pub const ICON_MARKER_VALUE:     &str = "icon";
pub const ICON_NAME_ATTRIBUTE:   &str = "data-material-icons-extension-iconname";
pub const FILE_NAME_ATTRIBUTE:   &str = "data-material-icons-extension-filename";

/// Set on `<body>`; the stylesheet keys the icon scale off it.
pub const SIZE_ATTRIBUTE:        &str = "data-material-icons-extension-size";

pub const DEFAULT_ASSET_BASE:    &str = "icons";





////////////////////////////////////////////////////////////////////////////////

/// Where icon images are served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconAssets {
    base_url: String,
}

impl Default for IconAssets {
    fn default() -> Self {
        Self::new (DEFAULT_ASSET_BASE)
    }
}

impl IconAssets {
    pub fn new(base_url: &str) -> Self {
        IconAssets {
            base_url: base_url.trim_end_matches ('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `<base>/<id>.svg`
    pub fn url_for(&self, icon: &IconEntry) -> String {
        format!("{}/{}{}", self.base_url, icon.as_str(), ICON_ASSET_SUFFIX)
    }
}





/// What a single run did to a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Replaced(IconEntry),
    NoFilename,
    EmptyName,
    NoIcon,
}





////////////////////////////////////////////////////////////////////////////////

pub struct RowProcessor {
    resolver: IconResolver,
    assets:   IconAssets,
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl RowProcessor
//
////////////////////////////////////////////////////////////////////////////////

impl RowProcessor {

    pub fn new(resolver: IconResolver, assets: IconAssets) -> Self {
        RowProcessor { resolver, assets }
    }

    pub fn resolver(&self) -> &IconResolver {
        &self.resolver
    }

    pub fn assets(&self) -> &IconAssets {
        &self.assets
    }

    pub fn set_assets(&mut self, assets: IconAssets) {
        self.assets = assets;
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  process
    //
    //  Replace the icon of one row.  Theme and entry flags are read from the
    //  page on every run; nothing about the row is cached between runs.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn process(
        &self,
        doc:      &mut Document,
        provider: &CompiledProvider,
        row:      NodeId,
        pack:     ActivePack,
    ) -> RowOutcome {
        let Some (filename_element) = provider.filename_element (doc, row) else {
            tracing::trace!(target: "material_icons_ext::row_processor", ?row, "no filename element");
            return RowOutcome::NoFilename;
        };

        let text = doc.text_content (filename_element);

        if crate::file_signal::first_path_segment (&text).is_empty() {
            tracing::trace!(target: "material_icons_ext::row_processor", ?row, "empty name");
            return RowOutcome::EmptyName;
        }

        let Some (icon_element) = provider.icon_element (doc, row) else {
            tracing::trace!(target: "material_icons_ext::row_processor", ?row, "no icon element");
            return RowOutcome::NoIcon;
        };

        let kind = provider.entry_kind (doc, row, icon_element);

        let Some (signal) = FileSignal::from_row_text (&text, kind) else {
            return RowOutcome::EmptyName;
        };

        let is_light = provider.is_light_theme (doc);

        let Some (icon) = self.resolver.resolve (&signal, is_light, pack) else {
            return RowOutcome::EmptyName;
        };

        let image = doc.create_element ("img");
        doc.set_attribute (image, "src",                 &self.assets.url_for (&icon));
        doc.set_attribute (image, ICON_MARKER_ATTRIBUTE, ICON_MARKER_VALUE);
        doc.set_attribute (image, ICON_NAME_ATTRIBUTE,   icon.as_str());
        doc.set_attribute (image, FILE_NAME_ATTRIBUTE,   &signal.name);

        provider.replace_icon (doc, icon_element, image);

        tracing::trace!(
            target: "material_icons_ext::row_processor",
            ?row,
            name = %signal.name,
            icon = %icon,
            "icon replaced"
        );

        RowOutcome::Replaced (icon)
    }
}





#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::Provider;
    use pretty_assertions::assert_eq;

    fn processor() -> RowProcessor {
        RowProcessor::new(IconResolver::default(), IconAssets::new("https://cdn.example/icons/"))
    }

    fn marker_images(doc: &Document, scope: NodeId) -> Vec<NodeId> {
        let selector = crate::dom::Selector::parse("img[data-material-icons-extension=\"icon\"]").unwrap();
        doc.query_selector_all(scope, &selector)
    }

    fn github_row(doc: &mut Document, name: &str, label: &str, class: &str) -> NodeId {
        let body = doc.body();
        let grid = doc.append_element(body, "div", &[("class", "js-navigation-container"), ("role", "grid")]);
        let row = doc.append_element(grid, "div", &[("class", "js-navigation-item")]);
        let cell = doc.append_element(row, "div", &[("role", "gridcell")]);
        doc.append_element(cell, "svg", &[("aria-label", label), ("class", class)]);
        let header = doc.append_element(row, "div", &[("role", "rowheader")]);
        let span = doc.append_element(header, "span", &[]);
        doc.append_text(span, name);
        row
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  asset_urls
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn asset_urls() {
        let assets = IconAssets::new("https://cdn.example/icons///");
        assert_eq!(assets.base_url(), "https://cdn.example/icons");
        assert_eq!(assets.url_for(&IconEntry::from("rust")), "https://cdn.example/icons/rust.svg");
        assert_eq!(IconAssets::default().url_for(&IconEntry::from("file")), "icons/file.svg");
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  replaces_github_file_icon
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn replaces_github_file_icon() {
        let github = CompiledProvider::compile(Provider::GitHub).unwrap();
        let mut doc = Document::new();
        let row = github_row(&mut doc, "Cargo.toml", "File", "octicon octicon-file");

        let outcome = processor().process(&mut doc, &github, row, ActivePack::None);
        assert_eq!(outcome, RowOutcome::Replaced(IconEntry::from("cargo")));

        let images = marker_images(&doc, row);
        assert_eq!(images.len(), 1);
        assert_eq!(
            doc.outer_html(images[0]),
            "<img src=\"https://cdn.example/icons/cargo.svg\" data-material-icons-extension=\"icon\" \
             data-material-icons-extension-iconname=\"cargo\" data-material-icons-extension-filename=\"Cargo.toml\" \
             aria-label=\"File\" class=\"octicon octicon-file\">"
        );
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  collapsed_folder_chain_uses_first_segment
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn collapsed_folder_chain_uses_first_segment() {
        let github = CompiledProvider::compile(Provider::GitHub).unwrap();
        let mut doc = Document::new();
        let row = github_row(&mut doc, " src/main/java ", "Directory", "octicon octicon-file-directory-fill");

        let outcome = processor().process(&mut doc, &github, row, ActivePack::None);
        assert_eq!(outcome, RowOutcome::Replaced(IconEntry::from("folder-src")));

        let image = marker_images(&doc, row)[0];
        assert_eq!(doc.get_attribute(image, FILE_NAME_ATTRIBUTE), Some("src"));
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  rerun_swaps_in_place
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn rerun_swaps_in_place() {
        let github = CompiledProvider::compile(Provider::GitHub).unwrap();
        let mut doc = Document::new();
        let row = github_row(&mut doc, "components", "Directory", "octicon octicon-file-directory-fill");
        let processor = processor();

        processor.process(&mut doc, &github, row, ActivePack::None);
        let outcome = processor.process(&mut doc, &github, row, ActivePack::React);

        assert_eq!(outcome, RowOutcome::Replaced(IconEntry::from("folder-react-components")));
        let images = marker_images(&doc, row);
        assert_eq!(images.len(), 1);
        assert_eq!(doc.get_attribute(images[0], ICON_NAME_ATTRIBUTE), Some("folder-react-components"));
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  rerun_with_hide_and_insert
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn rerun_with_hide_and_insert() {
        let gitlab = CompiledProvider::compile(Provider::GitLab).unwrap();
        let mut doc = Document::new();
        let body = doc.body();
        let table = doc.append_element(body, "table", &[("data-testid", "file-tree-table")]);
        let row = doc.append_element(table, "tr", &[("class", "tree-item")]);
        let cell = doc.append_element(row, "td", &[("class", "tree-item-file-name")]);
        let link = doc.append_element(cell, "a", &[]);
        doc.append_element(link, "svg", &[("data-testid", "folder-icon")]);
        let span = doc.append_element(link, "span", &[]);
        doc.append_text(span, "node_modules");

        let processor = processor();
        for _ in 0..3 {
            let outcome = processor.process(&mut doc, &gitlab, row, ActivePack::None);
            assert_eq!(outcome, RowOutcome::Replaced(IconEntry::from("folder-node")));
        }

        assert_eq!(marker_images(&doc, row).len(), 1);
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  light_theme_override
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn light_theme_override() {
        let github = CompiledProvider::compile(Provider::GitHub).unwrap();
        let mut doc = Document::new();
        let html = doc.document_element();
        doc.set_attribute(html, "data-color-mode", "light");
        let row = github_row(&mut doc, "pyproject.toml", "File", "octicon octicon-file");

        let outcome = processor().process(&mut doc, &github, row, ActivePack::None);
        assert_eq!(outcome, RowOutcome::Replaced(IconEntry::from("toml_light")));
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  incomplete_rows_are_skipped
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn incomplete_rows_are_skipped() {
        let github = CompiledProvider::compile(Provider::GitHub).unwrap();
        let mut doc = Document::new();
        let processor = processor();

        let empty = github_row(&mut doc, "  ", "File", "octicon octicon-file");
        assert_eq!(processor.process(&mut doc, &github, empty, ActivePack::None), RowOutcome::EmptyName);

        let no_icon = github_row(&mut doc, "README.md", "File", "something-else");
        assert_eq!(processor.process(&mut doc, &github, no_icon, ActivePack::None), RowOutcome::NoIcon);

        let body = doc.body();
        let bare = doc.append_element(body, "div", &[("class", "js-navigation-item")]);
        assert_eq!(processor.process(&mut doc, &github, bare, ActivePack::None), RowOutcome::NoFilename);

        assert!(marker_images(&doc, doc.body()).is_empty());
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  reruns_do_not_grow_the_document
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn reruns_do_not_grow_the_document() {
        let github = CompiledProvider::compile(Provider::GitHub).unwrap();
        let gitlab = CompiledProvider::compile(Provider::GitLab).unwrap();
        let processor = processor();

        let mut doc = Document::new();
        let row = github_row(&mut doc, "Cargo.toml", "File", "octicon octicon-file");
        processor.process(&mut doc, &github, row, ActivePack::None);
        let settled = doc.node_count();

        for _ in 0..1000 {
            processor.process(&mut doc, &github, row, ActivePack::None);
        }
        assert_eq!(doc.node_count(), settled);

        let mut doc = Document::new();
        let body = doc.body();
        let table = doc.append_element(body, "table", &[("data-testid", "file-tree-table")]);
        let row = doc.append_element(table, "tr", &[("class", "tree-item")]);
        let cell = doc.append_element(row, "td", &[("class", "tree-item-file-name")]);
        let link = doc.append_element(cell, "a", &[]);
        doc.append_element(link, "svg", &[("data-testid", "file-icon")]);
        let span = doc.append_element(link, "span", &[]);
        doc.append_text(span, "package.json");
        processor.process(&mut doc, &gitlab, row, ActivePack::None);
        let settled = doc.node_count();

        for _ in 0..1000 {
            processor.process(&mut doc, &gitlab, row, ActivePack::None);
        }
        assert_eq!(doc.node_count(), settled);
        assert_eq!(marker_images(&doc, row).len(), 1);
    }
}
