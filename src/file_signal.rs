// file_signal.rs — Per-row naming signals
//
// A FileSignal is what the resolver sees of a listing row: its name, the
// lowercased name, the parsed extension and the entry-type flags.  One is
// built per row-processing run and dropped once the icon is decided.

use std::sync::LazyLock;

use regex::Regex;





/// Trailing extension, lazily preferring the compound suffixes that
/// tooling treats as a single unit over the last dot-segment.
static EXTENSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*?[.](?P<ext>xml\.dist|xml\.dist\.sample|yml\.dist|[A-Za-z0-9_]+)$")
        .expect("extension pattern is valid")
});





////////////////////////////////////////////////////////////////////////////////

/// Entry-type flags reported by the provider for a row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryKind {
    pub is_directory: bool,
    pub is_submodule: bool,
    pub is_symlink:   bool,
}





#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSignal {
    pub name:       String,
    pub lower_name: String,
    pub extension:  Option<String>,
    pub kind:       EntryKind,
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl FileSignal
//
////////////////////////////////////////////////////////////////////////////////

impl FileSignal {

    ////////////////////////////////////////////////////////////////////////////
    //
    //  new
    //
    //  Build a signal for an already-extracted name.  Returns None for an
    //  empty name; nothing can be resolved from it.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn new(name: &str, kind: EntryKind) -> Option<Self> {
        if name.is_empty() {
            return None;
        }

        Some (FileSignal {
            name:       name.to_string(),
            lower_name: name.to_lowercase(),
            extension:  parse_extension (name).map (str::to_string),
            kind,
        })
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  from_row_text
    //
    //  Build a signal from the raw text of a row's filename element.
    //  Listings collapse single-child folder chains into "a/b/c"; only the
    //  first segment names this row's entry.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn from_row_text(text: &str, kind: EntryKind) -> Option<Self> {
        Self::new (first_path_segment (text), kind)
    }





    pub fn is_directory(&self) -> bool {
        self.kind.is_directory
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  parse_extension
//
//  "a.xml.dist" → "xml.dist", "a.tar.gz" → "gz", "Makefile" → None.
//  Names ending in a dot, or whose last segment has characters outside
//  [A-Za-z0-9_], have no extension.
//
////////////////////////////////////////////////////////////////////////////////

pub fn parse_extension(name: &str) -> Option<&str> {
    EXTENSION_PATTERN
        .captures (name)
        .and_then (|caps| caps.name ("ext"))
        .map (|m| m.as_str())
}





////////////////////////////////////////////////////////////////////////////////
//
//  first_path_segment
//
//  Text before the first '/', trimmed.
//
////////////////////////////////////////////////////////////////////////////////

pub fn first_path_segment(text: &str) -> &str {
    text.split ('/').next().unwrap_or ("").trim()
}





#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compound_extensions_are_whole_units() {
        assert_eq!(parse_extension("a.xml.dist"), Some("xml.dist"));
        assert_eq!(parse_extension("a.xml.dist.sample"), Some("xml.dist.sample"));
        assert_eq!(parse_extension("a.yml.dist"), Some("yml.dist"));
        assert_eq!(parse_extension("phpunit.xml.dist"), Some("xml.dist"));
    }

    #[test]
    fn other_multi_dot_names_use_last_segment() {
        assert_eq!(parse_extension("a.tar.gz"), Some("gz"));
        assert_eq!(parse_extension("app.service.ts"), Some("ts"));
        assert_eq!(parse_extension("a.dist"), Some("dist"));
    }

    #[test]
    fn names_without_extension() {
        assert_eq!(parse_extension("Makefile"), None);
        assert_eq!(parse_extension(""), None);
        assert_eq!(parse_extension("trailing."), None);
        assert_eq!(parse_extension("weird.ex-t"), None);
    }

    #[test]
    fn dotfiles_have_an_extension() {
        assert_eq!(parse_extension(".gitignore"), Some("gitignore"));
        assert_eq!(parse_extension(".env.local"), Some("local"));
    }

    #[test]
    fn extension_keeps_case() {
        assert_eq!(parse_extension("IMAGE.PNG"), Some("PNG"));
    }

    #[test]
    fn first_segment_is_trimmed() {
        assert_eq!(first_path_segment("  src/main/java "), "src");
        assert_eq!(first_path_segment(" README.md \n"), "README.md");
        assert_eq!(first_path_segment("/leading"), "");
        assert_eq!(first_path_segment(""), "");
    }

    #[test]
    fn signal_from_row_text() {
        let kind = EntryKind { is_directory: true, ..EntryKind::default() };
        let signal = FileSignal::from_row_text(" Src/Main ", kind).unwrap();

        assert_eq!(signal.name, "Src");
        assert_eq!(signal.lower_name, "src");
        assert_eq!(signal.extension, None);
        assert!(signal.is_directory());
    }

    #[test]
    fn empty_row_text_yields_no_signal() {
        assert!(FileSignal::from_row_text("   ", EntryKind::default()).is_none());
        assert!(FileSignal::from_row_text("/x", EntryKind::default()).is_none());
    }
}
