// stylesheet.rs — Icon size stylesheet
//
// One rule per size tier, keyed off the size attribute on <body>, so a
// size change restyles every icon already on the page without touching
// the rows themselves.

use crate::config::IconSize;
use crate::dom::{Document, NodeId, Selector};
use crate::ehm::AppError;
use crate::row_processor::{ICON_MARKER_ATTRIBUTE, ICON_MARKER_VALUE, SIZE_ATTRIBUTE};





pub const STYLE_ELEMENT_ID: &str = "material-icons-extension-style";





////////////////////////////////////////////////////////////////////////////////
//
//  size_css
//
//  The base rule followed by one rule per tier.
//
////////////////////////////////////////////////////////////////////////////////

pub fn size_css() -> String {
    let mut css = base_rule();

    for size in IconSize::ALL {
        css.push_str (&size_rule (size));
    }

    css
}

pub fn base_rule() -> String {
    format!("{} {{\n  transform-origin: center;\n}}\n", icon_selector())
}

pub fn size_rule(size: IconSize) -> String {
    format!(
        "body[{SIZE_ATTRIBUTE}=\"{}\"] {} {{\n  transform: scale({});\n}}\n",
        size.name(),
        icon_selector(),
        size.scale(),
    )
}

fn icon_selector() -> String {
    format!("img[{ICON_MARKER_ATTRIBUTE}=\"{ICON_MARKER_VALUE}\"]")
}





////////////////////////////////////////////////////////////////////////////////
//
//  inject
//
//  Add the <style> element to <head> unless it is already there.
//
////////////////////////////////////////////////////////////////////////////////

pub fn inject(doc: &mut Document) -> Result<NodeId, AppError> {
    let existing = Selector::parse (&format!("style#{STYLE_ELEMENT_ID}"))?;

    if let Some (style) = doc.query_selector (doc.head(), &existing) {
        return Ok (style);
    }

    let head  = doc.head();
    let style = doc.append_element (head, "style", &[("id", STYLE_ELEMENT_ID)]);
    doc.append_text (style, &size_css());
    Ok (style)
}





/// Point the page at a size tier.
pub fn apply_size(doc: &mut Document, size: IconSize) {
    let body = doc.body();
    doc.set_attribute (body, SIZE_ATTRIBUTE, size.name());
}
