// dom/watcher.rs — Subtree watcher over the document's mutation log
//
// Stands in for a MutationObserver with { childList, subtree, attributes }
// on one root.  The document records every edit; the watcher filters a
// drained batch down to what happened inside its subtree.

use std::collections::HashSet;

use crate::dom::{Document, NodeId, Selector};





/// One recorded edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// `node` was inserted under `parent` (append, insert or replace).
    ChildAdded { parent: NodeId, node: NodeId },

    /// An attribute on `node` was set.
    AttributeChanged { node: NodeId, name: String },
}





#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubtreeWatcher {
    root: NodeId,
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl SubtreeWatcher
//
////////////////////////////////////////////////////////////////////////////////

impl SubtreeWatcher {

    pub fn new(root: NodeId) -> Self {
        SubtreeWatcher { root }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  added_matches
    //
    //  Elements matching `selector` that arrived in this batch: each added
    //  node itself if it matches, then its matching descendants.  Nodes no
    //  longer inside the watched subtree are skipped; each element is
    //  reported once, in first-seen order.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn added_matches(&self, doc: &Document, mutations: &[Mutation], selector: &Selector) -> Vec<NodeId> {
        let mut seen   = HashSet::new();
        let mut result = Vec::new();

        for mutation in mutations {
            let Mutation::ChildAdded { node, .. } = mutation else {
                continue;
            };

            if !doc.is_inclusive_ancestor (self.root, *node) {
                continue;
            }

            let candidates = std::iter::once (*node)
                .filter (|&n| doc.matches (n, selector))
                .chain (doc.query_selector_all (*node, selector));

            for candidate in candidates {
                if seen.insert (candidate) {
                    result.push (candidate);
                }
            }
        }

        result
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  attribute_changes
    //
    //  (node, attribute name) for every attribute edit inside the subtree.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn attribute_changes<'m>(&self, doc: &Document, mutations: &'m [Mutation]) -> Vec<(NodeId, &'m str)> {
        mutations
            .iter()
            .filter_map (|mutation| match mutation {
                Mutation::AttributeChanged { node, name } => Some ((*node, name.as_str())),
                Mutation::ChildAdded { .. }               => None,
            })
            .filter (|(node, _)| doc.is_inclusive_ancestor (self.root, *node))
            .collect()
    }
}





#[cfg(test)]
mod tests {
    use super::*;

    ////////////////////////////////////////////////////////////////////////////
    //
    //  reports_added_rows_and_nested_rows
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn reports_added_rows_and_nested_rows() {
        let mut doc = Document::new();
        let body = doc.body();
        let watcher = SubtreeWatcher::new(body);
        let rows = Selector::parse(".row").unwrap();

        let list = doc.create_element("ul");
        let first = doc.append_element(list, "li", &[("class", "row")]);
        let second = doc.append_element(list, "li", &[("class", "row")]);
        doc.take_mutations();

        doc.append_child(body, list);
        let third = doc.append_element(list, "li", &[("class", "row")]);

        let batch = doc.take_mutations();
        assert_eq!(watcher.added_matches(&doc, &batch, &rows), vec![first, second, third]);
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  ignores_nodes_outside_the_root
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn ignores_nodes_outside_the_root() {
        let mut doc = Document::new();
        let body = doc.body();
        let head = doc.head();
        let watcher = SubtreeWatcher::new(body);
        let rows = Selector::parse(".row").unwrap();

        doc.append_element(head, "div", &[("class", "row")]);
        let detached = doc.create_element("div");
        let orphan = doc.append_element(detached, "div", &[("class", "row")]);
        doc.set_attribute(orphan, "class", "row loaded");

        let batch = doc.take_mutations();
        assert!(watcher.added_matches(&doc, &batch, &rows).is_empty());
        assert!(watcher.attribute_changes(&doc, &batch).is_empty());
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  reports_attribute_changes
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn reports_attribute_changes() {
        let mut doc = Document::new();
        let body = doc.body();
        let watcher = SubtreeWatcher::new(body);

        let row = doc.append_element(body, "div", &[("class", "row")]);
        doc.take_mutations();
        doc.set_attribute(row, "data-loaded", "1");
        doc.set_attribute(body, "data-x", "y");

        let batch = doc.take_mutations();
        assert_eq!(watcher.attribute_changes(&doc, &batch), vec![(row, "data-loaded"), (body, "data-x")]);
    }
}
