// dom/mod.rs — In-process document model
//
// An arena of element and text nodes addressed by NodeId, with just the
// operations the row processor needs: attributes, class tests, text
// content, sibling/child edits and selector queries.  Every structural
// edit and attribute write is appended to a mutation log that the
// subtree watcher drains.  A node replaced out of the tree is freed along
// with its subtree; stale handles read as an empty, detached node.

use slotmap::{new_key_type, SlotMap};

pub mod selector;
pub mod watcher;

pub use selector::Selector;
pub use watcher::{Mutation, SubtreeWatcher};





new_key_type! {
    /// Handle for a node in a Document.  Only meaningful for the document
    /// that issued it.
    pub struct NodeId;
}





#[derive(Debug, Clone)]
enum NodeData {
    Element { tag: String, attributes: Vec<(String, String)> },
    Text(String),
}





#[derive(Debug, Clone)]
struct Node {
    data:     NodeData,
    parent:   Option<NodeId>,
    children: Vec<NodeId>,
}





////////////////////////////////////////////////////////////////////////////////

/// A page: `<html>` with `<head>` and `<body>`, plus the user's
/// colour-scheme preference (the `prefers-color-scheme` media query).
#[derive(Debug)]
pub struct Document {
    nodes:                SlotMap<NodeId, Node>,
    root:                 NodeId,
    head:                 NodeId,
    body:                 NodeId,
    prefers_light_scheme: bool,
    mutations:            Vec<Mutation>,
}





impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl Document
//
////////////////////////////////////////////////////////////////////////////////

impl Document {

    ////////////////////////////////////////////////////////////////////////////
    //
    //  new
    //
    //  Empty page skeleton.  Building the skeleton is not logged.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn new() -> Self {
        let mut doc = Document {
            nodes:                SlotMap::with_key(),
            root:                 NodeId::default(),
            head:                 NodeId::default(),
            body:                 NodeId::default(),
            prefers_light_scheme: false,
            mutations:            Vec::new(),
        };

        doc.root = doc.create_element ("html");
        doc.head = doc.create_element ("head");
        doc.body = doc.create_element ("body");

        for child in [doc.head, doc.body] {
            doc.nodes[child].parent = Some (doc.root);
            doc.nodes[doc.root].children.push (child);
        }

        doc
    }





    pub fn document_element(&self) -> NodeId {
        self.root
    }

    pub fn head(&self) -> NodeId {
        self.head
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    pub fn prefers_light_scheme(&self) -> bool {
        self.prefers_light_scheme
    }

    pub fn set_prefers_light_scheme(&mut self, light: bool) {
        self.prefers_light_scheme = light;
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  create_element / create_text
    //
    //  New detached nodes.  Tag names are stored lowercased.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push_node (NodeData::Element {
            tag:        tag.to_ascii_lowercase(),
            attributes: Vec::new(),
        })
    }

    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push_node (NodeData::Text (text.to_string()))
    }

    fn push_node(&mut self, data: NodeData) -> NodeId {
        self.nodes.insert (Node { data, parent: None, children: Vec::new() })
    }

    /// Live nodes, attached or not.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  append_element / append_text
    //
    //  Create and append in one step; the usual way listings are built.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn append_element(&mut self, parent: NodeId, tag: &str, attributes: &[(&str, &str)]) -> NodeId {
        let id = self.create_element (tag);

        for (name, value) in attributes {
            self.write_attribute (id, name, value);
        }

        self.append_child (parent, id);
        id
    }

    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        let id = self.create_text (text);
        self.append_child (parent, id);
        id
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  Tree navigation
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn is_element(&self, id: NodeId) -> bool {
        self.nodes.get (id).is_some_and (|node| matches!(node.data, NodeData::Element { .. }))
    }

    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        match &self.nodes.get (id)?.data {
            NodeData::Element { tag, .. } => Some (tag),
            NodeData::Text (_)            => None,
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get (id)?.parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get (id).map (|node| node.children.as_slice()).unwrap_or_default()
    }

    /// Nearest preceding sibling that is an element.
    pub fn previous_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent   = self.parent (id)?;
        let siblings = self.children (parent);
        let index    = siblings.iter().position (|&s| s == id)?;

        siblings[..index].iter().rev().copied().find (|&s| self.is_element (s))
    }

    /// True if `ancestor` is `id` or one of its ancestors.
    pub fn is_inclusive_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = Some (id);

        while let Some (node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent (node);
        }

        false
    }

    pub fn is_connected(&self, id: NodeId) -> bool {
        self.is_inclusive_ancestor (self.root, id)
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  descendants
    //
    //  Every node below `scope` in document (pre-)order, excluding `scope`.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack: Vec<NodeId> = self.children (scope).iter().rev().copied().collect();

        while let Some (node) = stack.pop() {
            result.push (node);
            stack.extend (self.children (node).iter().rev().copied());
        }

        result
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  text_content
    //
    //  Concatenated text of every descendant text node.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn text_content(&self, id: NodeId) -> String {
        if let Some (Node { data: NodeData::Text (text), .. }) = self.nodes.get (id) {
            return text.clone();
        }

        self.descendants (id)
            .into_iter()
            .filter_map (|node| match &self.nodes[node].data {
                NodeData::Text (text)    => Some (text.as_str()),
                NodeData::Element { .. } => None,
            })
            .collect()
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  Attributes
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn attributes(&self, id: NodeId) -> &[(String, String)] {
        match self.nodes.get (id).map (|node| &node.data) {
            Some (NodeData::Element { attributes, .. }) => attributes,
            _                                           => &[],
        }
    }

    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();

        self.attributes (id)
            .iter()
            .find (|(n, _)| *n == name)
            .map (|(_, v)| v.as_str())
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.get_attribute (id, "class")
            .is_some_and (|classes| classes.split_whitespace().any (|c| c == class))
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        if self.write_attribute (id, name, value) {
            self.mutations.push (Mutation::AttributeChanged {
                node: id,
                name: name.to_ascii_lowercase(),
            });
        }
    }

    fn write_attribute(&mut self, id: NodeId, name: &str, value: &str) -> bool {
        let Some (Node { data: NodeData::Element { attributes, .. }, .. }) = self.nodes.get_mut (id) else {
            return false;
        };

        let name = name.to_ascii_lowercase();

        match attributes.iter_mut().find (|(n, _)| *n == name) {
            Some ((_, existing)) => *existing = value.to_string(),
            None                 => attributes.push ((name, value.to_string())),
        }

        true
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  append_child
    //
    //  Move `child` to the end of `parent`'s children.  Refuses (returns
    //  false) when `parent` is a text node or `child` contains `parent`.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if !self.can_adopt (parent, child) {
            return false;
        }

        self.detach (child);
        self.nodes[parent].children.push (child);
        self.nodes[child].parent = Some (parent);
        self.mutations.push (Mutation::ChildAdded { parent, node: child });
        true
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  insert_before
    //
    //  Insert `node` as the sibling immediately before `reference`.
    //  `reference` must have a parent.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn insert_before(&mut self, reference: NodeId, node: NodeId) -> bool {
        let Some (parent) = self.parent (reference) else {
            return false;
        };

        if node == reference || !self.can_adopt (parent, node) {
            return false;
        }

        self.detach (node);

        let Some (index) = self.nodes[parent].children.iter().position (|&c| c == reference) else {
            return false;
        };

        self.nodes[parent].children.insert (index, node);
        self.nodes[node].parent = Some (parent);
        self.mutations.push (Mutation::ChildAdded { parent, node });
        true
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  replace_with
    //
    //  Put `replacement` where `old` is.  `old` and everything below it
    //  are freed; its handle (and those of its descendants) go stale.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn replace_with(&mut self, old: NodeId, replacement: NodeId) -> bool {
        if old == replacement {
            return true;
        }

        let Some (parent) = self.parent (old) else {
            return false;
        };

        if !self.can_adopt (parent, replacement) {
            return false;
        }

        self.detach (replacement);

        let Some (index) = self.nodes[parent].children.iter().position (|&c| c == old) else {
            return false;
        };

        self.nodes[parent].children[index] = replacement;
        self.nodes[replacement].parent     = Some (parent);
        self.mutations.push (Mutation::ChildAdded { parent, node: replacement });
        self.free_subtree (old);
        true
    }





    fn detach(&mut self, id: NodeId) {
        if let Some (parent) = self.nodes.get_mut (id).and_then (|node| node.parent.take()) {
            self.nodes[parent].children.retain (|&c| c != id);
        }
    }

    fn free_subtree(&mut self, id: NodeId) {
        let mut stack = vec![id];

        while let Some (node) = stack.pop() {
            if let Some (freed) = self.nodes.remove (node) {
                stack.extend (freed.children);
            }
        }
    }

    /// `child` must exist; stale handles are never adopted.
    fn can_adopt(&self, parent: NodeId, child: NodeId) -> bool {
        self.is_element (parent)
            && self.nodes.contains_key (child)
            && !self.is_inclusive_ancestor (child, parent)
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  Selector queries
    //
    //  Matching considers the node's full ancestor chain, not just the
    //  part below `scope`, the way querySelector does.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn matches(&self, id: NodeId, selector: &Selector) -> bool {
        selector.matches (self, id)
    }

    pub fn query_selector(&self, scope: NodeId, selector: &Selector) -> Option<NodeId> {
        self.descendants (scope)
            .into_iter()
            .find (|&node| selector.matches (self, node))
    }

    pub fn query_selector_all(&self, scope: NodeId, selector: &Selector) -> Vec<NodeId> {
        self.descendants (scope)
            .into_iter()
            .filter (|&node| selector.matches (self, node))
            .collect()
    }





    /// Hand over the mutation records accumulated since the last call.
    pub fn take_mutations(&mut self) -> Vec<Mutation> {
        std::mem::take (&mut self.mutations)
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  outer_html
    //
    //  Serialize a subtree.  Attributes keep insertion order; `img` is
    //  written as a void element.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_html (id, &mut out);
        out
    }

    fn write_html(&self, id: NodeId, out: &mut String) {
        let Some (node) = self.nodes.get (id) else {
            return;
        };

        match &node.data {
            NodeData::Text (text) => out.push_str (&escape (text, false)),

            NodeData::Element { tag, attributes } => {
                out.push ('<');
                out.push_str (tag);

                for (name, value) in attributes {
                    out.push_str (&format!(" {}=\"{}\"", name, escape (value, true)));
                }

                out.push ('>');

                if tag == "img" {
                    return;
                }

                for &child in &node.children {
                    self.write_html (child, out);
                }

                out.push_str (&format!("</{}>", tag));
            }
        }
    }
}





fn escape(text: &str, in_attribute: bool) -> String {
    let mut out = String::with_capacity (text.len());

    for c in text.chars() {
        match c {
            '&'                  => out.push_str ("&amp;"),
            '<' if !in_attribute => out.push_str ("&lt;"),
            '>' if !in_attribute => out.push_str ("&gt;"),
            '"' if in_attribute  => out.push_str ("&quot;"),
            _                    => out.push (c),
        }
    }

    out
}
