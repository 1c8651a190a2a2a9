//! The arena-backed document.
//!
//! Nodes live in a flat arena and reference each other by [`NodeId`].
//! Traversal order is document order (preorder). Mutating methods that
//! take a `NodeId` are null-checked: a text-node id or a stale handle is
//! a no-op, never a panic.

use super::node::{ElementData, NodeData, NodeId};

#[derive(Debug, Clone)]
struct Slot {
    data: NodeData,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A synthetic document tree.
#[derive(Debug, Clone)]
pub struct Document {
    slots: Vec<Slot>,
    root: NodeId,
    /// Raw doctype text (without `<!DOCTYPE`/`>`), if the source had one.
    pub(crate) doctype: Option<String>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document with a synthetic `#document` root.
    pub fn new() -> Self {
        let root_slot = Slot {
            data: NodeData::Element(ElementData::new("#document")),
            parent: None,
            children: Vec::new(),
        };
        Self {
            slots: vec![root_slot],
            root: NodeId(0),
            doctype: None,
        }
    }

    /// The synthetic root container node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    fn alloc(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.slots.len());
        self.slots.push(Slot {
            data,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Create a detached element node.
    pub fn create_element(&mut self, tag: impl Into<String>) -> NodeId {
        self.alloc(NodeData::Element(ElementData::new(tag)))
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.alloc(NodeData::Text(text.into()))
    }

    /// Create a detached comment node.
    pub fn create_comment(&mut self, text: impl Into<String>) -> NodeId {
        self.alloc(NodeData::Comment(text.into()))
    }

    // -------------------------------------------------------------------------
    // Structure
    // -------------------------------------------------------------------------

    /// Append `child` as the last child of `parent`, detaching it from any
    /// previous parent first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if parent == child || self.get(parent).is_none() || self.get(child).is_none() {
            return;
        }
        self.detach(child);
        self.slots[child.0].parent = Some(parent);
        self.slots[parent.0].children.push(child);
    }

    /// Remove `child` from its parent's child list.
    pub fn detach(&mut self, child: NodeId) {
        let Some(parent) = self.parent(child) else {
            return;
        };
        self.slots[parent.0].children.retain(|c| *c != child);
        self.slots[child.0].parent = None;
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|s| s.children.as_slice()).unwrap_or(&[])
    }

    fn get(&self, id: NodeId) -> Option<&Slot> {
        self.slots.get(id.0)
    }

    // -------------------------------------------------------------------------
    // Node access
    // -------------------------------------------------------------------------

    pub fn data(&self, id: NodeId) -> Option<&NodeData> {
        self.get(id).map(|s| &s.data)
    }

    /// The element payload of `id`, if it is an element node.
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        match self.data(id)? {
            NodeData::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        match &mut self.slots.get_mut(id.0)?.data {
            NodeData::Element(el) => Some(el),
            _ => None,
        }
    }

    // Null-checked mutation conveniences; no-ops on non-element ids.

    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(el) = self.element_mut(id) {
            el.set_attr(name, value);
        }
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if let Some(el) = self.element_mut(id) {
            el.add_class(class);
        }
    }

    pub fn set_style(&mut self, id: NodeId, prop: &str, value: &str) {
        if let Some(el) = self.element_mut(id) {
            el.set_style(prop, value);
        }
    }

    /// Replace `id`'s children with a single text node.
    pub fn set_text(&mut self, id: NodeId, text: &str) {
        if self.element(id).is_none() {
            return;
        }
        let old: Vec<NodeId> = self.children(id).to_vec();
        for child in old {
            self.detach(child);
        }
        let text_node = self.create_text(text);
        self.append_child(id, text_node);
    }

    // -------------------------------------------------------------------------
    // Traversal & queries
    // -------------------------------------------------------------------------

    /// All descendants of `id` in document order (preorder), excluding `id`.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            for child in self.children(node).iter().rev() {
                stack.push(*child);
            }
        }
        out
    }

    /// All elements matching `pred`, in document order.
    pub fn find_all(&self, pred: impl Fn(&ElementData) -> bool) -> Vec<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .filter(|id| self.element(*id).is_some_and(&pred))
            .collect()
    }

    /// First element matching `pred`, in document order.
    pub fn find_first(&self, pred: impl Fn(&ElementData) -> bool) -> Option<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .find(|id| self.element(*id).is_some_and(&pred))
    }

    /// All elements with the given tag, in document order.
    pub fn elements_by_tag(&self, tag: &str) -> Vec<NodeId> {
        self.find_all(|el| el.tag == tag)
    }

    /// Look up an element by `id` attribute. Walked fresh on every call;
    /// the empty string never matches.
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        if id.is_empty() {
            return None;
        }
        self.find_first(|el| el.attr("id") == Some(id))
    }

    /// Concatenated text of `id` and its descendants, comments excluded.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        let mut ids = vec![id];
        ids.extend(self.descendants(id));
        for node in ids {
            if let Some(NodeData::Text(text)) = self.data(node) {
                out.push_str(text);
            }
        }
        out
    }

    /// Total number of nodes ever allocated (including detached ones).
    pub fn node_count(&self) -> usize {
        self.slots.len()
    }
}
