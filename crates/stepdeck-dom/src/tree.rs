//! DOM Tree (arena-based allocation)

use crate::{InternedString, Node, NodeData, NodeId, StringInterner};

/// Arena-based DOM tree
///
/// Slot 0 always holds the document node, so `NodeId::ROOT` is valid for
/// the lifetime of the tree.
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
    interner: StringInterner,
}

impl DomTree {
    /// Create a tree containing only the document node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
            interner: StringInterner::new(),
        }
    }

    /// Document node
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Number of nodes in the tree, including the document node
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the tree holds nothing but the document node
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    pub fn interner_mut(&mut self) -> &mut StringInterner {
        &mut self.interner
    }

    /// Resolve an interned name
    #[inline]
    pub fn resolve(&self, s: InternedString) -> &str {
        self.interner.get(s)
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let name = self.interner.intern(&tag.to_ascii_lowercase());
        self.push(Node::element(name))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.push(Node::text(content.to_string()))
    }

    /// Create a detached comment node
    pub fn create_comment(&mut self, content: &str) -> NodeId {
        self.push(Node::comment(content.to_string()))
    }

    /// Create a detached DOCTYPE node
    pub fn create_doctype(&mut self, name: &str) -> NodeId {
        self.push(Node::doctype(name.to_string()))
    }

    /// Append `child` as the last child of `parent`, detaching it first if needed.
    ///
    /// Returns false when either node is missing, when they are the same node,
    /// or when `child` is an ancestor of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if parent == child || self.get(parent).is_none() || self.get(child).is_none() {
            return false;
        }
        if self.is_ancestor(child, parent) {
            return false;
        }

        self.detach(child);

        let last = self.nodes[parent.index()].last_child;
        {
            let node = &mut self.nodes[child.index()];
            node.parent = parent;
            node.prev_sibling = last;
            node.next_sibling = NodeId::NONE;
        }
        if last.is_valid() {
            self.nodes[last.index()].next_sibling = child;
        } else {
            self.nodes[parent.index()].first_child = child;
        }
        self.nodes[parent.index()].last_child = child;
        true
    }

    /// Unlink a node from its parent and siblings
    pub fn detach(&mut self, id: NodeId) {
        let Some(node) = self.get(id) else { return };
        let (parent, prev, next) = (node.parent, node.prev_sibling, node.next_sibling);
        if !parent.is_valid() {
            return;
        }

        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = next;
        } else {
            self.nodes[parent.index()].first_child = next;
        }
        if next.is_valid() {
            self.nodes[next.index()].prev_sibling = prev;
        } else {
            self.nodes[parent.index()].last_child = prev;
        }

        let node = &mut self.nodes[id.index()];
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;
    }

    /// Check whether `ancestor` is `node` or one of its ancestors
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = node;
        while current.is_valid() {
            if current == ancestor {
                return true;
            }
            current = match self.get(current) {
                Some(n) => n.parent,
                None => return false,
            };
        }
        false
    }

    /// Iterate over the direct children of a node
    pub fn children(&self, id: NodeId) -> Children<'_> {
        let next = self.get(id).map(|n| n.first_child).unwrap_or(NodeId::NONE);
        Children { tree: self, next }
    }

    /// All descendants of `id` in document (pre-)order, excluding `id` itself
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).map(|(c, _)| c).collect();
        stack.reverse();

        while let Some(current) = stack.pop() {
            out.push(current);
            let first = stack.len();
            stack.extend(self.children(current).map(|(c, _)| c));
            stack[first..].reverse();
        }
        out
    }

    /// Lowercase tag name of an element
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        let elem = self.get(id)?.as_element()?;
        Some(self.resolve(elem.name))
    }

    /// Read an attribute by name, ASCII case-insensitively
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        let name = self.interner.lookup(&name.to_ascii_lowercase())?;
        self.get(id)?.as_element()?.get_attr(name)
    }

    /// Check attribute presence
    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        let Some(name) = self.interner.lookup(&name.to_ascii_lowercase()) else {
            return false;
        };
        self.get(id)
            .and_then(|n| n.as_element())
            .is_some_and(|e| e.has_attr(name))
    }

    /// Set an attribute, keeping the id and class caches in sync.
    ///
    /// Returns false if `id` is not an element.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> bool {
        if !self.get(id).is_some_and(Node::is_element) {
            return false;
        }

        let name = name.to_ascii_lowercase();
        let attr = self.interner.intern(&name);
        let cached_id = (name == "id").then(|| self.interner.intern(value));
        let classes: Option<Vec<_>> = (name == "class").then(|| {
            value
                .split_whitespace()
                .map(|c| self.interner.intern(c))
                .collect()
        });

        let Some(elem) = self.nodes[id.index()].as_element_mut() else {
            return false;
        };
        if let Some(cached) = cached_id {
            elem.id = Some(cached);
        }
        if let Some(classes) = classes {
            elem.classes = classes;
        }
        elem.set_attr(attr, value.to_string());
        true
    }

    /// Remove an attribute, returning its previous value
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> Option<String> {
        let attr = self.interner.lookup(&name.to_ascii_lowercase())?;
        let is_id = self.resolve(attr) == "id";
        let is_class = self.resolve(attr) == "class";

        let elem = self.get_mut(id)?.as_element_mut()?;
        if is_id {
            elem.id = None;
        }
        if is_class {
            elem.classes.clear();
        }
        elem.remove_attr(attr)
    }

    /// Check if an element carries a class
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        let Some(class) = self.interner.lookup(class) else {
            return false;
        };
        self.get(id)
            .and_then(|n| n.as_element())
            .is_some_and(|e| e.has_class(class))
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self, id: NodeId) -> String {
        self.descendants(id)
            .into_iter()
            .filter_map(|d| self.get(d).and_then(|n| n.as_text()))
            .collect()
    }

    /// Check whether a node is the document node
    pub fn is_document(&self, id: NodeId) -> bool {
        matches!(self.get(id).map(|n| &n.data), Some(NodeData::Document))
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a node's direct children
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.next.is_valid() {
            return None;
        }
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}
