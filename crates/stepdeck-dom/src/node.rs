//! DOM Node - Compact representation
//!
//! Nodes link to each other through `NodeId` indices into the tree's arena
//! rather than pointers, so the whole tree is a single `Vec`.

use crate::{InternedString, NodeId};

/// DOM Node - Core structure
#[derive(Debug)]
pub struct Node {
    /// Parent node (NONE if root or detached)
    pub parent: NodeId,
    /// First child
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    /// Previous sibling
    pub prev_sibling: NodeId,
    /// Next sibling
    pub next_sibling: NodeId,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    fn with_data(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    /// Create a new element node
    pub fn element(name: InternedString) -> Self {
        Self::with_data(NodeData::Element(ElementData::new(name)))
    }

    /// Create a new text node
    pub fn text(content: String) -> Self {
        Self::with_data(NodeData::Text(content))
    }

    /// Create a comment node
    pub fn comment(content: String) -> Self {
        Self::with_data(NodeData::Comment(content))
    }

    /// Create a DOCTYPE node
    pub fn doctype(name: String) -> Self {
        Self::with_data(NodeData::Doctype { name })
    }

    /// Create a document node
    pub fn document() -> Self {
        Self::with_data(NodeData::Document)
    }

    /// Check if this is an element
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Check if this is text
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self.data, NodeData::Text(_))
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug)]
pub enum NodeData {
    /// Document root
    Document,
    /// DOCTYPE
    Doctype { name: String },
    /// Element
    Element(ElementData),
    /// Text content
    Text(String),
    /// Comment
    Comment(String),
}

/// Element-specific data
#[derive(Debug)]
pub struct ElementData {
    /// Local tag name
    pub name: InternedString,
    /// Attributes in source order
    pub attrs: Vec<Attribute>,
    /// Cached id attribute value
    pub id: Option<InternedString>,
    /// Cached class list
    pub classes: Vec<InternedString>,
}

impl ElementData {
    pub fn new(name: InternedString) -> Self {
        Self {
            name,
            attrs: Vec::new(),
            id: None,
            classes: Vec::new(),
        }
    }

    /// Get an attribute value
    pub fn get_attr(&self, name: InternedString) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Check if an attribute is present (boolean attributes carry no value)
    pub fn has_attr(&self, name: InternedString) -> bool {
        self.attrs.iter().any(|a| a.name == name)
    }

    /// Set an attribute, returning the previous value
    pub fn set_attr(&mut self, name: InternedString, value: String) -> Option<String> {
        if let Some(attr) = self.attrs.iter_mut().find(|a| a.name == name) {
            return Some(std::mem::replace(&mut attr.value, value));
        }
        self.attrs.push(Attribute { name, value });
        None
    }

    /// Remove an attribute, returning its value
    pub fn remove_attr(&mut self, name: InternedString) -> Option<String> {
        let pos = self.attrs.iter().position(|a| a.name == name)?;
        Some(self.attrs.remove(pos).value)
    }

    /// Check the cached class list
    #[inline]
    pub fn has_class(&self, class: InternedString) -> bool {
        self.classes.contains(&class)
    }
}

/// Attribute
#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: InternedString,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_attr_replaces_value() {
        let mut elem = ElementData::new(InternedString(1));
        let name = InternedString(7);
        assert_eq!(elem.set_attr(name, "a".into()), None);
        assert_eq!(elem.set_attr(name, "b".into()), Some("a".to_string()));
        assert_eq!(elem.get_attr(name), Some("b"));
        assert_eq!(elem.attrs.len(), 1);
    }

    #[test]
    fn test_remove_attr() {
        let mut elem = ElementData::new(InternedString(1));
        let name = InternedString(3);
        elem.set_attr(name, String::new());
        assert!(elem.has_attr(name));
        assert_eq!(elem.remove_attr(name), Some(String::new()));
        assert!(!elem.has_attr(name));
        assert_eq!(elem.remove_attr(name), None);
    }

    #[test]
    fn test_node_kinds() {
        assert!(Node::element(InternedString(1)).is_element());
        assert!(Node::text("hi".into()).is_text());
        assert_eq!(Node::text("hi".into()).as_text(), Some("hi"));
        assert!(Node::document().as_element().is_none());
    }
}
