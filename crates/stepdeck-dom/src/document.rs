//! Document - High-level document API

use crate::{Display, DomTree, EventListenerRegistry, EventType, InlineStyle, ListenerId, NodeId};

/// Elements whose `disabled` attribute suppresses click dispatch
const DISABLEABLE_TAGS: &[&str] = &["button", "input", "select", "textarea", "fieldset"];

/// HTML Document
#[derive(Debug)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    /// Document URL
    url: String,
    /// Event listeners attached to nodes of this document
    listeners: EventListenerRegistry,
    html_element: NodeId,
    head_element: NodeId,
    body_element: NodeId,
}

impl Document {
    /// Create a new document with an empty html/head/body skeleton
    pub fn new(url: &str) -> Self {
        let mut tree = DomTree::new();

        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        tree.append_child(tree.root(), html);
        tree.append_child(html, head);
        tree.append_child(html, body);

        Self {
            tree,
            url: url.to_string(),
            listeners: EventListenerRegistry::new(),
            html_element: html,
            head_element: head,
            body_element: body,
        }
    }

    /// Create an empty document (no structure)
    pub fn empty(url: &str) -> Self {
        Self {
            tree: DomTree::new(),
            url: url.to_string(),
            listeners: EventListenerRegistry::new(),
            html_element: NodeId::NONE,
            head_element: NodeId::NONE,
            body_element: NodeId::NONE,
        }
    }

    /// Locate the html/head/body elements after the tree was built externally
    pub fn finalize(&mut self) {
        let find_child = |tree: &DomTree, parent: NodeId, tag: &str| {
            if !parent.is_valid() {
                return NodeId::NONE;
            }
            tree.children(parent)
                .map(|(id, _)| id)
                .find(|&id| tree.tag_name(id) == Some(tag))
                .unwrap_or(NodeId::NONE)
        };

        self.html_element = find_child(&self.tree, self.tree.root(), "html");
        self.head_element = find_child(&self.tree, self.html_element, "head");
        self.body_element = find_child(&self.tree, self.html_element, "body");
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get document title
    pub fn title(&self) -> String {
        if !self.head_element.is_valid() {
            return String::new();
        }

        self.tree
            .children(self.head_element)
            .find(|&(id, _)| self.tree.tag_name(id) == Some("title"))
            .map(|(id, _)| self.tree.text_content(id).trim().to_string())
            .unwrap_or_default()
    }

    /// Get <html> element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get <head> element
    pub fn head(&self) -> NodeId {
        self.head_element
    }

    /// Get <body> element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Get element by ID
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        let id_interned = self.tree.interner().lookup(id)?;
        self.tree.descendants(self.tree.root()).into_iter().find(|&node| {
            self.tree
                .get(node)
                .and_then(|n| n.as_element())
                .is_some_and(|e| e.id == Some(id_interned))
        })
    }

    /// Descendants of `root` carrying `class`, in document order
    pub fn get_elements_by_class_name(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        let Some(class) = self.tree.interner().lookup(class) else {
            return Vec::new();
        };
        self.tree
            .descendants(root)
            .into_iter()
            .filter(|&node| {
                self.tree
                    .get(node)
                    .and_then(|n| n.as_element())
                    .is_some_and(|e| e.has_class(class))
            })
            .collect()
    }

    /// Inline style of an element
    pub fn style(&self, node: NodeId) -> InlineStyle {
        self.tree
            .attribute(node, "style")
            .map(InlineStyle::parse)
            .unwrap_or_default()
    }

    /// The inline `display` value, if one is set
    pub fn display(&self, node: NodeId) -> Option<Display> {
        self.style(node).display()
    }

    /// Write `display` into the element's inline style.
    ///
    /// Returns false if `node` is not an element.
    pub fn set_display(&mut self, node: NodeId, display: Display) -> bool {
        let mut style = self.style(node);
        style.set_display(display);
        let written = self.tree.set_attribute(node, "style", &style.to_string());
        if written {
            let keyword = display.as_str();
            tracing::trace!(?node, display = keyword, "display updated");
        }
        written
    }

    /// Check the boolean `disabled` attribute
    pub fn is_disabled(&self, node: NodeId) -> bool {
        self.tree.has_attribute(node, "disabled")
    }

    /// Add or remove the boolean `disabled` attribute
    pub fn set_disabled(&mut self, node: NodeId, disabled: bool) -> bool {
        if disabled {
            self.tree.set_attribute(node, "disabled", "")
        } else {
            self.tree.remove_attribute(node, "disabled");
            self.tree.get(node).is_some_and(|n| n.is_element())
        }
    }

    /// Register a listener on an element
    pub fn add_event_listener(&mut self, node: NodeId, event_type: EventType) -> Option<ListenerId> {
        if !self.tree.get(node).is_some_and(|n| n.is_element()) {
            return None;
        }
        Some(self.listeners.add_listener(node, event_type))
    }

    /// Remove a listener
    pub fn remove_event_listener(&mut self, node: NodeId, event_type: EventType, listener: ListenerId) -> bool {
        self.listeners.remove_listener(node, event_type, listener)
    }

    pub fn listeners(&self) -> &EventListenerRegistry {
        &self.listeners
    }

    /// Dispatch a click at `target`.
    ///
    /// Returns the listeners reached while bubbling from the target up to the
    /// document, target first. A click inside a disabled form control reaches
    /// nothing.
    pub fn dispatch_click(&self, target: NodeId) -> Vec<ListenerId> {
        if self.tree.get(target).is_none() {
            return Vec::new();
        }

        let mut path = Vec::new();
        let mut current = target;
        while current.is_valid() {
            path.push(current);
            current = self.tree.get(current).map(|n| n.parent).unwrap_or(NodeId::NONE);
        }

        if let Some(&blocked) = path.iter().find(|&&node| self.is_disabled_control(node)) {
            tracing::trace!(?target, ?blocked, "click suppressed by disabled control");
            return Vec::new();
        }

        path.iter()
            .flat_map(|&node| self.listeners.listeners(node, EventType::Click).iter().copied())
            .collect()
    }

    fn is_disabled_control(&self, node: NodeId) -> bool {
        self.tree
            .tag_name(node)
            .is_some_and(|tag| DISABLEABLE_TAGS.contains(&tag))
            && self.is_disabled(node)
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}
