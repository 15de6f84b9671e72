//! HTML5 Parser implementation
//!
//! Uses html5ever's RcDom and converts it into the arena DOM.

use std::path::Path;

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};
use stepdeck_dom::{Document, DomTree, NodeId};

use crate::ParseError;

/// HTML5 parser
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlParser;

impl HtmlParser {
    /// Create a new HTML parser
    pub fn new() -> Self {
        Self
    }

    /// Parse HTML string into a Document
    pub fn parse(&self, html: &str) -> Document {
        self.parse_with_url(html, "about:blank")
    }

    /// Parse HTML with a document URL
    pub fn parse_with_url(&self, html: &str, url: &str) -> Document {
        tracing::debug!("Parsing HTML document: {}", url);

        let dom = parse_document(RcDom::default(), Default::default()).one(html);

        let mut document = Document::empty(url);
        let root = document.tree().root();
        self.convert_node(&dom.document, document.tree_mut(), root);
        document.finalize();

        tracing::debug!("Parsed {} nodes", document.tree().len());
        document
    }

    /// Read and parse an HTML file
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Document, ParseError> {
        let path = path.as_ref();
        let html = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let url = format!("file://{}", path.display());
        Ok(self.parse_with_url(&html, &url))
    }

    /// Convert an RcDom node (and its subtree) into the arena
    fn convert_node(&self, handle: &Handle, tree: &mut DomTree, parent: NodeId) {
        match &handle.data {
            RcNodeData::Document => {
                for child in handle.children.borrow().iter() {
                    self.convert_node(child, tree, parent);
                }
            }
            RcNodeData::Doctype { name, .. } => {
                let id = tree.create_doctype(name);
                tree.append_child(parent, id);
            }
            RcNodeData::Text { contents } => {
                let text = contents.borrow();
                if !text.trim().is_empty() {
                    let id = tree.create_text(&text);
                    tree.append_child(parent, id);
                }
            }
            RcNodeData::Comment { contents } => {
                let id = tree.create_comment(contents);
                tree.append_child(parent, id);
            }
            RcNodeData::Element { name, attrs, .. } => {
                let id = tree.create_element(&name.local);
                for attr in attrs.borrow().iter() {
                    tree.set_attribute(id, &attr.name.local, &attr.value);
                }
                tree.append_child(parent, id);

                for child in handle.children.borrow().iter() {
                    self.convert_node(child, tree, id);
                }
            }
            RcNodeData::ProcessingInstruction { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let html = "<html><head><title>Test</title></head><body><p>Hello</p></body></html>";
        let doc = HtmlParser::new().parse(html);

        assert!(doc.tree().len() > 1, "Expected more than 1 node, got {}", doc.tree().len());
        assert_eq!(doc.title(), "Test");
    }

    #[test]
    fn test_parse_fragment_gets_skeleton() {
        let doc = HtmlParser::new().parse("<div><span>Text</span></div>");
        assert!(doc.body().is_valid());
        assert!(doc.head().is_valid());
    }

    #[test]
    fn test_attributes_populate_caches() {
        let doc = HtmlParser::new().parse(r#"<div id="deck" class="slide intro" step_index="2"></div>"#);
        let deck = doc.get_element_by_id("deck").unwrap();
        assert!(doc.tree().has_class(deck, "slide"));
        assert_eq!(doc.tree().attribute(deck, "step_index"), Some("2"));
    }

    #[test]
    fn test_whitespace_text_dropped() {
        let doc = HtmlParser::new().parse("<div id=\"a\">   \n  </div>");
        let a = doc.get_element_by_id("a").unwrap();
        assert_eq!(doc.tree().children(a).count(), 0);
    }

    #[test]
    fn test_parse_file_missing() {
        let err = HtmlParser::new()
            .parse_file("/definitely/not/here.html")
            .unwrap_err();
        assert!(matches!(err, ParseError::Io { .. }));
    }
}
