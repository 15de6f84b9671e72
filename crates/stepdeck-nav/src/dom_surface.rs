//! Document-backed surface
//!
//! Slides and steps are found by class, step order is read from an integer
//! attribute, visibility is the inline `display` style, and the controls are
//! the two buttons located by id.

use stepdeck_dom::{Display, Document, NodeId};

use crate::{Control, DeckConfig, NavError, SlideSurface, StepEntry};

/// [`SlideSurface`] over a parsed page
#[derive(Debug)]
pub struct DomSurface {
    document: Document,
    config: DeckConfig,
    prev_button: NodeId,
    next_button: NodeId,
}

impl DomSurface {
    /// Bind to a document, resolving both control buttons up front
    pub fn new(document: Document, config: DeckConfig) -> Result<Self, NavError> {
        let find = |id: &str| {
            document
                .get_element_by_id(id)
                .ok_or_else(|| NavError::MissingControl(id.to_string()))
        };
        let prev_button = find(&config.prev_button_id)?;
        let next_button = find(&config.next_button_id)?;

        Ok(Self {
            document,
            config,
            prev_button,
            next_button,
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Listener registration needs the document before navigation starts
    pub(crate) fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    /// Button element for a control
    pub fn control(&self, control: Control) -> NodeId {
        match control {
            Control::Previous => self.prev_button,
            Control::Next => self.next_button,
        }
    }

    fn step_order(&self, step: NodeId) -> Result<i64, NavError> {
        let attr = &self.config.step_order_attr;
        let raw = self
            .document
            .tree()
            .attribute(step, attr)
            .ok_or_else(|| NavError::MissingStepOrder { attr: attr.clone() })?;
        raw.trim()
            .parse()
            .map_err(|_| NavError::InvalidStepOrder { value: raw.to_string() })
    }
}

impl SlideSurface for DomSurface {
    type Handle = NodeId;

    fn slides(&self) -> Vec<NodeId> {
        let root = self.document.tree().root();
        self.document.get_elements_by_class_name(root, &self.config.slide_class)
    }

    fn steps(&self, slide: NodeId) -> Result<Vec<StepEntry<NodeId>>, NavError> {
        self.document
            .get_elements_by_class_name(slide, &self.config.step_class)
            .into_iter()
            .map(|handle| {
                Ok(StepEntry {
                    handle,
                    order: self.step_order(handle)?,
                })
            })
            .collect()
    }

    fn set_visible(&mut self, element: NodeId, visible: bool) {
        self.document.set_display(element, Display::from(visible));
    }

    fn set_control_disabled(&mut self, control: Control, disabled: bool) {
        let button = self.control(control);
        self.document.set_disabled(button, disabled);
    }
}
