//! Presentation - a loaded page with its navigation wired up

use stepdeck_dom::{Document, EventType, ListenerId, NodeId};
use stepdeck_html::HtmlParser;

use crate::{ButtonStates, Control, DeckConfig, DomSurface, NavError, Navigator, Position};

/// A presentation page whose previous/next buttons drive a [`Navigator`]
#[derive(Debug)]
pub struct Presentation {
    navigator: Navigator<DomSurface>,
    /// Click listeners registered on the buttons and what each one triggers
    bindings: Vec<(ListenerId, Control)>,
}

impl Presentation {
    /// Bind navigation to a parsed page.
    ///
    /// Shows the first slide and its first step, then registers one click
    /// listener on each button.
    pub fn load(document: Document, config: DeckConfig) -> Result<Self, NavError> {
        let mut surface = DomSurface::new(document, config)?;

        let mut bindings = Vec::with_capacity(2);
        for control in [Control::Next, Control::Previous] {
            let button = surface.control(control);
            if let Some(listener) = surface.document_mut().add_event_listener(button, EventType::Click) {
                bindings.push((listener, control));
            }
        }

        let navigator = Navigator::new(surface)?;
        tracing::info!(
            url = navigator.surface().document().url(),
            slides = navigator.slide_count(),
            positions = navigator.position_count(),
            "presentation loaded"
        );

        Ok(Self { navigator, bindings })
    }

    /// Parse a page and bind navigation to it
    pub fn from_html(html: &str, config: DeckConfig) -> Result<Self, NavError> {
        Self::load(HtmlParser::new().parse(html), config)
    }

    /// Deliver a click to `target`.
    ///
    /// The click bubbles through the document; every navigation listener it
    /// reaches runs. Disabled buttons receive nothing. Returns whether the
    /// position changed.
    pub fn click(&mut self, target: NodeId) -> bool {
        let reached = self.navigator.surface().document().dispatch_click(target);

        let mut moved = false;
        for listener in reached {
            let Some(&(_, control)) = self.bindings.iter().find(|(id, _)| *id == listener) else {
                continue;
            };
            moved |= match control {
                Control::Next => self.navigator.next(),
                Control::Previous => self.navigator.previous(),
            };
        }
        moved
    }

    /// Click one of the two navigation buttons
    pub fn click_control(&mut self, control: Control) -> bool {
        let button = self.navigator.surface().control(control);
        self.click(button)
    }

    pub fn position(&self) -> Position {
        self.navigator.position()
    }

    pub fn button_states(&self) -> ButtonStates {
        self.navigator.button_states()
    }

    pub fn navigator(&self) -> &Navigator<DomSurface> {
        &self.navigator
    }

    pub fn document(&self) -> &Document {
        self.navigator.surface().document()
    }

    /// Slides currently displayed
    pub fn visible_slides(&self) -> Vec<NodeId> {
        let doc = self.document();
        let config = self.navigator.surface().config();
        doc.get_elements_by_class_name(doc.tree().root(), &config.slide_class)
            .into_iter()
            .filter(|&slide| doc.display(slide).is_some_and(|d| d.is_visible()))
            .collect()
    }

    /// Give the page back, dropping navigation state
    pub fn into_document(self) -> Document {
        self.navigator.into_surface().into_document()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><head><title>Deck</title></head><body>
        <div class="slide" id="s0">
            <p class="step" step_index="1" id="b">B</p>
            <p class="step" step_index="0" id="a">A</p>
        </div>
        <div class="slide" id="s1"><p>Done</p></div>
        <button id="prev-button"><span id="prev-label">Prev</span></button>
        <button id="next-button">Next</button>
        </body></html>
    "#;

    fn load() -> Presentation {
        Presentation::from_html(PAGE, DeckConfig::default()).unwrap()
    }

    fn id(p: &Presentation, id: &str) -> NodeId {
        p.document().get_element_by_id(id).unwrap()
    }

    #[test]
    fn test_load_registers_both_buttons() {
        let p = load();
        assert_eq!(p.bindings.len(), 2);
        assert_eq!(p.document().listeners().len(), 2);
        assert_eq!(p.position(), Position::START);
    }

    #[test]
    fn test_click_next_button() {
        let mut p = load();
        let next = id(&p, "next-button");
        assert!(p.click(next));
        assert_eq!(p.position(), Position::new(0, 1));
    }

    #[test]
    fn test_disabled_previous_ignores_click() {
        let mut p = load();
        let prev = id(&p, "prev-button");
        assert!(p.document().is_disabled(prev));
        assert!(!p.click(prev));
        assert_eq!(p.position(), Position::START);
    }

    #[test]
    fn test_click_on_button_label_bubbles() {
        let mut p = load();
        p.click_control(Control::Next);
        let label = id(&p, "prev-label");
        assert!(p.click(label));
        assert_eq!(p.position(), Position::START);
    }

    #[test]
    fn test_click_elsewhere_does_nothing() {
        let mut p = load();
        let slide = id(&p, "s0");
        assert!(!p.click(slide));
    }

    #[test]
    fn test_visible_slides_tracks_navigation() {
        let mut p = load();
        assert_eq!(p.visible_slides(), vec![id(&p, "s0")]);
        p.click_control(Control::Next);
        p.click_control(Control::Next);
        assert_eq!(p.visible_slides(), vec![id(&p, "s1")]);
        assert!(p.document().is_disabled(id(&p, "next-button")));
    }

    #[test]
    fn test_missing_control_fails_load() {
        let err = Presentation::from_html(
            r#"<div class="slide"></div><button id="prev-button"></button>"#,
            DeckConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err, NavError::MissingControl("next-button".to_string()));
    }

    #[test]
    fn test_page_without_slides_fails_load() {
        let err = Presentation::from_html(
            r#"<button id="prev-button"></button><button id="next-button"></button>"#,
            DeckConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err, NavError::EmptyDeck);
    }
}
