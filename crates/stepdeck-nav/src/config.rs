//! Presentation Configuration

/// Where the navigator finds slides, steps and controls in a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckConfig {
    /// Class marking each slide container
    pub slide_class: String,

    /// Class marking each step inside a slide
    pub step_class: String,

    /// Integer attribute giving a step's reveal order
    pub step_order_attr: String,

    /// Id of the "previous" button
    pub prev_button_id: String,

    /// Id of the "next" button
    pub next_button_id: String,
}

impl DeckConfig {
    pub fn with_slide_class(mut self, class: impl Into<String>) -> Self {
        self.slide_class = class.into();
        self
    }

    pub fn with_step_class(mut self, class: impl Into<String>) -> Self {
        self.step_class = class.into();
        self
    }

    pub fn with_step_order_attr(mut self, attr: impl Into<String>) -> Self {
        self.step_order_attr = attr.into();
        self
    }

    pub fn with_buttons(mut self, prev_id: impl Into<String>, next_id: impl Into<String>) -> Self {
        self.prev_button_id = prev_id.into();
        self.next_button_id = next_id.into();
        self
    }
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            slide_class: "slide".to_string(),
            step_class: "step".to_string(),
            step_order_attr: "step_index".to_string(),
            prev_button_id: "prev-button".to_string(),
            next_button_id: "next-button".to_string(),
        }
    }
}
