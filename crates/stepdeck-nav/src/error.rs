//! Navigation errors

/// Errors raised while capturing a presentation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    #[error("presentation has no slides")]
    EmptyDeck,

    #[error("slide index {index} out of range ({count} slides)")]
    SlideOutOfRange { index: usize, count: usize },

    #[error("step has no `{attr}` attribute")]
    MissingStepOrder { attr: String },

    #[error("step order `{value}` is not an integer")]
    InvalidStepOrder { value: String },

    #[error("control element `#{0}` not found")]
    MissingControl(String),
}
