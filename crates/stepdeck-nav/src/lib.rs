//! Stepdeck Navigation
//!
//! Moves through a presentation one position at a time. A presentation is
//! an ordered list of slides; each slide may hold steps that are revealed one
//! by one, in the order given by their numeric `step_index` attribute.
//!
//! The state machine lives in [`Navigator`] and only talks to the page
//! through the [`SlideSurface`] trait. [`DomSurface`] implements it over a
//! `stepdeck_dom::Document`, and [`Presentation`] wires the page's previous
//! and next buttons to the navigator.
//!
//! # Example
//! ```rust,ignore
//! use stepdeck_nav::{Control, DeckConfig, Presentation};
//!
//! let mut deck = Presentation::from_html(html, DeckConfig::default())?;
//! deck.click_control(Control::Next);
//! println!("now at {}", deck.position());
//! ```

mod config;
mod dom_surface;
mod error;
mod memory;
mod navigator;
mod position;
mod presentation;
mod surface;

pub use config::DeckConfig;
pub use dom_surface::DomSurface;
pub use error::NavError;
pub use memory::{MemoryHandle, MemorySurface};
pub use navigator::Navigator;
pub use position::{ButtonStates, Position};
pub use presentation::Presentation;
pub use surface::{Control, SlideSurface, StepEntry};

// Re-export sub-crates for callers building documents by hand
pub use stepdeck_dom as dom;
pub use stepdeck_html as html;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
