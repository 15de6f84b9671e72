//! The capabilities the navigator needs from a page

use std::fmt;

use crate::NavError;

/// One of the two navigation controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Previous,
    Next,
}

/// A step as found on the page, before ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepEntry<H> {
    pub handle: H,
    /// Value of the step's order attribute
    pub order: i64,
}

/// Page abstraction driven by [`Navigator`](crate::Navigator).
///
/// Slides and steps belong to the surface; the navigator only reads their
/// structure once and afterwards flips visibility and control flags.
pub trait SlideSurface {
    /// Reference to a slide or step element
    type Handle: Copy + Eq + fmt::Debug;

    /// All slides, in stable page order
    fn slides(&self) -> Vec<Self::Handle>;

    /// Steps of a slide in page order, each with its order attribute
    fn steps(&self, slide: Self::Handle) -> Result<Vec<StepEntry<Self::Handle>>, NavError>;

    /// Show or hide a slide or step
    fn set_visible(&mut self, element: Self::Handle, visible: bool);

    /// Enable or disable a navigation control
    fn set_control_disabled(&mut self, control: Control, disabled: bool);
}
