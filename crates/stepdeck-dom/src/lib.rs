//! Stepdeck DOM - Document Object Model
//!
//! Arena-backed DOM tree holding the slides, steps and navigation
//! controls of a presentation page.

mod document;
mod events;
mod interner;
mod node;
mod style;
mod tree;

pub use document::Document;
pub use events::{EventListenerRegistry, EventType, ListenerId};
pub use interner::{InternedString, StringInterner};
pub use node::{Attribute, ElementData, Node, NodeData};
pub use style::{Display, InlineStyle};
pub use tree::{Children, DomTree};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Sentinel for "no node" links
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check if this refers to an actual node
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// Arena index
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
