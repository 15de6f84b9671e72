//! Navigation positions

use std::fmt;

/// A point in the navigation ordering: slide index and step rank.
///
/// Ordering is lexicographic, slide first. A slide without steps has the
/// single position `step == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub slide: usize,
    pub step: usize,
}

impl Position {
    /// First position of every presentation
    pub const START: Position = Position { slide: 0, step: 0 };

    pub const fn new(slide: usize, step: usize) -> Self {
        Self { slide, step }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slide {} step {}", self.slide, self.step)
    }
}

/// Enablement of the two navigation controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonStates {
    pub previous_disabled: bool,
    pub next_disabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicographic_order() {
        assert!(Position::new(0, 5) < Position::new(1, 0));
        assert!(Position::new(2, 1) < Position::new(2, 2));
        assert_eq!(Position::default(), Position::START);
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(1, 2).to_string(), "slide 1 step 2");
    }
}
