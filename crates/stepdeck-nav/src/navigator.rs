//! Slide/step navigation state machine
//!
//! Positions `(slide, rank)` form a total order. `next` and `previous` move
//! exactly one position along it and do nothing at the respective end.
//! Entering a slide forwards lands on its first step; entering it backwards
//! lands on its last step.

use crate::{ButtonStates, Control, NavError, Position, SlideSurface};

/// A slide and its steps in rank order
#[derive(Debug)]
struct SlideLayout<H> {
    handle: H,
    steps: Vec<H>,
}

/// Navigation controller over a [`SlideSurface`]
#[derive(Debug)]
pub struct Navigator<S: SlideSurface> {
    surface: S,
    slides: Vec<SlideLayout<S::Handle>>,
    position: Position,
    buttons: ButtonStates,
}

impl<S: SlideSurface> Navigator<S> {
    /// Capture the surface's structure and show the first position.
    ///
    /// Steps are ranked here, once, by their order value. The sort is
    /// stable, so steps sharing an order value keep their page order.
    pub fn new(surface: S) -> Result<Self, NavError> {
        let handles = surface.slides();
        if handles.is_empty() {
            return Err(NavError::EmptyDeck);
        }

        let mut slides = Vec::with_capacity(handles.len());
        for handle in handles {
            let mut steps = surface.steps(handle)?;
            steps.sort_by_key(|s| s.order);
            slides.push(SlideLayout {
                handle,
                steps: steps.into_iter().map(|s| s.handle).collect(),
            });
        }

        let mut navigator = Self {
            surface,
            slides,
            position: Position::START,
            buttons: ButtonStates::default(),
        };
        navigator.enter_slide(0);

        tracing::debug!(
            slides = navigator.slide_count(),
            positions = navigator.position_count(),
            "navigator initialized"
        );
        Ok(navigator)
    }

    /// Show slide `index`, hide every other slide, and reset to its first step
    pub fn show_slide(&mut self, index: usize) -> Result<(), NavError> {
        if index >= self.slides.len() {
            return Err(NavError::SlideOutOfRange {
                index,
                count: self.slides.len(),
            });
        }
        self.enter_slide(index);
        Ok(())
    }

    fn enter_slide(&mut self, index: usize) {
        for (i, slide) in self.slides.iter().enumerate() {
            self.surface.set_visible(slide.handle, i == index);
        }
        self.position = Position::new(index, 0);
        self.show_step();
        self.refresh_button_states();
    }

    /// Show the current slide's step at the current rank and hide its others
    pub fn show_step(&mut self) {
        let rank = self.position.step;
        let slide = &self.slides[self.position.slide];
        for (i, &step) in slide.steps.iter().enumerate() {
            self.surface.set_visible(step, i == rank);
        }
        self.refresh_button_states();
    }

    /// Advance one position. Returns false at the last position.
    pub fn next(&mut self) -> bool {
        let from = self.position;

        if self.position.step + 1 < self.current_step_count() {
            self.position.step += 1;
            self.show_step();
        } else if self.position.slide + 1 < self.slides.len() {
            self.enter_slide(self.position.slide + 1);
        } else {
            tracing::trace!(%from, "next ignored at last position");
            return false;
        }

        tracing::debug!(%from, to = %self.position, "next");
        true
    }

    /// Go back one position. Returns false at the first position.
    pub fn previous(&mut self) -> bool {
        let from = self.position;

        if self.position.step > 0 {
            self.position.step -= 1;
            self.show_step();
        } else if self.position.slide > 0 {
            self.enter_slide(self.position.slide - 1);
            let count = self.current_step_count();
            if count > 0 {
                self.position.step = count - 1;
                self.show_step();
            }
        } else {
            tracing::trace!(%from, "previous ignored at first position");
            return false;
        }

        tracing::debug!(%from, to = %self.position, "previous");
        true
    }

    /// Recompute control enablement from the current position and write it out
    pub fn refresh_button_states(&mut self) {
        let Position { slide, step } = self.position;
        let count = self.current_step_count();
        let last_slide = slide + 1 == self.slides.len();

        let states = ButtonStates {
            previous_disabled: slide == 0 && step == 0,
            next_disabled: last_slide && (count == 0 || step + 1 == count),
        };

        self.surface.set_control_disabled(Control::Previous, states.previous_disabled);
        self.surface.set_control_disabled(Control::Next, states.next_disabled);
        self.buttons = states;
    }

    fn current_step_count(&self) -> usize {
        self.slides[self.position.slide].steps.len()
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn button_states(&self) -> ButtonStates {
        self.buttons
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Number of steps on a slide, `None` if the slide does not exist
    pub fn step_count(&self, slide: usize) -> Option<usize> {
        self.slides.get(slide).map(|s| s.steps.len())
    }

    /// Size of the navigation ordering: every slide counts at least once
    pub fn position_count(&self) -> usize {
        self.slides.iter().map(|s| s.steps.len().max(1)).sum()
    }

    /// Every position in navigation order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.slides.iter().enumerate().flat_map(|(slide, layout)| {
            (0..layout.steps.len().max(1)).map(move |step| Position::new(slide, step))
        })
    }

    pub fn first_position(&self) -> Position {
        Position::START
    }

    pub fn last_position(&self) -> Position {
        let slide = self.slides.len() - 1;
        let steps = self.slides[slide].steps.len();
        Position::new(slide, steps.saturating_sub(1))
    }

    pub fn is_at_start(&self) -> bool {
        self.position == self.first_position()
    }

    pub fn is_at_end(&self) -> bool {
        self.position == self.last_position()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Give the surface back, ending navigation
    pub fn into_surface(self) -> S {
        self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryHandle, MemorySurface};

    fn navigator(step_orders: Vec<Vec<i64>>) -> Navigator<MemorySurface> {
        Navigator::new(MemorySurface::new(step_orders)).unwrap()
    }

    #[test]
    fn test_empty_deck_rejected() {
        let err = Navigator::new(MemorySurface::new(Vec::new())).unwrap_err();
        assert_eq!(err, NavError::EmptyDeck);
    }

    #[test]
    fn test_initialize_shows_first_slide_and_rank_zero() {
        let nav = navigator(vec![vec![2, 0, 1], vec![]]);
        let surface = nav.surface();

        assert_eq!(nav.position(), Position::START);
        assert_eq!(surface.visible_slides(), vec![0]);
        assert_eq!(surface.is_visible(MemoryHandle::slide(1)), Some(false));
        assert_eq!(surface.visible_step_order(0), Some(0));
        assert!(surface.is_control_disabled(Control::Previous));
        assert!(!surface.is_control_disabled(Control::Next));
    }

    #[test]
    fn test_single_plain_slide_is_inert() {
        let mut nav = Navigator::new(MemorySurface::with_plain_slides(1)).unwrap();

        assert_eq!(
            nav.button_states(),
            ButtonStates { previous_disabled: true, next_disabled: true }
        );
        assert!(nav.surface().is_control_disabled(Control::Previous));
        assert!(nav.surface().is_control_disabled(Control::Next));
        assert!(!nav.next());
        assert!(!nav.previous());
        assert_eq!(nav.position(), Position::START);
    }

    #[test]
    fn test_steps_ranked_by_order_walkthrough() {
        let mut nav = navigator(vec![vec![2, 0, 1], vec![]]);

        assert!(nav.next());
        assert_eq!(nav.position(), Position::new(0, 1));
        assert_eq!(nav.surface().visible_step_order(0), Some(1));

        assert!(nav.next());
        assert_eq!(nav.position(), Position::new(0, 2));
        assert_eq!(nav.surface().visible_step_order(0), Some(2));

        assert!(nav.next());
        assert_eq!(nav.position(), Position::new(1, 0));
        assert_eq!(nav.surface().visible_slides(), vec![1]);
        assert!(nav.button_states().next_disabled);
        assert!(nav.surface().is_control_disabled(Control::Next));

        assert!(nav.previous());
        assert_eq!(nav.position(), Position::new(0, 2));
        assert_eq!(nav.surface().visible_slides(), vec![0]);
        assert_eq!(nav.surface().visible_step_order(0), Some(2));
        assert!(!nav.button_states().next_disabled);
    }

    #[test]
    fn test_three_plain_slides() {
        let mut nav = Navigator::new(MemorySurface::with_plain_slides(3)).unwrap();
        assert!(nav.next());
        assert!(nav.next());
        assert_eq!(nav.position(), Position::new(2, 0));
        assert_eq!(
            nav.button_states(),
            ButtonStates { previous_disabled: false, next_disabled: true }
        );
        assert!(!nav.next());
        assert_eq!(nav.position(), Position::new(2, 0));
    }

    #[test]
    fn test_forward_walk_visits_every_position_once() {
        let mut nav = navigator(vec![vec![], vec![3, 1], vec![], vec![0, 0, 9]]);
        let expected: Vec<_> = nav.positions().collect();
        assert_eq!(expected.len(), 1 + 2 + 1 + 3);
        assert_eq!(nav.position_count(), expected.len());

        let mut visited = vec![nav.position()];
        while nav.next() {
            visited.push(nav.position());
        }
        assert_eq!(visited, expected);
        assert!(nav.is_at_end());
        assert!(!nav.next());
    }

    #[test]
    fn test_backward_walk_mirrors_forward() {
        let mut nav = navigator(vec![vec![1, 2], vec![], vec![4, 3, 5]]);
        while nav.next() {}

        let mut visited = vec![nav.position()];
        while nav.previous() {
            visited.push(nav.position());
        }
        visited.reverse();
        assert_eq!(visited, nav.positions().collect::<Vec<_>>());
        assert!(nav.is_at_start());
    }

    #[test]
    fn test_buttons_disabled_only_at_ends() {
        let mut nav = navigator(vec![vec![0, 1], vec![], vec![7]]);
        loop {
            let states = nav.button_states();
            assert_eq!(states.previous_disabled, nav.position() == nav.first_position());
            assert_eq!(states.next_disabled, nav.position() == nav.last_position());
            if !nav.next() {
                break;
            }
        }
    }

    #[test]
    fn test_equal_orders_keep_page_order() {
        let mut nav = navigator(vec![vec![1, 0, 1]]);
        assert_eq!(nav.surface().visible_steps(0), vec![1]);
        nav.next();
        assert_eq!(nav.surface().visible_steps(0), vec![0]);
        nav.next();
        assert_eq!(nav.surface().visible_steps(0), vec![2]);
    }

    #[test]
    fn test_show_slide_resets_step() {
        let mut nav = navigator(vec![vec![0, 1], vec![0, 1]]);
        nav.next();
        nav.next();
        nav.next();
        assert_eq!(nav.position(), Position::new(1, 1));

        nav.show_slide(0).unwrap();
        assert_eq!(nav.position(), Position::new(0, 0));
        assert_eq!(nav.surface().visible_slides(), vec![0]);
        assert!(nav.button_states().previous_disabled);
    }

    #[test]
    fn test_show_slide_out_of_range() {
        let mut nav = navigator(vec![vec![]]);
        assert_eq!(
            nav.show_slide(3),
            Err(NavError::SlideOutOfRange { index: 3, count: 1 })
        );
        assert_eq!(nav.position(), Position::START);
    }

    #[test]
    fn test_last_position_of_plain_final_slide() {
        let nav = navigator(vec![vec![0, 1, 2], vec![]]);
        assert_eq!(nav.last_position(), Position::new(1, 0));
        assert_eq!(nav.step_count(0), Some(3));
        assert_eq!(nav.step_count(5), None);
    }
}
