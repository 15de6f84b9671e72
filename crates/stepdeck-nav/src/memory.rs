//! In-memory surface
//!
//! A page stand-in with no document behind it: slides and steps are plain
//! indices and every visibility or control write is recorded for inspection.

use std::collections::HashMap;

use crate::{Control, NavError, SlideSurface, StepEntry};

/// Slide (`step == None`) or step (`step == Some(page index)`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemoryHandle {
    pub slide: usize,
    pub step: Option<usize>,
}

impl MemoryHandle {
    pub const fn slide(slide: usize) -> Self {
        Self { slide, step: None }
    }

    pub const fn step(slide: usize, step: usize) -> Self {
        Self { slide, step: Some(step) }
    }
}

/// Surface backed by plain vectors
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    /// Per slide, the order attribute of each step in page order
    step_orders: Vec<Vec<i64>>,
    visible: HashMap<MemoryHandle, bool>,
    previous_disabled: bool,
    next_disabled: bool,
}

impl MemorySurface {
    /// One entry per slide listing its steps' order values in page order
    pub fn new(step_orders: Vec<Vec<i64>>) -> Self {
        Self {
            step_orders,
            ..Self::default()
        }
    }

    /// `count` slides without steps
    pub fn with_plain_slides(count: usize) -> Self {
        Self::new(vec![Vec::new(); count])
    }

    /// Last visibility written for an element, `None` if never touched
    pub fn is_visible(&self, handle: MemoryHandle) -> Option<bool> {
        self.visible.get(&handle).copied()
    }

    /// Indices of the slides currently shown
    pub fn visible_slides(&self) -> Vec<usize> {
        (0..self.step_orders.len())
            .filter(|&i| self.is_visible(MemoryHandle::slide(i)) == Some(true))
            .collect()
    }

    /// Page indices of the steps currently shown on a slide
    pub fn visible_steps(&self, slide: usize) -> Vec<usize> {
        let count = self.step_orders.get(slide).map_or(0, Vec::len);
        (0..count)
            .filter(|&j| self.is_visible(MemoryHandle::step(slide, j)) == Some(true))
            .collect()
    }

    /// Order value of the single visible step on a slide
    pub fn visible_step_order(&self, slide: usize) -> Option<i64> {
        match self.visible_steps(slide).as_slice() {
            [only] => self.step_orders[slide].get(*only).copied(),
            _ => None,
        }
    }

    pub fn is_control_disabled(&self, control: Control) -> bool {
        match control {
            Control::Previous => self.previous_disabled,
            Control::Next => self.next_disabled,
        }
    }
}

impl SlideSurface for MemorySurface {
    type Handle = MemoryHandle;

    fn slides(&self) -> Vec<MemoryHandle> {
        (0..self.step_orders.len()).map(MemoryHandle::slide).collect()
    }

    fn steps(&self, slide: MemoryHandle) -> Result<Vec<StepEntry<MemoryHandle>>, NavError> {
        let orders = self.step_orders.get(slide.slide).map(Vec::as_slice).unwrap_or(&[]);
        Ok(orders
            .iter()
            .enumerate()
            .map(|(j, &order)| StepEntry {
                handle: MemoryHandle::step(slide.slide, j),
                order,
            })
            .collect())
    }

    fn set_visible(&mut self, element: MemoryHandle, visible: bool) {
        self.visible.insert(element, visible);
    }

    fn set_control_disabled(&mut self, control: Control, disabled: bool) {
        match control {
            Control::Previous => self.previous_disabled = disabled,
            Control::Next => self.next_disabled = disabled,
        }
    }
}
