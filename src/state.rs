// ABOUTME: Pure slide-index state machine for a carousel
// ABOUTME: Tracks the active slide and the direction of the last move, with wrap-around helpers

use crate::errors::{Result, SliderError};
use std::fmt;

/// Direction of the last completed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Backward => write!(f, "backward"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliderState {
    active_index: usize,
    total_slides: usize,
    direction: Option<Direction>,
}

impl SliderState {
    /// Start at slide 0. A slider needs at least one slide.
    pub fn new(total_slides: usize) -> Result<Self> {
        if total_slides == 0 {
            return Err(SliderError::NoSlides);
        }
        Ok(Self {
            active_index: 0,
            total_slides,
            direction: None,
        })
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn total_slides(&self) -> usize {
        self.total_slides
    }

    /// `None` until the first move.
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn previous_index(&self) -> usize {
        (self.active_index + self.total_slides - 1) % self.total_slides
    }

    pub fn next_index(&self) -> usize {
        (self.active_index + 1) % self.total_slides
    }

    /// Move to `index`. Returns `Ok(None)` when `index` is already active;
    /// the state is left untouched on error.
    pub fn go_to(&mut self, index: usize) -> Result<Option<Direction>> {
        if index >= self.total_slides {
            return Err(SliderError::IndexOutOfRange {
                index,
                total: self.total_slides,
            });
        }
        if index == self.active_index {
            return Ok(None);
        }

        let direction = if index > self.active_index {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.active_index = index;
        self.direction = Some(direction);
        Ok(Some(direction))
    }
}
