// ABOUTME: Single-threaded host event loop for a page of sliders
// ABOUTME: Owns the document, the timer queue and the controllers; routes clicks and timer firings

use crate::bootstrap::bootstrap;
use crate::config::BootstrapOptions;
use crate::controller::{Command, SliderController};
use crate::dom::{Document, NodeId};
use crate::errors::{Result, SliderError};
use crate::state::Direction;
use crate::timer::TimerQueue;
use log::{debug, info};
use std::time::Duration;

/// Every event runs to completion before the next one is delivered.
pub struct Page {
    document: Document,
    timers: TimerQueue,
    sliders: Vec<SliderController>,
}

impl Page {
    /// Take ownership of `document` and attach controllers to its sliders.
    pub fn load(mut document: Document, options: &BootstrapOptions) -> Self {
        let mut timers = TimerQueue::new();
        let sliders = bootstrap(&mut document, &mut timers, options);
        Self {
            document,
            timers,
            sliders,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn sliders(&self) -> &[SliderController] {
        &self.sliders
    }

    pub fn slider(&self, index: usize) -> Option<&SliderController> {
        self.sliders.get(index)
    }

    pub fn timers(&self) -> &TimerQueue {
        &self.timers
    }

    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// Deliver a click on `target`. Sliders containing it are tried innermost
    /// first, so a slider nested in another slider's slide gets its own
    /// clicks. Returns false when nothing handled the click.
    pub fn click(&mut self, target: NodeId) -> Result<bool> {
        let mut owners: Vec<(usize, usize)> = self
            .sliders
            .iter()
            .enumerate()
            .filter(|(_, slider)| self.document.contains(slider.container(), target))
            .map(|(i, slider)| (i, self.document.ancestors(slider.container()).len()))
            .collect();
        owners.sort_by(|a, b| b.1.cmp(&a.1));

        for (i, _) in owners {
            if self.sliders[i].handle_click(&mut self.document, &mut self.timers, target)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    pub fn dispatch(&mut self, slider: usize, command: Command) -> Result<Option<Direction>> {
        let count = self.sliders.len();
        let controller = self
            .sliders
            .get_mut(slider)
            .ok_or(SliderError::UnknownSlider {
                position: slider,
                count,
            })?;
        controller.dispatch(&mut self.document, &mut self.timers, command)
    }

    /// Let `by` pass on the virtual clock, firing every timer that falls due
    /// in order. Returns the number of firings.
    pub fn advance(&mut self, by: Duration) -> usize {
        let until = self.timers.now() + by;
        let mut fired = 0;
        while let Some(handle) = self.timers.pop_due(until) {
            fired += 1;
            debug!("Timer {:?} fired at {:?}", handle, self.timers.now());
            for slider in &mut self.sliders {
                if slider.on_timer(&mut self.document, handle) {
                    break;
                }
            }
        }
        self.timers.advance_to(until);
        fired
    }

    /// Destroy every controller, leaving no live timers behind.
    pub fn unload(&mut self) {
        for slider in &mut self.sliders {
            slider.destroy(&mut self.timers);
        }
        info!("Page unloaded ({} slider(s))", self.sliders.len());
    }
}
