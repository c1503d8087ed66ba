// ABOUTME: Presentation state derived from the slider state
// ABOUTME: Computes per-slide and per-indicator flags and applies them to the document

use crate::dom::{Document, NodeId};
use crate::state::SliderState;

pub const ACTIVE_CLASS: &str = "active";
pub const FORWARD_CLASS: &str = "forward";
pub const BACKWARD_CLASS: &str = "backward";
pub const OFFSET_PROPERTY: &str = "transform";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideFlags {
    pub active: bool,
    pub forward: bool,
    pub backward: bool,
    /// Horizontal shift in percent; shared by every slide.
    pub offset_percent: i64,
}

impl SlideFlags {
    pub fn transform(&self) -> String {
        format!("translateX({}%)", self.offset_percent)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    pub slides: Vec<SlideFlags>,
    pub indicators: Vec<bool>,
}

impl Presentation {
    pub fn of(state: &SliderState) -> Self {
        let active = state.active_index();
        let offset_percent = -100 * active as i64;
        let slides = (0..state.total_slides())
            .map(|i| SlideFlags {
                active: i == active,
                forward: i > active,
                backward: i < active,
                offset_percent,
            })
            .collect();
        let indicators = (0..state.total_slides()).map(|i| i == active).collect();
        Self { slides, indicators }
    }

    /// Mirror the flags onto slide and indicator elements, pairing by position.
    pub fn apply(&self, doc: &mut Document, slides: &[NodeId], indicators: &[NodeId]) {
        for (flags, slide) in self.slides.iter().zip(slides) {
            doc.toggle_class(*slide, ACTIVE_CLASS, flags.active);
            doc.set_style_property(*slide, OFFSET_PROPERTY, &flags.transform());
            doc.toggle_class(*slide, FORWARD_CLASS, flags.forward);
            doc.toggle_class(*slide, BACKWARD_CLASS, flags.backward);
        }
        for (active, indicator) in self.indicators.iter().zip(indicators) {
            doc.toggle_class(*indicator, ACTIVE_CLASS, *active);
        }
    }
}
