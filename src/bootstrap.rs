// ABOUTME: Discovery of sliders in a document
// ABOUTME: Builds one controller per element carrying the slider class

use crate::config::{parse_interval_ms, BootstrapOptions, SliderConfig};
use crate::controller::SliderController;
use crate::dom::{Document, NodeId};
use crate::errors::Result;
use crate::timer::Scheduler;
use log::{info, warn};
use std::time::Duration;

pub const AUTO_PLAY_ATTRIBUTE: &str = "data-auto-play";
pub const INTERVAL_ATTRIBUTE: &str = "data-autoplay-interval";

/// Read a slider element's settings: auto-play from the marker class or
/// attribute, interval from the interval attribute or the page default.
pub fn slider_config(
    doc: &Document,
    element: NodeId,
    options: &BootstrapOptions,
) -> Result<SliderConfig> {
    let auto_play = doc.has_class(element, &options.auto_play_class)
        || doc
            .attribute(element, AUTO_PLAY_ATTRIBUTE)
            .map(|v| v != "false")
            .unwrap_or(false);

    let auto_play_interval = match doc.attribute(element, INTERVAL_ATTRIBUTE) {
        Some(raw) => Duration::from_millis(parse_interval_ms(raw)?),
        None => options.default_interval,
    };

    Ok(SliderConfig {
        auto_play,
        auto_play_interval,
    })
}

/// Attach a controller to every slider in `doc`, in document order.
///
/// A slider that cannot be built is skipped with a warning so one broken
/// slider does not take down the rest of the page.
pub fn bootstrap<S: Scheduler>(
    doc: &mut Document,
    scheduler: &mut S,
    options: &BootstrapOptions,
) -> Vec<SliderController> {
    let elements = doc.elements_by_class(&options.slider_class);
    info!("Found {} slider element(s)", elements.len());

    let mut controllers = Vec::new();
    for element in elements {
        let built = slider_config(doc, element, options)
            .and_then(|config| SliderController::new(doc, element, config, scheduler));
        match built {
            Ok(controller) => controllers.push(controller),
            Err(e) => warn!("Skipping slider element {}: {}", element.index(), e),
        }
    }
    controllers
}
