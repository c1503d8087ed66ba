// ABOUTME: The carousel controller: builds controls, owns navigation state and auto-play
// ABOUTME: All input is routed through explicit commands so it can run without a browser

use crate::config::SliderConfig;
use crate::dom::{Document, NodeId};
use crate::errors::{Result, SliderError};
use crate::icons;
use crate::markup;
use crate::presentation::Presentation;
use crate::state::{Direction, SliderState};
use crate::timer::{AutoPlay, Scheduler, TimerHandle};
use log::{debug, info};

pub const SLIDES_CONTAINER_CLASS: &str = "slides-container";
pub const ARROW_CLASS: &str = "arrow";
pub const ARROW_LEFT_CLASS: &str = "arrow-left";
pub const ARROW_RIGHT_CLASS: &str = "arrow-right";
pub const DOTS_CONTAINER_CLASS: &str = "dots-container";
pub const DOT_CLASS: &str = "dot";

/// A manual navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Previous,
    Next,
    GoTo(usize),
}

#[derive(Debug)]
pub struct SliderController {
    container: NodeId,
    slides: Vec<NodeId>,
    previous: NodeId,
    next: NodeId,
    dots: Vec<NodeId>,
    state: SliderState,
    auto_play: AutoPlay,
    renders: usize,
}

impl SliderController {
    /// Attach a controller to `container`.
    ///
    /// The slides are the element children of the first `.slides-container`
    /// inside `container`. Two arrow controls and a dots container with one
    /// dot per slide are appended to `container`, slide 0 is shown, and the
    /// auto-play timer is started when the config asks for it.
    pub fn new<S: Scheduler>(
        doc: &mut Document,
        container: NodeId,
        config: SliderConfig,
        scheduler: &mut S,
    ) -> Result<Self> {
        config.validate()?;

        let slides_container = doc
            .find_descendant_by_class(container, SLIDES_CONTAINER_CLASS)
            .ok_or(SliderError::MissingSlidesContainer)?;
        let slides = doc.element_children(slides_container);
        let state = SliderState::new(slides.len())?;

        let previous = create_arrow(doc, container, ARROW_LEFT_CLASS, icons::ARROW_LEFT_PATH)?;
        let next = create_arrow(doc, container, ARROW_RIGHT_CLASS, icons::ARROW_RIGHT_PATH)?;
        let dots = generate_dots(doc, container, slides.len());

        let mut controller = Self {
            container,
            slides,
            previous,
            next,
            dots,
            state,
            auto_play: AutoPlay::new(config.auto_play, config.auto_play_interval),
            renders: 0,
        };
        controller.render(doc);

        if config.auto_play {
            controller.auto_play.arm(scheduler);
        }

        info!(
            "Slider attached with {} slides (auto-play: {})",
            controller.total_slides(),
            config.auto_play
        );
        Ok(controller)
    }

    pub fn container(&self) -> NodeId {
        self.container
    }

    pub fn slides(&self) -> &[NodeId] {
        &self.slides
    }

    pub fn indicators(&self) -> &[NodeId] {
        &self.dots
    }

    pub fn previous_control(&self) -> NodeId {
        self.previous
    }

    pub fn next_control(&self) -> NodeId {
        self.next
    }

    pub fn active_index(&self) -> usize {
        self.state.active_index()
    }

    pub fn total_slides(&self) -> usize {
        self.state.total_slides()
    }

    pub fn direction(&self) -> Option<Direction> {
        self.state.direction()
    }

    /// How many times presentation state has been written to the document.
    pub fn render_count(&self) -> usize {
        self.renders
    }

    pub fn is_auto_playing(&self) -> bool {
        self.auto_play.is_running()
    }

    pub fn timer(&self) -> Option<TimerHandle> {
        self.auto_play.handle()
    }

    /// Move to `index` without touching the timer. Already active is a no-op.
    pub fn go_to(&mut self, doc: &mut Document, index: usize) -> Result<Option<Direction>> {
        let moved = self.state.go_to(index)?;
        if let Some(direction) = moved {
            debug!("Slide {} is now active ({})", index, direction);
            self.render(doc);
        }
        Ok(moved)
    }

    pub fn go_to_previous(&mut self, doc: &mut Document) -> Option<Direction> {
        let index = self.state.previous_index();
        self.go_to_in_range(doc, index)
    }

    pub fn go_to_next(&mut self, doc: &mut Document) -> Option<Direction> {
        let index = self.state.next_index();
        self.go_to_in_range(doc, index)
    }

    fn go_to_in_range(&mut self, doc: &mut Document, index: usize) -> Option<Direction> {
        debug_assert!(index < self.total_slides());
        self.go_to(doc, index).ok().flatten()
    }

    /// Handle a manual navigation. A running auto-play timer is restarted so
    /// the next automatic advance is a full interval away.
    pub fn dispatch<S: Scheduler>(
        &mut self,
        doc: &mut Document,
        scheduler: &mut S,
        command: Command,
    ) -> Result<Option<Direction>> {
        let moved = match command {
            Command::Previous => self.go_to_previous(doc),
            Command::Next => self.go_to_next(doc),
            Command::GoTo(index) => self.go_to(doc, index)?,
        };
        self.auto_play.restart(scheduler);
        Ok(moved)
    }

    /// Map a click target to a command: arrows match the target or any of
    /// its ancestors, dots only match exactly.
    pub fn command_for_click(&self, doc: &Document, target: NodeId) -> Option<Command> {
        if let Some(index) = self.dots.iter().position(|dot| *dot == target) {
            return Some(Command::GoTo(index));
        }
        if doc.contains(self.previous, target) {
            return Some(Command::Previous);
        }
        if doc.contains(self.next, target) {
            return Some(Command::Next);
        }
        None
    }

    /// Returns false when the click was not on one of this slider's controls.
    pub fn handle_click<S: Scheduler>(
        &mut self,
        doc: &mut Document,
        scheduler: &mut S,
        target: NodeId,
    ) -> Result<bool> {
        match self.command_for_click(doc, target) {
            Some(command) => {
                self.dispatch(doc, scheduler, command)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Handle a timer firing. Returns false when `handle` is not this
    /// controller's timer.
    pub fn on_timer(&mut self, doc: &mut Document, handle: TimerHandle) -> bool {
        if self.auto_play.handle() != Some(handle) {
            return false;
        }
        self.go_to_next(doc);
        true
    }

    /// Stop auto-play. Safe to call more than once.
    pub fn destroy<S: Scheduler>(&mut self, scheduler: &mut S) {
        self.auto_play.disarm(scheduler);
    }

    fn render(&mut self, doc: &mut Document) {
        Presentation::of(&self.state).apply(doc, &self.slides, &self.dots);
        self.renders += 1;
    }
}

fn create_arrow(doc: &mut Document, container: NodeId, class: &str, path: &str) -> Result<NodeId> {
    let arrow = doc.create_element("div");
    doc.add_class(arrow, ARROW_CLASS);
    doc.add_class(arrow, class);
    markup::parse_fragment(doc, arrow, &icons::arrow_svg(path))?;
    doc.append_child(container, arrow);
    Ok(arrow)
}

fn generate_dots(doc: &mut Document, container: NodeId, count: usize) -> Vec<NodeId> {
    let dots_container = doc.create_element("div");
    doc.add_class(dots_container, DOTS_CONTAINER_CLASS);

    let dots = (0..count)
        .map(|_| {
            let dot = doc.create_element("span");
            doc.add_class(dot, DOT_CLASS);
            doc.append_child(dots_container, dot);
            dot
        })
        .collect();

    doc.append_child(container, dots_container);
    dots
}
