// ABOUTME: Library module for the carousel program.
// ABOUTME: Headless slider controller, document model, markup codec and page tooling.

pub mod bootstrap;
pub mod config;
pub mod controller;
pub mod dom;
pub mod errors;
pub mod icons;
pub mod markup;
pub mod page;
pub mod presentation;
pub mod render;
pub mod script;
pub mod state;
pub mod timer;
pub mod watch;

pub use bootstrap::bootstrap;
pub use config::{BootstrapOptions, Config, SliderConfig};
pub use controller::{Command, SliderController};
pub use dom::{Document, NodeId};
pub use errors::{Result, SliderError};
pub use page::Page;
pub use presentation::{Presentation, SlideFlags};
pub use render::{render_file, render_markup};
pub use script::{parse_steps, run_script, Step, StepReport};
pub use state::{Direction, SliderState};
pub use timer::{AutoPlay, Scheduler, TimerHandle, TimerQueue};
pub use watch::{watch_markup, WatchConfig};
