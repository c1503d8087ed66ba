// ABOUTME: Simulation script for driving a slider from the command line
// ABOUTME: Parses steps like `next`, `goto:3`, `wait:6000` and runs them against a page

use crate::controller::Command;
use crate::errors::{Result, SliderError};
use crate::page::Page;
use crate::state::Direction;
use log::debug;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Previous,
    Next,
    GoTo(usize),
    /// Click the indicator at this position.
    Dot(usize),
    Wait(Duration),
}

impl FromStr for Step {
    type Err = SliderError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };

        let number = |arg: Option<&str>| -> Result<u64> {
            let arg = arg.ok_or_else(|| {
                SliderError::ScriptError(format!("step {:?} needs a number, e.g. {}:1", s, name))
            })?;
            arg.trim()
                .parse::<u64>()
                .map_err(|e| SliderError::ScriptError(format!("bad number in {:?}: {}", s, e)))
        };

        match name {
            "prev" | "previous" => Ok(Step::Previous),
            "next" => Ok(Step::Next),
            "goto" => Ok(Step::GoTo(number(arg)? as usize)),
            "dot" => Ok(Step::Dot(number(arg)? as usize)),
            "wait" => Ok(Step::Wait(Duration::from_millis(number(arg)?))),
            _ => Err(SliderError::ScriptError(format!("unknown step {:?}", s))),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Previous => write!(f, "prev"),
            Step::Next => write!(f, "next"),
            Step::GoTo(i) => write!(f, "goto:{}", i),
            Step::Dot(i) => write!(f, "dot:{}", i),
            Step::Wait(d) => write!(f, "wait:{}", d.as_millis()),
        }
    }
}

pub fn parse_steps(steps: &[String]) -> Result<Vec<Step>> {
    steps.iter().map(|s| s.parse()).collect()
}

/// State of the targeted slider after one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub step: Step,
    pub at_ms: u128,
    pub active_index: usize,
    pub direction: Option<Direction>,
}

impl fmt::Display for StepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = self
            .direction
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        write!(
            f,
            "t={}ms {:<10} slide={} direction={}",
            self.at_ms,
            self.step.to_string(),
            self.active_index,
            direction
        )
    }
}

/// Run `steps` against slider `slider` of `page`.
pub fn run_script(page: &mut Page, slider: usize, steps: &[Step]) -> Result<Vec<StepReport>> {
    if page.slider(slider).is_none() {
        return Err(SliderError::UnknownSlider {
            position: slider,
            count: page.sliders().len(),
        });
    }

    let mut reports = Vec::with_capacity(steps.len());
    for step in steps {
        match *step {
            Step::Previous => {
                page.dispatch(slider, Command::Previous)?;
            }
            Step::Next => {
                page.dispatch(slider, Command::Next)?;
            }
            Step::GoTo(index) => {
                page.dispatch(slider, Command::GoTo(index))?;
            }
            Step::Dot(index) => {
                let dot = page
                    .slider(slider)
                    .and_then(|s| s.indicators().get(index).copied())
                    .ok_or_else(|| SliderError::ScriptError(format!("no indicator {}", index)))?;
                page.click(dot)?;
            }
            Step::Wait(duration) => {
                let fired = page.advance(duration);
                debug!("{} timer firing(s) during {:?}", fired, duration);
            }
        }

        if let Some(controller) = page.slider(slider) {
            reports.push(StepReport {
                step: *step,
                at_ms: page.now().as_millis(),
                active_index: controller.active_index(),
                direction: controller.direction(),
            });
        }
    }
    Ok(reports)
}
