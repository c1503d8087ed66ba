// ABOUTME: Timer facility for carousel auto-play
// ABOUTME: Scheduler trait, a deterministic virtual-clock queue, and the owned auto-play timer

use log::debug;
use std::collections::BTreeMap;
use std::time::Duration;

/// Opaque reference to a live recurring timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// The host's recurring-timer facility.
pub trait Scheduler {
    fn set_interval(&mut self, period: Duration) -> TimerHandle;
    /// Clearing an unknown or already cleared handle does nothing.
    fn clear_interval(&mut self, handle: TimerHandle);
}

#[derive(Debug, Clone, Copy)]
struct Interval {
    period: Duration,
    next_due: Duration,
}

/// Recurring timers driven by a virtual clock.
///
/// Time only moves through [`TimerQueue::pop_due`] and
/// [`TimerQueue::advance_to`], so firing order is fully deterministic: by due
/// time, then by registration order.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_handle: u64,
    intervals: BTreeMap<TimerHandle, Interval>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn is_live(&self, handle: TimerHandle) -> bool {
        self.intervals.contains_key(&handle)
    }

    pub fn live_count(&self) -> usize {
        self.intervals.len()
    }

    /// Next due time across all live timers.
    pub fn next_due(&self) -> Option<Duration> {
        self.intervals.values().map(|i| i.next_due).min()
    }

    /// Fire the earliest timer due at or before `until`, moving the clock to
    /// its due time and scheduling its next occurrence.
    pub fn pop_due(&mut self, until: Duration) -> Option<TimerHandle> {
        let (handle, interval) = self
            .intervals
            .iter_mut()
            .filter(|(_, i)| i.next_due <= until)
            .min_by_key(|(handle, i)| (i.next_due, **handle))?;
        self.now = interval.next_due;
        interval.next_due += interval.period;
        Some(*handle)
    }

    /// Move the clock forward without firing anything.
    pub fn advance_to(&mut self, at: Duration) {
        if at > self.now {
            self.now = at;
        }
    }
}

impl Scheduler for TimerQueue {
    fn set_interval(&mut self, period: Duration) -> TimerHandle {
        self.next_handle += 1;
        let handle = TimerHandle(self.next_handle);
        self.intervals.insert(
            handle,
            Interval {
                period,
                next_due: self.now + period,
            },
        );
        debug!("Timer {:?} armed, period {:?}", handle, period);
        handle
    }

    fn clear_interval(&mut self, handle: TimerHandle) {
        if self.intervals.remove(&handle).is_some() {
            debug!("Timer {:?} cleared", handle);
        }
    }
}

/// The auto-play timer owned by one controller.
#[derive(Debug)]
pub struct AutoPlay {
    enabled: bool,
    interval: Duration,
    handle: Option<TimerHandle>,
}

impl AutoPlay {
    pub fn new(enabled: bool, interval: Duration) -> Self {
        Self {
            enabled,
            interval,
            handle: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn handle(&self) -> Option<TimerHandle> {
        self.handle
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Start the timer unless it is already running.
    pub fn arm<S: Scheduler>(&mut self, scheduler: &mut S) {
        if self.handle.is_none() {
            self.handle = Some(scheduler.set_interval(self.interval));
        }
    }

    /// Stop the timer if it is running.
    pub fn disarm<S: Scheduler>(&mut self, scheduler: &mut S) {
        if let Some(handle) = self.handle.take() {
            scheduler.clear_interval(handle);
        }
    }

    /// Reset the phase of a running timer. A stopped timer stays stopped.
    pub fn restart<S: Scheduler>(&mut self, scheduler: &mut S) {
        if self.enabled && self.is_running() {
            self.disarm(scheduler);
            self.arm(scheduler);
        }
    }
}
