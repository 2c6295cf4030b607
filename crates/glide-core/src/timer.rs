//! Timer queue for Glide.
//!
//! Provides repeating timers driven by an explicit clock. The queue
//! never reads the wall clock itself: callers pass `now` into every operation,
//! which lets a host run timers against `Instant::now()` in production and
//! against a manually advanced clock in tests.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

use slotmap::{SlotMap, new_key_type};

use crate::error::{Result, TimerError};
use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a timer.
    pub struct TimerId;
}

/// Internal timer data.
#[derive(Debug)]
struct TimerData {
    /// When this timer should next fire.
    next_fire: Instant,
    /// Time between fires.
    interval: Duration,
}

/// An entry in the timer queue (min-heap by fire time).
#[derive(Debug, Clone, Copy)]
struct TimerQueueEntry {
    id: TimerId,
    fire_time: Instant,
}

impl PartialEq for TimerQueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.fire_time == other.fire_time
    }
}

impl Eq for TimerQueueEntry {}

impl PartialOrd for TimerQueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimerQueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap (BinaryHeap is max-heap by default).
        other.fire_time.cmp(&self.fire_time)
    }
}

/// Manages a set of pending timers.
///
/// Stopped timers are removed from the slot map immediately; their heap
/// entries are discarded lazily when they reach the front of the queue.
#[derive(Debug, Default)]
pub struct TimerQueue {
    /// All live timers.
    timers: SlotMap<TimerId, TimerData>,
    /// Priority queue of pending timer fires (min-heap by fire time).
    queue: BinaryHeap<TimerQueueEntry>,
}

impl TimerQueue {
    /// Create an empty timer queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a repeating timer whose first fire occurs `interval` after `now`.
    pub fn start_repeating(&mut self, now: Instant, interval: Duration) -> Result<TimerId> {
        if interval.is_zero() {
            return Err(TimerError::ZeroInterval);
        }
        let next_fire = now + interval;
        let id = self.timers.insert(TimerData {
            next_fire,
            interval,
        });
        self.queue.push(TimerQueueEntry {
            id,
            fire_time: next_fire,
        });
        tracing::trace!(target: targets::TIMER, ?id, ?interval, "timer started");
        Ok(id)
    }

    /// Stop and remove a timer.
    ///
    /// Returns an error if the timer is unknown or has already been removed.
    pub fn stop(&mut self, id: TimerId) -> Result<()> {
        match self.timers.remove(id) {
            Some(_) => {
                tracing::trace!(target: targets::TIMER, ?id, "timer stopped");
                Ok(())
            }
            None => Err(TimerError::InvalidTimerId),
        }
    }

    /// Check if a timer is currently live.
    pub fn is_active(&self, id: TimerId) -> bool {
        self.timers.contains_key(id)
    }

    /// Get the number of live timers.
    pub fn active_count(&self) -> usize {
        self.timers.len()
    }

    /// Get the duration from `now` until the next timer fires, if any.
    pub fn time_until_next(&mut self, now: Instant) -> Option<Duration> {
        self.discard_stale();
        self.queue
            .peek()
            .map(|entry| entry.fire_time.saturating_duration_since(now))
    }

    /// Pop every timer due at or before `now`, in fire order.
    ///
    /// A repeating timer that is overdue by several intervals fires once per
    /// elapsed interval, so a host that advances its clock in one large step
    /// still observes every tick.
    #[tracing::instrument(skip(self), target = "glide_core::timer", level = "trace")]
    pub fn process_expired(&mut self, now: Instant) -> Vec<TimerId> {
        let mut fired = Vec::new();

        while let Some(entry) = self.queue.peek().copied() {
            if entry.fire_time > now {
                break;
            }
            self.queue.pop();

            let Some(timer) = self.timers.get_mut(entry.id) else {
                continue;
            };
            // A stale entry left behind by an earlier reschedule.
            if timer.next_fire != entry.fire_time {
                continue;
            }

            tracing::trace!(target: targets::TIMER, id = ?entry.id, "timer fired");
            fired.push(entry.id);

            timer.next_fire = entry.fire_time + timer.interval;
            self.queue.push(TimerQueueEntry {
                id: entry.id,
                fire_time: timer.next_fire,
            });
        }

        fired
    }

    fn discard_stale(&mut self) {
        while let Some(entry) = self.queue.peek() {
            match self.timers.get(entry.id) {
                Some(timer) if timer.next_fire == entry.fire_time => break,
                _ => {
                    self.queue.pop();
                }
            }
        }
    }
}
