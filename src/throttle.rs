//! Throttle gate for move callbacks
//!
//! Drops move updates arriving faster than the configured interval. Dropped
//! updates are lost, there is no queue and no trailing-edge flush.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Monotonic millisecond clock driving the throttle gate
pub trait Clock {
    /// Current time in milliseconds
    fn now_ms(&self) -> u64;
}

/// Wall clock measured from construction
#[derive(Debug, Clone)]
pub struct SystemClock {
    /// Monotonic start time for relative timestamp calculation
    start_instant: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start_instant: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.start_instant.elapsed().as_millis() as u64
    }
}

/// Manually advanced clock for deterministic replay
///
/// Clones share the same time, so a handle kept outside a joystick still
/// drives the clock moved into it.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_ms)),
        }
    }

    pub fn set(&self, now_ms: u64) {
        self.now.set(now_ms);
    }

    pub fn advance(&self, delta_ms: u64) {
        self.now.set(self.now.get().saturating_add(delta_ms));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

/// Time gate in front of the move callback
///
/// One gate lives as long as the widget, so the interval is enforced across
/// consecutive drag gestures too.
#[derive(Debug)]
pub struct ThrottleGate<C: Clock = SystemClock> {
    clock: C,
    interval_ms: u64,
    /// Time of the last forwarded update, unset until the first one
    last_call_ms: Option<u64>,
}

impl<C: Clock> ThrottleGate<C> {
    pub fn new(interval_ms: u64, clock: C) -> Self {
        Self {
            clock,
            interval_ms,
            last_call_ms: None,
        }
    }

    /// Check whether an update may be forwarded now, recording it if so
    pub fn try_pass(&mut self) -> bool {
        let now = self.clock.now_ms();
        if let Some(last) = self.last_call_ms {
            if now.saturating_sub(last) < self.interval_ms {
                return false;
            }
        }
        self.last_call_ms = Some(now);
        true
    }

    /// Forward `value` to `callback` unless the gate is closed
    ///
    /// Returns `true` if the callback ran.
    pub fn call<T, F>(&mut self, value: T, callback: F) -> bool
    where
        F: FnOnce(T),
    {
        if !self.try_pass() {
            return false;
        }
        callback(value);
        true
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn last_call_ms(&self) -> Option<u64> {
        self.last_call_ms
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
