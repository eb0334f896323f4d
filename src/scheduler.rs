//! Tick scheduling and timing utilities.
//!
//! Provides portable update pacing without async/await or
//! platform-specific timers, for hosts that drive the updater from a
//! polling loop rather than a hardware repeating timer. Interrupt-driven
//! hosts call [`RampEngine::tick`] from their timer handler directly and
//! do not need this module.

use embassy_time::{Duration, Instant};

use crate::PwmDriver;
use crate::engine::RampEngine;

/// Default update rate (1 kHz).
pub const TICK_HZ: u32 = 1000;

/// Default tick period based on the update rate.
pub const TICK_PERIOD: Duration = Duration::from_millis(1000 / TICK_HZ as u64);

/// Result of a tick operation.
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// The deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick (zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable tick scheduler that manages timing without async.
///
/// Tracks tick timing with drift correction, runs the engine, and
/// returns timing info so the caller can sleep appropriately:
///
/// ```ignore
/// let mut scheduler = TickScheduler::new(engine);
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     // Platform-specific sleep
///     sleep_us(result.sleep_duration.as_micros());
/// }
/// ```
pub struct TickScheduler<'a, D: PwmDriver> {
    engine: RampEngine<'a, D>,
    next_tick: Instant,
    period: Duration,
}

impl<'a, D: PwmDriver> TickScheduler<'a, D> {
    /// Create a scheduler running at the default rate ([`TICK_HZ`]).
    pub fn new(engine: RampEngine<'a, D>) -> Self {
        Self::with_period(engine, TICK_PERIOD)
    }

    /// Create a scheduler with a custom tick period.
    pub fn with_period(engine: RampEngine<'a, D>, period: Duration) -> Self {
        Self {
            engine,
            next_tick: Instant::from_micros(0),
            period,
        }
    }

    /// Run one tick and return timing information.
    ///
    /// If the caller has fallen more than two periods behind, the
    /// schedule is re-anchored to `now` instead of bursting through the
    /// backlog. The caller is responsible for waiting until
    /// `next_deadline` before calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> TickResult {
        let max_drift = self.period * 2;
        if now.as_micros() > self.next_tick.as_micros() + max_drift.as_micros() {
            self.next_tick = now;
        }

        self.engine.tick();

        self.next_tick += self.period;

        let sleep_duration = if self.next_tick.as_micros() > now.as_micros() {
            Duration::from_micros(self.next_tick.as_micros() - now.as_micros())
        } else {
            Duration::from_micros(0)
        };

        TickResult {
            next_deadline: self.next_tick,
            sleep_duration,
        }
    }

    /// Get a reference to the engine.
    pub fn engine(&self) -> &RampEngine<'a, D> {
        &self.engine
    }

    /// Get a mutable reference to the engine.
    pub fn engine_mut(&mut self) -> &mut RampEngine<'a, D> {
        &mut self.engine
    }
}
