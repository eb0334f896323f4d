//! Validated foreground operations over the store and the PWM driver.

use core::fmt;

use crate::PwmDriver;
use crate::store::{PointState, PointStore};
use crate::topology::{self, Channel, NUM_POINTS, NUM_UNITS};

/// Clock divider programmed into every unit by [`CommandInterface::reset`].
pub const DEFAULT_CLOCK_DIVIDER: f32 = 1.0;

/// Counter wrap value programmed into every unit by
/// [`CommandInterface::reset`]. Full drive on a point corresponds to a
/// level equal to the wrap.
pub const DEFAULT_WRAP: u16 = 1024;

/// Foreground command operations.
///
/// Every point-indexed operation checks the index against the topology
/// and silently ignores invalid ones; the host's protocol layer decides
/// whether to diagnose that, the core never does.
pub struct CommandInterface<'a, D: PwmDriver> {
    store: &'a PointStore,
    driver: D,
}

impl<'a, D: PwmDriver> CommandInterface<'a, D> {
    /// Create a command interface over the shared store and a driver
    /// handle.
    pub const fn new(store: &'a PointStore, driver: D) -> Self {
        Self { store, driver }
    }

    /// Reconfigure every generator unit to its defaults and zero all
    /// point state.
    ///
    /// Idempotent; this is the only recovery operation in the system.
    pub fn reset(&mut self) {
        for unit in 0..NUM_UNITS {
            self.driver
                .configure_unit(unit, DEFAULT_CLOCK_DIVIDER, DEFAULT_WRAP);
            self.driver.set_channel_level(unit, Channel::A, 0);
            self.driver.set_channel_level(unit, Channel::B, 0);
            self.driver.enable_unit(unit);
        }

        self.store.reset_all();

        #[cfg(feature = "defmt")]
        defmt::debug!("reset: {} units reconfigured", NUM_UNITS);
    }

    /// Start ramping `point` toward `target`, moving at most `ramp` per
    /// tick.
    ///
    /// A `ramp` of zero freezes the point at its current level. Neither
    /// value is checked against the configured wrap; a target beyond it
    /// saturates the output (see [`PointState`]). Invalid points are
    /// ignored.
    pub fn set(&mut self, point: u8, target: u16, ramp: u16) {
        self.store.set_target(point, target, ramp);
    }

    /// Reprogram the generator unit backing `point`.
    ///
    /// Bypasses the store entirely. The unit is shared by two points, so
    /// this changes the carrier of the paired point as well. Invalid
    /// points are ignored.
    pub fn configure_generator(&mut self, point: u8, clock_divider: f32, wrap: u16) {
        let Some(slot) = topology::locate(point) else {
            return;
        };
        self.driver.configure_unit(slot.unit, clock_divider, wrap);
    }

    /// Atomic per-point snapshots of every valid point, in ascending
    /// index order.
    ///
    /// The iterator is lazy: each `next()` takes one short critical
    /// section for its own point, so reporting over a slow link never
    /// blocks the updater for more than a triple copy at a time.
    pub fn query_snapshot(&self) -> Snapshots<'a> {
        Snapshots {
            store: self.store,
            next_point: 0,
        }
    }

    /// Get a reference to the driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Get a mutable reference to the driver.
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }
}

/// One point's snapshot, as yielded by [`CommandInterface::query_snapshot`].
///
/// Displays as the wire report line, e.g. `point 1: at 40, ramp 10,
/// target 1024`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PointReport {
    /// Point index.
    pub point: u8,
    /// The state triple at the instant of the snapshot.
    pub state: PointState,
}

impl fmt::Display for PointReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "point {}: at {}, ramp {}, target {}",
            self.point, self.state.current, self.state.ramp, self.state.target
        )
    }
}

/// Lazy snapshot iterator, see [`CommandInterface::query_snapshot`].
pub struct Snapshots<'a> {
    store: &'a PointStore,
    next_point: u8,
}

impl Iterator for Snapshots<'_> {
    type Item = PointReport;

    fn next(&mut self) -> Option<Self::Item> {
        while (self.next_point as usize) < NUM_POINTS {
            let point = self.next_point;
            self.next_point += 1;
            if let Some(state) = self.store.snapshot(point) {
                return Some(PointReport { point, state });
            }
        }
        None
    }
}
