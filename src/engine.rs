//! The periodic per-point update routine.

use crate::PwmDriver;
use crate::ramp;
use crate::store::PointStore;
use crate::topology::{self, NUM_POINTS};

/// Advances every point toward its target and pushes the new levels to
/// hardware. One instance of this runs per device, invoked once per tick
/// from a repeating timer (or paced by [`TickScheduler`]).
///
/// Each point is handled in two short critical sections: one to snapshot
/// the state triple, one to commit the new `current` after the hardware
/// write. A foreground `set` landing between the two is observed on the
/// next tick.
///
/// [`TickScheduler`]: crate::scheduler::TickScheduler
pub struct RampEngine<'a, D: PwmDriver> {
    store: &'a PointStore,
    driver: D,
}

impl<'a, D: PwmDriver> RampEngine<'a, D> {
    /// Create an engine over the shared store and a driver handle.
    pub const fn new(store: &'a PointStore, driver: D) -> Self {
        Self { store, driver }
    }

    /// Run one update tick over all points.
    ///
    /// Points are visited in ascending index order, each independently;
    /// converged and held points cost one snapshot and nothing else.
    pub fn tick(&mut self) {
        for point in 0..NUM_POINTS as u8 {
            let Some(slot) = topology::locate(point) else {
                continue;
            };
            let Some(state) = self.store.snapshot(point) else {
                continue;
            };
            let Some(next) = ramp::advance(state.current, state.ramp, state.target) else {
                continue;
            };
            self.driver.set_channel_level(slot.unit, slot.channel, next);
            self.store.commit_current(point, next);
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
