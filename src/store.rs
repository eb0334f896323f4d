//! Shared per-point setpoint state.
//!
//! The store is the only data touched by both execution contexts (the
//! foreground command flow and the periodic updater), so every access
//! path here is a single short critical section built on
//! `critical-section`. The backing array is never handed out; callers go
//! through the multi-field operations below, which copy a whole triple
//! in or out atomically.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::topology::{self, NUM_POINTS};

/// Setpoint state of one actuation point.
///
/// `current` is the value most recently driven to hardware, `target` the
/// value it is being ramped toward, and `ramp` the maximum per-tick
/// change. A `ramp` of zero holds `current` in place regardless of
/// `target`.
///
/// None of the fields are validated against the generator's configured
/// wrap value; a target beyond the counter wrap saturates the output for
/// part of each carrier period. Callers that care must clamp themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PointState {
    /// Level currently driven to hardware.
    pub current: u16,
    /// Maximum magnitude of change per update tick; `0` means hold.
    pub ramp: u16,
    /// Level `current` is being driven toward.
    pub target: u16,
}

impl PointState {
    const ZERO: Self = Self {
        current: 0,
        ramp: 0,
        target: 0,
    };
}

/// Thread/interrupt safe store of all point states.
///
/// `new` is const so the store can live in a `static` shared between the
/// foreground interface and the timer-driven updater.
pub struct PointStore {
    inner: Mutex<RefCell<[PointState; NUM_POINTS]>>,
}

impl PointStore {
    /// Create a store with every point at the all-zero state.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new([PointState::ZERO; NUM_POINTS])),
        }
    }

    /// Copy out one point's state triple.
    ///
    /// Returns `None` for invalid point indices. The copy happens inside
    /// one critical section, so the triple is never torn.
    pub fn snapshot(&self, point: u8) -> Option<PointState> {
        topology::is_valid(point).then(|| {
            critical_section::with(|cs| self.inner.borrow(cs).borrow()[point as usize])
        })
    }

    /// Write back a point's `current` level after an update step.
    ///
    /// Leaves `ramp` and `target` untouched. Invalid indices are ignored.
    pub fn commit_current(&self, point: u8, value: u16) {
        if !topology::is_valid(point) {
            return;
        }
        critical_section::with(|cs| {
            self.inner.borrow(cs).borrow_mut()[point as usize].current = value;
        });
    }

    /// Set a point's `target` and `ramp` as one atomic write.
    ///
    /// Invalid indices are ignored. `current` is left alone; the updater
    /// converges from wherever it is.
    pub fn set_target(&self, point: u8, target: u16, ramp: u16) {
        if !topology::is_valid(point) {
            return;
        }
        critical_section::with(|cs| {
            let mut points = self.inner.borrow(cs).borrow_mut();
            points[point as usize].target = target;
            points[point as usize].ramp = ramp;
        });
    }

    /// Zero every point's triple in a single pass.
    pub fn reset_all(&self) {
        critical_section::with(|cs| {
            let mut points = self.inner.borrow(cs).borrow_mut();
            for state in points.iter_mut() {
                *state = PointState::ZERO;
            }
        });
    }
}

impl Default for PointStore {
    fn default() -> Self {
        Self::new()
    }
}
