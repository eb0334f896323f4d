//! Scripted actuation self-test.

use embassy_time::Duration;

use crate::PwmDriver;
use crate::command::{CommandInterface, DEFAULT_WRAP};
use crate::topology::{self, NUM_POINTS};

/// Dwell time for each single-point pulse.
const POINT_DWELL: Duration = Duration::from_millis(300);

/// Dwell time for the all-points pulse.
const ALL_DWELL: Duration = Duration::from_millis(1000);

/// Pulse every point individually, then all points at once.
///
/// Each pulse ramps to full drive within one tick (ramp equal to the
/// wrap) and back down. The host supplies the blocking wait via `delay`;
/// the periodic updater must keep running underneath it, otherwise the
/// points never move.
pub fn run<D: PwmDriver>(commands: &mut CommandInterface<'_, D>, mut delay: impl FnMut(Duration)) {
    #[cfg(feature = "defmt")]
    defmt::debug!("self-test start");

    for point in 0..NUM_POINTS as u8 {
        if !topology::is_valid(point) {
            continue;
        }
        commands.set(point, DEFAULT_WRAP, DEFAULT_WRAP);
        delay(POINT_DWELL);
        commands.set(point, 0, DEFAULT_WRAP);
        delay(POINT_DWELL);
    }

    for point in 0..NUM_POINTS as u8 {
        if !topology::is_valid(point) {
            continue;
        }
        commands.set(point, DEFAULT_WRAP, DEFAULT_WRAP);
    }
    delay(ALL_DWELL);
    for point in 0..NUM_POINTS as u8 {
        if !topology::is_valid(point) {
            continue;
        }
        commands.set(point, 0, DEFAULT_WRAP);
    }

    #[cfg(feature = "defmt")]
    defmt::debug!("self-test done");
}
