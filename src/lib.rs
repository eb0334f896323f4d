#![no_std]

pub mod command;
pub mod engine;
pub mod protocol;
pub mod ramp;
pub mod scheduler;
pub mod selftest;
pub mod store;
pub mod topology;

pub use command::{CommandInterface, DEFAULT_CLOCK_DIVIDER, DEFAULT_WRAP, PointReport, Snapshots};
pub use engine::RampEngine;
pub use protocol::{Command, LineAccumulator, ParseError};
pub use scheduler::{TICK_HZ, TICK_PERIOD, TickResult, TickScheduler};
pub use store::{PointState, PointStore};
pub use topology::{Channel, NUM_POINTS, NUM_UNITS, Slot};

pub use embassy_time::{Duration, Instant};

/// Abstract PWM generator driver trait
///
/// Implement this trait to support different hardware platforms.
/// The ramp engine and command interface are generic over this trait.
///
/// All operations are infallible; a configuration call that cannot
/// succeed is fatal on the reference platform and is not modeled. A
/// channel-level write is a single register store there, so the host may
/// hand independent driver handles to the foreground interface and the
/// periodic updater.
pub trait PwmDriver {
    /// Program a unit's clock divider and counter wrap value.
    fn configure_unit(&mut self, unit: u8, clock_divider: f32, wrap: u16);

    /// Set the compare level of one output channel.
    fn set_channel_level(&mut self, unit: u8, channel: Channel, level: u16);

    /// Start the unit's counter.
    fn enable_unit(&mut self, unit: u8);
}
