//! Static mapping from logical point indices to PWM generator slots.
//!
//! Point numbering follows the reference harness: the right side's seven
//! points are indices 1-7 on units 0-3, the left side's seven points are
//! indices 9-15 on units 4-7. Indices 0 and 8 are unpopulated. Each unit
//! drives a pair of adjacent points, the lower index on channel A; units
//! 3 and 7 drive a single point each (7 and 15) on channel A only.

/// Number of logical point indices. Not all of them are populated.
pub const NUM_POINTS: usize = 16;

/// Number of PWM generator units backing the array.
pub const NUM_UNITS: u8 = 8;

/// One of the two outputs of a generator unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    A,
    B,
}

/// The generator output driving a single point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Slot {
    /// PWM generator unit index.
    pub unit: u8,
    /// Output channel of that unit.
    pub channel: Channel,
}

impl Slot {
    const fn new(unit: u8, channel: Channel) -> Self {
        Self { unit, channel }
    }
}

const TOPOLOGY: [Option<Slot>; NUM_POINTS] = [
    None,
    Some(Slot::new(0, Channel::A)),
    Some(Slot::new(0, Channel::B)),
    Some(Slot::new(1, Channel::A)),
    Some(Slot::new(1, Channel::B)),
    Some(Slot::new(2, Channel::A)),
    Some(Slot::new(2, Channel::B)),
    Some(Slot::new(3, Channel::A)),
    None,
    Some(Slot::new(4, Channel::A)),
    Some(Slot::new(4, Channel::B)),
    Some(Slot::new(5, Channel::A)),
    Some(Slot::new(5, Channel::B)),
    Some(Slot::new(6, Channel::A)),
    Some(Slot::new(6, Channel::B)),
    Some(Slot::new(7, Channel::A)),
];

/// Check whether `point` denotes a populated actuation point.
pub const fn is_valid(point: u8) -> bool {
    locate(point).is_some()
}

/// Look up the generator slot driving `point`.
///
/// Returns `None` for indices that are out of range or unpopulated.
pub const fn locate(point: u8) -> Option<Slot> {
    if (point as usize) < NUM_POINTS {
        TOPOLOGY[point as usize]
    } else {
        None
    }
}
