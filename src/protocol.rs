//! Line-oriented command parsing.
//!
//! The host owns the transport (UART reads, echo); this module turns the
//! byte stream into complete lines and lines into [`Command`] values, so
//! malformed input never reaches the core operations. Command letters
//! follow the wire protocol: `r`eset, `s`et, `p`arameters, `q`uery,
//! `t`est.

use heapless::Vec;

/// Capacity of the line accumulation buffer.
const LINE_CAPACITY: usize = 256;

/// A parsed command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// `r` — reconfigure all units and zero all state.
    Reset,
    /// `s<point>, <target>, <ramp>` — retarget one point.
    Set { point: u8, target: u16, ramp: u16 },
    /// `p<point>, <clkdiv>, <wrap>` — reprogram the unit backing a point.
    Configure {
        point: u8,
        clock_divider: f32,
        wrap: u16,
    },
    /// `q` — report every valid point's state.
    Query,
    /// `t` — run the scripted self-test.
    SelfTest,
}

/// Error returned for a line that is not a well-formed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// The leading command letter is not recognized.
    UnknownCommand,
    /// The argument list has the wrong shape for the command.
    InvalidArgs,
}

/// Parse one complete line into a [`Command`].
///
/// Only the first byte selects the command; argument-less commands
/// tolerate trailing text the way the reference protocol does.
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let head = *line.as_bytes().first().ok_or(ParseError::UnknownCommand)?;
    let args = &line[1..];

    match head {
        b'r' => Ok(Command::Reset),
        b'q' => Ok(Command::Query),
        b't' => Ok(Command::SelfTest),
        b's' => {
            let (point, target, ramp) = split3(args).ok_or(ParseError::InvalidArgs)?;
            Ok(Command::Set {
                point: point.parse().map_err(|_| ParseError::InvalidArgs)?,
                target: target.parse().map_err(|_| ParseError::InvalidArgs)?,
                ramp: ramp.parse().map_err(|_| ParseError::InvalidArgs)?,
            })
        }
        b'p' => {
            let (point, clkdiv, wrap) = split3(args).ok_or(ParseError::InvalidArgs)?;
            Ok(Command::Configure {
                point: point.parse().map_err(|_| ParseError::InvalidArgs)?,
                clock_divider: clkdiv.parse().map_err(|_| ParseError::InvalidArgs)?,
                wrap: wrap.parse().map_err(|_| ParseError::InvalidArgs)?,
            })
        }
        _ => Err(ParseError::UnknownCommand),
    }
}

/// Split a comma-separated argument list into exactly three fields.
fn split3(args: &str) -> Option<(&str, &str, &str)> {
    let mut fields = args.split(',').map(str::trim);
    let a = fields.next()?;
    let b = fields.next()?;
    let c = fields.next()?;
    if fields.next().is_some() {
        return None;
    }
    Some((a, b, c))
}

/// Accumulates transport bytes into complete command lines.
///
/// Feed it one byte at a time; a completed line (newline-terminated,
/// carriage returns stripped) is handed back borrowed. An overlong line
/// is discarded wholesale and accumulation restarts, mirroring the
/// reference firmware's buffer-full behavior. Blank lines yield nothing.
#[derive(Default)]
pub struct LineAccumulator {
    buf: Vec<u8, LINE_CAPACITY>,
    ready: bool,
}

impl LineAccumulator {
    /// Create an empty accumulator.
    pub const fn new() -> Self {
        Self {
            buf: Vec::new(),
            ready: false,
        }
    }

    /// Feed one byte; returns the completed line when `byte` ends one.
    pub fn push(&mut self, byte: u8) -> Option<&str> {
        if self.ready {
            self.buf.clear();
            self.ready = false;
        }

        if byte == b'\n' {
            self.ready = true;
            let mut line = self.buf.as_slice();
            if let [rest @ .., b'\r'] = line {
                line = rest;
            }
            return match core::str::from_utf8(line) {
                Ok(s) if !s.is_empty() => Some(s),
                _ => None,
            };
        }

        if self.buf.push(byte).is_err() {
            // Overlong line: drop everything, including this byte
            self.buf.clear();
        }
        None
    }
}
