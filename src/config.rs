//! Defines the struct holding the settings a `Display` is constructed with. Builder methods offer
//! a declarative way to override the defaults, which match the behaviour of common FC-16 style
//! modules.

use crate::command::Command;
use crate::display::animation::{BlinkMode, ScrollDirection};
use crate::error::Error;
use crate::interface::DisplayInterface;

/// Interval between animation steps when none is configured.
pub const DEFAULT_TICK_INTERVAL_MS: u32 = 40;

/// How the logical frame buffer maps onto the LED matrix of each module. This is dictated by how
/// the module wires the matrix to the MAX7219 segment and digit lines; a wrong setting shows the
/// image rotated by a quarter turn.
///
/// The transform is applied per device to the 8-byte segment `seg` at transmission time, producing
/// the byte `out[i]` sent to row register `i`:
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Orientation {
    /// Bit `j` of `out[i]` is bit `7 - i` of `seg[j]`. This is the wiring of the common FC-16
    /// style modules, and the default.
    Rotate90,
    /// The inverse of `Rotate90`: bit `j` of `out[i]` is bit `i` of `seg[7 - j]`. For modules
    /// wired the opposite way.
    Rotate270,
    /// Each buffer byte is sent unchanged to the row register of the same index.
    Native,
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::Rotate90
    }
}

/// The configuration for a display.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub(crate) orientation: Orientation,
    pub(crate) tick_interval_ms: u32,
    pub(crate) scroll_direction: ScrollDirection,
    pub(crate) blink_mode: BlinkMode,
    brightness_cmd: Option<Command>,
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create a new configuration: `Rotate90` orientation, a 40 ms tick, text scrolling left, no
    /// blinking, and the intensity register left at its power-on value.
    pub fn new() -> Self {
        Config {
            orientation: Orientation::Rotate90,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            scroll_direction: ScrollDirection::Left,
            blink_mode: BlinkMode::None,
            brightness_cmd: None,
        }
    }

    /// Extend this `Config` to use a different orientation transform. See `Orientation`.
    pub fn orientation(self, orientation: Orientation) -> Self {
        Self {
            orientation,
            ..self
        }
    }

    /// Extend this `Config` to run animation steps at most once per `ms` milliseconds.
    pub fn tick_interval_ms(self, ms: u32) -> Self {
        Self {
            tick_interval_ms: ms,
            ..self
        }
    }

    /// Extend this `Config` with the initial scroll direction.
    pub fn scroll_direction(self, direction: ScrollDirection) -> Self {
        Self {
            scroll_direction: direction,
            ..self
        }
    }

    /// Extend this `Config` with the initial brightness animation.
    pub fn blink_mode(self, mode: BlinkMode) -> Self {
        Self {
            blink_mode: mode,
            ..self
        }
    }

    /// Extend this `Config` to explicitly set the brightness during initialization. The level is
    /// clamped to 1-15. See `Command::SetIntensity`.
    pub fn brightness(self, level: u8) -> Self {
        Self {
            brightness_cmd: Some(Command::SetIntensity(crate::display::clamp_brightness(level))),
            ..self
        }
    }

    /// The brightness level this configuration sets at init, if any.
    pub(crate) fn initial_brightness(&self) -> Option<u8> {
        match self.brightness_cmd {
            Some(Command::SetIntensity(level)) => Some(level),
            _ => None,
        }
    }

    /// Transmit the optional commands of this configuration to all `devices` at `iface`.
    pub(crate) fn send<DI>(&self, iface: &mut DI, devices: u8) -> Result<(), Error<DI::Error>>
    where
        DI: DisplayInterface,
    {
        self.brightness_cmd
            .map_or(Ok(()), |c| c.broadcast(iface, devices))
    }
}
