//! Per-tick animation state: scroll direction, brightness animation, and the events a tick
//! reports.

use crate::command::consts::{MAX_INTENSITY, MIN_BRIGHTNESS};

/// Which way text moves across the chain on each tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScrollDirection {
    /// The frame is left as drawn.
    None,
    /// Columns move towards index 0; new text enters at the last column of the last device.
    Left,
    /// Columns move away from index 0; new text enters at column 0 of the first device.
    Right,
}

impl Default for ScrollDirection {
    fn default() -> Self {
        ScrollDirection::Left
    }
}

/// Brightness animation applied on each tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlinkMode {
    None,
    /// Alternate between the dimmest and brightest levels.
    Blink,
    /// Ramp up one level per tick to the maximum, then drop back to the minimum.
    FadeInOut,
}

impl Default for BlinkMode {
    fn default() -> Self {
        BlinkMode::None
    }
}

impl BlinkMode {
    /// The brightness to use on the tick after one at `current`, or `None` when this mode leaves
    /// brightness alone.
    pub fn next_brightness(self, current: u8) -> Option<u8> {
        match self {
            BlinkMode::None => None,
            BlinkMode::Blink if current > MIN_BRIGHTNESS => Some(MIN_BRIGHTNESS),
            BlinkMode::Blink => Some(MAX_INTENSITY),
            BlinkMode::FadeInOut if current < MAX_INTENSITY => Some(current + 1),
            BlinkMode::FadeInOut => Some(MIN_BRIGHTNESS),
        }
    }
}

/// Bit set of what happened during a tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Events(u8);

impl Events {
    /// The tick ran and the frame was transmitted.
    pub const UPDATE: Events = Events(1 << 0);
    /// A whole glyph has scrolled in. Reserved; no tick reports it yet.
    pub const LETTER_SCROLLED: Events = Events(1 << 1);
    /// The whole message has scrolled through. Reserved; no tick reports it yet.
    pub const FULL_SCROLL: Events = Events(1 << 2);

    pub const fn empty() -> Self {
        Events(0)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, other: Events) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: Events) {
        self.0 |= other.0;
    }
}

impl core::ops::BitOr for Events {
    type Output = Events;

    fn bitor(self, rhs: Events) -> Events {
        Events(self.0 | rhs.0)
    }
}
