//! Driver library for daisy-chained MAX7219 8x8 dot matrix LED modules, driven over a bit-banged
//! three-wire bus, with a frame buffer, text scrolling and brightness animations.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod clock;
pub mod command;
pub mod config;
pub mod display;
pub mod error;
pub mod font;
pub mod interface;

// Re-exports for primary API.
pub use crate::clock::Clock;
pub use crate::command::{consts, Command, DecodeMode};
pub use crate::config::{Config, Orientation};
pub use crate::display::animation::{BlinkMode, Events, ScrollDirection};
pub use crate::display::text::ScrollCursor;
pub use crate::display::Display;
pub use crate::error::Error;
pub use crate::font::{Cp437, Font};
pub use crate::interface::bitbang::BitBangInterface;
pub use crate::interface::DisplayInterface;
