//! The main API to the display driver. A `Display` owns the bus interface, a clock and a font, and
//! keeps the frame buffer, the scrolling message and the animation state for a chain of MAX7219
//! modules. Drawing only touches the frame buffer; `flush` and `tick` transmit it.

pub mod animation;
pub mod frame;
#[cfg(feature = "graphics")]
mod graphics;
pub mod text;

use crate::clock::Clock;
use crate::command::consts::*;
use crate::command::{opcode, Command, DecodeMode};
use crate::config::{Config, Orientation};
use crate::display::animation::{BlinkMode, Events, ScrollDirection};
use crate::display::frame::FrameBuffer;
use crate::display::text::{ScrollCursor, TextBuffer};
use crate::error::Error;
use crate::font::{Cp437, Font};
use crate::interface::DisplayInterface;

/// Clamp a requested brightness to the range the animations cycle through.
pub(crate) fn clamp_brightness(level: u8) -> u8 {
    level.max(MIN_BRIGHTNESS).min(MAX_INTENSITY)
}

/// A driver for a daisy chain of MAX7219 LED matrix modules.
///
/// Device 0 is the module nearest the host. Its eight frame buffer columns are bytes 0-7, device 1
/// owns bytes 8-15, and so on; bit `y` of a byte is pixel row `y`. Scrolling shifts the whole live
/// buffer, so text flows across module boundaries.
pub struct Display<DI, CLK, F = Cp437> {
    iface: DI,
    clock: CLK,
    font: F,
    devices: u8,
    orientation: Orientation,
    frame: FrameBuffer,
    text: TextBuffer,
    scroll_direction: ScrollDirection,
    blink_mode: BlinkMode,
    brightness: u8,
    tick_interval_ms: u32,
    last_tick_ms: u64,
}

impl<DI, CLK> Display<DI, CLK, Cp437>
where
    DI: DisplayInterface,
    CLK: Clock,
{
    /// Construct and initialize a driver for `device_count` chained modules with the built-in
    /// CP437 font and the default `Config`.
    pub fn new(iface: DI, clock: CLK, device_count: u8) -> Result<Self, Error<DI::Error>> {
        Display::with_config(iface, clock, Cp437, device_count, Config::new())
    }
}

impl<DI, CLK, F> Display<DI, CLK, F>
where
    DI: DisplayInterface,
    CLK: Clock,
    F: Font,
{
    /// Construct a driver and bring the chain into a known state.
    ///
    /// `device_count` is clamped to `1..=MAX_DEVICES`. Every device leaves display test mode,
    /// scans all eight rows without decoding, and leaves shutdown. The intensity register is only
    /// written if `config` sets a brightness. Finally the blank frame is pushed.
    pub fn with_config(
        iface: DI,
        clock: CLK,
        font: F,
        device_count: u8,
        config: Config,
    ) -> Result<Self, Error<DI::Error>> {
        let devices = device_count.max(1).min(MAX_DEVICES);
        #[cfg(feature = "defmt")]
        if devices != device_count {
            defmt::warn!("device count {} clamped to {}", device_count, devices);
        }
        let mut display = Display {
            iface,
            clock,
            font,
            devices,
            orientation: config.orientation,
            frame: FrameBuffer::new(devices),
            text: TextBuffer::new(),
            scroll_direction: config.scroll_direction,
            blink_mode: config.blink_mode,
            brightness: config.initial_brightness().unwrap_or(MIN_BRIGHTNESS),
            tick_interval_ms: config.tick_interval_ms,
            last_tick_ms: 0,
        };
        display.init(&config)?;
        Ok(display)
    }

    fn init(&mut self, config: &Config) -> Result<(), Error<DI::Error>> {
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "init: {} devices, orientation {}",
            self.devices,
            self.orientation
        );
        self.broadcast(Command::SetDisplayTest(false))?;
        self.broadcast(Command::SetScanLimit(ROW_MAX))?;
        self.broadcast(Command::SetDecodeMode(DecodeMode::NoDecode))?;
        self.broadcast(Command::SetShutdown(false))?;
        config.send(&mut self.iface, self.devices)?;
        self.flush()
    }

    fn broadcast(&mut self, cmd: Command) -> Result<(), Error<DI::Error>> {
        cmd.broadcast(&mut self.iface, self.devices)
    }

    /// Set the LED intensity of every device, clamped to 1-15, and remember it as the starting
    /// point of the brightness animation.
    pub fn set_brightness(&mut self, level: u8) -> Result<(), Error<DI::Error>> {
        let clamped = clamp_brightness(level);
        #[cfg(feature = "defmt")]
        if clamped != level {
            defmt::warn!("brightness {} clamped to {}", level, clamped);
        }
        self.brightness = clamped;
        self.broadcast(Command::SetIntensity(clamped))
    }

    /// Replace the scrolling message with `text`, a string of glyph codes in the font's encoding.
    /// At most `text::TEXT_CAPACITY` codes are kept. Scrolling restarts at the first column of the
    /// first character.
    pub fn set_text<T: AsRef<[u8]>>(&mut self, text: T) {
        let truncated = self.text.set(text.as_ref());
        #[cfg(feature = "defmt")]
        if truncated {
            defmt::warn!("text truncated to {} codes", text::TEXT_CAPACITY);
        }
        #[cfg(not(feature = "defmt"))]
        let _ = truncated;
    }

    pub fn set_scroll_direction(&mut self, direction: ScrollDirection) {
        #[cfg(feature = "defmt")]
        defmt::debug!("scroll direction {}", direction);
        self.scroll_direction = direction;
    }

    pub fn set_blink_mode(&mut self, mode: BlinkMode) {
        #[cfg(feature = "defmt")]
        defmt::debug!("blink mode {}", mode);
        self.blink_mode = mode;
    }

    /// Run animation steps at most once per `ms` milliseconds.
    pub fn set_tick_interval_ms(&mut self, ms: u32) {
        self.tick_interval_ms = ms;
    }

    /// Copy the glyph for `code` into the segment of device `device`. Indices past the end of the
    /// chain are ignored.
    pub fn draw_glyph_at(&mut self, device: u8, code: u8) {
        let glyph = self.font.glyph(code);
        match self.frame.segment_mut(device as usize) {
            Some(segment) => segment.copy_from_slice(&glyph),
            None => {
                #[cfg(feature = "defmt")]
                defmt::warn!("draw_glyph_at: no device {}", device);
            }
        }
    }

    /// Invert the pixel at column `x`, row `y`. Pixels outside the chain are ignored.
    pub fn toggle_pixel(&mut self, x: usize, y: u8) {
        let hit = self.frame.toggle(x, y);
        #[cfg(feature = "defmt")]
        if !hit {
            defmt::warn!("toggle_pixel: ({}, {}) out of range", x, y);
        }
        #[cfg(not(feature = "defmt"))]
        let _ = hit;
    }

    /// Light or clear the pixel at column `x`, row `y`. Pixels outside the chain are ignored.
    pub fn set_pixel(&mut self, x: usize, y: u8, on: bool) {
        let hit = self.frame.set(x, y, on);
        #[cfg(feature = "defmt")]
        if !hit {
            defmt::warn!("set_pixel: ({}, {}) out of range", x, y);
        }
        #[cfg(not(feature = "defmt"))]
        let _ = hit;
    }

    /// Blank the frame buffer. Takes effect on the next `flush` or `tick`.
    pub fn clear(&mut self) {
        self.frame.clear();
    }

    /// Transmit the frame buffer: one latch cycle per row, each carrying that row's register
    /// value for every device.
    pub fn flush(&mut self) -> Result<(), Error<DI::Error>> {
        let oriented = self.frame.oriented(self.orientation);
        let bytes = oriented.as_slice();
        let devices = self.devices as usize;
        for row in 0..NUM_ROWS {
            let packets = (0..devices)
                .map(|d| (opcode::DIGIT0 + row, bytes[d * NUM_COLS as usize + row as usize]));
            self.iface
                .write_packets(packets)
                .map_err(Error::Interface)?;
        }
        Ok(())
    }

    /// Advance the animation if at least the tick interval has passed since the last accepted tick.
    ///
    /// An accepted tick scrolls one column of text in, steps the brightness animation (sending
    /// the new intensity right away), pushes the frame and reports `Events::UPDATE`. Otherwise
    /// nothing happens and the returned events are empty.
    ///
    /// If transmission fails, the frame, scroll cursor and brightness are put back as they were,
    /// so the next call repeats the same step.
    pub fn tick(&mut self) -> Result<Events, Error<DI::Error>> {
        let now = self.clock.now_ms();
        if now.wrapping_sub(self.last_tick_ms) < u64::from(self.tick_interval_ms) {
            return Ok(Events::empty());
        }
        let (frame, cursor, brightness) = (self.frame, self.text.cursor(), self.brightness);
        if let Err(e) = self.step() {
            self.frame = frame;
            self.text.rewind_to(cursor);
            self.brightness = brightness;
            return Err(e);
        }
        self.last_tick_ms = self.clock.now_ms();
        #[cfg(feature = "defmt")]
        defmt::trace!("tick at {} ms, cursor {}", self.last_tick_ms, self.text.cursor());

        let mut events = Events::empty();
        events.insert(Events::UPDATE);
        Ok(events)
    }

    fn step(&mut self) -> Result<(), Error<DI::Error>> {
        match self.scroll_direction {
            ScrollDirection::None => {}
            ScrollDirection::Left => {
                let column = self.text.next_column(&self.font);
                self.frame.shift_left(column);
            }
            ScrollDirection::Right => {
                let column = self.text.next_column(&self.font);
                self.frame.shift_right(column);
            }
        }

        if let Some(level) = self.blink_mode.next_brightness(self.brightness) {
            self.brightness = level;
            self.broadcast(Command::SetIntensity(level))?;
        }

        self.flush()
    }

    /// Take every device out of shutdown (`true`) or put it into shutdown (`false`). Register
    /// contents survive shutdown.
    pub fn set_power(&mut self, on: bool) -> Result<(), Error<DI::Error>> {
        self.broadcast(Command::SetShutdown(!on))
    }

    /// Light every LED at full intensity (`true`), or return to normal operation.
    pub fn set_display_test(&mut self, on: bool) -> Result<(), Error<DI::Error>> {
        self.broadcast(Command::SetDisplayTest(on))
    }
}

impl<DI, CLK, F> Display<DI, CLK, F> {
    /// The live frame buffer, eight bytes per device.
    pub fn frame_buffer(&self) -> &[u8] {
        self.frame.as_slice()
    }

    pub fn text(&self) -> &[u8] {
        self.text.as_slice()
    }

    pub fn cursor(&self) -> ScrollCursor {
        self.text.cursor()
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn scroll_direction(&self) -> ScrollDirection {
        self.scroll_direction
    }

    pub fn blink_mode(&self) -> BlinkMode {
        self.blink_mode
    }

    pub fn device_count(&self) -> u8 {
        self.devices
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Consume the driver, giving back the interface, the clock and the font.
    pub fn release(self) -> (DI, CLK, F) {
        (self.iface, self.clock, self.font)
    }
}
