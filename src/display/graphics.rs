//! `embedded-graphics` drawing onto the frame buffer. Drawing does not transmit; call
//! `Display::flush` or let `Display::tick` push the result.

use core::convert::Infallible;

use embedded_graphics_core::pixelcolor::BinaryColor;
use embedded_graphics_core::prelude::*;

use super::Display;
use crate::command::consts::{NUM_COLS, NUM_ROWS};

impl<DI, CLK, F> DrawTarget for Display<DI, CLK, F> {
    type Color = BinaryColor;
    type Error = Infallible;

    /// Point `(x, y)` is bit `y` of frame buffer byte `x`. Points outside the chain are dropped.
    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 || point.y >= NUM_ROWS as i32 {
                continue;
            }
            self.frame
                .set(point.x as usize, point.y as u8, color.is_on());
        }
        Ok(())
    }
}

impl<DI, CLK, F> OriginDimensions for Display<DI, CLK, F> {
    fn size(&self) -> Size {
        Size::new(self.devices as u32 * NUM_COLS as u32, NUM_ROWS as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics_core::pixelcolor::BinaryColor;
    use embedded_graphics_core::prelude::*;

    use crate::clock::test_clock::ManualClock;
    use crate::interface::test_spy::TestSpyInterface;

    #[test]
    fn size_follows_chain() {
        let di = TestSpyInterface::new();
        let disp = Display::new(di.split(), ManualClock::new(0), 3).unwrap();
        assert_eq!(disp.size(), Size::new(24, 8));
    }

    #[test]
    fn pixels_land_in_frame() {
        let mut di = TestSpyInterface::new();
        let mut disp = Display::new(di.split(), ManualClock::new(0), 2).unwrap();
        di.clear();
        disp.draw_iter(vec![
            Pixel(Point::new(0, 0), BinaryColor::On),
            Pixel(Point::new(9, 7), BinaryColor::On),
            Pixel(Point::new(9, 2), BinaryColor::On),
            Pixel(Point::new(9, 2), BinaryColor::Off),
            Pixel(Point::new(16, 0), BinaryColor::On),
            Pixel(Point::new(-1, 0), BinaryColor::On),
            Pixel(Point::new(0, 8), BinaryColor::On),
            Pixel(Point::new(0, 256), BinaryColor::On),
        ])
        .unwrap();
        let mut expect = [0u8; 16];
        expect[0] = 0x01;
        expect[9] = 0x80;
        assert_eq!(disp.frame_buffer(), &expect[..]);
        assert!(di.cycles().is_empty());
    }

    #[test]
    fn clear_with_color() {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split(), ManualClock::new(0), 1).unwrap();
        DrawTarget::clear(&mut disp, BinaryColor::On).unwrap();
        assert_eq!(disp.frame_buffer(), &[0xFF; 8]);
        DrawTarget::clear(&mut disp, BinaryColor::Off).unwrap();
        assert_eq!(disp.frame_buffer(), &[0; 8]);
    }
}
