//! The frame buffer: one byte per pixel column, eight columns per device, laid out device after
//! device so that text can flow across module boundaries by plain byte shifts.

use itertools::iproduct;

use crate::command::consts::*;
use crate::config::Orientation;

/// Fixed-capacity pixel storage for up to `MAX_DEVICES` devices. Only the first
/// `8 * device_count` bytes are live, and that length never changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    bytes: [u8; MAX_FRAME_BYTES],
    len: usize,
}

impl FrameBuffer {
    /// A zeroed buffer for `devices` devices, which must already be clamped to
    /// `1..=MAX_DEVICES`.
    pub(crate) fn new(devices: u8) -> Self {
        FrameBuffer {
            bytes: [0; MAX_FRAME_BYTES],
            len: devices as usize * NUM_COLS as usize,
        }
    }

    pub(crate) fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub(crate) fn clear(&mut self) {
        self.bytes = [0; MAX_FRAME_BYTES];
    }

    /// The 8-byte segment of device `device`, or `None` past the end of the chain.
    pub(crate) fn segment_mut(&mut self, device: usize) -> Option<&mut [u8]> {
        let start = device.checked_mul(NUM_COLS as usize)?;
        self.bytes[..self.len].get_mut(start..start + NUM_COLS as usize)
    }

    /// XOR the pixel at column `x`, row `y`. Returns whether the pixel was in range.
    pub(crate) fn toggle(&mut self, x: usize, y: u8) -> bool {
        match self.pixel_byte(x, y) {
            Some(byte) => {
                *byte ^= 1 << y;
                true
            }
            None => false,
        }
    }

    /// Set or clear the pixel at column `x`, row `y`. Returns whether the pixel was in range.
    pub(crate) fn set(&mut self, x: usize, y: u8, on: bool) -> bool {
        match self.pixel_byte(x, y) {
            Some(byte) => {
                if on {
                    *byte |= 1 << y;
                } else {
                    *byte &= !(1 << y);
                }
                true
            }
            None => false,
        }
    }

    fn pixel_byte(&mut self, x: usize, y: u8) -> Option<&mut u8> {
        if y > ROW_MAX {
            return None;
        }
        self.bytes[..self.len].get_mut(x)
    }

    /// Move every column one place towards index 0, ignoring device boundaries, and feed `column`
    /// in at the trailing end.
    pub(crate) fn shift_left(&mut self, column: u8) {
        let live = &mut self.bytes[..self.len];
        live.copy_within(1.., 0);
        live[self.len - 1] = column;
    }

    /// Move every column one place away from index 0, and feed `column` in at index 0.
    pub(crate) fn shift_right(&mut self, column: u8) {
        let live = &mut self.bytes[..self.len];
        live.copy_within(..self.len - 1, 1);
        live[0] = column;
    }

    /// The buffer as it is sent to the row registers: each device segment transformed per
    /// `orientation`.
    pub(crate) fn oriented(&self, orientation: Orientation) -> FrameBuffer {
        let mut out = FrameBuffer {
            bytes: [0; MAX_FRAME_BYTES],
            len: self.len,
        };
        for (src, dst) in self.as_slice()
            .chunks_exact(NUM_COLS as usize)
            .zip(out.bytes.chunks_exact_mut(NUM_COLS as usize))
        {
            let mut segment = [0u8; 8];
            segment.copy_from_slice(src);
            dst.copy_from_slice(&orient_segment(&segment, orientation));
        }
        out
    }
}

/// Transform one device's 8-byte segment for transmission. See `Orientation` for the mappings.
pub fn orient_segment(segment: &[u8; 8], orientation: Orientation) -> [u8; 8] {
    let mut out = [0u8; 8];
    match orientation {
        Orientation::Native => out = *segment,
        Orientation::Rotate90 => {
            for (i, j) in iproduct!(0..8, 0..8) {
                out[i] |= ((segment[j] >> (7 - i)) & 1) << j;
            }
        }
        Orientation::Rotate270 => {
            for (i, j) in iproduct!(0..8, 0..8) {
                out[i] |= ((segment[7 - j] >> i) & 1) << j;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(devices: u8) -> FrameBuffer {
        let mut fb = FrameBuffer::new(devices);
        for (i, b) in fb.bytes[..fb.len].iter_mut().enumerate() {
            *b = i as u8 + 1;
        }
        fb
    }

    #[test]
    fn length_follows_device_count() {
        for devices in 1..=MAX_DEVICES {
            let fb = FrameBuffer::new(devices);
            assert_eq!(fb.as_slice().len(), 8 * devices as usize);
            assert!(fb.as_slice().iter().all(|&b| b == 0));
        }
    }

    #[test]
    fn toggle_is_involution() {
        let mut fb = filled(2);
        let before = fb;
        assert!(fb.toggle(9, 3));
        assert_eq!(fb.as_slice()[9], 10 ^ 0b1000);
        assert!(fb.toggle(9, 3));
        assert_eq!(fb, before);
    }

    #[test]
    fn toggle_out_of_range() {
        let mut fb = filled(2);
        let before = fb;
        assert!(!fb.toggle(16, 0));
        assert!(!fb.toggle(0, 8));
        assert!(!fb.toggle(63, 0));
        assert_eq!(fb, before);
    }

    #[test]
    fn set_pixel() {
        let mut fb = FrameBuffer::new(1);
        assert!(fb.set(2, 7, true));
        assert_eq!(fb.as_slice()[2], 0x80);
        assert!(fb.set(2, 7, true));
        assert_eq!(fb.as_slice()[2], 0x80);
        assert!(fb.set(2, 7, false));
        assert_eq!(fb.as_slice()[2], 0);
        assert!(!fb.set(8, 0, true));
    }

    #[test]
    fn segments() {
        let mut fb = filled(2);
        assert_eq!(fb.segment_mut(1).unwrap(), &[9, 10, 11, 12, 13, 14, 15, 16]);
        assert!(fb.segment_mut(2).is_none());
        assert!(fb.segment_mut(usize::MAX).is_none());
    }

    #[test]
    fn shift_left_spans_devices() {
        let mut fb = filled(2);
        fb.shift_left(0xAA);
        let expect: Vec<u8> = (2..=16).chain(Some(0xAA)).collect();
        assert_eq!(fb.as_slice(), &expect[..]);
    }

    #[test]
    fn shift_right_spans_devices() {
        let mut fb = filled(2);
        fb.shift_right(0xAA);
        let expect: Vec<u8> = Some(0xAA).into_iter().chain(1..=15).collect();
        assert_eq!(fb.as_slice(), &expect[..]);
    }

    #[test]
    fn shift_single_device() {
        let mut fb = filled(1);
        fb.shift_left(0);
        assert_eq!(fb.as_slice(), &[2, 3, 4, 5, 6, 7, 8, 0]);
        fb.shift_right(0xFF);
        assert_eq!(fb.as_slice(), &[0xFF, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn rotate90_golden() {
        // A single lit pixel at column 0, bit 7 lands in row register 0, bit 0.
        let seg = [0x80, 0, 0, 0, 0, 0, 0, 0];
        assert_eq!(
            orient_segment(&seg, Orientation::Rotate90),
            [0x01, 0, 0, 0, 0, 0, 0, 0]
        );
        // Column 3 fully lit becomes bit 3 of every row register.
        let seg = [0, 0, 0, 0xFF, 0, 0, 0, 0];
        assert_eq!(orient_segment(&seg, Orientation::Rotate90), [0x08; 8]);
        // Bit 0 of every column becomes row register 7.
        let seg = [0x01; 8];
        assert_eq!(
            orient_segment(&seg, Orientation::Rotate90),
            [0, 0, 0, 0, 0, 0, 0, 0xFF]
        );
    }

    #[test]
    fn rotate90_matches_formula() {
        let seg = [0x7C, 0x7E, 0x13, 0x13, 0x7E, 0x7C, 0x00, 0x00];
        let out = orient_segment(&seg, Orientation::Rotate90);
        for i in 0..8 {
            let mut expect = 0u8;
            for j in 0..8 {
                expect |= ((seg[j] & (1 << (7 - i))) >> (7 - i)) << j;
            }
            assert_eq!(out[i], expect, "row {}", i);
        }
        assert_eq!(out, [0x00, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x1E, 0x0C]);
    }

    #[test]
    fn rotate270_inverts_rotate90() {
        let seg = [0x7C, 0x7E, 0x13, 0x13, 0x7E, 0x7C, 0x00, 0x81];
        let there = orient_segment(&seg, Orientation::Rotate90);
        assert_eq!(orient_segment(&there, Orientation::Rotate270), seg);
    }

    #[test]
    fn native_is_identity() {
        let seg = [1, 2, 3, 4, 5, 6, 7, 8];
        assert_eq!(orient_segment(&seg, Orientation::Native), seg);
    }

    #[test]
    fn oriented_per_device() {
        let mut fb = FrameBuffer::new(2);
        fb.segment_mut(1).unwrap()[3] = 0xFF;
        let out = fb.oriented(Orientation::Rotate90);
        assert_eq!(out.as_slice().len(), 16);
        assert_eq!(&out.as_slice()[..8], &[0; 8]);
        assert_eq!(&out.as_slice()[8..], &[0x08; 8]);
    }
}
