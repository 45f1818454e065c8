//! The scrolling message and the read position into its stream of glyph columns.

use heapless::Vec;

use crate::font::Font;

/// Longest message kept, in glyph codes.
pub const TEXT_CAPACITY: usize = 31;

/// Position of the next column to scroll in: column `bit_offset` of the glyph for the character
/// at `char_index`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScrollCursor {
    pub bit_offset: u8,
    pub char_index: usize,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct TextBuffer {
    codes: Vec<u8, TEXT_CAPACITY>,
    cursor: ScrollCursor,
}

impl TextBuffer {
    pub(crate) fn new() -> Self {
        TextBuffer {
            codes: Vec::new(),
            cursor: ScrollCursor::default(),
        }
    }

    /// Replace the message, keeping at most `TEXT_CAPACITY` codes, and rewind the cursor. Returns
    /// whether the message had to be truncated.
    pub(crate) fn set(&mut self, codes: &[u8]) -> bool {
        let kept = &codes[..codes.len().min(TEXT_CAPACITY)];
        self.codes.clear();
        // Cannot fail: `kept` fits the capacity.
        let _ = self.codes.extend_from_slice(kept);
        self.cursor = ScrollCursor::default();
        kept.len() < codes.len()
    }

    pub(crate) fn as_slice(&self) -> &[u8] {
        &self.codes
    }

    pub(crate) fn cursor(&self) -> ScrollCursor {
        self.cursor
    }

    /// Put the cursor back to a position previously read with `cursor`.
    pub(crate) fn rewind_to(&mut self, cursor: ScrollCursor) {
        self.cursor = cursor;
    }

    /// The column under the cursor. An empty message yields blank columns.
    pub(crate) fn next_column<F: Font>(&mut self, font: &F) -> u8 {
        let column = match self.codes.get(self.cursor.char_index) {
            Some(&code) => font.glyph(code)[self.cursor.bit_offset as usize],
            None => 0,
        };
        self.advance();
        column
    }

    fn advance(&mut self) {
        let cursor = &mut self.cursor;
        cursor.bit_offset += 1;
        if cursor.bit_offset >= 8 {
            cursor.bit_offset = 0;
            cursor.char_index += 1;
        }
        if cursor.char_index >= self.codes.len() {
            cursor.char_index = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::Cp437;

    /// Glyph `c` has column `k` equal to `c + k`, so every column read is identifiable.
    struct CountingFont;

    impl Font for CountingFont {
        fn glyph(&self, code: u8) -> [u8; 8] {
            let mut g = [0; 8];
            for (k, col) in g.iter_mut().enumerate() {
                *col = code.wrapping_add(k as u8);
            }
            g
        }
    }

    #[test]
    fn truncates_to_capacity() {
        let mut text = TextBuffer::new();
        assert!(!text.set(b"hello"));
        assert_eq!(text.as_slice(), b"hello");
        let long = [b'x'; 40];
        assert!(text.set(&long));
        assert_eq!(text.as_slice().len(), TEXT_CAPACITY);
    }

    #[test]
    fn set_rewinds_cursor() {
        let mut text = TextBuffer::new();
        text.set(b"AB");
        for _ in 0..11 {
            text.next_column(&Cp437);
        }
        assert_eq!(
            text.cursor(),
            ScrollCursor {
                bit_offset: 3,
                char_index: 1
            }
        );
        text.set(b"CD");
        assert_eq!(text.cursor(), ScrollCursor::default());
    }

    #[test]
    fn columns_in_order() {
        let mut text = TextBuffer::new();
        text.set(&[10, 100]);
        let cols: std::vec::Vec<u8> = (0..18).map(|_| text.next_column(&CountingFont)).collect();
        let expect: std::vec::Vec<u8> = (10..18).chain(100..108).chain(10..12).collect();
        assert_eq!(cols, expect);
    }

    #[test]
    fn cursor_wraps_after_whole_text() {
        let mut text = TextBuffer::new();
        text.set(b"AB");
        for _ in 0..8 {
            text.next_column(&Cp437);
        }
        assert_eq!(
            text.cursor(),
            ScrollCursor {
                bit_offset: 0,
                char_index: 1
            }
        );
        for _ in 0..8 {
            text.next_column(&Cp437);
        }
        assert_eq!(text.cursor(), ScrollCursor::default());
    }

    #[test]
    fn rewind_repeats_columns() {
        let mut text = TextBuffer::new();
        text.set(&[10]);
        let mark = text.cursor();
        let first = text.next_column(&CountingFont);
        text.next_column(&CountingFont);
        text.rewind_to(mark);
        assert_eq!(text.next_column(&CountingFont), first);
    }

    #[test]
    fn empty_text_is_blank() {
        let mut text = TextBuffer::new();
        for _ in 0..20 {
            assert_eq!(text.next_column(&CountingFont), 0);
            assert_eq!(text.cursor().char_index, 0);
        }
    }
}
