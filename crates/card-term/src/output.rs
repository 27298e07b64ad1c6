// SPDX-License-Identifier: MIT
//
// Frame buffering for animations.
//
// A matrix-rain frame is thousands of characters, most of them sharing a
// colour with their neighbour. `FrameBuffer` collects the whole frame in
// memory and hands it to the terminal in one write, and it remembers the
// last foreground it emitted so runs of same-coloured cells cost one SGR
// sequence instead of one per cell.

use std::io::{self, Write};

use crate::ansi;
use crate::color::CellColor;
use crate::style::ColorDepth;

const DEFAULT_CAPACITY: usize = 16_384;

/// Accumulates one frame of output for a single `write_all`.
pub struct FrameBuffer {
    buf: Vec<u8>,
    depth: ColorDepth,
    /// Foreground currently in effect, `None` after a reset.
    current_fg: Option<CellColor>,
}

impl FrameBuffer {
    /// An empty buffer that encodes colours for `depth`.
    #[must_use]
    pub fn new(depth: ColorDepth) -> Self {
        Self {
            buf: Vec::with_capacity(DEFAULT_CAPACITY),
            depth,
            current_fg: None,
        }
    }

    /// Drop the contents, keep the allocation. Colour state is forgotten
    /// too, since the next frame may start after someone else wrote a reset.
    fn clear(&mut self) {
        self.buf.clear();
        self.current_fg = None;
    }

    /// Switch the foreground, skipping the escape when it is already set.
    /// Does nothing at [`ColorDepth::None`].
    pub fn set_fg(&mut self, color: CellColor) {
        if !self.depth.is_enabled() {
            return;
        }
        let adapted = self.depth.adapt(color);
        if self.current_fg == Some(adapted) {
            return;
        }
        // Writing into a Vec cannot fail.
        let _ = ansi::fg(&mut self.buf, adapted);
        self.current_fg = Some(adapted);
    }

    /// Emit SGR 0 if a colour is in effect.
    pub fn reset_style(&mut self) {
        if self.current_fg.take().is_some() {
            let _ = ansi::reset(&mut self.buf);
        }
    }

    /// Append text as-is.
    #[inline]
    pub fn push_str(&mut self, s: &str) {
        self.buf.extend_from_slice(s.as_bytes());
    }

    /// Append one character.
    #[inline]
    pub fn push(&mut self, c: char) {
        let mut tmp = [0u8; 4];
        self.buf.extend_from_slice(c.encode_utf8(&mut tmp).as_bytes());
    }

    /// Write everything to `w`, flush, and clear.
    ///
    /// # Errors
    ///
    /// Returns an error if the write or flush fails.
    pub fn flush_to(&mut self, w: &mut impl Write) -> io::Result<()> {
        if !self.buf.is_empty() {
            w.write_all(&self.buf)?;
        }
        w.flush()?;
        self.clear();
        Ok(())
    }
}

impl Write for FrameBuffer {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn drain(fb: &mut FrameBuffer) -> String {
        let mut out = Vec::new();
        fb.flush_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn push_and_write_trait() {
        let mut fb = FrameBuffer::new(ColorDepth::None);
        fb.push('ｱ');
        fb.push_str("01");
        write!(fb, "{}", 2).unwrap();
        assert_eq!(drain(&mut fb), "ｱ012");
    }

    #[test]
    fn same_colour_emitted_once() {
        let mut fb = FrameBuffer::new(ColorDepth::TrueColor);
        fb.set_fg(CellColor::Rgb(0, 255, 0));
        fb.push('a');
        fb.set_fg(CellColor::Rgb(0, 255, 0));
        fb.push('b');
        assert_eq!(drain(&mut fb), "\x1b[38;2;0;255;0mab");
    }

    #[test]
    fn colour_change_is_emitted() {
        let mut fb = FrameBuffer::new(ColorDepth::TrueColor);
        fb.set_fg(CellColor::Rgb(0, 255, 0));
        fb.push('a');
        fb.set_fg(CellColor::Rgb(0, 128, 0));
        fb.push('b');
        assert_eq!(drain(&mut fb), "\x1b[38;2;0;255;0ma\x1b[38;2;0;128;0mb");
    }

    #[test]
    fn no_colour_depth_emits_text_only() {
        let mut fb = FrameBuffer::new(ColorDepth::None);
        fb.set_fg(CellColor::Rgb(0, 255, 0));
        fb.push('a');
        fb.reset_style();
        assert_eq!(drain(&mut fb), "a");
    }

    #[test]
    fn reset_only_when_coloured() {
        let mut fb = FrameBuffer::new(ColorDepth::Ansi256);
        fb.reset_style();
        assert_eq!(drain(&mut fb), "");
        fb.set_fg(CellColor::Ansi256(2));
        fb.reset_style();
        assert!(drain(&mut fb).ends_with("\x1b[0m"));
    }

    #[test]
    fn flush_to_writes_and_clears() {
        let mut fb = FrameBuffer::new(ColorDepth::TrueColor);
        fb.set_fg(CellColor::Rgb(1, 2, 3));
        fb.push_str("hi");
        assert_eq!(drain(&mut fb), "\x1b[38;2;1;2;3mhi");
        assert_eq!(drain(&mut fb), "");

        // State forgotten: the colour is emitted again next frame.
        fb.set_fg(CellColor::Rgb(1, 2, 3));
        assert_eq!(drain(&mut fb), "\x1b[38;2;1;2;3m");
    }
}
