// SPDX-License-Identifier: MIT
//
// Style — colour + attributes applied to a run of text.
//
// The card is printed line by line, not painted into a cell grid, so a
// style here produces a self-contained string: opening SGR codes, the text,
// and a reset. Colours are adapted to what the terminal can show before
// they are encoded; at `ColorDepth::None` the text passes through untouched
// so piped output stays clean.

use crate::ansi;
use crate::color::{CellColor, Color};

// ─── Text Attributes ─────────────────────────────────────────────────────────

bitflags::bitflags! {
    /// Text attributes, mapping directly to SGR parameters.
    ///
    /// ```
    /// use card_term::style::Attr;
    ///
    /// let heading = Attr::BOLD;
    /// assert!(heading.contains(Attr::BOLD));
    /// assert!(!heading.contains(Attr::DIM));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Attr: u8 {
        /// SGR 1.
        const BOLD = 1 << 0;
        /// SGR 2.
        const DIM  = 1 << 1;
    }
}

// ─── Colour Depth ────────────────────────────────────────────────────────────

/// How many colours the output terminal can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub enum ColorDepth {
    /// No escape codes at all (pipes, `NO_COLOR`).
    #[default]
    None,
    /// The 16 standard colours.
    Ansi16,
    /// The xterm 256-colour palette.
    Ansi256,
    /// 24-bit colour.
    TrueColor,
}

impl ColorDepth {
    /// Whether any styling should be emitted.
    #[inline]
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Fit a colour to this depth. `None` maps everything to `Default`.
    #[must_use]
    pub fn adapt(self, color: CellColor) -> CellColor {
        match self {
            Self::None => CellColor::Default,
            Self::Ansi16 => color.to_ansi16(),
            Self::Ansi256 => color.to_ansi256(),
            Self::TrueColor => color,
        }
    }

    /// Pick a depth from `COLORTERM` and `TERM` values.
    ///
    /// `COLORTERM=truecolor|24bit` wins; otherwise a `TERM` containing
    /// `256color` gives the palette; `TERM=dumb` gives nothing; anything else
    /// gets the 16 standard colours.
    #[must_use]
    pub fn from_env_values(colorterm: Option<&str>, term: Option<&str>) -> Self {
        if matches!(colorterm, Some("truecolor" | "24bit")) {
            return Self::TrueColor;
        }
        match term {
            Some("dumb") => Self::None,
            Some(t) if t.contains("256color") => Self::Ansi256,
            _ => Self::Ansi16,
        }
    }
}

// ─── Style ───────────────────────────────────────────────────────────────────

/// Foreground colour plus attributes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Style {
    /// Foreground colour; `None` keeps the terminal default.
    pub fg: Option<Color>,
    /// SGR attributes.
    pub attrs: Attr,
}

impl Style {
    /// A style with just a foreground colour.
    #[must_use]
    pub const fn fg(color: Color) -> Self {
        Self {
            fg: Some(color),
            attrs: Attr::empty(),
        }
    }

    /// Add attributes.
    #[must_use]
    pub const fn with_attrs(self, attrs: Attr) -> Self {
        Self {
            attrs: Attr::from_bits_truncate(self.attrs.bits() | attrs.bits()),
            ..self
        }
    }

    /// Shorthand for `with_attrs(Attr::BOLD)`.
    #[must_use]
    pub const fn bold(self) -> Self {
        self.with_attrs(Attr::BOLD)
    }

    /// Shorthand for `with_attrs(Attr::DIM)`.
    #[must_use]
    pub const fn dim(self) -> Self {
        self.with_attrs(Attr::DIM)
    }

    /// Whether the style would emit nothing.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.fg.is_none() && self.attrs.is_empty()
    }

    /// Render `text` in this style for a terminal of the given depth.
    ///
    /// Returns `text` unchanged at [`ColorDepth::None`] or for a plain style.
    #[must_use]
    pub fn paint(&self, text: &str, depth: ColorDepth) -> String {
        if !depth.is_enabled() || self.is_plain() || text.is_empty() {
            return text.to_owned();
        }

        let mut out = Vec::with_capacity(text.len() + 24);
        // Writing into a Vec cannot fail.
        let _ = ansi::attrs(&mut out, self.attrs);
        if let Some(color) = self.fg {
            let _ = ansi::fg(&mut out, depth.adapt(color.to_cell_color()));
        }
        out.extend_from_slice(text.as_bytes());
        let _ = ansi::reset(&mut out);
        String::from_utf8(out).unwrap_or_else(|_| text.to_owned())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn paint_without_color_is_identity() {
        let style = Style::fg(Color::rgb8(255, 0, 0)).bold();
        assert_eq!(style.paint("hello", ColorDepth::None), "hello");
    }

    #[test]
    fn paint_plain_style_is_identity() {
        assert_eq!(Style::default().paint("hello", ColorDepth::TrueColor), "hello");
    }

    #[test]
    fn paint_empty_text_emits_nothing() {
        assert_eq!(Style::fg(Color::WHITE).paint("", ColorDepth::TrueColor), "");
    }

    #[test]
    fn paint_truecolor() {
        let s = Style::fg(Color::rgb8(255, 0, 0)).paint("x", ColorDepth::TrueColor);
        assert!(s.starts_with("\x1b[38;2;"));
        assert!(s.ends_with("x\x1b[0m"));
    }

    #[test]
    fn paint_attrs_before_color() {
        let s = Style::fg(Color::rgb8(0, 255, 0)).bold().paint("ok", ColorDepth::Ansi16);
        assert_eq!(s, "\x1b[1m\x1b[92mok\x1b[0m");
    }

    #[test]
    fn paint_attrs_only() {
        let s = Style::default().dim().paint("quiet", ColorDepth::Ansi256);
        assert_eq!(s, "\x1b[2mquiet\x1b[0m");
    }

    #[test]
    fn with_attrs_accumulates() {
        let style = Style::default().bold().dim();
        assert!(style.attrs.contains(Attr::BOLD | Attr::DIM));
    }

    #[test]
    fn adapt_none_drops_color() {
        assert_eq!(ColorDepth::None.adapt(CellColor::Rgb(1, 2, 3)), CellColor::Default);
    }

    #[test]
    fn adapt_truecolor_keeps_rgb() {
        assert_eq!(
            ColorDepth::TrueColor.adapt(CellColor::Rgb(1, 2, 3)),
            CellColor::Rgb(1, 2, 3)
        );
    }

    #[test]
    fn depth_from_env() {
        assert_eq!(ColorDepth::from_env_values(Some("truecolor"), None), ColorDepth::TrueColor);
        assert_eq!(ColorDepth::from_env_values(Some("24bit"), Some("dumb")), ColorDepth::TrueColor);
        assert_eq!(
            ColorDepth::from_env_values(None, Some("xterm-256color")),
            ColorDepth::Ansi256
        );
        assert_eq!(ColorDepth::from_env_values(None, Some("dumb")), ColorDepth::None);
        assert_eq!(ColorDepth::from_env_values(None, Some("xterm")), ColorDepth::Ansi16);
        assert_eq!(ColorDepth::from_env_values(None, None), ColorDepth::Ansi16);
    }

    #[test]
    fn depth_ordering() {
        assert!(ColorDepth::TrueColor > ColorDepth::Ansi256);
        assert!(ColorDepth::Ansi16 > ColorDepth::None);
    }
}
