//! Multi-stop colour gradients over text.
//!
//! A [`Gradient`] spreads its stops evenly over `0.0..=1.0` and colours each
//! visible grapheme of a string by its position. Interpolation happens in
//! OKLCH; [`HueMode::Long`] sends the hue the long way round the wheel so a
//! pair of almost identical stops sweeps the whole spectrum (that is how
//! [`rainbow`] and [`pastel`] work).
//!
//! Whitespace is never coloured and does not count as a position, so a
//! sentence shades the same regardless of how many spaces it carries. Block
//! font titles go through [`Gradient::multiline`] instead, which colours by
//! column so every row of a glyph gets the same hue.

use std::io::Write;

use card_term::ansi;
use card_term::color::Color;
use card_term::style::ColorDepth;
use card_term::text::display_width;
use unicode_segmentation::UnicodeSegmentation;

/// Which way round the hue wheel to interpolate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HueMode {
    /// Shortest arc between neighbouring stops.
    #[default]
    Short,
    /// Longest arc; two close hues sweep the full wheel.
    Long,
}

/// An ordered list of colour stops.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    stops: Vec<Color>,
    mode: HueMode,
}

impl Gradient {
    /// A gradient through `stops` in order. Returns `None` for an empty list.
    #[must_use]
    pub fn new(stops: Vec<Color>, mode: HueMode) -> Option<Self> {
        if stops.is_empty() {
            return None;
        }
        Some(Self { stops, mode })
    }

    /// The colour stops.
    #[must_use]
    pub fn stops(&self) -> &[Color] {
        &self.stops
    }

    /// Hue interpolation mode.
    #[must_use]
    pub const fn mode(&self) -> HueMode {
        self.mode
    }

    /// Colour at position `t` (clamped to `0.0..=1.0`).
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn color_at(&self, t: f32) -> Color {
        let [first, .., last] = self.stops.as_slice() else {
            return self.stops[0];
        };
        let t = t.clamp(0.0, 1.0);
        if t <= 0.0 {
            return *first;
        }
        if t >= 1.0 {
            return *last;
        }

        let segments = (self.stops.len() - 1) as f32;
        let scaled = t * segments;
        let idx = (scaled.floor() as usize).min(self.stops.len() - 2);
        let local = scaled - idx as f32;

        let (a, b) = (self.stops[idx], &self.stops[idx + 1]);
        match self.mode {
            HueMode::Short => a.mix(b, local),
            HueMode::Long => a.mix_long(b, local),
        }
    }

    /// `n` evenly spaced colours from start to end.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn sample(&self, n: usize) -> Vec<Color> {
        match n {
            0 => Vec::new(),
            1 => vec![self.color_at(0.0)],
            _ => (0..n)
                .map(|i| self.color_at(i as f32 / (n - 1) as f32))
                .collect(),
        }
    }

    /// Colour each non-whitespace grapheme of `text` by its position.
    ///
    /// Returns `text` unchanged at [`ColorDepth::None`].
    #[must_use]
    pub fn apply(&self, text: &str, depth: ColorDepth) -> String {
        if !depth.is_enabled() || text.is_empty() {
            return text.to_owned();
        }

        let visible = text.graphemes(true).filter(|g| !is_blank(g)).count();
        let mut colors = self.sample(visible).into_iter();

        let mut out = Vec::with_capacity(text.len() * 20);
        for g in text.graphemes(true) {
            if !is_blank(g) {
                if let Some(color) = colors.next() {
                    let _ = ansi::fg(&mut out, depth.adapt(color.to_cell_color()));
                }
            }
            out.extend_from_slice(g.as_bytes());
        }
        finish(out, text)
    }

    /// Colour a block of lines by column, so the same column gets the same
    /// colour on every line.
    ///
    /// Returns `text` unchanged at [`ColorDepth::None`].
    #[must_use]
    pub fn multiline(&self, text: &str, depth: ColorDepth) -> String {
        if !depth.is_enabled() || text.is_empty() {
            return text.to_owned();
        }

        let width = text.lines().map(display_width).max().unwrap_or(0);
        let colors = self.sample(width);

        let lines: Vec<String> = text
            .lines()
            .map(|line| {
                let mut out = Vec::with_capacity(line.len() * 20);
                let mut col = 0;
                for g in line.graphemes(true) {
                    if !is_blank(g) {
                        if let Some(color) = colors.get(col) {
                            let _ = ansi::fg(&mut out, depth.adapt(color.to_cell_color()));
                        }
                    }
                    out.extend_from_slice(g.as_bytes());
                    col += display_width(g);
                }
                finish(out, line)
            })
            .collect();
        lines.join("\n")
    }
}

fn is_blank(g: &str) -> bool {
    g.chars().all(char::is_whitespace)
}

/// Append a reset if anything was coloured and convert back to a string.
fn finish(mut out: Vec<u8>, original: &str) -> String {
    if out.len() != original.len() {
        let _ = out.write_all(b"\x1b[0m");
    }
    String::from_utf8(out).unwrap_or_else(|_| original.to_owned())
}

// ─── Presets ─────────────────────────────────────────────────────────────────

fn preset(stops: &[(u8, u8, u8)], mode: HueMode) -> Gradient {
    Gradient {
        stops: stops.iter().map(|&(r, g, b)| Color::rgb8(r, g, b)).collect(),
        mode,
    }
}

/// Orange, orchid, teal.
#[must_use]
pub fn atlas() -> Gradient {
    preset(&[(0xfe, 0xac, 0x5e), (0xc7, 0x79, 0xd0), (0x4b, 0xc0, 0xc8)], HueMode::Short)
}

/// Mint to jade.
#[must_use]
pub fn cristal() -> Gradient {
    preset(&[(0xbd, 0xff, 0xf3), (0x4a, 0xc2, 0x9a)], HueMode::Short)
}

#[must_use]
pub fn teen() -> Gradient {
    preset(&[(0x77, 0xa1, 0xd3), (0x79, 0xcb, 0xca), (0xe6, 0x84, 0xae)], HueMode::Short)
}

#[must_use]
pub fn mind() -> Gradient {
    preset(&[(0x47, 0x3b, 0x7b), (0x35, 0x84, 0xa7), (0x30, 0xd2, 0xbe)], HueMode::Short)
}

#[must_use]
pub fn morning() -> Gradient {
    preset(&[(0xff, 0x5f, 0x6d), (0xff, 0xc3, 0x71)], HueMode::Short)
}

/// Aqua to lilac.
#[must_use]
pub fn vice() -> Gradient {
    preset(&[(0x5e, 0xe7, 0xdf), (0xb4, 0x90, 0xca)], HueMode::Short)
}

#[must_use]
pub fn passion() -> Gradient {
    preset(&[(0xf4, 0x3b, 0x47), (0x45, 0x3a, 0x94)], HueMode::Short)
}

#[must_use]
pub fn fruit() -> Gradient {
    preset(&[(0xff, 0x4e, 0x50), (0xf9, 0xd4, 0x23)], HueMode::Short)
}

#[must_use]
pub fn instagram() -> Gradient {
    preset(&[(0x83, 0x3a, 0xb4), (0xfd, 0x1d, 0x1d), (0xfc, 0xb0, 0x45)], HueMode::Short)
}

#[must_use]
pub fn summer() -> Gradient {
    preset(&[(0xfd, 0xbb, 0x2d), (0x22, 0xc1, 0xc3)], HueMode::Short)
}

/// Full saturated spectrum starting at red.
#[must_use]
pub fn rainbow() -> Gradient {
    preset(&[(0xff, 0x00, 0x00), (0xff, 0x01, 0x00)], HueMode::Long)
}

/// Full pale spectrum starting at aquamarine.
#[must_use]
pub fn pastel() -> Gradient {
    preset(&[(0x74, 0xeb, 0xd5), (0x74, 0xec, 0xd5)], HueMode::Long)
}

/// Names accepted by [`by_name`].
pub const PRESET_NAMES: [&str; 12] = [
    "atlas", "cristal", "teen", "mind", "morning", "vice", "passion", "fruit", "instagram",
    "summer", "rainbow", "pastel",
];

/// Look up a preset gradient by name.
#[must_use]
pub fn by_name(name: &str) -> Option<Gradient> {
    Some(match name {
        "atlas" => atlas(),
        "cristal" => cristal(),
        "teen" => teen(),
        "mind" => mind(),
        "morning" => morning(),
        "vice" => vice(),
        "passion" => passion(),
        "fruit" => fruit(),
        "instagram" => instagram(),
        "summer" => summer(),
        "rainbow" => rainbow(),
        "pastel" => pastel(),
        _ => return None,
    })
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use card_term::text::strip_ansi;
    use pretty_assertions::assert_eq;

    fn two_stop() -> Gradient {
        Gradient::new(vec![Color::rgb8(255, 0, 0), Color::rgb8(0, 0, 255)], HueMode::Short).unwrap()
    }

    #[test]
    fn empty_stops_rejected() {
        assert!(Gradient::new(Vec::new(), HueMode::Short).is_none());
    }

    #[test]
    fn endpoints_are_stops() {
        let g = two_stop();
        assert_eq!(g.color_at(0.0).to_rgb8(), (255, 0, 0));
        assert_eq!(g.color_at(1.0).to_rgb8(), (0, 0, 255));
        assert_eq!(g.color_at(-3.0).to_rgb8(), (255, 0, 0));
        assert_eq!(g.color_at(7.0).to_rgb8(), (0, 0, 255));
    }

    #[test]
    fn middle_stop_is_hit_exactly() {
        let g = atlas();
        let (r, gr, b) = g.color_at(0.5).to_rgb8();
        let (er, eg, eb) = (0xc7u8, 0x79u8, 0xd0u8);
        assert!(r.abs_diff(er) <= 1 && gr.abs_diff(eg) <= 1 && b.abs_diff(eb) <= 1);
    }

    #[test]
    fn single_stop_is_constant() {
        let g = Gradient::new(vec![Color::rgb8(1, 2, 3)], HueMode::Short).unwrap();
        assert_eq!(g.color_at(0.3).to_rgb8(), (1, 2, 3));
        assert_eq!(g.sample(3).len(), 3);
    }

    #[test]
    fn rainbow_sweeps_the_wheel() {
        let g = rainbow();
        let quarter = g.color_at(0.25);
        let half = g.color_at(0.5);
        // A short mix of two reds would stay red; the long one does not.
        assert!(Color::rgb8(255, 0, 0).distance(&quarter) > 0.2);
        assert!(quarter.distance(&half) > 0.2);
    }

    #[test]
    fn sample_counts() {
        let g = two_stop();
        assert!(g.sample(0).is_empty());
        assert_eq!(g.sample(1).len(), 1);
        let five = g.sample(5);
        assert_eq!(five.len(), 5);
        assert_eq!(five[4].to_rgb8(), (0, 0, 255));
    }

    #[test]
    fn apply_without_color_is_identity() {
        assert_eq!(vice().apply("hello there", ColorDepth::None), "hello there");
    }

    #[test]
    fn apply_preserves_visible_text() {
        let out = vice().apply("hello there", ColorDepth::TrueColor);
        assert_eq!(strip_ansi(&out), "hello there");
        assert!(out.ends_with("\x1b[0m"));
    }

    #[test]
    fn apply_skips_whitespace() {
        let out = two_stop().apply("a b", ColorDepth::TrueColor);
        // Two visible graphemes, two colour codes; the space is bare.
        assert_eq!(out.matches("\x1b[38;2;").count(), 2);
        assert!(out.contains("a "));
    }

    #[test]
    fn apply_whitespace_only_emits_no_codes() {
        assert_eq!(vice().apply("   ", ColorDepth::TrueColor), "   ");
    }

    #[test]
    fn multiline_aligns_columns() {
        let out = two_stop().multiline("ab\nab", ColorDepth::TrueColor);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], lines[1]);
        assert_eq!(strip_ansi(&out), "ab\nab");
    }

    #[test]
    fn multiline_short_line_uses_leading_colours() {
        let g = two_stop();
        let out = g.multiline("a\nabcd", ColorDepth::TrueColor);
        let first = out.lines().next().unwrap();
        assert!(first.starts_with("\x1b[38;2;255;0;0ma"), "got {first:?}");
    }

    #[test]
    fn ansi16_output_uses_compact_codes() {
        let out = two_stop().apply("x", ColorDepth::Ansi16);
        assert!(!out.contains("38;2;"));
        assert_eq!(strip_ansi(&out), "x");
    }

    #[test]
    fn presets_by_name() {
        for name in PRESET_NAMES {
            assert!(by_name(name).is_some(), "{name}");
        }
        assert!(by_name("vaporwave").is_none());
        assert_eq!(rainbow().mode(), HueMode::Long);
        assert_eq!(vice().stops().len(), 2);
    }
}
