// SPDX-License-Identifier: MIT
//
// Colour for the card: OKLCH in, terminal codes out.
//
// Single-character variable names (r, g, b, l, c, h) are the standard
// notation in colour science.
#![allow(clippy::many_single_char_names)]
//
// Gradients are the whole visual identity of the card, and gradients look
// wrong when interpolated in raw RGB (muddy midpoints, uneven steps). So
// every colour is held in OKLCH, blended there, and only converted to sRGB
// at the last moment when an escape sequence is written.
//
//   OKLCH ↔ Oklab ↔ Linear sRGB ↔ sRGB ↔ CellColor (TrueColor / 256 / 16)
//
// Terminals without TrueColor get the perceptually nearest palette entry.

use std::fmt;

// ─── Color ───────────────────────────────────────────────────────────────────

/// A colour in OKLCH space.
///
/// ```
/// use card_term::color::Color;
///
/// let teal = Color::hex("#4ac29a").unwrap();
/// let lilac = Color::hex("#b490ca").unwrap();
/// let mid = teal.mix(&lilac, 0.5);
/// assert!(mid.l > 0.0);
/// ```
#[derive(Clone, Copy)]
pub struct Color {
    /// Lightness, 0.0 (black) to 1.0 (white).
    pub l: f32,
    /// Chroma, 0.0 (gray) to roughly 0.37.
    pub c: f32,
    /// Hue angle in degrees, 0.0 to 360.0.
    pub h: f32,
}

impl Color {
    /// Create a colour from OKLCH components.
    #[inline]
    #[must_use]
    pub const fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self { l, c, h }
    }

    /// Create a colour from sRGB components in 0.0–1.0.
    #[must_use]
    pub fn srgb(r: f32, g: f32, b: f32) -> Self {
        let (l, c, h) = srgb_to_oklch(r, g, b);
        Self { l, c, h }
    }

    /// Create a colour from 8-bit sRGB.
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::srgb(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        )
    }

    /// Parse `#RGB` or `#RRGGBB` (the `#` is optional).
    #[must_use]
    pub fn hex(s: &str) -> Option<Self> {
        parse_hex(s)
    }

    /// Pure black.
    pub const BLACK: Self = Self::oklch(0.0, 0.0, 0.0);

    /// Pure white.
    pub const WHITE: Self = Self::oklch(1.0, 0.0, 0.0);

    /// Whether this colour has no visible chroma.
    #[inline]
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.c.abs() < 1e-5
    }

    /// Increase lightness by `amount` (clamped to 0.0–1.0).
    #[inline]
    #[must_use]
    pub fn lighten(self, amount: f32) -> Self {
        Self {
            l: (self.l + amount).clamp(0.0, 1.0),
            ..self
        }
    }

    /// Decrease lightness by `amount` (clamped to 0.0–1.0).
    #[inline]
    #[must_use]
    pub fn darken(self, amount: f32) -> Self {
        Self {
            l: (self.l - amount).clamp(0.0, 1.0),
            ..self
        }
    }

    /// Rotate the hue by `degrees`, wrapping at 360°.
    #[inline]
    #[must_use]
    pub fn shift_hue(self, degrees: f32) -> Self {
        Self {
            h: normalize_hue(self.h + degrees),
            ..self
        }
    }

    /// Interpolate towards `other`; hue takes the shortest way round.
    ///
    /// `t` = 0.0 returns `self`, `t` = 1.0 returns `other`.
    #[must_use]
    pub fn mix(self, other: &Self, t: f32) -> Self {
        self.mix_with(other, t, interpolate_hue_short)
    }

    /// Interpolate towards `other`; hue takes the long way round.
    ///
    /// Two nearly identical hues mixed this way sweep the whole colour
    /// wheel, which is how the rainbow and pastel gradients are built.
    #[must_use]
    pub fn mix_long(self, other: &Self, t: f32) -> Self {
        self.mix_with(other, t, interpolate_hue_long)
    }

    fn mix_with(self, other: &Self, t: f32, hue: fn(f32, f32, f32) -> f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let inv_t = 1.0 - t;

        let h = if self.is_achromatic() {
            other.h
        } else if other.is_achromatic() {
            self.h
        } else {
            hue(self.h, other.h, t)
        };

        Self {
            l: self.l.mul_add(inv_t, other.l * t),
            c: self.c.mul_add(inv_t, other.c * t),
            h,
        }
    }

    /// Perceptual distance (Euclidean in Oklab).
    #[must_use]
    pub fn distance(self, other: &Self) -> f32 {
        let (l1, a1, b1) = oklch_to_oklab(self.l, self.c, self.h);
        let (l2, a2, b2) = oklch_to_oklab(other.l, other.c, other.h);
        let dl = l1 - l2;
        let da = a1 - a2;
        let db = b1 - b2;
        db.mul_add(db, dl.mul_add(dl, da * da)).sqrt()
    }

    /// Convert to sRGB, clamping out-of-gamut components.
    #[must_use]
    pub fn to_srgb(self) -> (f32, f32, f32) {
        let (r, g, b) = oklch_to_srgb(self.l, self.c, self.h);
        (r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
    }

    /// Convert to 8-bit sRGB.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let (r, g, b) = self.to_srgb();
        (to_u8(r), to_u8(g), to_u8(b))
    }

    /// `#rrggbb` form.
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// TrueColor cell colour. Downgrade with [`CellColor::to_ansi256`] or
    /// [`CellColor::to_ansi16`] for older terminals.
    #[must_use]
    pub fn to_cell_color(self) -> CellColor {
        let (r, g, b) = self.to_rgb8();
        CellColor::Rgb(r, g, b)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color::oklch({:.4}, {:.4}, {:.1})", self.l, self.c, self.h)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        const EPS: f32 = 1e-4;
        (self.l - other.l).abs() < EPS
            && (self.c - other.c).abs() < EPS
            && (self.is_achromatic() || other.is_achromatic() || hue_diff(self.h, other.h) < EPS)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

// ─── CellColor ───────────────────────────────────────────────────────────────

/// A colour as the terminal receives it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellColor {
    /// 24-bit TrueColor.
    Rgb(u8, u8, u8),

    /// ANSI 256-colour palette index (0–15 are the standard 16).
    Ansi256(u8),

    /// The terminal's own foreground.
    #[default]
    Default,
}

impl CellColor {
    /// Downgrade to the 256-colour palette.
    #[must_use]
    pub fn to_ansi256(self) -> Self {
        match self {
            Self::Rgb(r, g, b) => Self::Ansi256(palette::nearest_ansi256(Color::rgb8(r, g, b))),
            other => other,
        }
    }

    /// Downgrade to the 16 standard colours.
    #[must_use]
    pub fn to_ansi16(self) -> Self {
        match self {
            Self::Rgb(r, g, b) => Self::Ansi256(palette::nearest_ansi16(Color::rgb8(r, g, b))),
            Self::Ansi256(idx) if idx >= 16 => {
                let (r, g, b) = palette::ansi256_to_rgb(idx);
                Self::Ansi256(palette::nearest_ansi16(Color::rgb8(r, g, b)))
            }
            other => other,
        }
    }
}

impl fmt::Debug for CellColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
            Self::Ansi256(idx) => write!(f, "ansi({idx})"),
            Self::Default => f.write_str("default"),
        }
    }
}

impl From<Color> for CellColor {
    fn from(color: Color) -> Self {
        color.to_cell_color()
    }
}

// ─── Hue Helpers ─────────────────────────────────────────────────────────────

#[inline]
fn normalize_hue(h: f32) -> f32 {
    let h = h % 360.0;
    if h < 0.0 { h + 360.0 } else { h }
}

#[inline]
fn hue_diff(a: f32, b: f32) -> f32 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

fn interpolate_hue_short(h1: f32, h2: f32, t: f32) -> f32 {
    let mut diff = h2 - h1;
    if diff > 180.0 {
        diff -= 360.0;
    } else if diff < -180.0 {
        diff += 360.0;
    }
    normalize_hue(diff.mul_add(t, h1))
}

fn interpolate_hue_long(h1: f32, h2: f32, t: f32) -> f32 {
    let mut diff = h2 - h1;
    if (0.0..180.0).contains(&diff) {
        diff -= 360.0;
    } else if (-180.0..0.0).contains(&diff) {
        diff += 360.0;
    }
    normalize_hue(diff.mul_add(t, h1))
}

// ─── Colour Space Conversion ─────────────────────────────────────────────────
//
// Oklab by Björn Ottosson: https://bottosson.github.io/posts/oklab/

#[inline]
fn oklch_to_oklab(l: f32, c: f32, h: f32) -> (f32, f32, f32) {
    let h_rad = h.to_radians();
    (l, c * h_rad.cos(), c * h_rad.sin())
}

#[inline]
fn oklab_to_oklch(l: f32, a: f32, b: f32) -> (f32, f32, f32) {
    let c = a.hypot(b);
    let h = if c < 1e-8 {
        0.0
    } else {
        normalize_hue(b.atan2(a).to_degrees())
    };
    (l, c, h)
}

fn oklab_to_linear_srgb(l_ok: f32, a: f32, b: f32) -> (f32, f32, f32) {
    let l_ = 0.215_803_76f32.mul_add(b, 0.396_337_78f32.mul_add(a, l_ok));
    let m_ = 0.063_854_17f32.mul_add(-b, 0.105_561_346f32.mul_add(-a, l_ok));
    let s_ = 1.291_485_5f32.mul_add(-b, 0.089_484_18f32.mul_add(-a, l_ok));

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    let r = 0.230_969_94f32.mul_add(s, 4.076_741_7f32.mul_add(l, -(3.307_711_6 * m)));
    let g = 0.341_319_38f32.mul_add(-s, (-1.268_438f32).mul_add(l, 2.609_757_4 * m));
    let bl = 1.707_614_7f32.mul_add(s, (-0.004_196_086_3f32).mul_add(l, -(0.703_418_6 * m)));

    (r, g, bl)
}

fn linear_srgb_to_oklab(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let l = 0.051_445_995f32.mul_add(b, 0.412_221_47f32.mul_add(r, 0.536_332_55 * g));
    let m = 0.107_396_96f32.mul_add(b, 0.211_903_5f32.mul_add(r, 0.680_699_5 * g));
    let s = 0.629_978_7f32.mul_add(b, 0.088_302_46f32.mul_add(r, 0.281_718_84 * g));

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    let l_ok = 0.004_072_047f32.mul_add(-s_, 0.210_454_26f32.mul_add(l_, 0.793_617_8 * m_));
    let a = 0.450_593_7f32.mul_add(s_, 1.977_998_5f32.mul_add(l_, -(2.428_592_2 * m_)));
    let b_ok = 0.808_675_77f32.mul_add(-s_, 0.025_904_037f32.mul_add(l_, 0.782_771_77 * m_));

    (l_ok, a, b_ok)
}

#[inline]
fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055f32.mul_add(c.powf(1.0 / 2.4), -0.055)
    }
}

#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn srgb_to_oklch(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let (l, a, b_ok) = linear_srgb_to_oklab(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b));
    oklab_to_oklch(l, a, b_ok)
}

fn oklch_to_srgb(l: f32, c: f32, h: f32) -> (f32, f32, f32) {
    let (l, a, b) = oklch_to_oklab(l, c, h);
    let (lr, lg, lb) = oklab_to_linear_srgb(l, a, b);
    (linear_to_srgb(lr), linear_to_srgb(lg), linear_to_srgb(lb))
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<Color> {
    let s = s.strip_prefix('#').unwrap_or(s);
    let digits: Vec<u8> = s
        .bytes()
        .map(hex_digit)
        .collect::<Option<Vec<u8>>>()?;

    match digits.as_slice() {
        [r, g, b] => Some(Color::rgb8(r << 4 | r, g << 4 | g, b << 4 | b)),
        [r1, r2, g1, g2, b1, b2] => Some(Color::rgb8(r1 << 4 | r2, g1 << 4 | g2, b1 << 4 | b2)),
        _ => None,
    }
}

#[inline]
const fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f32) -> u8 {
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── ANSI Palette ────────────────────────────────────────────────────────────

pub mod palette {
    //! The xterm 256-colour palette and perceptual nearest-match.
    //!
    //! - 0–15: standard and bright colours
    //! - 16–231: a 6×6×6 RGB cube
    //! - 232–255: a 24-step gray ramp

    use super::Color;

    /// xterm defaults for the first 16 entries.
    pub const ANSI16_RGB: [(u8, u8, u8); 16] = [
        (0, 0, 0),
        (128, 0, 0),
        (0, 128, 0),
        (128, 128, 0),
        (0, 0, 128),
        (128, 0, 128),
        (0, 128, 128),
        (192, 192, 192),
        (128, 128, 128),
        (255, 0, 0),
        (0, 255, 0),
        (255, 255, 0),
        (0, 0, 255),
        (255, 0, 255),
        (0, 255, 255),
        (255, 255, 255),
    ];

    /// RGB value of a palette index.
    #[must_use]
    pub fn ansi256_to_rgb(idx: u8) -> (u8, u8, u8) {
        match idx {
            0..=15 => ANSI16_RGB[idx as usize],
            16..=231 => {
                let i = idx - 16;
                let level = |n: u8| if n == 0 { 0 } else { 55 + 40 * n };
                (level(i / 36), level((i % 36) / 6), level(i % 6))
            }
            232..=255 => {
                let v = 8 + 10 * (idx - 232);
                (v, v, v)
            }
        }
    }

    fn nearest(color: Color, candidates: impl Iterator<Item = u8>) -> u8 {
        candidates
            .map(|idx| {
                let (r, g, b) = ansi256_to_rgb(idx);
                (idx, color.distance(&Color::rgb8(r, g, b)))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map_or(0, |(idx, _)| idx)
    }

    /// Perceptually nearest entry of the full 256-colour palette.
    #[must_use]
    pub fn nearest_ansi256(color: Color) -> u8 {
        nearest(color, 0..=255)
    }

    /// Perceptually nearest of the 16 standard colours.
    #[must_use]
    pub fn nearest_ansi16(color: Color) -> u8 {
        nearest(color, 0..16)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
