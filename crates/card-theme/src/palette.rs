//! Named colours used across the card.
//!
//! Values are OKLCH so they can be declared `const`; the sRGB each one was
//! taken from is noted alongside. Terminal-standard names (`GREEN`, `GRAY`,
//! ...) are picked from the xterm 256-colour cube so they survive a downgrade
//! to the palette unchanged. Brand colours belong to the social networks in
//! the link table.

use card_term::color::Color;

// ── Terminal standard ────────────────────────────────────────────────

/// `#5fff87`, matrix rain heads.
pub const GREEN_BRIGHT: Color = Color::oklch(0.889, 0.210, 148.5);
/// `#00af5f`, the row just behind a rain head.
pub const GREEN: Color = Color::oklch(0.661, 0.168, 153.5);
/// `#808080`, rain trails and secondary text.
pub const GRAY: Color = Color::oklch(0.600, 0.0, 0.0);
/// `#00d7ff`
pub const CYAN: Color = Color::oklch(0.811, 0.146, 217.7);
/// `#d75fd7`
pub const MAGENTA: Color = Color::oklch(0.677, 0.206, 327.6);
/// `#ffd75f`
pub const YELLOW: Color = Color::oklch(0.891, 0.144, 90.7);
/// `#5f87ff`
pub const BLUE: Color = Color::oklch(0.654, 0.183, 267.3);
/// `#ff5f5f`
pub const RED: Color = Color::oklch(0.695, 0.195, 23.7);
/// `#ffffff`
pub const WHITE: Color = Color::WHITE;

// ── Brands ───────────────────────────────────────────────────────────

/// `#0085ff`
pub const BLUESKY: Color = Color::oklch(0.626, 0.205, 254.9);
/// `#a371f7`, GitHub's dark-mode accent (the logo black is invisible on
/// dark terminals).
pub const GITHUB: Color = Color::oklch(0.661, 0.193, 298.1);
/// `#0a66c2`
pub const LINKEDIN: Color = Color::oklch(0.516, 0.163, 254.7);
/// `#6364ff`
pub const MASTODON: Color = Color::oklch(0.593, 0.224, 276.8);
/// `#ff0000`
pub const YOUTUBE: Color = Color::oklch(0.628, 0.258, 29.2);
/// `#e1306c`
pub const INSTAGRAM: Color = Color::oklch(0.605, 0.213, 6.8);
/// `#9146ff`
pub const TWITCH: Color = Color::oklch(0.591, 0.255, 296.1);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_round_trip_to_source_hex() {
        // OKLCH literals are rounded; allow two steps per channel.
        let close = |c: Color, (r, g, b): (u8, u8, u8)| {
            let (cr, cg, cb) = c.to_rgb8();
            cr.abs_diff(r) <= 2 && cg.abs_diff(g) <= 2 && cb.abs_diff(b) <= 2
        };
        assert!(close(GREEN_BRIGHT, (0x5f, 0xff, 0x87)), "{}", GREEN_BRIGHT.to_hex());
        assert!(close(GRAY, (0x80, 0x80, 0x80)), "{}", GRAY.to_hex());
        assert!(close(BLUESKY, (0x00, 0x85, 0xff)), "{}", BLUESKY.to_hex());
        assert!(close(LINKEDIN, (0x0a, 0x66, 0xc2)), "{}", LINKEDIN.to_hex());
    }

    #[test]
    fn head_is_brighter_than_body() {
        assert!(GREEN_BRIGHT.l > GREEN.l);
        assert!(GREEN.l > GRAY.l);
    }

    #[test]
    fn gray_is_achromatic() {
        assert!(GRAY.is_achromatic());
    }
}
