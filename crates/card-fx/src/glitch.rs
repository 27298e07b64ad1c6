//! Glitch sign-off: the text flickers through random noise, then settles.

use std::io::{self, Write};

use card_term::ansi;
use card_term::terminal::Capabilities;
use card_theme::gradient;
use rand::Rng;
use unicode_segmentation::UnicodeSegmentation;

use crate::config::{AnimationConfig, GlitchConfig};
use crate::pacer::Pacer;

/// Replace each grapheme of `text` with a random glitch glyph when a roll
/// beats the threshold.
#[must_use]
pub fn glitch_frame<R: Rng + ?Sized>(text: &str, cfg: &GlitchConfig, rng: &mut R) -> String {
    if cfg.chars.is_empty() {
        return text.to_owned();
    }
    text.graphemes(true)
        .map(|g| {
            if rng.random::<f64>() > cfg.threshold {
                cfg.chars[rng.random_range(0..cfg.chars.len())].to_string()
            } else {
                g.to_owned()
            }
        })
        .collect()
}

/// Flicker `text` for the configured iterations in the cristal gradient,
/// then print it in the atlas gradient.
///
/// Without animation support the text is printed as-is.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn glitch_effect<W, R>(
    out: &mut W,
    caps: &Capabilities,
    text: &str,
    cfg: &AnimationConfig,
    rng: &mut R,
) -> io::Result<()>
where
    W: Write,
    R: Rng + ?Sized,
{
    if !caps.animations {
        return writeln!(out, "{text}");
    }
    let settled = gradient::atlas().apply(text, caps.color);

    let noise = gradient::cristal();
    let pacer = Pacer::unbounded();
    for _ in 0..cfg.glitch.iterations {
        let glitched = glitch_frame(text, &cfg.glitch, rng);
        write!(out, "\r{}", noise.apply(&glitched, caps.color))?;
        out.flush()?;
        if !pacer.pause(cfg.glitch.frame_delay) {
            break;
        }
    }

    ansi::clear_line(out)?;
    writeln!(out, "{settled}")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use card_term::style::ColorDepth;
    use card_term::terminal::Size;
    use card_term::text::strip_ansi;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn threshold_one_never_glitches() {
        let cfg = GlitchConfig {
            threshold: 1.0,
            ..GlitchConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(glitch_frame("stay calm", &cfg, &mut rng), "stay calm");
    }

    #[test]
    fn threshold_below_zero_always_glitches() {
        let cfg = GlitchConfig {
            threshold: -1.0,
            ..GlitchConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(2);
        let out = glitch_frame("abcdef", &cfg, &mut rng);
        assert_eq!(out.chars().count(), 6);
        assert!(out.chars().all(|c| cfg.chars.contains(&c)));
    }

    #[test]
    fn glitched_text_keeps_length() {
        let mut rng = StdRng::seed_from_u64(3);
        let out = glitch_frame("Thanks for stopping by", &GlitchConfig::default(), &mut rng);
        assert_eq!(out.chars().count(), 22);
    }

    #[test]
    fn plain_prints_settled_text() {
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(4);
        glitch_effect(&mut out, &Capabilities::plain(), "bye", &AnimationConfig::instant(), &mut rng)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "bye\n");
    }

    #[test]
    fn static_colour_terminal_prints_plain_text() {
        let caps = Capabilities {
            tty: true,
            color: ColorDepth::TrueColor,
            hyperlinks: true,
            animations: false,
            size: Size::FALLBACK,
        };
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(6);
        glitch_effect(&mut out, &caps, "bye", &AnimationConfig::instant(), &mut rng).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "bye\n");
    }

    #[test]
    fn animated_runs_every_iteration() {
        let caps = Capabilities {
            tty: false,
            color: ColorDepth::Ansi256,
            hyperlinks: true,
            animations: true,
            size: Size::FALLBACK,
        };
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(5);
        let cfg = AnimationConfig::instant();
        glitch_effect(&mut out, &caps, "bye", &cfg, &mut rng).unwrap();
        let s = String::from_utf8(out).unwrap();
        // One CR per iteration plus the one in the final line clear.
        let iterations = usize::try_from(cfg.glitch.iterations).unwrap();
        assert_eq!(s.matches('\r').count(), iterations + 1);
        let last = s.rsplit("\r\x1b[2K").next().unwrap();
        assert_eq!(strip_ansi(last), "bye\n");
    }
}
