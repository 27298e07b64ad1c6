//! Particle tagline: a dot runs along a track either side of the text.

use std::io::{self, Write};

use card_term::ansi;
use card_term::terminal::Capabilities;
use card_theme::gradient;

use crate::config::AnimationConfig;
use crate::pacer::Pacer;

/// One frame: `<particles> <text> <particles>` on the current line.
#[must_use]
pub fn particle_frame(particles: &str, styled_text: &str) -> String {
    format!("\r{particles} {styled_text} {particles}")
}

/// Animate `text` between particle tracks for the configured duration, then
/// leave it on its own line in the vice gradient.
///
/// Without animation support the text is printed as-is.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn particle_effect<W: Write>(
    out: &mut W,
    caps: &Capabilities,
    text: &str,
    cfg: &AnimationConfig,
) -> io::Result<()> {
    let frames = &cfg.particle.frames;
    if !caps.animations || frames.is_empty() {
        return writeln!(out, "{text}");
    }

    let styled = gradient::vice().apply(text, caps.color);

    let pacer = Pacer::new(cfg.particle.duration);
    for particles in frames.iter().cycle() {
        out.write_all(particle_frame(particles, &styled).as_bytes())?;
        out.flush()?;
        if !pacer.pause(cfg.particle.frame_delay) || !pacer.running() {
            break;
        }
    }

    ansi::clear_line(out)?;
    writeln!(out, "{styled}")?;
    out.flush()
}
