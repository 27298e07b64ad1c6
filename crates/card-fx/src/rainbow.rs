//! Rainbow text whose hues drift a little every frame.

use std::io::{self, Write};

use card_term::ansi;
use card_term::style::ColorDepth;
use card_term::terminal::Capabilities;
use card_theme::gradient;
use unicode_segmentation::UnicodeSegmentation;

use crate::config::AnimationConfig;
use crate::pacer::Pacer;

/// How far round the wheel the colours move per frame.
const FRAME_SHIFT: f32 = 0.08;

/// `text` with each visible grapheme coloured from the rainbow, rotated by
/// `frame` steps. Frame 0 is the plain rainbow gradient.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn rainbow_frame(text: &str, frame: u32, depth: ColorDepth) -> String {
    if !depth.is_enabled() {
        return text.to_owned();
    }
    let wheel = gradient::rainbow();
    let visible = text.graphemes(true).filter(|g| !g.trim().is_empty()).count();
    let offset = frame as f32 * FRAME_SHIFT;

    let mut out = Vec::with_capacity(text.len() * 20);
    let mut i = 0usize;
    for g in text.graphemes(true) {
        if !g.trim().is_empty() {
            let t = (i as f32 / visible.max(1) as f32 + offset).fract();
            let _ = ansi::fg(&mut out, depth.adapt(wheel.color_at(t).to_cell_color()));
            i += 1;
        }
        out.extend_from_slice(g.as_bytes());
    }
    if i > 0 {
        let _ = ansi::reset(&mut out);
    }
    String::from_utf8(out).unwrap_or_else(|_| text.to_owned())
}

/// Cycle the rainbow over `text` for the configured iterations, then leave
/// the first frame on its own line.
///
/// Without animation support the text is printed as-is.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn rainbow_animation<W: Write>(
    out: &mut W,
    caps: &Capabilities,
    text: &str,
    cfg: &AnimationConfig,
) -> io::Result<()> {
    if !caps.animations {
        return writeln!(out, "{text}");
    }
    let settled = rainbow_frame(text, 0, caps.color);

    let pacer = Pacer::unbounded();
    for frame in 0..cfg.final_animation.iterations {
        write!(out, "\r{}", rainbow_frame(text, frame, caps.color))?;
        out.flush()?;
        if !pacer.pause(cfg.final_animation.frame_delay) {
            break;
        }
    }

    ansi::clear_line(out)?;
    writeln!(out, "{settled}")?;
    out.flush()
}
