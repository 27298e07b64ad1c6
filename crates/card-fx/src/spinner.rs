//! Braille "dots" spinner and the loading steps shown before the card.

use std::io::{self, Write};

use card_term::ansi;
use card_term::style::Style;
use card_term::terminal::{Capabilities, CursorGuard};
use card_theme::palette;

use crate::config::AnimationConfig;
use crate::pacer::Pacer;

/// Frames of the dots spinner.
pub const DOTS: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Mark shown once a step completes.
pub const CHECK: &str = "✔";

/// Spin through each step for the spinner delay, replacing it with a
/// check mark when done. Writes nothing when animations are off.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn loading_sequence<W: Write>(
    out: &mut W,
    caps: &Capabilities,
    steps: &[&str],
    cfg: &AnimationConfig,
) -> io::Result<()> {
    if !caps.animations || steps.is_empty() {
        return Ok(());
    }

    let spin = Style::fg(palette::CYAN);
    let done = Style::fg(palette::GREEN_BRIGHT);

    let mut guard = CursorGuard::arm(caps.tty);
    ansi::cursor_hide(out)?;

    'steps: for step in steps {
        let pacer = Pacer::new(cfg.loading.spinner_delay);
        for frame in DOTS.iter().cycle() {
            write!(out, "\r{} {step}", spin.paint(frame, caps.color))?;
            out.flush()?;
            if !pacer.pause(cfg.loading.frame_delay) {
                break 'steps;
            }
            if !pacer.running() {
                break;
            }
        }
        ansi::clear_line(out)?;
        writeln!(out, "{} {step}", done.paint(CHECK, caps.color))?;
    }

    ansi::clear_line(out)?;
    guard.restore(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use card_term::style::ColorDepth;
    use card_term::terminal::Size;
    use card_term::text::strip_ansi;

    #[test]
    fn frames_are_single_cells() {
        use unicode_width::UnicodeWidthStr;
        assert!(DOTS.iter().all(|f| f.width() == 1));
    }

    #[test]
    fn silent_without_animations() {
        let mut out = Vec::new();
        loading_sequence(&mut out, &Capabilities::plain(), &["Loading"], &AnimationConfig::instant())
            .unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn every_step_is_checked_off() {
        let caps = Capabilities {
            tty: false,
            color: ColorDepth::None,
            hyperlinks: false,
            animations: true,
            size: Size::FALLBACK,
        };
        let mut out = Vec::new();
        let steps = ["Initializing", "Loading profile"];
        loading_sequence(&mut out, &caps, &steps, &AnimationConfig::instant()).unwrap();

        let s = strip_ansi(&String::from_utf8(out).unwrap());
        assert!(s.contains("✔ Initializing\n"));
        assert!(s.contains("✔ Loading profile\n"));
        assert!(s.starts_with("\r⠋ Initializing"));
    }
}
