//! Matrix rain.
//!
//! One drop per column. Each frame every drop's head is drawn in bright
//! green, the cell below it in green, and the rest of its trail in gray;
//! every lit cell gets a fresh random glyph. Drops start staggered above the
//! top edge, fall one row per frame, and once past the bottom wait for a
//! lucky roll before restarting at the top, so the rain thins out towards
//! the end of the animation instead of looping mechanically.

use std::io::{self, Write};
use std::time::Duration;

use card_term::ansi;
use card_term::color::CellColor;
use card_term::output::FrameBuffer;
use card_term::terminal::{Capabilities, CursorGuard};
use card_theme::palette;
use rand::Rng;

use crate::config::{AnimationConfig, MatrixConfig};
use crate::pacer::Pacer;

/// Head row of every column. Negative rows are above the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drops {
    heads: Vec<i32>,
}

impl Drops {
    /// One drop per column, each starting somewhere in the `height` rows
    /// above the screen.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn new<R: Rng + ?Sized>(width: usize, height: u16, rng: &mut R) -> Self {
        let h = f64::from(height);
        let heads = (0..width)
            .map(|_| (rng.random::<f64>() * -h).floor() as i32)
            .collect();
        Self { heads }
    }

    /// Drops at fixed rows.
    #[must_use]
    pub const fn from_heads(heads: Vec<i32>) -> Self {
        Self { heads }
    }

    /// Head rows, one per column.
    #[must_use]
    pub fn heads(&self) -> &[i32] {
        &self.heads
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.heads.len()
    }

    /// Move every drop down a row. A drop already past the bottom first
    /// restarts at the top when a roll beats `respawn_chance`.
    pub fn advance<R: Rng + ?Sized>(&mut self, height: u16, respawn_chance: f64, rng: &mut R) {
        let bottom = i32::from(height);
        for head in &mut self.heads {
            if *head >= bottom && rng.random::<f64>() > respawn_chance {
                *head = 0;
            }
            *head += 1;
        }
    }
}

/// Frame delay for a `width × height` area: doubled above the performance
/// threshold.
#[must_use]
pub fn adaptive_delay(width: usize, height: u16, cfg: &MatrixConfig) -> Duration {
    let cells = width.saturating_mul(usize::from(height));
    let threshold = usize::try_from(cfg.performance_threshold).unwrap_or(usize::MAX);
    if cells > threshold {
        cfg.frame_delay * 2
    } else {
        cfg.frame_delay
    }
}

/// Colour of row `y` for a drop whose head is at `head`, or `None` for an
/// empty cell.
fn cell_shade(y: i32, head: i32, trail: i32) -> Option<Shade> {
    let ahead = y - head;
    match ahead {
        0 => Some(Shade::Head),
        1 => Some(Shade::Body),
        d if d > 1 && d < trail => Some(Shade::Trail),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shade {
    Head,
    Body,
    Trail,
}

/// Append one frame to `fb`: cursor home, then `height` rows of
/// `drops.width()` cells separated by CR LF.
pub fn draw_frame<R: Rng + ?Sized>(
    fb: &mut FrameBuffer,
    drops: &Drops,
    height: u16,
    cfg: &MatrixConfig,
    rng: &mut R,
) {
    let head: CellColor = palette::GREEN_BRIGHT.into();
    let body: CellColor = palette::GREEN.into();
    let trail: CellColor = palette::GRAY.into();
    let trail_len = i32::from(cfg.trail_length);

    // Writing into a Vec cannot fail.
    let _ = ansi::cursor_home(fb);

    for y in 0..i32::from(height) {
        if y > 0 {
            fb.push_str("\r\n");
        }
        for &h in drops.heads() {
            let Some(shade) = cell_shade(y, h, trail_len) else {
                fb.push(' ');
                continue;
            };
            fb.set_fg(match shade {
                Shade::Head => head,
                Shade::Body => body,
                Shade::Trail => trail,
            });
            fb.push(random_glyph(&cfg.chars, rng));
        }
    }
    fb.reset_style();
}

fn random_glyph<R: Rng + ?Sized>(chars: &[char], rng: &mut R) -> char {
    if chars.is_empty() {
        return '0';
    }
    chars[rng.random_range(0..chars.len())]
}

/// Run the rain over the whole terminal for the configured duration.
///
/// Does nothing when animations are off. Bails out with a log line, before
/// touching the screen, when the area exceeds the memory limits.
///
/// # Errors
///
/// Returns an error if writing to `out` fails. The cursor is restored on
/// the way out regardless.
pub fn matrix_rain<W, R>(
    out: &mut W,
    caps: &Capabilities,
    cfg: &AnimationConfig,
    rng: &mut R,
) -> io::Result<()>
where
    W: Write,
    R: Rng + ?Sized,
{
    if !caps.animations {
        return Ok(());
    }

    let mcfg = &cfg.matrix;
    let size = caps.size.clamp_to(mcfg.max_width, mcfg.max_height);
    let width = usize::from(size.cols);
    let height = size.rows;

    if width > cfg.limits.max_drops {
        tracing::warn!(width, "terminal width exceeds memory limits, skipping animation");
        return Ok(());
    }
    let estimated = usize::try_from(size.area())
        .unwrap_or(usize::MAX)
        .saturating_mul(10);
    if estimated > cfg.limits.max_frame_buffer {
        tracing::debug!(estimated, "matrix frame too large, skipping animation");
        return Ok(());
    }

    let mut drops = Drops::new(width, height, rng);
    let delay = adaptive_delay(width, height, mcfg);
    tracing::debug!(width, height, ?delay, "matrix rain");

    let mut guard = CursorGuard::arm(caps.tty);
    ansi::cursor_hide(out)?;
    ansi::clear_screen(out)?;
    out.flush()?;

    let mut fb = FrameBuffer::new(caps.color);
    let pacer = Pacer::new(mcfg.duration);
    loop {
        draw_frame(&mut fb, &drops, height, mcfg, rng);
        fb.flush_to(out)?;
        drops.advance(height, mcfg.respawn_chance, rng);

        if !pacer.pause(delay) || !pacer.running() {
            break;
        }
    }

    ansi::clear_screen(out)?;
    guard.restore(out)
}
