// SPDX-License-Identifier: MIT
//
// Terminal queries, capabilities, and cleanup.
//
// Safety: this module uses `unsafe` for ioctl (TIOCGWINSZ), isatty,
// sigaction, and raw fd writes. These are the POSIX interfaces for the job
// and each unsafe block is minimal.
#![allow(unsafe_code)]
//
// The card runs in three very different places: an interactive terminal,
// a pipe (`dave-io | less`), and a test harness. `Capabilities` captures
// which of colour, hyperlinks, and animation are appropriate, once, so
// every renderer downstream just asks instead of probing the environment.
//
// Animations hide the cursor. If anything goes wrong mid-animation (a
// panic, an early return, Ctrl-C) the cursor must come back. Three layers
// cover that: `CursorGuard` restores on drop, a panic hook writes the
// restore sequence straight to fd 1, and a SIGINT handler turns Ctrl-C into
// a flag the animation loops poll, so they unwind through the guard instead
// of being killed with the cursor still hidden.

use std::io::{self, Write};
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::ansi;
use crate::style::ColorDepth;

// ─── Size ───────────────────────────────────────────────────────────────────

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    /// Columns.
    pub cols: u16,
    /// Rows.
    pub rows: u16,
}

impl Size {
    /// Size assumed when the terminal cannot be queried.
    pub const FALLBACK: Self = Self { cols: 80, rows: 24 };

    /// Total number of cells.
    #[inline]
    #[must_use]
    pub const fn area(self) -> u32 {
        self.cols as u32 * self.rows as u32
    }

    /// Clamp both dimensions to a maximum.
    #[inline]
    #[must_use]
    pub fn clamp_to(self, max_cols: u16, max_rows: u16) -> Self {
        Self {
            cols: self.cols.min(max_cols),
            rows: self.rows.min(max_rows),
        }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::FALLBACK
    }
}

// ─── Terminal Queries ───────────────────────────────────────────────────────

/// Query the size of the terminal attached to stdout.
///
/// Returns `None` if stdout is not a terminal or the query fails.
#[cfg(unix)]
#[must_use]
pub fn get_size() -> Option<Size> {
    let mut ws: libc::winsize = unsafe { std::mem::zeroed() };
    let result = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut ws) };

    if result == 0 && ws.ws_col > 0 && ws.ws_row > 0 {
        Some(Size {
            cols: ws.ws_col,
            rows: ws.ws_row,
        })
    } else {
        None
    }
}

#[cfg(not(unix))]
#[must_use]
pub fn get_size() -> Option<Size> {
    None
}

/// Whether stdout is connected to a terminal.
#[cfg(unix)]
#[must_use]
pub fn is_tty() -> bool {
    unsafe { libc::isatty(libc::STDOUT_FILENO) != 0 }
}

#[cfg(not(unix))]
#[must_use]
pub fn is_tty() -> bool {
    use std::io::IsTerminal;
    io::stdout().is_terminal()
}

// ─── Capabilities ───────────────────────────────────────────────────────────

/// User-requested restrictions, usually from CLI flags or `NO_COLOR` /
/// `NO_ANIMATIONS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Overrides {
    /// Disable colour and hyperlinks.
    pub no_color: bool,
    /// Disable animations (static output only).
    pub no_animations: bool,
}

/// What the output terminal can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// stdout is a terminal.
    pub tty: bool,
    /// Colour depth to render at; `None` when unsupported or disabled.
    pub color: ColorDepth,
    /// Emit OSC 8 hyperlinks.
    pub hyperlinks: bool,
    /// Run animations (cursor movement, timed frames).
    pub animations: bool,
    /// Terminal size, or [`Size::FALLBACK`].
    pub size: Size,
}

impl Capabilities {
    /// Probe stdout and the environment.
    #[must_use]
    pub fn detect(overrides: Overrides) -> Self {
        let colorterm = std::env::var("COLORTERM").ok();
        let term = std::env::var("TERM").ok();
        let caps = Self::resolve(
            is_tty(),
            get_size(),
            colorterm.as_deref(),
            term.as_deref(),
            overrides,
        );
        tracing::debug!(?caps, "terminal capabilities");
        caps
    }

    /// Combine raw facts into capabilities.
    ///
    /// The terminal counts as supported when stdout is a TTY and colour is
    /// neither disabled nor impossible (`TERM=dumb`). Hyperlinks follow
    /// support; animations additionally honour `no_animations`.
    #[must_use]
    pub fn resolve(
        tty: bool,
        size: Option<Size>,
        colorterm: Option<&str>,
        term: Option<&str>,
        overrides: Overrides,
    ) -> Self {
        let color = if tty && !overrides.no_color {
            ColorDepth::from_env_values(colorterm, term)
        } else {
            ColorDepth::None
        };
        let supported = tty && color.is_enabled();

        Self {
            tty,
            color,
            hyperlinks: supported,
            animations: supported && !overrides.no_animations,
            size: size.unwrap_or(Size::FALLBACK),
        }
    }

    /// The profile for pipes and tests: no colour, links, or animation.
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            tty: false,
            color: ColorDepth::None,
            hyperlinks: false,
            animations: false,
            size: Size::FALLBACK,
        }
    }
}

// ─── Interrupts ─────────────────────────────────────────────────────────────

/// Set by the SIGINT handler, polled by animation loops.
static INTERRUPTED: AtomicBool = AtomicBool::new(false);

static SIGINT_INSTALLED: Once = Once::new();

/// Route Ctrl-C into [`interrupted`] instead of killing the process.
///
/// Only install this when something polls the flag; otherwise Ctrl-C would
/// appear to do nothing.
#[cfg(unix)]
pub fn install_interrupt_handler() {
    SIGINT_INSTALLED.call_once(|| unsafe {
        let mut sa: libc::sigaction = std::mem::zeroed();
        sa.sa_sigaction = sigint_handler as *const () as usize;
        sa.sa_flags = libc::SA_RESTART;
        libc::sigemptyset(&raw mut sa.sa_mask);
        libc::sigaction(libc::SIGINT, &raw const sa, std::ptr::null_mut());
    });
}

#[cfg(not(unix))]
pub fn install_interrupt_handler() {
    SIGINT_INSTALLED.call_once(|| {});
}

#[cfg(unix)]
extern "C" fn sigint_handler(_sig: libc::c_int) {
    INTERRUPTED.store(true, Ordering::Relaxed);
}

/// Whether Ctrl-C has been pressed since the handler was installed.
#[inline]
#[must_use]
pub fn interrupted() -> bool {
    INTERRUPTED.load(Ordering::Relaxed)
}

/// Set the flag as the SIGINT handler would. The flag is process-wide and
/// never cleared, so only call this from a test binary of its own.
#[doc(hidden)]
pub fn raise_interrupt() {
    INTERRUPTED.store(true, Ordering::Relaxed);
}

// ─── Cursor Restore ─────────────────────────────────────────────────────────

/// Reset SGR and show the cursor.
const RESTORE: &[u8] = b"\x1b[0m\x1b[?25h";

static PANIC_HOOK_INSTALLED: Once = Once::new();

fn install_panic_hook() {
    PANIC_HOOK_INSTALLED.call_once(|| {
        let original = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            emergency_restore();
            original(info);
        }));
    });
}

/// Write [`RESTORE`] straight to fd 1, bypassing the stdout lock in case
/// the panic happened while it was held.
fn emergency_restore() {
    #[cfg(unix)]
    unsafe {
        let _ = libc::write(
            libc::STDOUT_FILENO,
            RESTORE.as_ptr().cast::<libc::c_void>(),
            RESTORE.len(),
        );
    }

    #[cfg(not(unix))]
    {
        let _ = io::stdout().write_all(RESTORE);
        let _ = io::stdout().flush();
    }
}

/// Keeps the cursor recoverable while an animation has it hidden.
///
/// The animation writes its own hide/show sequences to its writer; the
/// guard only acts if the animation never reaches its normal exit, which
/// ends with [`restore`](Self::restore).
///
/// ```no_run
/// use card_term::terminal::CursorGuard;
///
/// let mut out = std::io::stdout();
/// let mut guard = CursorGuard::arm(true);
/// // ... hide cursor, draw frames ...
/// guard.restore(&mut out)?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct CursorGuard {
    armed: bool,
}

impl CursorGuard {
    /// Arm the guard. With `active == false` it does nothing at all, which
    /// keeps non-terminal writers (buffers, pipes) free of stray escapes.
    #[must_use]
    pub fn arm(active: bool) -> Self {
        if active {
            install_panic_hook();
        }
        Self { armed: active }
    }

    /// Show the cursor now through `w` and disarm.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `w` fails.
    pub fn restore(&mut self, w: &mut impl Write) -> io::Result<()> {
        ansi::reset(w)?;
        ansi::cursor_show(w)?;
        w.flush()?;
        self.armed = false;
        Ok(())
    }
}

impl Drop for CursorGuard {
    fn drop(&mut self) {
        if self.armed {
            let mut stdout = io::stdout().lock();
            let _ = stdout.write_all(RESTORE);
            let _ = stdout.flush();
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
