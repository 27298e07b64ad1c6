// SPDX-License-Identifier: MIT
//
// Measuring and cutting styled text.
//
// Everything the card lays out (table cells, separators, titles) already
// carries SGR colour codes and OSC 8 hyperlinks. Those bytes occupy no
// columns, so width has to be measured on the visible text only, and
// truncation has to cut visible graphemes while keeping every escape
// sequence: dropping a reset or a hyperlink close would bleed style into
// the rest of the terminal.

use std::sync::LazyLock;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// The character appended to truncated text.
pub const ELLIPSIS: char = '…';

/// CSI sequences (SGR, cursor movement) and OSC sequences terminated by
/// BEL or ST.
static ANSI_SEQUENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1b\[[0-9;:?<>=]*[ -/]*[@-~]|\x1b\][^\x07\x1b]*(?:\x07|\x1b\\)")
        .unwrap_or_else(|e| unreachable!("ANSI pattern is a constant: {e}"))
});

/// Remove every escape sequence, leaving only the visible text.
#[must_use]
pub fn strip_ansi(s: &str) -> String {
    ANSI_SEQUENCE.replace_all(s, "").into_owned()
}

/// Columns occupied by the visible part of `s`.
#[must_use]
pub fn display_width(s: &str) -> usize {
    if s.contains('\x1b') {
        strip_ansi(s).width()
    } else {
        s.width()
    }
}

/// Cut `s` to at most `width` columns, ending with [`ELLIPSIS`] when
/// anything was removed.
///
/// Escape sequences are all kept, including those after the cut point, so
/// resets and hyperlink closes still take effect.
#[must_use]
pub fn truncate(s: &str, width: usize) -> String {
    if display_width(s) <= width {
        return s.to_owned();
    }
    if width == 0 {
        return escapes_only(s);
    }

    let mut cutter = Cutter {
        budget: width - 1,
        used: 0,
        cut: false,
        out: String::with_capacity(s.len() + ELLIPSIS.len_utf8()),
        ellipsis_at: 0,
    };

    let mut last = 0;
    for m in ANSI_SEQUENCE.find_iter(s) {
        cutter.visible(&s[last..m.start()]);
        cutter.escape(m.as_str());
        last = m.end();
    }
    cutter.visible(&s[last..]);

    let Cutter {
        mut out,
        ellipsis_at,
        ..
    } = cutter;
    out.insert(ellipsis_at, ELLIPSIS);
    out
}

/// Accumulates a truncated copy of styled text.
///
/// `ellipsis_at` trails everything written before the cut, so the ellipsis
/// lands after the last kept grapheme and inherits its style, while escapes
/// seen after the cut still follow it.
struct Cutter {
    budget: usize,
    used: usize,
    cut: bool,
    out: String,
    ellipsis_at: usize,
}

impl Cutter {
    fn visible(&mut self, run: &str) {
        if self.cut {
            return;
        }
        for g in run.graphemes(true) {
            let w = g.width();
            if self.used + w > self.budget {
                self.cut = true;
                return;
            }
            self.used += w;
            self.out.push_str(g);
            self.ellipsis_at = self.out.len();
        }
    }

    fn escape(&mut self, seq: &str) {
        self.out.push_str(seq);
        if !self.cut {
            self.ellipsis_at = self.out.len();
        }
    }
}

fn escapes_only(s: &str) -> String {
    ANSI_SEQUENCE.find_iter(s).map(|m| m.as_str()).collect()
}

/// Pad `s` with spaces on the right to `width` visible columns. Text that
/// is already wider is returned unchanged.
#[must_use]
pub fn pad_right(s: &str, width: usize) -> String {
    let w = display_width(s);
    if w >= width {
        return s.to_owned();
    }
    let mut out = String::with_capacity(s.len() + width - w);
    out.push_str(s);
    out.extend(std::iter::repeat_n(' ', width - w));
    out
}

// ─── Tests ───────────────────────────────────────────────────────────────────
