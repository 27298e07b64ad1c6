//! ANSI Shadow block font.
//!
//! Six rows per glyph, drawn with full blocks and box-drawing shadows:
//!
//! ```text
//! ██████╗  █████╗ ██╗   ██╗███████╗
//! ██╔══██╗██╔══██╗██║   ██║██╔════╝
//! ██║  ██║███████║██║   ██║█████╗
//! ██║  ██║██╔══██║╚██╗ ██╔╝██╔══╝
//! ██████╔╝██║  ██║ ╚████╔╝ ███████╗
//! ╚═════╝ ╚═╝  ╚═╝  ╚═══╝  ╚══════╝
//! ```
//!
//! Covers A–Z (case-insensitive), 0–9, space, and `. - ! ? ' /`. Glyphs sit
//! side by side with no kerning. [`render`] word-wraps to a maximum width
//! so a long name becomes two stacked banners instead of a garbled one.

use unicode_width::UnicodeWidthStr;

/// Rows per glyph.
pub const HEIGHT: usize = 6;

/// One glyph: `HEIGHT` rows of equal display width.
pub type Glyph = [&'static str; HEIGHT];

const SPACE: Glyph = ["   "; HEIGHT];

/// Look up the glyph for `c`. Lower-case letters map to upper-case.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn glyph(c: char) -> Option<&'static Glyph> {
    Some(match c.to_ascii_uppercase() {
        ' ' => &SPACE,
        'A' => &[" █████╗ ", "██╔══██╗", "███████║", "██╔══██║", "██║  ██║", "╚═╝  ╚═╝"],
        'B' => &["██████╗ ", "██╔══██╗", "██████╔╝", "██╔══██╗", "██████╔╝", "╚═════╝ "],
        'C' => &[" ██████╗", "██╔════╝", "██║     ", "██║     ", "╚██████╗", " ╚═════╝"],
        'D' => &["██████╗ ", "██╔══██╗", "██║  ██║", "██║  ██║", "██████╔╝", "╚═════╝ "],
        'E' => &["███████╗", "██╔════╝", "█████╗  ", "██╔══╝  ", "███████╗", "╚══════╝"],
        'F' => &["███████╗", "██╔════╝", "█████╗  ", "██╔══╝  ", "██║     ", "╚═╝     "],
        'G' => &[" ██████╗ ", "██╔════╝ ", "██║  ███╗", "██║   ██║", "╚██████╔╝", " ╚═════╝ "],
        'H' => &["██╗  ██╗", "██║  ██║", "███████║", "██╔══██║", "██║  ██║", "╚═╝  ╚═╝"],
        'I' => &["██╗", "██║", "██║", "██║", "██║", "╚═╝"],
        'J' => &["     ██╗", "     ██║", "     ██║", "██   ██║", "╚█████╔╝", " ╚════╝ "],
        'K' => &["██╗  ██╗", "██║ ██╔╝", "█████╔╝ ", "██╔═██╗ ", "██║  ██╗", "╚═╝  ╚═╝"],
        'L' => &["██╗     ", "██║     ", "██║     ", "██║     ", "███████╗", "╚══════╝"],
        'M' => &["███╗   ███╗", "████╗ ████║", "██╔████╔██║", "██║╚██╔╝██║", "██║ ╚═╝ ██║", "╚═╝     ╚═╝"],
        'N' => &["███╗   ██╗", "████╗  ██║", "██╔██╗ ██║", "██║╚██╗██║", "██║ ╚████║", "╚═╝  ╚═══╝"],
        'O' => &[" ██████╗ ", "██╔═══██╗", "██║   ██║", "██║   ██║", "╚██████╔╝", " ╚═════╝ "],
        'P' => &["██████╗ ", "██╔══██╗", "██████╔╝", "██╔═══╝ ", "██║     ", "╚═╝     "],
        'Q' => &[" ██████╗ ", "██╔═══██╗", "██║   ██║", "██║▄▄ ██║", "╚██████╔╝", " ╚══▀▀═╝ "],
        'R' => &["██████╗ ", "██╔══██╗", "██████╔╝", "██╔══██╗", "██║  ██║", "╚═╝  ╚═╝"],
        'S' => &["███████╗", "██╔════╝", "███████╗", "╚════██║", "███████║", "╚══════╝"],
        'T' => &["████████╗", "╚══██╔══╝", "   ██║   ", "   ██║   ", "   ██║   ", "   ╚═╝   "],
        'U' => &["██╗   ██╗", "██║   ██║", "██║   ██║", "██║   ██║", "╚██████╔╝", " ╚═════╝ "],
        'V' => &["██╗   ██╗", "██║   ██║", "██║   ██║", "╚██╗ ██╔╝", " ╚████╔╝ ", "  ╚═══╝  "],
        'W' => &["██╗    ██╗", "██║    ██║", "██║ █╗ ██║", "██║███╗██║", "╚███╔███╔╝", " ╚══╝╚══╝ "],
        'X' => &["██╗  ██╗", "╚██╗██╔╝", " ╚███╔╝ ", " ██╔██╗ ", "██╔╝ ██╗", "╚═╝  ╚═╝"],
        'Y' => &["██╗   ██╗", "╚██╗ ██╔╝", " ╚████╔╝ ", "  ╚██╔╝  ", "   ██║   ", "   ╚═╝   "],
        'Z' => &["███████╗", "╚══███╔╝", "  ███╔╝ ", " ███╔╝  ", "███████╗", "╚══════╝"],
        '0' => &[" ██████╗ ", "██╔═████╗", "██║██╔██║", "████╔╝██║", "╚██████╔╝", " ╚═════╝ "],
        '1' => &[" ██╗", "███║", "╚██║", " ██║", " ██║", " ╚═╝"],
        '2' => &["██████╗ ", "╚════██╗", " █████╔╝", "██╔═══╝ ", "███████╗", "╚══════╝"],
        '3' => &["██████╗ ", "╚════██╗", " █████╔╝", " ╚═══██╗", "██████╔╝", "╚═════╝ "],
        '4' => &["██╗  ██╗", "██║  ██║", "███████║", "╚════██║", "     ██║", "     ╚═╝"],
        '5' => &["███████╗", "██╔════╝", "███████╗", "╚════██║", "███████║", "╚══════╝"],
        '6' => &[" ██████╗ ", "██╔════╝ ", "███████╗ ", "██╔═══██╗", "╚██████╔╝", " ╚═════╝ "],
        '7' => &["███████╗", "╚════██║", "    ██╔╝", "   ██╔╝ ", "   ██║  ", "   ╚═╝  "],
        '8' => &[" █████╗ ", "██╔══██╗", "╚█████╔╝", "██╔══██╗", "╚█████╔╝", " ╚════╝ "],
        '9' => &[" █████╗ ", "██╔══██╗", "╚██████║", " ╚═══██║", " █████╔╝", " ╚════╝ "],
        '.' => &["   ", "   ", "   ", "   ", "██╗", "╚═╝"],
        '-' => &["      ", "      ", "█████╗", "╚════╝", "      ", "      "],
        '!' => &["██╗", "██║", "██║", "╚═╝", "██╗", "╚═╝"],
        '?' => &["██████╗ ", "╚════██╗", "  ▄███╔╝", "  ▀▀══╝ ", "  ██╗   ", "  ╚═╝   "],
        '\'' => &["██╗", "╚═╝", "   ", "   ", "   ", "   "],
        '/' => &["    ██╗", "   ██╔╝", "  ██╔╝ ", " ██╔╝  ", "██╔╝   ", "╚═╝    "],
        _ => return None,
    })
}

/// Display width of a glyph.
#[inline]
#[must_use]
pub fn glyph_width(g: &Glyph) -> usize {
    g[0].width()
}

fn run_width(glyphs: &[&Glyph]) -> usize {
    glyphs.iter().map(|g| glyph_width(g)).sum()
}

/// Render `text` as block letters no wider than `max_width` where possible.
///
/// Words that do not fit on the current line move to the next; a word wider
/// than `max_width` on its own is split between glyphs. Characters without
/// a glyph are skipped. Trailing spaces are trimmed from every row.
/// Returns an empty string when nothing renders.
#[must_use]
pub fn render(text: &str, max_width: usize) -> String {
    let words: Vec<Vec<&Glyph>> = text
        .split_whitespace()
        .map(|w| w.chars().filter_map(glyph).collect::<Vec<_>>())
        .filter(|w| !w.is_empty())
        .collect();

    let mut lines: Vec<Vec<&Glyph>> = Vec::new();
    let mut current: Vec<&Glyph> = Vec::new();
    let mut width = 0;
    let space = glyph_width(&SPACE);

    for word in words {
        let word_width = run_width(&word);
        let needed = if current.is_empty() {
            word_width
        } else {
            width + space + word_width
        };

        if needed <= max_width {
            if !current.is_empty() {
                current.push(&SPACE);
            }
            current.extend(word);
            width = needed;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            width = 0;
        }

        if word_width <= max_width {
            current = word;
            width = word_width;
            continue;
        }

        for g in word {
            let gw = glyph_width(g);
            if !current.is_empty() && width + gw > max_width {
                lines.push(std::mem::take(&mut current));
                width = 0;
            }
            current.push(g);
            width += gw;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    let mut rows = Vec::with_capacity(lines.len() * HEIGHT);
    for line in &lines {
        for r in 0..HEIGHT {
            let row: String = line.iter().map(|g| g[r]).collect();
            rows.push(row.trim_end().to_owned());
        }
    }
    rows.join("\n")
}

/// [`render`], or `text` itself when no character has a glyph.
#[must_use]
pub fn render_or_plain(text: &str, max_width: usize) -> String {
    let art = render(text, max_width);
    if art.trim().is_empty() {
        text.to_owned()
    } else {
        art
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_glyph_is_rectangular() {
        let chars = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789 .-!?'/";
        for c in chars.chars() {
            let g = glyph(c).unwrap_or_else(|| panic!("missing {c:?}"));
            let w = glyph_width(g);
            assert!(w > 0);
            for row in g {
                assert_eq!(row.width(), w, "glyph {c:?} row {row:?}");
            }
        }
    }

    #[test]
    fn lower_case_maps_to_upper() {
        assert_eq!(glyph('d'), glyph('D'));
    }

    #[test]
    fn unknown_has_no_glyph() {
        assert!(glyph('@').is_none());
        assert!(glyph('é').is_none());
    }

    #[test]
    fn single_word() {
        let art = render("Dave", 80);
        let rows: Vec<&str> = art.lines().collect();
        assert_eq!(rows.len(), HEIGHT);
        assert_eq!(rows[0], "██████╗  █████╗ ██╗   ██╗███████╗");
        assert_eq!(rows[5], "╚═════╝ ╚═╝  ╚═╝  ╚═══╝  ╚══════╝");
    }

    #[test]
    fn full_name_wraps_at_eighty() {
        let art = render("Dave Williams", 80);
        assert_eq!(art.lines().count(), 2 * HEIGHT);
        assert!(art.lines().all(|r| r.width() <= 80));
        assert!(art.contains('█'));
    }

    #[test]
    fn full_name_fits_when_wide() {
        assert_eq!(render("Dave Williams", 200).lines().count(), HEIGHT);
    }

    #[test]
    fn long_word_is_split() {
        let art = render("WILLIAMS", 20);
        assert!(art.lines().count() > HEIGHT);
        assert!(art.lines().all(|r| r.width() <= 20));
    }

    #[test]
    fn unknown_characters_are_skipped() {
        assert_eq!(render("D@VE", 80), render("DVE", 80));
    }

    #[test]
    fn empty_and_unrenderable() {
        assert_eq!(render("", 80), "");
        assert_eq!(render("   ", 80), "");
        assert_eq!(render_or_plain("@@@", 80), "@@@");
        assert!(render_or_plain("hi", 80).contains('█'));
    }

    #[test]
    fn narrow_width_still_renders_each_glyph() {
        let art = render("MM", 1);
        assert_eq!(art.lines().count(), 2 * HEIGHT);
    }
}
