// SPDX-License-Identifier: MIT
//
// Clickable links (OSC 8).
//
// A URL ends up inside an escape sequence, so anything that could end that
// sequence early or inject another one must never reach the terminal. Only
// http(s) URLs are linked; control characters are stripped; everything
// else degrades to the plain label.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::ansi;

/// Schemes allowed inside a hyperlink.
pub const ALLOWED_SCHEMES: [&str; 2] = ["http", "https"];

static CONTROL_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x00-\x1F\x7F]")
        .unwrap_or_else(|e| unreachable!("control-char pattern is a constant: {e}"))
});

/// Whether `url` parses and uses an allowed scheme.
#[must_use]
pub fn is_linkable(url: &str) -> bool {
    Url::parse(url).is_ok_and(|u| ALLOWED_SCHEMES.contains(&u.scheme()))
}

/// Remove ASCII control characters (0x00–0x1F, 0x7F).
#[must_use]
pub fn sanitize(url: &str) -> String {
    CONTROL_CHARS.replace_all(url, "").into_owned()
}

/// Wrap `text` in an OSC 8 hyperlink to `url`.
///
/// Returns `text` unchanged when `enabled` is false, when the URL does not
/// parse, or when its scheme is not http/https.
#[must_use]
pub fn terminal_link(text: &str, url: &str, enabled: bool) -> String {
    if !enabled {
        return text.to_owned();
    }
    if !is_linkable(url) {
        tracing::debug!(url, "refusing to hyperlink");
        return text.to_owned();
    }

    let mut out = Vec::with_capacity(text.len() + url.len() + 16);
    // Writing into a Vec cannot fail.
    let _ = ansi::hyperlink_open(&mut out, &sanitize(url));
    out.extend_from_slice(text.as_bytes());
    let _ = ansi::hyperlink_close(&mut out);
    String::from_utf8(out).unwrap_or_else(|_| text.to_owned())
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn https_link_is_wrapped() {
        assert_eq!(
            terminal_link("site", "https://dave.io", true),
            "\x1b]8;;https://dave.io\x07site\x1b]8;;\x07"
        );
    }

    #[test]
    fn http_is_allowed() {
        assert!(is_linkable("http://example.com"));
    }

    #[test]
    fn disabled_returns_text() {
        assert_eq!(terminal_link("site", "https://dave.io", false), "site");
    }

    #[test]
    fn other_schemes_are_refused() {
        assert_eq!(terminal_link("x", "javascript:alert(1)", true), "x");
        assert_eq!(terminal_link("x", "file:///etc/passwd", true), "x");
        assert_eq!(terminal_link("x", "mailto:dave@dave.io", true), "x");
    }

    #[test]
    fn unparseable_url_returns_text() {
        assert_eq!(terminal_link("x", "not a url", true), "x");
        assert_eq!(terminal_link("x", "", true), "x");
    }

    #[test]
    fn control_characters_are_stripped() {
        assert_eq!(sanitize("https://dave.io/\x07\x1b]evil\x7f"), "https://dave.io/]evil");
    }

    #[test]
    fn link_never_contains_raw_bel_inside_url() {
        // The url crate percent-encodes or rejects most control bytes already;
        // whatever survives parsing must not carry a BEL into the sequence.
        let out = terminal_link("t", "https://dave.io/a\tb", true);
        let url_part = out
            .strip_prefix("\x1b]8;;")
            .and_then(|s| s.split('\x07').next())
            .unwrap();
        assert!(!url_part.chars().any(|c| c.is_ascii_control()));
    }
}
