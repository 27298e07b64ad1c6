// SPDX-License-Identifier: MIT
//
// The minimal card: what gets printed when the full one cannot be.
//
//   Dave Williams (v0.1.0)
//   ----------------------
//   Website https://dave.io
//   GitHub https://dave.io/go/github
//   ...
//
// Plain text only. No colour, links, or width assumptions, so it works
// wherever the full card failed.

use std::io::{self, Write};

use crate::profile::{NAME, SOCIAL_LINKS};

/// The minimal card for `version`, newline-terminated.
#[must_use]
pub fn minimal_card(version: &str) -> String {
    let intro = format!("{NAME} (v{version})");
    let rule = "-".repeat(intro.chars().count());

    let mut out = format!("{intro}\n{rule}\n");
    for link in &SOCIAL_LINKS {
        out.push_str(link.name);
        out.push(' ');
        out.push_str(link.url);
        out.push('\n');
    }
    out
}

/// Write [`minimal_card`] to `out` and flush.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn print(out: &mut impl Write, version: &str) -> io::Result<()> {
    out.write_all(minimal_card(version).as_bytes())?;
    out.flush()
}
