// SPDX-License-Identifier: MIT
//
// Ctrl-C during the animations. The interrupt flag is process-wide, so this
// file holds a single test and runs as its own binary.

use card_fx::AnimationConfig;
use card_term::terminal::{self, Size};
use card_term::{Capabilities, ColorDepth};
use dave_io::profile::FOOTER;
use dave_io::{Card, CardError};
use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn ctrl_c_stops_the_card_and_shows_the_cursor() {
    let caps = Capabilities {
        tty: false,
        color: ColorDepth::TrueColor,
        hyperlinks: true,
        animations: true,
        size: Size { cols: 20, rows: 5 },
    };
    terminal::raise_interrupt();

    let mut out = Vec::new();
    let err = Card::new(caps, AnimationConfig::instant())
        .render(&mut out, &mut StdRng::seed_from_u64(3))
        .unwrap_err();

    assert!(matches!(err, CardError::Interrupted), "{err:?}");
    assert_eq!(err.exit_code(), 130);

    let s = String::from_utf8(out).unwrap();
    assert!(s.starts_with("\x1b[?25l"));
    assert!(s.ends_with("\x1b[0m\x1b[?25h"));
    assert!(!s.contains(FOOTER));
}
