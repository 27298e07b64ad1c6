// SPDX-License-Identifier: MIT
//
// Render the whole card into a buffer the way it appears when piped.

use card_fx::AnimationConfig;
use card_term::terminal::Size;
use card_term::text::strip_ansi;
use card_term::{Capabilities, ColorDepth};
use chrono::NaiveDate;
use dave_io::card::LOADING_STEPS;
use dave_io::profile::{FOOTER, QUICK_LINKS, ROLES, SIGN_OFF, SOCIAL_LINKS, TAGLINE};
use dave_io::{Card, fallback};
use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn render_plain() -> String {
    let card = Card::new(Capabilities::plain(), AnimationConfig::instant())
        .with_today(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
    let mut out = Vec::new();
    card.render(&mut out, &mut StdRng::seed_from_u64(7)).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn piped_card_has_no_escape_codes() {
    let out = render_plain();
    assert!(!out.contains('\x1b'), "escape code in piped output");
}

#[test]
fn piped_card_has_every_section() {
    let out = render_plain();

    assert!(out.contains('█'));
    assert!(out.contains(TAGLINE));
    for role in ROLES {
        assert!(out.contains(role), "{role}");
    }
    assert!(out.contains("19+ years of experience"));
    assert!(out.contains(&"─".repeat(94)));

    for link in &SOCIAL_LINKS {
        assert!(out.contains(link.name), "{}", link.name);
        assert!(out.contains(link.url), "{}", link.url);
    }
    assert!(out.contains("Quick Links"));
    for link in &QUICK_LINKS {
        assert!(out.contains(link.label), "{}", link.label);
        assert!(out.contains(link.description), "{}", link.description);
    }

    assert!(out.contains(SIGN_OFF));
    assert!(out.trim_end().ends_with(FOOTER));
}

#[test]
fn sections_appear_in_order() {
    let out = render_plain();
    let at = |needle: &str| out.find(needle).unwrap_or_else(|| panic!("missing {needle}"));

    let order = [
        at("█"),
        at(TAGLINE),
        at(ROLES[1]),
        at("https://dave.io/go/github"),
        at("Quick Links"),
        at(SIGN_OFF),
        at(FOOTER),
    ];
    let mut sorted = order;
    sorted.sort_unstable();
    assert_eq!(order, sorted);
}

#[test]
fn animated_card_runs_every_effect() {
    let caps = Capabilities {
        tty: false,
        color: ColorDepth::TrueColor,
        hyperlinks: true,
        animations: true,
        size: Size { cols: 40, rows: 10 },
    };
    let card = Card::new(caps, AnimationConfig::instant())
        .with_today(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
    let mut out = Vec::new();
    card.render(&mut out, &mut StdRng::seed_from_u64(11)).unwrap();
    let raw = String::from_utf8(out).unwrap();

    // Matrix rain hides the cursor and clears the screen first.
    assert!(raw.starts_with("\x1b[?25l\x1b[2J\x1b[H"));
    assert!(raw.contains("\x1b[?25h"));
    assert!(raw.contains("\x1b]8;;https://dave.io/go/github\x07"));

    let visible = strip_ansi(&raw);
    for step in LOADING_STEPS {
        assert!(visible.contains(&format!("✔ {step}")), "{step}");
    }
    assert!(visible.contains('█'));
    assert!(visible.contains(TAGLINE));
    assert!(visible.contains(SIGN_OFF));
    assert!(visible.trim_end().ends_with(FOOTER));
}

#[test]
fn fallback_lists_every_link() {
    let mut out = Vec::new();
    fallback::print(&mut out, "9.9.9").unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("Dave Williams (v9.9.9)\n"));
    for link in &SOCIAL_LINKS {
        assert!(text.contains(&format!("{} {}\n", link.name, link.url)));
    }
}
