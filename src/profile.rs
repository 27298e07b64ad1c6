// SPDX-License-Identifier: MIT
//
// Who the card is about: name, roles, links.

use card_term::color::Color;
use card_theme::palette;
use chrono::NaiveDate;

pub const NAME: &str = "Dave Williams";
pub const HANDLE: &str = "dave.io";
pub const WEBSITE: &str = "https://dave.io";
pub const TAGLINE: &str = "Weapons-grade DevOps Engineer";
pub const PRONOUNS: &str = "they/them";

pub const ROLES: [&str; 4] = [
    "Weapons-grade DevOps Engineer",
    "Full-stack Developer",
    "Infrastructure Architect",
    "Creative Technologist",
];

pub const SIGN_OFF: &str = "Thanks for stopping by!";
pub const FOOTER: &str = "All links above are clickable in supported terminals";

/// First day of the career the experience count starts from.
#[must_use]
pub fn career_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2007, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Whole years between `start` and `today`, using 365.25-day years.
/// A `today` before `start` counts as zero.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn years_of_experience(start: NaiveDate, today: NaiveDate) -> u32 {
    let days = (today - start).num_days();
    if days <= 0 {
        return 0;
    }
    (days as f64 / 365.25).floor() as u32
}

/// An entry in the social link table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SocialLink {
    pub icon: &'static str,
    pub name: &'static str,
    pub url: &'static str,
    pub color: Color,
}

pub const SOCIAL_LINKS: [SocialLink; 8] = [
    SocialLink {
        icon: "🌐",
        name: "Website",
        url: WEBSITE,
        color: palette::CYAN,
    },
    SocialLink {
        icon: "🐙",
        name: "GitHub",
        url: "https://dave.io/go/github",
        color: palette::GITHUB,
    },
    SocialLink {
        icon: "🦋",
        name: "Bluesky",
        url: "https://dave.io/go/bluesky",
        color: palette::BLUESKY,
    },
    SocialLink {
        icon: "🐘",
        name: "Mastodon",
        url: "https://dave.io/go/mastodon",
        color: palette::MASTODON,
    },
    SocialLink {
        icon: "💼",
        name: "LinkedIn",
        url: "https://dave.io/go/linkedin",
        color: palette::LINKEDIN,
    },
    SocialLink {
        icon: "📺",
        name: "YouTube",
        url: "https://dave.io/go/youtube",
        color: palette::YOUTUBE,
    },
    SocialLink {
        icon: "📸",
        name: "Instagram",
        url: "https://dave.io/go/instagram",
        color: palette::INSTAGRAM,
    },
    SocialLink {
        icon: "🎮",
        name: "Twitch",
        url: "https://dave.io/go/twitch",
        color: palette::TWITCH,
    },
];

/// An entry in the Quick Links table: a label that links somewhere and a
/// short description under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickLink {
    pub label: &'static str,
    pub description: &'static str,
    pub url: &'static str,
}

pub const QUICK_LINKS: [QuickLink; 6] = [
    QuickLink {
        label: "Website",
        description: "dave.io",
        url: WEBSITE,
    },
    QuickLink {
        label: "Pronouns",
        description: PRONOUNS,
        url: "https://dave.io/go/pronouns",
    },
    QuickLink {
        label: "CV/Resume",
        description: "View my experience",
        url: "https://dave.io/go/cv",
    },
    QuickLink {
        label: "Give me a TODO",
        description: "Random task generator",
        url: "https://dave.io/go/todo",
    },
    QuickLink {
        label: "Watch a talk",
        description: "WAT: A Tale of JavaScript",
        url: "https://dave.io/go/wat",
    },
    QuickLink {
        label: "Read a story",
        description: "The Blit Chronicles",
        url: "https://dave.io/go/blit",
    },
];
