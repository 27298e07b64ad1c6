// SPDX-License-Identifier: MIT
//
// Card composition.
//
// The card is a fixed sequence of sections written top to bottom:
//
//   matrix rain          (animation only, full screen, cleared afterwards)
//   loading steps        (animation only)
//   block-font name      (always, gradient when colour is available)
//   tagline              (particle animation or plain line)
//   profile              (between ─ separators)
//   social links         (two-column table)
//   Quick Links          (heading + two-column table)
//   sign-off             (glitch animation or plain line)
//   separator            (rainbow animation or plain line)
//   footer
//
// Each section is built by its own method so the static parts can be
// rendered and checked without running any animation. `render` strings them
// together and checks for Ctrl-C after every animated step.

use std::io::Write;

use card_fx::config::AnimationConfig;
use card_fx::{font, glitch, matrix, particle, rainbow, spinner};
use card_term::ansi;
use card_term::link::terminal_link;
use card_term::style::Style;
use card_term::table::{Table, TableStyle};
use card_term::terminal::{self, Capabilities};
use card_theme::gradient::{self, Gradient};
use card_theme::palette;
use chrono::{Local, NaiveDate};
use rand::Rng;

use crate::error::{CardError, Result};
use crate::profile::{self, QUICK_LINKS, ROLES, SOCIAL_LINKS};

/// Steps shown by the spinner before the card appears.
pub const LOADING_STEPS: [&str; 3] = [
    "Initializing profile",
    "Fetching social links",
    "Rendering card",
];

// ─── Layout ──────────────────────────────────────────────────────────────────

/// Fixed widths of the card's horizontal elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Width of `─` separators, in columns.
    pub separator_width: usize,
    /// Width of each table column, padding included.
    pub column_width: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            separator_width: 94,
            column_width: 44,
        }
    }
}

// ─── Card ────────────────────────────────────────────────────────────────────

/// Everything needed to draw the card once.
#[derive(Debug, Clone)]
pub struct Card {
    caps: Capabilities,
    config: AnimationConfig,
    layout: Layout,
    title_gradient: Gradient,
    today: NaiveDate,
}

impl Card {
    /// A card for `caps`, dated today, with the pastel title.
    #[must_use]
    pub fn new(caps: Capabilities, config: AnimationConfig) -> Self {
        Self {
            caps,
            config,
            layout: Layout::default(),
            title_gradient: gradient::pastel(),
            today: Local::now().date_naive(),
        }
    }

    /// Override the layout widths.
    #[must_use]
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Override the date used for years of experience.
    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Use a different gradient for the block-font title.
    #[must_use]
    pub fn with_title_gradient(mut self, gradient: Gradient) -> Self {
        self.title_gradient = gradient;
        self
    }

    /// Draw the whole card, animations included.
    ///
    /// # Errors
    ///
    /// [`CardError::Io`] if writing fails, [`CardError::Interrupted`] if
    /// Ctrl-C arrives during an animation. The cursor is visible again in
    /// both cases.
    pub fn render<W, R>(&self, out: &mut W, rng: &mut R) -> Result<()>
    where
        W: Write,
        R: Rng + ?Sized,
    {
        let caps = &self.caps;
        let cfg = &self.config;

        matrix::matrix_rain(out, caps, cfg, rng)?;
        check_interrupt()?;

        spinner::loading_sequence(out, caps, &LOADING_STEPS, cfg)?;
        check_interrupt()?;

        if caps.animations {
            ansi::clear_screen(out)?;
        }

        writeln!(out, "{}", self.title())?;
        writeln!(out)?;

        particle::particle_effect(out, caps, profile::TAGLINE, cfg)?;
        check_interrupt()?;
        writeln!(out)?;

        writeln!(out, "{}", self.profile_section())?;
        writeln!(out)?;
        writeln!(out, "{}", self.social_table())?;
        writeln!(out)?;
        writeln!(out, "{}", self.quick_links())?;
        writeln!(out)?;

        glitch::glitch_effect(out, caps, profile::SIGN_OFF, cfg, rng)?;
        check_interrupt()?;

        rainbow::rainbow_animation(out, caps, &self.rule(), cfg)?;
        check_interrupt()?;

        writeln!(out, "{}", self.muted().dim().paint(profile::FOOTER, caps.color))?;
        out.flush()?;

        tracing::debug!("card rendered");
        Ok(())
    }

    /// The name in block letters, wrapped to the terminal (at most the
    /// configured art width) and shaded with the title gradient.
    #[must_use]
    pub fn title(&self) -> String {
        let width = usize::from(self.caps.size.cols).min(self.config.ascii_art.max_width);
        let art = font::render_or_plain(profile::NAME, width);
        self.title_gradient.multiline(&art, self.caps.color)
    }

    /// An unstyled `─` rule of the separator width.
    #[must_use]
    pub fn rule(&self) -> String {
        "─".repeat(self.layout.separator_width)
    }

    /// The rule in gray.
    #[must_use]
    pub fn separator(&self) -> String {
        self.muted().paint(&self.rule(), self.caps.color)
    }

    /// Name, roles, and experience between two separators.
    #[must_use]
    pub fn profile_section(&self) -> String {
        let depth = self.caps.color;
        let sep = self.separator();

        let name = Style::fg(palette::WHITE).bold().paint(profile::NAME, depth);
        let handle = terminal_link(
            &Style::fg(palette::CYAN).paint(profile::HANDLE, depth),
            profile::WEBSITE,
            self.caps.hyperlinks,
        );
        let dot = self.muted().paint("·", depth);

        let bullets = gradient::teen().sample(ROLES.len());
        let roles = ROLES.iter().zip(bullets).map(|(role, color)| {
            format!("  {} {role}", Style::fg(color).paint("▸", depth))
        });

        let years = profile::years_of_experience(profile::career_start(), self.today);
        let experience = format!(
            "  {} years of experience {dot} {}",
            Style::fg(palette::YELLOW).bold().paint(&format!("{years}+"), depth),
            profile::PRONOUNS,
        );

        let mut lines = vec![sep.clone(), format!("  {name} {dot} {handle}"), String::new()];
        lines.extend(roles);
        lines.push(String::new());
        lines.push(experience);
        lines.push(sep);
        lines.join("\n")
    }

    /// Social networks, two per row: icon and name over the URL.
    #[must_use]
    pub fn social_table(&self) -> String {
        let depth = self.caps.color;
        let mut table = Table::new(TableStyle::two_column(self.layout.column_width));

        for pair in SOCIAL_LINKS.chunks(2) {
            table.push(pair.iter().map(|link| {
                let name = Style::fg(link.color).bold().paint(link.name, depth);
                let url = terminal_link(
                    &self.muted().paint(link.url, depth),
                    link.url,
                    self.caps.hyperlinks,
                );
                format!("{} {name}\n{url}", link.icon)
            }));
        }
        table.render()
    }

    /// "Quick Links" heading and its two-column table.
    #[must_use]
    pub fn quick_links(&self) -> String {
        let depth = self.caps.color;
        let heading = Style::fg(palette::YELLOW).bold().paint("Quick Links", depth);

        let mut table = Table::new(TableStyle::two_column(self.layout.column_width));
        for pair in QUICK_LINKS.chunks(2) {
            table.push(pair.iter().map(|link| {
                let label = terminal_link(
                    &Style::fg(palette::MAGENTA).bold().paint(link.label, depth),
                    link.url,
                    self.caps.hyperlinks,
                );
                let description = self.muted().paint(link.description, depth);
                format!("{label}\n{description}")
            }));
        }
        format!("  {heading}\n{}", table.render())
    }

    const fn muted(&self) -> Style {
        Style::fg(palette::GRAY)
    }
}

fn check_interrupt() -> Result<()> {
    if terminal::interrupted() {
        tracing::info!("interrupted");
        return Err(CardError::Interrupted);
    }
    Ok(())
}

// ─── Tests ───────────────────────────────────────────────────────────────────
