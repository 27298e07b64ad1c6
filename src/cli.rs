// SPDX-License-Identifier: MIT
//
// Command-line flags and the settings they resolve to.

use card_fx::config::AnimationConfig;
use card_term::terminal::Overrides;
use card_theme::gradient::{self, Gradient, PRESET_NAMES};
use clap::Parser;
use clap::builder::{FalseyValueParser, PossibleValuesParser};

/// Dave Williams in your terminal.
#[derive(Parser, Debug)]
#[command(name = "dave-io")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print the card without animations
    #[arg(long, env = "NO_ANIMATIONS", value_parser = FalseyValueParser::new())]
    pub no_animations: bool,

    /// Disable colour and clickable links
    #[arg(long, env = "NO_COLOR", value_parser = FalseyValueParser::new())]
    pub no_color: bool,

    /// Print only the minimal text card
    #[arg(long)]
    pub plain: bool,

    /// Animation speed multiplier (2 = twice as fast, 0 = no delays)
    #[arg(long, env = "DAVE_IO_SPEED", default_value_t = 1.0, value_parser = parse_speed)]
    pub speed: f64,

    /// Gradient for the block-font title
    #[arg(
        long,
        default_value = "pastel",
        value_parser = PossibleValuesParser::new(PRESET_NAMES)
    )]
    pub gradient: String,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, env = "DAVE_IO_LOG", default_value = "warn")]
    pub log_level: String,
}

fn parse_speed(s: &str) -> Result<f64, String> {
    let speed: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if !speed.is_finite() || speed < 0.0 {
        return Err(format!("speed must be a non-negative number, got {s}"));
    }
    Ok(speed)
}

impl Cli {
    /// Terminal overrides requested on the command line or environment.
    #[must_use]
    pub const fn overrides(&self) -> Overrides {
        Overrides {
            no_color: self.no_color,
            no_animations: self.no_animations,
        }
    }

    /// Animation timings adjusted for `--speed`.
    #[must_use]
    pub fn animation_config(&self) -> AnimationConfig {
        let factor = if self.speed > 0.0 { self.speed.recip() } else { 0.0 };
        AnimationConfig::default().scaled(factor)
    }

    /// The title gradient named by `--gradient`.
    #[must_use]
    pub fn title_gradient(&self) -> Gradient {
        gradient::by_name(&self.gradient).unwrap_or_else(gradient::pastel)
    }
}
