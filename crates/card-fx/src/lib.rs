//! # card-fx — animations and block lettering for the dave.io card
//!
//! - **[`config`]** — `AnimationConfig`: every duration, delay, and limit
//! - **[`pacer`]** — time-boxed frame loop that stops on Ctrl-C
//! - **[`font`]** — ANSI Shadow block font with word wrap
//! - **[`matrix`]** — full-screen matrix rain
//! - **[`particle`]** — tagline between moving particles
//! - **[`glitch`]** — noisy sign-off that settles into a gradient
//! - **[`rainbow`]** — rainbow line with drifting hues
//! - **[`spinner`]** — spinner-driven loading steps
//!
//! Every animation writes to a caller-supplied `impl Write` and consults a
//! [`card_term::terminal::Capabilities`]: with animations off it prints its
//! final state once (or nothing, for the purely decorative ones), so piped
//! output stays readable. Randomness comes in as `&mut impl Rng` so tests
//! can seed it.

pub mod config;
pub mod font;
pub mod glitch;
pub mod matrix;
pub mod pacer;
pub mod particle;
pub mod rainbow;
pub mod spinner;

pub use config::AnimationConfig;
