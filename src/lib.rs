// SPDX-License-Identifier: MIT
//
// dave-io: Dave Williams in your terminal.
//
//   card-term  → escape codes, colour, links, tables, terminal detection
//   card-theme → palette and gradients
//   card-fx    → block font and animations
//
// This crate holds the profile data and composes it into a card. The binary
// in main.rs parses flags, sets up logging, and falls back to the minimal
// card if drawing the full one fails.

pub mod card;
pub mod cli;
pub mod error;
pub mod fallback;
pub mod profile;

pub use card::Card;
pub use error::{CardError, Result};
