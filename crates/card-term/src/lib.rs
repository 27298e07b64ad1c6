// SPDX-License-Identifier: MIT
//
// card-term — terminal output layer for the dave.io card.
//
// Everything that touches the terminal lives here: escape-sequence
// encoding, OKLCH colour with downgrades for 256- and 16-colour terminals,
// width-aware measuring and truncation of styled text, OSC 8 hyperlinks,
// a borderless column layout, and the capability probe that decides how
// much of that the current output can take.
//
// No TUI framework. The card is written top to bottom as a stream of lines,
// with animations drawing frames over the same region, so a few hundred
// lines of direct ANSI control cover it.

pub mod ansi;
pub mod color;
pub mod link;
pub mod output;
pub mod style;
pub mod table;
pub mod terminal;
pub mod text;

pub use color::{CellColor, Color};
pub use style::{Attr, ColorDepth, Style};
pub use terminal::{Capabilities, Overrides, Size};
