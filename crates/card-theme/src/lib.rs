//! # card-theme — colours for the dave.io card
//!
//! Two small pieces:
//!
//! - [`palette`]: named constant colours (terminal standards plus the
//!   brand colour of each linked network).
//! - [`gradient`]: multi-stop gradients laid over text, with the preset
//!   gradients the card uses for its title, taglines, and sign-off.
//!
//! # Color Space
//!
//! Everything is OKLCH (see [`card_term::color`]). Gradients interpolate
//! there too, so mid-points keep their brightness instead of going muddy the
//! way an sRGB blend does. Downgrading for 256- and 16-colour terminals
//! happens at paint time via [`card_term::style::ColorDepth`].

pub mod gradient;
pub mod palette;

pub use gradient::{Gradient, HueMode};
