//! Animation timing and limits.
//!
//! Every animation takes its numbers from an [`AnimationConfig`]. The
//! defaults are the tuned values the card ships with; [`scaled`] stretches
//! or compresses every duration for `--speed`, and [`instant`] zeroes them so
//! tests run the full animation code path without sleeping.
//!
//! [`scaled`]: AnimationConfig::scaled
//! [`instant`]: AnimationConfig::instant

use std::time::Duration;

/// Matrix rain: columns of falling characters.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixConfig {
    /// How long the rain runs.
    pub duration: Duration,
    /// Widest area drawn, in columns.
    pub max_width: u16,
    /// Tallest area drawn, in rows.
    pub max_height: u16,
    /// Pause between frames.
    pub frame_delay: Duration,
    /// Rows of trail behind each head, head included.
    pub trail_length: u16,
    /// A column past the bottom restarts only when a roll exceeds this.
    pub respawn_chance: f64,
    /// Above this many cells the frame delay is doubled.
    pub performance_threshold: u32,
    /// Glyphs the rain is drawn from.
    pub chars: Vec<char>,
}

/// `0`, `1`, and the halfwidth katakana block (one column each).
pub const MATRIX_CHARS: &str =
    "01ｱｲｳｴｵｶｷｸｹｺｻｼｽｾｿﾀﾁﾂﾃﾄﾅﾆﾇﾈﾉﾊﾋﾌﾍﾎﾏﾐﾑﾒﾓﾔﾕﾖﾗﾘﾙﾚﾛﾜｦﾝ";

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(2000),
            max_width: 200,
            max_height: 50,
            frame_delay: Duration::from_millis(50),
            trail_length: 10,
            respawn_chance: 0.95,
            performance_threshold: 2000,
            chars: MATRIX_CHARS.chars().collect(),
        }
    }
}

/// A dot bouncing either side of a tagline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticleConfig {
    pub duration: Duration,
    pub frame_delay: Duration,
    /// Frames, cycled in order.
    pub frames: Vec<&'static str>,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(2000),
            frame_delay: Duration::from_millis(100),
            frames: vec!["∙∙∙∙∙", "●∙∙∙∙", "∙●∙∙∙", "∙∙●∙∙", "∙∙∙●∙", "∙∙∙∙●", "∙∙∙∙∙"],
        }
    }
}

/// Characters randomly replaced by noise before settling.
#[derive(Debug, Clone, PartialEq)]
pub struct GlitchConfig {
    pub iterations: u32,
    pub frame_delay: Duration,
    /// A character is glitched when a roll exceeds this.
    pub threshold: f64,
    pub chars: Vec<char>,
}

impl Default for GlitchConfig {
    fn default() -> Self {
        Self {
            iterations: 15,
            frame_delay: Duration::from_millis(50),
            threshold: 0.7,
            chars: "!@#$%^&*()_+-=[]{}|;:,.<>?/~`".chars().collect(),
        }
    }
}

/// Block-font title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsciiArtConfig {
    /// Never lay the title out wider than this.
    pub max_width: usize,
}

impl Default for AsciiArtConfig {
    fn default() -> Self {
        Self { max_width: 80 }
    }
}

/// Spinner steps shown before the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingConfig {
    /// How long each step spins.
    pub spinner_delay: Duration,
    /// Pause between spinner frames.
    pub frame_delay: Duration,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            spinner_delay: Duration::from_millis(500),
            frame_delay: Duration::from_millis(80),
        }
    }
}

/// Rainbow separator at the end of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalConfig {
    pub iterations: u32,
    pub frame_delay: Duration,
}

impl Default for FinalConfig {
    fn default() -> Self {
        Self {
            iterations: 3,
            frame_delay: Duration::from_millis(300),
        }
    }
}

/// Hard limits that make the matrix rain bail out instead of drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryLimits {
    /// Maximum number of rain columns.
    pub max_drops: usize,
    /// Maximum estimated frame size in bytes (`width × height × 10`).
    pub max_frame_buffer: usize,
}

impl Default for MemoryLimits {
    fn default() -> Self {
        Self {
            max_drops: 1000,
            max_frame_buffer: 50_000,
        }
    }
}

/// Everything the animations need to know.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnimationConfig {
    pub matrix: MatrixConfig,
    pub particle: ParticleConfig,
    pub glitch: GlitchConfig,
    pub ascii_art: AsciiArtConfig,
    pub loading: LoadingConfig,
    pub final_animation: FinalConfig,
    pub limits: MemoryLimits,
}

impl AnimationConfig {
    /// Multiply every duration and delay by `factor`.
    ///
    /// `factor` below 1 speeds animations up. Negative, NaN, and infinite
    /// factors are treated as 1; anything above 100 is capped there.
    #[must_use]
    pub fn scaled(mut self, factor: f64) -> Self {
        let factor = if factor.is_finite() && factor >= 0.0 {
            factor.min(100.0)
        } else {
            1.0
        };
        let s = |d: &mut Duration| *d = d.mul_f64(factor);

        s(&mut self.matrix.duration);
        s(&mut self.matrix.frame_delay);
        s(&mut self.particle.duration);
        s(&mut self.particle.frame_delay);
        s(&mut self.glitch.frame_delay);
        s(&mut self.loading.spinner_delay);
        s(&mut self.loading.frame_delay);
        s(&mut self.final_animation.frame_delay);
        self
    }

    /// Defaults with every duration and delay set to zero.
    #[must_use]
    pub fn instant() -> Self {
        Self::default().scaled(0.0)
    }
}
