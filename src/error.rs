// SPDX-License-Identifier: MIT

use std::io;

use thiserror::Error;

/// Why the card could not be shown in full.
#[derive(Debug, Error)]
pub enum CardError {
    /// Writing to the terminal failed.
    #[error("failed to write card: {0}")]
    Io(#[from] io::Error),

    /// Ctrl-C arrived during an animation.
    #[error("interrupted")]
    Interrupted,
}

impl CardError {
    /// Conventional exit status: 130 for an interrupt, 1 otherwise.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Interrupted => 130,
            Self::Io(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, CardError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn interrupt_exits_130() {
        assert_eq!(CardError::Interrupted.exit_code(), 130);
    }

    #[test]
    fn io_failure_exits_1() {
        let err = CardError::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "failed to write card: closed");
    }
}
