//! Error type shared by `Angle` and `Vector`.

use std::fmt;

/// Errors surfaced by angle and vector construction or arithmetic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScienceError {
    /// Malformed input: unknown unit tag, unusable option set, zero vector
    /// orientation, degenerate linear system, non-finite value.
    InvalidArgument { reason: String },
}

impl ScienceError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Human-readable cause without the error-kind prefix.
    pub fn reason(&self) -> &str {
        match self {
            Self::InvalidArgument { reason } => reason,
        }
    }
}

impl fmt::Display for ScienceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
        }
    }
}

impl std::error::Error for ScienceError {}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ScienceError>;

#[cfg(test)]
mod tests {
    use super::ScienceError;

    #[test]
    fn display_prefixes_kind() {
        let e = ScienceError::invalid("unit should be degrees, deg, radians or rad");
        assert_eq!(
            e.to_string(),
            "invalid argument: unit should be degrees, deg, radians or rad"
        );
        assert_eq!(e.reason(), "unit should be degrees, deg, radians or rad");
    }
}
