//! Error type for level generation.

/// Error type for GANN level calculations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GannError {
    /// A run parameter is outside its valid range.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A value has no real square root.
    #[error("domain error: cannot derive a degree from {0}")]
    Domain(f64),
}

impl GannError {
    /// Whether this error comes from parameter validation.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
