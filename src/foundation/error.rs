use crate::blend::op::BlitOperator;

/// Convenience result type used across blitcfg.
pub type BlitResult<T> = Result<T, BlitError>;

/// Failures of the blend coefficient resolver.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendError {
    /// The operator exists but has no hardware coefficient path yet.
    #[error("blend operator {0:?} is not supported")]
    NotSupported(BlitOperator),

    /// A raw operator code outside the closed operator enumeration.
    #[error("invalid blend operator code {0}")]
    InvalidOperator(u32),
}

/// Failures of the fixed-point scale encoder.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleError {
    /// Zero denominator (destination size or percentage).
    #[error("scale denominator is zero")]
    DivideByZero,

    /// The value does not fit the register representation.
    #[error("scale {what} overflows the fixed-point register")]
    Overflow {
        /// Which quantity overflowed.
        what: &'static str,
    },
}

/// Top-level error taxonomy used by the compiler and device APIs.
#[derive(thiserror::Error, Debug)]
pub enum BlitError {
    /// Blend coefficient resolution failed.
    #[error(transparent)]
    Blend(#[from] BlendError),

    /// Scale factor encoding failed.
    #[error(transparent)]
    Scale(#[from] ScaleError),

    /// Invalid user-provided request data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing requests and options.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Errors reported by the register backend.
    #[error("device error: {0}")]
    Device(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BlitError {
    /// Build a [`BlitError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BlitError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`BlitError::Device`] value.
    pub fn device(msg: impl Into<String>) -> Self {
        Self::Device(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
