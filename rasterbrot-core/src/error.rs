use thiserror::Error;

/// Errors originating from the core escape-time engine.
///
/// These are all domain errors: they describe inputs that can never
/// produce a valid grid and are detected before any work is done.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid window: {reason}")]
    InvalidWindow { reason: String },

    #[error("invalid grid dimensions: {width}×{height} (both must be > 0)")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("invalid exponent: {0} (must be >= 1)")]
    InvalidExponent(u32),
}
