//! Argument validation run before any entropy is consumed.
//!
//! Every accepted-range policy lives here so boundary cases (length exactly
//! 1 or 1024, probability exactly 0 or 1) are defined once. Validators are
//! synchronous and draw nothing, guaranteeing zero wasted entropy on
//! invalid input.

use crate::error::EntropyError;

/// Longest identifier `generate_id` will produce.
pub const MAX_ID_LENGTH: usize = 1024;

/// Checks an identifier length against `[1, MAX_ID_LENGTH]`.
pub fn validate_length(length: usize) -> Result<usize, EntropyError> {
    if length < 1 || length > MAX_ID_LENGTH {
        return Err(EntropyError::invalid(
            "length",
            format!("expected integer in [1, {MAX_ID_LENGTH}], got {length}"),
        ));
    }
    Ok(length)
}

/// Checks an inclusive integer range. The engine's safe-integer domain is
/// the full `i64` span; wider spans must be rejected by the type system,
/// not at runtime.
pub fn validate_range(min: i64, max: i64) -> Result<(), EntropyError> {
    if min > max {
        return Err(EntropyError::invalid(
            "min",
            format!("expected min <= max, got min={min} max={max}"),
        ));
    }
    Ok(())
}

/// Checks a probability: finite and within `[0, 1]` inclusive.
pub fn validate_probability(probability: f64) -> Result<f64, EntropyError> {
    if !probability.is_finite() || !(0.0..=1.0).contains(&probability) {
        return Err(EntropyError::invalid(
            "probability",
            format!("expected finite value in [0, 1], got {probability}"),
        ));
    }
    Ok(probability)
}
