//! Probability-gated execution decisions.

use crate::error::EntropyError;
use crate::float::{unit_float, FloatPrecision};
use crate::source::EntropySource;
use crate::validate::validate_probability;

/// Decides whether to execute, given a probability in `[0, 1]`.
///
/// Exactly one unit-float draw, no retry. `probability == 0` is always
/// false (no draw is below zero) and `probability == 1` is always true
/// (every draw is below one), without special-casing either end.
pub fn should_execute<S: EntropySource + ?Sized>(
    source: &S,
    precision: FloatPrecision,
    probability: f64,
) -> Result<bool, EntropyError> {
    let probability = validate_probability(probability)?;
    let draw = unit_float(source, precision)?;
    Ok(draw < probability)
}
