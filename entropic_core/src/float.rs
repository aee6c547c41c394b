//! Unit-interval float extraction at source-capability precision.

use crate::error::EntropyError;
use crate::source::{EntropySource, FillWidth};

/// Which float path an engine runs. Decided once from the source's fill
/// width and never re-evaluated, so a single process never mixes precisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FloatPrecision {
    /// 53 effective mantissa bits from a 64-bit draw. Preferred.
    High53,
    /// 32-bit draw divided by 2^32. Degraded path for narrow sources.
    Low32,
}

impl From<FillWidth> for FloatPrecision {
    fn from(width: FillWidth) -> Self {
        match width {
            FillWidth::Wide64 => FloatPrecision::High53,
            FillWidth::Narrow32 => FloatPrecision::Low32,
        }
    }
}

const HIGH_SCALE: f64 = 1.0 / (1u64 << 53) as f64;
const LOW_SCALE: f64 = 1.0 / 4_294_967_296.0; // 2^32

/// Draws one float uniformly from `[0, 1)`.
///
/// Exactly 0.0 is a legal outcome; 1.0 is unreachable on both paths since
/// the kept bits are always strictly below the divisor.
pub fn unit_float<S: EntropySource + ?Sized>(
    source: &S,
    precision: FloatPrecision,
) -> Result<f64, EntropyError> {
    match precision {
        FloatPrecision::High53 => {
            let mut buf = [0u8; 8];
            source.fill_bytes(&mut buf)?;
            let bits = u64::from_le_bytes(buf) >> 11;
            Ok(bits as f64 * HIGH_SCALE)
        }
        FloatPrecision::Low32 => {
            let mut buf = [0u8; 4];
            source.fill_bytes(&mut buf)?;
            Ok(u32::from_le_bytes(buf) as f64 * LOW_SCALE)
        }
    }
}
