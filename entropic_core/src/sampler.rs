//! Rejection-sampling uniform integer draws.
//!
//! Modulo reduction over a non-power-of-two range is statistically biased,
//! so the sampler instead masks each draw to the minimal covering bit width
//! and redraws whenever the masked value falls outside the range. The retry
//! loop is intentionally unbounded: by construction of the minimal mask the
//! per-attempt rejection probability is below one half (expected attempts
//! < 2), and capping the count would reintroduce the very bias the mask
//! removes.

use crate::error::EntropyError;
use crate::source::EntropySource;
use crate::validate::validate_range;

/// Draws an integer uniformly from the inclusive range `[min, max]`.
///
/// `min == max` returns immediately with zero entropy cost. All range
/// arithmetic is done in `u128` so the full `i64` span (range = 2^64) is
/// addressable without truncation.
pub fn sample_uniform<S: EntropySource + ?Sized>(
    source: &S,
    min: i64,
    max: i64,
) -> Result<i64, EntropyError> {
    validate_range(min, max)?;
    let range = (max as i128 - min as i128 + 1) as u128;
    if range == 1 {
        return Ok(min);
    }

    let mask = covering_mask(range);
    let draw_bytes = bytes_for_mask(mask);
    let mut buf = [0u8; 16];

    loop {
        source.fill_bytes(&mut buf[..draw_bytes])?;
        let value = u128::from_le_bytes(buf) & mask;
        if value < range {
            return Ok((min as i128 + value as i128) as i64);
        }
        // Rejected: outside [0, range). Redraw with fresh bytes.
    }
}

/// Smallest all-ones mask covering `range - 1`, i.e. the minimal number of
/// random bits able to represent every value below `range`.
fn covering_mask(range: u128) -> u128 {
    debug_assert!(range >= 2);
    let bits = 128 - (range - 1).leading_zeros();
    if bits >= 128 {
        u128::MAX
    } else {
        (1u128 << bits) - 1
    }
}

fn bytes_for_mask(mask: u128) -> usize {
    let bits = 128 - mask.leading_zeros() as usize;
    (bits + 7) / 8
}
