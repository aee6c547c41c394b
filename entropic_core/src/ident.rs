//! Hex identifiers and RFC-4122 v4 UUID assembly.

use crate::error::EntropyError;
use crate::source::EntropySource;
use crate::validate::validate_length;

const UUID_BYTES: usize = 16;

/// Builds a lowercase-hex identifier of exactly `length` characters.
///
/// Draws `ceil(length / 2)` bytes and truncates the rendered hex, so an odd
/// length simply discards the final nibble's partner.
pub fn hex_id<S: EntropySource + ?Sized>(
    source: &S,
    length: usize,
) -> Result<String, EntropyError> {
    let length = validate_length(length)?;
    let mut bytes = vec![0u8; (length + 1) / 2];
    source.fill_bytes(&mut bytes)?;
    let mut rendered = hex::encode(bytes);
    rendered.truncate(length);
    Ok(rendered)
}

/// Assembles a canonical 36-character v4 UUID from 16 fresh bytes.
///
/// The version and variant patches are unconditional post-processing: they
/// hold for every draw, including all-zeros and all-ones.
pub fn uuid_v4_fallback<S: EntropySource + ?Sized>(source: &S) -> Result<String, EntropyError> {
    let mut bytes = [0u8; UUID_BYTES];
    source.fill_bytes(&mut bytes)?;
    bytes[6] = (bytes[6] & 0x0f) | 0x40; // version nibble = 0100
    bytes[8] = (bytes[8] & 0x3f) | 0x80; // variant bits = 10
    Ok(format_uuid(&bytes))
}

fn format_uuid(bytes: &[u8; UUID_BYTES]) -> String {
    let hex = hex::encode(bytes);
    format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32],
    )
}
