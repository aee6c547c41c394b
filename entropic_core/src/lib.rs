//! Core primitives of the Entropic randomness engine.
//!
//! Converts raw secure entropy into application-usable values: fixed-length
//! lowercase-hex identifiers, RFC-4122 v4 UUIDs, uniformly-distributed
//! bounded integers, unit-interval floats, and probability-gated boolean
//! decisions. There is no fallback to a non-cryptographic generator under
//! any circumstance: if the platform has no compliant source, every
//! operation fails with the same error.
//!
//! Diagnostics go through the `log` facade and carry only operational
//! events (capability detection, degraded-precision selection); raw entropy
//! and generated values are never logged.

pub mod engine;
pub mod error;
pub mod float;
pub mod ident;
pub mod sampler;
pub mod source;
pub mod throttle;
pub mod validate;

#[cfg(test)]
pub(crate) mod testutil;

pub use crate::engine::{
    generate_id, generate_uuid_v4, random_unit_float, reset_system_engine_for_tests, sample_int,
    should_execute, system_engine, RandomEngine,
};
pub use crate::error::EntropyError;
pub use crate::float::FloatPrecision;
pub use crate::source::{EntropySource, FillWidth, SystemEntropy};
pub use crate::validate::MAX_ID_LENGTH;
