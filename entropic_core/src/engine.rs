//! The engine facade: one source, one capability resolution, five draws.
//!
//! `RandomEngine` binds an entropy source to the capabilities resolved from
//! it (float precision, native-UUID availability) exactly once at
//! construction. The process-wide system engine resolves lazily on first
//! use; an unavailable result is sticky for the process lifetime so callers
//! never observe the engine flapping between secure and failed states.

use std::sync::RwLock;

use log::{debug, warn};

use crate::error::EntropyError;
use crate::float::{unit_float, FloatPrecision};
use crate::ident::{hex_id, uuid_v4_fallback};
use crate::sampler::sample_uniform;
use crate::source::{EntropySource, SystemEntropy};
use crate::throttle;

/// Randomness engine over a fixed entropy source.
///
/// Every operation is a pure function of its validated inputs plus fresh
/// entropy; the only state is the capability set resolved at construction.
#[derive(Clone, Copy, Debug)]
pub struct RandomEngine<S> {
    source: S,
    precision: FloatPrecision,
    has_native_uuid: bool,
}

impl<S: EntropySource> RandomEngine<S> {
    /// Binds `source` and resolves its capabilities once.
    pub fn new(source: S) -> Self {
        let precision = FloatPrecision::from(source.fill_width());
        if precision == FloatPrecision::Low32 {
            warn!("entropy source cannot fill 64-bit buffers; unit floats degrade to 32-bit precision");
        }
        let has_native_uuid = source.native_uuid().is_some();
        debug!(
            "randomness engine ready: precision={:?} native_uuid={}",
            precision, has_native_uuid
        );
        Self {
            source,
            precision,
            has_native_uuid,
        }
    }

    /// Float precision this engine resolved to. Fixed for its lifetime.
    pub fn precision(&self) -> FloatPrecision {
        self.precision
    }

    /// Lowercase-hex identifier of exactly `length` chars, `length` in `[1, 1024]`.
    pub fn generate_id(&self, length: usize) -> Result<String, EntropyError> {
        hex_id(&self.source, length)
    }

    /// Canonical RFC-4122 v4 UUID string.
    ///
    /// A platform-native generator, when present, is trusted and returned
    /// unchanged; otherwise 16 fresh bytes are bit-patched into shape.
    pub fn generate_uuid_v4(&self) -> Result<String, EntropyError> {
        if self.has_native_uuid {
            return self.source.native_uuid().ok_or_else(|| {
                EntropyError::EntropyFailed("native uuid generator disappeared".into())
            });
        }
        uuid_v4_fallback(&self.source)
    }

    /// Integer drawn uniformly from the inclusive range `[min, max]`.
    pub fn sample_int(&self, min: i64, max: i64) -> Result<i64, EntropyError> {
        sample_uniform(&self.source, min, max)
    }

    /// Float drawn uniformly from `[0, 1)` at the resolved precision.
    pub fn random_unit_float(&self) -> Result<f64, EntropyError> {
        unit_float(&self.source, self.precision)
    }

    /// True with the given probability; exactly one entropy draw.
    pub fn should_execute(&self, probability: f64) -> Result<bool, EntropyError> {
        throttle::should_execute(&self.source, self.precision, probability)
    }

    // Async twins. The entropy call itself never blocks meaningfully, so
    // these exist as a scheduling convenience for async callers; the
    // algorithms are the sync ones, byte for byte.

    pub async fn generate_id_async(&self, length: usize) -> Result<String, EntropyError> {
        self.generate_id(length)
    }

    pub async fn generate_uuid_v4_async(&self) -> Result<String, EntropyError> {
        self.generate_uuid_v4()
    }

    pub async fn sample_int_async(&self, min: i64, max: i64) -> Result<i64, EntropyError> {
        self.sample_int(min, max)
    }

    pub async fn random_unit_float_async(&self) -> Result<f64, EntropyError> {
        self.random_unit_float()
    }

    pub async fn should_execute_async(&self, probability: f64) -> Result<bool, EntropyError> {
        self.should_execute(probability)
    }
}

// Capability cache for the process-wide system engine. Concurrent first
// callers may race the probe; the write is idempotent (every probe of the
// same platform resolves identically), so last-writer-wins converges.
static SYSTEM_ENGINE: RwLock<Option<Result<RandomEngine<SystemEntropy>, EntropyError>>> =
    RwLock::new(None);

/// The lazily-detected process-wide engine over the platform CSPRNG.
///
/// Detection runs at most once per process; both outcomes are cached, so an
/// unavailable platform fails every subsequent call with the same error and
/// is never re-probed.
pub fn system_engine() -> Result<RandomEngine<SystemEntropy>, EntropyError> {
    if let Some(resolved) = SYSTEM_ENGINE
        .read()
        .expect("system engine cache poisoned")
        .as_ref()
    {
        return resolved.clone();
    }
    let resolved = SystemEntropy::detect().map(RandomEngine::new);
    let mut slot = SYSTEM_ENGINE.write().expect("system engine cache poisoned");
    if slot.is_none() {
        *slot = Some(resolved.clone());
    }
    slot.as_ref().cloned().unwrap_or(resolved)
}

/// Clears the cached detection result so the next call re-probes.
///
/// Test hook only; production code must never flip the engine between
/// secure and failed states mid-run.
#[doc(hidden)]
pub fn reset_system_engine_for_tests() {
    *SYSTEM_ENGINE.write().expect("system engine cache poisoned") = None;
}

/// See [`RandomEngine::generate_id`]; uses the system engine.
pub fn generate_id(length: usize) -> Result<String, EntropyError> {
    system_engine()?.generate_id(length)
}

/// See [`RandomEngine::generate_uuid_v4`]; uses the system engine.
pub fn generate_uuid_v4() -> Result<String, EntropyError> {
    system_engine()?.generate_uuid_v4()
}

/// See [`RandomEngine::sample_int`]; uses the system engine.
pub fn sample_int(min: i64, max: i64) -> Result<i64, EntropyError> {
    system_engine()?.sample_int(min, max)
}

/// See [`RandomEngine::random_unit_float`]; uses the system engine.
pub fn random_unit_float() -> Result<f64, EntropyError> {
    system_engine()?.random_unit_float()
}

/// See [`RandomEngine::should_execute`]; uses the system engine.
pub fn should_execute(probability: f64) -> Result<bool, EntropyError> {
    system_engine()?.should_execute(probability)
}
