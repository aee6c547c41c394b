//! Deterministic and instrumented entropy sources for unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};

use crate::error::EntropyError;
use crate::source::{EntropySource, FillWidth};

/// Reproducible ChaCha20 byte stream keyed by a test label.
pub struct SeededSource {
    rng: Mutex<ChaCha20Rng>,
    width: FillWidth,
}

impl SeededSource {
    pub fn from_label(label: &[u8]) -> Self {
        let mut seed = [0u8; 32];
        for (i, byte) in label.iter().take(32).enumerate() {
            seed[i] = *byte;
        }
        Self {
            rng: Mutex::new(ChaCha20Rng::from_seed(seed)),
            width: FillWidth::Wide64,
        }
    }

    pub fn narrow(label: &[u8]) -> Self {
        let mut source = Self::from_label(label);
        source.width = FillWidth::Narrow32;
        source
    }
}

impl EntropySource for SeededSource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.rng
            .lock()
            .expect("test rng lock poisoned")
            .fill_bytes(dest);
        Ok(())
    }

    fn fill_width(&self) -> FillWidth {
        self.width
    }
}

/// Emits a single repeated byte. Exercises degenerate all-zero/all-one draws.
pub struct ConstSource {
    byte: u8,
}

impl ConstSource {
    pub fn new(byte: u8) -> Self {
        Self { byte }
    }
}

impl EntropySource for ConstSource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        dest.fill(self.byte);
        Ok(())
    }
}

/// Wraps another source and counts fill operations, so tests can assert
/// exact entropy cost (zero draws on invalid input, one draw per decision).
pub struct CountingSource<S> {
    inner: S,
    fills: AtomicUsize,
}

impl<S: EntropySource> CountingSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            fills: AtomicUsize::new(0),
        }
    }

    pub fn fills(&self) -> usize {
        self.fills.load(Ordering::SeqCst)
    }
}

impl<S: EntropySource> EntropySource for CountingSource<S> {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.fills.fetch_add(1, Ordering::SeqCst);
        self.inner.fill_bytes(dest)
    }

    fn fill_width(&self) -> FillWidth {
        self.inner.fill_width()
    }

    fn native_uuid(&self) -> Option<String> {
        self.inner.native_uuid()
    }
}

/// A source whose platform provides a direct UUID generator.
pub struct NativeUuidSource {
    pub uuid: &'static str,
}

impl EntropySource for NativeUuidSource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        dest.fill(0xAB);
        Ok(())
    }

    fn native_uuid(&self) -> Option<String> {
        Some(self.uuid.to_string())
    }
}

/// Detection succeeded but every draw fails, as a broken driver would.
pub struct FailingSource;

impl EntropySource for FailingSource {
    fn fill_bytes(&self, _dest: &mut [u8]) -> Result<(), EntropyError> {
        Err(EntropyError::EntropyFailed("simulated draw failure".into()))
    }
}
