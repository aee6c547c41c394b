//! Entropy sources shared by the integration tests.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use entropic_core::{EntropyError, EntropySource, FillWidth};
use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};

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
        self.rng.lock().expect("test rng lock").fill_bytes(dest);
        Ok(())
    }

    fn fill_width(&self) -> FillWidth {
        self.width
    }
}

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
