//! Entropy backends and one-time capability detection.
//!
//! `SystemEntropy` resolves the platform CSPRNG exactly once, in a fixed
//! priority order: the `getrandom` syscall surface first, then a direct
//! `/dev/urandom` read on unix. Once detection fails the source is gone for
//! the process lifetime; a draw failure after successful detection is a
//! distinct `EntropyFailed` and is never retried against another path.

use log::debug;

use crate::error::EntropyError;

/// Widest buffer a source can fill in one primitive operation. Decides the
/// float precision path once per engine, never per call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillWidth {
    Wide64,
    Narrow32,
}

/// A cryptographically secure byte generator.
///
/// Implementations must never substitute a non-cryptographic generator:
/// if the underlying source cannot deliver, the call fails.
pub trait EntropySource: Send + Sync {
    /// Fills `dest` entirely with secure random bytes.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError>;

    /// Widest fill this source supports in a single primitive call.
    fn fill_width(&self) -> FillWidth {
        FillWidth::Wide64
    }

    /// A platform-produced v4 UUID, if the platform has a direct generator.
    /// `None` means the caller must assemble one from raw bytes; a UUID is
    /// never fabricated from a non-secure source.
    fn native_uuid(&self) -> Option<String> {
        None
    }
}

impl<S: EntropySource + ?Sized> EntropySource for &S {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill_bytes(dest)
    }

    fn fill_width(&self) -> FillWidth {
        (**self).fill_width()
    }

    fn native_uuid(&self) -> Option<String> {
        (**self).native_uuid()
    }
}

/// Which platform API detection settled on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SystemPath {
    GetRandom,
    #[cfg(unix)]
    DevUrandom,
}

/// OS-backed entropy source. Construct via [`SystemEntropy::detect`]; the
/// chosen platform path is fixed for the value's lifetime.
#[derive(Clone, Copy, Debug)]
pub struct SystemEntropy {
    path: SystemPath,
}

impl SystemEntropy {
    /// Probes the platform APIs in priority order with a trial fill.
    ///
    /// Returns `EntropyUnavailable` when no compliant source exists. The
    /// probe result is cached by the process-wide engine (see `engine`), so
    /// detection runs at most once per process in the common path.
    pub fn detect() -> Result<Self, EntropyError> {
        let mut probe = [0u8; 8];
        if getrandom::getrandom(&mut probe).is_ok() {
            debug!("entropy source detected: getrandom");
            return Ok(Self {
                path: SystemPath::GetRandom,
            });
        }

        #[cfg(unix)]
        if read_dev_urandom(&mut probe).is_ok() {
            debug!("entropy source detected: /dev/urandom");
            return Ok(Self {
                path: SystemPath::DevUrandom,
            });
        }

        debug!("entropy source detection failed: no compliant source");
        Err(EntropyError::EntropyUnavailable)
    }
}

impl EntropySource for SystemEntropy {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        match self.path {
            SystemPath::GetRandom => getrandom::getrandom(dest)
                .map_err(|e| EntropyError::EntropyFailed(e.to_string())),
            #[cfg(unix)]
            SystemPath::DevUrandom => {
                read_dev_urandom(dest).map_err(|e| EntropyError::EntropyFailed(e.to_string()))
            }
        }
    }
}

#[cfg(unix)]
fn read_dev_urandom(dest: &mut [u8]) -> std::io::Result<()> {
    use std::io::Read;
    let mut file = std::fs::File::open("/dev/urandom")?;
    file.read_exact(dest)
}
