use rand::rngs::{adapter::ReseedingRng, OsRng};
use rand::{RngCore as _, SeedableRng as _};
use rand_chacha::ChaCha12Core;

use super::RandSource;

/// The default random number generator used by [`uuid4()`](crate::uuid4) and
/// [`uuid6()`](crate::uuid6).
///
/// This type currently employs [`ChaCha12Core`] with [`ReseedingRng`] wrapper to emulate the
/// strategy used by `rand::rngs::ThreadRng`. Each thread owns its own instance, so no lock is
/// involved in drawing random numbers.
#[derive(Clone, Debug)]
pub struct DefaultRng {
    inner: ReseedingRng<ChaCha12Core, OsRng>,
}

impl RandSource for DefaultRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }
}

impl Default for DefaultRng {
    /// Creates an instance of the default random number generator.
    ///
    /// # Panics
    ///
    /// Panics in the highly unlikely event where the operating system's random number generator
    /// failed to provide secure entropy.
    fn default() -> Self {
        let core = ChaCha12Core::from_rng(OsRng).expect("uuid6: could not initialize DefaultRng");
        Self {
            inner: ReseedingRng::new(core, 1024 * 64, OsRng),
        }
    }
}
