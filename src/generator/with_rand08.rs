//! Integration with `rand` (v0.8) crate.

use super::RandSource;
use rand::RngCore;

/// An adapter that implements [`RandSource`] for [`RngCore`] types.
///
/// # Examples
///
/// ```rust
/// use uuid6::{generator::with_rand08::Adapter, Uuid};
///
/// let mut rng = Adapter(rand::thread_rng());
/// let x = Uuid::new_v4(&mut rng);
/// assert_eq!(x.version(), Some(4));
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore> RandSource for Adapter<T> {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }
}
