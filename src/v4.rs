//! UUIDv4-related functionality

use crate::{generator::RandSource, Uuid};

impl Uuid {
    /// Generates a UUIDv4 object from 128 bits drawn from `rng`.
    ///
    /// The version and variant fields overwrite six of the drawn bits; the remaining 122
    /// bits are left as drawn. Use [`uuid4()`](crate::uuid4) to employ the default random
    /// number generator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid6::{generator::with_rand08::Adapter, Uuid};
    ///
    /// let uuid = Uuid::new_v4(&mut Adapter(rand::rngs::OsRng));
    /// println!("{}", uuid); // e.g., "2CA4B2CE-6C13-40D4-BCCF-37D222820F6F"
    /// assert_eq!(uuid.version(), Some(4));
    /// ```
    pub fn new_v4<R: RandSource + ?Sized>(rng: &mut R) -> Self {
        let hi = rng.next_u64().to_be_bytes();
        let lo = rng.next_u64().to_be_bytes();

        let mut bytes = [0u8; 16];
        bytes[..8].copy_from_slice(&hi);
        bytes[8..].copy_from_slice(&lo);
        bytes[6] = 0x40 | (bytes[6] & 0x0f);
        bytes[8] = 0x80 | (bytes[8] & 0x3f);
        Self::from_bytes(bytes)
    }
}
