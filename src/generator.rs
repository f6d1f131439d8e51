//! UUIDv6 generator and related types.

use crate::{Uuid, MAX_NODE, MAX_SEQUENCE, MAX_TIMESTAMP, UUID_EPOCH_OFFSET};

#[cfg(feature = "global_gen")]
#[cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]
mod default_rng;
#[cfg(feature = "global_gen")]
pub use default_rng::DefaultRng;

pub mod with_rand08;


/// A trait that defines the minimum random number generator interface for this library.
pub trait RandSource {
    /// Returns the next random `u32`.
    fn next_u32(&mut self) -> u32;

    /// Returns the next random `u64`.
    fn next_u64(&mut self) -> u64;
}

impl<T: RandSource + ?Sized> RandSource for &mut T {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }
}

/// A trait that defines the minimum system clock interface for [`V6Generator`].
///
/// Implementations must not fabricate a reading. If the underlying clock cannot be read,
/// the method should panic rather than return a substitute value, because any made-up
/// timestamp breaks the time ordering of generated UUIDs.
pub trait TimeSource {
    /// Returns the current Unix timestamp in 100-nanosecond intervals.
    fn unix_ts_100ns(&self) -> u64;
}

/// The default [`TimeSource`] that uses [`std::time::SystemTime`].
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct StdSystemTime;

#[cfg(feature = "std")]
impl TimeSource for StdSystemTime {
    /// # Panics
    ///
    /// Panics if the system clock reports a time before the Unix epoch.
    fn unix_ts_100ns(&self) -> u64 {
        use std::time;
        let elapsed = time::SystemTime::now()
            .duration_since(time::UNIX_EPOCH)
            .expect("clock may have gone backwards");
        (elapsed.as_nanos() / 100) as u64
    }
}

/// Represents the state of the process-wide sequence counter of UUIDv6.
///
/// The state consists of the timestamp of the last call and the 14-bit sequence counter.
/// The counter is incremented (and wraps around at 2^14) whenever the timestamp passed
/// has not moved forward since the last call; it is carried over unchanged otherwise.
/// Thus, no two calls return the same pair of timestamp and sequence unless 16,384 calls
/// are made without the timestamp moving forward.
///
/// This type performs no synchronization by itself. [`V6Generator`] wraps it in a mutex
/// to share it among threads.
///
/// # Examples
///
/// ```rust
/// use uuid6::SequenceState;
///
/// let mut state = SequenceState::new(0x3ffe);
/// assert_eq!(state.advance(100), 0x3ffe);
/// assert_eq!(state.advance(100), 0x3fff);
/// assert_eq!(state.advance(99), 0x0000);
/// assert_eq!(state.advance(101), 0x0000);
/// ```
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct SequenceState {
    last_timestamp: u64,
    sequence: u16,
}

impl SequenceState {
    /// Creates a state with the sequence counter initialized at `sequence_seed`, truncated
    /// to 14 bits.
    pub const fn new(sequence_seed: u16) -> Self {
        Self {
            last_timestamp: 0,
            sequence: sequence_seed & MAX_SEQUENCE,
        }
    }

    /// Creates a state with the sequence counter initialized at a random number.
    pub fn with_rand_source<R: RandSource + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.next_u32() as u16)
    }

    /// Returns the timestamp of the last call of [`advance()`](Self::advance).
    pub const fn last_timestamp(&self) -> u64 {
        self.last_timestamp
    }

    /// Returns the current value of the sequence counter.
    pub const fn sequence(&self) -> u16 {
        self.sequence
    }

    /// Updates the state with a new timestamp and returns the sequence value to embed in a
    /// UUID carrying that timestamp.
    ///
    /// The timestamp is truncated to 60 bits.
    pub fn advance(&mut self, timestamp: u64) -> u16 {
        let timestamp = timestamp & MAX_TIMESTAMP;
        if self.last_timestamp >= timestamp {
            self.sequence = (self.sequence + 1) & MAX_SEQUENCE;
        }
        self.last_timestamp = timestamp;
        self.sequence
    }
}

/// Returns a random 48-bit node value with the multicast bit set.
pub fn random_node<R: RandSource + ?Sized>(rng: &mut R) -> u64 {
    (rng.next_u64() & MAX_NODE) | (1 << 40)
}

/// Builds a UUIDv6 from a Unix timestamp in 100-nanosecond intervals.
pub(crate) const fn pack(unix_ts_100ns: u64, sequence: u16, node: u64) -> Uuid {
    Uuid::from_fields_v6(
        (unix_ts_100ns & MAX_TIMESTAMP).wrapping_add(UUID_EPOCH_OFFSET),
        sequence,
        node,
    )
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub use with_std::V6Generator;

#[cfg(feature = "std")]
mod with_std {
    use super::{pack, random_node, RandSource, SequenceState, StdSystemTime, TimeSource};
    use crate::Uuid;
    use std::sync;

    /// Represents a UUIDv6 generator that encapsulates a sequence counter and a clock.
    ///
    /// The counter is guarded by a mutex, so a generator can be shared among threads through
    /// a shared reference. The clock is read and the random node is drawn before the mutex
    /// is acquired; only the update of the counter happens while the mutex is held.
    ///
    /// [`uuid6()`](crate::uuid6) shares a process-wide counter with the same semantics,
    /// whereas this type helps create an independent counter or inject a custom clock.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::thread;
    /// use uuid6::V6Generator;
    ///
    /// let g = V6Generator::new(0);
    /// thread::scope(|s| {
    ///     for i in 0..4 {
    ///         let g = &g;
    ///         s.spawn(move || {
    ///             for _ in 0..8 {
    ///                 println!("{} by thread {}", g.generate(), i);
    ///                 thread::yield_now();
    ///             }
    ///         });
    ///     }
    /// });
    /// ```
    #[derive(Debug, Default)]
    pub struct V6Generator<T = StdSystemTime> {
        state: sync::Mutex<SequenceState>,

        /// The clock used by the generator.
        time_source: T,
    }

    impl V6Generator {
        /// Creates a generator instance that uses the system clock, with the sequence counter
        /// initialized at `sequence_seed` (truncated to 14 bits).
        pub const fn new(sequence_seed: u16) -> Self {
            Self::with_time_source(StdSystemTime, sequence_seed)
        }
    }

    impl<T: TimeSource> V6Generator<T> {
        /// Creates a generator instance with a custom clock.
        pub const fn with_time_source(time_source: T, sequence_seed: u16) -> Self {
            Self {
                state: sync::Mutex::new(SequenceState::new(sequence_seed)),
                time_source,
            }
        }

        /// Generates a new UUIDv6 object from the current timestamp and the `node` passed.
        ///
        /// Only the least significant 48 bits of `node` are used.
        ///
        /// # Panics
        ///
        /// Panics if the clock cannot be read.
        pub fn generate_with_node(&self, node: u64) -> Uuid {
            let timestamp = self.time_source.unix_ts_100ns();
            self.generate_core(timestamp, node)
        }

        /// Generates a new UUIDv6 object from the current timestamp and a random node value
        /// drawn from `rng`.
        ///
        /// The multicast bit of the node value is set to one to distinguish it from globally
        /// assigned MAC addresses.
        ///
        /// # Examples
        ///
        /// ```rust
        /// use uuid6::{generator::with_rand08, V6Generator};
        ///
        /// let g = V6Generator::new(0);
        /// let mut rng = with_rand08::Adapter(rand::rngs::OsRng);
        /// let x = g.generate_with_rng(&mut rng);
        /// assert_eq!(x.version(), Some(6));
        /// assert_eq!(x.as_bytes()[10] & 1, 1);
        /// ```
        pub fn generate_with_rng<R: RandSource + ?Sized>(&self, rng: &mut R) -> Uuid {
            self.generate_with_node(random_node(rng))
        }

        /// Generates a new UUIDv6 object from the current timestamp and a random node value
        /// drawn from the default random number generator.
        #[cfg(feature = "global_gen")]
        #[cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]
        pub fn generate(&self) -> Uuid {
            let node = crate::global_gen::with_default_rng(|rng| random_node(rng));
            self.generate_with_node(node)
        }

        /// Generates a new UUIDv6 object from the `unix_ts_100ns` and `node` passed,
        /// advancing the sequence counter of the generator.
        ///
        /// `unix_ts_100ns` is a Unix timestamp in 100-nanosecond intervals; it is truncated
        /// to 60 bits. Only the least significant 48 bits of `node` are used.
        pub fn generate_core(&self, unix_ts_100ns: u64, node: u64) -> Uuid {
            let sequence = self.lock_state().advance(unix_ts_100ns);
            pack(unix_ts_100ns, sequence, node)
        }

        /// Returns a snapshot of the sequence counter state.
        pub fn state(&self) -> SequenceState {
            self.lock_state().clone()
        }

        fn lock_state(&self) -> sync::MutexGuard<'_, SequenceState> {
            self.state
                .lock()
                .expect("uuid6: could not lock generator state")
        }
    }

    /// Supports operations as an infinite iterator that produces a new UUIDv6 object for each
    /// call of `next()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid6::V6Generator;
    ///
    /// V6Generator::new(0)
    ///     .enumerate()
    ///     .skip(4)
    ///     .take(4)
    ///     .for_each(|(i, e)| println!("[{i}] {e}"));
    /// ```
    #[cfg(feature = "global_gen")]
    #[cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]
    impl<T: TimeSource> Iterator for V6Generator<T> {
        type Item = Uuid;

        fn next(&mut self) -> Option<Self::Item> {
            Some(self.generate())
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            (usize::MAX, None)
        }
    }

    #[cfg(feature = "global_gen")]
    #[cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]
    impl<T: TimeSource> std::iter::FusedIterator for V6Generator<T> {}
}
