//! Default generator and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::{cell::RefCell, sync};

use crate::generator::{pack, random_node, DefaultRng, SequenceState};
use crate::{StdSystemTime, TimeSource, Uuid};

/// Returns the lock handle of the process-wide sequence counter, creating one if none exists.
fn lock_global_gen() -> sync::MutexGuard<'static, GlobalGenInner> {
    static G: sync::OnceLock<sync::Mutex<GlobalGenInner>> = sync::OnceLock::new();
    G.get_or_init(|| {
        #[cfg(feature = "log")]
        log::debug!("uuid6: initialized global generator");
        sync::Mutex::new(Default::default())
    })
    .lock()
    .expect("uuid6: could not lock global generator")
}

/// The process-wide sequence counter paired with the ID of the process that seeded it.
#[derive(Debug)]
struct GlobalGenInner {
    pid: u32,
    state: SequenceState,
}

impl Default for GlobalGenInner {
    fn default() -> Self {
        Self {
            pid: process_id(),
            state: with_default_rng(|rng| SequenceState::with_rand_source(rng)),
        }
    }
}

impl GlobalGenInner {
    /// Returns a mutable reference to the counter state, reseeding it if the process ID has
    /// changed (i.e., upon Unix forks).
    fn get_mut(&mut self) -> &mut SequenceState {
        if self.pid != process_id() {
            #[cfg(feature = "log")]
            log::debug!("uuid6: reseeded global generator upon fork");
            *self = Default::default();
        }
        &mut self.state
    }
}

/// Calls `f` with the thread-local default random number generator.
///
/// On Unix, the generator is replaced with a freshly seeded one when the process ID differs
/// from the one recorded at the last call in this thread, so that a forked child does not
/// replay the random numbers of its parent.
pub(crate) fn with_default_rng<T>(f: impl FnOnce(&mut DefaultRng) -> T) -> T {
    thread_local! {
        static RNG: RefCell<(u32, DefaultRng)> = RefCell::new((process_id(), Default::default()));
    }

    RNG.with(|cell| {
        let (pid, rng) = &mut *cell.borrow_mut();
        let current = process_id();
        if *pid != current {
            #[cfg(feature = "log")]
            log::debug!("uuid6: process id changed from {} to {}; reseeding", pid, current);
            *pid = current;
            *rng = Default::default();
        }
        f(rng)
    })
}

#[cfg(unix)]
fn process_id() -> u32 {
    std::process::id()
}

#[cfg(not(unix))]
const fn process_id() -> u32 {
    0
}

/// Generates a UUIDv6 object.
///
/// This function employs a process-wide generator whose sequence counter is shared among
/// threads, so no two calls in a process return the same pair of timestamp and sequence
/// as long as fewer than 16,384 calls fall on the same clock tick. The node field is
/// filled with random bits from a thread-local random number generator.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid6::uuid6();
/// println!("{}", uuid); // e.g., "1EC3A5FB-6FE9-64D8-8004-C750087BF2DB"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
///
/// let uuid_string: String = uuid6::uuid6().to_string();
/// ```
///
/// # Panics
///
/// Panics if the system clock reports a time before the Unix epoch.
pub fn uuid6() -> Uuid {
    let timestamp = StdSystemTime.unix_ts_100ns();
    let node = with_default_rng(|rng| random_node(rng));
    let sequence = lock_global_gen().get_mut().advance(timestamp);
    pack(timestamp, sequence, node)
}

/// Generates a UUIDv4 object.
///
/// This function touches no state shared among threads.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid6::uuid4();
/// println!("{}", uuid); // e.g., "2CA4B2CE-6C13-40D4-BCCF-37D222820F6F"
/// ```
pub fn uuid4() -> Uuid {
    with_default_rng(|rng| Uuid::new_v4(rng))
}
