//! A Rust implementation of UUID version 6 with UUID version 4 support
//!
//! ```rust
//! let uuid = uuid6::uuid6();
//! println!("{}", uuid); // e.g., "1EC3A5FB-6FE9-64D8-8004-C750087BF2DB"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//!
//! let view = uuid.decode_v6().unwrap();
//! println!("{:?}", view.timestamp()); // time of generation
//! ```
//!
//! See [RFC 9562](https://www.rfc-editor.org/rfc/rfc9562.html).
//!
//! # Field and bit layout
//!
//! This implementation produces UUIDv6 identifiers with the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           time_high                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |           time_mid            |  ver  |       time_low        |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|         sequence          |             node              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             node                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 60-bit timestamp (`time_high`, `time_mid` and `time_low`, most significant
//!   bits first) counts 100-nanosecond intervals since 00:00:00 UTC on 15 October
//!   1582, so the byte order of identifiers follows the order of their creation.
//! - The 4-bit `ver` field is set at `0110`.
//! - The 2-bit `var` field is set at `10`.
//! - The 14-bit `sequence` field is a process-wide counter. It is seeded randomly once
//!   per process, incremented whenever the clock has not moved forward since the
//!   previous identifier, and carried over unchanged when the clock advances.
//! - The 48-bit `node` field is filled with random bits whose multicast bit is set to
//!   one, so that it never collides with a globally assigned MAC address.
//!
//! A stalled or rewound clock does not produce duplicate pairs of timestamp and
//! sequence until the 14-bit counter wraps around after 16,384 calls within the same
//! clock tick.
//!
//! # Other features
//!
//! This library also supports the generation of UUID version 4:
//!
//! ```rust
//! let uuid = uuid6::uuid4();
//! println!("{}", uuid); // e.g., "2CA4B2CE-6C13-40D4-BCCF-37D222820F6F"
//! ```
//!
//! The text form is parsed leniently and printed in a configurable format:
//!
//! ```rust
//! use uuid6::{Format, Uuid};
//!
//! let x = "{1ec3a5fb-6fe9-64d8-8004-c750087bf2db}".parse::<Uuid>()?;
//! assert_eq!(x.to_string(), "1EC3A5FB-6FE9-64D8-8004-C750087BF2DB");
//! assert_eq!(
//!     &x.encode_with(Format::new().lowercase(true).separators(false)) as &str,
//!     "1ec3a5fb6fe964d88004c750087bf2db"
//! );
//! # Ok::<(), uuid6::ParseError>(())
//! ```
//!
//! # Crate features
//!
//! Default features:
//!
//! - `std` enables, among others, the mutex-guarded [`V6Generator`] and the system
//!   clock.
//! - `global_gen` enables the primary [`uuid6()`] and [`uuid4()`] functions backed by
//!   a process-wide generator and a thread-local random number generator.
//!
//! Optional features:
//!
//! - `serde` enables serialization and deserialization of [`Uuid`] via the canonical
//!   string representation.
//! - `uuid` enables conversions between [`Uuid`] and `uuid::Uuid`.
//! - `log` emits diagnostic records through the `log` crate.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod id;
pub use id::{Uuid, Variant};

mod text;
pub use text::{EncodedUuid, Format, ParseError};

mod view;
pub use view::{RandomView, TimeOrderedView, View};

mod v4;

pub mod generator;
pub use generator::{RandSource, SequenceState, TimeSource};
#[cfg(feature = "std")]
pub use generator::{StdSystemTime, V6Generator};

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{uuid4, uuid6};

/// The maximum value of the 60-bit timestamp field.
const MAX_TIMESTAMP: u64 = (1 << 60) - 1;

/// The maximum value of the 14-bit sequence field.
const MAX_SEQUENCE: u16 = (1 << 14) - 1;

/// The maximum value of the 48-bit node field.
const MAX_NODE: u64 = (1 << 48) - 1;

/// The number of 100-nanosecond intervals between the UUID epoch (1582-10-15) and the
/// Unix epoch (1970-01-01).
pub const UUID_EPOCH_OFFSET: u64 = 0x01b2_1dd2_1381_4000;
