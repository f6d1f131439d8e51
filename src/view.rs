//! Typed views that decode the fields of UUIDs.

use crate::{Uuid, MAX_NODE, MAX_SEQUENCE, UUID_EPOCH_OFFSET};

/// Represents the fields of a UUID decoded according to its version.
///
/// # Examples
///
/// ```rust
/// use uuid6::{Uuid, View};
///
/// match uuid6::uuid6().view() {
///     View::TimeOrdered(v) => println!("sequence: {}", v.sequence()),
///     View::Random(_) => unreachable!(),
///     View::Unknown(_) => unreachable!(),
/// }
///
/// assert_eq!(Uuid::NIL.view(), View::Unknown(Uuid::NIL));
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum View {
    /// A UUIDv4.
    Random(RandomView),

    /// A UUIDv6.
    TimeOrdered(TimeOrderedView),

    /// A UUID of any other version or variant.
    Unknown(Uuid),
}

impl Uuid {
    /// Decodes the UUID into a typed view keyed by its version.
    pub const fn view(&self) -> View {
        match self.version() {
            Some(4) => View::Random(RandomView(*self)),
            Some(6) => View::TimeOrdered(TimeOrderedView::decode(self)),
            _ => View::Unknown(*self),
        }
    }

    /// Decodes the fields of a UUIDv6, returning `None` if the UUID is not a UUIDv6.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid6::Uuid;
    ///
    /// let x = "1EC3A5FB-6FE9-64D8-8004-C750087BF2DB".parse::<Uuid>()?;
    /// let v = x.decode_v6().unwrap();
    /// assert_eq!(v.raw_timestamp(), 0x1ec3a5fb6fe94d8);
    /// assert_eq!(v.sequence(), 4);
    /// assert_eq!(v.node(), 0xc750087bf2db);
    ///
    /// assert!(uuid6::uuid4().decode_v6().is_none());
    /// # Ok::<(), uuid6::ParseError>(())
    /// ```
    pub const fn decode_v6(&self) -> Option<TimeOrderedView> {
        match self.version() {
            Some(6) => Some(TimeOrderedView::decode(self)),
            _ => None,
        }
    }
}

/// The view of a UUIDv4.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct RandomView(Uuid);

impl RandomView {
    /// Returns the underlying UUID.
    pub const fn uuid(&self) -> Uuid {
        self.0
    }

    /// Returns the 122 random bits with the version and variant fields removed.
    pub const fn random_bits(&self) -> u128 {
        let n = self.0.to_u128();
        ((n >> 80) << 74) | (((n >> 64) & 0xfff) << 62) | (n & ((1 << 62) - 1))
    }
}

/// The view of a UUIDv6 that exposes its timestamp, sequence and node fields.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TimeOrderedView {
    raw_timestamp: u64,
    sequence: u16,
    node: u64,
}

impl TimeOrderedView {
    const fn decode(src: &Uuid) -> Self {
        let n = src.to_u128();
        let time_high_mid = (n >> 80) as u64;
        let time_low = (n >> 64) as u64 & 0xfff;
        Self {
            raw_timestamp: (time_high_mid << 12) | time_low,
            sequence: (n >> 48) as u16 & MAX_SEQUENCE,
            node: n as u64 & MAX_NODE,
        }
    }

    /// Returns the 60-bit timestamp field value, i.e. 100-nanosecond intervals since
    /// 00:00:00 UTC on 15 October 1582.
    pub const fn raw_timestamp(&self) -> u64 {
        self.raw_timestamp
    }

    /// Returns the 14-bit sequence field value.
    pub const fn sequence(&self) -> u16 {
        self.sequence
    }

    /// Returns the 48-bit node field value.
    pub const fn node(&self) -> u64 {
        self.node
    }

    /// Returns the timestamp as 100-nanosecond intervals since the Unix epoch, which is
    /// negative for a timestamp before 1970.
    pub const fn unix_ts_100ns(&self) -> i64 {
        self.raw_timestamp as i64 - UUID_EPOCH_OFFSET as i64
    }

    /// Returns the UUID consisting of the decoded fields.
    pub const fn uuid(&self) -> Uuid {
        Uuid::from_fields_v6(self.raw_timestamp, self.sequence, self.node)
    }

    /// Returns the timestamp as a [`SystemTime`](std::time::SystemTime), or `None` if the
    /// platform cannot represent it.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn timestamp(&self) -> Option<std::time::SystemTime> {
        use std::time::{Duration, UNIX_EPOCH};
        let ticks = self.unix_ts_100ns();
        let abs = ticks.unsigned_abs();
        let elapsed = Duration::new(abs / 10_000_000, (abs % 10_000_000) as u32 * 100);
        if ticks < 0 {
            UNIX_EPOCH.checked_sub(elapsed)
        } else {
            UNIX_EPOCH.checked_add(elapsed)
        }
    }
}

impl From<TimeOrderedView> for Uuid {
    fn from(src: TimeOrderedView) -> Self {
        src.uuid()
    }
}
