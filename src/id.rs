use crate::{MAX_NODE, MAX_SEQUENCE, MAX_TIMESTAMP};

/// Represents a Universally Unique IDentifier.
///
/// Equality and ordering compare the 16 bytes lexicographically as unsigned integers,
/// so the order of UUIDv6 values follows the order of their timestamps.
///
/// # Examples
///
/// ```rust
/// use uuid6::Uuid;
///
/// let x = "1EC3A5FB-6FE9-64D8-8004-C750087BF2DB".parse::<Uuid>()?;
/// assert_eq!(x.version(), Some(6));
/// assert_eq!(x.as_bytes()[..4], [0x1e, 0xc3, 0xa5, 0xfb]);
///
/// let y = Uuid::from(0x1ec3a5fb_6fe9_64d8_8004_c750087bf2dbu128);
/// assert_eq!(x, y);
/// # Ok::<(), uuid6::ParseError>(())
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[repr(transparent)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (FFFFFFFF-FFFF-FFFF-FFFF-FFFFFFFFFFFF)
    pub const MAX: Self = Self([0xff; 16]);

    /// Creates an object from a 16-byte big-endian byte array.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Creates an object from a byte slice, returning `None` unless the slice is exactly 16
    /// bytes long.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid6::Uuid;
    ///
    /// assert_eq!(Uuid::from_slice(&[0xff; 16]), Some(Uuid::MAX));
    /// assert_eq!(Uuid::from_slice(&[0xff; 15]), None);
    /// assert_eq!(Uuid::from_slice(&[0xff; 17]), None);
    /// ```
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        <[u8; 16]>::try_from(bytes).ok().map(Self)
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns the underlying byte array.
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Creates an object from a 128-bit unsigned integer.
    pub const fn from_u128(value: u128) -> Self {
        Self(value.to_be_bytes())
    }

    /// Returns the 128-bit unsigned integer representation.
    pub const fn to_u128(self) -> u128 {
        u128::from_be_bytes(self.0)
    }

    /// Creates a UUIDv6 object from field values without consulting the clock or the
    /// process-wide sequence counter.
    ///
    /// `raw_timestamp` counts 100-nanosecond intervals since the UUID epoch (1582-10-15).
    /// Each argument is truncated to the width of its field, i.e. 60, 14 and 48 bits. This
    /// is useful to build boundary values for range queries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid6::Uuid;
    ///
    /// let x = Uuid::from_fields_v6(0x1ec3a5fb6fe94d8, 0x0004, 0xc750087bf2db);
    /// assert_eq!(x.to_string(), "1EC3A5FB-6FE9-64D8-8004-C750087BF2DB");
    /// ```
    pub const fn from_fields_v6(raw_timestamp: u64, sequence: u16, node: u64) -> Self {
        let ts = raw_timestamp & MAX_TIMESTAMP;
        let seq = sequence & MAX_SEQUENCE;
        let node = node & MAX_NODE;

        Self([
            (ts >> 52) as u8,
            (ts >> 44) as u8,
            (ts >> 36) as u8,
            (ts >> 28) as u8,
            (ts >> 20) as u8,
            (ts >> 12) as u8,
            0x60 | ((ts >> 8) & 0x0f) as u8,
            ts as u8,
            0x80 | (seq >> 8) as u8,
            seq as u8,
            (node >> 40) as u8,
            (node >> 32) as u8,
            (node >> 24) as u8,
            (node >> 16) as u8,
            (node >> 8) as u8,
            node as u8,
        ])
    }

    /// Reports the variant field value of the UUID.
    ///
    /// Nil and Max UUIDs are reported as [`Variant::Var0`] and [`Variant::VarReserved`]
    /// respectively.
    pub const fn variant(&self) -> Variant {
        match self.0[8] >> 4 {
            0b0000..=0b0111 => Variant::Var0,
            0b1000..=0b1011 => Variant::Var10,
            0b1100..=0b1101 => Variant::Var110,
            _ => Variant::VarReserved,
        }
    }

    /// Returns the version field value of the UUID or `None` if the UUID does not have the
    /// variant field value of `10`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid6::Uuid;
    ///
    /// assert_eq!(uuid6::uuid4().version(), Some(4));
    /// assert_eq!(uuid6::uuid6().version(), Some(6));
    /// assert_eq!(Uuid::NIL.version(), None);
    /// ```
    pub const fn version(&self) -> Option<u8> {
        match self.variant() {
            Variant::Var10 => Some(self.0[6] >> 4),
            _ => None,
        }
    }
}

/// Represents the variant field value of a UUID.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[non_exhaustive]
pub enum Variant {
    /// The variant field value `0`, reserved for NCS backward compatibility.
    Var0,

    /// The variant field value `10`, used by every UUID this library generates.
    Var10,

    /// The variant field value `110`, reserved for Microsoft backward compatibility.
    Var110,

    /// The reserved variant field value `111`.
    VarReserved,
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        src.to_u128()
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self::from_u128(src)
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::Uuid;
    use core::fmt;
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        /// Serializes the object as the canonical string representation.
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.encode())
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        /// Deserializes an object from any string representation accepted by the parser.
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_str(VisitorImpl)
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID string representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Uuid::try_from_str(value).map_err(de::Error::custom)
        }
    }

}
