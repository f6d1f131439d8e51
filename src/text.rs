//! Textual representation of UUIDs.

#[cfg(not(feature = "std"))]
use core as std;

use crate::Uuid;
use fstr::FStr;
use std::{fmt, ops, str};

/// Digit characters used in the uppercase hexadecimal notation.
const DIGITS_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Digit characters used in the lowercase hexadecimal notation.
const DIGITS_LOWER: &[u8; 16] = b"0123456789abcdef";

/// An O(1) map from ASCII code points to hexadecimal digit values.
const DECODE_MAP: [u8; 256] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
];

/// Options that control the string representation produced by [`Uuid::encode_with()`].
///
/// The default format is the uppercase 8-4-4-4-12 representation.
///
/// # Examples
///
/// ```rust
/// use uuid6::{Format, Uuid};
///
/// let x = Uuid::from(0x1ec3a5fb_6fe9_64d8_8004_c750087bf2dbu128);
/// assert_eq!(&x.encode_with(Format::new()) as &str, "1EC3A5FB-6FE9-64D8-8004-C750087BF2DB");
/// assert_eq!(
///     &x.encode_with(Format::new().lowercase(true)) as &str,
///     "1ec3a5fb-6fe9-64d8-8004-c750087bf2db"
/// );
/// assert_eq!(
///     &x.encode_with(Format::new().separators(false)) as &str,
///     "1EC3A5FB6FE964D88004C750087BF2DB"
/// );
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Format {
    lowercase: bool,
    separators: bool,
}

impl Format {
    /// Returns the default format: uppercase digits grouped 8-4-4-4-12 with hyphens.
    pub const fn new() -> Self {
        Self {
            lowercase: false,
            separators: true,
        }
    }

    /// Selects lowercase (`true`) or uppercase (`false`) hexadecimal digits.
    pub const fn lowercase(self, lowercase: bool) -> Self {
        Self { lowercase, ..self }
    }

    /// Selects whether to insert hyphens between the 8-4-4-4-12 groups.
    pub const fn separators(self, separators: bool) -> Self {
        Self { separators, ..self }
    }
}

impl Default for Format {
    fn default() -> Self {
        Self::new()
    }
}

impl Uuid {
    /// Creates an object from a hexadecimal string representation.
    ///
    /// The parser accepts 32 hexadecimal digits in either case, optionally enclosed in a
    /// pair of curly braces, with any number of hyphens placed before any pair of digits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid6::Uuid;
    ///
    /// let x = Uuid::try_from_str("1EC3A5FB-6FE9-64D8-8004-C750087BF2DB")?;
    /// let y = Uuid::try_from_str("{1ec3a5fb6fe964d8-8004-c750-087b-f2db}")?;
    /// let z = Uuid::try_from_str("1e-c3-a5-fb-6f-e9-64-d8-80-04-c7-50-08-7b-f2-db")?;
    /// assert_eq!(x, y);
    /// assert_eq!(x, z);
    ///
    /// assert!(Uuid::try_from_str("{1EC3A5FB-6FE9-64D8-8004-C750087BF2DB").is_err());
    /// assert!(Uuid::try_from_str("1EC3A5FB-6FE9-64D8-8004-C750087BF2DB-").is_err());
    /// # Ok::<(), uuid6::ParseError>(())
    /// ```
    pub const fn try_from_str(src: &str) -> Result<Self, ParseError> {
        let bs = src.as_bytes();
        let mut i = 0;
        let mut end = bs.len();

        let has_open = end > 0 && bs[0] == b'{';
        let has_close = end > 0 && bs[end - 1] == b'}';
        if has_open != has_close {
            return Err(ParseError::unmatched_brace());
        } else if has_open {
            i = 1;
            end -= 1;
        }

        let mut dst = [0u8; 16];
        let mut n = 0;
        while n < dst.len() {
            while i < end && bs[i] == b'-' {
                i += 1;
            }

            let mut byte = 0u8;
            let mut j = 0;
            while j < 2 {
                if i >= end {
                    return Err(ParseError::unexpected_end(i));
                }
                let digit = DECODE_MAP[bs[i] as usize];
                if digit == 0xff {
                    return Err(ParseError::invalid_digit(src, i));
                }
                byte = (byte << 4) | digit;
                i += 1;
                j += 1;
            }

            dst[n] = byte;
            n += 1;
        }

        if i < end {
            Err(ParseError::trailing_data(i))
        } else {
            Ok(Self::from_bytes(dst))
        }
    }

    /// Returns the canonical 8-4-4-4-12 uppercase hexadecimal string representation stored
    /// in a stack-allocated string-like type that can be handled like [`String`] through
    /// common traits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid6::Uuid;
    ///
    /// let x = "1ec3a5fb-6fe9-64d8-8004-c750087bf2db".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(y, "1EC3A5FB-6FE9-64D8-8004-C750087BF2DB");
    /// assert_eq!(format!("{}", y), "1EC3A5FB-6FE9-64D8-8004-C750087BF2DB");
    /// # Ok::<(), uuid6::ParseError>(())
    /// ```
    pub const fn encode(&self) -> FStr<36> {
        self.encode_hyphenated(DIGITS_UPPER)
    }

    /// Returns the string representation in the specified [`Format`].
    pub const fn encode_with(&self, format: Format) -> EncodedUuid {
        let digits = if format.lowercase {
            DIGITS_LOWER
        } else {
            DIGITS_UPPER
        };

        if format.separators {
            EncodedUuid(Repr::Hyphenated(self.encode_hyphenated(digits)))
        } else {
            EncodedUuid(Repr::Simple(self.encode_simple(digits)))
        }
    }

    const fn encode_hyphenated(&self, digits: &[u8; 16]) -> FStr<36> {
        let src = self.as_bytes();
        let mut dst = [0u8; 36];
        let mut i = 0;
        let mut j = 0;
        while i < 16 {
            dst[j] = digits[(src[i] >> 4) as usize];
            dst[j + 1] = digits[(src[i] & 15) as usize];
            j += 2;
            if i == 3 || i == 5 || i == 7 || i == 9 {
                dst[j] = b'-';
                j += 1;
            }
            i += 1;
        }

        // SAFETY: All bytes in `dst` are valid ASCII characters.
        unsafe { FStr::from_inner_unchecked(dst) }
    }

    const fn encode_simple(&self, digits: &[u8; 16]) -> FStr<32> {
        let src = self.as_bytes();
        let mut dst = [0u8; 32];
        let mut i = 0;
        while i < 16 {
            dst[i * 2] = digits[(src[i] >> 4) as usize];
            dst[i * 2 + 1] = digits[(src[i] & 15) as usize];
            i += 1;
        }

        // SAFETY: All bytes in `dst` are valid ASCII characters.
        unsafe { FStr::from_inner_unchecked(dst) }
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from a hexadecimal string representation.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::try_from_str(src)
    }
}

impl TryFrom<&str> for Uuid {
    type Error = ParseError;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        Self::try_from_str(src)
    }
}

impl fmt::Display for Uuid {
    /// Returns the canonical 8-4-4-4-12 uppercase hexadecimal string representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid6::Uuid;
    ///
    /// let x = Uuid::from(0x1ec3a5fb_6fe9_64d8_8004_c750087bf2dbu128);
    /// assert_eq!(format!("{}", x), "1EC3A5FB-6FE9-64D8-8004-C750087BF2DB");
    /// assert_eq!(format!("{:>40}", x), "    1EC3A5FB-6FE9-64D8-8004-C750087BF2DB");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.encode().as_str(), f)
    }
}

impl fmt::LowerHex for Uuid {
    /// Returns the lowercase 8-4-4-4-12 representation, or the 32-digit one without hyphens
    /// if the alternate flag is specified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid6::Uuid;
    ///
    /// let x = Uuid::from(0x1ec3a5fb_6fe9_64d8_8004_c750087bf2dbu128);
    /// assert_eq!(format!("{:x}", x), "1ec3a5fb-6fe9-64d8-8004-c750087bf2db");
    /// assert_eq!(format!("{:#x}", x), "1ec3a5fb6fe964d88004c750087bf2db");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format = Format::new().lowercase(true).separators(!f.alternate());
        f.pad(&self.encode_with(format))
    }
}

impl fmt::UpperHex for Uuid {
    /// Returns the uppercase 8-4-4-4-12 representation, or the 32-digit one without hyphens
    /// if the alternate flag is specified.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format = Format::new().separators(!f.alternate());
        f.pad(&self.encode_with(format))
    }
}

/// Concrete return type of [`Uuid::encode_with()`] containing a stack-allocated string
/// representation that can be dereferenced as `str` and [`Display`](fmt::Display)ed.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct EncodedUuid(Repr);

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
enum Repr {
    Hyphenated(FStr<36>),
    Simple(FStr<32>),
}

impl EncodedUuid {
    /// Returns a string slice of the representation.
    pub fn as_str(&self) -> &str {
        match &self.0 {
            Repr::Hyphenated(e) => e.as_str(),
            Repr::Simple(e) => e.as_str(),
        }
    }
}

impl ops::Deref for EncodedUuid {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for EncodedUuid {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for EncodedUuid {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for EncodedUuid {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for EncodedUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

/// An error parsing an invalid string representation of UUID.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseError {
    kind: ParseErrorKind,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
enum ParseErrorKind {
    UnmatchedBrace,
    InvalidDigit {
        /// Holds the invalid character as a UTF-8 byte array to work in the const context.
        utf8_char: [u8; 4],
        position: usize,
    },
    UnexpectedEnd {
        position: usize,
    },
    TrailingData {
        position: usize,
    },
}

impl ParseError {
    /// Creates an `UnmatchedBrace` variant.
    const fn unmatched_brace() -> Self {
        Self {
            kind: ParseErrorKind::UnmatchedBrace,
        }
    }

    /// Creates an `InvalidDigit` variant from the entire string and the position of invalid
    /// digit.
    ///
    /// `position` must be at a character boundary.
    const fn invalid_digit(src: &str, position: usize) -> Self {
        const fn is_char_boundary(utf8_bytes: &[u8], index: usize) -> bool {
            match index {
                0 => true,
                i if i < utf8_bytes.len() => (utf8_bytes[i] as i8) >= -64,
                _ => index == utf8_bytes.len(),
            }
        }

        let bs = src.as_bytes();
        let mut utf8_char = [bs[position], 0, 0, 0];

        let mut i = 1;
        while i < 4 && !is_char_boundary(bs, position + i) {
            utf8_char[i] = bs[position + i];
            i += 1;
        }

        Self {
            kind: ParseErrorKind::InvalidDigit {
                utf8_char,
                position,
            },
        }
    }

    /// Creates an `UnexpectedEnd` variant.
    const fn unexpected_end(position: usize) -> Self {
        Self {
            kind: ParseErrorKind::UnexpectedEnd { position },
        }
    }

    /// Creates a `TrailingData` variant.
    const fn trailing_data(position: usize) -> Self {
        Self {
            kind: ParseErrorKind::TrailingData { position },
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not parse string as UUID: ")?;
        match self.kind {
            ParseErrorKind::UnmatchedBrace => write!(f, "unmatched curly brace"),
            ParseErrorKind::InvalidDigit {
                utf8_char,
                position,
            } => {
                let chr = str::from_utf8(&utf8_char)
                    .ok()
                    .and_then(|s| s.chars().next())
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                write!(f, "invalid digit '{}' at {}", chr.escape_debug(), position)
            }
            ParseErrorKind::UnexpectedEnd { position } => {
                write!(f, "unexpected end of input at {}", position)
            }
            ParseErrorKind::TrailingData { position } => {
                write!(f, "unexpected trailing data at {}", position)
            }
        }
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod std_ext {
    use super::{ParseError, Uuid};

    impl From<Uuid> for String {
        fn from(src: Uuid) -> Self {
            src.encode().into()
        }
    }

    impl TryFrom<String> for Uuid {
        type Error = ParseError;

        fn try_from(src: String) -> Result<Self, Self::Error> {
            Self::try_from_str(&src)
        }
    }

    impl std::error::Error for ParseError {}
}

#[cfg(test)]
mod tests {
    use super::{Format, Uuid};

    /// Returns a collection of prepared cases
    fn prepare_cases() -> &'static [([u8; 16], &'static str)] {
        &[
            ([0x00; 16], "00000000-0000-0000-0000-000000000000"),
            ([0xff; 16], "FFFFFFFF-FFFF-FFFF-FFFF-FFFFFFFFFFFF"),
            (
                [
                    0x1e, 0xc3, 0xa5, 0xfb, 0x6f, 0xe9, 0x64, 0xd8, 0x80, 0x04, 0xc7, 0x50, 0x08,
                    0x7b, 0xf2, 0xdb,
                ],
                "1EC3A5FB-6FE9-64D8-8004-C750087BF2DB",
            ),
            (
                [
                    0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0xfe, 0xdc, 0xba, 0x98, 0x76,
                    0x54, 0x32, 0x10,
                ],
                "01234567-89AB-CDEF-FEDC-BA9876543210",
            ),
            (
                [
                    0x2c, 0xa4, 0xb2, 0xce, 0x6c, 0x13, 0x40, 0xd4, 0xbc, 0xcf, 0x37, 0xd2, 0x22,
                    0x82, 0x0f, 0x6f,
                ],
                "2CA4B2CE-6C13-40D4-BCCF-37D222820F6F",
            ),
        ]
    }

    /// Encodes and decodes prepared cases correctly
    #[test]
    fn encodes_and_decodes_prepared_cases_correctly() {
        for (bytes, text) in prepare_cases() {
            let e = Uuid::from(*bytes);
            assert_eq!(Ok(e), text.parse());
            assert_eq!(Ok(e), text.to_lowercase().parse());
            assert_eq!(&e.encode() as &str, *text);
            assert_eq!(&e.encode_with(Format::default()) as &str, *text);
            assert_eq!(&e.to_string(), text);
            assert_eq!(&String::from(e), text);
            assert_eq!(format!("{:X}", e), *text);
            assert_eq!(format!("{:x}", e), text.to_lowercase());
            assert_eq!(format!("{:#X}", e), text.replace('-', ""));
            assert_eq!(format!("{:#x}", e), text.to_lowercase().replace('-', ""));
            #[cfg(feature = "uuid")]
            assert_eq!(uuid::Uuid::from(e).to_string(), text.to_lowercase());
        }
    }

    /// Decodes the worked example into expected bytes
    #[test]
    fn decodes_the_worked_example_into_expected_bytes() {
        let text = "1EC3A5FB-6FE9-64D8-8004-C750087BF2DB";
        let e = text.parse::<Uuid>().unwrap();
        assert_eq!(
            e.as_bytes(),
            &[
                0x1E, 0xC3, 0xA5, 0xFB, 0x6F, 0xE9, 0x64, 0xD8, 0x80, 0x04, 0xC7, 0x50, 0x08, 0x7B,
                0xF2, 0xDB
            ]
        );
        assert_eq!(e.encode(), text);
    }

    /// Formats in every combination of options
    #[test]
    fn formats_in_every_combination_of_options() {
        let e = Uuid::from(0x1ec3a5fb_6fe9_64d8_8004_c750087bf2dbu128);
        let cases = [
            (false, true, "1EC3A5FB-6FE9-64D8-8004-C750087BF2DB"),
            (true, true, "1ec3a5fb-6fe9-64d8-8004-c750087bf2db"),
            (false, false, "1EC3A5FB6FE964D88004C750087BF2DB"),
            (true, false, "1ec3a5fb6fe964d88004c750087bf2db"),
        ];

        for (lowercase, separators, text) in cases {
            let format = Format::new().lowercase(lowercase).separators(separators);
            let encoded = e.encode_with(format);
            assert_eq!(encoded, text);
            assert_eq!(encoded.len(), if separators { 36 } else { 32 });
            assert_eq!(encoded.to_string(), text);
            assert_eq!(text.parse(), Ok(e));
        }
    }

    /// Round-trips random values in every format
    #[test]
    fn round_trips_random_values_in_every_format() {
        use rand::RngCore;

        let mut rng = rand::thread_rng();
        for _ in 0..10_000 {
            let mut bytes = [0u8; 16];
            rng.fill_bytes(&mut bytes);
            let e = Uuid::from(bytes);
            for lowercase in [false, true] {
                for separators in [false, true] {
                    let format = Format::new().lowercase(lowercase).separators(separators);
                    assert_eq!(e.encode_with(format).parse(), Ok(e));
                }
            }
        }
    }

    /// Accepts braces and extra hyphens anywhere between digit pairs
    #[test]
    fn accepts_braces_and_extra_hyphens_anywhere_between_digit_pairs() {
        let expected = Uuid::from(0x1ec3a5fb_6fe9_64d8_8004_c750087bf2dbu128);
        let cases = [
            "1ec3a5fb6fe964d88004c750087bf2db",
            "{1EC3A5FB-6FE9-64D8-8004-C750087BF2DB}",
            "{1ec3a5fb6fe964d88004c750087bf2db}",
            "-1EC3A5FB-6FE9-64D8-8004-C750087BF2DB",
            "--1EC3A5FB--6FE9--64D8--8004--C750087BF2DB",
            "1E-C3-A5-FB-6F-E9-64-D8-80-04-C7-50-08-7B-F2-DB",
            "1EC3-A5FB-6FE9-64D8-8004-C750-087B-F2DB",
            "{---1Ec3A5fB6fE964D88004C750087bF2dB}",
            "1EC3A5FB6FE964D8-------------8004C750087BF2DB",
        ];

        for e in cases {
            assert_eq!(e.parse::<Uuid>(), Ok(expected), "{}", e);
        }
    }

    /// Returns error to invalid string representation
    #[test]
    fn returns_error_to_invalid_string_representation() {
        let cases = [
            "",
            "{}",
            "-",
            "{",
            "}",
            " 1EC3A5FB-6FE9-64D8-8004-C750087BF2DB",
            "1EC3A5FB-6FE9-64D8-8004-C750087BF2DB ",
            "+1EC3A5FB-6FE9-64D8-8004-C750087BF2DB",
            "1EC3A5FB-6FE9-64D8-8004-C750087BF2D",
            "1EC3A5FB-6FE9-64D8-8004-C750087BF2DB0",
            "1EC3A5FB-6FE9-64D8-8004-C750087BF2DB00",
            "1EC3A5FB-6FE9-64D8-8004-C750087BF2DB-",
            "1EC3A5FB-6FE9-64D8-8004-C750087BF2-D",
            "1-EC3A5FB-6FE9-64D8-8004-C750087BF2DB",
            "{1EC3A5FB-6FE9-64D8-8004-C750087BF2DB",
            "1EC3A5FB-6FE9-64D8-8004-C750087BF2DB}",
            "{{1EC3A5FB-6FE9-64D8-8004-C750087BF2DB}}",
            "[1EC3A5FB-6FE9-64D8-8004-C750087BF2DB]",
            "(1EC3A5FB-6FE9-64D8-8004-C750087BF2DB)",
            "1EC3A5FB-6FE9-64 8-8004-C750087BF2DB",
            "1EC3A5FG-6FE9-64D8-8004-C750087BF2DB",
            "1EC3A5FB-6FE9-64D8-8004_C750087BF2DB",
            "1EC3A5FB-6FE9-64D8-8004-C750087BF2DÉ",
            "1EC3A5FB:6FE9:64D8:8004:C750087BF2DB",
            "0x1EC3A5FB6FE964D88004C750087BF2DB",
        ];

        for e in cases {
            assert!(e.parse::<Uuid>().is_err(), "{}", e);
            assert_eq!(Uuid::try_from(e).ok(), None);
        }
    }

    /// Reports position and reason of parse error
    #[test]
    fn reports_position_and_reason_of_parse_error() {
        let cases = [
            (
                "{1EC3A5FB-6FE9-64D8-8004-C750087BF2DB",
                "could not parse string as UUID: unmatched curly brace",
            ),
            (
                "1EC3A5FB-6FE9-64D8-8004_C750087BF2DB",
                "could not parse string as UUID: invalid digit '_' at 23",
            ),
            (
                "1EC3A5FB-6FE9-64D8-8004-C750087BF2DÉ",
                "could not parse string as UUID: invalid digit 'É' at 35",
            ),
            (
                "{1EC3A5FB-6FE9-64D8-8004-C750087BF2D}",
                "could not parse string as UUID: unexpected end of input at 36",
            ),
            (
                "1EC3A5FB-6FE9-64D8-8004-C750087BF2DB-",
                "could not parse string as UUID: unexpected trailing data at 36",
            ),
        ];

        for (text, message) in cases {
            assert_eq!(text.parse::<Uuid>().unwrap_err().to_string(), message);
        }
    }

    /// Has symmetric converters
    #[test]
    fn has_symmetric_converters() {
        for (bytes, _) in prepare_cases() {
            let e = Uuid::from(*bytes);
            assert_eq!(Uuid::try_from(String::from(e)), Ok(e));
            assert_eq!(Uuid::try_from(e.to_string().to_lowercase()), Ok(e));
            assert_eq!(Uuid::try_from(&*e.encode()), Ok(e));
        }
    }
}
