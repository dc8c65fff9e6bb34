//! The 128-bit identifier value type.

use crate::codec;
use crate::source::{self, RandomSource};
use crate::{UuidError, UuidResult};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// `hash_combine` mixing constant (the 32-bit golden ratio).
const HASH_MIX: u64 = 0x9e37_79b9;

/// One `hash_combine` step: shift-mixes the seed and folds in a chunk.
fn hash_combine(seed: u64, chunk: u64) -> u64 {
    seed ^ chunk
        .wrapping_add(HASH_MIX)
        .wrapping_add(seed << 6)
        .wrapping_add(seed >> 2)
}

/// A 128-bit universally unique identifier.
///
/// Sixteen bytes in RFC 4122 field order are the single source of truth;
/// the word views and the string form are derived from them losslessly.
/// Values are `Copy`, immutable after construction, and compare byte-wise
/// (byte 0 most significant), which gives a strict total order suitable for
/// sorting and deduplication.
///
/// # Construction
/// - [`Uuid::new`] draws 16 bytes from the OS entropy source.
/// - [`Uuid::from_bytes`] / [`Uuid::from_slice`] copy bytes verbatim.
/// - [`Uuid::from_words32`] / [`Uuid::from_words64`] reinterpret words in
///   native byte order.
/// - [`Uuid::parse_str`] / [`Uuid::parse_lenient`] validate text input;
///   [`Uuid::parse_unchecked`] trades validation for speed.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// The distinguished all-zero identifier.
    pub const NULL: Uuid = Uuid([0; 16]);

    /// Generates a new identifier from the OS entropy source.
    ///
    /// Uniqueness rests on the entropy source; a collision across any
    /// realistic number of generated values is vanishingly unlikely, and
    /// the all-zero value is never deliberately produced.
    pub fn new() -> Self {
        Self(source::os_identifier_bytes())
    }

    /// Generates a new identifier from a caller-supplied source.
    ///
    /// Any [`rand::RngCore`] qualifies as a [`RandomSource`]. The bytes are
    /// stored as delivered; sources emitting little-endian GUID fields must
    /// go through [`Uuid::from_guid_fields`] instead.
    pub fn from_source<S: RandomSource>(src: &mut S) -> Self {
        let mut bytes = [0u8; 16];
        src.fill_identifier(&mut bytes);
        Self(bytes)
    }

    /// Creates an identifier from 16 bytes, copied verbatim.
    #[inline]
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Creates an identifier from a byte slice.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidLength`] if `slice` is not exactly
    /// 16 bytes.
    pub fn from_slice(slice: &[u8]) -> UuidResult<Self> {
        if slice.len() != 16 {
            return Err(UuidError::InvalidLength {
                expected: 16,
                actual: slice.len(),
            });
        }
        let mut bytes = [0u8; 16];
        bytes.copy_from_slice(slice);
        Ok(Self(bytes))
    }

    /// Creates an identifier by reinterpreting four 32-bit words.
    ///
    /// This is a raw native-endian memory view, not a semantic conversion:
    /// callers must supply words already holding the intended byte order.
    /// [`Uuid::to_words32`] is the exact inverse on the same platform.
    pub fn from_words32(words: [u32; 4]) -> Self {
        let mut bytes = [0u8; 16];
        for (i, word) in words.iter().enumerate() {
            bytes[i * 4..i * 4 + 4].copy_from_slice(&word.to_ne_bytes());
        }
        Self(bytes)
    }

    /// Creates an identifier by reinterpreting two 64-bit words.
    ///
    /// Same contract as [`Uuid::from_words32`]: a raw native-endian view.
    pub fn from_words64(words: [u64; 2]) -> Self {
        let mut bytes = [0u8; 16];
        for (i, word) in words.iter().enumerate() {
            bytes[i * 8..i * 8 + 8].copy_from_slice(&word.to_ne_bytes());
        }
        Self(bytes)
    }

    /// Creates an identifier from GUID-style fields, normalizing them into
    /// RFC 4122 field order.
    ///
    /// The first three fields are written big-endian into bytes 0..8
    /// regardless of host byte order, so output from platform generators
    /// that return those fields in native little-endian order lands in the
    /// canonical layout. Bytes 8..16 are copied as-is.
    pub fn from_guid_fields(d1: u32, d2: u16, d3: u16, d4: [u8; 8]) -> Self {
        let mut bytes = [0u8; 16];
        bytes[0..4].copy_from_slice(&d1.to_be_bytes());
        bytes[4..6].copy_from_slice(&d2.to_be_bytes());
        bytes[6..8].copy_from_slice(&d3.to_be_bytes());
        bytes[8..16].copy_from_slice(&d4);
        Self(bytes)
    }

    /// Returns the raw bytes.
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Consumes the identifier, returning its bytes.
    #[inline]
    #[must_use]
    pub const fn into_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Returns the bytes viewed as four native-endian 32-bit words.
    pub fn to_words32(&self) -> [u32; 4] {
        let mut words = [0u32; 4];
        for (i, word) in words.iter_mut().enumerate() {
            let mut chunk = [0u8; 4];
            chunk.copy_from_slice(&self.0[i * 4..i * 4 + 4]);
            *word = u32::from_ne_bytes(chunk);
        }
        words
    }

    /// Returns the bytes viewed as two native-endian 64-bit words.
    pub fn to_words64(&self) -> [u64; 2] {
        let mut words = [0u64; 2];
        for (i, word) in words.iter_mut().enumerate() {
            let mut chunk = [0u8; 8];
            chunk.copy_from_slice(&self.0[i * 8..i * 8 + 8]);
            *word = u64::from_ne_bytes(chunk);
        }
        words
    }

    /// Returns true if every byte is zero.
    pub fn is_null(&self) -> bool {
        self.0 == [0; 16]
    }

    /// Validates and parses the strict canonical form.
    ///
    /// Accepts exactly 36 characters, hyphens at offsets 8/13/18/23, hex
    /// digits (either case) everywhere else.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidInput`] if `input` is not strictly valid.
    pub fn parse_str(input: &str) -> UuidResult<Self> {
        codec::parse(input).map(Self)
    }

    /// Parses the strict canonical form without validating it first.
    ///
    /// # Contract
    ///
    /// `input` must already satisfy [`Uuid::is_valid`]. If it does not, the
    /// returned identifier holds unspecified bytes; the call is still
    /// memory-safe and never panics. This function never fails, so callers
    /// handling untrusted input must validate first or accept meaningless
    /// results.
    #[must_use]
    pub fn parse_unchecked(input: &str) -> Self {
        Self(codec::decode_unchecked(input))
    }

    /// Validates and parses the lenient form.
    ///
    /// Skips `{`, `}`, `-` and space anywhere in the input and requires
    /// exactly 32 hex digits to remain, in their original relative order.
    /// Any other character is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidInput`] on any other character or a
    /// remaining digit count other than 32.
    pub fn parse_lenient(input: &str) -> UuidResult<Self> {
        codec::parse_lenient(input).map(Self)
    }

    /// Returns true if `input` is a strictly valid canonical UUID string.
    pub fn is_valid(input: &str) -> bool {
        codec::is_valid(input)
    }

    /// Returns true if `input` is valid in the lenient form.
    pub fn is_valid_lenient(input: &str) -> bool {
        codec::is_valid_lenient(input)
    }

    /// Writes the canonical lowercase form into a fixed 36-byte buffer.
    ///
    /// This is the allocation-free encode; [`fmt::Display`] and
    /// [`write_uuid`](crate::write_uuid) go through it.
    pub fn encode_buf(&self, out: &mut [u8; 36]) {
        codec::encode(&self.0, out);
    }

    /// Mixes the 16 bytes into a single hash value.
    ///
    /// The bytes are folded in machine-word chunks (two 64-bit words on
    /// 64-bit targets, four 32-bit words on 32-bit targets, byte-by-byte
    /// elsewhere), each chunk combined into the accumulator with the
    /// `hash_combine` step `seed ^= chunk + 0x9e3779b9 + (seed << 6) +
    /// (seed >> 2)`. Deterministic for equal values.
    pub fn mix_hash(&self) -> u64 {
        match usize::BITS {
            64 => self
                .to_words64()
                .iter()
                .fold(0, |seed, &w| hash_combine(seed, w)),
            32 => self
                .to_words32()
                .iter()
                .fold(0, |seed, &w| hash_combine(seed, u64::from(w))),
            _ => self
                .0
                .iter()
                .fold(0, |seed, &b| hash_combine(seed, u64::from(b))),
        }
    }
}

impl Default for Uuid {
    /// Generates a fresh identifier, same as [`Uuid::new`].
    fn default() -> Self {
        Self::new()
    }
}

impl Hash for Uuid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.mix_hash());
    }
}

impl fmt::Display for Uuid {
    /// Formats the canonical lowercase hyphenated form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; codec::ENCODED_LEN];
        codec::encode(&self.0, &mut buf);
        // encode emits only ASCII hex digits and hyphens
        f.write_str(std::str::from_utf8(&buf).map_err(|_| fmt::Error)?)
    }
}

impl fmt::Debug for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uuid({})", self)
    }
}

impl FromStr for Uuid {
    type Err = UuidError;

    /// Parses the strict canonical form; equivalent to [`Uuid::parse_str`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
    }
}

impl TryFrom<&str> for Uuid {
    type Error = UuidError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Uuid::parse_str(s)
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(bytes: [u8; 16]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(uuid: Uuid) -> Self {
        uuid.0
    }
}

impl From<Uuid> for bool {
    /// Truthiness: the null identifier converts to `false`, every other
    /// value to `true`.
    fn from(uuid: Uuid) -> Self {
        !uuid.is_null()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Uuid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Uuid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Uuid::parse_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const CANONICAL: &str = "123e4567-e89b-12d3-a456-426655440000";

    fn sample_bytes() -> [u8; 16] {
        [
            0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc,
            0xdd, 0xee, 0xff,
        ]
    }

    #[test]
    fn test_new_is_not_null() {
        let uuid = Uuid::new();
        assert!(!uuid.is_null());
        assert!(bool::from(uuid));
    }

    #[test]
    fn test_new_generates_unique_values() {
        let mut uuids: Vec<Uuid> = (0..10_000).map(|_| Uuid::new()).collect();
        uuids.sort();
        let before = uuids.len();
        uuids.dedup();
        assert_eq!(uuids.len(), before);
    }

    #[test]
    #[ignore = "million-sample uniqueness sweep, run explicitly"]
    fn test_new_generates_unique_values_large() {
        let mut uuids: Vec<Uuid> = (0..1_000_000).map(|_| Uuid::new()).collect();
        uuids.sort();
        let before = uuids.len();
        uuids.dedup();
        assert_eq!(uuids.len(), before);
    }

    #[test]
    fn test_default_generates() {
        assert!(!Uuid::default().is_null());
    }

    #[test]
    fn test_from_source_injection() {
        let mut rng = rand::rngs::mock::StepRng::new(7, 11);
        let a = Uuid::from_source(&mut rng);
        let mut rng = rand::rngs::mock::StepRng::new(7, 11);
        let b = Uuid::from_source(&mut rng);
        assert_eq!(a, b);
    }

    #[test]
    fn test_null_semantics() {
        assert!(Uuid::NULL.is_null());
        assert!(!bool::from(Uuid::NULL));
        assert_eq!(Uuid::NULL, Uuid::from_bytes([0; 16]));
        assert_eq!(Uuid::NULL.to_string(), "00000000-0000-0000-0000-000000000000");
    }

    #[test]
    fn test_from_bytes_round_trip() {
        let uuid = Uuid::from_bytes(sample_bytes());
        assert_eq!(*uuid.as_bytes(), sample_bytes());
        assert_eq!(uuid.into_bytes(), sample_bytes());
    }

    #[test]
    fn test_from_slice_lengths() {
        assert!(Uuid::from_slice(&sample_bytes()).is_ok());
        assert!(matches!(
            Uuid::from_slice(&[0u8; 15]),
            Err(UuidError::InvalidLength { expected: 16, actual: 15 })
        ));
        assert!(Uuid::from_slice(&[0u8; 17]).is_err());
    }

    #[test]
    fn test_word_constructions_are_equivalent() {
        let bytes = sample_bytes();

        let mut words32 = [0u32; 4];
        for (i, word) in words32.iter_mut().enumerate() {
            let mut chunk = [0u8; 4];
            chunk.copy_from_slice(&bytes[i * 4..i * 4 + 4]);
            *word = u32::from_ne_bytes(chunk);
        }
        let mut words64 = [0u64; 2];
        for (i, word) in words64.iter_mut().enumerate() {
            let mut chunk = [0u8; 8];
            chunk.copy_from_slice(&bytes[i * 8..i * 8 + 8]);
            *word = u64::from_ne_bytes(chunk);
        }

        let from_bytes = Uuid::from_bytes(bytes);
        let from_32 = Uuid::from_words32(words32);
        let from_64 = Uuid::from_words64(words64);

        assert_eq!(from_bytes, from_32);
        assert_eq!(from_bytes, from_64);
        assert_eq!(from_32.to_words32(), words32);
        assert_eq!(from_64.to_words64(), words64);
    }

    #[test]
    fn test_guid_fields_normalize_to_big_endian() {
        let uuid = Uuid::from_guid_fields(
            0x123e4567,
            0xe89b,
            0x12d3,
            [0xa4, 0x56, 0x42, 0x66, 0x14, 0x17, 0x40, 0x00],
        );
        assert_eq!(uuid.to_string(), "123e4567-e89b-12d3-a456-426614174000");
    }

    #[test]
    fn test_display_round_trip() {
        let uuid = Uuid::parse_str(CANONICAL).unwrap();
        assert_eq!(uuid.to_string(), CANONICAL);
    }

    #[test]
    fn test_display_lowercases_input() {
        let uuid = Uuid::parse_str("A1234567-E89B-12D3-A456-426655440000").unwrap();
        assert_eq!(uuid.to_string(), "a1234567-e89b-12d3-a456-426655440000");
    }

    #[test]
    fn test_encode_buf_matches_display() {
        let uuid = Uuid::new();
        let mut buf = [0u8; 36];
        uuid.encode_buf(&mut buf);
        assert_eq!(std::str::from_utf8(&buf).unwrap(), uuid.to_string());
    }

    #[test]
    fn test_validity_oracle() {
        assert!(Uuid::is_valid("123e4567-e89b-12d3-a456-426655440000"));
        assert!(Uuid::is_valid("A1234567-E89B-12D3-A456-426655440000"));
        assert!(!Uuid::is_valid(""));
        assert!(!Uuid::is_valid("123e4567e89b12d3a456426655440000"));
        assert!(!Uuid::is_valid("123e4567-e89b-12d3-a456-42665544000"));
        assert!(!Uuid::is_valid("123e4567-e89b-12d3-a456-42665544000g"));
        assert!(!Uuid::is_valid("123e4567_e89b_12d3_a456_426655440000"));
    }

    #[test]
    fn test_parse_unchecked_after_validation() {
        assert!(Uuid::is_valid(CANONICAL));
        let fast = Uuid::parse_unchecked(CANONICAL);
        let checked = Uuid::parse_str(CANONICAL).unwrap();
        assert_eq!(fast, checked);
    }

    #[test]
    fn test_parse_lenient_forms() {
        let expected = Uuid::parse_str("123e4567-e89b-12d3-a456-426614174000").unwrap();
        let braced = Uuid::parse_lenient("{123e4567-e89b-12d3-a456-426614174000}").unwrap();
        let spaced = Uuid::parse_lenient("123e4567 e89b 12d3 a456 426614174000").unwrap();
        assert_eq!(braced, expected);
        assert_eq!(spaced, expected);
    }

    #[test]
    fn test_from_str_and_try_from() {
        let parsed: Uuid = CANONICAL.parse().unwrap();
        let converted = Uuid::try_from(CANONICAL).unwrap();
        assert_eq!(parsed, converted);
        assert!("not-a-uuid".parse::<Uuid>().is_err());
    }

    #[test]
    fn test_ordering_trichotomy() {
        let a = Uuid::from_bytes([0; 16]);
        let b = Uuid::from_bytes([1; 16]);
        assert!(a < b);
        assert!(!(b < a));

        for _ in 0..1_000 {
            let x = Uuid::new();
            let y = Uuid::new();
            let byte_order = x.as_bytes().cmp(y.as_bytes());
            assert_eq!(x.cmp(&y), byte_order);
        }
    }

    #[test]
    fn test_ordering_most_significant_byte_first() {
        let mut low = [0u8; 16];
        low[15] = 0xff;
        let mut high = [0u8; 16];
        high[0] = 0x01;
        assert!(Uuid::from_bytes(low) < Uuid::from_bytes(high));
    }

    #[test]
    fn test_mix_hash_deterministic() {
        let a = Uuid::parse_str(CANONICAL).unwrap();
        let b = Uuid::parse_str(CANONICAL).unwrap();
        assert_eq!(a.mix_hash(), b.mix_hash());
        assert_ne!(a.mix_hash(), Uuid::NULL.mix_hash());
    }

    #[test]
    fn test_hash_set_cardinality() {
        let set: HashSet<Uuid> = (0..100_000).map(|_| Uuid::new()).collect();
        assert_eq!(set.len(), 100_000);
    }

    #[test]
    #[ignore = "ten-million-sample hash-set trial, run explicitly"]
    fn test_hash_set_cardinality_large() {
        let set: HashSet<Uuid> = (0..10_000_000).map(|_| Uuid::new()).collect();
        assert_eq!(set.len(), 10_000_000);
    }

    #[test]
    fn test_debug_format_contains_value() {
        let uuid = Uuid::parse_str(CANONICAL).unwrap();
        assert_eq!(format!("{:?}", uuid), format!("Uuid({})", CANONICAL));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let uuid = Uuid::parse_str(CANONICAL).unwrap();
        let json = serde_json::to_string(&uuid).unwrap();
        assert_eq!(json, format!("\"{}\"", CANONICAL));
        let back: Uuid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, uuid);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_invalid() {
        let result: Result<Uuid, _> = serde_json::from_str("\"not-a-uuid\"");
        assert!(result.is_err());
    }
}
