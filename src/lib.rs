//! A 128-bit universally unique identifier as a plain value type.
//!
//! The identifier is a fixed array of 16 bytes; every other representation
//! (the hyphenated string, the 4×u32 and 2×u64 word views) is a lossless
//! reinterpretation of those bytes.
//!
//! This crate provides:
//! - A small value type ([`Uuid`]) backed by OS entropy on generation.
//! - A zero-allocation codec for the canonical string form, plus a lenient
//!   parser tolerant of braces, spaces and stray hyphens, and an unchecked
//!   fast parser for pre-validated input.
//! - Byte-wise equality, ordering, and a `hash_combine`-mixed hash so the
//!   type works well as a hash-table key.
//! - Whitespace-delimited token reading/writing over `std::io`.
//!
//! ## Canonical string form
//! - Length: 36
//! - Layout: `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` (hyphens at offsets
//!   8, 13, 18 and 23)
//! - Output is always lowercase; input accepts mixed case.
//! - Example: `123e4567-e89b-12d3-a456-426614174000`
//!
//! Notes:
//! - Validating entry points ([`Uuid::parse_str`], [`FromStr`],
//!   [`Uuid::parse_lenient`]) fail with [`UuidError::InvalidInput`] rather
//!   than producing a garbage identifier.
//! - [`Uuid::parse_unchecked`] never fails; on unvalidated input it yields
//!   unspecified (but memory-safe) bytes. Use it only after
//!   [`Uuid::is_valid`].
//! - The bytes are stored in RFC 4122 field order. Output from generators
//!   that return the first three fields little-endian must go through
//!   [`Uuid::from_guid_fields`].
//!
//! [`FromStr`]: std::str::FromStr

mod codec;
mod source;
mod stream;
mod uuid;

// Re-export public types
pub use source::RandomSource;
pub use stream::{read_uuid, write_uuid};
pub use uuid::Uuid;

/// Error type for UUID operations.
#[derive(Debug, thiserror::Error)]
pub enum UuidError {
    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// A byte buffer had the wrong length
    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    /// Reading a token from a stream failed
    #[error("Failed to read UUID token: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for UUID operations.
pub type UuidResult<T> = Result<T, UuidError>;
