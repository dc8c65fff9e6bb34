//! String codec for the canonical and lenient UUID forms.
//!
//! Both directions are table-driven: a 16-entry table maps nibbles to
//! lowercase hex digits on encode, and a 256-entry table maps input bytes
//! back to nibbles on decode (non-hex bytes map to a sentinel). The tables
//! are `const`, built at compile time, and never mutated.

use crate::{UuidError, UuidResult};

/// Length of the canonical hyphenated form.
pub(crate) const ENCODED_LEN: usize = 36;

/// Number of hex digits carried by either textual form.
const HEX_DIGITS: usize = 32;

/// Sentinel in [`HEX_NIBBLE`] for bytes that are not hex digits.
const INVALID_NIBBLE: u8 = 0xff;

/// Nibble-to-lowercase-digit encode table.
const HEX_LOWER: &[u8; 16] = b"0123456789abcdef";

/// Byte-to-nibble decode table; accepts both cases.
const HEX_NIBBLE: [u8; 256] = build_nibble_table();

/// Offset of the first hex digit of each byte in the canonical form.
/// The second digit always sits at `offset + 1`.
const BYTE_OFFSETS: [usize; 16] = [
    0, 2, 4, 6, 9, 11, 14, 16, 19, 21, 24, 26, 28, 30, 32, 34,
];

const fn build_nibble_table() -> [u8; 256] {
    let mut table = [INVALID_NIBBLE; 256];
    let mut b = 0;
    while b < 256 {
        let c = b as u8;
        table[b] = match c {
            b'0'..=b'9' => c - b'0',
            b'a'..=b'f' => c - b'a' + 10,
            b'A'..=b'F' => c - b'A' + 10,
            _ => INVALID_NIBBLE,
        };
        b += 1;
    }
    table
}

/// True for characters the lenient parser skips over.
fn is_ignorable(b: u8) -> bool {
    matches!(b, b'{' | b'}' | b'-' | b' ')
}

/// Writes the canonical lowercase form of `bytes` into `out`.
pub(crate) fn encode(bytes: &[u8; 16], out: &mut [u8; ENCODED_LEN]) {
    let mut i = 0;
    for (idx, &byte) in bytes.iter().enumerate() {
        out[i] = HEX_LOWER[(byte >> 4) as usize];
        out[i + 1] = HEX_LOWER[(byte & 0x0f) as usize];
        i += 2;
        // Hyphens follow bytes 3, 5, 7 and 9 (string offsets 8/13/18/23).
        if idx == 3 || idx == 5 || idx == 7 || idx == 9 {
            out[i] = b'-';
            i += 1;
        }
    }
}

/// Returns true if `input` is a strictly valid canonical UUID string:
/// exactly 36 bytes, hyphens at offsets 8/13/18/23, hex digits (either
/// case) everywhere else.
pub(crate) fn is_valid(input: &str) -> bool {
    let bytes = input.as_bytes();
    if bytes.len() != ENCODED_LEN {
        return false;
    }
    for (i, &b) in bytes.iter().enumerate() {
        match i {
            8 | 13 | 18 | 23 => {
                if b != b'-' {
                    return false;
                }
            }
            _ => {
                if HEX_NIBBLE[b as usize] == INVALID_NIBBLE {
                    return false;
                }
            }
        }
    }
    true
}

/// Decodes `input` assuming it already passed [`is_valid`].
///
/// Reads the 32 hex digits at their fixed offsets and pairs them into
/// bytes. If `input` is not strictly valid the returned bytes are
/// unspecified; reads are clamped to the input length, so the worst a bad
/// call produces is a meaningless value, never a panic.
pub(crate) fn decode_unchecked(input: &str) -> [u8; 16] {
    let src = input.as_bytes();
    let mut bytes = [0u8; 16];
    for (k, &offset) in BYTE_OFFSETS.iter().enumerate() {
        let hi = src.get(offset).copied().unwrap_or(0);
        let lo = src.get(offset + 1).copied().unwrap_or(0);
        bytes[k] = (HEX_NIBBLE[hi as usize] << 4) | (HEX_NIBBLE[lo as usize] & 0x0f);
    }
    bytes
}

/// Validating decode of the strict canonical form.
pub(crate) fn parse(input: &str) -> UuidResult<[u8; 16]> {
    if is_valid(input) {
        return Ok(decode_unchecked(input));
    }
    Err(UuidError::InvalidInput(format!(
        "UUID must be 36 characters of 8-4-4-4-12 hyphenated hex, got: '{}'",
        input
    )))
}

/// Returns true if `input` is valid in the lenient form: after skipping
/// `{`, `}`, `-` and space, exactly 32 hex digits remain and nothing else.
pub(crate) fn is_valid_lenient(input: &str) -> bool {
    let mut count = 0;
    for &b in input.as_bytes() {
        if is_ignorable(b) {
            continue;
        }
        if HEX_NIBBLE[b as usize] == INVALID_NIBBLE {
            return false;
        }
        count += 1;
    }
    count == HEX_DIGITS
}

/// Validating decode of the lenient form.
///
/// Skips `{`, `}`, `-` and space wherever they occur, then pairs the
/// surviving hex digits into bytes in their original relative order. Any
/// other non-hex character, or a surviving digit count other than 32, is
/// an error.
pub(crate) fn parse_lenient(input: &str) -> UuidResult<[u8; 16]> {
    let mut bytes = [0u8; 16];
    let mut count = 0;
    for &b in input.as_bytes() {
        if is_ignorable(b) {
            continue;
        }
        let nibble = HEX_NIBBLE[b as usize];
        if nibble == INVALID_NIBBLE || count == HEX_DIGITS {
            return Err(lenient_error(input));
        }
        if count % 2 == 0 {
            bytes[count / 2] = nibble << 4;
        } else {
            bytes[count / 2] |= nibble;
        }
        count += 1;
    }
    if count != HEX_DIGITS {
        return Err(lenient_error(input));
    }
    Ok(bytes)
}

fn lenient_error(input: &str) -> UuidError {
    UuidError::InvalidInput(format!(
        "UUID must contain exactly 32 hex digits besides braces, spaces and hyphens, got: '{}'",
        input
    ))
}
