//! Whitespace-delimited token IO for identifiers.
//!
//! Mirrors text-stream extraction/insertion: [`read_uuid`] skips leading
//! ASCII whitespace, takes one token and strict-parses it; [`write_uuid`]
//! emits the canonical lowercase form without allocating.

use std::io::{self, BufRead, Write};

use crate::codec;
use crate::{Uuid, UuidError, UuidResult};

/// Reads one whitespace-delimited token and parses it as a canonical UUID.
///
/// Leading ASCII whitespace is skipped; the token ends at the next
/// whitespace byte or end of input. The delimiter, if any, is consumed.
///
/// # Errors
///
/// Returns [`UuidError::Io`] if the underlying read fails, and
/// [`UuidError::InvalidInput`] if the input is empty or the token is not a
/// strictly valid canonical UUID string. No identifier value is produced on
/// failure.
pub fn read_uuid<R: BufRead>(reader: &mut R) -> UuidResult<Uuid> {
    let token = read_token(reader)?;
    if token.is_empty() {
        return Err(UuidError::InvalidInput(
            "expected a UUID token, got end of input".to_owned(),
        ));
    }
    Uuid::parse_str(&token)
}

/// Writes the canonical lowercase form of `uuid` to `writer`.
///
/// # Errors
///
/// Propagates any [`io::Error`] from the writer.
pub fn write_uuid<W: Write>(writer: &mut W, uuid: &Uuid) -> io::Result<()> {
    let mut buf = [0u8; codec::ENCODED_LEN];
    uuid.encode_buf(&mut buf);
    writer.write_all(&buf)
}

/// Collects bytes up to the next ASCII whitespace, skipping any leading run
/// of whitespace first. Returns an empty string at end of input.
fn read_token<R: BufRead>(reader: &mut R) -> io::Result<String> {
    let mut token = Vec::new();
    loop {
        let mut used = 0;
        let mut done = false;
        {
            let buf = reader.fill_buf()?;
            if buf.is_empty() {
                done = true;
            }
            for &b in buf {
                if b.is_ascii_whitespace() {
                    used += 1;
                    if token.is_empty() {
                        continue;
                    }
                    // delimiter consumed along with the token
                    done = true;
                    break;
                }
                token.push(b);
                used += 1;
            }
        }
        reader.consume(used);
        if done {
            break;
        }
    }
    // Non-UTF-8 bytes survive lossily; parsing rejects them anyway.
    Ok(String::from_utf8_lossy(&token).into_owned())
}
