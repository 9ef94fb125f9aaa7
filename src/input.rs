use std::io::{BufRead, Read};

use log::debug;

use crate::error::{InputError, Result};

/// Maximum supported string length, matching the worst case the caller
/// guarantees. The DP rows are still sized to the actual length, never to
/// this bound.
pub const MAX_LEN: usize = 5000;

/// Reads one problem instance: a decimal count `n`, then exactly `n`
/// characters.
///
/// Conventions, chosen explicitly rather than inherited from any particular
/// input routine's quirks:
/// - ASCII whitespace before the count is skipped.
/// - After the count, exactly one line terminator (`\n` or `\r\n`) is
///   consumed if present. Anything else means the characters start
///   immediately.
/// - The `n` characters themselves are read verbatim; embedded whitespace
///   counts as characters.
///
/// A stream that ends before `n` characters were read is an error, as is a
/// count above [`MAX_LEN`].
///
/// # Examples
///
/// ```
/// use palin::input::read_problem;
///
/// let mut input = &b"4\nabca"[..];
/// assert_eq!(read_problem(&mut input).unwrap(), b"abca");
/// ```
pub fn read_problem<R: BufRead>(reader: &mut R) -> Result<Vec<u8>> {
    let n = read_count(reader)?;
    if n > MAX_LEN {
        return Err(InputError::LengthLimitExceeded { n, max: MAX_LEN });
    }
    debug!("reading {n} characters");
    if n == 0 {
        return Ok(Vec::new());
    }

    consume_line_terminator(reader)?;

    let mut s = vec![0u8; n];
    let mut filled = 0;
    while filled < n {
        let read = reader.read(&mut s[filled..])?;
        if read == 0 {
            return Err(InputError::InsufficientInput {
                expected: n,
                actual: filled,
            });
        }
        filled += read;
    }
    Ok(s)
}

/// Skips leading ASCII whitespace and parses a non-negative decimal integer.
fn read_count<R: BufRead>(reader: &mut R) -> Result<usize> {
    loop {
        match peek_byte(reader)? {
            Some(b) if b.is_ascii_whitespace() => reader.consume(1),
            _ => break,
        }
    }

    let mut count: usize = 0;
    let mut digits = 0;
    while let Some(b) = peek_byte(reader)? {
        if !b.is_ascii_digit() {
            break;
        }
        count = count
            .checked_mul(10)
            .and_then(|c| c.checked_add(usize::from(b - b'0')))
            .ok_or_else(|| InputError::malformed_count("count out of range"))?;
        digits += 1;
        reader.consume(1);
    }

    if digits == 0 {
        return Err(InputError::malformed_count(
            "expected a non-negative integer",
        ));
    }
    Ok(count)
}

/// Consumes a single `\n` or `\r\n` if one follows the count.
fn consume_line_terminator<R: BufRead>(reader: &mut R) -> Result<()> {
    if peek_byte(reader)? == Some(b'\r') {
        reader.consume(1);
    }
    if peek_byte(reader)? == Some(b'\n') {
        reader.consume(1);
    }
    Ok(())
}

fn peek_byte<R: BufRead>(reader: &mut R) -> Result<Option<u8>> {
    Ok(reader.fill_buf()?.first().copied())
}
