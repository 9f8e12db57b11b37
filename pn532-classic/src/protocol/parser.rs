// pn532-classic/src/protocol/parser.rs

use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Ensure the byte at `idx` equals `expected`.
pub fn expect_byte(data: &[u8], idx: usize, expected: u8) -> Result<()> {
    let actual = byte_at(data, idx)?;
    if actual != expected {
        return Err(Error::UnexpectedResponse {
            offset: idx,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Ensure `data` starts with `prefix`, reporting the first differing byte.
pub fn expect_prefix(data: &[u8], prefix: &[u8]) -> Result<()> {
    ensure_len(data, prefix.len())?;
    for (idx, &expected) in prefix.iter().enumerate() {
        expect_byte(data, idx, expected)?;
    }
    Ok(())
}
