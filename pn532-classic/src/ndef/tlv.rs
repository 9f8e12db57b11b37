// pn532-classic/src/ndef/tlv.rs

use crate::constants::{TLV_NDEF_MESSAGE, TLV_TERMINATOR};
use crate::{Error, Result};

/// Longest message a short-form TLV length byte can carry
pub const MAX_SHORT_TLV_LEN: usize = 0xFE;

/// Find the first NDEF message TLV in `bytes` and return its value.
///
/// Bytes before the tag (NULL TLVs, padding) are skipped. A tag with a zero
/// length is passed over together with its length byte. A length running
/// past the end of `bytes` is truncated to what is there.
pub fn extract_tlv(bytes: &[u8]) -> Result<&[u8]> {
    let len = bytes.len();
    let mut i = 0;
    while i + 2 < len {
        if bytes[i] == TLV_NDEF_MESSAGE {
            let value_len = bytes[i + 1] as usize;
            if value_len > 0 {
                let start = i + 2;
                let end = (start + value_len).min(len);
                return Ok(&bytes[start..end]);
            }
            i += 1;
        }
        i += 1;
    }
    Err(Error::TlvNotFound)
}

/// Wrap `message` in an NDEF message TLV followed by the terminator TLV.
pub fn wrap_tlv(message: &[u8]) -> Result<Vec<u8>> {
    if message.len() > MAX_SHORT_TLV_LEN {
        return Err(Error::PayloadLength {
            len: message.len(),
            max: MAX_SHORT_TLV_LEN,
        });
    }
    let mut out = Vec::with_capacity(message.len() + 3);
    out.push(TLV_NDEF_MESSAGE);
    out.push(message.len() as u8);
    out.extend_from_slice(message);
    out.push(TLV_TERMINATOR);
    Ok(out)
}
