// pn532-classic/src/protocol/frame.rs

use crate::constants::{
    PN532_ACK, PN532_HOST_TO_PN532, PN532_MAX_PAYLOAD_LEN, PN532_POSTAMBLE, PN532_PREAMBLE,
};
use crate::protocol::checksum::{dcs, lcs};
use crate::{Error, Result};

/// PN532 normal information frame helper.
/// Format: [Preamble(3)] [Len(1)] [LCS(1)] [TFI(1)] [Payload(n)] [DCS(1)] [Postamble(1)]
/// Preamble: 0x00 0x00 0xFF
/// Len counts TFI + payload, DCS covers TFI + payload.
/// Postamble: 0x00
pub struct Frame;

impl Frame {
    /// Offset of the LEN byte inside a frame
    pub const LEN_OFFSET: usize = 3;
    /// Offset of the TFI (direction) byte inside a frame
    pub const TFI_OFFSET: usize = 5;
    /// Preamble(3) + LEN + LCS + TFI + DCS + Postamble
    pub const OVERHEAD: usize = 8;

    /// Encode a host-to-chip command payload into a full wire frame
    pub fn encode(payload: &[u8]) -> Result<Vec<u8>> {
        Self::encode_with_tfi(PN532_HOST_TO_PN532, payload)
    }

    /// Encode a payload behind an arbitrary TFI byte (D4 host->chip,
    /// D5 chip->host).
    pub fn encode_with_tfi(tfi: u8, payload: &[u8]) -> Result<Vec<u8>> {
        if payload.len() > PN532_MAX_PAYLOAD_LEN {
            return Err(Error::InvalidLength {
                expected: PN532_MAX_PAYLOAD_LEN,
                actual: payload.len(),
            });
        }

        let len = (payload.len() + 1) as u8;
        let mut out = Vec::with_capacity(Self::OVERHEAD + payload.len());
        out.extend_from_slice(&PN532_PREAMBLE);
        out.push(len);
        out.push(lcs(len));
        out.push(tfi);
        out.extend_from_slice(payload);
        out.push(dcs(&out[Self::TFI_OFFSET..]));
        out.push(PN532_POSTAMBLE);
        Ok(out)
    }

    /// True iff the first six bytes are the fixed ACK frame.
    pub fn is_ack(bytes: &[u8]) -> bool {
        bytes.len() >= PN532_ACK.len() && bytes[..PN532_ACK.len()] == PN532_ACK
    }

    /// Decode a full wire frame and return the TFI and the payload after it.
    pub fn decode(frame: &[u8]) -> Result<(u8, Vec<u8>)> {
        if frame.len() < Self::OVERHEAD {
            return Err(Error::InvalidLength {
                expected: Self::OVERHEAD,
                actual: frame.len(),
            });
        }

        if frame[..3] != PN532_PREAMBLE {
            return Err(Error::FrameFormat("invalid preamble".into()));
        }

        let len = frame[Self::LEN_OFFSET];
        let lcs_actual = frame[Self::LEN_OFFSET + 1];
        if lcs_actual != lcs(len) {
            return Err(Error::FrameFormat(format!(
                "length checksum mismatch: expected {:#04x}, got {:#04x}",
                lcs(len),
                lcs_actual
            )));
        }
        if len == 0 {
            return Err(Error::FrameFormat("empty frame has no TFI".into()));
        }

        let required_len = Self::OVERHEAD - 1 + len as usize;
        if frame.len() < required_len {
            return Err(Error::InvalidLength {
                expected: required_len,
                actual: frame.len(),
            });
        }

        let body_end = Self::TFI_OFFSET + len as usize;
        let body = &frame[Self::TFI_OFFSET..body_end];
        let dcs_actual = frame[body_end];
        if dcs_actual != dcs(body) {
            return Err(Error::FrameFormat(format!(
                "data checksum mismatch: expected {:#04x}, got {:#04x}",
                dcs(body),
                dcs_actual
            )));
        }

        if frame[body_end + 1] != PN532_POSTAMBLE {
            return Err(Error::FrameFormat("invalid postamble".into()));
        }

        Ok((body[0], body[1..].to_vec()))
    }
}
