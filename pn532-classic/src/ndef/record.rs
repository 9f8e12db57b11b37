// pn532-classic/src/ndef/record.rs

use crate::constants::{
    NDEF_MAX_CONTENT_LEN, NDEF_RECORD_HEADER, NDEF_TYPE_LENGTH, NDEF_TYPE_TEXT, NDEF_TYPE_URI,
    TLV_NULL,
};
use crate::ndef::tlv::wrap_tlv;
use crate::{Error, Result};

/// Three data blocks of one sector
pub const SECTOR_BUFFER_LEN: usize = 48;

/// Offset of the text in a Text record: header, type length, payload
/// length, `T`, status byte, two-byte language code
pub const TEXT_CONTENT_OFFSET: usize = 7;
/// Offset of the URI body in a URI record: header, type length, payload
/// length, `U`, identifier code
pub const URI_CONTENT_OFFSET: usize = 5;

/// Null TLVs in front of the NDEF message TLV
const LEADING_NULL_TLVS: usize = 2;
/// Offset of the record type byte inside the NDEF message
const RECORD_TYPE_OFFSET: usize = 3;
/// Shortest message that can hold a well-known short record with content
const MIN_RECORD_LEN: usize = 6;

/// NFC Forum URI identifier code, expanded by the reader in front of the
/// stored URI body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UriPrefix(pub u8);

static URI_PREFIXES: [&str; 36] = [
    "",
    "http://www.",
    "https://www.",
    "http://",
    "https://",
    "tel:",
    "mailto:",
    "ftp://anonymous:anonymous@",
    "ftp://ftp.",
    "ftps://",
    "sftp://",
    "smb://",
    "nfs://",
    "ftp://",
    "dav://",
    "news:",
    "telnet://",
    "imap:",
    "rtsp://",
    "urn:",
    "pop:",
    "sip:",
    "sips:",
    "tftp:",
    "btspp://",
    "btl2cap://",
    "btgoep://",
    "tcpobex://",
    "irdaobex://",
    "file://",
    "urn:epc:id:",
    "urn:epc:tag:",
    "urn:epc:pat:",
    "urn:epc:raw:",
    "urn:epc:",
    "urn:nfc:",
];

impl UriPrefix {
    pub const NONE: Self = Self(0x00);
    pub const HTTP_WWW: Self = Self(0x01);
    pub const HTTPS_WWW: Self = Self(0x02);
    pub const HTTP: Self = Self(0x03);
    pub const HTTPS: Self = Self(0x04);
    pub const TEL: Self = Self(0x05);
    pub const MAILTO: Self = Self(0x06);

    /// Expansion of this code, `None` for reserved codes.
    pub fn as_str(&self) -> Option<&'static str> {
        URI_PREFIXES.get(self.0 as usize).copied()
    }

    /// Split `uri` into the longest known prefix and the body stored on the
    /// tag. URIs without a known prefix are stored whole under `NONE`.
    pub fn split(uri: &str) -> (Self, &str) {
        URI_PREFIXES
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, p)| uri.starts_with(*p))
            .max_by_key(|(_, p)| p.len())
            .map(|(code, p)| (Self(code as u8), &uri[p.len()..]))
            .unwrap_or((Self::NONE, uri))
    }
}

impl Default for UriPrefix {
    fn default() -> Self {
        Self::HTTP_WWW
    }
}

/// Well-known record types the codec writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecordKind {
    /// `T` with a two-letter language code
    Text { language: [u8; 2] },
    /// `U` with an identifier code
    Uri(UriPrefix),
}

impl RecordKind {
    /// English text
    pub const fn text() -> Self {
        RecordKind::Text {
            language: *b"en",
        }
    }

    /// Kind for the one-letter tags used by callers: `T` (English text) or
    /// `U` (`http://www.` URI).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "T" => Some(Self::text()),
            "U" => Some(RecordKind::Uri(UriPrefix::default())),
            _ => None,
        }
    }

    /// Record type byte followed by the fixed part of the record payload.
    pub fn type_field(&self) -> Vec<u8> {
        match self {
            RecordKind::Text { language } => {
                vec![NDEF_TYPE_TEXT, language.len() as u8, language[0], language[1]]
            }
            RecordKind::Uri(prefix) => vec![NDEF_TYPE_URI, prefix.0],
        }
    }

    /// Longest content that still fits into one sector.
    pub fn max_content_len(&self) -> usize {
        NDEF_MAX_CONTENT_LEN - self.type_field().len()
    }
}

/// Largest payload accepted with a `type_field_len`-byte type field.
pub fn max_payload_len(type_field_len: usize) -> usize {
    NDEF_MAX_CONTENT_LEN.saturating_sub(type_field_len)
}

/// Lay out one well-known short record as it is stored in a sector:
///
/// `00 00 03 L D1 01 P <type field> <payload> FE 00..`
///
/// where `L` is the NDEF message length and `P` the record payload length
/// (type field minus its type byte, plus payload). The rest of the 48 bytes
/// is zero.
pub fn encode_sector_buffer(type_field: &[u8], payload: &[u8]) -> Result<[u8; SECTOR_BUFFER_LEN]> {
    let max = max_payload_len(type_field.len());
    if payload.is_empty() || payload.len() > max {
        return Err(Error::PayloadLength {
            len: payload.len(),
            max,
        });
    }

    let record_payload_len = type_field.len() + payload.len() - 1;
    let mut message = Vec::with_capacity(3 + type_field.len() + payload.len());
    message.push(NDEF_RECORD_HEADER);
    message.push(NDEF_TYPE_LENGTH);
    message.push(record_payload_len as u8);
    message.extend_from_slice(type_field);
    message.extend_from_slice(payload);

    let tlv = wrap_tlv(&message)?;
    let mut buf = [0u8; SECTOR_BUFFER_LEN];
    buf[..LEADING_NULL_TLVS].fill(TLV_NULL);
    buf[LEADING_NULL_TLVS..LEADING_NULL_TLVS + tlv.len()].copy_from_slice(&tlv);
    Ok(buf)
}

/// Decode the NDEF message extracted from a TLV into its text content.
///
/// Only well-known short records are accepted. Content is UTF-8, as
/// declared by the Text status byte; anything else is `InvalidText`.
pub fn decode_record(message: &[u8]) -> Result<String> {
    if message.len() < MIN_RECORD_LEN
        || message[0] != NDEF_RECORD_HEADER
        || message[1] != NDEF_TYPE_LENGTH
    {
        return Err(Error::InvalidRecordHeader {
            header: message.first().copied().unwrap_or(0),
            type_length: message.get(1).copied().unwrap_or(0),
        });
    }

    let skip = match message[RECORD_TYPE_OFFSET] {
        NDEF_TYPE_TEXT => TEXT_CONTENT_OFFSET,
        NDEF_TYPE_URI => URI_CONTENT_OFFSET,
        other => return Err(Error::UnsupportedRecordType(other)),
    };
    let content = message.get(skip..).unwrap_or_default();
    Ok(std::str::from_utf8(content)?.to_owned())
}
