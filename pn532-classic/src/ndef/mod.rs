// pn532-classic/src/ndef/mod.rs

//! NDEF records stored in Mifare Classic sectors: TLV framing, the
//! well-known Text/URI short record, sector formatting and the combined
//! poll/authenticate/read-write flows.

pub mod record;
pub mod sector;
pub mod tag;
pub mod tlv;

pub use record::{decode_record, encode_sector_buffer, RecordKind, UriPrefix};
pub use sector::{format_sector_zero, read_record, write_record};
pub use tlv::{extract_tlv, wrap_tlv};
