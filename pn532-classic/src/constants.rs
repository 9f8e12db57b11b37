// pn532-classic/src/constants.rs
//! Protocol constants shared across the crate

/// 7-bit I2C address of the PN532
pub const PN532_I2C_ADDRESS: u8 = 0x24;

/// Wire frame preamble: 0x00 0x00 0xFF
pub const PN532_PREAMBLE: [u8; 3] = [0x00, 0x00, 0xFF];

/// Wire frame postamble: 0x00
pub const PN532_POSTAMBLE: u8 = 0x00;

/// Host->chip (D4) and chip->host (D5) direction bytes
pub const PN532_HOST_TO_PN532: u8 = 0xD4;
pub const PN532_PN532_TO_HOST: u8 = 0xD5;

/// Largest payload that still fits the one-byte LEN field (LEN = payload + 1)
pub const PN532_MAX_PAYLOAD_LEN: usize = 254;

/// Acknowledgement frame sent by the chip after every accepted command
pub const PN532_ACK: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];

/// Command codes
pub const PN532_CMD_GET_FIRMWARE_VERSION: u8 = 0x02;
pub const PN532_CMD_SAM_CONFIGURATION: u8 = 0x14;
pub const PN532_CMD_RF_CONFIGURATION: u8 = 0x32;
pub const PN532_CMD_IN_DATA_EXCHANGE: u8 = 0x40;
pub const PN532_CMD_IN_LIST_PASSIVE_TARGET: u8 = 0x4A;

/// Response codes (command + 1)
pub const PN532_RESP_SAM_CONFIGURATION: u8 = 0x15;

/// Response prefix of a GetFirmwareVersion reply (LEN = 6)
pub const PN532_FIRMWARE_PREFIX: [u8; 6] = [0x00, 0x00, 0xFF, 0x06, 0xFA, 0xD5];

/// RFConfiguration item 5: MaxRetries
pub const RF_CONFIG_MAX_RETRIES: u8 = 0x05;
pub const RF_MAX_RETRY_ATR: u8 = 0xFF;
pub const RF_MAX_RETRY_PSL: u8 = 0x01;

/// SAMConfiguration parameters: normal mode, 50ms * 20 = 1s, use IRQ pin
pub const SAM_MODE_NORMAL: u8 = 0x01;
pub const SAM_TIMEOUT_1S: u8 = 0x14;
pub const SAM_USE_IRQ: u8 = 0x01;

/// InListPassiveTarget: one target, 106 kbps type A
pub const INLIST_MAX_TARGETS: u8 = 0x01;
pub const INLIST_BRTY_106A: u8 = 0x00;

/// Logical target number used for InDataExchange
pub const DATA_EXCHANGE_TARGET: u8 = 0x01;

/// Mifare Classic sub-commands carried by InDataExchange
pub const MIFARE_CMD_AUTH_A: u8 = 0x60;
pub const MIFARE_CMD_AUTH_B: u8 = 0x61;
pub const MIFARE_CMD_READ: u8 = 0x30;
pub const MIFARE_CMD_WRITE: u8 = 0xA0;

/// Mifare block size in bytes
pub const MIFARE_BLOCK_LEN: usize = 16;

/// Factory default key (A and B)
pub const KEY_DEFAULT: [u8; 6] = [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF];

/// Key A of the MAD sector (sector 0) on NDEF formatted tags
pub const KEY_MAD: [u8; 6] = [0xA0, 0xA1, 0xA2, 0xA3, 0xA4, 0xA5];

/// Key A of NDEF data sectors
pub const KEY_NDEF: [u8; 6] = [0xD3, 0xF7, 0xD3, 0xF7, 0xD3, 0xF7];

/// MAD block 1: CRC, info byte, then NDEF AIDs (03 E1)
pub const MAD_BLOCK_1: [u8; 16] = [
    0x14, 0x01, 0x03, 0xE1, 0x03, 0xE1, 0x03, 0xE1, 0x03, 0xE1, 0x03, 0xE1, 0x03, 0xE1, 0x03,
    0xE1,
];

/// MAD block 2: NDEF AIDs for the remaining sectors
pub const MAD_BLOCK_2: [u8; 16] = [
    0x03, 0xE1, 0x03, 0xE1, 0x03, 0xE1, 0x03, 0xE1, 0x03, 0xE1, 0x03, 0xE1, 0x03, 0xE1, 0x03,
    0xE1,
];

/// Sector 0 trailer: MAD key A, access bits, GPB 0xC1, key B
pub const MAD_TRAILER: [u8; 16] = [
    0xA0, 0xA1, 0xA2, 0xA3, 0xA4, 0xA5, 0x78, 0x77, 0x88, 0xC1, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF,
];

/// NDEF sector trailer: NDEF key A, access bits, GPB 0x40, key B
pub const NDEF_TRAILER: [u8; 16] = [
    0xD3, 0xF7, 0xD3, 0xF7, 0xD3, 0xF7, 0x7F, 0x07, 0x88, 0x40, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF,
];

/// TLV tags
pub const TLV_NULL: u8 = 0x00;
pub const TLV_NDEF_MESSAGE: u8 = 0x03;
pub const TLV_TERMINATOR: u8 = 0xFE;

/// NDEF record header: MB=1 ME=1 CF=0 SR=1 IL=0 TNF=well-known
pub const NDEF_RECORD_HEADER: u8 = 0xD1;
/// One-byte record type length
pub const NDEF_TYPE_LENGTH: u8 = 0x01;

/// Well-known record types
pub const NDEF_TYPE_TEXT: u8 = 0x54;
pub const NDEF_TYPE_URI: u8 = 0x55;

/// Bytes available to type field plus payload in a three-block NDEF area
pub const NDEF_MAX_CONTENT_LEN: usize = 40;
