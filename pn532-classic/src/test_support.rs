//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup and provide an
//! emulated chip with a Mifare Classic 1K card in its field, so flow-level
//! tests across the crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use std::cell::{Ref, RefCell, RefMut};
use std::collections::VecDeque;
use std::rc::Rc;

use log::trace;

use crate::constants::*;
use crate::device::{DeviceBuilder, DriverConfig, Initialized, Pn532};
use crate::protocol::Frame;
use crate::transport::mock::{MockTransport, STATUS_READY};
use crate::transport::Transport;
use crate::types::FirmwareVersion;
use crate::Result;

/// Firmware reported by the fixtures: PN532 v1.6, all protocols.
pub const FIRMWARE: [u8; 4] = [0x32, 0x01, 0x06, 0x07];

/// Transport wrapper that shares its inner transport with the test, so the
/// test can inspect sent frames or change state after the driver owns it.
#[doc(hidden)]
pub struct SharedTransport<T> {
    inner: Rc<RefCell<T>>,
}

impl<T> SharedTransport<T> {
    pub fn new(inner: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    pub fn borrow(&self) -> Ref<'_, T> {
        self.inner.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.inner.borrow_mut()
    }
}

impl<T> Clone for SharedTransport<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Transport> Transport for SharedTransport<T> {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.inner.borrow_mut().send(data)
    }
    fn receive(&mut self, len: usize) -> Result<Vec<u8>> {
        self.inner.borrow_mut().receive(len)
    }
    fn delay_ms(&mut self, ms: u64) {
        self.inner.borrow_mut().delay_ms(ms)
    }
    fn reset(&mut self) -> Result<()> {
        self.inner.borrow_mut().reset()
    }
}

/// GetFirmwareVersion reply payload (after D5)
#[doc(hidden)]
pub fn firmware_reply() -> Vec<u8> {
    let mut p = vec![PN532_CMD_GET_FIRMWARE_VERSION + 1];
    p.extend_from_slice(&FIRMWARE);
    p
}

/// SAMConfiguration reply payload (after D5)
#[doc(hidden)]
pub fn sam_reply() -> Vec<u8> {
    vec![PN532_RESP_SAM_CONFIGURATION]
}

/// InListPassiveTarget reply payload (after D5) for one Mifare Classic 1K
/// target with the given UID.
#[doc(hidden)]
pub fn target_reply(uid: &[u8]) -> Vec<u8> {
    let mut p = vec![PN532_CMD_IN_LIST_PASSIVE_TARGET + 1, 0x01, 0x01];
    p.extend_from_slice(&[0x00, 0x04]); // ATQA
    p.push(0x08); // SAK
    p.push(uid.len() as u8);
    p.extend_from_slice(uid);
    p
}

/// Token for unit tests that drive the detector directly.
#[doc(hidden)]
pub fn initialized_token() -> Initialized {
    Initialized::new(FirmwareVersion::from_bytes(FIRMWARE))
}

/// Build a MockTransport pre-seeded with the given raw reads.
#[doc(hidden)]
pub fn mock_with_responses(responses: Vec<Vec<u8>>) -> MockTransport {
    let mut mock = MockTransport::new();
    for resp in responses {
        mock.push_response(resp);
    }
    mock
}

/// Driver over `transport` that already counts as initialized, so queued
/// replies are consumed by the operation under test only.
#[doc(hidden)]
pub fn initialized_device(transport: Box<dyn Transport>) -> Pn532 {
    let mut dev = Pn532::new_with_transport(transport);
    dev.mark_initialized(initialized_token());
    dev
}

/// Configuration without settle delays, for fast emulated runs.
#[doc(hidden)]
pub fn fast_config() -> DriverConfig {
    DriverConfig {
        settle_delay_ms: 0,
        block_settle_ms: 0,
        ..DriverConfig::default()
    }
}

/// Status the chip reports when the card did not answer
pub const STATUS_TIMEOUT: u8 = 0x01;
/// Status the chip reports for a Mifare authentication error
pub const STATUS_AUTH_ERROR: u8 = 0x14;

const BLOCKS: usize = 64;
const FACTORY_TRAILER: [u8; 16] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x07, 0x80, 0x69, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF,
];

fn is_trailer(block: u8) -> bool {
    block % 4 == 3
}

/// Mifare Classic 1K card state as the emulator sees it.
#[derive(Debug, Clone)]
pub struct EmulatedCard {
    uid: Vec<u8>,
    blocks: [[u8; 16]; BLOCKS],
    authenticated: Option<u8>,
    halted: bool,
}

impl EmulatedCard {
    /// Factory-fresh card: manufacturer block, zeroed data, transport
    /// trailers with `FF..FF` keys.
    pub fn blank(uid: &[u8]) -> Self {
        let mut blocks = [[0u8; 16]; BLOCKS];
        let bcc = uid.iter().fold(0u8, |acc, b| acc ^ b);
        blocks[0][..uid.len()].copy_from_slice(uid);
        blocks[0][uid.len()] = bcc;
        for block in (3..BLOCKS).step_by(4) {
            blocks[block] = FACTORY_TRAILER;
        }
        Self {
            uid: uid.to_vec(),
            blocks,
            authenticated: None,
            halted: false,
        }
    }

    fn key_matches(&self, auth_cmd: u8, block: u8, key: &[u8]) -> bool {
        let trailer = &self.blocks[(block | 3) as usize];
        match auth_cmd {
            MIFARE_CMD_AUTH_A => &trailer[..6] == key,
            MIFARE_CMD_AUTH_B => &trailer[10..] == key,
            _ => false,
        }
    }

    fn is_authenticated_for(&self, block: u8) -> bool {
        !self.halted && self.authenticated == Some(block / 4)
    }
}

/// Emulated PN532 with an optional Mifare Classic 1K card in its field.
///
/// It decodes every frame the driver sends, answers with an ACK and the
/// reply a real chip would give, and tracks the card's authentication
/// state. A rejected key halts the card until the next InListPassiveTarget,
/// and an InListPassiveTarget with no card in the field stays pending until
/// a card is placed.
#[doc(hidden)]
#[derive(Debug, Default)]
pub struct EmulatedPn532 {
    card: Option<EmulatedCard>,
    outbox: VecDeque<Vec<u8>>,
    listening: bool,
    /// Every command payload received, TFI stripped
    pub commands: Vec<Vec<u8>>,
}

impl EmulatedPn532 {
    /// Chip with an empty field
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blank_card(uid: &[u8]) -> Self {
        let mut chip = Self::new();
        chip.place_card(EmulatedCard::blank(uid));
        chip
    }

    pub fn place_card(&mut self, card: EmulatedCard) {
        self.card = Some(card);
    }

    pub fn remove_card(&mut self) -> Option<EmulatedCard> {
        self.card.take()
    }

    /// Raw block contents of the card in the field.
    pub fn block(&self, block: u8) -> Option<[u8; 16]> {
        let card = self.card.as_ref()?;
        card.blocks.get(block as usize).copied()
    }

    /// Overwrite a block of the card in the field directly.
    pub fn set_block(&mut self, block: u8, data: [u8; 16]) {
        if let Some(slot) = self
            .card
            .as_mut()
            .and_then(|c| c.blocks.get_mut(block as usize))
        {
            *slot = data;
        }
    }

    /// Number of commands received with the given command code.
    pub fn count(&self, code: u8) -> usize {
        self.commands.iter().filter(|c| c.first() == Some(&code)).count()
    }

    /// Driver with zero settle delays over this emulator.
    pub fn into_device(self) -> Pn532 {
        Pn532::from_parts(Box::new(self), fast_config())
    }

    /// Driver over this emulator, plus a handle to inspect the emulator.
    pub fn into_shared_device(
        self,
        config: DriverConfig,
    ) -> Result<(Pn532, SharedTransport<Self>)> {
        let shared = SharedTransport::new(self);
        let dev = DeviceBuilder::new()
            .with_transport(Box::new(shared.clone()))
            .with_config(config)
            .build()?;
        Ok((dev, shared))
    }

    fn reply(&mut self, payload: &[u8]) {
        let mut raw = vec![STATUS_READY];
        raw.extend(Frame::encode_with_tfi(PN532_PN532_TO_HOST, payload).unwrap_or_default());
        self.outbox.push_back(raw);
    }

    fn ack(&mut self) {
        let mut raw = vec![STATUS_READY];
        raw.extend_from_slice(&PN532_ACK);
        self.outbox.push_back(raw);
    }

    fn data_exchange(&mut self, payload: &[u8]) {
        let mut reply = vec![PN532_CMD_IN_DATA_EXCHANGE + 1];
        reply.extend(mifare_exchange(self.card.as_mut(), payload));
        self.reply(&reply);
    }

    fn target_found(&mut self) -> Option<Vec<u8>> {
        let card = self.card.as_mut()?;
        card.halted = false;
        card.authenticated = None;
        let payload = target_reply(&card.uid);
        let mut raw = vec![STATUS_READY];
        raw.extend(Frame::encode_with_tfi(PN532_PN532_TO_HOST, &payload).unwrap_or_default());
        Some(raw)
    }
}

/// Status byte plus data the card answers to one InDataExchange payload
/// (`40 01 cmd block ..`).
fn mifare_exchange(card: Option<&mut EmulatedCard>, payload: &[u8]) -> Vec<u8> {
    let Some(card) = card.filter(|c| !c.halted) else {
        return vec![STATUS_TIMEOUT];
    };
    if payload.len() < 4 || payload[3] as usize >= BLOCKS {
        return vec![STATUS_TIMEOUT];
    }
    let (mifare_cmd, block) = (payload[2], payload[3]);

    match mifare_cmd {
        MIFARE_CMD_AUTH_A | MIFARE_CMD_AUTH_B => {
            let key = payload.get(4..10).unwrap_or_default();
            let uid = payload.get(10..).unwrap_or_default();
            if uid == card.uid.as_slice() && card.key_matches(mifare_cmd, block, key) {
                card.authenticated = Some(block / 4);
                vec![0x00]
            } else {
                card.authenticated = None;
                card.halted = true;
                vec![STATUS_AUTH_ERROR]
            }
        }
        MIFARE_CMD_READ if card.is_authenticated_for(block) => {
            let mut data = card.blocks[block as usize];
            if is_trailer(block) {
                // key A never reads back
                data[..6].fill(0);
            }
            let mut r = vec![0x00];
            r.extend_from_slice(&data);
            r
        }
        MIFARE_CMD_WRITE if card.is_authenticated_for(block) && block != 0 => {
            match payload.get(4..4 + MIFARE_BLOCK_LEN) {
                Some(data) => {
                    card.blocks[block as usize].copy_from_slice(data);
                    vec![0x00]
                }
                None => vec![STATUS_TIMEOUT],
            }
        }
        _ => vec![STATUS_AUTH_ERROR],
    }
}

impl Transport for EmulatedPn532 {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        let Ok((tfi, payload)) = Frame::decode(data) else {
            trace!("emulator: dropping malformed frame {:02X?}", data);
            return Ok(());
        };
        if tfi != PN532_HOST_TO_PN532 || payload.is_empty() {
            return Ok(());
        }
        self.commands.push(payload.clone());

        match payload[0] {
            PN532_CMD_GET_FIRMWARE_VERSION => {
                self.ack();
                self.reply(&firmware_reply());
            }
            PN532_CMD_RF_CONFIGURATION => self.ack(),
            PN532_CMD_SAM_CONFIGURATION => {
                self.ack();
                self.reply(&sam_reply());
            }
            PN532_CMD_IN_LIST_PASSIVE_TARGET => {
                self.ack();
                self.listening = true;
            }
            PN532_CMD_IN_DATA_EXCHANGE => {
                self.ack();
                self.data_exchange(&payload);
            }
            _ => {}
        }
        Ok(())
    }

    fn receive(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut raw = match self.outbox.pop_front() {
            Some(raw) => raw,
            None if self.listening => match self.target_found() {
                Some(raw) => {
                    self.listening = false;
                    raw
                }
                None => Vec::new(),
            },
            None => Vec::new(),
        };
        raw.resize(len, 0);
        Ok(raw)
    }

    fn delay_ms(&mut self, _ms: u64) {}
}
