// pn532-classic/src/transport/mock.rs

use crate::constants::{PN532_ACK, PN532_PN532_TO_HOST};
use crate::protocol::Frame;
use crate::transport::traits::Transport;
use crate::{Error, Result};

/// I2C ready byte the chip prepends to every read
pub const STATUS_READY: u8 = 0x01;

/// Mock transport for unit tests. It records sent frames and returns queued
/// responses, padded with zeros or truncated to the requested length the
/// way a fixed-size bus read would be.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub sent: Vec<Vec<u8>>,
    pub responses: Vec<Vec<u8>>,
    /// Every delay requested through `delay_ms`, in order
    pub delays: Vec<u64>,
    /// Testing hook: number of receive calls that should fail with a bus error
    pub read_failures: usize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many subsequent receive calls should fail (for tests).
    pub fn set_read_failures(&mut self, n: usize) {
        self.read_failures = n;
    }

    /// Queue raw bytes, status byte included.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push(resp);
    }

    /// Queue a ready byte followed by the ACK frame.
    pub fn push_ack(&mut self) {
        let mut resp = vec![STATUS_READY];
        resp.extend_from_slice(&PN532_ACK);
        self.responses.push(resp);
    }

    /// Queue a ready byte followed by a chip-to-host frame wrapping `payload`.
    pub fn push_frame(&mut self, payload: &[u8]) {
        let mut resp = vec![STATUS_READY];
        // Test payloads are always small enough to frame.
        resp.extend(Frame::encode_with_tfi(PN532_PN532_TO_HOST, payload).unwrap_or_default());
        self.responses.push(resp);
    }
}

impl Transport for MockTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.sent.push(data.to_vec());
        Ok(())
    }

    fn receive(&mut self, len: usize) -> Result<Vec<u8>> {
        if self.read_failures > 0 {
            self.read_failures -= 1;
            return Err(Error::Bus("simulated read failure".into()));
        }
        if self.responses.is_empty() {
            return Err(Error::Bus("no response queued".into()));
        }
        let mut resp = self.responses.remove(0);
        resp.resize(len, 0);
        Ok(resp)
    }

    fn delay_ms(&mut self, ms: u64) {
        self.delays.push(ms);
    }

    fn reset(&mut self) -> Result<()> {
        // Reset clears recorded traffic but preserves queued responses so
        // tests can pre-seed replies before handing the transport over.
        self.sent.clear();
        self.delays.clear();
        Ok(())
    }
}
