// pn532-classic/src/device/transceiver.rs

use log::{debug, trace};

use crate::constants::PN532_ACK;
use crate::protocol::{codec, Command, Frame, Response};
use crate::transport::Transport;
use crate::{Error, Result};

/// Sends commands and reads replies over a transport. Every exchange with
/// the chip goes through here: one frame out, settle, ACK back, and then a
/// fixed-size reply read when the command has one.
pub struct Transceiver {
    transport: Box<dyn Transport>,
    settle_delay_ms: u64,
}

impl Transceiver {
    pub fn new(transport: Box<dyn Transport>, settle_delay_ms: u64) -> Self {
        Self {
            transport,
            settle_delay_ms,
        }
    }

    /// Frame and send `payload`, then require the ACK frame. Anything else
    /// means the command was rejected and no reply should be trusted.
    pub fn send_and_ack(&mut self, payload: &[u8]) -> Result<()> {
        let frame = Frame::encode(payload)?;
        trace!("-> {:02X?}", frame);
        self.transport.send(&frame)?;
        self.settle();

        let ack = self.read_response(PN532_ACK.len())?;
        if !Frame::is_ack(&ack) {
            debug!(
                "no ack for command {:#04x}: got {:02X?}",
                payload.first().copied().unwrap_or(0),
                ack
            );
            return Err(Error::NoAck);
        }
        Ok(())
    }

    /// Read `nbytes` of reply. The bus returns one leading status byte
    /// which is dropped here.
    pub fn read_response(&mut self, nbytes: usize) -> Result<Vec<u8>> {
        let raw = self.transport.receive(nbytes + 1)?;
        self.settle();
        if raw.len() < nbytes + 1 {
            return Err(Error::InvalidLength {
                expected: nbytes + 1,
                actual: raw.len(),
            });
        }
        #[cfg(feature = "diagnostics")]
        trace!("<- {:02X?}", raw);
        Ok(raw[1..].to_vec())
    }

    /// Send `cmd`, wait for its ACK, then read and decode its reply.
    pub fn execute(&mut self, cmd: &Command) -> Result<Response> {
        self.execute_with_delay(cmd, 0)
    }

    /// Like `execute`, with an extra pause between the ACK and reading the
    /// reply. Block reads and writes use it to let the tag finish.
    pub fn execute_with_delay(&mut self, cmd: &Command, delay_ms: u64) -> Result<Response> {
        self.send_and_ack(&cmd.encode())?;
        let Some(len) = cmd.response_len() else {
            return Ok(Response::Acknowledged);
        };
        if delay_ms > 0 {
            self.transport.delay_ms(delay_ms);
        }
        let raw = self.read_response(len)?;
        codec::decode_response(cmd, &raw)
    }

    pub fn transport_mut(&mut self) -> &mut dyn Transport {
        &mut *self.transport
    }

    pub fn into_transport(self) -> Box<dyn Transport> {
        self.transport
    }

    fn settle(&mut self) {
        self.transport.delay_ms(self.settle_delay_ms);
    }
}
