// pn532-classic/src/protocol/codec.rs

use crate::protocol::{Command, Frame, Response};
use crate::Result;

/// Encode a Command into a full wire frame (preamble/LCS/D4/DCS/postamble).
pub fn encode_command_frame(cmd: &Command) -> Result<Vec<u8>> {
    Frame::encode(&cmd.encode())
}

/// Parse the fixed-shape reply read back for `cmd`.
pub fn decode_response(cmd: &Command, raw: &[u8]) -> Result<Response> {
    Response::decode(cmd, raw)
}
