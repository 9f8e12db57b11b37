// pn532-classic/src/protocol/commands/target.rs

use crate::constants::PN532_CMD_IN_LIST_PASSIVE_TARGET;

/// Encode InListPassiveTarget command payload (0x4A). `brty` selects the
/// baud rate / modulation (0x00 = 106 kbps type A).
pub fn encode_in_list_passive_target(max_targets: u8, brty: u8) -> Vec<u8> {
    vec![PN532_CMD_IN_LIST_PASSIVE_TARGET, max_targets, brty]
}
