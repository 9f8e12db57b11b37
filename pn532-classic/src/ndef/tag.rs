// pn532-classic/src/ndef/tag.rs

use log::{debug, info};

use crate::device::Pn532;
use crate::ndef::record::{encode_sector_buffer, RecordKind, UriPrefix};
use crate::ndef::sector::{format_sector_zero, read_record, write_record};
use crate::types::MifareKey;
use crate::{Error, Result};

/// Block 0 sits in the MAD sector; a factory key there means the tag was
/// never formatted.
const MAD_PROBE_BLOCK: u8 = 0;

impl Pn532 {
    /// Store `payload` as a record of `kind` in the configured NDEF sector
    /// of the tag in the field.
    ///
    /// Steps:
    /// 1. poll for the tag
    /// 2. if block 0 accepts the factory key, write the MAD (failure aborts)
    /// 3. authenticate the sector with the factory key; if rejected, poll
    ///    again and use the NDEF key
    /// 4. write the record and the NDEF trailer
    pub fn write_tag_payload(&mut self, kind: &RecordKind, payload: &[u8]) -> Result<()> {
        let sector = self.config().ndef_sector()?;
        let type_field = kind.type_field();
        encode_sector_buffer(&type_field, payload)?;

        let card = self.read_passive_target()?;

        match self.authenticate(&card, MAD_PROBE_BLOCK, &MifareKey::DEFAULT) {
            Ok(()) => {
                info!("unformatted tag, writing MAD");
                format_sector_zero(self)?;
            }
            Err(Error::AuthenticationFailed { .. }) => {
                debug!("sector 0 already formatted");
            }
            Err(e) => return Err(e),
        }

        let first = sector.first_block();
        match self.authenticate(&card, first, &MifareKey::DEFAULT) {
            Ok(()) => {}
            Err(Error::AuthenticationFailed { .. }) => {
                debug!("factory key rejected for block {}, trying NDEF key", first);
                // a rejected key halts the tag until it is selected again
                let card = self.read_passive_target()?;
                self.authenticate(&card, first, &MifareKey::NDEF)?;
            }
            Err(e) => return Err(e),
        }

        write_record(self, sector.number(), &type_field, payload)?;
        info!(
            "wrote {} byte record to sector {}",
            payload.len(),
            sector.number()
        );
        Ok(())
    }

    /// Store English text.
    pub fn write_text(&mut self, text: &str) -> Result<()> {
        self.write_tag_payload(&RecordKind::text(), text.as_bytes())
    }

    /// Store a URI, compressing its scheme into an identifier code. A bare
    /// host such as `example.com` is stored under `http://www.`; a URI with
    /// an unknown scheme is stored whole.
    pub fn write_uri(&mut self, uri: &str) -> Result<()> {
        let (prefix, body) = match UriPrefix::split(uri) {
            (UriPrefix::NONE, body) if !body.contains(':') => (UriPrefix::default(), body),
            split => split,
        };
        self.write_tag_payload(&RecordKind::Uri(prefix), body.as_bytes())
    }

    /// Read the record from the configured NDEF sector of the tag in the
    /// field. For URI records only the stored body is returned, without the
    /// expanded prefix.
    pub fn read_tag_payload(&mut self) -> Result<String> {
        let sector = self.config().ndef_sector()?;
        let card = self.read_passive_target()?;
        self.authenticate(&card, sector.first_block(), &MifareKey::NDEF)?;
        read_record(self, sector.number())
    }
}
