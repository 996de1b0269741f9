// libntag/src/operations/configuration.rs

use log::debug;

use crate::configuration::{ConfigurationRecord, RECORD_LEN};
use crate::identify::{TagFamily, TagProfile};
use crate::operations::{read_page, write_page};
use crate::transport::Transceiver;
use crate::{Error, Result};

/// Read the configuration record. READ returns four pages; the record is
/// the first two.
pub fn read_configuration(
    transceiver: &mut dyn Transceiver,
    config_page: u16,
) -> Result<ConfigurationRecord> {
    let data = read_page(transceiver, config_page)?;
    Ok(ConfigurationRecord::from_bytes(&data[..RECORD_LEN]))
}

/// Write page A then page B. An invalid record writes nothing.
pub fn write_configuration(
    transceiver: &mut dyn Transceiver,
    config_page: u16,
    record: &ConfigurationRecord,
) -> Result<()> {
    let page_a = record.page_a()?;
    let page_b = record.page_b()?;
    write_page(transceiver, config_page, page_a.as_bytes())?;
    write_page(transceiver, config_page + 1, page_b.as_bytes())
}

/// Configuration pages of a profile, or `UnsupportedOperation` when the
/// tag has no page map.
pub fn config_page_of(profile: &TagProfile) -> Result<u16> {
    if !profile.supports_page_operations() || profile.memory.config_page == 0 {
        return Err(Error::UnsupportedOperation(format!(
            "{} has no configuration pages",
            profile.name
        )));
    }
    Ok(profile.memory.config_page)
}

/// Mirroring and the NFC read counter exist on NTAG21x only.
pub fn require_ntag21x(profile: &TagProfile, what: &str) -> Result<()> {
    if profile.family != TagFamily::Ntag21x {
        return Err(Error::UnsupportedOperation(format!(
            "{} is not available on {}",
            what, profile.name
        )));
    }
    Ok(())
}

/// Read the record, apply `edit`, write it back. Nothing is written when
/// `edit` fails.
pub fn update_configuration<F>(
    transceiver: &mut dyn Transceiver,
    profile: &TagProfile,
    edit: F,
) -> Result<ConfigurationRecord>
where
    F: FnOnce(&mut ConfigurationRecord) -> Result<()>,
{
    let page = config_page_of(profile)?;
    let mut record = read_configuration(transceiver, page)?;
    edit(&mut record)?;
    debug!("writing configuration at page {}: {:02x?}", page, record.to_bytes()?);
    write_configuration(transceiver, page, &record)?;
    Ok(record)
}
