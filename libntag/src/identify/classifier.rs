// libntag/src/identify/classifier.rs

use log::debug;

use crate::identify::profile::{Capabilities, MemoryLayout, ProfileSource, TagFamily, TagProfile};
use crate::identify::table::{self, DESFIRE_LIGHT_MEMORY, DESFIRE_LIGHT_PRODUCT_TYPE};
use crate::identify::version::VersionInfo;
use crate::types::{Atqa, Sak};
use crate::{Error, Result};

/// Classify from a decoded GET_VERSION payload. `None` when the product
/// type belongs to no known family.
///
/// A storage code missing from the family table still yields the family,
/// but with a zeroed memory map and no capability flags.
pub fn classify_version(version: &VersionInfo) -> Option<TagProfile> {
    let entry = table::family_for(version.product_type)?;

    let (name, memory, counters, capabilities) = if entry.family == TagFamily::Desfire {
        if entry.product_type == DESFIRE_LIGHT_PRODUCT_TYPE {
            (
                entry.unknown_name.to_string(),
                DESFIRE_LIGHT_MEMORY,
                0,
                Capabilities::NONE,
            )
        } else {
            let generation = table::desfire_generation(version.major_version);
            match entry.subtype(version.storage_size) {
                Some(s) => (
                    format!("DESFire {} {}", generation, s.name),
                    s.memory,
                    0,
                    Capabilities::NONE,
                ),
                None => (
                    format!("DESFire {} {}", generation, entry.unknown_name),
                    MemoryLayout::default(),
                    0,
                    Capabilities::NONE,
                ),
            }
        }
    } else {
        match entry.subtype(version.storage_size) {
            Some(s) => (s.name.to_string(), s.memory, entry.counters, entry.capabilities),
            None => (
                entry.unknown_name.to_string(),
                MemoryLayout::default(),
                0,
                Capabilities::NONE,
            ),
        }
    };

    Some(TagProfile {
        family: entry.family,
        name,
        memory,
        counters,
        capabilities,
        source: ProfileSource::Version,
        version: Some(version.clone()),
    })
}

/// Lower-confidence lookup on ATQA/SAK. Only family and name are filled.
pub fn classify_fallback(atqa: Atqa, sak: Sak) -> Option<TagProfile> {
    let entry = table::fallback_for(atqa, sak)?;
    Some(TagProfile {
        family: entry.family,
        name: entry.name.to_string(),
        memory: MemoryLayout::default(),
        counters: 0,
        capabilities: Capabilities::NONE,
        source: ProfileSource::Fallback,
        version: None,
    })
}

/// Primary path first, ATQA/SAK second.
///
/// `version` is the assembled GET_VERSION payload when that exchange
/// produced one.
pub fn classify(
    version: Option<&[u8]>,
    atqa: Option<Atqa>,
    sak: Option<Sak>,
) -> Result<TagProfile> {
    if let Some(raw) = version {
        match VersionInfo::parse(raw) {
            Ok(info) => {
                if let Some(profile) = classify_version(&info) {
                    return Ok(profile);
                }
                debug!(
                    "unknown product type {:#04x}, trying ATQA/SAK",
                    info.product_type
                );
            }
            Err(e) => debug!("version data unusable ({}), trying ATQA/SAK", e),
        }
    }

    match (atqa, sak) {
        (Some(atqa), Some(sak)) => {
            classify_fallback(atqa, sak).ok_or(Error::IdentificationFailed)
        }
        _ => Err(Error::IdentificationFailed),
    }
}

/// What a short reply to GET_VERSION usually means. Used for diagnostics
/// only; classification never depends on it.
pub fn describe_version_rejection(raw: &[u8]) -> &'static str {
    match raw {
        [0x04] => "probably MIFARE Classic (needs authentication first)",
        [0x1C] => "probably MIFARE DESFire (needs ISO-DEP)",
        [0x67, 0x00] => "probably a payment card (needs ISO-DEP)",
        _ => "unknown response",
    }
}
