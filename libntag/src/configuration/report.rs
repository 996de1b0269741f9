// libntag/src/configuration/report.rs
//! Human readable rendering of a configuration record, for diagnostics.

use std::fmt;

use crate::configuration::record::{
    AuthLimit, ConfigurationRecord, MirrorSource, ProtectionMode, RECORD_LEN,
};
use crate::utils::bytes_to_hex_spaced;
use crate::Result;

fn enabled(flag: bool) -> &'static str {
    if flag { "Enabled" } else { "Disabled" }
}

/// Every field of a valid record, decoded once.
struct Decoded {
    raw: [u8; RECORD_LEN],
    mirror_source: MirrorSource,
    mirror_page: u8,
    mirror_byte: u8,
    strong_modulation: bool,
    auth0: u8,
    protection: ProtectionMode,
    config_locked: bool,
    nfc_counter: bool,
    nfc_counter_pwd: bool,
    auth_limit: AuthLimit,
}

impl Decoded {
    fn new(rec: &ConfigurationRecord) -> Result<Self> {
        Ok(Self {
            raw: rec.to_bytes()?,
            mirror_source: rec.mirror_source()?,
            mirror_page: rec.mirror_page()?,
            mirror_byte: rec.mirror_byte()?,
            strong_modulation: rec.strong_modulation()?,
            auth0: rec.auth0()?,
            protection: rec.protection()?,
            config_locked: rec.config_locked()?,
            nfc_counter: rec.nfc_counter_enabled()?,
            nfc_counter_pwd: rec.nfc_counter_password_protected()?,
            auth_limit: rec.auth_limit()?,
        })
    }
}

impl fmt::Display for Decoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Configuration record {}", bytes_to_hex_spaced(&self.raw))?;
        writeln!(f, "--- MIRROR ---")?;
        writeln!(f, "Mirror source     {}", self.mirror_source)?;
        writeln!(f, "Mirror page       {}", self.mirror_page)?;
        writeln!(f, "Mirror byte       {}", self.mirror_byte)?;
        writeln!(f, "STRG_MOD_EN       {}", enabled(self.strong_modulation))?;
        writeln!(f, "--- Auth ---")?;
        writeln!(f, "AUTH0             {}", self.auth0)?;
        writeln!(f, "--- ACCESS ---")?;
        writeln!(f, "Protection        {}", self.protection)?;
        let lock = if self.config_locked { "Locked" } else { "Open" };
        writeln!(f, "Config lock       {}", lock)?;
        writeln!(f, "NFC_CNT_EN        {}", enabled(self.nfc_counter))?;
        writeln!(f, "NFC_CNT_PWD_PROT  {}", enabled(self.nfc_counter_pwd))?;
        writeln!(f, "AUTHLIM           {}", self.auth_limit)
    }
}

impl ConfigurationRecord {
    /// Labelled dump of every decoded field.
    pub fn report(&self) -> Result<String> {
        Ok(Decoded::new(self)?.to_string())
    }
}

impl fmt::Display for ConfigurationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Decoded::new(self) {
            Ok(decoded) => decoded.fmt(f),
            Err(_) => writeln!(f, "Configuration record: invalid"),
        }
    }
}
