// libntag/src/session/handle.rs

use log::{debug, info, warn};

use crate::configuration::{AuthLimit, ConfigurationRecord, MirrorSource, ProtectionMode};
use crate::identify::{classify, describe_version_rejection, TagProfile};
use crate::operations::{self, PasswordChange};
use crate::signature::OriginalitySignature;
use crate::transport::Transceiver;
use crate::types::{Atqa, Credentials, Pack, Sak, Uid};
use crate::{Error, Result};

/// Type-state marker: no profile yet.
pub struct Unidentified;

/// Type-state marker carrying the profile computed for this tag.
pub struct Identified {
    profile: TagProfile,
}

/// Session with one tag in the field.
///
/// Operations that only need the codec are available in every state.
/// Anything that depends on the memory map needs `Tag<Identified>`.
pub struct Tag<State = Unidentified> {
    transceiver: Box<dyn Transceiver>,
    uid: Uid,
    atqa: Option<Atqa>,
    sak: Option<Sak>,
    state: State,
}

impl Tag<Unidentified> {
    /// Wrap an already connected transceiver.
    pub fn new(transceiver: Box<dyn Transceiver>, uid: Uid) -> Self {
        Self {
            transceiver,
            uid,
            atqa: None,
            sak: None,
            state: Unidentified,
        }
    }

    pub(crate) fn with_anticollision(mut self, atqa: Option<Atqa>, sak: Option<Sak>) -> Self {
        self.atqa = atqa;
        self.sak = sak;
        self
    }

    /// GET_VERSION, then classify. A tag that refuses or garbles the
    /// version exchange is looked up by ATQA/SAK instead.
    pub fn identify(mut self) -> Result<Tag<Identified>> {
        let version = match operations::get_version(&mut *self.transceiver) {
            Ok(raw) => Some(raw),
            Err(Error::ProtocolNak(kind)) => {
                debug!(
                    "GET_VERSION refused ({}): {}",
                    kind,
                    describe_version_rejection(&[kind.code()])
                );
                None
            }
            Err(e) => {
                warn!("GET_VERSION failed, trying ATQA/SAK: {}", e);
                None
            }
        };

        let profile = classify(version.as_deref(), self.atqa, self.sak)?;
        info!("tag {} identified as {}", self.uid.to_hex(), profile);
        Ok(self.with_profile(profile))
    }

    /// Skip identification for a tag the caller already knows.
    pub fn with_profile(self, profile: TagProfile) -> Tag<Identified> {
        Tag {
            transceiver: self.transceiver,
            uid: self.uid,
            atqa: self.atqa,
            sak: self.sak,
            state: Identified { profile },
        }
    }
}

impl<State> Tag<State> {
    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    pub fn atqa(&self) -> Option<Atqa> {
        self.atqa
    }

    pub fn sak(&self) -> Option<Sak> {
        self.sak
    }

    /// Give the transceiver back, ending the session.
    pub fn into_transceiver(self) -> Box<dyn Transceiver> {
        self.transceiver
    }

    pub fn read_page(&mut self, page: u16) -> Result<Vec<u8>> {
        operations::read_page(&mut *self.transceiver, page)
    }

    pub fn fast_read(&mut self, start: u16, end: u16) -> Result<Vec<u8>> {
        operations::fast_read(&mut *self.transceiver, start, end)
    }

    /// Chunked FAST_READ sized to the transceiver.
    pub fn read_range(&mut self, start: u16, end: u16) -> Result<Vec<u8>> {
        operations::read_range(&mut *self.transceiver, start, end)
    }

    pub fn write_page(&mut self, page: u16, data: &[u8]) -> Result<()> {
        operations::write_page(&mut *self.transceiver, page, data)
    }

    pub fn write_bulk(&mut self, start_page: u16, data: &[u8]) -> Result<()> {
        operations::write_bulk(&mut *self.transceiver, start_page, data)
    }

    pub fn get_version(&mut self) -> Result<Vec<u8>> {
        operations::get_version(&mut *self.transceiver)
    }

    pub fn read_counter(&mut self, counter: u16) -> Result<u32> {
        operations::read_counter(&mut *self.transceiver, counter)
    }

    /// -1 when the counter cannot be read.
    pub fn read_counter_int(&mut self, counter: u16) -> i32 {
        operations::read_counter_int(&mut *self.transceiver, counter)
    }

    pub fn increase_counter(&mut self, counter: u16) -> Result<()> {
        operations::increase_counter(&mut *self.transceiver, counter)
    }

    pub fn read_signature(&mut self) -> Result<OriginalitySignature> {
        operations::read_signature(&mut *self.transceiver)
    }

    pub fn authenticate(&mut self, credentials: &Credentials) -> Result<Pack> {
        operations::authenticate(&mut *self.transceiver, credentials)
    }

    /// Read the signature and verify it over this tag's UID.
    pub fn verify_originality(&mut self) -> Result<bool> {
        operations::verify_tag(&mut *self.transceiver, self.uid.as_bytes())
    }
}

impl Tag<Identified> {
    pub fn profile(&self) -> &TagProfile {
        &self.state.profile
    }

    fn config_page(&self) -> Result<u16> {
        operations::config_page_of(&self.state.profile)
    }

    fn require_pages(&self) -> Result<()> {
        if !self.state.profile.supports_page_operations() {
            return Err(Error::UnsupportedOperation(format!(
                "{} has no page map",
                self.state.profile.name
            )));
        }
        Ok(())
    }

    /// Every page from 0 through the last page of the tag.
    pub fn read_full_memory(&mut self) -> Result<Vec<u8>> {
        self.require_pages()?;
        let last = self.state.profile.memory.last_page;
        operations::read_full_memory(&mut *self.transceiver, last)
    }

    /// User pages only.
    pub fn read_user_memory(&mut self) -> Result<Vec<u8>> {
        self.require_pages()?;
        let m = self.state.profile.memory;
        operations::read_range(&mut *self.transceiver, m.first_user_page, m.last_user_page)
    }

    pub fn read_configuration(&mut self) -> Result<ConfigurationRecord> {
        let page = self.config_page()?;
        operations::read_configuration(&mut *self.transceiver, page)
    }

    pub fn write_configuration(&mut self, record: &ConfigurationRecord) -> Result<()> {
        let page = self.config_page()?;
        operations::write_configuration(&mut *self.transceiver, page, record)
    }

    fn update_configuration<F>(&mut self, edit: F) -> Result<ConfigurationRecord>
    where
        F: FnOnce(&mut ConfigurationRecord) -> Result<()>,
    {
        operations::update_configuration(&mut *self.transceiver, &self.state.profile, edit)
    }

    /// Mirror the UID and/or NFC counter as ASCII into user memory.
    /// NTAG21x only. `MirrorSource::None` switches mirroring off.
    pub fn set_ascii_mirroring(
        &mut self,
        source: MirrorSource,
        offset: u8,
        start_page: u16,
    ) -> Result<ConfigurationRecord> {
        operations::require_ntag21x(&self.state.profile, "ASCII mirroring")?;
        let last_user_page = self.state.profile.memory.last_user_page;
        self.update_configuration(|r| {
            r.set_ascii_mirroring(source, offset, start_page, last_user_page)
        })
    }

    /// NTAG21x only.
    pub fn set_nfc_counter_enabled(&mut self, enabled: bool) -> Result<ConfigurationRecord> {
        operations::require_ntag21x(&self.state.profile, "NFC read counter")?;
        self.update_configuration(|r| r.set_nfc_counter_enabled(enabled))
    }

    /// NTAG21x only.
    pub fn set_nfc_counter_password_protected(
        &mut self,
        protected: bool,
    ) -> Result<ConfigurationRecord> {
        operations::require_ntag21x(&self.state.profile, "NFC read counter protection")?;
        self.update_configuration(|r| r.set_nfc_counter_password_protected(protected))
    }

    /// First page that needs the password.
    pub fn set_auth0(&mut self, page: u8) -> Result<ConfigurationRecord> {
        self.update_configuration(|r| r.set_auth0(page))
    }

    pub fn disable_authentication(&mut self) -> Result<ConfigurationRecord> {
        self.update_configuration(|r| r.disable_authentication())
    }

    pub fn set_protection(&mut self, mode: ProtectionMode) -> Result<ConfigurationRecord> {
        self.update_configuration(|r| r.set_protection(mode))
    }

    pub fn set_auth_limit(&mut self, limit: AuthLimit) -> Result<ConfigurationRecord> {
        self.update_configuration(|r| r.set_auth_limit(limit))
    }

    /// Reads the configuration record and compares AUTH0 with the last page.
    pub fn is_auth_protected(&mut self) -> Result<bool> {
        let last_page = self.state.profile.memory.last_page;
        self.read_configuration()?.is_auth_protected(last_page)
    }

    /// Prepare a password change addressed at this tag's PWD and PACK
    /// pages. Drive it with [`Tag::step_password_change`] or
    /// [`Tag::change_password`].
    pub fn password_change(&self, old: Credentials, new: Credentials) -> Result<PasswordChange> {
        self.require_pages()?;
        if !self.state.profile.capabilities.password_auth {
            return Err(Error::UnsupportedOperation(format!(
                "{} has no password authentication",
                self.state.profile.name
            )));
        }
        let m = self.state.profile.memory;
        Ok(PasswordChange::new(old, new, m.pwd_page(), m.pack_page()))
    }

    pub fn step_password_change(
        &mut self,
        change: &mut PasswordChange,
    ) -> Result<operations::PasswordChangeState> {
        change.step(&mut *self.transceiver)
    }

    /// Run all four steps. See [`PasswordChange`] for what a failure
    /// leaves behind.
    pub fn change_password(&mut self, old: Credentials, new: Credentials) -> Result<()> {
        let mut change = self.password_change(old, new)?;
        change.run(&mut *self.transceiver)
    }
}
