// libntag/src/session/builder.rs

use crate::session::handle::{Tag, Unidentified};
use crate::transport::Transceiver;
use crate::types::{Atqa, Sak, Uid};
use crate::{Error, Result};

/// Collects what the reader learned during anticollision.
#[derive(Default)]
pub struct TagBuilder {
    transceiver: Option<Box<dyn Transceiver>>,
    uid: Option<Uid>,
    atqa: Option<Atqa>,
    sak: Option<Sak>,
}

impl TagBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transceiver(mut self, transceiver: Box<dyn Transceiver>) -> Self {
        self.transceiver = Some(transceiver);
        self
    }

    pub fn with_uid(mut self, uid: Uid) -> Self {
        self.uid = Some(uid);
        self
    }

    pub fn with_atqa(mut self, atqa: Atqa) -> Self {
        self.atqa = Some(atqa);
        self
    }

    pub fn with_sak(mut self, sak: Sak) -> Self {
        self.sak = Some(sak);
        self
    }

    /// Both transceiver and UID are required.
    pub fn build(self) -> Result<Tag<Unidentified>> {
        let transceiver = self
            .transceiver
            .ok_or_else(|| Error::InvalidArgument("no transceiver".into()))?;
        let uid = self
            .uid
            .ok_or_else(|| Error::InvalidArgument("no UID".into()))?;
        Ok(Tag::new(transceiver, uid).with_anticollision(self.atqa, self.sak))
    }
}
