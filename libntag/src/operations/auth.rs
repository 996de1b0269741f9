// libntag/src/operations/auth.rs

use derive_more::Display;
use log::{debug, warn};

use crate::operations::{execute, unexpected, write_page};
use crate::protocol::{Command, Response};
use crate::transport::Transceiver;
use crate::types::{Credentials, Pack, Password};
use crate::{Error, Result};

/// PWD_AUTH, then compare the returned PACK with the expected one.
pub fn authenticate(transceiver: &mut dyn Transceiver, credentials: &Credentials) -> Result<Pack> {
    let cmd = Command::PasswordAuthenticate {
        password: credentials.password,
    };
    let pack = match execute(transceiver, &cmd)? {
        Response::Pack(pack) => pack,
        other => return Err(unexpected(&cmd, &other)),
    };
    if pack != credentials.pack {
        warn!(
            "PACK mismatch: expected {}, got {}",
            credentials.pack.to_hex(),
            pack.to_hex()
        );
        return Err(Error::AuthenticationFailed {
            expected: credentials.pack.to_hex(),
            actual: pack.to_hex(),
        });
    }
    Ok(pack)
}

/// Progress of a [`PasswordChange`]. Each state names the last step that
/// completed.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum PasswordChangeState {
    #[display(fmt = "pending")]
    Pending,
    #[display(fmt = "authenticated with old password")]
    AuthenticatedOld,
    #[display(fmt = "new password written")]
    PasswordWritten,
    #[display(fmt = "new PACK written")]
    PackWritten,
    #[display(fmt = "authenticated with new password")]
    AuthenticatedNew,
}

impl PasswordChangeState {
    pub fn is_complete(&self) -> bool {
        *self == Self::AuthenticatedNew
    }
}

/// Four-step password change: authenticate old, write PWD, write PACK,
/// authenticate new.
///
/// There is no rollback. Once `PasswordWritten` is reached the tag holds
/// the new password even if a later step fails; the error reports the
/// state that was reached so the caller knows which credentials are live.
#[derive(Debug, Clone)]
pub struct PasswordChange {
    old: Credentials,
    new: Credentials,
    pwd_page: u16,
    pack_page: u16,
    state: PasswordChangeState,
}

impl PasswordChange {
    pub fn new(old: Credentials, new: Credentials, pwd_page: u16, pack_page: u16) -> Self {
        Self {
            old,
            new,
            pwd_page,
            pack_page,
            state: PasswordChangeState::Pending,
        }
    }

    pub fn state(&self) -> PasswordChangeState {
        self.state
    }

    /// Run the next step. Calling it again after completion is a no-op.
    pub fn step(&mut self, transceiver: &mut dyn Transceiver) -> Result<PasswordChangeState> {
        use PasswordChangeState::*;

        let outcome = match self.state {
            Pending => authenticate(transceiver, &self.old).map(|_| AuthenticatedOld),
            AuthenticatedOld => {
                write_password(transceiver, self.pwd_page, &self.new.password).map(|_| PasswordWritten)
            }
            PasswordWritten => {
                write_page(transceiver, self.pack_page, self.new.pack.to_page().as_bytes())
                    .map(|_| PackWritten)
            }
            PackWritten => authenticate(transceiver, &self.new).map(|_| AuthenticatedNew),
            AuthenticatedNew => Ok(AuthenticatedNew),
        };

        match outcome {
            Ok(next) => {
                debug!("password change: {} -> {}", self.state, next);
                self.state = next;
                Ok(next)
            }
            Err(e) => {
                warn!("password change stopped at {}: {}", self.state, e);
                Err(Error::PasswordChange {
                    reached: self.state,
                    source: Box::new(e),
                })
            }
        }
    }

    /// Drive every remaining step.
    pub fn run(&mut self, transceiver: &mut dyn Transceiver) -> Result<()> {
        while !self.state.is_complete() {
            self.step(transceiver)?;
        }
        Ok(())
    }
}

fn write_password(transceiver: &mut dyn Transceiver, page: u16, password: &Password) -> Result<()> {
    write_page(transceiver, page, password.as_bytes())
}
