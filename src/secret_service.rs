use dbus_secret_service::{EncryptionType, Error, SecretService};

use super::{
    code::ResultCode,
    service::{CollectionSelector, UnlockRequest, UnlockService},
};

/// Unlocks collections held by a freedesktop Secret Service (gnome-keyring,
/// KWallet, KeePassXC, ...) over the session bus.
#[derive(Debug, Default, Copy, Clone)]
pub struct SecretServiceBackend;

impl SecretServiceBackend {
    pub fn new() -> Self {
        SecretServiceBackend
    }

    fn try_unlock(&self, request: &UnlockRequest) -> Result<(), Error> {
        if let CollectionSelector::Named(label) = &request.collection {
            log::debug!("Only the default collection can be unlocked, not {:?}", label);
            return Err(Error::NoResult);
        }
        // Unlocking moves no secrets across the bus, so a plain session is enough.
        let ss = SecretService::connect(EncryptionType::Plain)?;
        let collection = ss.get_default_collection()?;
        if !collection.is_locked()? {
            log::debug!("Collection is already unlocked");
            return Ok(());
        }
        collection.unlock()?;
        // A dismissed prompt can leave the collection locked without an error.
        if collection.is_locked()? {
            return Err(Error::Locked);
        }
        Ok(())
    }
}

impl UnlockService for SecretServiceBackend {
    fn unlock(&self, request: &UnlockRequest) -> ResultCode {
        log::trace!("Requesting unlock of {:?}", request.collection);
        match self.try_unlock(request) {
            Ok(()) => ResultCode::OK,
            Err(e) => {
                log::debug!("Secret service unlock failed: {}", e);
                code_for_error(&e)
            }
        }
    }
}

/// Fold a secret service error into the keyring result code space.
fn code_for_error(e: &Error) -> ResultCode {
    match e {
        Error::Dbus(e) => code_for_dbus_error_name(e.name()),
        Error::Unavailable => ResultCode::NO_KEYRING_DAEMON,
        Error::NoResult => ResultCode::NO_SUCH_KEYRING,
        Error::Prompt => ResultCode::CANCELLED,
        Error::Locked => ResultCode::DENIED,
        _ => ResultCode::IO_ERROR,
    }
}

fn code_for_dbus_error_name(name: Option<&str>) -> ResultCode {
    match name {
        Some("org.freedesktop.DBus.Error.ServiceUnknown")
        | Some("org.freedesktop.DBus.Error.NameHasNoOwner")
        | Some("org.freedesktop.DBus.Error.Spawn.ChildExited") => ResultCode::NO_KEYRING_DAEMON,
        Some("org.freedesktop.Secret.Error.NoSuchObject")
        | Some("org.freedesktop.DBus.Error.UnknownObject") => ResultCode::NO_SUCH_KEYRING,
        Some("org.freedesktop.DBus.Error.AccessDenied")
        | Some("org.freedesktop.Secret.Error.IsLocked") => ResultCode::DENIED,
        _ => ResultCode::IO_ERROR,
    }
}
