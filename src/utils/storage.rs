use web_sys::{window, Storage};

use crate::utils::constants::STORAGE_KEY_IS_AUTHENTICATED;

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Whether the persisted authenticated flag is set. The upload view is gated
/// on this, mirroring the route guard.
pub fn is_authenticated() -> bool {
    let Some(storage) = get_local_storage() else {
        return false;
    };
    matches!(
        storage.get_item(STORAGE_KEY_IS_AUTHENTICATED),
        Ok(Some(value)) if value == "true"
    )
}

pub fn set_authenticated(value: bool) {
    let Some(storage) = get_local_storage() else {
        log::warn!("⚠️ localStorage unavailable, authenticated flag not persisted");
        return;
    };
    let flag = if value { "true" } else { "false" };
    if storage.set_item(STORAGE_KEY_IS_AUTHENTICATED, flag).is_err() {
        log::warn!("⚠️ Failed to persist authenticated flag");
    }
}
