//! Owner-or-admin authorization
//!
//! Every mutating course operation uses the same rule: the caller must own
//! the resource (directly, or through the bootcamp for new courses) or hold
//! the admin role.

use uuid::Uuid;

use crate::{
    constants::roles,
    error::{AppError, AppResult},
};

/// Whether the caller may mutate a resource owned by `owner_id`
pub fn is_owner_or_admin(caller_id: &Uuid, owner_id: &Uuid, caller_role: &str) -> bool {
    caller_id == owner_id || caller_role == roles::ADMIN
}

/// Fail with [`AppError::Forbidden`] unless the caller is owner or admin.
///
/// `describe` builds the denial message and is only called on failure.
pub fn ensure_owner_or_admin(
    caller_id: &Uuid,
    owner_id: &Uuid,
    caller_role: &str,
    describe: impl FnOnce() -> String,
) -> AppResult<()> {
    if is_owner_or_admin(caller_id, owner_id, caller_role) {
        return Ok(());
    }

    let message = describe();
    tracing::debug!(caller_id = %caller_id, owner_id = %owner_id, role = %caller_role, "{}", message);
    Err(AppError::Forbidden(message))
}
