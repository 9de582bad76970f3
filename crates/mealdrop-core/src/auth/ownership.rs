//! Ownership authorization guard
//!
//! Applied before every mutating operation on owner-scoped resources
//! (restaurants, driver profiles, menu items). The guard is stateless and
//! must run only after the target resource is known to exist, so a missing
//! resource answers not-found rather than a spurious authorization failure.

use crate::error::DomainError;
use crate::value_objects::UserRole;

/// Permitted iff the requester is the owning user or an admin.
#[inline]
#[must_use]
pub fn is_owner_or_admin(requester_id: i64, requester_role: UserRole, owner_id: i64) -> bool {
    requester_id == owner_id || requester_role.is_admin()
}

/// Guard form of [`is_owner_or_admin`].
///
/// The denial is an authorization error, deliberately distinct from
/// not-found: unauthorized callers learn the resource exists.
pub fn ensure_owner_or_admin(
    requester_id: i64,
    requester_role: UserRole,
    owner_id: i64,
) -> Result<(), DomainError> {
    if is_owner_or_admin(requester_id, requester_role, owner_id) {
        Ok(())
    } else {
        Err(DomainError::NotResourceOwner)
    }
}

/// Guard for admin-only operations.
pub fn ensure_admin(requester_role: UserRole) -> Result<(), DomainError> {
    if requester_role.is_admin() {
        Ok(())
    } else {
        Err(DomainError::AdminOnly)
    }
}
