//! User entity <-> model mapper

use mealdrop_core::entities::User;

use crate::models::UserModel;

/// Convert UserModel to User entity
///
/// The password hash stays behind in the model; an unrecognized role column
/// falls back to the default role.
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            name: model.name,
            identifier: model.identifier,
            role: model.role.parse().unwrap_or_default(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
