//! Signed-in user.

use crate::app::AppState;
use crate::models::{Role, User};

/// The signed-in user
#[must_use]
pub fn user(state: &AppState) -> Option<&User> {
    state.auth.user.as_ref()
}

/// Whether anyone is signed in
#[must_use]
pub const fn is_authenticated(state: &AppState) -> bool {
    state.auth.is_authenticated()
}

/// Id of the signed-in user
#[must_use]
pub fn user_id(state: &AppState) -> Option<u64> {
    user(state).map(|u| u.id)
}

/// Role of the signed-in user
#[must_use]
pub fn role(state: &AppState) -> Option<&Role> {
    user(state).map(|u| &u.role)
}

/// Whether the signed-in user is an admin
#[must_use]
pub fn is_admin(state: &AppState) -> bool {
    user(state).is_some_and(User::is_admin)
}
