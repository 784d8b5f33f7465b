use super::{settle, take_latest};
use crate::app::{AppAction, StorefrontEnvironment};
use crate::models::AuthResponse;
use crate::services::BearerToken;
use crate::session::Session;
use crate::slices::AuthAction;
use junimo_core::{Effect, async_effect};
use std::sync::Arc;

/// Store the session and authorize later requests.
fn sign_in(session: &Session, token: &BearerToken, response: &AuthResponse) {
    if let Err(error) = session.save_auth(response) {
        tracing::warn!(%error, "Failed to persist session");
    }
    token.set(response.token.clone());
    tracing::info!(user_id = response.user.id, "Signed in");
}

pub(super) fn watch(action: &AuthAction, env: &StorefrontEnvironment) -> Effect<AppAction> {
    let auth = Arc::clone(&env.services.auth);
    let session = env.session.clone();
    let token = env.token.clone();

    match action {
        AuthAction::LoginRequest(credentials) => {
            let login = auth.login(credentials.clone());
            take_latest(action, AppAction::Auth, async move {
                settle(login.await, AuthAction::LoginSuccess, AuthAction::LoginFailure, "Failed to login")
            })
        },
        AuthAction::RegisterRequest(registration) => {
            let register = auth.register(registration.clone());
            take_latest(action, AppAction::Auth, async move {
                settle(
                    register.await,
                    AuthAction::RegisterSuccess,
                    AuthAction::RegisterFailure,
                    "Failed to register",
                )
            })
        },
        // Success actions only get here once the store accepted them, so a
        // superseded response never reaches the session or the token.
        AuthAction::LoginSuccess(response) | AuthAction::RegisterSuccess(response) => {
            let response = response.clone();
            async_effect!({
                sign_in(&session, &token, &response);
                None
            })
        },
        AuthAction::Logout => async_effect!({
            if let Err(error) = session.clear() {
                tracing::warn!(%error, "Failed to clear session");
            }
            token.clear();
            tracing::info!("Signed out");
            None
        }),
        AuthAction::GetCurrentUserRequest => take_latest(action, AppAction::Auth, async move {
            match session.load_user() {
                Ok(user) => AuthAction::GetCurrentUserSuccess(user),
                Err(error) => {
                    tracing::warn!(%error, "Failed to read session");
                    AuthAction::GetCurrentUserFailure("Failed to get current user".to_owned())
                },
            }
        }),
        AuthAction::UpdateUserRequest { user_id, update } => {
            let update = auth.update_user(*user_id, update.clone());
            take_latest(action, AppAction::Auth, async move {
                settle(
                    update.await,
                    AuthAction::UpdateUserSuccess,
                    AuthAction::UpdateUserFailure,
                    "Failed to update user",
                )
            })
        },
        AuthAction::UpdateUserSuccess(updated) => {
            let updated = updated.clone();
            async_effect!({
                if let Err(error) = session.merge_user(updated) {
                    tracing::warn!(%error, "Failed to persist updated user");
                }
                None
            })
        },
        _ => Effect::None,
    }
}
