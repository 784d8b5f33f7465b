//! Authentication slice.

use crate::app::StorefrontEnvironment;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, User, UserUpdate};
use junimo_core::slice::RequestStatus;
use junimo_core::{Effect, Reducer, SmallVec, smallvec};
use junimo_macros::Lifecycle;

/// Auth state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    /// Signed-in user
    pub user: Option<User>,
    /// Loading/error flags
    pub status: RequestStatus,
}

impl AuthState {
    /// Whether a user is signed in
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Auth actions
#[derive(Lifecycle, Clone, Debug, PartialEq, Eq)]
#[slice = "auth"]
pub enum AuthAction {
    /// Sign in
    #[request]
    LoginRequest(LoginRequest),
    /// Signed in
    #[success]
    LoginSuccess(AuthResponse),
    /// Sign-in failed
    #[failure]
    LoginFailure(String),

    /// Create an account
    #[request]
    RegisterRequest(RegisterRequest),
    /// Account created and signed in
    #[success]
    RegisterSuccess(AuthResponse),
    /// Signup failed
    #[failure]
    RegisterFailure(String),

    /// Sign out and forget the session
    Logout,

    /// Read the persisted session
    #[request]
    GetCurrentUserRequest,
    /// Session read; `None` when signed out
    #[success]
    GetCurrentUserSuccess(Option<User>),
    /// Session unreadable
    #[failure]
    GetCurrentUserFailure(String),

    /// Edit the profile
    #[request]
    UpdateUserRequest {
        /// Account to edit
        user_id: u64,
        /// Fields to change
        update: UserUpdate,
    },
    /// Profile saved; carries the server's copy, which may omit optional fields
    #[success]
    UpdateUserSuccess(User),
    /// Save failed
    #[failure]
    UpdateUserFailure(String),
}

/// Reducer for [`AuthState`]
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthReducer;

impl Reducer for AuthReducer {
    type State = AuthState;
    type Action = AuthAction;
    type Environment = StorefrontEnvironment;

    fn reduce(
        &self,
        state: &mut AuthState,
        action: AuthAction,
        _env: &StorefrontEnvironment,
    ) -> SmallVec<[Effect<AuthAction>; 4]> {
        state.status.track(&action);

        match action {
            AuthAction::LoginSuccess(response) | AuthAction::RegisterSuccess(response) => {
                state.user = Some(response.user);
            },
            AuthAction::UpdateUserSuccess(updated) => {
                state.user = Some(match state.user.take() {
                    Some(current) => current.merged_with(updated),
                    None => updated,
                });
            },
            AuthAction::GetCurrentUserSuccess(user) => state.user = user,
            AuthAction::Logout => {
                state.user = None;
                state.status.reset();
            },
            _ => {},
        }

        smallvec![Effect::None]
    }
}
