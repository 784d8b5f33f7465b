//! Tests for #[derive(Lifecycle)] macro

use junimo_core::slice::{Lifecycle, Phase, RequestStatus};
use junimo_macros::Lifecycle;

#[derive(Lifecycle, Clone, Debug, PartialEq)]
#[slice = "cart"]
enum CartAction {
    #[request]
    GetCartRequest { user_id: u64 },

    #[success]
    GetCartSuccess(Vec<u64>),

    #[failure]
    GetCartFailure { message: String },

    #[request]
    ClearCartRequest,

    #[failure]
    ClearCartFailure(String),

    Reset,
}

#[derive(Lifecycle, Clone, Debug)]
enum NewsAction {
    #[request]
    GetAllNewsRequest,
    #[success]
    GetAllNewsSuccess { items: Vec<String> },
    #[failure]
    GetAllNewsFailure { code: u16, message: String },
}

#[derive(Lifecycle, Clone, Debug)]
#[slice = "generic"]
enum Generic<T: Clone> {
    #[success]
    Loaded(T),
    #[failure]
    Failed(&'static str),
}

#[test]
fn test_action_type_uses_slice_prefix() {
    assert_eq!(
        CartAction::GetCartRequest { user_id: 1 }.action_type(),
        "cart/GetCartRequest"
    );
    assert_eq!(CartAction::Reset.action_type(), "cart/Reset");
    assert_eq!(
        CartAction::ClearCartFailure("x".into()).action_type(),
        "cart/ClearCartFailure"
    );
}

#[test]
fn test_default_slice_name_strips_action_suffix() {
    assert_eq!(NewsAction::GetAllNewsRequest.action_type(), "news/GetAllNewsRequest");
}

#[test]
fn test_phases() {
    assert_eq!(
        CartAction::GetCartRequest { user_id: 1 }.phase(),
        Some(Phase::Request)
    );
    assert_eq!(CartAction::ClearCartRequest.phase(), Some(Phase::Request));
    assert_eq!(CartAction::GetCartSuccess(vec![]).phase(), Some(Phase::Success));
    assert_eq!(CartAction::Reset.phase(), None);
}

#[test]
fn test_failure_message_from_named_field() {
    let action = CartAction::GetCartFailure {
        message: "Failed to fetch cart".to_string(),
    };
    assert_eq!(action.phase(), Some(Phase::Failure("Failed to fetch cart")));

    let action = NewsAction::GetAllNewsFailure {
        code: 404,
        message: "News item not found".to_string(),
    };
    assert_eq!(action.phase(), Some(Phase::Failure("News item not found")));
}

#[test]
fn test_failure_message_from_tuple_field() {
    let action = CartAction::ClearCartFailure("Failed to clear cart".to_string());
    assert_eq!(action.phase(), Some(Phase::Failure("Failed to clear cart")));
}

#[test]
fn test_generic_enum() {
    assert_eq!(Generic::Loaded(5_u8).phase(), Some(Phase::Success));
    assert_eq!(Generic::<u8>::Failed("nope").phase(), Some(Phase::Failure("nope")));
    assert_eq!(Generic::<u8>::Failed("nope").action_type(), "generic/Failed");
}

#[test]
fn test_effect_id_is_per_request_kind() {
    let a = CartAction::GetCartRequest { user_id: 1 };
    let b = CartAction::GetCartRequest { user_id: 2 };
    assert_eq!(a.effect_id(), b.effect_id());
    assert_ne!(a.effect_id(), CartAction::ClearCartRequest.effect_id());
}

#[test]
fn test_derived_phases_drive_request_status() {
    let mut status = RequestStatus::default();

    status.track(&CartAction::GetCartRequest { user_id: 1 });
    assert!(status.loading);

    status.track(&CartAction::GetCartFailure {
        message: "Failed to fetch cart".into(),
    });
    assert_eq!(
        status,
        RequestStatus {
            loading: false,
            error: Some("Failed to fetch cart".into()),
        }
    );

    status.track(&CartAction::GetCartRequest { user_id: 1 });
    assert_eq!(status.error, None);
}
