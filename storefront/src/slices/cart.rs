//! Shopping cart slice.

use crate::app::StorefrontEnvironment;
use crate::models::ShoppingCart;
use junimo_core::slice::RequestStatus;
use junimo_core::{Effect, Reducer, SmallVec, smallvec};
use junimo_macros::Lifecycle;

/// Cart state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartState {
    /// The fetched cart, `None` until loaded or after clearing
    pub cart: Option<ShoppingCart>,
    /// Loading/error flags
    pub status: RequestStatus,
}

/// Cart actions
#[derive(Lifecycle, Clone, Debug, PartialEq, Eq)]
#[slice = "cart"]
pub enum CartAction {
    /// Fetch the cart of a user
    #[request]
    GetCartRequest {
        /// Owner
        user_id: u64,
    },
    /// Cart fetched
    #[success]
    GetCartSuccess(ShoppingCart),
    /// Fetch failed
    #[failure]
    GetCartFailure(String),

    /// Add copies of a game
    #[request]
    AddToCartRequest {
        /// Owner
        user_id: u64,
        /// Game to add
        game_id: u64,
        /// Copies to add
        quantity: u32,
    },
    /// Updated cart after adding
    #[success]
    AddToCartSuccess(ShoppingCart),
    /// Add failed
    #[failure]
    AddToCartFailure(String),

    /// Drop a game from the cart
    #[request]
    RemoveFromCartRequest {
        /// Owner
        user_id: u64,
        /// Game to remove
        game_id: u64,
    },
    /// Re-fetched cart after removal
    #[success]
    RemoveFromCartSuccess(ShoppingCart),
    /// Removal failed
    #[failure]
    RemoveFromCartFailure(String),

    /// Change the quantity of a line
    #[request]
    UpdateQuantityRequest {
        /// Owner
        user_id: u64,
        /// Game whose line changes
        game_id: u64,
        /// New quantity
        quantity: u32,
    },
    /// Updated cart
    #[success]
    UpdateQuantitySuccess(ShoppingCart),
    /// Update failed
    #[failure]
    UpdateQuantityFailure(String),

    /// Empty the cart
    #[request]
    ClearCartRequest {
        /// Owner
        user_id: u64,
    },
    /// Cart emptied; also dispatched after a successful checkout
    #[success]
    ClearCartSuccess,
    /// Clearing failed
    #[failure]
    ClearCartFailure(String),
}

impl CartAction {
    /// Add a single copy of `game_id`
    #[must_use]
    pub const fn add_to_cart(user_id: u64, game_id: u64) -> Self {
        Self::AddToCartRequest {
            user_id,
            game_id,
            quantity: 1,
        }
    }
}

/// Reducer for [`CartState`]
#[derive(Debug, Clone, Copy, Default)]
pub struct CartReducer;

impl Reducer for CartReducer {
    type State = CartState;
    type Action = CartAction;
    type Environment = StorefrontEnvironment;

    fn reduce(
        &self,
        state: &mut CartState,
        action: CartAction,
        _env: &StorefrontEnvironment,
    ) -> SmallVec<[Effect<CartAction>; 4]> {
        state.status.track(&action);

        match action {
            CartAction::GetCartSuccess(cart)
            | CartAction::AddToCartSuccess(cart)
            | CartAction::RemoveFromCartSuccess(cart)
            | CartAction::UpdateQuantitySuccess(cart) => state.cart = Some(cart),
            CartAction::ClearCartSuccess => state.cart = None,
            _ => {},
        }

        smallvec![Effect::None]
    }
}
