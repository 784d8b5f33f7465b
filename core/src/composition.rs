//! Building the application reducer out of slice reducers.
//!
//! - [`combine_reducers`] runs several reducers over the same state and
//!   action, concatenating their effects
//! - [`scope_reducer`] runs a slice reducer against one field of the
//!   application state, picking out its actions and lifting its effects
//!
//! # Examples
//!
//! ```
//! use junimo_core::composition::{combine_reducers, scope_reducer};
//! use junimo_core::{smallvec, Effect, Reducer, SmallVec};
//!
//! #[derive(Clone, Debug, Default)]
//! struct Wishlist {
//!     game_ids: Vec<u64>,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum WishlistAction {
//!     Add(u64),
//! }
//!
//! struct WishlistReducer;
//!
//! impl Reducer for WishlistReducer {
//!     type State = Wishlist;
//!     type Action = WishlistAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut Wishlist, action: WishlistAction, _env: &()) -> SmallVec<[Effect<WishlistAction>; 4]> {
//!         let WishlistAction::Add(id) = action;
//!         state.game_ids.push(id);
//!         smallvec![Effect::None]
//!     }
//! }
//!
//! #[derive(Clone, Debug, Default)]
//! struct AppState {
//!     favorites: Wishlist,
//!     cart: Wishlist,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum AppAction {
//!     Favorites(WishlistAction),
//!     Cart(WishlistAction),
//! }
//!
//! let app = combine_reducers(vec![
//!     Box::new(scope_reducer(
//!         WishlistReducer,
//!         |s: &mut AppState| &mut s.favorites,
//!         |a: AppAction| match a {
//!             AppAction::Favorites(a) => Some(a),
//!             AppAction::Cart(_) => None,
//!         },
//!         AppAction::Favorites,
//!     )),
//!     Box::new(scope_reducer(
//!         WishlistReducer,
//!         |s: &mut AppState| &mut s.cart,
//!         |a: AppAction| match a {
//!             AppAction::Cart(a) => Some(a),
//!             AppAction::Favorites(_) => None,
//!         },
//!         AppAction::Cart,
//!     )),
//! ]);
//!
//! let mut state = AppState::default();
//! let _ = app.reduce(&mut state, AppAction::Cart(WishlistAction::Add(4)), &());
//! assert_eq!(state.cart.game_ids, vec![4]);
//! assert!(state.favorites.game_ids.is_empty());
//! ```

use crate::effect::Effect;
use crate::reducer::Reducer;
use smallvec::SmallVec;
use std::marker::PhantomData;

/// Combines multiple reducers that operate on the same state and action types.
///
/// Each reducer is run in sequence, and all effects are collected and concatenated.
/// Reducers later in the list observe the state changes made by earlier ones.
#[must_use]
pub fn combine_reducers<S, A, E>(
    reducers: Vec<Box<dyn Reducer<State = S, Action = A, Environment = E> + Send + Sync>>,
) -> CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    CombinedReducer { reducers }
}

/// A combined reducer that runs multiple reducers in sequence.
///
/// Created by [`combine_reducers`].
pub struct CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    reducers: Vec<Box<dyn Reducer<State = S, Action = A, Environment = E> + Send + Sync>>,
}

impl<S, A, E> CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    /// Number of reducers in the combination
    #[must_use]
    pub fn len(&self) -> usize {
        self.reducers.len()
    }

    /// Returns true when no reducers were combined
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reducers.is_empty()
    }
}

impl<S, A, E> Reducer for CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let mut all_effects = SmallVec::new();

        for reducer in &self.reducers {
            let effects = reducer.reduce(state, action.clone(), env);
            all_effects.extend(effects.into_iter().filter(|e| !e.is_none()));
        }

        all_effects
    }
}

/// Scopes a slice reducer to one field of a larger state.
///
/// - `lens` borrows the slice out of the parent state
/// - `to_local` picks out the actions the slice understands (others are ignored)
/// - `to_global` lifts the slice's effect output back into the parent action type
pub fn scope_reducer<S, A, SubS, SubA, E, R>(
    reducer: R,
    lens: fn(&mut S) -> &mut SubS,
    to_local: fn(A) -> Option<SubA>,
    to_global: fn(SubA) -> A,
) -> ScopedReducer<S, A, SubS, SubA, E, R>
where
    R: Reducer<State = SubS, Action = SubA, Environment = E>,
{
    ScopedReducer {
        reducer,
        lens,
        to_local,
        to_global,
        _phantom: PhantomData,
    }
}

/// A scoped reducer that operates on a subset of state.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, A, SubS, SubA, E, R>
where
    R: Reducer<State = SubS, Action = SubA, Environment = E>,
{
    reducer: R,
    lens: fn(&mut S) -> &mut SubS,
    to_local: fn(A) -> Option<SubA>,
    to_global: fn(SubA) -> A,
    _phantom: PhantomData<fn() -> E>,
}

impl<S, A, SubS, SubA, E, R> Reducer for ScopedReducer<S, A, SubS, SubA, E, R>
where
    R: Reducer<State = SubS, Action = SubA, Environment = E>,
    A: 'static,
    SubA: 'static,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let Some(local) = (self.to_local)(action) else {
            return SmallVec::new();
        };

        self.reducer
            .reduce((self.lens)(state), local, env)
            .into_iter()
            .map(|effect| effect.map(self.to_global))
            .collect()
    }
}
