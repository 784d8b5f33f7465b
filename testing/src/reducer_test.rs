//! Given-When-Then harness for slice reducers.
//!
//! Slices move through request, success and failure phases, so a test
//! usually needs the state a request left behind before it can check what
//! the response does. [`ReducerTest::given_actions`] replays that history;
//! only the effects of the final action reach [`ReducerTest::then_effects`].

#![allow(clippy::module_name_repetitions)] // ReducerTest is the natural name

use junimo_core::{effect::Effect, reducer::Reducer};

type StateCheck<S> = Box<dyn FnOnce(&S)>;
type EffectCheck<A> = Box<dyn FnOnce(&[Effect<A>])>;

/// Fluent reducer test.
///
/// # Example
///
/// ```ignore
/// use junimo_testing::ReducerTest;
///
/// ReducerTest::new(CartReducer)
///     .with_env(fake_env())
///     .given_state(CartState::default())
///     .given_actions([CartAction::GetCartRequest { user_id: 7 }])
///     .when_action(CartAction::GetCartFailure("Failed to fetch cart".into()))
///     .then_state(|state| {
///         assert!(!state.status.loading);
///         assert_eq!(state.status.error.as_deref(), Some("Failed to fetch cart"));
///     })
///     .then_effects(assertions::assert_no_effects)
///     .run();
/// ```
pub struct ReducerTest<R: Reducer> {
    reducer: R,
    environment: Option<R::Environment>,
    state: Option<R::State>,
    history: Vec<R::Action>,
    action: Option<R::Action>,
    state_checks: Vec<StateCheck<R::State>>,
    effect_checks: Vec<EffectCheck<R::Action>>,
}

impl<R: Reducer> ReducerTest<R> {
    /// Test `reducer`
    #[must_use]
    pub const fn new(reducer: R) -> Self {
        Self {
            reducer,
            environment: None,
            state: None,
            history: Vec::new(),
            action: None,
            state_checks: Vec::new(),
            effect_checks: Vec::new(),
        }
    }

    /// Environment handed to every `reduce` call
    #[must_use]
    pub fn with_env(mut self, env: R::Environment) -> Self {
        self.environment = Some(env);
        self
    }

    /// Starting state (Given)
    #[must_use]
    pub fn given_state(mut self, state: R::State) -> Self {
        self.state = Some(state);
        self
    }

    /// Actions replayed on the starting state before the one under test.
    ///
    /// Their effects are dropped.
    #[must_use]
    pub fn given_actions(mut self, actions: impl IntoIterator<Item = R::Action>) -> Self {
        self.history.extend(actions);
        self
    }

    /// The action under test (When)
    #[must_use]
    pub fn when_action(mut self, action: R::Action) -> Self {
        self.action = Some(action);
        self
    }

    /// Check the resulting state (Then)
    #[must_use]
    pub fn then_state<F>(mut self, check: F) -> Self
    where
        F: FnOnce(&R::State) + 'static,
    {
        self.state_checks.push(Box::new(check));
        self
    }

    /// Check the effects returned for the action under test (Then)
    #[must_use]
    pub fn then_effects<F>(mut self, check: F) -> Self
    where
        F: FnOnce(&[Effect<R::Action>]) + 'static,
    {
        self.effect_checks.push(Box::new(check));
        self
    }

    /// Reduce and run every check.
    ///
    /// # Panics
    ///
    /// Panics if the state, action or environment is missing, or if a check
    /// fails.
    #[allow(clippy::panic)] // Test code can panic
    #[allow(clippy::expect_used)] // Test code can use expect
    pub fn run(self) {
        let mut state = self.state.expect("Initial state must be set with given_state()");
        let action = self.action.expect("Action must be set with when_action()");
        let env = self.environment.expect("Environment must be set with with_env()");

        for earlier in self.history {
            let _ = self.reducer.reduce(&mut state, earlier, &env);
        }
        let effects = self.reducer.reduce(&mut state, action, &env);

        for check in self.state_checks {
            check(&state);
        }
        for check in self.effect_checks {
            check(&effects);
        }
    }
}

/// Effect assertions.
///
/// The `has_*` checks walk into `Parallel` and `Cancellable` wrappers,
/// since sagas usually return one composite effect.
pub mod assertions {
    use junimo_core::effect::Effect;
    use std::time::Duration;

    /// Whether `effect` or anything nested inside it satisfies `pred`
    pub fn contains<A>(effect: &Effect<A>, pred: &dyn Fn(&Effect<A>) -> bool) -> bool {
        if pred(effect) {
            return true;
        }
        match effect {
            Effect::Parallel(effects) => effects.iter().any(|e| contains(e, pred)),
            Effect::Cancellable { effect, .. } => contains(effect, pred),
            _ => false,
        }
    }

    fn any<A>(effects: &[Effect<A>], pred: &dyn Fn(&Effect<A>) -> bool) -> bool {
        effects.iter().any(|e| contains(e, pred))
    }

    /// Nothing to run: an empty list or a lone `Effect::None`
    ///
    /// # Panics
    ///
    /// Panics if any real effect is present.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_no_effects<A: std::fmt::Debug>(effects: &[Effect<A>]) {
        assert!(
            effects.iter().all(|e| matches!(e, Effect::None)),
            "Expected no effects, but found {}: {:?}",
            effects.len(),
            effects
        );
    }

    /// Exactly `expected` top-level effects
    ///
    /// # Panics
    ///
    /// Panics on a different count.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_effects_count<A>(effects: &[Effect<A>], expected: usize) {
        assert_eq!(
            effects.len(),
            expected,
            "Expected {expected} effects, but found {}",
            effects.len()
        );
    }

    /// Some service call is started
    ///
    /// # Panics
    ///
    /// Panics if no `Future` effect is found.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_has_future_effect<A>(effects: &[Effect<A>]) {
        assert!(
            any(effects, &|e| matches!(e, Effect::Future(_))),
            "Expected at least one Future effect, but none found"
        );
    }

    /// A latest-wins effect tagged with `id` is started
    ///
    /// # Panics
    ///
    /// Panics if no `Cancellable` effect with that id is found.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_has_cancellable_effect<A>(effects: &[Effect<A>], id: &str) {
        assert!(
            any(effects, &|e| matches!(e, Effect::Cancellable { id: tagged, .. } if tagged.as_str() == id)),
            "Expected a Cancellable effect with id {id:?}, but none found"
        );
    }

    /// The family tagged with `id` is cancelled
    ///
    /// # Panics
    ///
    /// Panics if no `Cancel` effect with that id is found.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_has_cancel_effect<A>(effects: &[Effect<A>], id: &str) {
        assert!(
            any(effects, &|e| matches!(e, Effect::Cancel(cancelled) if cancelled.as_str() == id)),
            "Expected a Cancel effect for {id:?}, but none found"
        );
    }

    /// An action is scheduled `duration` from now
    ///
    /// # Panics
    ///
    /// Panics if no `Delay` of that length is found.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_has_delay_effect<A>(effects: &[Effect<A>], duration: Duration) {
        assert!(
            any(effects, &|e| matches!(e, Effect::Delay { duration: d, .. } if *d == duration)),
            "Expected a Delay of {duration:?}, but none found"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use junimo_core::slice::{Phase, RequestStatus};
    use smallvec::{SmallVec, smallvec};
    use std::time::Duration;

    #[derive(Clone, Debug, Default)]
    struct PostsState {
        posts: Vec<u32>,
        status: RequestStatus,
    }

    #[derive(Clone, Debug)]
    enum PostsAction {
        Fetch,
        Loaded(Vec<u32>),
        Failed(String),
        Refresh,
    }

    struct PostsReducer;

    impl Reducer for PostsReducer {
        type State = PostsState;
        type Action = PostsAction;
        type Environment = ();

        fn reduce(
            &self,
            state: &mut PostsState,
            action: PostsAction,
            _env: &(),
        ) -> SmallVec<[Effect<PostsAction>; 4]> {
            match action {
                PostsAction::Fetch => {
                    state.status.apply(Phase::Request);
                    smallvec![Effect::Parallel(vec![
                        Effect::Cancel("posts/Refresh".into()),
                        Effect::Future(Box::pin(async { Some(PostsAction::Loaded(vec![1])) }))
                            .cancellable("posts/Fetch"),
                    ])]
                },
                PostsAction::Loaded(posts) => {
                    state.status.apply(Phase::Success);
                    state.posts = posts;
                    smallvec![Effect::None]
                },
                PostsAction::Failed(message) => {
                    state.status.apply(Phase::Failure(&message));
                    smallvec![]
                },
                PostsAction::Refresh => smallvec![Effect::Delay {
                    duration: Duration::from_millis(300),
                    action: Box::new(PostsAction::Fetch),
                }],
            }
        }
    }

    #[test]
    fn test_request_effects_are_found_when_nested() {
        ReducerTest::new(PostsReducer)
            .with_env(())
            .given_state(PostsState::default())
            .when_action(PostsAction::Fetch)
            .then_state(|state| assert!(state.status.loading))
            .then_effects(|effects| {
                assertions::assert_effects_count(effects, 1);
                assertions::assert_has_future_effect(effects);
                assertions::assert_has_cancellable_effect(effects, "posts/Fetch");
                assertions::assert_has_cancel_effect(effects, "posts/Refresh");
            })
            .run();
    }

    #[test]
    fn test_given_actions_replay_before_the_action_under_test() {
        ReducerTest::new(PostsReducer)
            .with_env(())
            .given_state(PostsState {
                posts: vec![9],
                status: RequestStatus::default(),
            })
            .given_actions([PostsAction::Fetch])
            .when_action(PostsAction::Failed("Failed to fetch posts".into()))
            .then_state(|state| {
                assert_eq!(state.posts, vec![9]);
                assert!(!state.status.loading);
                assert_eq!(state.status.error.as_deref(), Some("Failed to fetch posts"));
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_success_replaces_data() {
        ReducerTest::new(PostsReducer)
            .with_env(())
            .given_state(PostsState::default())
            .given_actions([PostsAction::Fetch])
            .when_action(PostsAction::Loaded(vec![1, 2]))
            .then_state(|state| {
                assert_eq!(state.posts, vec![1, 2]);
                assert!(state.status.is_idle());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_delay_assertion_matches_duration() {
        ReducerTest::new(PostsReducer)
            .with_env(())
            .given_state(PostsState::default())
            .when_action(PostsAction::Refresh)
            .then_effects(|effects| {
                assertions::assert_has_delay_effect(effects, Duration::from_millis(300));
            })
            .run();
    }

    #[test]
    #[should_panic(expected = "Expected a Cancellable effect")]
    fn test_cancellable_assertion_rejects_other_ids() {
        let effect = Effect::Future(Box::pin(async { Some(PostsAction::Refresh) }))
            .cancellable("posts/Fetch");
        assertions::assert_has_cancellable_effect(&[effect], "posts/Refresh");
    }

    #[test]
    #[should_panic(expected = "Expected no effects")]
    fn test_no_effects_rejects_a_delay() {
        assertions::assert_no_effects(&[Effect::Delay {
            duration: Duration::from_millis(1),
            action: Box::new(PostsAction::Fetch),
        }]);
    }
}
