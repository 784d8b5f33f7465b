//! Declarative macros for ergonomic effect construction
//!
//! These macros reduce boilerplate when a reducer describes async work.

/// Create an `Effect::Future` from an async block
///
/// # Example
///
/// ```
/// use junimo_core::{async_effect, Effect};
///
/// #[derive(Debug)]
/// enum CartAction {
///     Loaded { items: usize },
/// }
///
/// let effect: Effect<CartAction> = async_effect! {
///     Some(CartAction::Loaded { items: 3 })
/// };
/// assert!(matches!(effect, Effect::Future(_)));
/// ```
#[macro_export]
macro_rules! async_effect {
    ($($body:tt)*) => {
        $crate::effect::Effect::Future(
            ::std::boxed::Box::pin(async move { $($body)* })
        )
    };
}

/// Create an `Effect::Delay` for scheduling delayed actions
///
/// # Example
///
/// ```
/// use junimo_core::{delay, Effect};
/// use std::time::Duration;
///
/// #[derive(Debug)]
/// enum SearchAction {
///     Fire,
/// }
///
/// let effect: Effect<SearchAction> = delay! {
///     duration: Duration::from_millis(300),
///     action: SearchAction::Fire
/// };
/// assert!(matches!(effect, Effect::Delay { .. }));
/// ```
#[macro_export]
macro_rules! delay {
    (
        duration: $duration:expr,
        action: $action:expr
    ) => {
        $crate::effect::Effect::Delay {
            duration: $duration,
            action: ::std::boxed::Box::new($action),
        }
    };
}
