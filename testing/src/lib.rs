//! # Junimo Testing
//!
//! Testing utilities for the Junimo storefront state layer.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - [`Gate`], a latch for controlling when fake responses resolve
//! - A Given-When-Then harness and assertion helpers for reducers
//!
//! ## Example
//!
//! ```ignore
//! use junimo_testing::{test_clock, Gate};
//! use junimo_runtime::Store;
//!
//! #[tokio::test]
//! async fn test_latest_search_wins() {
//!     let slow = Gate::new();
//!     let services = FakeServices::default().hold_search("ze", slow.clone());
//!     let store = storefront_store(services);
//!
//!     store.send(AppAction::Search(SearchAction::QueryChanged("ze".into()))).await?;
//!     store.send(AppAction::Search(SearchAction::QueryChanged("zel".into()))).await?;
//!     slow.open();
//!     // only the "zel" results reach state
//! }
//! ```

use chrono::{DateTime, Utc};
use junimo_core::environment::Clock;

pub mod reducer_test;

/// Mock implementations for testing.
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use junimo_testing::mocks::FixedClock;
    /// use junimo_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}

/// Test helpers and utilities.
pub mod helpers {
    use std::sync::Arc;
    use tokio::sync::watch;

    /// A one-way latch shared between a test and the fakes it drives.
    ///
    /// Fakes await [`Gate::wait`] before answering; the test calls
    /// [`Gate::open`] to release them in whatever order it wants to assert on.
    ///
    /// ```
    /// use junimo_testing::Gate;
    ///
    /// # tokio_test::block_on(async {
    /// let gate = Gate::new();
    /// let waiter = gate.clone();
    /// let task = tokio::spawn(async move { waiter.wait().await; 42 });
    ///
    /// gate.open();
    /// assert_eq!(task.await.ok(), Some(42));
    /// # });
    /// ```
    #[derive(Debug, Clone)]
    pub struct Gate {
        open: Arc<watch::Sender<bool>>,
    }

    impl Gate {
        /// A closed gate
        #[must_use]
        pub fn new() -> Self {
            let (tx, _) = watch::channel(false);
            Self { open: Arc::new(tx) }
        }

        /// A gate that never blocks
        #[must_use]
        pub fn opened() -> Self {
            let gate = Self::new();
            gate.open();
            gate
        }

        /// Release every current and future waiter
        pub fn open(&self) {
            self.open.send_replace(true);
        }

        /// Whether [`Gate::open`] has been called
        #[must_use]
        pub fn is_open(&self) -> bool {
            *self.open.borrow()
        }

        /// Resolve once the gate is open
        pub async fn wait(&self) {
            let mut rx = self.open.subscribe();
            // The sender lives as long as self, so this cannot fail
            let _ = rx.wait_for(|open| *open).await;
        }
    }

    impl Default for Gate {
        fn default() -> Self {
            Self::new()
        }
    }

    /// Install a test-friendly tracing subscriber honoring `RUST_LOG`.
    ///
    /// Safe to call from every test; only the first call installs.
    pub fn init_test_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    }
}

// Re-export commonly used items
pub use helpers::{init_test_tracing, Gate};
pub use mocks::{test_clock, FixedClock};
pub use reducer_test::{assertions, ReducerTest};
