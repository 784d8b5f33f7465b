//! The request/success/failure lifecycle shared by every domain slice.
//!
//! A slice holds its data next to a [`RequestStatus`]. Action enums derive
//! `Lifecycle` (see `junimo-macros`) to tag which variants start a request,
//! deliver its result or report its failure, and reducers hand those phases
//! to [`RequestStatus::apply`] so every slice moves through the same states:
//!
//! | phase   | `loading` | `error`        | data        |
//! |---------|-----------|----------------|-------------|
//! | request | `true`    | cleared        | untouched   |
//! | success | `false`   | untouched      | replaced    |
//! | failure | `false`   | `Some(message)`| untouched   |

use crate::effect::EffectId;
use serde::{Deserialize, Serialize};

/// Where an action sits in a request lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase<'a> {
    /// A new request was dispatched
    Request,
    /// The request produced its payload
    Success,
    /// The request failed with a human-readable message
    Failure(&'a str),
}

/// Implemented (usually derived) by slice action enums.
pub trait Lifecycle {
    /// Stable `"<slice>/<Variant>"` name of this action.
    fn action_type(&self) -> &'static str;

    /// Lifecycle phase, or `None` for plain actions (logout, clear, ...).
    fn phase(&self) -> Option<Phase<'_>>;

    /// Cancellation family for effects started by this action.
    ///
    /// Every request variant is its own latest-wins family.
    fn effect_id(&self) -> EffectId {
        EffectId::from(self.action_type())
    }

    /// Returns true for request variants
    fn is_request(&self) -> bool {
        matches!(self.phase(), Some(Phase::Request))
    }
}

/// `loading`/`error` half of a slice.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestStatus {
    /// True between a request and its matching success or failure
    pub loading: bool,
    /// Message from the last failure, cleared by the next request
    pub error: Option<String>,
}

impl RequestStatus {
    /// Apply one lifecycle transition.
    pub fn apply(&mut self, phase: Phase<'_>) {
        match phase {
            Phase::Request => {
                self.loading = true;
                self.error = None;
            },
            Phase::Success => self.loading = false,
            Phase::Failure(message) => {
                self.loading = false;
                self.error = Some(message.to_owned());
            },
        }
    }

    /// Apply the transition carried by `action`, if it has one.
    ///
    /// Returns the phase so the caller can decide whether to touch data.
    pub fn track<'a, A: Lifecycle>(&mut self, action: &'a A) -> Option<Phase<'a>> {
        let phase = action.phase()?;
        self.apply(phase);
        Some(phase)
    }

    /// Back to idle: not loading, no error.
    pub fn reset(&mut self) {
        self.loading = false;
        self.error = None;
    }

    /// Neither loading nor failed
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        !self.loading && self.error.is_none()
    }
}
