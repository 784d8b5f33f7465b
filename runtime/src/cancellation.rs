//! Latest-wins bookkeeping for cancellable effects.
//!
//! Every `EffectId` family has a generation counter. Starting a new member
//! bumps the generation and aborts the tasks of older members. Tasks carry
//! the [`Ticket`] they were started with, and the store drops any action
//! whose ticket is no longer current. Aborting alone is not enough, because
//! a task can finish between the bump and the abort.

use junimo_core::EffectId;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::task::AbortHandle;

/// Proof of membership in one generation of an effect family.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Ticket {
    id: EffectId,
    generation: u64,
}

impl Ticket {
    pub(crate) const fn id(&self) -> &EffectId {
        &self.id
    }
}

#[derive(Default)]
struct Family {
    generation: u64,
    tasks: Vec<AbortHandle>,
}

impl Family {
    fn abort_all(&mut self) -> usize {
        let mut aborted = 0;
        for task in self.tasks.drain(..) {
            if !task.is_finished() {
                task.abort();
                aborted += 1;
            }
        }
        aborted
    }
}

/// Registry of in-flight cancellable effects, shared by all store clones.
#[derive(Default)]
pub(crate) struct InFlight {
    families: Mutex<HashMap<EffectId, Family>>,
}

impl InFlight {
    fn families(&self) -> MutexGuard<'_, HashMap<EffectId, Family>> {
        self.families.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Supersede the family and hand out the ticket for its newest member.
    pub(crate) fn begin(&self, id: EffectId) -> Ticket {
        let mut families = self.families();
        let family = families.entry(id.clone()).or_default();
        let aborted = family.abort_all();
        family.generation += 1;

        if aborted > 0 {
            tracing::debug!(effect_id = %id, aborted, "Superseded in-flight effects");
            metrics::counter!("store.effects.cancelled").increment(aborted as u64);
        }

        Ticket {
            id,
            generation: family.generation,
        }
    }

    /// Supersede the family without starting a new member.
    pub(crate) fn cancel(&self, id: &EffectId) -> usize {
        let mut families = self.families();
        let Some(family) = families.get_mut(id) else {
            return 0;
        };
        family.generation += 1;
        let aborted = family.abort_all();

        tracing::debug!(effect_id = %id, aborted, "Cancelled effect family");
        metrics::counter!("store.effects.cancelled").increment(aborted as u64);
        aborted
    }

    /// Register a task spawned on behalf of `ticket`.
    ///
    /// A task whose ticket was superseded before registration is aborted
    /// right away.
    pub(crate) fn attach(&self, ticket: &Ticket, task: AbortHandle) {
        let mut families = self.families();
        match families.get_mut(&ticket.id) {
            Some(family) if family.generation == ticket.generation => {
                family.tasks.retain(|t| !t.is_finished());
                family.tasks.push(task);
            },
            _ => task.abort(),
        }
    }

    pub(crate) fn is_current(&self, ticket: &Ticket) -> bool {
        self.families()
            .get(&ticket.id)
            .is_some_and(|family| family.generation == ticket.generation)
    }

    /// Number of unfinished tasks in the family
    pub(crate) fn running(&self, id: &EffectId) -> usize {
        self.families()
            .get(id)
            .map_or(0, |family| family.tasks.iter().filter(|t| !t.is_finished()).count())
    }
}
