//! The gem counter earned by starting challenges.
//!
//! Gems are stored as a decimal string under `userGems`, separate from the
//! task collection. A challenge pays out the first time it is seen moving
//! `todo → in-progress`; the ids already paid are kept under
//! `rewarded-tasks` so that moving a task back and forth never pays twice.

use super::store::Transition;
use crate::db::local_storage::{keys, KeyValueStore};
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

/// Award for a challenge without its own `xp`.
pub const DEFAULT_XP: u32 = 10;

pub struct RewardLedger<S: KeyValueStore> {
    storage: S,
    gems: u64,
    rewarded: BTreeSet<String>,
    default_xp: u32,
}

impl<S: KeyValueStore> RewardLedger<S> {
    pub fn open(storage: S, default_xp: u32) -> Self {
        let gems = load_gems(&storage);
        let rewarded = load_rewarded(&storage);
        debug!(gems, rewarded = rewarded.len(), "reward ledger opened");

        Self {
            storage,
            gems,
            rewarded,
            default_xp,
        }
    }

    pub fn gems(&self) -> u64 {
        self.gems
    }

    pub fn is_rewarded(&self, task_id: &str) -> bool {
        self.rewarded.contains(task_id)
    }

    /// Sets the counter to `amount` and persists it.
    pub fn update_gems(&mut self, amount: u64) {
        self.gems = amount;
        if let Err(error) = self.storage.set_item(keys::GEMS, &amount.to_string()) {
            warn!(%error, "failed to persist gems");
        }
    }

    /// Pays out for `transition` if it starts a challenge that has not been paid yet.
    ///
    /// Returns the number of gems awarded.
    pub fn observe(&mut self, transition: &Transition) -> Option<u32> {
        if !transition.is_challenge || !transition.is_start() {
            return None;
        }
        if !self.rewarded.insert(transition.task_id.clone()) {
            debug!(id = %transition.task_id, "challenge already rewarded");
            return None;
        }

        let award = transition.xp.unwrap_or(self.default_xp);
        self.update_gems(self.gems.saturating_add(u64::from(award)));
        self.persist_rewarded();
        info!(id = %transition.task_id, award, total = self.gems, "challenge started, gems awarded");
        Some(award)
    }

    /// Drops the payout record of a deleted task.
    pub fn forget(&mut self, task_id: &str) {
        if self.rewarded.remove(task_id) {
            self.persist_rewarded();
        }
    }

    fn persist_rewarded(&self) {
        let result = serde_json::to_string(&self.rewarded)
            .map_err(|error| error.to_string())
            .and_then(|serialized| {
                self.storage
                    .set_item(keys::REWARDED_TASKS, &serialized)
                    .map_err(|error| error.to_string())
            });
        if let Err(error) = result {
            warn!(%error, "failed to persist rewarded tasks");
        }
    }
}

fn load_gems<S: KeyValueStore>(storage: &S) -> u64 {
    match storage.get_item(keys::GEMS) {
        Ok(Some(stored)) => stored.trim().parse().unwrap_or_else(|_| {
            warn!(value = %stored, "stored gems are not a number, starting from zero");
            0
        }),
        Ok(None) => 0,
        Err(error) => {
            warn!(%error, "failed to read gems, starting from zero");
            0
        }
    }
}

fn load_rewarded<S: KeyValueStore>(storage: &S) -> BTreeSet<String> {
    match storage.get_item(keys::REWARDED_TASKS) {
        Ok(Some(stored)) => serde_json::from_str(&stored).unwrap_or_else(|error| {
            warn!(%error, "stored rewarded tasks are malformed, ignoring");
            BTreeSet::new()
        }),
        Ok(None) => BTreeSet::new(),
        Err(error) => {
            warn!(%error, "failed to read rewarded tasks");
            BTreeSet::new()
        }
    }
}
