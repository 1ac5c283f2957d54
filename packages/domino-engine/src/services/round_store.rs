//! Process-local registry of live rounds, one writer per round at a time.
//!
//! Each round sits behind its own mutex. The map itself is sharded
//! (`DashMap`), and its guard is released before a round's mutex is taken, so
//! different rounds never contend. A mutation that finds its round already
//! locked is rejected, never queued.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use tracing::{debug, warn};
use uuid::Uuid;

use super::{ConflictKind, ServiceError};
use crate::domain::RoundState;

pub type RoundId = Uuid;

/// A round and its optimistic-lock version. Versions start at 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRound {
    pub state: RoundState,
    pub version: u64,
}

#[derive(Debug, Default)]
pub struct RoundStore {
    rounds: DashMap<RoundId, Arc<Mutex<StoredRound>>>,
}

impl RoundStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new round at version 1.
    pub fn insert(&self, state: RoundState) -> RoundId {
        let round_id = Uuid::new_v4();
        self.rounds.insert(
            round_id,
            Arc::new(Mutex::new(StoredRound { state, version: 1 })),
        );
        debug!(%round_id, "round stored");
        round_id
    }

    fn slot(&self, round_id: RoundId) -> Result<Arc<Mutex<StoredRound>>, ServiceError> {
        self.rounds
            .get(&round_id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or(ServiceError::NotFound { round_id })
    }

    /// Copy of the committed round. Waits for an in-flight mutation to finish,
    /// so readers never see a half-applied AI continuation.
    pub fn get(&self, round_id: RoundId) -> Result<StoredRound, ServiceError> {
        let slot = self.slot(round_id)?;
        let guard = slot.lock();
        Ok(guard.clone())
    }

    pub fn remove(&self, round_id: RoundId) -> Option<StoredRound> {
        self.rounds
            .remove(&round_id)
            .map(|(_, slot)| slot.lock().clone())
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Run `mutation` against the committed state of `round_id`.
    ///
    /// The closure receives the committed state and returns the next one plus
    /// a value for the caller. The next state is committed (version + 1) only
    /// if the closure succeeds; on error nothing changes. Returns the closure's
    /// value and the new version.
    pub fn mutate<T, F>(
        &self,
        round_id: RoundId,
        expected_version: u64,
        mutation: F,
    ) -> Result<(T, u64), ServiceError>
    where
        F: FnOnce(&RoundState) -> Result<(RoundState, T), ServiceError>,
    {
        let slot = self.slot(round_id)?;
        let Some(mut guard) = slot.try_lock() else {
            warn!(%round_id, expected_version, "round busy, mutation rejected");
            return Err(ServiceError::conflict(
                ConflictKind::RoundBusy,
                format!("round {round_id} has a mutation in flight"),
            ));
        };

        if guard.version != expected_version {
            warn!(
                %round_id,
                expected_version,
                version = guard.version,
                "stale round version"
            );
            return Err(ServiceError::conflict(
                ConflictKind::OptimisticLock,
                format!(
                    "Round lock version mismatch: expected {expected_version}, but round has version {}",
                    guard.version
                ),
            ));
        }

        let (next, out) = mutation(&guard.state)?;
        guard.state = next;
        guard.version += 1;
        debug!(%round_id, version = guard.version, "round committed");
        Ok((out, guard.version))
    }
}
