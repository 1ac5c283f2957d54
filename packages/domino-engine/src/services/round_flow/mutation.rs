use crate::domain::{RoundAction, RoundState, RoundTransition};

/// Outcome of a successful orchestrated mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundFlowMutationResult {
    /// State after the intent and any AI continuation.
    pub state: RoundState,
    /// Edge-triggered transitions, in order.
    pub transitions: Vec<RoundTransition>,
    /// Every applied action, the caller's first, then AI seats'.
    pub actions: Vec<RoundAction>,
    /// Store version the mutation was checked against, when run via a store.
    pub old_version: Option<u64>,
}

impl RoundFlowMutationResult {
    pub fn final_version(&self) -> Option<u64> {
        self.old_version.map(|v| v + 1)
    }

    pub fn ai_actions(&self) -> usize {
        self.actions.len().saturating_sub(1)
    }
}
