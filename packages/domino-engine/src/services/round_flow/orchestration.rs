use rand::Rng;
use tracing::{debug, info};

use super::{RoundFlowMutationResult, RoundFlowService};
use crate::domain::round::apply_intent;
use crate::domain::{deal_new_round, derive_round_transitions, Intent, RoundState, RoundTransition};
use crate::services::round_store::{RoundId, RoundStore};
use crate::services::ServiceError;

impl RoundFlowService {
    /// Deal a new round, mark AI seats and run AI seats up to the first human
    /// decision.
    pub fn start_round<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<RoundFlowMutationResult, ServiceError> {
        let mut state = deal_new_round(rng, self.config.max_deal_attempts)?;
        for (seat, seat_state) in state.seats.iter_mut().enumerate() {
            seat_state.is_ai = self.players[seat].is_some();
        }
        info!(opening_seat = state.opening_seat, "round dealt");

        let mut actions = Vec::new();
        let mut transitions = vec![RoundTransition::TurnBecame {
            seat: state.current_seat,
        }];
        self.run_ai_continuation(&mut state, &mut actions, &mut transitions)?;
        log_if_ended(&state);

        Ok(RoundFlowMutationResult {
            state,
            transitions,
            actions,
            old_version: None,
        })
    }

    /// Apply `intent` to a copy of `state`, then the AI continuation.
    ///
    /// On error the caller's `state` is the current truth; nothing was applied.
    pub fn submit(
        &self,
        state: &RoundState,
        intent: Intent,
    ) -> Result<RoundFlowMutationResult, ServiceError> {
        debug!(seat = intent.seat(), ?intent, "intent submitted");
        let mut working = state.clone();
        let action = apply_intent(&mut working, &intent, self.config.pass_policy)?;

        let mut actions = vec![action];
        let mut transitions = derive_round_transitions(state, &working);
        self.run_ai_continuation(&mut working, &mut actions, &mut transitions)?;
        log_if_ended(&working);

        Ok(RoundFlowMutationResult {
            state: working,
            transitions,
            actions,
            old_version: None,
        })
    }

    /// Start a round and register it in `store`.
    pub fn start_round_in_store<R: Rng + ?Sized>(
        &self,
        store: &RoundStore,
        rng: &mut R,
    ) -> Result<(RoundId, RoundFlowMutationResult), ServiceError> {
        let mut result = self.start_round(rng)?;
        let round_id = store.insert(result.state.clone());
        result.old_version = Some(0);
        info!(%round_id, "round registered");
        Ok((round_id, result))
    }

    /// [`submit`](Self::submit) serialized through `store`: rejected if the
    /// round is busy or `expected_version` is stale, committed atomically
    /// otherwise.
    pub fn submit_to_store(
        &self,
        store: &RoundStore,
        round_id: RoundId,
        expected_version: u64,
        intent: Intent,
    ) -> Result<RoundFlowMutationResult, ServiceError> {
        let (mut result, version) = store.mutate(round_id, expected_version, |state| {
            let result = self.submit(state, intent)?;
            Ok((result.state.clone(), result))
        })?;
        result.old_version = Some(expected_version);
        debug!(%round_id, version, "intent committed");
        Ok(result)
    }
}

fn log_if_ended(state: &RoundState) {
    if let (Some(winner), Some(reason)) = (state.winner_seat, state.end_reason) {
        info!(winner, reason = ?reason, "round ended");
    }
}
