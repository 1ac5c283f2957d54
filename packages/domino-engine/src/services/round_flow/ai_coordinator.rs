use tracing::{debug, info, warn};

use super::RoundFlowService;
use crate::ai::AiError;
use crate::domain::round::{apply_move, apply_pass};
use crate::domain::{
    derive_round_transitions, Phase, RoundAction, RoundState, RoundTransition, SeatView,
};
use crate::errors::EngineError;
use crate::services::ServiceError;

impl RoundFlowService {
    /// Let AI seats act until a human seat is to play or the round ends.
    ///
    /// Any AI error or illegal AI choice aborts the whole continuation; the
    /// caller discards `working`.
    pub(super) fn run_ai_continuation(
        &self,
        working: &mut RoundState,
        actions: &mut Vec<RoundAction>,
        transitions: &mut Vec<RoundTransition>,
    ) -> Result<(), ServiceError> {
        while working.phase == Phase::Play {
            let seat = working.current_seat;
            let is_ai = working
                .seats
                .get(seat as usize)
                .is_some_and(|s| s.is_ai);
            if !is_ai {
                debug!(seat, "human seat to act, stopping AI processing");
                break;
            }
            let Some(player) = self.players.get(seat as usize).and_then(Option::as_ref) else {
                return Err(ServiceError::config(format!(
                    "seat {seat} is AI-controlled but no AI is configured for it"
                )));
            };

            let view = SeatView::for_seat(working, seat);
            let choice = player.choose_move(&view).map_err(|source| {
                warn!(seat, error = %source, "AI failed to choose a move");
                ServiceError::Ai { seat, source }
            })?;

            let before = working.clone();
            let action = match choice {
                // The state machine is the only judge of legality.
                Some(placement) => apply_move(working, seat, placement.tile_index, placement.end)
                    .map_err(|e| match e {
                        EngineError::IllegalMove { .. } => {
                            warn!(seat, ?placement, error = %e, "AI chose an illegal placement");
                            ServiceError::Ai {
                                seat,
                                source: AiError::InvalidMove(e.to_string()),
                            }
                        }
                        other => ServiceError::Engine(other),
                    })?,
                None => apply_pass(working, seat, self.config.pass_policy).map_err(|e| {
                    warn!(seat, error = %e, "AI pass rejected");
                    ServiceError::Ai {
                        seat,
                        source: AiError::InvalidMove(e.to_string()),
                    }
                })?,
            };

            match action {
                RoundAction::Played { tile, end, .. } => {
                    info!(seat, tile = %tile, end = ?end, "AI played");
                }
                RoundAction::Passed { .. } => {
                    info!(seat, pass_count = working.pass_count, "AI passed");
                }
            }
            actions.push(action);
            transitions.extend(derive_round_transitions(&before, working));
        }
        Ok(())
    }
}
