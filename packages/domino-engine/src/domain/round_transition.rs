use serde::{Deserialize, Serialize};

use crate::domain::state::{Phase, RoundEnd, RoundState, Seat};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RoundTransition {
    /// Edge-triggered: the turn became a specific seat.
    TurnBecame { seat: Seat },

    /// Edge-triggered: Play -> Ended
    RoundEnded { winner: Seat, reason: RoundEnd },
}

/// Derive transitions from before/after round state.
pub fn derive_round_transitions(before: &RoundState, after: &RoundState) -> Vec<RoundTransition> {
    let mut transitions = Vec::new();

    // 1. Turn change (only meaningful while in play)
    if after.phase == Phase::Play
        && (before.phase != Phase::Play || before.current_seat != after.current_seat)
    {
        transitions.push(RoundTransition::TurnBecame {
            seat: after.current_seat,
        });
    }

    // 2. Round end (!Ended -> Ended)
    if before.phase != Phase::Ended && after.phase == Phase::Ended {
        if let (Some(winner), Some(reason)) = (after.winner_seat, after.end_reason) {
            transitions.push(RoundTransition::RoundEnded { winner, reason });
        }
    }

    transitions
}
