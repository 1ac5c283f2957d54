//! Sheds the heaviest playable tile first, to limit pips held if the round blocks.

use super::trait_def::{AiError, AiPlayer};
use crate::domain::{Placement, SeatView};

#[derive(Debug, Clone, Copy, Default)]
pub struct HeavyFirst;

impl HeavyFirst {
    pub const NAME: &'static str = "HeavyFirst";
    pub const VERSION: &'static str = "1.0.0";
}

impl AiPlayer for HeavyFirst {
    fn choose_move(&self, view: &SeatView) -> Result<Option<Placement>, AiError> {
        // max_by_key keeps the last maximum; reverse so hand order breaks ties.
        let best = view
            .legal_moves()
            .into_iter()
            .rev()
            .max_by_key(|p| view.hand.get(p.tile_index).map_or(0, |t| t.pips()));
        Ok(best)
    }
}
