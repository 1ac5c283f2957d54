//! Greedy first-match selector, the engine's baseline AI.

use super::trait_def::{AiError, AiPlayer};
use crate::domain::rules::DOUBLE_SIX;
use crate::domain::{End, Pips, Placement, SeatView, Tile};

/// Pick a tile and end for `hand`, or `None` if nothing fits.
///
/// - Empty chain: the double-six at the left end, if held.
/// - Otherwise the first tile (hand order) matching the left end; failing
///   that, the first tile matching the right end.
///
/// Pure: the same inputs always give the same answer.
pub fn select_move(
    hand: &[Tile],
    left_end: Option<Pips>,
    right_end: Option<Pips>,
    chain_empty: bool,
) -> Option<Placement> {
    if chain_empty {
        return hand
            .iter()
            .position(|t| *t == DOUBLE_SIX)
            .map(|i| Placement::new(i, End::Left));
    }
    let first_matching = |pips: Option<Pips>| {
        let pips = pips?;
        hand.iter().position(|t| t.has(pips))
    };
    if let Some(i) = first_matching(left_end) {
        return Some(Placement::new(i, End::Left));
    }
    first_matching(right_end).map(|i| Placement::new(i, End::Right))
}

/// [`AiPlayer`] wrapper around [`select_move`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstMatch;

impl FirstMatch {
    pub const NAME: &'static str = "FirstMatch";
    pub const VERSION: &'static str = "1.0.0";

    pub const fn new() -> Self {
        Self
    }
}

impl AiPlayer for FirstMatch {
    fn choose_move(&self, view: &SeatView) -> Result<Option<Placement>, AiError> {
        Ok(select_move(
            &view.hand,
            view.left_end,
            view.right_end,
            view.chain_empty(),
        ))
    }
}
