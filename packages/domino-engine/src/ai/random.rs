//! Random AI player - picks uniformly among legal placements.
//!
//! Reference opponent for simulations. Seeded instances are reproducible:
//! the same seed and the same sequence of views give the same choices.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{AiError, AiPlayer};
use crate::domain::{Placement, SeatView};

pub struct RandomPlayer {
    /// `choose_move` takes `&self`; the RNG needs mutable access.
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "RandomPlayer";
    pub const VERSION: &'static str = "1.0.0";

    /// `None` seeds from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl AiPlayer for RandomPlayer {
    fn choose_move(&self, view: &SeatView) -> Result<Option<Placement>, AiError> {
        let legal = view.legal_moves();
        if legal.is_empty() {
            return Ok(None);
        }
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;
        Ok(legal.choose(&mut *rng).copied())
    }
}
