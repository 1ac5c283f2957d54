//! Round flow orchestration: the single entry point collaborators call.
//!
//! Every operation works on a copy of the caller's state. The copy is
//! returned only if the intent and the whole AI continuation that follows it
//! succeed.

mod ai_coordinator;
mod mutation;
mod orchestration;

use crate::ai::{create_ai, AiConfig, AiPlayer};
use crate::config::EngineConfig;
use crate::domain::rules::PLAYERS;
use crate::domain::Seat;
use crate::services::ServiceError;

pub use mutation::RoundFlowMutationResult;

pub struct RoundFlowService {
    config: EngineConfig,
    /// `Some` marks an AI-controlled seat.
    players: [Option<Box<dyn AiPlayer>>; PLAYERS],
}

impl RoundFlowService {
    /// Seats flagged in `ai_seats` are driven by the configured AI.
    ///
    /// With `ai_seed` set, seat `s` is seeded with `ai_seed + s`.
    pub fn new(config: EngineConfig, ai_seats: [bool; PLAYERS]) -> Result<Self, ServiceError> {
        let mut players: [Option<Box<dyn AiPlayer>>; PLAYERS] = Default::default();
        for (seat, slot) in players.iter_mut().enumerate() {
            if !ai_seats[seat] {
                continue;
            }
            let ai_config = config
                .ai_seed
                .map(|s| AiConfig::with_seed(s.wrapping_add(seat as u64)))
                .unwrap_or_default();
            let player = create_ai(&config.ai_name, Some(&ai_config)).ok_or_else(|| {
                ServiceError::config(format!("unknown AI '{}'", config.ai_name))
            })?;
            *slot = Some(player);
        }
        Ok(Self { config, players })
    }

    /// Explicit players per seat; `None` seats are human.
    pub fn with_players(
        config: EngineConfig,
        players: [Option<Box<dyn AiPlayer>>; PLAYERS],
    ) -> Self {
        Self { config, players }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn is_ai_seat(&self, seat: Seat) -> bool {
        self.players
            .get(seat as usize)
            .is_some_and(|p| p.is_some())
    }

    pub fn ai_seats(&self) -> [bool; PLAYERS] {
        std::array::from_fn(|i| self.players[i].is_some())
    }
}
