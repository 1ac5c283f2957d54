//! In-memory tournament simulator.
//!
//! Every round is an all-AI round run through [`RoundFlowService`], so the
//! simulator exercises the same orchestration path as a live table. Deals and
//! AI seeds are derived from one 32-byte tournament seed, so a tournament
//! replays exactly.

use std::fmt;

use domino_engine::ai::{create_ai, AiConfig, AiPlayer};
use domino_engine::domain::rules::PLAYERS;
use domino_engine::domain::{
    derive_ai_seed, derive_dealing_seed, round_points, RoundAction, RoundState, Seat,
};
use domino_engine::{EngineConfig, RoundFlowService, ServiceError};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// One finished round.
#[derive(Debug, Clone)]
pub struct RoundResult {
    pub round_no: u32,
    pub dealing_seed: [u8; 32],
    pub state: RoundState,
    pub actions: Vec<RoundAction>,
    pub winner: Seat,
    pub points: u16,
}

impl RoundResult {
    pub fn plays(&self) -> usize {
        self.actions
            .iter()
            .filter(|a| matches!(a, RoundAction::Played { .. }))
            .count()
    }

    pub fn passes(&self) -> usize {
        self.actions.len() - self.plays()
    }
}

pub struct Simulator {
    game_seed: [u8; 32],
    ai_names: [String; PLAYERS],
    config: EngineConfig,
}

impl Simulator {
    pub fn new(game_seed: [u8; 32], ai_names: [String; PLAYERS], config: EngineConfig) -> Self {
        Self {
            game_seed,
            ai_names,
            config,
        }
    }

    /// Deal and play round `round_no` to the end.
    pub fn simulate_round(&self, round_no: u32) -> Result<RoundResult, SimulatorError> {
        let dealing_seed = derive_dealing_seed(&self.game_seed, round_no);
        let service = RoundFlowService::with_players(self.config.clone(), self.players(round_no)?);

        let mut rng = ChaCha20Rng::from_seed(dealing_seed);
        let result = service.start_round(&mut rng)?;

        let (winner, points) = round_points(&result.state).ok_or_else(|| {
            SimulatorError::InvalidState(format!(
                "round {round_no} stopped in {:?} with seat {} to act",
                result.state.phase, result.state.current_seat
            ))
        })?;

        Ok(RoundResult {
            round_no,
            dealing_seed,
            state: result.state,
            actions: result.actions,
            winner,
            points,
        })
    }

    fn players(
        &self,
        round_no: u32,
    ) -> Result<[Option<Box<dyn AiPlayer>>; PLAYERS], SimulatorError> {
        let mut players: [Option<Box<dyn AiPlayer>>; PLAYERS] = Default::default();
        for (seat, slot) in players.iter_mut().enumerate() {
            let name = &self.ai_names[seat];
            let seed = derive_ai_seed(&self.game_seed, round_no, seat as Seat);
            let player = create_ai(name, Some(&AiConfig::with_seed(seed)))
                .ok_or_else(|| SimulatorError::UnknownAi(name.clone()))?;
            *slot = Some(player);
        }
        Ok(players)
    }
}

/// Errors that can occur during simulation.
#[derive(Debug)]
pub enum SimulatorError {
    /// AI name not in the registry
    UnknownAi(String),
    /// Orchestration or rules error
    Service(ServiceError),
    /// Round did not reach an end
    InvalidState(String),
}

impl From<ServiceError> for SimulatorError {
    fn from(err: ServiceError) -> Self {
        SimulatorError::Service(err)
    }
}

impl fmt::Display for SimulatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulatorError::UnknownAi(name) => write!(f, "Unknown AI type: {name}"),
            SimulatorError::Service(err) => write!(f, "Service error ({}): {err}", err.code()),
            SimulatorError::InvalidState(msg) => write!(f, "Invalid state: {msg}"),
        }
    }
}

impl std::error::Error for SimulatorError {}
