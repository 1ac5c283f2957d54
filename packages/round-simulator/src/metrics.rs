//! Per-round metrics written by the simulator.

use domino_engine::domain::rules::PLAYERS;
use domino_engine::domain::scoring::pip_totals;
use domino_engine::domain::{OrientedTile, RoundAction, RoundEnd, Seat};
use serde::Serialize;

use crate::simulator::RoundResult;

/// Complete round metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct RoundMetrics {
    pub round_no: u32,
    /// Hex-encoded dealing seed; replays this deal.
    pub seed: String,
    pub timestamp: String,
    pub config: SimulationConfig,
    pub result: RoundResultMetrics,
    pub chain: Vec<OrientedTile>,
    pub actions: Vec<RoundAction>,
    pub seat_metrics: Vec<SeatMetrics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SimulationConfig {
    pub ai_types: [String; PLAYERS],
    pub total_rounds: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundResultMetrics {
    pub opening_seat: Seat,
    pub winner: Seat,
    pub end_reason: RoundEnd,
    pub points: u16,
    pub plays: usize,
    pub passes: usize,
    pub pip_totals: [u16; PLAYERS],
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeatMetrics {
    pub seat: Seat,
    pub ai_type: String,
    pub plays: usize,
    pub passes: usize,
    pub tiles_left: usize,
}

pub fn build_round_metrics(
    ai_types: [String; PLAYERS],
    total_rounds: u32,
    result: &RoundResult,
    duration_ms: f64,
) -> RoundMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let state = &result.state;
    let seat_metrics = (0..PLAYERS)
        .map(|i| {
            let seat = i as Seat;
            let (plays, passes) = result.actions.iter().filter(|a| a.seat() == seat).fold(
                (0, 0),
                |(plays, passes), action| match action {
                    RoundAction::Played { .. } => (plays + 1, passes),
                    RoundAction::Passed { .. } => (plays, passes + 1),
                },
            );
            SeatMetrics {
                seat,
                ai_type: ai_types[i].clone(),
                plays,
                passes,
                tiles_left: state.hand(seat).len(),
            }
        })
        .collect();

    RoundMetrics {
        round_no: result.round_no,
        seed: hex::encode(result.dealing_seed),
        timestamp,
        config: SimulationConfig {
            ai_types,
            total_rounds,
        },
        result: RoundResultMetrics {
            opening_seat: state.opening_seat,
            winner: result.winner,
            end_reason: state.end_reason.unwrap_or(RoundEnd::Domino),
            points: result.points,
            plays: result.plays(),
            passes: result.passes(),
            pip_totals: pip_totals(&state.seats),
            duration_ms,
        },
        chain: state.chain.clone(),
        actions: result.actions.clone(),
        seat_metrics,
    }
}

/// CSV summary row for quick analysis.
#[derive(Debug, Serialize)]
pub struct CsvSummaryRow {
    pub round_no: u32,
    pub seed: String,
    pub opening_seat: Seat,
    pub winner: Seat,
    pub end_reason: RoundEnd,
    pub points: u16,
    pub plays: usize,
    pub passes: usize,
    pub seat0_pips: u16,
    pub seat1_pips: u16,
    pub seat2_pips: u16,
    pub seat3_pips: u16,
    pub seat0_ai: String,
    pub seat1_ai: String,
    pub seat2_ai: String,
    pub seat3_ai: String,
}

impl From<&RoundMetrics> for CsvSummaryRow {
    fn from(metrics: &RoundMetrics) -> Self {
        let r = &metrics.result;
        CsvSummaryRow {
            round_no: metrics.round_no,
            seed: metrics.seed.clone(),
            opening_seat: r.opening_seat,
            winner: r.winner,
            end_reason: r.end_reason,
            points: r.points,
            plays: r.plays,
            passes: r.passes,
            seat0_pips: r.pip_totals[0],
            seat1_pips: r.pip_totals[1],
            seat2_pips: r.pip_totals[2],
            seat3_pips: r.pip_totals[3],
            seat0_ai: metrics.config.ai_types[0].clone(),
            seat1_ai: metrics.config.ai_types[1].clone(),
            seat2_ai: metrics.config.ai_types[2].clone(),
            seat3_ai: metrics.config.ai_types[3].clone(),
        }
    }
}
