//! Shared types for the simulator.

use clap::ValueEnum;

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Jsonl,
    Json,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum AiType {
    FirstMatch,
    Random,
    HeavyFirst,
}

impl AiType {
    /// Registry name.
    pub fn name(&self) -> &'static str {
        match self {
            AiType::FirstMatch => "FirstMatch",
            AiType::Random => "RandomPlayer",
            AiType::HeavyFirst => "HeavyFirst",
        }
    }
}
