//! Engine settings read from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `DOMINO_MAX_DEAL_ATTEMPTS` | `64` |
//! | `DOMINO_PASS_POLICY` | `permissive` (or `strict`) |
//! | `DOMINO_AI` | `FirstMatch` |
//! | `DOMINO_AI_SEED` | unset |

use std::env;

use crate::ai::registry;
use crate::domain::PassPolicy;
use crate::services::ServiceError;

pub const DEFAULT_MAX_DEAL_ATTEMPTS: u32 = 64;
pub const DEFAULT_AI: &str = "FirstMatch";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Redeals allowed before `DealFailure`. At least 1.
    pub max_deal_attempts: u32,
    pub pass_policy: PassPolicy,
    /// Registry name of the AI driving AI seats.
    pub ai_name: String,
    pub ai_seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_deal_attempts: DEFAULT_MAX_DEAL_ATTEMPTS,
            pass_policy: PassPolicy::Permissive,
            ai_name: DEFAULT_AI.to_string(),
            ai_seed: None,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, ServiceError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key/value source; unset and blank values take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServiceError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let max_deal_attempts = match var("DOMINO_MAX_DEAL_ATTEMPTS") {
            None => DEFAULT_MAX_DEAL_ATTEMPTS,
            Some(raw) => match raw.parse::<u32>() {
                Ok(n) if n >= 1 => n,
                _ => {
                    return Err(ServiceError::config(format!(
                        "DOMINO_MAX_DEAL_ATTEMPTS must be a positive integer, got '{raw}'"
                    )))
                }
            },
        };

        let pass_policy = match var("DOMINO_PASS_POLICY").as_deref() {
            None => PassPolicy::Permissive,
            Some(raw) => parse_pass_policy(raw)?,
        };

        let ai_name = var("DOMINO_AI").unwrap_or_else(|| DEFAULT_AI.to_string());
        if registry::by_name(&ai_name).is_none() {
            return Err(ServiceError::config(format!(
                "DOMINO_AI names no registered AI: '{ai_name}'"
            )));
        }

        let ai_seed = match var("DOMINO_AI_SEED") {
            None => None,
            Some(raw) => Some(raw.parse::<u64>().map_err(|_| {
                ServiceError::config(format!("DOMINO_AI_SEED must be a u64, got '{raw}'"))
            })?),
        };

        Ok(Self {
            max_deal_attempts,
            pass_policy,
            ai_name,
            ai_seed,
        })
    }
}

fn parse_pass_policy(raw: &str) -> Result<PassPolicy, ServiceError> {
    match raw.to_ascii_lowercase().as_str() {
        "permissive" => Ok(PassPolicy::Permissive),
        "strict" => Ok(PassPolicy::Strict),
        _ => Err(ServiceError::config(format!(
            "DOMINO_PASS_POLICY must be 'permissive' or 'strict', got '{raw}'"
        ))),
    }
}
