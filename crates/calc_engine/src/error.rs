//! Errors and warnings.

use crate::core_data::{Stat, Type};
use crate::solver::{ObservedStat, SpreadHypothesis};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Malformed input, rejected before any formula runs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("unknown generation {0} (expected 1-9)")]
    Generation(u8),
    #[error("level {0} out of range 1-100")]
    Level(u8),
    #[error("a type-set needs one or two types, got {0}")]
    TypeCount(usize),
    #[error("type-set repeats {0:?}")]
    DuplicateType(Type),
    #[error("{ty:?} does not exist in generation {gen}")]
    TypeNotInGeneration { ty: Type, gen: u8 },
    #[error("base {0:?} must be at least 1")]
    ZeroBaseStat(Stat),
    #[error("{stat:?} IV {value} exceeds {max}")]
    Iv { stat: Stat, value: u8, max: u8 },
    #[error("{stat:?} DV {value} exceeds 15")]
    Dv { stat: Stat, value: u8 },
    #[error("{stat:?} EV {value} exceeds {max}")]
    Ev { stat: Stat, value: u16, max: u16 },
    #[error("{stat:?} EV {value} is not a multiple of {granularity}")]
    EvGranularity { stat: Stat, value: u16, granularity: u16 },
    #[error("EV total {total} exceeds {max}")]
    EvTotal { total: u32, max: u32 },
    #[error("{stat:?} boost {value} out of range -6..=6")]
    Boost { stat: Stat, value: i8 },
    #[error("HP fraction {current}/{max} is invalid")]
    HpFraction { current: u16, max: u16 },
    #[error("observed {stat:?} value must be positive")]
    Observation { stat: Stat },
}

/// A new observation is incompatible with every live hypothesis.
///
/// Carries both sides so the caller can decide which to trust.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("evidence conflict for {creature_id}: {observation:?} leaves no admissible spread ({} prior hypotheses)", .prior.len())]
pub struct EvidenceConflict {
    pub creature_id: String,
    pub observation: ObservedStat,
    pub prior: Vec<SpreadHypothesis>,
}

/// Failure to record an observation in a [`crate::solver::SpreadTracker`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SolveError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Conflict(#[from] EvidenceConflict),
}

/// Non-fatal conditions collected during a matchup computation.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum CalcWarning {
    #[error("unknown ability '{0}' ignored")]
    UnknownAbility(String),
    #[error("unknown item '{0}' ignored")]
    UnknownItem(String),
    #[error("unknown fixed-damage move '{0}'; no damage computed")]
    UnknownFixedDamageMove(String),
}

impl CalcWarning {
    /// Log and return the warning.
    pub fn emit(self) -> Self {
        log::warn!("{}", self);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ValidationError::EvTotal { total: 512, max: 510 };
        assert_eq!(err.to_string(), "EV total 512 exceeds 510");
        let warn = CalcWarning::UnknownItem("mystery".into());
        assert_eq!(warn.to_string(), "unknown item 'mystery' ignored");
    }

    #[test]
    fn test_warning_json() {
        let json = serde_json::to_string(&CalcWarning::UnknownAbility("zzz".into())).unwrap();
        assert_eq!(json, r#"{"kind":"unknown_ability","id":"zzz"}"#);
    }
}
