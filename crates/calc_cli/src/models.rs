use calc_engine::hidden_power::HiddenPower;
use calc_engine::{
    BaseStats, CreatureSnapshot, FieldState, GeneticParameters, Move, NatureId, ObservedStat, SpreadHypothesis,
    StatVector,
};
use serde::{Deserialize, Serialize};

fn default_level() -> u8 {
    100
}

/// Input of `project`: one species and spread.
#[derive(Deserialize, Clone, Debug)]
pub struct ProjectInput {
    pub base_stats: BaseStats,
    #[serde(default = "default_level")]
    pub level: u8,
    #[serde(default)]
    pub genetics: GeneticParameters,
}

#[derive(Serialize, Clone, Debug)]
pub struct ProjectOutput {
    pub stats: StatVector,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_power: Option<HiddenPower>,
}

/// Input of `solve`: a species and what has been seen of it so far.
#[derive(Deserialize, Clone, Debug)]
pub struct SolveInput {
    #[serde(default = "default_creature")]
    pub creature_id: String,
    pub base_stats: BaseStats,
    #[serde(default = "default_level")]
    pub level: u8,
    #[serde(default)]
    pub observations: Vec<ObservedStat>,
}

fn default_creature() -> String {
    "p2a".to_string()
}

#[derive(Serialize, Clone, Debug, Default)]
pub struct SolveOutput {
    pub creature_id: String,
    pub observations: usize,
    /// Natures still possible; empty for legacy rulesets
    pub natures: Vec<NatureId>,
    /// The only spread left, when the evidence pins it down
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique: Option<GeneticParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate: Option<Estimate>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hypotheses: Vec<SpreadHypothesis>,
}

#[derive(Serialize, Clone, Debug)]
pub struct Estimate {
    pub strategy: &'static str,
    pub genetics: GeneticParameters,
    pub stats: StatVector,
}

/// Input of `matchup`: both snapshots, the move and the field.
#[derive(Deserialize, Clone, Debug)]
pub struct MatchupInput {
    pub attacker: CreatureSnapshot,
    pub defender: CreatureSnapshot,
    #[serde(rename = "move")]
    pub move_data: Move,
    #[serde(default)]
    pub field: FieldState,
}
