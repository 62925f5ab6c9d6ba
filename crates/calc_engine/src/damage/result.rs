use super::formula::ROLL_COUNT;
use super::ko::KoChance;
use crate::core_data::{MoveCategory, StatVector, Type};
use crate::error::CalcWarning;
use crate::types::Effectiveness;
use serde::Serialize;

/// Everything one attacker-vs-defender computation produces.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MatchupResult {
    /// Per-hit damage for each random roll, ascending
    pub rolls: [u32; ROLL_COUNT],
    /// Per-hit crit damage, when a crit is possible but not certain
    pub crit_rolls: Option<[u32; ROLL_COUNT]>,
    /// Total damage of one use across hit counts (min, max)
    pub damage_range: (u32, u32),
    /// `damage_range` as a percentage of the defender's max HP
    pub percent_range: (f64, f64),

    pub attacker_stats: StatVector,
    pub defender_stats: StatVector,
    /// Attack and defense actually used by the formula
    pub attack: u32,
    pub defense: u32,
    pub base_power: u32,
    pub move_type: Type,
    pub category: MoveCategory,
    pub effectiveness: Effectiveness,

    pub is_crit: bool,
    pub crit_chance: f64,
    /// (hits, probability) for one use
    pub hits: Vec<(u8, f64)>,

    pub defender_hp: u16,
    pub defender_max_hp: u16,
    /// One-use KO chance from the defender's current HP
    pub ko_chance: f64,
    pub n_hit_ko: Vec<KoChance>,
    pub hazard_damage: u32,
    /// One-use KO chance after switching into hazards at full HP
    pub hazard_ko: f64,

    /// Sources of every modifier that fired, in application order
    pub modifiers: Vec<&'static str>,
    pub warnings: Vec<CalcWarning>,
}

impl MatchupResult {
    pub(crate) fn empty(attacker_stats: StatVector, defender_stats: StatVector, move_type: Type, category: MoveCategory) -> Self {
        Self {
            rolls: [0; ROLL_COUNT],
            crit_rolls: None,
            damage_range: (0, 0),
            percent_range: (0.0, 0.0),
            attacker_stats,
            defender_stats,
            attack: 0,
            defense: 0,
            base_power: 0,
            move_type,
            category,
            effectiveness: Effectiveness::NEUTRAL,
            is_crit: false,
            crit_chance: 0.0,
            hits: vec![(1, 1.0)],
            defender_hp: 0,
            defender_max_hp: 0,
            ko_chance: 0.0,
            n_hit_ko: Vec::new(),
            hazard_damage: 0,
            hazard_ko: 0.0,
            modifiers: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn min_damage(&self) -> u32 {
        self.damage_range.0
    }

    pub fn max_damage(&self) -> u32 {
        self.damage_range.1
    }

    /// Fewest uses that KO on every roll, if within the KO horizon.
    pub fn guaranteed_ko_hits(&self) -> Option<u8> {
        self.n_hit_ko.iter().find(|ko| ko.chance >= 1.0).map(|ko| ko.hits)
    }

    /// Damage is zero on every roll (immunity, status move, nullified).
    pub fn is_no_damage(&self) -> bool {
        self.damage_range.1 == 0
    }
}
