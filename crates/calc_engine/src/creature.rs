//! Creature snapshots supplied per computation.
//!
//! The `CreatureSnapshot` struct is a builder for describing one battler
//! (species stats, level, genetics, ability, item, status, typing, boosts and
//! remaining HP) before handing it to the projector or the matchup calculator.

use crate::core_data::{BaseStats, Boosts, Stat, StatTable, Type};
use crate::field::SideId;
use crate::stats::GeneticParameters;
use crate::types::TypeSet;
use serde::{Deserialize, Serialize};

/// Default level
pub const DEFAULT_LEVEL: u8 = 100;

/// Major status condition (only one can be active at a time)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    None,
    Burn,
    Freeze,
    Paralysis,
    Poison,
    /// Badly poisoned
    Toxic,
    Sleep,
}

impl Status {
    pub fn from_str(s: &str) -> Option<Self> {
        match crate::core_data::to_id(s).as_str() {
            "" | "none" | "healthy" => Some(Status::None),
            "brn" | "burn" => Some(Status::Burn),
            "frz" | "freeze" => Some(Status::Freeze),
            "par" | "paralysis" => Some(Status::Paralysis),
            "psn" | "poison" => Some(Status::Poison),
            "tox" | "toxic" => Some(Status::Toxic),
            "slp" | "sleep" => Some(Status::Sleep),
            _ => None,
        }
    }

    pub const fn is_poisoned(self) -> bool {
        matches!(self, Status::Poison | Status::Toxic)
    }
}

/// Remaining HP as a fraction, as revealed by the battle log (`57/100`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HpFraction {
    pub current: u16,
    pub max: u16,
}

impl Default for HpFraction {
    fn default() -> Self {
        Self::FULL
    }
}

impl HpFraction {
    pub const FULL: Self = Self { current: 1, max: 1 };

    pub const fn new(current: u16, max: u16) -> Self {
        Self { current, max }
    }

    /// Exact current HP when the max is the creature's real max HP.
    pub const fn exact(current: u16, max_hp: u16) -> Self {
        Self { current, max: max_hp }
    }

    pub fn is_valid(&self) -> bool {
        self.max > 0 && self.current <= self.max
    }

    /// Current HP for a creature whose real max HP is `max_hp`.
    ///
    /// Any non-zero fraction leaves at least 1 HP.
    pub fn current_hp(&self, max_hp: u16) -> u16 {
        if self.current == 0 || self.max == 0 {
            return 0;
        }
        if self.current >= self.max {
            return max_hp;
        }
        let hp = max_hp as u32 * self.current as u32 / self.max as u32;
        hp.max(1) as u16
    }
}

/// Blueprint describing one battler for a single computation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreatureSnapshot {
    /// Species id ("pikachu"); only species-locked items look at it
    #[serde(default)]
    pub species: String,

    pub base_stats: BaseStats,

    #[serde(default = "default_level")]
    pub level: u8,

    #[serde(default)]
    pub genetics: GeneticParameters,

    #[serde(default)]
    pub ability: Option<String>,

    #[serde(default)]
    pub item: Option<String>,

    #[serde(default)]
    pub status: Status,

    pub types: TypeSet,

    #[serde(default)]
    pub boosts: Boosts,

    #[serde(default)]
    pub hp: HpFraction,

    /// Weight in hectograms (0.1 kg), for weight-based moves
    #[serde(default)]
    pub weight_hg: Option<u32>,

    /// Eviolite applies
    #[serde(default)]
    pub not_fully_evolved: bool,

    /// Overrides the type/ability based grounded check
    #[serde(default)]
    pub grounded: Option<bool>,

    #[serde(default)]
    pub side: SideId,
}

fn default_level() -> u8 {
    DEFAULT_LEVEL
}

impl CreatureSnapshot {
    /// Create a snapshot with default genetics at the default level.
    pub fn new(species: &str, base_stats: [u16; 6], types: TypeSet) -> Self {
        Self {
            species: crate::core_data::to_id(species),
            base_stats: StatTable(base_stats),
            level: DEFAULT_LEVEL,
            genetics: GeneticParameters::default(),
            ability: None,
            item: None,
            status: Status::None,
            types,
            boosts: StatTable::splat(0),
            hp: HpFraction::FULL,
            weight_hg: None,
            not_fully_evolved: false,
            grounded: None,
            side: SideId::P1,
        }
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// Set level (validated at projection time, not clamped)
    pub fn level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    pub fn genetics(mut self, genetics: GeneticParameters) -> Self {
        self.genetics = genetics;
        self
    }

    pub fn ability(mut self, ability: &str) -> Self {
        self.ability = Some(ability.to_string());
        self
    }

    pub fn item(mut self, item: &str) -> Self {
        self.item = Some(item.to_string());
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn boost(mut self, stat: Stat, stage: i8) -> Self {
        self.boosts[stat] = stage;
        self
    }

    pub fn hp(mut self, hp: HpFraction) -> Self {
        self.hp = hp;
        self
    }

    pub fn weight_hg(mut self, weight: u32) -> Self {
        self.weight_hg = Some(weight);
        self
    }

    pub fn not_fully_evolved(mut self, nfe: bool) -> Self {
        self.not_fully_evolved = nfe;
        self
    }

    pub fn side(mut self, side: SideId) -> Self {
        self.side = side;
        self
    }

    /// Replace the active typing (Soak, Protean, forme changes)
    pub fn types(mut self, types: TypeSet) -> Self {
        self.types = types;
        self
    }

    pub fn has_type(&self, t: Type) -> bool {
        self.types.contains(t)
    }
}
