//! Move description and the per-move behaviours the damage formula needs.
//!
//! Moves are supplied by the caller; only moves whose power or damage is not
//! a plain number are known to the engine, through [`MOVE_BEHAVIORS`].

pub mod power;
pub mod registry;

pub use power::{fixed_damage, variable_power, PowerInputs, ResolvedPower};
pub use registry::{FixedDamage, MoveBehavior, VariablePower, MOVE_BEHAVIORS};

use crate::core_data::{to_id, MoveCategory, MoveFlags, Type};
use serde::{Deserialize, Serialize};

/// Hit count of a multi-hit move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiHit {
    /// Always hits exactly `n` times (Double Kick, Dragon Darts)
    Fixed(u8),
    /// Variable hit count (Bullet Seed: 2-5)
    Range(u8, u8),
}

impl MultiHit {
    pub const fn min_hits(self) -> u8 {
        match self {
            MultiHit::Fixed(n) => n,
            MultiHit::Range(min, _) => min,
        }
    }

    pub const fn max_hits(self) -> u8 {
        match self {
            MultiHit::Fixed(n) => n,
            MultiHit::Range(_, max) => max,
        }
    }
}

/// One move as used in a matchup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// Move id or display name ("Seismic Toss")
    pub id: String,

    #[serde(default)]
    pub base_power: u32,

    #[serde(rename = "type")]
    pub move_type: Type,

    pub category: MoveCategory,

    #[serde(default)]
    pub flags: MoveFlags,

    #[serde(default)]
    pub multi_hit: Option<MultiHit>,

    #[serde(default)]
    pub priority: i8,

    /// Critical-hit stage bonus (1 for Slash, Stone Edge...)
    #[serde(default)]
    pub crit_stage: u8,

    /// Frost Breath, Wicked Blow, Flower Trick
    #[serde(default)]
    pub always_crit: bool,

    /// Damage ignores stats entirely (Seismic Toss, Super Fang...)
    #[serde(default)]
    pub fixed_damage: bool,
}

impl Move {
    pub fn new(id: &str, base_power: u32, move_type: Type, category: MoveCategory) -> Self {
        Self {
            id: id.to_string(),
            base_power,
            move_type,
            category,
            flags: MoveFlags::empty(),
            multi_hit: None,
            priority: 0,
            crit_stage: 0,
            always_crit: false,
            fixed_damage: false,
        }
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    pub fn flags(mut self, flags: MoveFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn multi_hit(mut self, hits: MultiHit) -> Self {
        self.multi_hit = Some(hits);
        self
    }

    pub fn priority(mut self, priority: i8) -> Self {
        self.priority = priority;
        self
    }

    pub fn crit_stage(mut self, stage: u8) -> Self {
        self.crit_stage = stage;
        self
    }

    pub fn always_crit(mut self) -> Self {
        self.always_crit = true;
        self
    }

    pub fn fixed_damage(mut self) -> Self {
        self.fixed_damage = true;
        self
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn behavior(&self) -> Option<MoveBehavior> {
        MOVE_BEHAVIORS.get(to_id(&self.id).as_str()).copied()
    }

    pub fn is_status(&self) -> bool {
        self.category == MoveCategory::Status
    }

    /// Category under a ruleset. Before Gen 4 the type decides.
    pub fn category_in(&self, gen: u8) -> MoveCategory {
        if gen >= 4 || self.is_status() {
            self.category
        } else if self.move_type.is_legacy_special() {
            MoveCategory::Special
        } else {
            MoveCategory::Physical
        }
    }
}
