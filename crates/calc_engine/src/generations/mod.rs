//! Generation-specific mechanics.
//!
//! [`GenMechanics`] provides the constants and behaviours that vary by
//! generation. Default trait methods reflect Gen 9; older generations are
//! expressed as deltas keyed on [`GenMechanics::gen_num`]. A [`Ruleset`]
//! carries caller-supplied [`GenerationConstants`] for custom formats.

mod legacy;

pub use legacy::gen1_crit_chance;

use crate::core_data::Type;
use crate::error::ValidationError;
use crate::field::{Terrain, Weather};
use crate::modifiers::{Effect, Modifier};
use serde::{Deserialize, Serialize};

/// Game generation tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Generation {
    Gen1 = 1,
    Gen2 = 2,
    Gen3 = 3,
    Gen4 = 4,
    Gen5 = 5,
    Gen6 = 6,
    Gen7 = 7,
    Gen8 = 8,
    #[default]
    Gen9 = 9,
}

impl Generation {
    pub const ALL: [Generation; 9] = [
        Generation::Gen1,
        Generation::Gen2,
        Generation::Gen3,
        Generation::Gen4,
        Generation::Gen5,
        Generation::Gen6,
        Generation::Gen7,
        Generation::Gen8,
        Generation::Gen9,
    ];

    /// Create a Generation from a numeric value.
    pub fn from_num(gen: u8) -> Option<Self> {
        Self::ALL.get((gen as usize).checked_sub(1)?).copied()
    }

    /// Get the generation number.
    pub const fn num(self) -> u8 {
        self as u8
    }

    /// Gen 1-2 stat formula (DVs and stat experience).
    pub const fn is_legacy(self) -> bool {
        (self as u8) <= 2
    }

    pub fn constants(self) -> GenerationConstants {
        GenerationConstants::for_generation(self)
    }
}

impl TryFrom<u8> for Generation {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Generation::from_num(value).ok_or(ValidationError::Generation(value))
    }
}

impl From<Generation> for u8 {
    fn from(gen: Generation) -> Self {
        gen.num()
    }
}

/// Numeric rules that vary between generations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConstants {
    /// Critical hit damage ratio (num, den), floored. Gen 1 uses (1, 1)
    /// because its crits double the level instead.
    pub crit_multiplier: (u32, u32),
    pub max_total_evs: u16,
    pub max_ev: u16,
    pub ev_granularity: u16,
    pub max_iv: u8,
    /// Whole-branch switch to the DV / stat experience formulas
    pub legacy: bool,
}

impl GenerationConstants {
    pub const fn for_generation(gen: Generation) -> Self {
        let crit_multiplier = match gen {
            Generation::Gen1 => (1, 1),
            Generation::Gen2 | Generation::Gen3 | Generation::Gen4 | Generation::Gen5 => (2, 1),
            _ => (3, 2),
        };
        if gen.is_legacy() {
            Self {
                crit_multiplier,
                max_total_evs: u16::MAX,
                max_ev: u16::MAX,
                ev_granularity: 1,
                max_iv: 15,
                legacy: true,
            }
        } else {
            Self {
                crit_multiplier,
                max_total_evs: 510,
                max_ev: 252,
                ev_granularity: 4,
                max_iv: 31,
                legacy: false,
            }
        }
    }
}

impl Default for GenerationConstants {
    fn default() -> Self {
        Self::for_generation(Generation::Gen9)
    }
}

/// A generation plus its (possibly overridden) constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ruleset {
    pub gen: Generation,
    pub constants: GenerationConstants,
}

impl Ruleset {
    pub const fn new(gen: Generation) -> Self {
        Self {
            gen,
            constants: GenerationConstants::for_generation(gen),
        }
    }

    pub const fn with_constants(mut self, constants: GenerationConstants) -> Self {
        self.constants = constants;
        self
    }
}

impl Default for Ruleset {
    fn default() -> Self {
        Ruleset::new(Generation::Gen9)
    }
}

impl From<Generation> for Ruleset {
    fn from(gen: Generation) -> Self {
        Ruleset::new(gen)
    }
}

/// Weights of 2, 3, 4 and 5 hits for a 2-5 hit move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MultiHitWeights {
    pub weights: [u32; 4],
    pub total: u32,
}

/// Generation-specific mechanics trait.
///
/// Default implementations reflect Gen 9 (Scarlet/Violet) mechanics.
pub trait GenMechanics: Copy + Send + Sync {
    fn generation(&self) -> Generation;

    fn constants(&self) -> GenerationConstants {
        self.generation().constants()
    }

    fn gen_num(&self) -> u8 {
        self.generation().num()
    }

    fn is_legacy(&self) -> bool {
        self.constants().legacy
    }

    // ========================================================================
    // Damage Modifiers
    // ========================================================================

    /// Critical hit effect on damage.
    fn crit_effect(&self) -> Effect {
        let (num, den) = self.constants().crit_multiplier;
        Effect::ratio(num, den)
    }

    /// Gen 1 crits double the attacker's level in the base formula.
    fn crit_doubles_level(&self) -> bool {
        self.gen_num() == 1
    }

    /// STAB effect. Gen 5+ uses the 4096 scale, earlier gens floor.
    fn stab_effect(&self, has_adaptability: bool) -> Effect {
        match (has_adaptability, self.gen_num() >= 5) {
            (true, true) => Effect::Scaled(Modifier::DOUBLE),
            (true, false) => Effect::ratio(2, 1),
            (false, true) => Effect::Scaled(Modifier::ONE_POINT_FIVE),
            (false, false) => Effect::ratio(3, 2),
        }
    }

    /// Weather damage effect, if weather affects this move type.
    fn weather_effect(&self, weather: Weather, move_type: Type) -> Option<Effect> {
        if self.gen_num() == 1 {
            return None;
        }
        let scaled = self.gen_num() >= 5;
        let boost = if scaled { Effect::Scaled(Modifier::ONE_POINT_FIVE) } else { Effect::ratio(3, 2) };
        let cut = if scaled { Effect::Scaled(Modifier::HALF) } else { Effect::ratio(1, 2) };
        match (weather, move_type) {
            (Weather::Sun | Weather::HarshSun, Type::Fire) => Some(boost),
            (Weather::Sun, Type::Water) => Some(cut),
            (Weather::Rain | Weather::HeavyRain, Type::Water) => Some(boost),
            (Weather::Rain, Type::Fire) => Some(cut),
            // Primal weather makes the opposing type fail outright
            (Weather::HarshSun, Type::Water) | (Weather::HeavyRain, Type::Fire) => Some(Effect::Set(0)),
            _ => None,
        }
    }

    /// Terrain damage effect. Terrain only affects grounded creatures.
    fn terrain_effect(&self, terrain: Terrain, move_type: Type, is_grounded: bool) -> Option<Effect> {
        let n = self.gen_num();
        if n < 6 || !is_grounded {
            return None;
        }
        let boost = if n >= 8 { Modifier::ONE_POINT_THREE } else { Modifier::ONE_POINT_FIVE };
        match (terrain, move_type) {
            (Terrain::Electric, Type::Electric)
            | (Terrain::Grassy, Type::Grass)
            | (Terrain::Psychic, Type::Psychic) => Some(Effect::Scaled(boost)),
            _ => None,
        }
    }

    /// Misty Terrain halves Dragon moves against a grounded defender.
    fn misty_dragon_effect(&self, terrain: Terrain, move_type: Type, defender_grounded: bool) -> Option<Effect> {
        (self.gen_num() >= 6 && terrain == Terrain::Misty && move_type == Type::Dragon && defender_grounded)
            .then_some(Effect::Scaled(Modifier::HALF))
    }

    /// Screen damage effect (Gen 3+; earlier gens double the defense stat).
    fn screen_effect(&self, doubles: bool) -> Effect {
        match (self.gen_num() >= 5, doubles) {
            (true, false) => Effect::Scaled(Modifier::HALF),
            (true, true) => Effect::Scaled(Modifier::SCREENS_DOUBLES),
            (false, false) => Effect::ratio(1, 2),
            (false, true) => Effect::ratio(2, 3),
        }
    }

    /// Burn halving of physical damage.
    fn burn_effect(&self) -> Effect {
        if self.gen_num() >= 5 {
            Effect::Scaled(Modifier::HALF)
        } else {
            Effect::ratio(1, 2)
        }
    }

    // ========================================================================
    // Mechanical Differences
    // ========================================================================

    /// Gen 1-2: false, Gen 3+: true
    fn has_abilities(&self) -> bool {
        self.gen_num() >= 3
    }

    /// Gen 1: false, Gen 2+: true
    fn has_held_items(&self) -> bool {
        self.gen_num() >= 2
    }

    /// Gen 1-3: category determined by type, Gen 4+: per-move
    fn uses_physical_special_split(&self) -> bool {
        self.gen_num() >= 4
    }

    /// Gen 1 has a single Special stat.
    fn has_unified_special(&self) -> bool {
        self.gen_num() == 1
    }

    /// Dark and Steel exist from Gen 2, Fairy from Gen 6.
    fn has_type(&self, t: Type) -> bool {
        match t {
            Type::Fairy => self.gen_num() >= 6,
            Type::Dark | Type::Steel => self.gen_num() >= 2,
            _ => true,
        }
    }

    // ========================================================================
    // Critical hits
    // ========================================================================

    /// Chance of a critical hit at a crit stage. Gen 1 depends on speed
    /// and is handled by [`gen1_crit_chance`].
    fn crit_chance(&self, stage: u8) -> f64 {
        const GEN2_5: [f64; 5] = [1.0 / 16.0, 1.0 / 8.0, 1.0 / 4.0, 1.0 / 3.0, 1.0 / 2.0];
        const GEN6: [f64; 4] = [1.0 / 16.0, 1.0 / 8.0, 1.0 / 2.0, 1.0];
        const GEN7: [f64; 4] = [1.0 / 24.0, 1.0 / 8.0, 1.0 / 2.0, 1.0];
        let table: &[f64] = match self.gen_num() {
            0..=5 => &GEN2_5,
            6 => &GEN6,
            _ => &GEN7,
        };
        table[(stage as usize).min(table.len() - 1)]
    }

    /// Stage at which a crit is guaranteed, if any.
    fn guaranteed_crit_stage(&self) -> Option<u8> {
        (self.gen_num() >= 6).then_some(3)
    }

    // ========================================================================
    // Multi-hit
    // ========================================================================

    fn multi_hit_weights(&self) -> MultiHitWeights {
        if self.gen_num() >= 5 {
            MultiHitWeights {
                weights: [35, 35, 15, 15],
                total: 100,
            }
        } else {
            MultiHitWeights {
                weights: [3, 3, 1, 1],
                total: 8,
            }
        }
    }
}

impl GenMechanics for Generation {
    fn generation(&self) -> Generation {
        *self
    }
}

impl GenMechanics for Ruleset {
    fn generation(&self) -> Generation {
        self.gen
    }

    fn constants(&self) -> GenerationConstants {
        self.constants
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_num() {
        assert_eq!(Generation::from_num(1), Some(Generation::Gen1));
        assert_eq!(Generation::from_num(9), Some(Generation::Gen9));
        assert_eq!(Generation::from_num(0), None);
        assert_eq!(Generation::from_num(10), None);
        assert!(Generation::try_from(12u8).is_err());
    }

    #[test]
    fn test_serde_as_number() {
        let gen: Generation = serde_json::from_str("4").unwrap();
        assert_eq!(gen, Generation::Gen4);
        assert_eq!(serde_json::to_string(&Generation::Gen7).unwrap(), "7");
    }

    #[test]
    fn test_crit_multiplier_by_gen() {
        assert_eq!(Generation::Gen1.crit_effect().apply(100), 100);
        assert!(Generation::Gen1.crit_doubles_level());
        assert_eq!(Generation::Gen4.crit_effect().apply(101), 202);
        assert_eq!(Generation::Gen9.crit_effect().apply(101), 151);
    }

    #[test]
    fn test_legacy_constants() {
        let c = Generation::Gen2.constants();
        assert!(c.legacy);
        assert_eq!(c.max_iv, 15);
        let c = Generation::Gen3.constants();
        assert!(!c.legacy);
        assert_eq!(c.max_total_evs, 510);
    }

    #[test]
    fn test_ruleset_override() {
        let custom = GenerationConstants {
            crit_multiplier: (2, 1),
            ..Generation::Gen9.constants()
        };
        let rules = Ruleset::new(Generation::Gen9).with_constants(custom);
        assert_eq!(rules.crit_effect().apply(100), 200);
        assert_eq!(rules.gen_num(), 9);
    }

    #[test]
    fn test_weather() {
        let g = Generation::Gen9;
        assert_eq!(g.weather_effect(Weather::Sun, Type::Fire), Some(Effect::Scaled(Modifier::ONE_POINT_FIVE)));
        assert_eq!(g.weather_effect(Weather::HeavyRain, Type::Fire), Some(Effect::Set(0)));
        assert_eq!(g.weather_effect(Weather::Sand, Type::Rock), None);
        assert_eq!(Generation::Gen1.weather_effect(Weather::Rain, Type::Water), None);
    }

    #[test]
    fn test_terrain() {
        assert_eq!(
            Generation::Gen7.terrain_effect(Terrain::Electric, Type::Electric, true),
            Some(Effect::Scaled(Modifier::ONE_POINT_FIVE))
        );
        assert_eq!(
            Generation::Gen8.terrain_effect(Terrain::Electric, Type::Electric, true),
            Some(Effect::Scaled(Modifier::ONE_POINT_THREE))
        );
        assert_eq!(Generation::Gen9.terrain_effect(Terrain::Grassy, Type::Grass, false), None);
        assert_eq!(Generation::Gen5.terrain_effect(Terrain::Grassy, Type::Grass, true), None);
    }

    #[test]
    fn test_crit_chance() {
        assert_eq!(Generation::Gen9.crit_chance(0), 1.0 / 24.0);
        assert_eq!(Generation::Gen6.crit_chance(0), 1.0 / 16.0);
        assert_eq!(Generation::Gen9.crit_chance(7), 1.0);
        assert_eq!(Generation::Gen4.crit_chance(9), 0.5);
        assert_eq!(Generation::Gen5.guaranteed_crit_stage(), None);
        assert_eq!(Generation::Gen6.guaranteed_crit_stage(), Some(3));
    }

    #[test]
    fn test_multi_hit_weights() {
        assert_eq!(Generation::Gen5.multi_hit_weights().weights, [35, 35, 15, 15]);
        assert_eq!(Generation::Gen4.multi_hit_weights().total, 8);
    }

    #[test]
    fn test_feature_flags() {
        assert!(!Generation::Gen2.has_abilities());
        assert!(Generation::Gen2.has_held_items());
        assert!(!Generation::Gen1.has_held_items());
        assert!(!Generation::Gen3.uses_physical_special_split());
        assert!(!Generation::Gen5.has_type(Type::Fairy));
        assert!(!Generation::Gen1.has_type(Type::Steel));
    }
}
