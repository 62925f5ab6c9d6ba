//! calc_engine - battle stat projection, spread inference and damage
//! resolution across all nine generations.
//!
//! Stateless: every computation takes its inputs (snapshots, field,
//! ruleset) and returns values. Integer arithmetic follows the game's
//! truncation exactly; floats only appear in probabilities.

/// Types, stats, move categories and flags
pub mod core_data;

/// Nature definitions and stat modifiers
pub mod natures;

/// Type chart and effectiveness lookup
pub mod types;

/// Per-generation rulesets and mechanics
pub mod generations;

/// Errors and warnings
pub mod error;

/// Weather, terrain and side conditions
pub mod field;

/// Per-computation battler snapshots
pub mod creature;

/// Stat projection and genetics
pub mod stats;

/// Ordered modifier pipeline and declarative rules
pub mod modifiers;

/// Ability identifiers and rule tables
pub mod abilities;

/// Item identifiers and rule tables
pub mod items;

/// Move descriptions and variable-power behaviours
pub mod moves;

/// Hidden Power type and power
pub mod hidden_power;

/// Spread inference from observed stats
pub mod solver;

/// Damage calculation
pub mod damage;

// Re-export commonly used types
pub use abilities::AbilityId;
pub use core_data::{BaseStats, MoveCategory, MoveFlags, Stat, StatTable, StatVector, Type};
pub use creature::{CreatureSnapshot, HpFraction, Status};
pub use damage::{compute, MatchupResult};
pub use error::{CalcWarning, EvidenceConflict, SolveError, ValidationError};
pub use field::{FieldState, SideConditions, SideId, Terrain, Weather};
pub use generations::{GenMechanics, Generation, GenerationConstants, Ruleset};
pub use items::ItemId;
pub use moves::{Move, MultiHit};
pub use natures::{NatureClass, NatureId};
pub use solver::{solve, ObservationSource, ObservedStat, SolverContext, SpreadHypothesis, SpreadTracker};
pub use stats::{final_stats, project, GeneticParameters};
pub use types::{Effectiveness, TypeSet};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_lookup() {
        assert_eq!(Type::from_str("fire"), Some(Type::Fire));
        assert_eq!(Type::from_str("Fire"), Some(Type::Fire));
        assert_eq!(Type::from_str("invalid"), None);
    }

    #[test]
    fn test_nature_lookup() {
        let adamant = NatureId::from_str("adamant").unwrap();
        assert_eq!(adamant.class_for(Stat::Atk), NatureClass::Boosted);
        assert_eq!(adamant.class_for(Stat::Spa), NatureClass::Hindered);
        assert_eq!(adamant.class_for(Stat::Spe), NatureClass::Neutral);
        assert_eq!(NatureId::from_str("hardy").unwrap().class_for(Stat::Atk), NatureClass::Neutral);
    }

    #[test]
    fn test_ability_and_item_lookup() {
        assert_eq!(AbilityId::from_str("levitate"), Some(AbilityId::Levitate));
        assert_eq!(ItemId::from_str("Choice Band"), Some(ItemId::ChoiceBand));
    }

    #[test]
    fn test_end_to_end() {
        let garchomp = TypeSet::dual(Type::Dragon, Type::Ground).unwrap();
        let attacker = CreatureSnapshot::new("garchomp", [108, 130, 95, 80, 85, 102], garchomp)
            .genetics(GeneticParameters::modern(NatureId::Jolly, [31; 6], [0, 252, 4, 0, 0, 252]));
        let heatran = TypeSet::dual(Type::Fire, Type::Steel).unwrap();
        let defender = CreatureSnapshot::new("heatran", [91, 90, 106, 130, 106, 77], heatran).side(SideId::P2);
        let quake = Move::new("Earthquake", 100, Type::Ground, MoveCategory::Physical).flags(MoveFlags::SPREAD);
        let result = compute(&attacker, &defender, &quake, &FieldState::new(), &Generation::Gen9).unwrap();
        assert_eq!(result.effectiveness, Effectiveness::QUADRUPLE);
        assert_eq!(result.guaranteed_ko_hits(), Some(1));
    }
}
