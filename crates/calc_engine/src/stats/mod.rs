//! Stat projection: base stats + level + genetics -> battle stats.
//!
//! Every step floors before the next, matching the cartridge formulas:
//!
//! ```text
//! HP:     floor((2*Base + IV + floor(EV/4)) * Level / 100) + Level + 10
//! Other:  floor(floor((2*Base + IV + floor(EV/4)) * Level / 100) + 5) * Nature
//! Legacy: floor(((Base + DV) * 2 + floor(min(255, ceil(sqrt(StatExp))) / 4)) * Level / 100) + 5
//! ```

mod final_stats;
pub mod genetics;

pub use final_stats::final_stats;
pub use genetics::{
    dv_from_iv, ev_from_stat_exp, hp_dv, iv_from_dv, stat_exp_from_ev, GeneticParameters,
};

use crate::core_data::{BaseStats, Stat, StatTable, StatVector};
use crate::creature::{CreatureSnapshot, HpFraction};
use crate::damage::formula::{apply_boost, ceil_sqrt};
use crate::error::ValidationError;
use crate::generations::GenerationConstants;
use crate::natures::NatureClass;

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 100;

/// Modern stat for one slot. `class` is ignored for HP.
pub fn calc_stat(stat: Stat, base: u16, level: u8, iv: u8, ev: u16, class: NatureClass) -> u16 {
    let base = base as u32;
    let level = level as u32;
    let core = (2 * base + iv as u32 + ev as u32 / 4) * level / 100;
    match stat {
        Stat::Hp if base == 1 => 1,
        Stat::Hp => (core + level + 10) as u16,
        _ => class.apply(core + 5) as u16,
    }
}

/// Legacy stat-experience contribution: `floor(min(255, ceil(sqrt(exp))) / 4)`.
pub fn legacy_bonus(stat_exp: u16) -> u32 {
    ceil_sqrt(stat_exp as u32).min(255) / 4
}

/// Legacy (Gen 1-2) stat for one slot.
pub fn calc_legacy_stat(stat: Stat, base: u16, level: u8, dv: u8, stat_exp: u16) -> u16 {
    let level = level as u32;
    let core = ((base as u32 + dv as u32) * 2 + legacy_bonus(stat_exp)) * level / 100;
    match stat {
        Stat::Hp => (core + level + 10) as u16,
        _ => (core + 5) as u16,
    }
}

/// Project all six stats. Pure and total; inputs are assumed valid.
///
/// `legacy` selects the whole formula branch. Genetics in the other
/// encoding are converted first.
pub fn project(base: &BaseStats, level: u8, genetics: &GeneticParameters, legacy: bool) -> StatVector {
    if legacy {
        let (dvs, stat_exp) = genetics.legacy_parts();
        base.map(|stat, b| calc_legacy_stat(stat, b, level, dvs[stat], stat_exp[stat]))
    } else {
        let (nature, ivs, evs) = genetics.modern_parts();
        base.map(|stat, b| calc_stat(stat, b, level, ivs[stat], evs[stat], nature.class_for(stat)))
    }
}

/// Validate, then [`project`] with the constants' formula branch.
pub fn project_checked(
    base: &BaseStats,
    level: u8,
    genetics: &GeneticParameters,
    constants: &GenerationConstants,
) -> Result<StatVector, ValidationError> {
    validate_level(level)?;
    validate_base_stats(base)?;
    genetics.validate(constants)?;
    Ok(project(base, level, genetics, constants.legacy))
}

pub fn validate_level(level: u8) -> Result<(), ValidationError> {
    if (MIN_LEVEL..=MAX_LEVEL).contains(&level) {
        Ok(())
    } else {
        Err(ValidationError::Level(level))
    }
}

pub fn validate_base_stats(base: &BaseStats) -> Result<(), ValidationError> {
    match Stat::ALL.into_iter().find(|&s| base[s] == 0) {
        Some(stat) => Err(ValidationError::ZeroBaseStat(stat)),
        None => Ok(()),
    }
}

/// Validate everything about a snapshot that a projection or matchup reads.
pub fn validate_snapshot(snapshot: &CreatureSnapshot, constants: &GenerationConstants) -> Result<(), ValidationError> {
    validate_level(snapshot.level)?;
    validate_base_stats(&snapshot.base_stats)?;
    snapshot.genetics.validate(constants)?;
    for stat in Stat::BATTLE {
        let value = snapshot.boosts[stat];
        if !(-6..=6).contains(&value) {
            return Err(ValidationError::Boost { stat, value });
        }
    }
    if !snapshot.hp.is_valid() {
        return Err(ValidationError::HpFraction {
            current: snapshot.hp.current,
            max: snapshot.hp.max,
        });
    }
    Ok(())
}

/// Stat after a boost stage (2/8 .. 8/2).
pub fn effective_stat(stat: u16, boost: i8) -> u16 {
    apply_boost(stat as u32, boost).min(u16::MAX as u32) as u16
}

/// All boosted stats; HP is left unchanged.
pub fn boosted_stats(stats: &StatVector, boosts: &StatTable<i8>) -> StatVector {
    stats.map(|stat, value| match stat {
        Stat::Hp => value,
        _ => effective_stat(value, boosts[stat]),
    })
}

pub fn max_hp(stats: &StatVector) -> u16 {
    stats[Stat::Hp]
}

pub fn current_hp(stats: &StatVector, fraction: HpFraction) -> u16 {
    fraction.current_hp(max_hp(stats))
}
