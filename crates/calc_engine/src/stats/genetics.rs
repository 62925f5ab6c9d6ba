//! Hidden genetic parameters: modern IV/EV/nature and legacy DV/stat experience.

use crate::core_data::{Stat, StatTable};
use crate::damage::formula::ceil_sqrt;
use crate::error::ValidationError;
use crate::generations::GenerationConstants;
use crate::natures::NatureId;
use serde::{Deserialize, Serialize};

pub const MAX_IV: u8 = 31;
pub const MAX_DV: u8 = 15;
pub const MAX_EV: u16 = 252;
pub const MAX_TOTAL_EVS: u16 = 510;
pub const MAX_STAT_EXP: u16 = u16::MAX;

/// Hidden parameters that, with base stats and level, fix a creature's stats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GeneticParameters {
    Modern {
        nature: NatureId,
        ivs: StatTable<u8>,
        evs: StatTable<u16>,
    },
    /// Gen 1-2. The HP DV is derived from the other DVs, and SpA/SpD share
    /// the Special DV and stat experience.
    Legacy {
        dvs: StatTable<u8>,
        stat_exp: StatTable<u16>,
    },
}

impl Default for GeneticParameters {
    fn default() -> Self {
        GeneticParameters::Modern {
            nature: NatureId::Hardy,
            ivs: StatTable::splat(MAX_IV),
            evs: StatTable::splat(0),
        }
    }
}

impl GeneticParameters {
    pub fn modern(nature: NatureId, ivs: [u8; 6], evs: [u16; 6]) -> Self {
        GeneticParameters::Modern {
            nature,
            ivs: StatTable(ivs),
            evs: StatTable(evs),
        }
    }

    /// Legacy parameters; the HP DV and the SpD entries are normalized.
    pub fn legacy(dvs: [u8; 6], stat_exp: [u16; 6]) -> Self {
        GeneticParameters::Legacy {
            dvs: normalize_dvs(StatTable(dvs)),
            stat_exp: normalize_stat_exp(StatTable(stat_exp)),
        }
    }

    /// Perfect legacy spread: all DVs 15, all stat experience maxed.
    pub fn legacy_max() -> Self {
        Self::legacy([MAX_DV; 6], [MAX_STAT_EXP; 6])
    }

    pub const fn is_legacy(&self) -> bool {
        matches!(self, GeneticParameters::Legacy { .. })
    }

    pub const fn nature(&self) -> Option<NatureId> {
        match self {
            GeneticParameters::Modern { nature, .. } => Some(*nature),
            GeneticParameters::Legacy { .. } => None,
        }
    }

    /// Legacy view: normalized DVs and stat experience, converting modern
    /// values with `iv / 2` and `min(65535, ev^2)`.
    pub fn legacy_parts(&self) -> (StatTable<u8>, StatTable<u16>) {
        match *self {
            GeneticParameters::Legacy { dvs, stat_exp } => (normalize_dvs(dvs), normalize_stat_exp(stat_exp)),
            GeneticParameters::Modern { ivs, evs, .. } => (
                normalize_dvs(ivs.map(|_, iv| dv_from_iv(iv))),
                normalize_stat_exp(evs.map(|_, ev| stat_exp_from_ev(ev))),
            ),
        }
    }

    /// Modern view: nature, IVs and EVs. Legacy values convert under `Hardy`.
    pub fn modern_parts(&self) -> (NatureId, StatTable<u8>, StatTable<u16>) {
        match *self {
            GeneticParameters::Modern { nature, ivs, evs } => (nature, ivs, evs),
            GeneticParameters::Legacy { dvs, stat_exp } => (
                NatureId::Hardy,
                normalize_dvs(dvs).map(|_, dv| iv_from_dv(dv)),
                stat_exp.map(|_, exp| ev_from_stat_exp(exp)),
            ),
        }
    }

    pub fn to_legacy(&self) -> Self {
        let (dvs, stat_exp) = self.legacy_parts();
        GeneticParameters::Legacy { dvs, stat_exp }
    }

    /// Convert to the modern encoding under `nature`.
    pub fn to_modern(&self, nature: NatureId) -> Self {
        let (_, ivs, evs) = self.modern_parts();
        GeneticParameters::Modern { nature, ivs, evs }
    }

    /// Check ranges against the generation's constants.
    pub fn validate(&self, constants: &GenerationConstants) -> Result<(), ValidationError> {
        match self {
            GeneticParameters::Modern { ivs, evs, .. } => {
                // Modern values fed to a legacy ruleset are converted, so
                // they are held to the modern limits
                let modern = GenerationConstants::default();
                let constants = if constants.legacy { &modern } else { constants };
                let mut total = 0u32;
                for stat in Stat::ALL {
                    let iv = ivs[stat];
                    if iv > constants.max_iv {
                        return Err(ValidationError::Iv { stat, value: iv, max: constants.max_iv });
                    }
                    let ev = evs[stat];
                    if ev > constants.max_ev {
                        return Err(ValidationError::Ev { stat, value: ev, max: constants.max_ev });
                    }
                    if constants.ev_granularity > 1 && ev % constants.ev_granularity != 0 {
                        return Err(ValidationError::EvGranularity {
                            stat,
                            value: ev,
                            granularity: constants.ev_granularity,
                        });
                    }
                    total += ev as u32;
                }
                if total > constants.max_total_evs as u32 {
                    return Err(ValidationError::EvTotal {
                        total,
                        max: constants.max_total_evs as u32,
                    });
                }
                Ok(())
            }
            GeneticParameters::Legacy { dvs, .. } => {
                for stat in Stat::ALL {
                    if dvs[stat] > MAX_DV {
                        return Err(ValidationError::Dv { stat, value: dvs[stat] });
                    }
                }
                Ok(())
            }
        }
    }
}

/// HP DV from the low bits of the Atk, Def, Spe and Special DVs.
pub const fn hp_dv(atk: u8, def: u8, spe: u8, spc: u8) -> u8 {
    ((atk & 1) << 3) | ((def & 1) << 2) | ((spe & 1) << 1) | (spc & 1)
}

/// Derive the HP DV and copy Special into SpD.
pub fn normalize_dvs(mut dvs: StatTable<u8>) -> StatTable<u8> {
    dvs[Stat::Spd] = dvs[Stat::Spa];
    dvs[Stat::Hp] = hp_dv(dvs[Stat::Atk], dvs[Stat::Def], dvs[Stat::Spe], dvs[Stat::Spa]);
    dvs
}

pub fn normalize_stat_exp(mut exp: StatTable<u16>) -> StatTable<u16> {
    exp[Stat::Spd] = exp[Stat::Spa];
    exp
}

pub const fn dv_from_iv(iv: u8) -> u8 {
    iv / 2
}

pub fn iv_from_dv(dv: u8) -> u8 {
    dv.saturating_mul(2).saturating_add(1).min(MAX_IV)
}

/// `min(65535, ev^2)`
pub fn stat_exp_from_ev(ev: u16) -> u16 {
    (ev as u32 * ev as u32).min(MAX_STAT_EXP as u32) as u16
}

/// `min(255, ceil(sqrt(stat_exp)))`, the modern EV equivalent.
pub fn ev_from_stat_exp(stat_exp: u16) -> u16 {
    ceil_sqrt(stat_exp as u32).min(255) as u16
}
