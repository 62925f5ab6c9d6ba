//! Spread inference: observed stats back to hidden genetics.
//!
//! Each observation yields, per nature class, the `(iv, ev)` pairs that
//! project to the observed value. Narrowing intersects a hypothesis's set
//! for that stat with the admissible set for the hypothesis's own class,
//! then re-applies the effort cap. Sets only ever shrink, so the live
//! hypotheses after `k + 1` observations are a subset of those after `k`.

mod hypothesis;
pub mod tiebreak;
mod tracker;

pub use hypothesis::{
    all_pairs, stat_exp_for_bonus, Assumption, Pair, SpreadEnumeration, SpreadHypothesis, StatCandidates,
    MAX_LEGACY_BONUS,
};
pub use tiebreak::{MaxBulk, MaxOffense, MinInvestment, TieBreak};
pub use tracker::SpreadTracker;

use crate::core_data::{BaseStats, Stat};
use crate::creature::CreatureSnapshot;
use crate::error::{EvidenceConflict, ValidationError};
use crate::generations::{GenMechanics, GenerationConstants};
use crate::natures::{NatureClass, NatureId};
use crate::stats::{calc_legacy_stat, calc_stat, validate_base_stats, validate_level};
use serde::{Deserialize, Serialize};

/// Where an observation came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObservationSource {
    /// Inferred from the battle log on this turn
    Turn(u16),
    /// Sent by the server (own team, revealed stats)
    ServerReveal,
    #[default]
    UserEntry,
}

/// One revealed stat value. Immutable once recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObservedStat {
    pub stat: Stat,
    pub value: u16,
    #[serde(default)]
    pub source: ObservationSource,
}

impl ObservedStat {
    pub const fn new(stat: Stat, value: u16, source: ObservationSource) -> Self {
        Self { stat, value, source }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.value == 0 {
            return Err(ValidationError::Observation { stat: self.stat });
        }
        Ok(())
    }
}

/// Species, level and ruleset of the creature being solved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverContext {
    pub base_stats: BaseStats,
    pub level: u8,
    pub constants: GenerationConstants,
}

impl SolverContext {
    pub fn new(base_stats: BaseStats, level: u8, constants: GenerationConstants) -> Result<Self, ValidationError> {
        validate_level(level)?;
        validate_base_stats(&base_stats)?;
        Ok(Self {
            base_stats,
            level,
            constants,
        })
    }

    pub fn for_snapshot<G: GenMechanics>(snapshot: &CreatureSnapshot, gen: &G) -> Result<Self, ValidationError> {
        Self::new(snapshot.base_stats, snapshot.level, gen.constants())
    }

    /// Nothing observed yet: one hypothesis per nature, or a single legacy one.
    pub fn prior(&self) -> Vec<SpreadHypothesis> {
        let cap = self.constants.max_total_evs as u32;
        if self.constants.legacy {
            vec![SpreadHypothesis::unconstrained(Assumption::Legacy, cap)]
        } else {
            NatureId::ALL
                .iter()
                .map(|&n| SpreadHypothesis::unconstrained(Assumption::Nature(n), cap))
                .collect()
        }
    }
}

/// All `(iv, ev)` pairs that project `stat` to `observed` under `class`.
pub fn admissible(ctx: &SolverContext, stat: Stat, class: NatureClass, observed: u16) -> StatCandidates {
    let base = ctx.base_stats[stat];
    let pairs = all_pairs(&ctx.constants)
        .into_iter()
        .filter(|&(iv, ev)| calc_stat(stat, base, ctx.level, iv, ev, class) == observed)
        .collect();
    StatCandidates::new(pairs)
}

/// All `(dv, bonus)` pairs that project `stat` to `observed` with the
/// legacy formula.
pub fn admissible_legacy(ctx: &SolverContext, stat: Stat, observed: u16) -> StatCandidates {
    let base = ctx.base_stats[stat];
    let pairs = all_pairs(&ctx.constants)
        .into_iter()
        .filter(|&(dv, bonus)| {
            calc_legacy_stat(stat, base, ctx.level, dv, stat_exp_for_bonus(bonus)) == observed
        })
        .collect();
    StatCandidates::new(pairs)
}

fn intersect_into(slot: &mut Option<StatCandidates>, admissible: &StatCandidates) {
    *slot = Some(match slot.as_ref() {
        Some(existing) => existing.intersect(admissible),
        None => admissible.clone(),
    });
}

/// Narrow `prior` by one observation.
///
/// Hypotheses left with an empty candidate set are dropped. If none
/// survive, the observation contradicts the prior evidence and both are
/// returned in the conflict untouched.
pub fn narrow(
    ctx: &SolverContext,
    creature_id: &str,
    prior: &[SpreadHypothesis],
    observation: &ObservedStat,
) -> Result<Vec<SpreadHypothesis>, EvidenceConflict> {
    let stat = observation.stat;
    let mut by_class: [Option<StatCandidates>; 3] = Default::default();
    let mut legacy: Option<StatCandidates> = None;

    let mut next = Vec::with_capacity(prior.len());
    for hypothesis in prior {
        let mut h = hypothesis.clone();
        match h.assumption {
            Assumption::Nature(nature) => {
                let class = nature.class_for(stat);
                let set = by_class[class as usize]
                    .get_or_insert_with(|| admissible(ctx, stat, class, observation.value));
                intersect_into(&mut h.candidates[stat], set);
                h.propagate_effort_cap();
            }
            Assumption::Legacy => {
                let set = legacy.get_or_insert_with(|| admissible_legacy(ctx, stat, observation.value));
                intersect_into(&mut h.candidates[stat], set);
                // SpA and SpD share one DV and one stat-exp value
                let twin = match stat {
                    Stat::Spa => Some(Stat::Spd),
                    Stat::Spd => Some(Stat::Spa),
                    _ => None,
                };
                if let Some(twin) = twin {
                    if let Some(shared) = h.candidates[stat].clone() {
                        intersect_into(&mut h.candidates[twin], &shared);
                        h.candidates[stat] = h.candidates[twin].clone();
                    }
                }
                h.enforce_hp_parity();
            }
        }
        if !h.is_empty() {
            next.push(h);
        }
    }

    log::debug!(
        "{}: {:?} = {} keeps {} of {} hypotheses",
        creature_id,
        stat,
        observation.value,
        next.len(),
        prior.len()
    );

    if next.is_empty() {
        log::warn!("{}: {:?} = {} contradicts earlier evidence", creature_id, stat, observation.value);
        return Err(EvidenceConflict {
            creature_id: creature_id.to_string(),
            observation: *observation,
            prior: prior.to_vec(),
        });
    }
    Ok(next)
}

/// Fold [`narrow`] over every observation, starting from the full prior.
pub fn solve(
    ctx: &SolverContext,
    creature_id: &str,
    observations: &[ObservedStat],
) -> Result<Vec<SpreadHypothesis>, EvidenceConflict> {
    observations
        .iter()
        .try_fold(ctx.prior(), |live, obs| narrow(ctx, creature_id, &live, obs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_data::StatTable;
    use crate::generations::Generation;
    use crate::stats::{project, GeneticParameters};

    fn garchomp() -> SolverContext {
        SolverContext::new(StatTable([108, 130, 95, 80, 85, 102]), 100, Generation::Gen9.constants()).unwrap()
    }

    fn observe_all(ctx: &SolverContext, g: &GeneticParameters) -> Vec<ObservedStat> {
        let stats = project(&ctx.base_stats, ctx.level, g, ctx.constants.legacy);
        Stat::ALL
            .iter()
            .map(|&s| ObservedStat::new(s, stats[s], ObservationSource::ServerReveal))
            .collect()
    }

    #[test]
    fn test_admissible_neutral() {
        let ctx = garchomp();
        // 31 IV 0 EV Atk: 2*130 + 31 = 291 + 5 = 296
        let set = admissible(&ctx, Stat::Atk, NatureClass::Neutral, 296);
        assert!(set.contains((31, 0)));
        assert!(set.contains((27, 16)));
        assert!(!set.contains((31, 4)));
    }

    #[test]
    fn test_round_trip_contains_source() {
        let ctx = garchomp();
        let g = GeneticParameters::modern(NatureId::Jolly, [31, 31, 31, 12, 31, 31], [4, 252, 0, 0, 0, 252]);
        let hypotheses = solve(&ctx, "p2a", &observe_all(&ctx, &g)).unwrap();
        assert!(hypotheses.iter().any(|h| h.contains(&g)));
        assert!(hypotheses.iter().all(|h| h.nature().is_some()));
    }

    #[test]
    fn test_narrowing_is_monotonic() {
        let ctx = garchomp();
        let g = GeneticParameters::modern(NatureId::Adamant, [31; 6], [252, 252, 0, 0, 4, 0]);
        let observations = observe_all(&ctx, &g);
        let mut live = ctx.prior();
        for obs in &observations {
            let next = narrow(&ctx, "p2a", &live, obs).unwrap();
            for h in &next {
                let parent = live.iter().find(|p| p.assumption == h.assumption).unwrap();
                for stat in Stat::ALL {
                    if let (Some(child), Some(prev)) = (h.candidates(stat), parent.candidates(stat)) {
                        assert!(child.pairs().iter().all(|&p| prev.contains(p)));
                    }
                }
            }
            assert!(next.len() <= live.len());
            live = next;
        }
        assert!(live.iter().any(|h| h.contains(&g)));
    }

    #[test]
    fn test_conflict_reports_prior() {
        let ctx = garchomp();
        let first = ObservedStat::new(Stat::Spe, 303, ObservationSource::Turn(1));
        let live = narrow(&ctx, "p2a", &ctx.prior(), &first).unwrap();
        // Max Spe with a boosting nature is 333; 500 is out of reach
        let bad = ObservedStat::new(Stat::Spe, 500, ObservationSource::Turn(2));
        let err = narrow(&ctx, "p2a", &live, &bad).unwrap_err();
        assert_eq!(err.observation, bad);
        assert_eq!(err.prior, live);
        assert_eq!(err.creature_id, "p2a");
    }

    #[test]
    fn test_two_incompatible_values() {
        let ctx = garchomp();
        let observations = [
            ObservedStat::new(Stat::Atk, 296, ObservationSource::UserEntry),
            ObservedStat::new(Stat::Atk, 394, ObservationSource::UserEntry),
        ];
        assert!(solve(&ctx, "p1a", &observations).is_err());
    }

    #[test]
    fn test_effort_cap_across_stats() {
        let ctx = garchomp();
        let g = GeneticParameters::modern(NatureId::Hardy, [31; 6], [252, 252, 0, 0, 0, 0]);
        let stats = project(&ctx.base_stats, 100, &g, false);
        let mut observations = vec![
            ObservedStat::new(Stat::Hp, stats[Stat::Hp], ObservationSource::ServerReveal),
            ObservedStat::new(Stat::Atk, stats[Stat::Atk], ObservationSource::ServerReveal),
        ];
        let live = solve(&ctx, "x", &observations).unwrap();
        assert!(live.iter().any(|h| h.contains(&g)));

        let max_spe = GeneticParameters::modern(NatureId::Hardy, [31; 6], [0, 0, 0, 0, 0, 252]);
        let max_spe = project(&ctx.base_stats, 100, &max_spe, false)[Stat::Spe];
        observations.push(ObservedStat::new(Stat::Spe, max_spe, ObservationSource::ServerReveal));
        // No nature fits 420 HP, 359 Atk and 303 Spe within 510 EVs
        assert!(solve(&ctx, "x", &observations).is_err());
    }

    #[test]
    fn test_legacy_round_trip() {
        let ctx = SolverContext::new(StatTable([80, 82, 83, 100, 100, 80]), 50, Generation::Gen2.constants()).unwrap();
        let g = GeneticParameters::legacy([0, 14, 11, 9, 0, 12], [2000, 40000, 100, 65535, 0, 900]);
        let hypotheses = solve(&ctx, "venusaur", &observe_all(&ctx, &g)).unwrap();
        assert_eq!(hypotheses.len(), 1);
        assert!(hypotheses[0].contains(&g));
        assert_eq!(hypotheses[0].candidates(Stat::Spa), hypotheses[0].candidates(Stat::Spd));
    }

    #[test]
    fn test_observation_validation() {
        assert!(ObservedStat::new(Stat::Atk, 0, ObservationSource::UserEntry).validate().is_err());
        assert!(ObservedStat::new(Stat::Atk, 1, ObservationSource::UserEntry).validate().is_ok());
    }
}
