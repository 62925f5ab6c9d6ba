//! Picking one spread out of several surviving hypotheses.
//!
//! The solver never chooses; callers that need a single best guess (a
//! damage preview, say) hand the live set to a [`TieBreak`].

use super::hypothesis::{all_pairs, Assumption, Pair, SpreadHypothesis, StatCandidates};
use super::SolverContext;
use crate::core_data::{Stat, StatTable, StatVector};
use crate::natures::NatureId;
use crate::stats::{project, GeneticParameters};

/// Strategy for reducing a hypothesis set to one concrete spread.
pub trait TieBreak {
    fn name(&self) -> &'static str;

    /// Stats the strategy would spend unobserved effort on.
    fn invests_in(&self, stat: Stat) -> bool;

    /// Higher is better. Defaults to the sum of invested stats.
    fn score(&self, stats: &StatVector, _effort: u32) -> i64 {
        Stat::ALL
            .iter()
            .filter(|&&s| self.invests_in(s))
            .map(|&s| stats[s] as i64)
            .sum()
    }

    /// Best representative spread across `hypotheses`; the earlier
    /// hypothesis wins a tied score.
    fn pick(&self, ctx: &SolverContext, hypotheses: &[SpreadHypothesis]) -> Option<GeneticParameters> {
        let mut best: Option<(i64, GeneticParameters)> = None;
        for h in hypotheses {
            for (genetics, effort) in representatives(self, ctx, h) {
                let stats = project(&ctx.base_stats, ctx.level, &genetics, ctx.constants.legacy);
                let score = self.score(&stats, effort);
                if best.as_ref().map_or(true, |(s, _)| score > *s) {
                    best = Some((score, genetics));
                }
            }
        }
        log::trace!("{} picked {:?}", self.name(), best.as_ref().map(|(s, _)| s));
        best.map(|(_, g)| g)
    }
}

/// Attack, Special Attack and Speed.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaxOffense;

impl TieBreak for MaxOffense {
    fn name(&self) -> &'static str {
        "max-offense"
    }

    fn invests_in(&self, stat: Stat) -> bool {
        matches!(stat, Stat::Atk | Stat::Spa | Stat::Spe)
    }
}

/// HP, Defense and Special Defense.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaxBulk;

impl TieBreak for MaxBulk {
    fn name(&self) -> &'static str {
        "max-bulk"
    }

    fn invests_in(&self, stat: Stat) -> bool {
        matches!(stat, Stat::Hp | Stat::Def | Stat::Spd)
    }
}

/// Least total effort consistent with the evidence.
#[derive(Clone, Copy, Debug, Default)]
pub struct MinInvestment;

impl TieBreak for MinInvestment {
    fn name(&self) -> &'static str {
        "min-investment"
    }

    fn invests_in(&self, _stat: Stat) -> bool {
        false
    }

    fn score(&self, _stats: &StatVector, effort: u32) -> i64 {
        -(effort as i64)
    }
}

fn representatives<T: TieBreak + ?Sized>(
    strategy: &T,
    ctx: &SolverContext,
    h: &SpreadHypothesis,
) -> Vec<(GeneticParameters, u32)> {
    match h.assumption {
        Assumption::Nature(nature) => modern_representative(strategy, ctx, h, nature).into_iter().collect(),
        Assumption::Legacy => legacy_representatives(strategy, ctx, h),
    }
}

/// Cheapest pair first, then the highest IV at that cost.
fn cheapest(pairs: &[Pair]) -> Option<Pair> {
    pairs.iter().copied().min_by(|a, b| a.1.cmp(&b.1).then(b.0.cmp(&a.0)))
}

/// Observed stats take their cheapest admissible pair (every pair gives
/// the same value). Unobserved invested stats then take the strongest pair
/// the remaining effort allows, in stat order.
fn modern_representative<T: TieBreak + ?Sized>(
    strategy: &T,
    ctx: &SolverContext,
    h: &SpreadHypothesis,
    nature: NatureId,
) -> Option<(GeneticParameters, u32)> {
    let universe = all_pairs(&ctx.constants);
    let options = |stat: Stat| h.candidates[stat].as_ref().map_or(universe.as_slice(), StatCandidates::pairs);

    let mut choice = [(0u8, 0u16); 6];
    for stat in Stat::ALL {
        choice[stat.index()] = cheapest(options(stat))?;
    }
    let mut spent: u32 = choice.iter().map(|&(_, ev)| ev as u32).sum();
    if spent > h.effort_cap {
        return None;
    }

    for stat in Stat::ALL {
        if h.candidates[stat].is_some() || !strategy.invests_in(stat) {
            continue;
        }
        let current = choice[stat.index()];
        let budget = h.effort_cap - spent + current.1 as u32;
        let strongest = options(stat)
            .iter()
            .copied()
            .filter(|&(_, ev)| ev as u32 <= budget)
            .max_by_key(|&(iv, ev)| (iv as u32 + ev as u32 / 4, std::cmp::Reverse(ev)));
        if let Some(pair) = strongest {
            spent = spent - current.1 as u32 + pair.1 as u32;
            choice[stat.index()] = pair;
        }
    }

    let genetics = GeneticParameters::Modern {
        nature,
        ivs: StatTable(choice.map(|(iv, _)| iv)),
        evs: StatTable(choice.map(|(_, ev)| ev)),
    };
    Some((genetics, spent))
}

/// Legacy spreads are coupled through the HP DV, so each stat is reduced
/// to its preferred pair per DV parity (HP per DV) and the reduced
/// hypothesis is enumerated in full.
fn legacy_representatives<T: TieBreak + ?Sized>(
    strategy: &T,
    ctx: &SolverContext,
    h: &SpreadHypothesis,
) -> Vec<(GeneticParameters, u32)> {
    let universe = StatCandidates::new(all_pairs(&ctx.constants));
    let full = |stat: Stat| h.candidates[stat].clone().unwrap_or_else(|| universe.clone());
    let special = full(Stat::Spa).intersect(&full(Stat::Spd));

    let prefer = |stat: Stat, a: &Pair, b: &Pair| {
        if strategy.invests_in(stat) && h.candidates[stat].is_none() {
            (a.1, a.0).cmp(&(b.1, b.0))
        } else {
            b.1.cmp(&a.1).then(a.0.cmp(&b.0))
        }
    };
    let reduce = |stat: Stat, set: &StatCandidates, key: fn(u8) -> u8| {
        let mut best: Vec<Pair> = Vec::new();
        for &pair in set.pairs() {
            match best.iter_mut().find(|p| key(p.0) == key(pair.0)) {
                Some(slot) => {
                    if prefer(stat, &pair, slot).is_gt() {
                        *slot = pair;
                    }
                }
                None => best.push(pair),
            }
        }
        Some(StatCandidates::new(best))
    };

    let mut reduced = h.clone();
    for stat in [Stat::Atk, Stat::Def, Stat::Spe] {
        reduced.candidates[stat] = reduce(stat, &full(stat), |dv| dv & 1);
    }
    reduced.candidates[Stat::Spa] = reduce(Stat::Spa, &special, |dv| dv & 1);
    reduced.candidates[Stat::Spd] = reduced.candidates[Stat::Spa].clone();
    reduced.candidates[Stat::Hp] = reduce(Stat::Hp, &full(Stat::Hp), |dv| dv);

    // At most 2^4 combinations survive the reduction
    reduced
        .spreads(&ctx.constants, 16)
        .spreads
        .into_iter()
        .map(|g| {
            let effort = match g {
                GeneticParameters::Legacy { stat_exp, .. } => {
                    Stat::ALL.iter().map(|&s| crate::stats::legacy_bonus(stat_exp[s])).sum()
                }
                GeneticParameters::Modern { evs, .. } => evs.0.iter().map(|&e| e as u32).sum(),
            };
            (g, effort)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generations::Generation;
    use crate::solver::{solve, ObservationSource, ObservedStat};

    fn garchomp() -> SolverContext {
        SolverContext::new(StatTable([108, 130, 95, 80, 85, 102]), 100, Generation::Gen9.constants()).unwrap()
    }

    #[test]
    fn test_max_offense_invests_unobserved() {
        let ctx = garchomp();
        let g = GeneticParameters::modern(NatureId::Jolly, [31; 6], [0; 6]);
        let hp = project(&ctx.base_stats, 100, &g, false)[Stat::Hp];
        let live = solve(&ctx, "garchomp", &[ObservedStat::new(Stat::Hp, hp, ObservationSource::UserEntry)]).unwrap();

        let pick = MaxOffense.pick(&ctx, &live).unwrap();
        let (_, ivs, evs) = pick.modern_parts();
        // HP 357 needs no EVs, so the full 510 stays available
        assert_eq!(evs[Stat::Hp], 0);
        assert_eq!(ivs[Stat::Atk], 31);
        assert_eq!(evs[Stat::Atk], 252);
        assert_eq!(evs[Stat::Spa], 252);
        assert!(evs.0.iter().map(|&e| e as u32).sum::<u32>() <= 510);
        assert!(live.iter().any(|h| h.contains(&pick)));
    }

    #[test]
    fn test_min_investment_prefers_zero() {
        let ctx = garchomp();
        let pick = MinInvestment.pick(&ctx, &ctx.prior()).unwrap();
        let (nature, ivs, evs) = pick.modern_parts();
        assert_eq!(nature, NatureId::Hardy);
        assert_eq!(evs, StatTable::splat(0));
        assert_eq!(ivs, StatTable::splat(31));
    }

    #[test]
    fn test_max_bulk_scores_defenses() {
        let ctx = garchomp();
        let pick = MaxBulk.pick(&ctx, &ctx.prior()).unwrap();
        let stats = project(&ctx.base_stats, 100, &pick, false);
        let hardy = GeneticParameters::modern(NatureId::Hardy, [31; 6], [252, 0, 252, 0, 0, 0]);
        let baseline = project(&ctx.base_stats, 100, &hardy, false);
        assert!(MaxBulk.score(&stats, 0) >= MaxBulk.score(&baseline, 0));
        assert!(pick.nature().is_some_and(|n| n.minus().is_some_and(|s| !MaxBulk.invests_in(s))));
    }

    #[test]
    fn test_empty_set_picks_nothing() {
        assert_eq!(MaxOffense.pick(&garchomp(), &[]), None);
    }

    #[test]
    fn test_legacy_pick_is_consistent() {
        let ctx = SolverContext::new(StatTable([80, 82, 83, 100, 100, 80]), 50, Generation::Gen2.constants()).unwrap();
        let g = GeneticParameters::legacy([0, 14, 11, 9, 0, 12], [2000, 40000, 100, 65535, 0, 900]);
        let stats = project(&ctx.base_stats, 50, &g, true);
        let live = solve(
            &ctx,
            "venusaur",
            &[ObservedStat::new(Stat::Atk, stats[Stat::Atk], ObservationSource::UserEntry)],
        )
        .unwrap();
        let pick = MaxOffense.pick(&ctx, &live).unwrap();
        assert!(live[0].contains(&pick));
        let picked = project(&ctx.base_stats, 50, &pick, true);
        assert_eq!(picked[Stat::Atk], stats[Stat::Atk]);
        assert_eq!(picked[Stat::Spa], project(&ctx.base_stats, 50, &GeneticParameters::legacy_max(), true)[Stat::Spa]);
    }
}
