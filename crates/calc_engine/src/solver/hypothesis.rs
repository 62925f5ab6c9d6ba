//! Spread hypotheses: per-stat candidate sets under one assumed nature.

use crate::core_data::{Stat, StatTable};
use crate::generations::GenerationConstants;
use crate::natures::NatureId;
use crate::stats::genetics::{hp_dv, MAX_DV};
use crate::stats::{legacy_bonus, GeneticParameters};
use serde::{Deserialize, Serialize};

/// `(iv, ev)` in modern hypotheses, `(dv, stat-exp bonus)` in legacy ones.
pub type Pair = (u8, u16);

/// Largest legacy stat-experience bonus (`floor(255 / 4)`).
pub const MAX_LEGACY_BONUS: u16 = 63;

/// Sorted, duplicate-free set of admissible pairs for one stat.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatCandidates(Vec<Pair>);

impl StatCandidates {
    pub fn new(mut pairs: Vec<Pair>) -> Self {
        pairs.sort_unstable();
        pairs.dedup();
        Self(pairs)
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, pair: Pair) -> bool {
        self.0.binary_search(&pair).is_ok()
    }

    /// Merge-intersection of two sorted sets.
    pub fn intersect(&self, other: &StatCandidates) -> StatCandidates {
        let (mut i, mut j) = (0, 0);
        let mut out = Vec::with_capacity(self.len().min(other.len()));
        while i < self.0.len() && j < other.0.len() {
            match self.0[i].cmp(&other.0[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    out.push(self.0[i]);
                    i += 1;
                    j += 1;
                }
            }
        }
        StatCandidates(out)
    }

    pub fn min_effort(&self) -> Option<u16> {
        self.0.iter().map(|&(_, effort)| effort).min()
    }

    pub fn retain(&mut self, f: impl FnMut(&Pair) -> bool) -> bool {
        let before = self.0.len();
        self.0.retain(f);
        self.0.len() != before
    }
}

/// Every pair a stat can take under the constants.
pub fn all_pairs(constants: &GenerationConstants) -> Vec<Pair> {
    if constants.legacy {
        (0..=MAX_DV)
            .flat_map(|dv| (0..=MAX_LEGACY_BONUS).map(move |bonus| (dv, bonus)))
            .collect()
    } else {
        let step = constants.ev_granularity.max(1) as usize;
        (0..=constants.max_iv)
            .flat_map(|iv| (0..=constants.max_ev).step_by(step).map(move |ev| (iv, ev)))
            .collect()
    }
}

/// Smallest stat experience with the given bonus.
pub fn stat_exp_for_bonus(bonus: u16) -> u16 {
    match bonus {
        0 => 0,
        b => {
            let root = 4 * b as u32 - 1;
            (root * root + 1).min(u16::MAX as u32) as u16
        }
    }
}

/// What a hypothesis assumes beyond its candidate sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "nature", rename_all = "lowercase")]
pub enum Assumption {
    Nature(NatureId),
    /// Gen 1-2: no natures
    Legacy,
}

/// One assumed nature plus, per stat, the pairs still consistent with every
/// observation. `None` means the stat has not been observed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpreadHypothesis {
    pub assumption: Assumption,
    pub candidates: StatTable<Option<StatCandidates>>,
    /// Total effort the spread may spend (510 in modern generations)
    pub effort_cap: u32,
}

/// Concrete spreads drawn from a hypothesis.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SpreadEnumeration {
    pub spreads: Vec<GeneticParameters>,
    /// The cap was hit before the set was exhausted
    pub truncated: bool,
}

impl SpreadHypothesis {
    pub fn unconstrained(assumption: Assumption, effort_cap: u32) -> Self {
        Self {
            assumption,
            candidates: StatTable::default(),
            effort_cap,
        }
    }

    pub fn nature(&self) -> Option<NatureId> {
        match self.assumption {
            Assumption::Nature(n) => Some(n),
            Assumption::Legacy => None,
        }
    }

    pub fn is_legacy(&self) -> bool {
        self.assumption == Assumption::Legacy
    }

    pub fn candidates(&self, stat: Stat) -> Option<&StatCandidates> {
        self.candidates[stat].as_ref()
    }

    /// Some observed stat has no pair left.
    pub fn is_empty(&self) -> bool {
        self.candidates.0.iter().flatten().any(StatCandidates::is_empty)
    }

    /// Product of the candidate set sizes; unobserved stats count as 1.
    pub fn size_hint(&self) -> usize {
        self.candidates
            .0
            .iter()
            .flatten()
            .fold(1usize, |acc, c| acc.saturating_mul(c.len()))
    }

    /// Whether `genetics` is one of the spreads this hypothesis stands for.
    pub fn contains(&self, genetics: &GeneticParameters) -> bool {
        match (self.assumption, genetics) {
            (Assumption::Nature(nature), GeneticParameters::Modern { nature: n, ivs, evs }) => {
                if *n != nature {
                    return false;
                }
                let total: u32 = evs.0.iter().map(|&ev| ev as u32).sum();
                total <= self.effort_cap
                    && Stat::ALL.iter().all(|&s| self.admits(s, (ivs[s], evs[s])))
            }
            (Assumption::Legacy, GeneticParameters::Legacy { .. }) => {
                let (dvs, exp) = genetics.legacy_parts();
                Stat::ALL
                    .iter()
                    .all(|&s| self.admits(s, (dvs[s], legacy_bonus(exp[s]) as u16)))
            }
            _ => false,
        }
    }

    fn admits(&self, stat: Stat, pair: Pair) -> bool {
        self.candidates[stat].as_ref().map_or(true, |c| c.contains(pair))
    }

    /// Drop pairs that cannot fit under the effort cap next to the cheapest
    /// pairs of the other observed stats. Runs to a fixpoint.
    pub fn propagate_effort_cap(&mut self) {
        if self.is_legacy() {
            return;
        }
        loop {
            let mins: Vec<(Stat, u32)> = Stat::ALL
                .iter()
                .filter_map(|&s| {
                    let c = self.candidates[s].as_ref()?;
                    Some((s, c.min_effort()? as u32))
                })
                .collect();
            let total_min: u32 = mins.iter().map(|&(_, m)| m).sum();
            if total_min > self.effort_cap {
                for (stat, _) in mins {
                    self.candidates[stat] = Some(StatCandidates::default());
                }
                return;
            }

            let mut changed = false;
            for &(stat, min) in &mins {
                let budget = self.effort_cap - (total_min - min);
                if let Some(c) = self.candidates[stat].as_mut() {
                    changed |= c.retain(|&(_, ev)| ev as u32 <= budget);
                }
            }
            if !changed {
                return;
            }
        }
    }

    /// Legacy only: the HP DV is the parity bits of Atk, Def, Spe and
    /// Special. Prune pairs with no partner on the other side.
    pub fn enforce_hp_parity(&mut self) {
        const SOURCES: [(Stat, u8); 4] = [(Stat::Atk, 3), (Stat::Def, 2), (Stat::Spe, 1), (Stat::Spa, 0)];
        if !self.is_legacy() {
            return;
        }
        loop {
            let mut changed = false;

            for (stat, shift) in SOURCES {
                let Some(parities) = self.parities(stat) else { continue };
                if let Some(hp) = self.candidates[Stat::Hp].as_mut() {
                    changed |= hp.retain(|&(dv, _)| parities[((dv >> shift) & 1) as usize]);
                }
            }

            if let Some(hp) = self.candidates[Stat::Hp].clone() {
                for (stat, shift) in SOURCES {
                    let mut allowed = [false; 2];
                    for &(dv, _) in hp.pairs() {
                        allowed[((dv >> shift) & 1) as usize] = true;
                    }
                    let slots: &[Stat] = if stat == Stat::Spa { &[Stat::Spa, Stat::Spd] } else { &[stat] };
                    for &slot in slots {
                        if let Some(c) = self.candidates[slot].as_mut() {
                            changed |= c.retain(|&(dv, _)| allowed[(dv & 1) as usize]);
                        }
                    }
                }
            }

            if !changed {
                return;
            }
        }
    }

    fn parities(&self, stat: Stat) -> Option<[bool; 2]> {
        let c = self.candidates[stat].as_ref()?;
        let mut seen = [false; 2];
        for &(dv, _) in c.pairs() {
            seen[(dv & 1) as usize] = true;
        }
        Some(seen)
    }

    /// Enumerate concrete spreads, stopping after `cap`.
    pub fn spreads(&self, constants: &GenerationConstants, cap: usize) -> SpreadEnumeration {
        let universe = all_pairs(constants);
        let options: Vec<&[Pair]> = Stat::ALL
            .iter()
            .map(|&s| self.candidates[s].as_ref().map_or(universe.as_slice(), StatCandidates::pairs))
            .collect();

        let mut out = SpreadEnumeration::default();
        let mut choice = [(0u8, 0u16); 6];
        match self.assumption {
            Assumption::Nature(nature) => self.walk_modern(nature, &options, 0, 0, &mut choice, cap, &mut out),
            Assumption::Legacy => self.walk_legacy(&options, 0, &mut choice, cap, &mut out),
        }
        out
    }

    #[allow(clippy::too_many_arguments)]
    fn walk_modern(
        &self,
        nature: NatureId,
        options: &[&[Pair]],
        depth: usize,
        spent: u32,
        choice: &mut [Pair; 6],
        cap: usize,
        out: &mut SpreadEnumeration,
    ) {
        if out.truncated {
            return;
        }
        if depth == Stat::ALL.len() {
            if out.spreads.len() == cap {
                out.truncated = true;
                return;
            }
            out.spreads.push(GeneticParameters::Modern {
                nature,
                ivs: StatTable(choice.map(|(iv, _)| iv)),
                evs: StatTable(choice.map(|(_, ev)| ev)),
            });
            return;
        }
        for &pair in options[depth] {
            let spent = spent + pair.1 as u32;
            if spent > self.effort_cap {
                continue;
            }
            choice[depth] = pair;
            self.walk_modern(nature, options, depth + 1, spent, choice, cap, out);
        }
    }

    /// Walks Atk, Def, Spe, Special, then HP restricted to the derived DV.
    fn walk_legacy(
        &self,
        options: &[&[Pair]],
        depth: usize,
        choice: &mut [Pair; 6],
        cap: usize,
        out: &mut SpreadEnumeration,
    ) {
        const ORDER: [Stat; 5] = [Stat::Atk, Stat::Def, Stat::Spe, Stat::Spa, Stat::Hp];
        if out.truncated {
            return;
        }
        if depth == ORDER.len() {
            if out.spreads.len() == cap {
                out.truncated = true;
                return;
            }
            choice[Stat::Spd.index()] = choice[Stat::Spa.index()];
            out.spreads.push(GeneticParameters::Legacy {
                dvs: StatTable(choice.map(|(dv, _)| dv)),
                stat_exp: StatTable(choice.map(|(_, bonus)| stat_exp_for_bonus(bonus))),
            });
            return;
        }

        let stat = ORDER[depth];
        let spd = options[Stat::Spd.index()];
        let hp = hp_dv(
            choice[Stat::Atk.index()].0,
            choice[Stat::Def.index()].0,
            choice[Stat::Spe.index()].0,
            choice[Stat::Spa.index()].0,
        );
        for &pair in options[stat.index()] {
            match stat {
                // SpA and SpD share one slot; both sets must admit it
                Stat::Spa if !spd.contains(&pair) => continue,
                Stat::Hp if pair.0 != hp => continue,
                _ => {}
            }
            choice[stat.index()] = pair;
            self.walk_legacy(options, depth + 1, choice, cap, out);
        }
    }
}
