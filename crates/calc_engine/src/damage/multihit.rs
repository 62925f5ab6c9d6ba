//! Hit counts and total-damage distributions.

use super::formula::ROLL_COUNT;
use crate::abilities::AbilityTraits;
use crate::generations::GenMechanics;
use crate::items::ItemTraits;
use crate::moves::MultiHit;
use serde::Serialize;
use std::collections::BTreeMap;

/// Probability of each hit count for one use of the move.
pub fn hit_counts<G: GenMechanics>(
    gen: &G,
    multi_hit: Option<MultiHit>,
    ability: AbilityTraits,
    item: ItemTraits,
) -> Vec<(u8, f64)> {
    match multi_hit {
        None => vec![(1, 1.0)],
        Some(MultiHit::Fixed(n)) => vec![(n.max(1), 1.0)],
        Some(MultiHit::Range(2, 5)) => {
            if ability.contains(AbilityTraits::MAX_HITS) {
                vec![(5, 1.0)]
            } else if item.contains(ItemTraits::LOADED_DICE) {
                vec![(4, 0.5), (5, 0.5)]
            } else {
                let w = gen.multi_hit_weights();
                (2u8..=5)
                    .zip(w.weights)
                    .map(|(hits, weight)| (hits, weight as f64 / w.total as f64))
                    .collect()
            }
        }
        Some(MultiHit::Range(min, max)) => {
            if ability.contains(AbilityTraits::MAX_HITS) {
                return vec![(max, 1.0)];
            }
            let (min, max) = (min.max(1), max.max(min.max(1)));
            let share = 1.0 / (max - min + 1) as f64;
            (min..=max).map(|hits| (hits, share)).collect()
        }
    }
}

/// Discrete distribution over total damage.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DamageDistribution {
    /// (damage, probability), ascending by damage
    pub outcomes: Vec<(u32, f64)>,
}

impl DamageDistribution {
    /// A certain amount of damage.
    pub fn certain(damage: u32) -> Self {
        Self {
            outcomes: vec![(damage, 1.0)],
        }
    }

    /// The 16 equally likely rolls of one hit.
    pub fn from_rolls(rolls: &[u32; ROLL_COUNT]) -> Self {
        let share = 1.0 / ROLL_COUNT as f64;
        Self::collect(rolls.iter().map(|&r| (r, share)))
    }

    fn collect(pairs: impl IntoIterator<Item = (u32, f64)>) -> Self {
        let mut merged: BTreeMap<u32, f64> = BTreeMap::new();
        for (damage, p) in pairs {
            *merged.entry(damage).or_insert(0.0) += p;
        }
        Self {
            outcomes: merged.into_iter().collect(),
        }
    }

    /// Sum of two independent draws.
    pub fn convolve(&self, other: &Self) -> Self {
        Self::collect(self.outcomes.iter().flat_map(|&(a, pa)| {
            other
                .outcomes
                .iter()
                .map(move |&(b, pb)| (a.saturating_add(b), pa * pb))
        }))
    }

    /// Sum of `n` independent draws.
    pub fn repeat(&self, n: u8) -> Self {
        let mut total = Self::certain(0);
        for _ in 0..n {
            total = total.convolve(self);
        }
        total
    }

    /// Weighted mixture of distributions.
    pub fn mix(parts: &[(f64, Self)]) -> Self {
        Self::collect(
            parts
                .iter()
                .flat_map(|(weight, d)| d.outcomes.iter().map(move |&(dmg, p)| (dmg, weight * p))),
        )
    }

    /// Probability that the total reaches `hp`.
    pub fn chance_at_least(&self, hp: u32) -> f64 {
        self.outcomes
            .iter()
            .filter(|&&(dmg, _)| dmg >= hp)
            .map(|&(_, p)| p)
            .sum::<f64>()
            .min(1.0)
    }

    pub fn min(&self) -> u32 {
        self.outcomes.first().map_or(0, |&(d, _)| d)
    }

    pub fn max(&self) -> u32 {
        self.outcomes.last().map_or(0, |&(d, _)| d)
    }
}

/// Total damage of one use of a move whose single hit rolls `rolls`.
pub fn use_distribution(rolls: &[u32; ROLL_COUNT], hits: &[(u8, f64)]) -> DamageDistribution {
    let single = DamageDistribution::from_rolls(rolls);
    let parts: Vec<(f64, DamageDistribution)> = hits.iter().map(|&(n, p)| (p, single.repeat(n))).collect();
    DamageDistribution::mix(&parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generations::Generation;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_hit_counts() {
        let gen9 = Generation::Gen9;
        let none = (AbilityTraits::empty(), ItemTraits::empty());
        assert_eq!(hit_counts(&gen9, None, none.0, none.1), vec![(1, 1.0)]);
        assert_eq!(hit_counts(&gen9, Some(MultiHit::Fixed(2)), none.0, none.1), vec![(2, 1.0)]);

        let range = Some(MultiHit::Range(2, 5));
        let counts = hit_counts(&gen9, range, none.0, none.1);
        assert_eq!(counts.len(), 4);
        assert!(approx(counts[0].1, 0.35));
        assert!(approx(counts[3].1, 0.15));

        let gen4 = hit_counts(&Generation::Gen4, range, none.0, none.1);
        assert!(approx(gen4[0].1, 3.0 / 8.0));
        assert_eq!(hit_counts(&gen9, range, AbilityTraits::MAX_HITS, none.1), vec![(5, 1.0)]);
        assert_eq!(hit_counts(&gen9, range, none.0, ItemTraits::LOADED_DICE), vec![(4, 0.5), (5, 0.5)]);

        let population_bomb = hit_counts(&gen9, Some(MultiHit::Range(1, 10)), none.0, none.1);
        assert_eq!(population_bomb.len(), 10);
        assert!(approx(population_bomb.iter().map(|&(_, p)| p).sum(), 1.0));
    }

    #[test]
    fn test_distribution_sums() {
        let one = DamageDistribution {
            outcomes: vec![(10, 0.5), (12, 0.5)],
        };
        let two = one.repeat(2);
        assert_eq!(two.outcomes.iter().map(|&(d, _)| d).collect::<Vec<_>>(), vec![20, 22, 24]);
        assert!(approx(two.outcomes[1].1, 0.5));
        assert!(approx(two.chance_at_least(22), 0.75));
        assert_eq!(two.min(), 20);
        assert_eq!(two.max(), 24);
    }

    #[test]
    fn test_use_distribution_mixes_counts() {
        let rolls = [10; ROLL_COUNT];
        let dist = use_distribution(&rolls, &[(2, 0.5), (3, 0.5)]);
        assert_eq!(dist.outcomes, vec![(20, 0.5), (30, 0.5)]);
        assert_eq!(dist.chance_at_least(31), 0.0);
    }
}
