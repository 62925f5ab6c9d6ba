//! Natures and their stat multipliers.

use crate::core_data::Stat;
use serde::{Deserialize, Serialize};

/// Nature (affects stat growth).
///
/// Ordered in a 5x5 grid: `id = plus * 5 + minus` over Atk/Def/SpA/SpD/Spe.
/// Diagonal entries (plus == minus) are the neutral natures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum NatureId {
    #[default]
    Hardy = 0,
    Lonely = 1,
    Adamant = 2,
    Naughty = 3,
    Brave = 4,
    Bold = 5,
    Docile = 6,
    Impish = 7,
    Lax = 8,
    Relaxed = 9,
    Modest = 10,
    Mild = 11,
    Bashful = 12,
    Rash = 13,
    Quiet = 14,
    Calm = 15,
    Gentle = 16,
    Careful = 17,
    Quirky = 18,
    Sassy = 19,
    Timid = 20,
    Hasty = 21,
    Jolly = 22,
    Naive = 23,
    Serious = 24,
}

/// How a nature treats one stat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NatureClass {
    Hindered,
    Neutral,
    Boosted,
}

impl NatureClass {
    pub const ALL: [NatureClass; 3] = [NatureClass::Hindered, NatureClass::Neutral, NatureClass::Boosted];

    /// Apply the nature multiplier with the game's floor: `floor(v * 110 / 100)`.
    #[inline]
    pub const fn apply(self, value: u32) -> u32 {
        match self {
            NatureClass::Boosted => value * 110 / 100,
            NatureClass::Neutral => value,
            NatureClass::Hindered => value * 90 / 100,
        }
    }
}

impl NatureId {
    pub const COUNT: usize = 25;

    pub const ALL: [NatureId; NatureId::COUNT] = [
        NatureId::Hardy,
        NatureId::Lonely,
        NatureId::Adamant,
        NatureId::Naughty,
        NatureId::Brave,
        NatureId::Bold,
        NatureId::Docile,
        NatureId::Impish,
        NatureId::Lax,
        NatureId::Relaxed,
        NatureId::Modest,
        NatureId::Mild,
        NatureId::Bashful,
        NatureId::Rash,
        NatureId::Quiet,
        NatureId::Calm,
        NatureId::Gentle,
        NatureId::Careful,
        NatureId::Quirky,
        NatureId::Sassy,
        NatureId::Timid,
        NatureId::Hasty,
        NatureId::Jolly,
        NatureId::Naive,
        NatureId::Serious,
    ];

    /// Parse nature from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        let key = s.trim().to_ascii_lowercase();
        NatureId::ALL
            .iter()
            .copied()
            .find(|n| n.name().eq_ignore_ascii_case(&key))
    }

    pub const fn name(self) -> &'static str {
        match self {
            NatureId::Hardy => "Hardy",
            NatureId::Lonely => "Lonely",
            NatureId::Adamant => "Adamant",
            NatureId::Naughty => "Naughty",
            NatureId::Brave => "Brave",
            NatureId::Bold => "Bold",
            NatureId::Docile => "Docile",
            NatureId::Impish => "Impish",
            NatureId::Lax => "Lax",
            NatureId::Relaxed => "Relaxed",
            NatureId::Modest => "Modest",
            NatureId::Mild => "Mild",
            NatureId::Bashful => "Bashful",
            NatureId::Rash => "Rash",
            NatureId::Quiet => "Quiet",
            NatureId::Calm => "Calm",
            NatureId::Gentle => "Gentle",
            NatureId::Careful => "Careful",
            NatureId::Quirky => "Quirky",
            NatureId::Sassy => "Sassy",
            NatureId::Timid => "Timid",
            NatureId::Hasty => "Hasty",
            NatureId::Jolly => "Jolly",
            NatureId::Naive => "Naive",
            NatureId::Serious => "Serious",
        }
    }

    /// Look up a nature by the stats it raises and lowers.
    /// Passing the same stat twice (or HP) yields a neutral nature.
    pub fn from_plus_minus(plus: Stat, minus: Stat) -> Self {
        match (grid_slot(plus), grid_slot(minus)) {
            (Some(p), Some(m)) => NatureId::ALL[p * 5 + m],
            _ => NatureId::Hardy,
        }
    }

    /// Stat raised by this nature (`None` if neutral).
    pub const fn plus(self) -> Option<Stat> {
        if self.is_neutral() {
            None
        } else {
            Some(Stat::BATTLE[self as usize / 5])
        }
    }

    /// Stat lowered by this nature (`None` if neutral).
    pub const fn minus(self) -> Option<Stat> {
        if self.is_neutral() {
            None
        } else {
            Some(Stat::BATTLE[self as usize % 5])
        }
    }

    /// Classify the effect of this nature on a stat. HP is always neutral.
    pub fn class_for(self, stat: Stat) -> NatureClass {
        if self.plus() == Some(stat) {
            NatureClass::Boosted
        } else if self.minus() == Some(stat) {
            NatureClass::Hindered
        } else {
            NatureClass::Neutral
        }
    }

    /// Get stat modifier for a given stat.
    /// Returns: 9 (-10%), 10 (neutral), 11 (+10%)
    pub fn stat_modifier(self, stat: Stat) -> u8 {
        match self.class_for(stat) {
            NatureClass::Boosted => 11,
            NatureClass::Neutral => 10,
            NatureClass::Hindered => 9,
        }
    }

    /// Check if this is a neutral nature (no stat changes)
    #[inline]
    pub const fn is_neutral(self) -> bool {
        let id = self as u8;
        (id / 5) == (id % 5)
    }
}

fn grid_slot(stat: Stat) -> Option<usize> {
    match stat {
        Stat::Hp => None,
        other => Some(other.index() - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nature_modifiers() {
        // Adamant: +Atk, -SpA
        let adamant = NatureId::from_str("adamant").unwrap();
        assert_eq!(adamant.stat_modifier(Stat::Atk), 11);
        assert_eq!(adamant.stat_modifier(Stat::Spa), 9);
        assert_eq!(adamant.stat_modifier(Stat::Spe), 10);
        assert!(!adamant.is_neutral());

        // Hardy: neutral
        let hardy = NatureId::from_str("Hardy").unwrap();
        assert!(hardy.is_neutral());
        assert_eq!(hardy.stat_modifier(Stat::Atk), 10);
    }

    #[test]
    fn test_grid_layout() {
        assert_eq!(NatureId::from_plus_minus(Stat::Spe, Stat::Atk), NatureId::Timid);
        assert_eq!(NatureId::from_plus_minus(Stat::Spa, Stat::Atk), NatureId::Modest);
        assert_eq!(NatureId::from_plus_minus(Stat::Def, Stat::Spe), NatureId::Relaxed);
        assert!(NatureId::from_plus_minus(Stat::Spd, Stat::Spd).is_neutral());
        assert_eq!(NatureId::Jolly.plus(), Some(Stat::Spe));
        assert_eq!(NatureId::Jolly.minus(), Some(Stat::Spa));
        assert_eq!(NatureId::Serious.plus(), None);
    }

    #[test]
    fn test_exactly_five_neutral() {
        let neutral = NatureId::ALL.iter().filter(|n| n.is_neutral()).count();
        assert_eq!(neutral, 5);
    }

    #[test]
    fn test_class_apply_floors() {
        assert_eq!(NatureClass::Boosted.apply(268), 294);
        assert_eq!(NatureClass::Hindered.apply(268), 241);
        assert_eq!(NatureClass::Neutral.apply(268), 268);
    }
}
