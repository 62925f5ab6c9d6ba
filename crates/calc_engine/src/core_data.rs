use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Elemental type. Discriminants index the type chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Type {
    Normal = 0,
    Fighting = 1,
    Flying = 2,
    Poison = 3,
    Ground = 4,
    Rock = 5,
    Bug = 6,
    Ghost = 7,
    Steel = 8,
    Fire = 9,
    Water = 10,
    Grass = 11,
    Electric = 12,
    Psychic = 13,
    Ice = 14,
    Dragon = 15,
    Dark = 16,
    Fairy = 17,
}

impl Default for Type {
    fn default() -> Self {
        Type::Normal
    }
}

impl Type {
    /// Total number of types
    pub const COUNT: usize = 18;

    pub const ALL: [Type; Type::COUNT] = [
        Type::Normal,
        Type::Fighting,
        Type::Flying,
        Type::Poison,
        Type::Ground,
        Type::Rock,
        Type::Bug,
        Type::Ghost,
        Type::Steel,
        Type::Fire,
        Type::Water,
        Type::Grass,
        Type::Electric,
        Type::Psychic,
        Type::Ice,
        Type::Dragon,
        Type::Dark,
        Type::Fairy,
    ];

    /// Parse type from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        let key = s.to_ascii_lowercase();
        Type::ALL
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(&key))
    }

    pub const fn name(self) -> &'static str {
        match self {
            Type::Normal => "Normal",
            Type::Fighting => "Fighting",
            Type::Flying => "Flying",
            Type::Poison => "Poison",
            Type::Ground => "Ground",
            Type::Rock => "Rock",
            Type::Bug => "Bug",
            Type::Ghost => "Ghost",
            Type::Steel => "Steel",
            Type::Fire => "Fire",
            Type::Water => "Water",
            Type::Grass => "Grass",
            Type::Electric => "Electric",
            Type::Psychic => "Psychic",
            Type::Ice => "Ice",
            Type::Dragon => "Dragon",
            Type::Dark => "Dark",
            Type::Fairy => "Fairy",
        }
    }

    /// Types whose moves were special before the per-move split (Gen 1-3).
    pub const fn is_legacy_special(self) -> bool {
        matches!(
            self,
            Type::Fire
                | Type::Water
                | Type::Grass
                | Type::Ice
                | Type::Electric
                | Type::Psychic
                | Type::Dragon
                | Type::Dark
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct MoveFlags: u32 {
        const CONTACT = 1 << 0;
        const SOUND = 1 << 1;
        const PUNCH = 1 << 2;
        const BITE = 1 << 3;
        const PULSE = 1 << 4;
        const SLICING = 1 << 5;
        const BULLET = 1 << 6;
        const WIND = 1 << 7;
        /// Move deals recoil damage (Reckless)
        const RECOIL = 1 << 8;
        /// Move has a secondary effect (Sheer Force)
        const SECONDARY = 1 << 9;
        /// Ignores the target's ability (Mold Breaker-like moves)
        const IGNORE_ABILITY = 1 << 10;
        const SPREAD = 1 << 11;
    }
}

/// Stat slot. Discriminants index a [`StatTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Stat {
    Hp = 0,
    Atk = 1,
    Def = 2,
    Spa = 3,
    Spd = 4,
    Spe = 5,
}

impl Stat {
    pub const ALL: [Stat; 6] = [Stat::Hp, Stat::Atk, Stat::Def, Stat::Spa, Stat::Spd, Stat::Spe];

    /// Stats a nature can raise or lower.
    pub const BATTLE: [Stat; 5] = [Stat::Atk, Stat::Def, Stat::Spa, Stat::Spd, Stat::Spe];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "hp" => Some(Stat::Hp),
            "atk" | "attack" => Some(Stat::Atk),
            "def" | "defense" => Some(Stat::Def),
            "spa" | "spatk" | "specialattack" => Some(Stat::Spa),
            "spd" | "spdef" | "specialdefense" => Some(Stat::Spd),
            "spe" | "speed" => Some(Stat::Spe),
            _ => None,
        }
    }
}

/// Six values indexed by [`Stat`], in HP/Atk/Def/SpA/SpD/Spe order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatTable<T>(pub [T; 6]);

impl<T: Copy> StatTable<T> {
    pub const fn new(values: [T; 6]) -> Self {
        Self(values)
    }

    pub const fn splat(value: T) -> Self {
        Self([value; 6])
    }

    #[inline]
    pub fn get(&self, stat: Stat) -> T {
        self.0[stat.index()]
    }

    pub fn map<U: Copy>(&self, f: impl Fn(Stat, T) -> U) -> StatTable<U> {
        StatTable(Stat::ALL.map(|s| f(s, self.0[s.index()])))
    }
}

impl<T> Index<Stat> for StatTable<T> {
    type Output = T;

    fn index(&self, stat: Stat) -> &T {
        &self.0[stat.index()]
    }
}

impl<T> IndexMut<Stat> for StatTable<T> {
    fn index_mut(&mut self, stat: Stat) -> &mut T {
        &mut self.0[stat.index()]
    }
}

/// Projected battle stats.
pub type StatVector = StatTable<u16>;

/// Species base stats.
pub type BaseStats = StatTable<u16>;

/// Boost stages (-6..=+6). The HP entry is unused.
pub type Boosts = StatTable<i8>;

/// Normalize a display name into a lookup id ("Choice Band" -> "choiceband").
pub fn to_id(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
