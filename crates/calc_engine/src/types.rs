//! Type chart and type-set lookups.
//!
//! The Gen 6+ chart is the base table; older generations are applied as
//! per-pair deltas in [`single_effectiveness`].

use crate::core_data::Type;
use crate::error::ValidationError;
use crate::generations::{GenMechanics, Generation};
use serde::{Deserialize, Serialize};

/// Type effectiveness of one attacking type against one defending type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum TypeEffectiveness {
    /// 1.0x damage
    Normal = 0,
    /// 2.0x damage
    SuperEffective = 1,
    /// 0.5x damage
    Resistant = 2,
    /// 0.0x damage (immune)
    Immune = 3,
}

impl TypeEffectiveness {
    /// Convert to fixed-point multiplier (4 = 1.0x)
    #[inline]
    pub const fn multiplier(self) -> u8 {
        match self {
            Self::Normal => 4,
            Self::SuperEffective => 8,
            Self::Resistant => 2,
            Self::Immune => 0,
        }
    }
}

/// Combined multiplier on a 4-scale: 0, 1, 2, 4, 8, 16 for 0x .. 4x.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Effectiveness(pub u8);

impl Effectiveness {
    pub const IMMUNE: Self = Self(0);
    pub const QUARTER: Self = Self(1);
    pub const HALF: Self = Self(2);
    pub const NEUTRAL: Self = Self(4);
    pub const DOUBLE: Self = Self(8);
    pub const QUADRUPLE: Self = Self(16);

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 4.0
    }

    pub const fn is_immune(self) -> bool {
        self.0 == 0
    }

    pub const fn is_super_effective(self) -> bool {
        self.0 > 4
    }

    pub const fn is_not_very_effective(self) -> bool {
        self.0 > 0 && self.0 < 4
    }

    /// Multiply two single-type lookups on the 4-scale.
    pub const fn combine(self, other: Effectiveness) -> Effectiveness {
        Effectiveness(((self.0 as u16 * other.0 as u16) / 4) as u8)
    }
}

/// Active typing: one or two distinct types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Type>", into = "Vec<Type>")]
pub struct TypeSet {
    primary: Type,
    secondary: Option<Type>,
}

impl TypeSet {
    pub const fn single(t: Type) -> Self {
        Self {
            primary: t,
            secondary: None,
        }
    }

    /// Two types; a repeated type is malformed.
    pub fn dual(primary: Type, secondary: Type) -> Result<Self, ValidationError> {
        if primary == secondary {
            return Err(ValidationError::DuplicateType(primary));
        }
        Ok(Self {
            primary,
            secondary: Some(secondary),
        })
    }

    pub const fn primary(&self) -> Type {
        self.primary
    }

    pub const fn secondary(&self) -> Option<Type> {
        self.secondary
    }

    pub fn contains(&self, t: Type) -> bool {
        self.primary == t || self.secondary == Some(t)
    }

    pub fn iter(&self) -> impl Iterator<Item = Type> {
        std::iter::once(self.primary).chain(self.secondary)
    }
}

impl TryFrom<Vec<Type>> for TypeSet {
    type Error = ValidationError;

    fn try_from(types: Vec<Type>) -> Result<Self, Self::Error> {
        match types.as_slice() {
            [t] => Ok(TypeSet::single(*t)),
            [a, b] => TypeSet::dual(*a, *b),
            other => Err(ValidationError::TypeCount(other.len())),
        }
    }
}

impl From<TypeSet> for Vec<Type> {
    fn from(set: TypeSet) -> Self {
        set.iter().collect()
    }
}

const N: usize = Type::COUNT;

/// What each defending type takes: (weak to, resists, immune to).
const DAMAGE_TAKEN: [(Type, &[Type], &[Type], &[Type]); N] = {
    use Type::*;
    [
        (Normal, &[Fighting], &[], &[Ghost]),
        (Fighting, &[Flying, Psychic, Fairy], &[Rock, Bug, Dark], &[]),
        (Flying, &[Rock, Electric, Ice], &[Fighting, Bug, Grass], &[Ground]),
        (Poison, &[Ground, Psychic], &[Fighting, Poison, Bug, Grass, Fairy], &[]),
        (Ground, &[Water, Grass, Ice], &[Poison, Rock], &[Electric]),
        (Rock, &[Fighting, Ground, Steel, Water, Grass], &[Normal, Flying, Poison, Fire], &[]),
        (Bug, &[Flying, Rock, Fire], &[Fighting, Ground, Grass], &[]),
        (Ghost, &[Ghost, Dark], &[Poison, Bug], &[Normal, Fighting]),
        (
            Steel,
            &[Fighting, Ground, Fire],
            &[Normal, Flying, Rock, Bug, Steel, Grass, Psychic, Ice, Dragon, Fairy],
            &[Poison],
        ),
        (Fire, &[Ground, Rock, Water], &[Bug, Steel, Fire, Grass, Ice, Fairy], &[]),
        (Water, &[Grass, Electric], &[Steel, Fire, Water, Ice], &[]),
        (Grass, &[Flying, Poison, Bug, Fire, Ice], &[Ground, Water, Grass, Electric], &[]),
        (Electric, &[Ground], &[Flying, Steel, Electric], &[]),
        (Psychic, &[Bug, Ghost, Dark], &[Fighting, Psychic], &[]),
        (Ice, &[Fighting, Rock, Steel, Fire], &[Ice], &[]),
        (Dragon, &[Ice, Dragon, Fairy], &[Fire, Water, Grass, Electric], &[]),
        (Dark, &[Fighting, Bug, Fairy], &[Ghost, Dark], &[Psychic]),
        (Fairy, &[Poison, Steel], &[Fighting, Bug, Dark], &[Dragon]),
    ]
};

const fn build_chart() -> [[TypeEffectiveness; N]; N] {
    let mut chart = [[TypeEffectiveness::Normal; N]; N];
    let mut row = 0;
    while row < N {
        let (def, weak, resist, immune) = DAMAGE_TAKEN[row];
        let d = def as usize;
        let mut i = 0;
        while i < weak.len() {
            chart[d][weak[i] as usize] = TypeEffectiveness::SuperEffective;
            i += 1;
        }
        i = 0;
        while i < resist.len() {
            chart[d][resist[i] as usize] = TypeEffectiveness::Resistant;
            i += 1;
        }
        i = 0;
        while i < immune.len() {
            chart[d][immune[i] as usize] = TypeEffectiveness::Immune;
            i += 1;
        }
        row += 1;
    }
    chart
}

/// Type chart: TYPE_CHART[defender][attacker] = effectiveness (Gen 6+)
pub static TYPE_CHART: [[TypeEffectiveness; N]; N] = build_chart();

/// Effectiveness of one attacking type against one defending type.
pub fn single_effectiveness(gen: Generation, attacker: Type, defender: Type) -> Effectiveness {
    // No chart entries for a type the generation lacks
    if !gen.has_type(attacker) || !gen.has_type(defender) {
        return Effectiveness::NEUTRAL;
    }
    let base = Effectiveness(TYPE_CHART[defender as usize][attacker as usize].multiplier());
    let n = gen.num();

    if n <= 5 && defender == Type::Steel && matches!(attacker, Type::Ghost | Type::Dark) {
        return Effectiveness::HALF;
    }

    if n == 1 {
        return match (attacker, defender) {
            (Type::Ghost, Type::Psychic) => Effectiveness::IMMUNE,
            (Type::Bug, Type::Poison) | (Type::Poison, Type::Bug) => Effectiveness::DOUBLE,
            (Type::Ice, Type::Fire) => Effectiveness::NEUTRAL,
            _ => base,
        };
    }

    base
}

/// Multiplier of an attacking type against a type-set.
///
/// Dual types multiply the two lookups; an immunity on either side
/// forces the product to 0.
pub fn multiplier(gen: Generation, attacker: Type, defenders: &TypeSet) -> Effectiveness {
    multiplier_with(attacker, defenders, |t| single_effectiveness(gen, attacker, t))
}

/// Like [`multiplier`], with a caller-supplied single-type lookup
/// (used for immunity overrides such as Scrappy or Ring Target).
pub fn multiplier_with<F>(_attacker: Type, defenders: &TypeSet, single: F) -> Effectiveness
where
    F: Fn(Type) -> Effectiveness,
{
    defenders
        .iter()
        .map(single)
        .fold(Effectiveness::NEUTRAL, Effectiveness::combine)
}
