//! Type-safe 4096-scale modifier.

use serde::{Deserialize, Serialize};

/// A fixed-point damage modifier (4096 scale).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Modifier(pub u16);

impl Default for Modifier {
    fn default() -> Self {
        Self::ONE
    }
}

impl Modifier {
    /// 1.0x modifier (4096).
    pub const ONE: Self = Self(4096);

    /// 0.5x modifier (2048).
    pub const HALF: Self = Self(2048);

    /// 0.75x modifier (3072). Filter, Solid Rock, Prism Armor.
    pub const THREE_QUARTERS: Self = Self(3072);

    /// 2.0x modifier (8192).
    pub const DOUBLE: Self = Self(8192);

    /// 1.5x modifier (6144).
    pub const ONE_POINT_FIVE: Self = Self(6144);

    /// 1.2x modifier (4915).
    pub const ONE_POINT_TWO: Self = Self(4915);

    /// 1.1x modifier (4505). Muscle Band, Wise Glasses.
    pub const ONE_POINT_ONE: Self = Self(4505);

    /// 1.25x modifier (5120). Neuroforce, Dry Skin.
    pub const ONE_POINT_TWO_FIVE: Self = Self(5120);

    /// 1.3x modifier (5325). Sheer Force, Tough Claws, terrain in Gen 8+.
    pub const ONE_POINT_THREE: Self = Self(5325);

    /// Life Orb uses 5324 rather than the rounded 5325.
    pub const LIFE_ORB: Self = Self(5324);

    /// Screens in doubles, approximately 2/3.
    pub const SCREENS_DOUBLES: Self = Self(2732);

    pub const fn new(val: u16) -> Self {
        Self(val)
    }

    pub const fn val(self) -> u16 {
        self.0
    }

    pub const fn is_one(self) -> bool {
        self.0 == 4096
    }
}

/// Create a [`Modifier`] from a float literal at compile time.
///
/// Rounds to the nearest integer: `round(val * 4096)`.
///
/// ```rust
/// use calc_engine::modifier;
/// const MOD: calc_engine::modifiers::Modifier = modifier!(1.5);
/// assert_eq!(MOD.val(), 6144);
/// ```
#[macro_export]
macro_rules! modifier {
    ($val:expr) => {
        $crate::modifiers::Modifier::new(($val * 4096.0 + 0.5) as u16)
    };
}
