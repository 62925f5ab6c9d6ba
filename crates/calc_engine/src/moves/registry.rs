//! Moves whose damage or power is not the listed base power.

use phf::phf_map;

/// Damage that ignores the damage formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FixedDamage {
    /// Damage equals the user's level
    Level,
    Constant(u16),
    /// Half the target's current HP, at least 1
    HalfTargetHp,
    /// The user's current HP
    UserHp,
    /// Target's HP down to the user's
    Endeavor,
}

/// Base power computed from the battle situation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VariablePower {
    /// `150 * hp / max_hp`
    UserHpHigh,
    /// Rises as the user's HP falls
    UserHpLow,
    TargetWeight,
    WeightRatio,
    GyroBall,
    ElectroBall,
    /// `20 + 20 * positive boost stages`
    PositiveBoosts,
    /// 2x with no held item
    Acrobatics,
    /// 2x while statused
    Facade,
    /// 2x against a statused target
    Hex,
    /// 2x against a poisoned target
    Venoshock,
    /// 2x against a target at or below half HP
    Brine,
    /// 1.5x against a target holding an item (Gen 6+)
    KnockOff,
    HiddenPower,
    /// Return and Frustration at optimal happiness
    Friendship,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveBehavior {
    Fixed(FixedDamage),
    Power(VariablePower),
}

use FixedDamage as F;
use MoveBehavior::{Fixed, Power};
use VariablePower as P;

/// Behaviour by move id.
pub static MOVE_BEHAVIORS: phf::Map<&'static str, MoveBehavior> = phf_map! {
    // Fixed damage
    "seismictoss" => Fixed(F::Level),
    "nightshade" => Fixed(F::Level),
    "dragonrage" => Fixed(F::Constant(40)),
    "sonicboom" => Fixed(F::Constant(20)),
    "superfang" => Fixed(F::HalfTargetHp),
    "naturesmadness" => Fixed(F::HalfTargetHp),
    "ruination" => Fixed(F::HalfTargetHp),
    "finalgambit" => Fixed(F::UserHp),
    "endeavor" => Fixed(F::Endeavor),

    // HP based
    "eruption" => Power(P::UserHpHigh),
    "waterspout" => Power(P::UserHpHigh),
    "dragonenergy" => Power(P::UserHpHigh),
    "flail" => Power(P::UserHpLow),
    "reversal" => Power(P::UserHpLow),

    // Weight and speed based
    "lowkick" => Power(P::TargetWeight),
    "grassknot" => Power(P::TargetWeight),
    "heavyslam" => Power(P::WeightRatio),
    "heatcrash" => Power(P::WeightRatio),
    "gyroball" => Power(P::GyroBall),
    "electroball" => Power(P::ElectroBall),

    // Boosts
    "storedpower" => Power(P::PositiveBoosts),
    "powertrip" => Power(P::PositiveBoosts),

    // Conditional doublers
    "acrobatics" => Power(P::Acrobatics),
    "facade" => Power(P::Facade),
    "hex" => Power(P::Hex),
    "venoshock" => Power(P::Venoshock),
    "brine" => Power(P::Brine),
    "knockoff" => Power(P::KnockOff),

    "hiddenpower" => Power(P::HiddenPower),
    "return" => Power(P::Friendship),
    "frustration" => Power(P::Friendship),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(MOVE_BEHAVIORS.get("superfang"), Some(&Fixed(F::HalfTargetHp)));
        assert_eq!(MOVE_BEHAVIORS.get("knockoff"), Some(&Power(P::KnockOff)));
        assert!(MOVE_BEHAVIORS.get("tackle").is_none());
    }
}
