//! Abilities: closed identifier set, declarative modifier rules and the
//! handful of behaviours that are not plain multipliers.

pub mod registry;

pub use registry::ABILITY_REGISTRY;

use crate::core_data::{to_id, Type};
use crate::modifiers::Rule;
use bitflags::bitflags;
use phf::phf_map;

/// Ability identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum AbilityId {
    // Attack stat
    HugePower,
    PurePower,
    Hustle,
    Guts,
    SolarPower,
    Overgrow,
    Blaze,
    Torrent,
    Swarm,
    GorillaTactics,
    WaterBubble,
    Steelworker,
    Transistor,
    DragonsMaw,
    RockyPayload,
    // Defender-side attack and defense
    ThickFat,
    Heatproof,
    PurifyingSalt,
    MarvelScale,
    FurCoat,
    // Base power
    Technician,
    IronFist,
    StrongJaw,
    MegaLauncher,
    Sharpness,
    ToughClaws,
    Reckless,
    SheerForce,
    SandForce,
    PunkRock,
    DrySkin,
    // Final damage
    TintedLens,
    Sniper,
    Neuroforce,
    Multiscale,
    ShadowShield,
    Filter,
    SolidRock,
    PrismArmor,
    Fluffy,
    IceScales,
    // Speed
    SwiftSwim,
    Chlorophyll,
    SandRush,
    SlushRush,
    QuickFeet,
    // Behavioural
    Adaptability,
    Scrappy,
    MindsEye,
    SkillLink,
    Merciless,
    SuperLuck,
    BattleArmor,
    ShellArmor,
    MoldBreaker,
    Teravolt,
    Turboblaze,
    Unaware,
    Infiltrator,
    Klutz,
    Levitate,
    FlashFire,
    WellBakedBody,
    WaterAbsorb,
    StormDrain,
    VoltAbsorb,
    LightningRod,
    MotorDrive,
    SapSipper,
    EarthEater,
    WonderGuard,
    Aerilate,
    Pixilate,
    Refrigerate,
    Galvanize,
    Normalize,
    NoAbility,
}

impl AbilityId {
    pub const COUNT: usize = AbilityId::NoAbility as usize + 1;

    /// Look up an ability by display name or id.
    pub fn from_str(s: &str) -> Option<Self> {
        ABILITY_IDS.get(to_id(s).as_str()).copied()
    }

    pub fn data(self) -> &'static AbilityData {
        &ABILITY_REGISTRY[self as usize]
    }
}

static ABILITY_IDS: phf::Map<&'static str, AbilityId> = phf_map! {
    "hugepower" => AbilityId::HugePower,
    "purepower" => AbilityId::PurePower,
    "hustle" => AbilityId::Hustle,
    "guts" => AbilityId::Guts,
    "solarpower" => AbilityId::SolarPower,
    "overgrow" => AbilityId::Overgrow,
    "blaze" => AbilityId::Blaze,
    "torrent" => AbilityId::Torrent,
    "swarm" => AbilityId::Swarm,
    "gorillatactics" => AbilityId::GorillaTactics,
    "waterbubble" => AbilityId::WaterBubble,
    "steelworker" => AbilityId::Steelworker,
    "transistor" => AbilityId::Transistor,
    "dragonsmaw" => AbilityId::DragonsMaw,
    "rockypayload" => AbilityId::RockyPayload,
    "thickfat" => AbilityId::ThickFat,
    "heatproof" => AbilityId::Heatproof,
    "purifyingsalt" => AbilityId::PurifyingSalt,
    "marvelscale" => AbilityId::MarvelScale,
    "furcoat" => AbilityId::FurCoat,
    "technician" => AbilityId::Technician,
    "ironfist" => AbilityId::IronFist,
    "strongjaw" => AbilityId::StrongJaw,
    "megalauncher" => AbilityId::MegaLauncher,
    "sharpness" => AbilityId::Sharpness,
    "toughclaws" => AbilityId::ToughClaws,
    "reckless" => AbilityId::Reckless,
    "sheerforce" => AbilityId::SheerForce,
    "sandforce" => AbilityId::SandForce,
    "punkrock" => AbilityId::PunkRock,
    "dryskin" => AbilityId::DrySkin,
    "tintedlens" => AbilityId::TintedLens,
    "sniper" => AbilityId::Sniper,
    "neuroforce" => AbilityId::Neuroforce,
    "multiscale" => AbilityId::Multiscale,
    "shadowshield" => AbilityId::ShadowShield,
    "filter" => AbilityId::Filter,
    "solidrock" => AbilityId::SolidRock,
    "prismarmor" => AbilityId::PrismArmor,
    "fluffy" => AbilityId::Fluffy,
    "icescales" => AbilityId::IceScales,
    "swiftswim" => AbilityId::SwiftSwim,
    "chlorophyll" => AbilityId::Chlorophyll,
    "sandrush" => AbilityId::SandRush,
    "slushrush" => AbilityId::SlushRush,
    "quickfeet" => AbilityId::QuickFeet,
    "adaptability" => AbilityId::Adaptability,
    "scrappy" => AbilityId::Scrappy,
    "mindseye" => AbilityId::MindsEye,
    "skilllink" => AbilityId::SkillLink,
    "merciless" => AbilityId::Merciless,
    "superluck" => AbilityId::SuperLuck,
    "battlearmor" => AbilityId::BattleArmor,
    "shellarmor" => AbilityId::ShellArmor,
    "moldbreaker" => AbilityId::MoldBreaker,
    "teravolt" => AbilityId::Teravolt,
    "turboblaze" => AbilityId::Turboblaze,
    "unaware" => AbilityId::Unaware,
    "infiltrator" => AbilityId::Infiltrator,
    "klutz" => AbilityId::Klutz,
    "levitate" => AbilityId::Levitate,
    "flashfire" => AbilityId::FlashFire,
    "wellbakedbody" => AbilityId::WellBakedBody,
    "waterabsorb" => AbilityId::WaterAbsorb,
    "stormdrain" => AbilityId::StormDrain,
    "voltabsorb" => AbilityId::VoltAbsorb,
    "lightningrod" => AbilityId::LightningRod,
    "motordrive" => AbilityId::MotorDrive,
    "sapsipper" => AbilityId::SapSipper,
    "eartheater" => AbilityId::EarthEater,
    "wonderguard" => AbilityId::WonderGuard,
    "aerilate" => AbilityId::Aerilate,
    "pixilate" => AbilityId::Pixilate,
    "refrigerate" => AbilityId::Refrigerate,
    "galvanize" => AbilityId::Galvanize,
    "normalize" => AbilityId::Normalize,
    "noability" => AbilityId::NoAbility,
    "none" => AbilityId::NoAbility,
};

bitflags! {
    /// Ability behaviours that are not a multiplier on one value.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct AbilityTraits: u32 {
        /// STAB is 2x
        const ADAPTABILITY = 1 << 0;
        /// Burn does not halve physical damage
        const IGNORES_BURN = 1 << 1;
        /// Normal and Fighting moves hit Ghost
        const HITS_GHOST = 1 << 2;
        /// 2-5 hit moves always hit 5 times
        const MAX_HITS = 1 << 3;
        /// Always crits a poisoned target
        const CRIT_VS_POISONED = 1 << 4;
        /// +1 crit stage
        const CRIT_STAGE = 1 << 5;
        /// Holder cannot be crit
        const BLOCKS_CRITS = 1 << 6;
        /// Defender's ability is ignored
        const IGNORES_TARGET_ABILITY = 1 << 7;
        /// Opponent's boosts are ignored
        const UNAWARE = 1 << 8;
        /// Screens are ignored
        const IGNORES_SCREENS = 1 << 9;
        /// Holder's item has no effect
        const SUPPRESSES_ITEM = 1 << 10;
        /// Only super-effective moves connect
        const WONDER_GUARD = 1 << 11;
        /// Not grounded
        const LEVITATE = 1 << 12;
        /// Status does not cut speed
        const IGNORES_PARALYSIS_SPEED = 1 << 13;
    }
}

/// Everything the calculator knows about one ability.
#[derive(Clone, Copy, Debug)]
pub struct AbilityData {
    pub rules: &'static [Rule],
    pub traits: AbilityTraits,
    /// Moves of this type do nothing to the holder
    pub immune_to: Option<Type>,
    /// Normal moves become this type (and gain the -ate boost)
    pub ate: Option<Type>,
    /// Every move becomes Normal
    pub normalize: bool,
}

impl AbilityData {
    pub const NONE: Self = Self {
        rules: &[],
        traits: AbilityTraits::empty(),
        immune_to: None,
        ate: None,
        normalize: false,
    };

    pub const fn rules(rules: &'static [Rule]) -> Self {
        Self { rules, ..Self::NONE }
    }

    pub const fn traits(traits: AbilityTraits) -> Self {
        Self { traits, ..Self::NONE }
    }

    pub const fn immune(t: Type) -> Self {
        Self {
            immune_to: Some(t),
            ..Self::NONE
        }
    }

    pub const fn ate(t: Type) -> Self {
        Self { ate: Some(t), ..Self::NONE }
    }

    pub const fn has(&self, t: AbilityTraits) -> bool {
        self.traits.contains(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modifiers::Stage;

    #[test]
    fn test_lookup_by_display_name() {
        assert_eq!(AbilityId::from_str("Huge Power"), Some(AbilityId::HugePower));
        assert_eq!(AbilityId::from_str("dragon's maw"), Some(AbilityId::DragonsMaw));
        assert_eq!(AbilityId::from_str("Mind's Eye"), Some(AbilityId::MindsEye));
        assert_eq!(AbilityId::from_str("Definitely Not Real"), None);
    }

    #[test]
    fn test_every_id_has_a_lookup_entry() {
        assert_eq!(AbilityId::COUNT, ABILITY_IDS.len() - 1);
    }

    #[test]
    fn test_registry_entries() {
        let huge = AbilityId::HugePower.data();
        assert_eq!(huge.rules.len(), 1);
        assert_eq!(huge.rules[0].stage, Stage::Attack);
        assert!(AbilityId::Adaptability.data().has(AbilityTraits::ADAPTABILITY));
        assert_eq!(AbilityId::Levitate.data().immune_to, Some(Type::Ground));
        assert_eq!(AbilityId::Pixilate.data().ate, Some(Type::Fairy));
        assert!(AbilityId::Normalize.data().normalize);
        assert!(AbilityId::NoAbility.data().rules.is_empty());
    }
}
