use crate::abilities::{AbilityData, AbilityId, AbilityTraits};
use crate::core_data::{MoveFlags, Type};
use crate::modifiers::{Condition as C, Effect, ExclusiveGroup, Modifier, Rule, Stage};

const fn atk(when: C, m: Modifier) -> Rule {
    Rule::attacker(Stage::Attack, when, Effect::Scaled(m)).exclusive(ExclusiveGroup::AttackerAbility)
}

const fn bp(when: C, m: Modifier) -> Rule {
    Rule::attacker(Stage::BasePower, when, Effect::Scaled(m)).exclusive(ExclusiveGroup::AttackerAbility)
}

const fn weakens(stage: Stage, when: C) -> Rule {
    Rule::defender(stage, when, Effect::Scaled(Modifier::HALF)).exclusive(ExclusiveGroup::DefenderAbility)
}

const fn speed(when: C, effect: Effect) -> Rule {
    Rule::attacker(Stage::Speed, when, effect)
}

// =========================================================================
// Rule tables
// =========================================================================

const POWER_DOUBLING: &[Rule] = &[atk(C::Physical, Modifier::DOUBLE)];
const PHYSICAL_BOOST: &[Rule] = &[atk(C::Physical, Modifier::ONE_POINT_FIVE)];
const GUTS: &[Rule] = &[atk(C::All(&[C::Physical, C::HolderStatused]), Modifier::ONE_POINT_FIVE)];
const SOLAR_POWER: &[Rule] = &[atk(C::All(&[C::Special, C::Sun]), Modifier::ONE_POINT_FIVE)];
const OVERGROW: &[Rule] = &[atk(C::All(&[C::HolderPinch, C::MoveType(Type::Grass)]), Modifier::ONE_POINT_FIVE)];
const BLAZE: &[Rule] = &[atk(C::All(&[C::HolderPinch, C::MoveType(Type::Fire)]), Modifier::ONE_POINT_FIVE)];
const TORRENT: &[Rule] = &[atk(C::All(&[C::HolderPinch, C::MoveType(Type::Water)]), Modifier::ONE_POINT_FIVE)];
const SWARM: &[Rule] = &[atk(C::All(&[C::HolderPinch, C::MoveType(Type::Bug)]), Modifier::ONE_POINT_FIVE)];
const WATER_BUBBLE: &[Rule] = &[
    atk(C::MoveType(Type::Water), Modifier::DOUBLE),
    weakens(Stage::Attack, C::MoveType(Type::Fire)),
];
const STEELWORKER: &[Rule] = &[atk(C::MoveType(Type::Steel), Modifier::ONE_POINT_FIVE)];
const TRANSISTOR: &[Rule] = &[atk(C::MoveType(Type::Electric), Modifier::ONE_POINT_THREE)];
const DRAGONS_MAW: &[Rule] = &[atk(C::MoveType(Type::Dragon), Modifier::ONE_POINT_FIVE)];
const ROCKY_PAYLOAD: &[Rule] = &[atk(C::MoveType(Type::Rock), Modifier::ONE_POINT_FIVE)];

const THICK_FAT: &[Rule] = &[weakens(Stage::Attack, C::MoveTypeIn(&[Type::Fire, Type::Ice]))];
const HEATPROOF: &[Rule] = &[weakens(Stage::Attack, C::MoveType(Type::Fire))];
const PURIFYING_SALT: &[Rule] = &[weakens(Stage::Attack, C::MoveType(Type::Ghost))];
const MARVEL_SCALE: &[Rule] = &[Rule::defender(
    Stage::Defense,
    C::All(&[C::Physical, C::HolderStatused]),
    Effect::Scaled(Modifier::ONE_POINT_FIVE),
)];
const FUR_COAT: &[Rule] = &[Rule::defender(Stage::Defense, C::Physical, Effect::ratio(2, 1))];

const TECHNICIAN: &[Rule] = &[bp(C::BasePowerAtMost(60), Modifier::ONE_POINT_FIVE)];
const IRON_FIST: &[Rule] = &[bp(C::MoveFlag(MoveFlags::PUNCH), Modifier::ONE_POINT_TWO)];
const STRONG_JAW: &[Rule] = &[bp(C::MoveFlag(MoveFlags::BITE), Modifier::ONE_POINT_FIVE)];
const MEGA_LAUNCHER: &[Rule] = &[bp(C::MoveFlag(MoveFlags::PULSE), Modifier::ONE_POINT_FIVE)];
const SHARPNESS: &[Rule] = &[bp(C::MoveFlag(MoveFlags::SLICING), Modifier::ONE_POINT_FIVE)];
const TOUGH_CLAWS: &[Rule] = &[bp(C::MoveFlag(MoveFlags::CONTACT), Modifier::ONE_POINT_THREE)];
const RECKLESS: &[Rule] = &[bp(C::MoveFlag(MoveFlags::RECOIL), Modifier::ONE_POINT_TWO)];
const SHEER_FORCE: &[Rule] = &[bp(C::MoveFlag(MoveFlags::SECONDARY), Modifier::ONE_POINT_THREE)];
const SAND_FORCE: &[Rule] = &[bp(
    C::All(&[C::Sand, C::MoveTypeIn(&[Type::Rock, Type::Ground, Type::Steel])]),
    Modifier::ONE_POINT_THREE,
)];
const PUNK_ROCK: &[Rule] = &[
    bp(C::MoveFlag(MoveFlags::SOUND), Modifier::ONE_POINT_THREE),
    Rule::defender(Stage::Damage, C::MoveFlag(MoveFlags::SOUND), Effect::Scaled(Modifier::HALF)),
];
const DRY_SKIN: &[Rule] = &[Rule::defender(
    Stage::BasePower,
    C::MoveType(Type::Fire),
    Effect::Scaled(Modifier::ONE_POINT_TWO_FIVE),
)];

const TINTED_LENS: &[Rule] = &[Rule::attacker(Stage::Damage, C::NotVeryEffective, Effect::Scaled(Modifier::DOUBLE))];
const SNIPER: &[Rule] = &[Rule::attacker(Stage::Damage, C::Critical, Effect::Scaled(Modifier::ONE_POINT_FIVE))];
const NEUROFORCE: &[Rule] = &[Rule::attacker(
    Stage::Damage,
    C::SuperEffective,
    Effect::Scaled(Modifier::ONE_POINT_TWO_FIVE),
)];
const MULTISCALE: &[Rule] = &[Rule::defender(Stage::Damage, C::HolderFullHp, Effect::Scaled(Modifier::HALF))];
const SOLID_ROCK: &[Rule] = &[Rule::defender(Stage::Damage, C::SuperEffective, Effect::Scaled(Modifier::THREE_QUARTERS))];
const FLUFFY: &[Rule] = &[
    Rule::defender(Stage::Damage, C::MoveFlag(MoveFlags::CONTACT), Effect::Scaled(Modifier::HALF)),
    Rule::defender(Stage::Damage, C::MoveType(Type::Fire), Effect::Scaled(Modifier::DOUBLE)),
];
const ICE_SCALES: &[Rule] = &[Rule::defender(Stage::Damage, C::Special, Effect::Scaled(Modifier::HALF))];

const SWIFT_SWIM: &[Rule] = &[speed(C::Rain, Effect::ratio(2, 1))];
const CHLOROPHYLL: &[Rule] = &[speed(C::Sun, Effect::ratio(2, 1))];
const SAND_RUSH: &[Rule] = &[speed(C::Sand, Effect::ratio(2, 1))];
const SLUSH_RUSH: &[Rule] = &[speed(C::Snow, Effect::ratio(2, 1))];
const QUICK_FEET: &[Rule] = &[speed(C::HolderStatused, Effect::Scaled(Modifier::ONE_POINT_FIVE))];

const MOLD_BREAKER: AbilityData = AbilityData::traits(AbilityTraits::IGNORES_TARGET_ABILITY);
const BLOCKS_CRITS: AbilityData = AbilityData::traits(AbilityTraits::BLOCKS_CRITS);
const SCRAPPY: AbilityData = AbilityData::traits(AbilityTraits::HITS_GHOST);

/// Per-ability data, indexed by `AbilityId as usize`.
pub static ABILITY_REGISTRY: [AbilityData; AbilityId::COUNT] = {
    let mut registry = [AbilityData::NONE; AbilityId::COUNT];

    // =========================================================================
    // Attack stat
    // =========================================================================
    registry[AbilityId::HugePower as usize] = AbilityData::rules(POWER_DOUBLING);
    registry[AbilityId::PurePower as usize] = AbilityData::rules(POWER_DOUBLING);
    registry[AbilityId::Hustle as usize] = AbilityData::rules(PHYSICAL_BOOST);
    registry[AbilityId::Guts as usize] = AbilityData {
        rules: GUTS,
        traits: AbilityTraits::IGNORES_BURN,
        ..AbilityData::NONE
    };
    registry[AbilityId::SolarPower as usize] = AbilityData::rules(SOLAR_POWER);
    registry[AbilityId::Overgrow as usize] = AbilityData::rules(OVERGROW);
    registry[AbilityId::Blaze as usize] = AbilityData::rules(BLAZE);
    registry[AbilityId::Torrent as usize] = AbilityData::rules(TORRENT);
    registry[AbilityId::Swarm as usize] = AbilityData::rules(SWARM);
    registry[AbilityId::GorillaTactics as usize] = AbilityData::rules(PHYSICAL_BOOST);
    registry[AbilityId::WaterBubble as usize] = AbilityData::rules(WATER_BUBBLE);
    registry[AbilityId::Steelworker as usize] = AbilityData::rules(STEELWORKER);
    registry[AbilityId::Transistor as usize] = AbilityData::rules(TRANSISTOR);
    registry[AbilityId::DragonsMaw as usize] = AbilityData::rules(DRAGONS_MAW);
    registry[AbilityId::RockyPayload as usize] = AbilityData::rules(ROCKY_PAYLOAD);

    // =========================================================================
    // Defender side: attack and defense stats
    // =========================================================================
    registry[AbilityId::ThickFat as usize] = AbilityData::rules(THICK_FAT);
    registry[AbilityId::Heatproof as usize] = AbilityData::rules(HEATPROOF);
    registry[AbilityId::PurifyingSalt as usize] = AbilityData::rules(PURIFYING_SALT);
    registry[AbilityId::MarvelScale as usize] = AbilityData::rules(MARVEL_SCALE);
    registry[AbilityId::FurCoat as usize] = AbilityData::rules(FUR_COAT);

    // =========================================================================
    // Base power
    // =========================================================================
    registry[AbilityId::Technician as usize] = AbilityData::rules(TECHNICIAN);
    registry[AbilityId::IronFist as usize] = AbilityData::rules(IRON_FIST);
    registry[AbilityId::StrongJaw as usize] = AbilityData::rules(STRONG_JAW);
    registry[AbilityId::MegaLauncher as usize] = AbilityData::rules(MEGA_LAUNCHER);
    registry[AbilityId::Sharpness as usize] = AbilityData::rules(SHARPNESS);
    registry[AbilityId::ToughClaws as usize] = AbilityData::rules(TOUGH_CLAWS);
    registry[AbilityId::Reckless as usize] = AbilityData::rules(RECKLESS);
    registry[AbilityId::SheerForce as usize] = AbilityData::rules(SHEER_FORCE);
    registry[AbilityId::SandForce as usize] = AbilityData::rules(SAND_FORCE);
    registry[AbilityId::PunkRock as usize] = AbilityData::rules(PUNK_ROCK);
    registry[AbilityId::DrySkin as usize] = AbilityData {
        rules: DRY_SKIN,
        immune_to: Some(Type::Water),
        ..AbilityData::NONE
    };

    // =========================================================================
    // Final damage
    // =========================================================================
    registry[AbilityId::TintedLens as usize] = AbilityData::rules(TINTED_LENS);
    registry[AbilityId::Sniper as usize] = AbilityData::rules(SNIPER);
    registry[AbilityId::Neuroforce as usize] = AbilityData::rules(NEUROFORCE);
    registry[AbilityId::Multiscale as usize] = AbilityData::rules(MULTISCALE);
    registry[AbilityId::ShadowShield as usize] = AbilityData::rules(MULTISCALE);
    registry[AbilityId::Filter as usize] = AbilityData::rules(SOLID_ROCK);
    registry[AbilityId::SolidRock as usize] = AbilityData::rules(SOLID_ROCK);
    registry[AbilityId::PrismArmor as usize] = AbilityData::rules(SOLID_ROCK);
    registry[AbilityId::Fluffy as usize] = AbilityData::rules(FLUFFY);
    registry[AbilityId::IceScales as usize] = AbilityData::rules(ICE_SCALES);

    // =========================================================================
    // Speed (final stat display)
    // =========================================================================
    registry[AbilityId::SwiftSwim as usize] = AbilityData::rules(SWIFT_SWIM);
    registry[AbilityId::Chlorophyll as usize] = AbilityData::rules(CHLOROPHYLL);
    registry[AbilityId::SandRush as usize] = AbilityData::rules(SAND_RUSH);
    registry[AbilityId::SlushRush as usize] = AbilityData::rules(SLUSH_RUSH);
    registry[AbilityId::QuickFeet as usize] = AbilityData {
        rules: QUICK_FEET,
        traits: AbilityTraits::IGNORES_PARALYSIS_SPEED,
        ..AbilityData::NONE
    };

    // =========================================================================
    // Behavioural
    // =========================================================================
    registry[AbilityId::Adaptability as usize] = AbilityData::traits(AbilityTraits::ADAPTABILITY);
    registry[AbilityId::Scrappy as usize] = SCRAPPY;
    registry[AbilityId::MindsEye as usize] = SCRAPPY;
    registry[AbilityId::SkillLink as usize] = AbilityData::traits(AbilityTraits::MAX_HITS);
    registry[AbilityId::Merciless as usize] = AbilityData::traits(AbilityTraits::CRIT_VS_POISONED);
    registry[AbilityId::SuperLuck as usize] = AbilityData::traits(AbilityTraits::CRIT_STAGE);
    registry[AbilityId::BattleArmor as usize] = BLOCKS_CRITS;
    registry[AbilityId::ShellArmor as usize] = BLOCKS_CRITS;
    registry[AbilityId::MoldBreaker as usize] = MOLD_BREAKER;
    registry[AbilityId::Teravolt as usize] = MOLD_BREAKER;
    registry[AbilityId::Turboblaze as usize] = MOLD_BREAKER;
    registry[AbilityId::Unaware as usize] = AbilityData::traits(AbilityTraits::UNAWARE);
    registry[AbilityId::Infiltrator as usize] = AbilityData::traits(AbilityTraits::IGNORES_SCREENS);
    registry[AbilityId::Klutz as usize] = AbilityData::traits(AbilityTraits::SUPPRESSES_ITEM);
    registry[AbilityId::WonderGuard as usize] = AbilityData::traits(AbilityTraits::WONDER_GUARD);

    // =========================================================================
    // Type immunities
    // =========================================================================
    registry[AbilityId::Levitate as usize] = AbilityData {
        traits: AbilityTraits::LEVITATE,
        immune_to: Some(Type::Ground),
        ..AbilityData::NONE
    };
    registry[AbilityId::FlashFire as usize] = AbilityData::immune(Type::Fire);
    registry[AbilityId::WellBakedBody as usize] = AbilityData::immune(Type::Fire);
    registry[AbilityId::WaterAbsorb as usize] = AbilityData::immune(Type::Water);
    registry[AbilityId::StormDrain as usize] = AbilityData::immune(Type::Water);
    registry[AbilityId::VoltAbsorb as usize] = AbilityData::immune(Type::Electric);
    registry[AbilityId::LightningRod as usize] = AbilityData::immune(Type::Electric);
    registry[AbilityId::MotorDrive as usize] = AbilityData::immune(Type::Electric);
    registry[AbilityId::SapSipper as usize] = AbilityData::immune(Type::Grass);
    registry[AbilityId::EarthEater as usize] = AbilityData::immune(Type::Ground);

    // =========================================================================
    // Type changers
    // =========================================================================
    registry[AbilityId::Aerilate as usize] = AbilityData::ate(Type::Flying);
    registry[AbilityId::Pixilate as usize] = AbilityData::ate(Type::Fairy);
    registry[AbilityId::Refrigerate as usize] = AbilityData::ate(Type::Ice);
    registry[AbilityId::Galvanize as usize] = AbilityData::ate(Type::Electric);
    registry[AbilityId::Normalize as usize] = AbilityData {
        normalize: true,
        ..AbilityData::NONE
    };

    registry
};
