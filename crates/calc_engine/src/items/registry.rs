use crate::core_data::{MoveFlags, Type};
use crate::items::{ItemData, ItemId, ItemTraits};
use crate::modifiers::{Condition as C, Effect, ExclusiveGroup, Modifier, Rule, Stage};

const fn held(stage: Stage, when: C, m: Modifier) -> Rule {
    Rule::attacker(stage, when, Effect::Scaled(m)).exclusive(ExclusiveGroup::HeldItem)
}

const fn type_boost(t: Type) -> ItemData {
    ItemData {
        rules: &[],
        traits: ItemTraits::empty(),
        boosts_type: Some(t),
    }
}

// =========================================================================
// Rule tables
// =========================================================================

const CHOICE_BAND: &[Rule] = &[held(Stage::Attack, C::Physical, Modifier::ONE_POINT_FIVE)];
const CHOICE_SPECS: &[Rule] = &[held(Stage::Attack, C::Special, Modifier::ONE_POINT_FIVE)];
const CHOICE_SCARF: &[Rule] = &[held(Stage::Speed, C::Always, Modifier::ONE_POINT_FIVE)];
const LIFE_ORB: &[Rule] = &[Rule::attacker(Stage::Damage, C::Always, Effect::Scaled(Modifier::LIFE_ORB))];
const EXPERT_BELT: &[Rule] = &[Rule::attacker(Stage::Damage, C::SuperEffective, Effect::Scaled(Modifier::ONE_POINT_TWO))];
const MUSCLE_BAND: &[Rule] = &[held(Stage::BasePower, C::Physical, Modifier::ONE_POINT_ONE)];
const WISE_GLASSES: &[Rule] = &[held(Stage::BasePower, C::Special, Modifier::ONE_POINT_ONE)];
const PUNCHING_GLOVE: &[Rule] = &[held(Stage::BasePower, C::MoveFlag(MoveFlags::PUNCH), Modifier::ONE_POINT_ONE)];
const ASSAULT_VEST: &[Rule] = &[Rule::defender(Stage::Defense, C::Special, Effect::Scaled(Modifier::ONE_POINT_FIVE))];
const EVIOLITE: &[Rule] = &[Rule::defender(
    Stage::Defense,
    C::HolderNotFullyEvolved,
    Effect::Scaled(Modifier::ONE_POINT_FIVE),
)];
const LIGHT_BALL: &[Rule] = &[held(Stage::Attack, C::HolderSpecies(&["pikachu"]), Modifier::DOUBLE)];
const THICK_CLUB: &[Rule] = &[held(
    Stage::Attack,
    C::All(&[C::Physical, C::HolderSpecies(&["cubone", "marowak", "marowakalola"])]),
    Modifier::DOUBLE,
)];
const DEEP_SEA_TOOTH: &[Rule] = &[held(
    Stage::Attack,
    C::All(&[C::Special, C::HolderSpecies(&["clamperl"])]),
    Modifier::DOUBLE,
)];
const DEEP_SEA_SCALE: &[Rule] = &[Rule::defender(
    Stage::Defense,
    C::All(&[C::Special, C::HolderSpecies(&["clamperl"])]),
    Effect::Scaled(Modifier::DOUBLE),
)];
const METAL_POWDER: &[Rule] = &[Rule::defender(
    Stage::Defense,
    C::All(&[C::Physical, C::HolderSpecies(&["ditto"])]),
    Effect::Scaled(Modifier::DOUBLE),
)];
const IRON_BALL: &[Rule] = &[Rule::attacker(Stage::Speed, C::Always, Effect::ratio(1, 2))];

/// Resist berries halve super-effective damage of one type.
/// Chilan Berry halves any Normal hit.
macro_rules! berry {
    ($t:expr) => {
        &[Rule::defender(
            Stage::Damage,
            C::All(&[C::SuperEffective, C::MoveType($t)]),
            Effect::Scaled(Modifier::HALF),
        )]
    };
}

const CHILAN: &[Rule] = &[Rule::defender(Stage::Damage, C::MoveType(Type::Normal), Effect::Scaled(Modifier::HALF))];
const CHOPLE: &[Rule] = berry!(Type::Fighting);
const COBA: &[Rule] = berry!(Type::Flying);
const KEBIA: &[Rule] = berry!(Type::Poison);
const SHUCA: &[Rule] = berry!(Type::Ground);
const CHARTI: &[Rule] = berry!(Type::Rock);
const TANGA: &[Rule] = berry!(Type::Bug);
const KASIB: &[Rule] = berry!(Type::Ghost);
const BABIRI: &[Rule] = berry!(Type::Steel);
const OCCA: &[Rule] = berry!(Type::Fire);
const PASSHO: &[Rule] = berry!(Type::Water);
const RINDO: &[Rule] = berry!(Type::Grass);
const WACAN: &[Rule] = berry!(Type::Electric);
const PAYAPA: &[Rule] = berry!(Type::Psychic);
const YACHE: &[Rule] = berry!(Type::Ice);
const HABAN: &[Rule] = berry!(Type::Dragon);
const COLBUR: &[Rule] = berry!(Type::Dark);
const ROSELI: &[Rule] = berry!(Type::Fairy);

/// Per-item data, indexed by `ItemId as usize`.
pub static ITEM_REGISTRY: [ItemData; ItemId::COUNT] = {
    let mut registry = [ItemData::NONE; ItemId::COUNT];

    // =========================================================================
    // Stat items
    // =========================================================================
    registry[ItemId::ChoiceBand as usize] = ItemData::rules(CHOICE_BAND);
    registry[ItemId::ChoiceSpecs as usize] = ItemData::rules(CHOICE_SPECS);
    registry[ItemId::ChoiceScarf as usize] = ItemData::rules(CHOICE_SCARF);
    registry[ItemId::AssaultVest as usize] = ItemData::rules(ASSAULT_VEST);
    registry[ItemId::Eviolite as usize] = ItemData::rules(EVIOLITE);
    registry[ItemId::LightBall as usize] = ItemData::rules(LIGHT_BALL);
    registry[ItemId::ThickClub as usize] = ItemData::rules(THICK_CLUB);
    registry[ItemId::DeepSeaTooth as usize] = ItemData::rules(DEEP_SEA_TOOTH);
    registry[ItemId::DeepSeaScale as usize] = ItemData::rules(DEEP_SEA_SCALE);
    registry[ItemId::MetalPowder as usize] = ItemData::rules(METAL_POWDER);

    // =========================================================================
    // Power and damage
    // =========================================================================
    registry[ItemId::LifeOrb as usize] = ItemData::rules(LIFE_ORB);
    registry[ItemId::ExpertBelt as usize] = ItemData::rules(EXPERT_BELT);
    registry[ItemId::MuscleBand as usize] = ItemData::rules(MUSCLE_BAND);
    registry[ItemId::WiseGlasses as usize] = ItemData::rules(WISE_GLASSES);
    registry[ItemId::PunchingGlove as usize] = ItemData::rules(PUNCHING_GLOVE);

    // =========================================================================
    // Type boosters (rule built per generation, see `type_boost_rule`)
    // =========================================================================
    registry[ItemId::SilkScarf as usize] = type_boost(Type::Normal);
    registry[ItemId::BlackBelt as usize] = type_boost(Type::Fighting);
    registry[ItemId::SharpBeak as usize] = type_boost(Type::Flying);
    registry[ItemId::PoisonBarb as usize] = type_boost(Type::Poison);
    registry[ItemId::SoftSand as usize] = type_boost(Type::Ground);
    registry[ItemId::HardStone as usize] = type_boost(Type::Rock);
    registry[ItemId::SilverPowder as usize] = type_boost(Type::Bug);
    registry[ItemId::SpellTag as usize] = type_boost(Type::Ghost);
    registry[ItemId::MetalCoat as usize] = type_boost(Type::Steel);
    registry[ItemId::Charcoal as usize] = type_boost(Type::Fire);
    registry[ItemId::MysticWater as usize] = type_boost(Type::Water);
    registry[ItemId::MiracleSeed as usize] = type_boost(Type::Grass);
    registry[ItemId::Magnet as usize] = type_boost(Type::Electric);
    registry[ItemId::TwistedSpoon as usize] = type_boost(Type::Psychic);
    registry[ItemId::NeverMeltIce as usize] = type_boost(Type::Ice);
    registry[ItemId::DragonFang as usize] = type_boost(Type::Dragon);
    registry[ItemId::BlackGlasses as usize] = type_boost(Type::Dark);
    registry[ItemId::FairyFeather as usize] = type_boost(Type::Fairy);

    // =========================================================================
    // Resist berries
    // =========================================================================
    registry[ItemId::ChilanBerry as usize] = ItemData::rules(CHILAN);
    registry[ItemId::ChopleBerry as usize] = ItemData::rules(CHOPLE);
    registry[ItemId::CobaBerry as usize] = ItemData::rules(COBA);
    registry[ItemId::KebiaBerry as usize] = ItemData::rules(KEBIA);
    registry[ItemId::ShucaBerry as usize] = ItemData::rules(SHUCA);
    registry[ItemId::ChartiBerry as usize] = ItemData::rules(CHARTI);
    registry[ItemId::TangaBerry as usize] = ItemData::rules(TANGA);
    registry[ItemId::KasibBerry as usize] = ItemData::rules(KASIB);
    registry[ItemId::BabiriBerry as usize] = ItemData::rules(BABIRI);
    registry[ItemId::OccaBerry as usize] = ItemData::rules(OCCA);
    registry[ItemId::PasshoBerry as usize] = ItemData::rules(PASSHO);
    registry[ItemId::RindoBerry as usize] = ItemData::rules(RINDO);
    registry[ItemId::WacanBerry as usize] = ItemData::rules(WACAN);
    registry[ItemId::PayapaBerry as usize] = ItemData::rules(PAYAPA);
    registry[ItemId::YacheBerry as usize] = ItemData::rules(YACHE);
    registry[ItemId::HabanBerry as usize] = ItemData::rules(HABAN);
    registry[ItemId::ColburBerry as usize] = ItemData::rules(COLBUR);
    registry[ItemId::RoseliBerry as usize] = ItemData::rules(ROSELI);

    // =========================================================================
    // Behavioural
    // =========================================================================
    registry[ItemId::ScopeLens as usize] = ItemData::traits(ItemTraits::CRIT_STAGE);
    registry[ItemId::RazorClaw as usize] = ItemData::traits(ItemTraits::CRIT_STAGE);
    registry[ItemId::LoadedDice as usize] = ItemData::traits(ItemTraits::LOADED_DICE);
    registry[ItemId::RingTarget as usize] = ItemData::traits(ItemTraits::RING_TARGET);
    registry[ItemId::IronBall as usize] = ItemData {
        rules: IRON_BALL,
        traits: ItemTraits::GROUNDS,
        boosts_type: None,
    };
    registry[ItemId::AirBalloon as usize] = ItemData::traits(ItemTraits::LEVITATES);

    registry
};

/// Base power rule for a type-boosting item: 1.2x from Gen 4, 1.1x before.
pub fn type_boost_rule(t: Type, gen: u8) -> Rule {
    let m = if gen >= 4 { Modifier::ONE_POINT_TWO } else { Modifier::ONE_POINT_ONE };
    held(Stage::BasePower, C::MoveType(t), m)
}
