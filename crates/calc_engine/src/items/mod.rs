//! Held items: identifiers, declarative modifier rules and item traits.

pub mod registry;

pub use registry::ITEM_REGISTRY;

use crate::core_data::{to_id, Type};
use crate::modifiers::Rule;
use bitflags::bitflags;
use phf::phf_map;

/// Item identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum ItemId {
    ChoiceBand,
    ChoiceSpecs,
    ChoiceScarf,
    LifeOrb,
    ExpertBelt,
    MuscleBand,
    WiseGlasses,
    PunchingGlove,
    AssaultVest,
    Eviolite,
    LightBall,
    ThickClub,
    DeepSeaTooth,
    DeepSeaScale,
    MetalPowder,
    // Type boosters
    SilkScarf,
    BlackBelt,
    SharpBeak,
    PoisonBarb,
    SoftSand,
    HardStone,
    SilverPowder,
    SpellTag,
    MetalCoat,
    Charcoal,
    MysticWater,
    MiracleSeed,
    Magnet,
    TwistedSpoon,
    NeverMeltIce,
    DragonFang,
    BlackGlasses,
    FairyFeather,
    // Resist berries
    ChilanBerry,
    ChopleBerry,
    CobaBerry,
    KebiaBerry,
    ShucaBerry,
    ChartiBerry,
    TangaBerry,
    KasibBerry,
    BabiriBerry,
    OccaBerry,
    PasshoBerry,
    RindoBerry,
    WacanBerry,
    PayapaBerry,
    YacheBerry,
    HabanBerry,
    ColburBerry,
    RoseliBerry,
    // Behavioural
    ScopeLens,
    RazorClaw,
    LoadedDice,
    RingTarget,
    IronBall,
    AirBalloon,
    NoItem,
}

impl ItemId {
    pub const COUNT: usize = ItemId::NoItem as usize + 1;

    /// Look up an item by display name or id.
    pub fn from_str(s: &str) -> Option<Self> {
        ITEM_IDS.get(to_id(s).as_str()).copied()
    }

    pub fn data(self) -> &'static ItemData {
        &ITEM_REGISTRY[self as usize]
    }
}

static ITEM_IDS: phf::Map<&'static str, ItemId> = phf_map! {
    "choiceband" => ItemId::ChoiceBand,
    "choicespecs" => ItemId::ChoiceSpecs,
    "choicescarf" => ItemId::ChoiceScarf,
    "lifeorb" => ItemId::LifeOrb,
    "expertbelt" => ItemId::ExpertBelt,
    "muscleband" => ItemId::MuscleBand,
    "wiseglasses" => ItemId::WiseGlasses,
    "punchingglove" => ItemId::PunchingGlove,
    "assaultvest" => ItemId::AssaultVest,
    "eviolite" => ItemId::Eviolite,
    "lightball" => ItemId::LightBall,
    "thickclub" => ItemId::ThickClub,
    "deepseatooth" => ItemId::DeepSeaTooth,
    "deepseascale" => ItemId::DeepSeaScale,
    "metalpowder" => ItemId::MetalPowder,
    "silkscarf" => ItemId::SilkScarf,
    "blackbelt" => ItemId::BlackBelt,
    "sharpbeak" => ItemId::SharpBeak,
    "poisonbarb" => ItemId::PoisonBarb,
    "softsand" => ItemId::SoftSand,
    "hardstone" => ItemId::HardStone,
    "silverpowder" => ItemId::SilverPowder,
    "spelltag" => ItemId::SpellTag,
    "metalcoat" => ItemId::MetalCoat,
    "charcoal" => ItemId::Charcoal,
    "mysticwater" => ItemId::MysticWater,
    "miracleseed" => ItemId::MiracleSeed,
    "magnet" => ItemId::Magnet,
    "twistedspoon" => ItemId::TwistedSpoon,
    "nevermeltice" => ItemId::NeverMeltIce,
    "dragonfang" => ItemId::DragonFang,
    "blackglasses" => ItemId::BlackGlasses,
    "fairyfeather" => ItemId::FairyFeather,
    "chilanberry" => ItemId::ChilanBerry,
    "chopleberry" => ItemId::ChopleBerry,
    "cobaberry" => ItemId::CobaBerry,
    "kebiaberry" => ItemId::KebiaBerry,
    "shucaberry" => ItemId::ShucaBerry,
    "chartiberry" => ItemId::ChartiBerry,
    "tangaberry" => ItemId::TangaBerry,
    "kasibberry" => ItemId::KasibBerry,
    "babiriberry" => ItemId::BabiriBerry,
    "occaberry" => ItemId::OccaBerry,
    "passhoberry" => ItemId::PasshoBerry,
    "rindoberry" => ItemId::RindoBerry,
    "wacanberry" => ItemId::WacanBerry,
    "payapaberry" => ItemId::PayapaBerry,
    "yacheberry" => ItemId::YacheBerry,
    "habanberry" => ItemId::HabanBerry,
    "colburberry" => ItemId::ColburBerry,
    "roseliberry" => ItemId::RoseliBerry,
    "scopelens" => ItemId::ScopeLens,
    "razorclaw" => ItemId::RazorClaw,
    "loadeddice" => ItemId::LoadedDice,
    "ringtarget" => ItemId::RingTarget,
    "ironball" => ItemId::IronBall,
    "airballoon" => ItemId::AirBalloon,
    "noitem" => ItemId::NoItem,
    "none" => ItemId::NoItem,
};

bitflags! {
    /// Item behaviours that are not a multiplier on one value.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct ItemTraits: u32 {
        /// +1 crit stage
        const CRIT_STAGE = 1 << 0;
        /// 2-5 hit moves hit 4 or 5 times
        const LOADED_DICE = 1 << 1;
        /// Holder loses its type immunities
        const RING_TARGET = 1 << 2;
        /// Holder is grounded
        const GROUNDS = 1 << 3;
        /// Holder is not grounded
        const LEVITATES = 1 << 4;
    }
}

/// Everything the calculator knows about one item.
#[derive(Clone, Copy, Debug)]
pub struct ItemData {
    pub rules: &'static [Rule],
    pub traits: ItemTraits,
    /// Type boosted by a type-boosting item (used by Hidden Power checks
    /// and result breakdowns)
    pub boosts_type: Option<Type>,
}

impl ItemData {
    pub const NONE: Self = Self {
        rules: &[],
        traits: ItemTraits::empty(),
        boosts_type: None,
    };

    pub const fn rules(rules: &'static [Rule]) -> Self {
        Self { rules, ..Self::NONE }
    }

    pub const fn traits(traits: ItemTraits) -> Self {
        Self { traits, ..Self::NONE }
    }

    pub const fn has(&self, t: ItemTraits) -> bool {
        self.traits.contains(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modifiers::Stage;

    #[test]
    fn test_lookup_by_display_name() {
        assert_eq!(ItemId::from_str("Choice Band"), Some(ItemId::ChoiceBand));
        assert_eq!(ItemId::from_str("Never-Melt Ice"), Some(ItemId::NeverMeltIce));
        assert_eq!(ItemId::from_str("leftovers"), None);
    }

    #[test]
    fn test_every_id_has_a_lookup_entry() {
        assert_eq!(ItemId::COUNT, ITEM_IDS.len() - 1);
    }

    #[test]
    fn test_registry_entries() {
        let band = ItemId::ChoiceBand.data();
        assert_eq!(band.rules[0].stage, Stage::Attack);
        assert_eq!(ItemId::Charcoal.data().boosts_type, Some(Type::Fire));
        assert!(ItemId::ScopeLens.data().has(ItemTraits::CRIT_STAGE));
        assert!(ItemId::AirBalloon.data().has(ItemTraits::LEVITATES));
        assert!(ItemId::NoItem.data().rules.is_empty());
    }
}
