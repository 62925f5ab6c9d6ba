//! Ordered modifier pipeline.
//!
//! Every contextual adjustment (boost stage, ability, item, field, status,
//! critical hit, roll) is a [`ModifierEntry`]. [`apply`] reduces a base value
//! over the entries in a fixed phase order, flooring after each step:
//!
//! ```text
//! StageBoost → Ability → Item → Field → Status            (stat / power stages)
//! Stab → Effectiveness → Burn → Weather → Terrain → Screen → Critical
//!      → FinalAbility → FinalItem → Random                 (damage stage)
//! ```
//!
//! Factors are applied one at a time; they are never pre-multiplied, since
//! chained truncation is observable in edge-case damage values.

mod held;
mod modifier;
pub mod rules;

pub use held::HeldEffects;
pub use modifier::Modifier;
pub use rules::{Condition, Holder, HolderFacts, Rule, RuleContext, Stage};

use crate::damage::formula::{of32, pokeround};
use serde::{Deserialize, Serialize};

/// Application phase. Declaration order is application order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    StageBoost,
    Ability,
    Item,
    Field,
    Status,
    Stab,
    Effectiveness,
    Burn,
    Weather,
    Terrain,
    Screen,
    Critical,
    FinalAbility,
    FinalItem,
    Random,
}

/// How an entry changes the running value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    /// `floor(value * num / den)`
    Ratio { num: u32, den: u32 },
    /// `pokeround(value * m / 4096)` (0.5 rounds down)
    Scaled(Modifier),
    /// `max(0, value + n)`
    Add(i32),
    /// Replace the value outright
    Set(u32),
}

impl Effect {
    pub const fn ratio(num: u32, den: u32) -> Self {
        Effect::Ratio { num, den }
    }

    #[inline]
    pub fn apply(self, value: u32) -> u32 {
        match self {
            Effect::Ratio { num, den } => {
                if den == 0 {
                    return value;
                }
                (of32(value as u64 * num as u64) as u64 / den as u64) as u32
            }
            Effect::Scaled(m) => {
                if m.is_one() {
                    value
                } else {
                    pokeround(of32(value as u64 * m.val() as u64), 4096)
                }
            }
            Effect::Add(n) => (value as i64 + n as i64).max(0) as u32,
            Effect::Set(v) => v,
        }
    }
}

/// Groups whose members replace rather than compound each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusiveGroup {
    /// One attacker ability boost per stage
    AttackerAbility,
    /// One defender ability reduction per stage
    DefenderAbility,
    /// Choice items, type-boosting items, plates
    HeldItem,
    Screen,
    Weather,
    Terrain,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stacking {
    #[default]
    Compound,
    Exclusive(ExclusiveGroup),
}

/// One declarative modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ModifierEntry {
    pub phase: Phase,
    pub effect: Effect,
    pub stacking: Stacking,
    /// What produced the entry, for tracing and result breakdowns
    pub source: &'static str,
}

impl ModifierEntry {
    pub const fn new(phase: Phase, effect: Effect, source: &'static str) -> Self {
        Self {
            phase,
            effect,
            stacking: Stacking::Compound,
            source,
        }
    }

    pub const fn exclusive(mut self, group: ExclusiveGroup) -> Self {
        self.stacking = Stacking::Exclusive(group);
        self
    }
}

/// Entries that survive exclusive-group resolution, in application order.
pub fn resolve(entries: &[ModifierEntry]) -> Vec<ModifierEntry> {
    let mut ordered: Vec<ModifierEntry> = entries.to_vec();
    // Stable: insertion order breaks ties within a phase.
    ordered.sort_by_key(|e| e.phase);

    let mut claimed: Vec<ExclusiveGroup> = Vec::new();
    ordered.retain(|entry| match entry.stacking {
        Stacking::Compound => true,
        Stacking::Exclusive(group) => {
            if claimed.contains(&group) {
                log::debug!("modifier {} dropped: {:?} already applied", entry.source, group);
                false
            } else {
                claimed.push(group);
                true
            }
        }
    });
    ordered
}

/// Reduce `base` over `entries` in phase order, flooring after each step.
pub fn apply(base: u32, entries: &[ModifierEntry]) -> u32 {
    resolve(entries).iter().fold(base, |value, entry| {
        let next = entry.effect.apply(value);
        log::trace!("{:?} {}: {} -> {}", entry.phase, entry.source, value, next);
        next
    })
}

/// Builder collecting entries for one value.
#[derive(Clone, Debug, Default)]
pub struct ModifierChain {
    entries: Vec<ModifierEntry>,
}

impl ModifierChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: ModifierEntry) -> &mut Self {
        self.entries.push(entry);
        self
    }

    pub fn extend(&mut self, entries: impl IntoIterator<Item = ModifierEntry>) -> &mut Self {
        self.entries.extend(entries);
        self
    }

    pub fn entries(&self) -> &[ModifierEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn apply(&self, base: u32) -> u32 {
        apply(base, &self.entries)
    }

    /// True when a surviving entry forces the value to zero.
    pub fn is_nullified(&self) -> bool {
        resolve(&self.entries).iter().any(|e| e.effect == Effect::Set(0))
    }
}
