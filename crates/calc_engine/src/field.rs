//! Field state: weather, terrain and per-side conditions.
//!
//! Supplied fresh per computation; the engine only reads it.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Weather conditions
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    #[default]
    None,
    Sun,
    Rain,
    Sand,
    Hail,
    /// Gen 9 replaced Hail with Snow
    Snow,
    /// Primal Groudon
    HarshSun,
    /// Primal Kyogre
    HeavyRain,
    /// Mega Rayquaza
    StrongWinds,
}

impl Weather {
    pub fn from_str(s: &str) -> Option<Self> {
        match crate::core_data::to_id(s).as_str() {
            "" | "none" => Some(Weather::None),
            "sun" | "sunnyday" => Some(Weather::Sun),
            "rain" | "raindance" => Some(Weather::Rain),
            "sand" | "sandstorm" => Some(Weather::Sand),
            "hail" => Some(Weather::Hail),
            "snow" => Some(Weather::Snow),
            "harshsun" | "desolateland" => Some(Weather::HarshSun),
            "heavyrain" | "primordialsea" => Some(Weather::HeavyRain),
            "strongwinds" | "deltastream" => Some(Weather::StrongWinds),
            _ => None,
        }
    }

    pub const fn is_sun(self) -> bool {
        matches!(self, Weather::Sun | Weather::HarshSun)
    }

    pub const fn is_rain(self) -> bool {
        matches!(self, Weather::Rain | Weather::HeavyRain)
    }
}

/// Terrain types
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Terrain {
    #[default]
    None,
    Electric,
    Grassy,
    Psychic,
    Misty,
}

impl Terrain {
    pub fn from_str(s: &str) -> Option<Self> {
        match crate::core_data::to_id(s).as_str() {
            "" | "none" => Some(Terrain::None),
            "electric" | "electricterrain" => Some(Terrain::Electric),
            "grassy" | "grassyterrain" => Some(Terrain::Grassy),
            "psychic" | "psychicterrain" => Some(Terrain::Psychic),
            "misty" | "mistyterrain" => Some(Terrain::Misty),
            _ => None,
        }
    }
}

bitflags! {
    /// Side conditions (team-wide effects like hazards and screens)
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct SideConditions: u32 {
        // Entry hazards
        const STEALTH_ROCK  = 1 << 0;
        const SPIKES_1      = 1 << 1;
        const SPIKES_2      = 1 << 2;
        const SPIKES_3      = 1 << 3;

        // Screens
        const REFLECT       = 1 << 7;
        const LIGHT_SCREEN  = 1 << 8;
        const AURORA_VEIL   = 1 << 9;

        // Other
        const TAILWIND      = 1 << 10;
        const FRIEND_GUARD  = 1 << 11;
    }
}

impl SideConditions {
    /// Number of Spikes layers (0-3).
    pub fn spikes_layers(self) -> u8 {
        if self.contains(SideConditions::SPIKES_3) {
            3
        } else if self.contains(SideConditions::SPIKES_2) {
            2
        } else if self.contains(SideConditions::SPIKES_1) {
            1
        } else {
            0
        }
    }
}

/// Conditions on one side of the field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideState {
    #[serde(default)]
    pub conditions: SideConditions,
}

impl SideState {
    /// Whether a screen blocks the given category on this side.
    pub fn has_screen(&self, physical: bool) -> bool {
        if self.conditions.contains(SideConditions::AURORA_VEIL) {
            return true;
        }
        if physical {
            self.conditions.contains(SideConditions::REFLECT)
        } else {
            self.conditions.contains(SideConditions::LIGHT_SCREEN)
        }
    }
}

/// Which side a creature fights on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SideId {
    #[default]
    P1,
    P2,
}

impl SideId {
    pub const fn opponent(self) -> SideId {
        match self {
            SideId::P1 => SideId::P2,
            SideId::P2 => SideId::P1,
        }
    }
}

/// Global battle field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldState {
    #[serde(default)]
    pub weather: Weather,
    #[serde(default)]
    pub terrain: Terrain,
    #[serde(default)]
    pub sides: [SideState; 2],
    #[serde(default)]
    pub gravity: bool,
    #[serde(default)]
    pub doubles: bool,
    #[serde(default)]
    pub turn: u16,
}

impl FieldState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn side(&self, side: SideId) -> &SideState {
        match side {
            SideId::P1 => &self.sides[0],
            SideId::P2 => &self.sides[1],
        }
    }

    pub fn side_mut(&mut self, side: SideId) -> &mut SideState {
        match side {
            SideId::P1 => &mut self.sides[0],
            SideId::P2 => &mut self.sides[1],
        }
    }

    /// Builder: set weather
    pub fn with_weather(mut self, weather: Weather) -> Self {
        self.weather = weather;
        self
    }

    /// Builder: set terrain
    pub fn with_terrain(mut self, terrain: Terrain) -> Self {
        self.terrain = terrain;
        self
    }

    /// Builder: add side conditions
    pub fn with_side_conditions(mut self, side: SideId, conditions: SideConditions) -> Self {
        self.side_mut(side).conditions |= conditions;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_parse() {
        assert_eq!(Weather::from_str("Sunny Day"), Some(Weather::Sun));
        assert_eq!(Weather::from_str("Rain"), Some(Weather::Rain));
        assert_eq!(Weather::from_str("fog"), None);
    }

    #[test]
    fn test_screens() {
        let field = FieldState::new().with_side_conditions(SideId::P2, SideConditions::REFLECT);
        assert!(field.side(SideId::P2).has_screen(true));
        assert!(!field.side(SideId::P2).has_screen(false));
        assert!(!field.side(SideId::P1).has_screen(true));

        let veil = SideState {
            conditions: SideConditions::AURORA_VEIL,
        };
        assert!(veil.has_screen(false));
    }

    #[test]
    fn test_spikes_layers() {
        assert_eq!(SideConditions::empty().spikes_layers(), 0);
        assert_eq!((SideConditions::SPIKES_1 | SideConditions::SPIKES_2).spikes_layers(), 2);
    }
}
