//! Wounds, fatigue, psy rating and initiative records.

use super::characteristic::{CharacteristicKind, CharacteristicSet};

/// Wound track. Overflow past `max` is recorded as critical wounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct Wounds {
    pub value: i32,
    pub critical: i32,
    pub max: i32,
}

impl Wounds {
    pub const fn new(value: i32, critical: i32, max: i32) -> Self {
        Self {
            value,
            critical,
            max,
        }
    }

    /// True once ordinary wounds have reached (or been pushed past) the maximum.
    pub const fn is_at_max(&self) -> bool {
        self.value >= self.max
    }
}

/// Fatigue level and the threshold derived from toughness and willpower.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct Fatigue {
    pub value: i32,
    /// Derived.
    pub max: i32,
}

impl Fatigue {
    pub const fn new(value: i32) -> Self {
        Self { value, max: 0 }
    }
}

/// Psychic rating.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct Psy {
    pub rating: i32,
    pub sustained: i32,

    /// Derived: `rating - sustained`.
    pub current_rating: i32,

    /// XP spent on the rating. Written in automatic mode, read in manual mode.
    #[cfg_attr(
        feature = "serde",
        serde(deserialize_with = "crate::lenient::i32_or_zero")
    )]
    pub cost: i32,
}

impl Psy {
    pub const fn new(rating: i32) -> Self {
        Self {
            rating,
            sustained: 0,
            current_rating: 0,
            cost: 0,
        }
    }

    pub(crate) fn derive(&mut self) {
        self.current_rating = self.rating.saturating_sub(self.sustained);
    }
}

/// Initiative bonus, taken from a configurable characteristic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct Initiative {
    pub characteristic: CharacteristicKind,
    /// Derived.
    pub bonus: i32,
}

impl Initiative {
    pub(crate) fn derive(&mut self, characteristics: &CharacteristicSet) {
        self.bonus = characteristics.bonus(self.characteristic);
    }
}

impl Default for Initiative {
    fn default() -> Self {
        Self {
            characteristic: CharacteristicKind::Agility,
            bonus: 0,
        }
    }
}
