//! Armour per hit location.
//!
//! ```text
//! value = max(non-additive ratings) + Σ additive ratings
//! total = toughness_bonus + value
//! ```
//!
//! Only equipped armour counts. Non-additive pieces do not stack with each
//! other: the single best rating at a location wins. Additive pieces (shields,
//! layered plates) are summed on top of that.

use thiserror::Error;

use crate::error::{ErrorSeverity, SheetError};
use crate::item::ItemSnapshot;

/// The six fixed hit locations.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum HitLocation {
    Head,
    LeftArm,
    RightArm,
    Body,
    LeftLeg,
    RightLeg,
}

impl HitLocation {
    pub const ALL: [Self; 6] = [
        Self::Head,
        Self::LeftArm,
        Self::RightArm,
        Self::Body,
        Self::LeftLeg,
        Self::RightLeg,
    ];

    /// Label key the host uses when reporting where a hit landed.
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Head => "ARMOUR.HEAD",
            Self::LeftArm => "ARMOUR.LEFT_ARM",
            Self::RightArm => "ARMOUR.RIGHT_ARM",
            Self::Body => "ARMOUR.BODY",
            Self::LeftLeg => "ARMOUR.LEFT_LEG",
            Self::RightLeg => "ARMOUR.RIGHT_LEG",
        }
    }

    /// Parses either a record key (`"leftArm"`) or a label key (`"ARMOUR.LEFT_ARM"`).
    pub fn parse_key(key: &str) -> Option<Self> {
        key.parse()
            .ok()
            .or_else(|| Self::ALL.into_iter().find(|l| l.label_key() == key))
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Armour at one location.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct ArmourLocation {
    pub toughness_bonus: i32,
    pub value: i32,
    pub total: i32,
}

impl ArmourLocation {
    const fn seeded(toughness_bonus: i32) -> Self {
        Self {
            toughness_bonus,
            value: 0,
            total: toughness_bonus,
        }
    }
}

/// Armour for all six hit locations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct ArmourProfile {
    pub head: ArmourLocation,
    pub left_arm: ArmourLocation,
    pub right_arm: ArmourLocation,
    pub body: ArmourLocation,
    pub left_leg: ArmourLocation,
    pub right_leg: ArmourLocation,
}

impl ArmourProfile {
    /// All six locations at zero, toughness bonus included.
    pub const fn zeroed() -> Self {
        Self::seeded(0)
    }

    /// All six locations carrying only the toughness bonus.
    pub const fn seeded(toughness_bonus: i32) -> Self {
        let location = ArmourLocation::seeded(toughness_bonus);
        Self {
            head: location,
            left_arm: location,
            right_arm: location,
            body: location,
            left_leg: location,
            right_leg: location,
        }
    }

    pub fn get(&self, location: HitLocation) -> &ArmourLocation {
        match location {
            HitLocation::Head => &self.head,
            HitLocation::LeftArm => &self.left_arm,
            HitLocation::RightArm => &self.right_arm,
            HitLocation::Body => &self.body,
            HitLocation::LeftLeg => &self.left_leg,
            HitLocation::RightLeg => &self.right_leg,
        }
    }

    pub fn get_mut(&mut self, location: HitLocation) -> &mut ArmourLocation {
        match location {
            HitLocation::Head => &mut self.head,
            HitLocation::LeftArm => &mut self.left_arm,
            HitLocation::RightArm => &mut self.right_arm,
            HitLocation::Body => &mut self.body,
            HitLocation::LeftLeg => &mut self.left_leg,
            HitLocation::RightLeg => &mut self.right_leg,
        }
    }

    /// Armour value (toughness excluded) at a location key; `0` for unknown keys.
    pub fn value_at(&self, key: &str) -> i32 {
        HitLocation::parse_key(key).map_or(0, |location| self.get(location).value)
    }
}

/// Errors raised while aggregating armour.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArmourError {
    #[error("armour value overflowed at {location}")]
    Overflow { location: HitLocation },
}

impl SheetError for ArmourError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Overflow { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Overflow { .. } => "ARMOUR_OVERFLOW",
        }
    }
}

/// Aggregates equipped armour over `locations`.
///
/// Locations outside `locations` keep `value = 0` and carry only the
/// toughness bonus. Ratings keyed by anything other than a hit location are
/// ignored. Callers that must never fail use [`derive_armour`].
pub fn aggregate_armour(
    items: &[ItemSnapshot],
    toughness_bonus: i32,
    locations: &[HitLocation],
) -> Result<ArmourProfile, ArmourError> {
    let mut best = [0i32; 6];
    let mut stacked = [0i32; 6];

    for item in items.iter().filter(|item| item.is_worn_armour()) {
        let ratings = item
            .armour
            .iter()
            .filter_map(|(key, &rating)| HitLocation::parse_key(key).map(|l| (l, rating)));
        for (location, rating) in ratings {
            let slot = location.index();
            if item.is_additive() {
                stacked[slot] = stacked[slot]
                    .checked_add(rating)
                    .ok_or(ArmourError::Overflow { location })?;
            } else {
                best[slot] = best[slot].max(rating);
            }
        }
    }

    let mut profile = ArmourProfile::seeded(toughness_bonus);
    for &location in locations {
        let slot = location.index();
        let value = best[slot]
            .checked_add(stacked[slot])
            .ok_or(ArmourError::Overflow { location })?;
        let entry = profile.get_mut(location);
        entry.value = value;
        entry.total = toughness_bonus
            .checked_add(value)
            .ok_or(ArmourError::Overflow { location })?;
    }

    Ok(profile)
}

/// Aggregates armour, substituting the all-zero profile on any failure.
///
/// The error is handed back so the caller can surface it; the profile is
/// always usable.
pub fn derive_armour(
    items: &[ItemSnapshot],
    toughness_bonus: i32,
    locations: &[HitLocation],
) -> (ArmourProfile, Option<ArmourError>) {
    match aggregate_armour(items, toughness_bonus, locations) {
        Ok(profile) => (profile, None),
        Err(error) => (ArmourProfile::zeroed(), Some(error)),
    }
}
