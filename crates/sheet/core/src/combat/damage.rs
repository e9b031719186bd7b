//! Damage application against the wound track.

use crate::stats::{ArmourProfile, Wounds};

// ============================================================================
// Damage Event
// ============================================================================

/// One hit to resolve.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct DamageEvent {
    #[cfg_attr(
        feature = "serde",
        serde(deserialize_with = "crate::lenient::i32_or_zero")
    )]
    pub amount: i32,

    /// Hit-location label (`"ARMOUR.BODY"`) or field key (`"body"`).
    pub location: String,

    #[cfg_attr(
        feature = "serde",
        serde(deserialize_with = "crate::lenient::i32_or_zero")
    )]
    pub penetration: i32,

    /// Damage type letter, carried through to the log untouched.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub damage_type: String,

    /// Value rolled on the righteous fury die; `0` when none was rolled.
    #[cfg_attr(
        feature = "serde",
        serde(deserialize_with = "crate::lenient::i32_or_zero")
    )]
    pub righteous_fury: i32,
}

impl DamageEvent {
    pub fn new(amount: i32, location: &str) -> Self {
        Self {
            amount,
            location: location.to_owned(),
            ..Self::default()
        }
    }

    pub fn with_penetration(mut self, penetration: i32) -> Self {
        self.penetration = penetration;
        self
    }

    pub fn with_type(mut self, damage_type: &str) -> Self {
        self.damage_type = damage_type.to_owned();
        self
    }

    pub fn with_righteous_fury(mut self, roll: i32) -> Self {
        self.righteous_fury = roll;
        self
    }
}

// ============================================================================
// Damage Log
// ============================================================================

/// What a log entry was charged against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DamageSource {
    /// Ordinary wounds.
    #[strum(serialize = "Wounds")]
    #[cfg_attr(feature = "serde", serde(rename = "Wounds"))]
    Wounds,

    /// Critical wounds past the maximum.
    #[strum(serialize = "Critical")]
    #[cfg_attr(feature = "serde", serde(rename = "Critical"))]
    Critical,

    /// A critical-table effect from righteous fury; adds no wounds.
    #[strum(serialize = "Critical Effect (RF)")]
    #[cfg_attr(feature = "serde", serde(rename = "Critical Effect (RF)"))]
    RighteousFury,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct DamageLogEntry {
    pub damage: i32,
    pub source: DamageSource,
    pub location: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub damage_type: String,
}

impl DamageLogEntry {
    fn record(damage: i32, source: DamageSource, event: &DamageEvent) -> Self {
        Self {
            damage,
            source,
            location: event.location.clone(),
            damage_type: event.damage_type.clone(),
        }
    }
}

/// Updated wound track plus the ordered log of what happened.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct DamageOutcome {
    pub wounds: Wounds,
    pub log: Vec<DamageLogEntry>,
}

impl DamageOutcome {
    /// True if any entry went to critical wounds or the critical table.
    pub fn has_critical(&self) -> bool {
        self.log
            .iter()
            .any(|entry| entry.source != DamageSource::Wounds)
    }
}

// ============================================================================
// Damage Application
// ============================================================================

/// Resolves a batch of hits in order.
///
/// # Formula
///
/// ```text
/// armour    = max(armour_at(location) - penetration, 0)
/// to_add    = max(max(amount - toughness_bonus, 0) - armour, 0)
///
/// righteous fury:
///     to_add == 0  =>  to_add = 1
///     otherwise    =>  log a critical effect, wounds unchanged
/// ```
///
/// Wounds then accrue up to `max`; anything past it (or everything, once the
/// track is already at `max`) becomes critical wounds. A track stored above
/// `max` is pulled back to `max`. Unknown locations have no armour, and the
/// arithmetic saturates instead of overflowing.
pub fn apply_damage(
    wounds: &Wounds,
    toughness_bonus: i32,
    armour: &ArmourProfile,
    events: &[DamageEvent],
) -> DamageOutcome {
    let mut track = *wounds;
    let mut log = Vec::new();

    for event in events {
        let effective_armour = armour
            .value_at(&event.location)
            .saturating_sub(event.penetration)
            .max(0);
        let after_toughness = event.amount.saturating_sub(toughness_bonus).max(0);
        let mut to_add = after_toughness.saturating_sub(effective_armour).max(0);

        if event.righteous_fury != 0 {
            if to_add == 0 {
                to_add = 1;
            } else {
                log.push(DamageLogEntry::record(
                    event.righteous_fury,
                    DamageSource::RighteousFury,
                    event,
                ));
            }
        }

        if track.is_at_max() {
            track.value = track.max;
            track.critical = track.critical.saturating_add(to_add);
            log.push(DamageLogEntry::record(to_add, DamageSource::Critical, event));
        } else if track.value.saturating_add(to_add) > track.max {
            let filled = track.max.saturating_sub(track.value);
            let overflow = to_add - filled;
            track.value = track.max;
            track.critical = track.critical.saturating_add(overflow);
            log.push(DamageLogEntry::record(filled, DamageSource::Wounds, event));
            log.push(DamageLogEntry::record(overflow, DamageSource::Critical, event));
        } else {
            track.value += to_add;
            log.push(DamageLogEntry::record(to_add, DamageSource::Wounds, event));
        }
    }

    DamageOutcome { wounds: track, log }
}
