//! Encumbrance - carried weight against a strength + toughness capacity table.

use crate::item::ItemSnapshot;

/// Maximum carry weight (kg) indexed by `strength.bonus + toughness.bonus`.
pub const CARRY_WEIGHT_TABLE: [f64; 21] = [
    0.9, 2.25, 4.5, 9.0, 18.0, 27.0, 36.0, 45.0, 56.0, 67.0, 78.0, 90.0, 112.0, 225.0, 337.0,
    450.0, 675.0, 900.0, 1350.0, 1800.0, 2250.0,
];

/// Carried weight and capacity.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct Encumbrance {
    pub value: f64,
    pub max: f64,
}

impl Encumbrance {
    pub fn is_overloaded(&self) -> bool {
        self.value > self.max
    }

    pub(crate) fn compute(items: &[ItemSnapshot], strength_toughness_bonus: i32) -> Self {
        Self {
            value: items.iter().map(ItemSnapshot::carried_weight).sum(),
            max: carry_capacity(strength_toughness_bonus),
        }
    }
}

/// Capacity for a combined bonus. Any sum outside the table, negative sums
/// included, reads its last tier.
pub fn carry_capacity(strength_toughness_bonus: i32) -> f64 {
    usize::try_from(strength_toughness_bonus)
        .ok()
        .and_then(|tier| CARRY_WEIGHT_TABLE.get(tier).copied())
        .unwrap_or(CARRY_WEIGHT_TABLE[CARRY_WEIGHT_TABLE.len() - 1])
}
