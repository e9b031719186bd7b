//! Item snapshots read during a recompute pass.
//!
//! Items are owned by the host; the engine only reads the snapshot it is
//! handed. One item may carry several capabilities at once (an equipped,
//! additive armour piece, a talent that also weighs something), so the kind is
//! a flag set rather than an enum.

use std::collections::BTreeMap;

use bitflags::bitflags;

bitflags! {
    /// Capability tags of an item.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(
        feature = "serde",
        derive(serde::Serialize, serde::Deserialize),
        serde(transparent)
    )]
    pub struct ItemFlags: u8 {
        const ARMOUR        = 1 << 0;
        const ADDITIVE      = 1 << 1;
        const EQUIPPED      = 1 << 2;
        const TALENT        = 1 << 3;
        const PSYCHIC_POWER = 1 << 4;
        const APTITUDE      = 1 << 5;
    }
}

/// Read-only view of an owned item.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct ItemSnapshot {
    pub id: String,
    pub name: String,
    pub flags: ItemFlags,

    #[cfg_attr(
        feature = "serde",
        serde(deserialize_with = "crate::lenient::f64_or_zero")
    )]
    pub weight: f64,
    /// Stack size; `0` means a single unstacked item.
    #[cfg_attr(
        feature = "serde",
        serde(deserialize_with = "crate::lenient::u32_or_zero")
    )]
    pub quantity: u32,

    /// Armour rating per hit-location key (`"head"`, `"leftArm"`, ...).
    #[cfg_attr(
        feature = "serde",
        serde(deserialize_with = "crate::lenient::i32_map_or_zero")
    )]
    pub armour: BTreeMap<String, i32>,

    /// Stored XP cost (talents, psychic powers).
    #[cfg_attr(
        feature = "serde",
        serde(deserialize_with = "crate::lenient::i32_or_zero")
    )]
    pub cost: i32,

    /// Talent tier (1–3).
    #[cfg_attr(
        feature = "serde",
        serde(deserialize_with = "crate::lenient::i32_or_zero")
    )]
    pub tier: i32,
    pub aptitudes: Vec<String>,
    pub starter: bool,
}

impl ItemSnapshot {
    pub fn new(id: &str, name: &str, flags: ItemFlags) -> Self {
        Self {
            id: id.to_owned(),
            name: name.to_owned(),
            flags,
            ..Self::default()
        }
    }

    /// An equipped armour piece with the given per-location ratings.
    pub fn armour(id: &str, additive: bool, ratings: &[(&str, i32)]) -> Self {
        let mut flags = ItemFlags::ARMOUR | ItemFlags::EQUIPPED;
        flags.set(ItemFlags::ADDITIVE, additive);
        Self {
            armour: ratings
                .iter()
                .map(|(location, rating)| ((*location).to_owned(), *rating))
                .collect(),
            ..Self::new(id, id, flags)
        }
    }

    /// An aptitude the actor possesses.
    pub fn aptitude(name: &str) -> Self {
        Self::new(name, name, ItemFlags::APTITUDE)
    }

    /// A talent of `tier` with its aptitude list.
    pub fn talent(id: &str, tier: i32, aptitudes: &[&str]) -> Self {
        Self {
            tier,
            aptitudes: aptitudes.iter().map(|a| (*a).to_owned()).collect(),
            ..Self::new(id, id, ItemFlags::TALENT)
        }
    }

    /// A psychic power with a stored cost.
    pub fn psychic_power(id: &str, cost: i32) -> Self {
        Self {
            cost,
            ..Self::new(id, id, ItemFlags::PSYCHIC_POWER)
        }
    }

    pub fn with_weight(mut self, weight: f64, quantity: u32) -> Self {
        self.weight = weight;
        self.quantity = quantity;
        self
    }

    pub fn with_cost(mut self, cost: i32) -> Self {
        self.cost = cost;
        self
    }

    pub fn as_starter(mut self) -> Self {
        self.starter = true;
        self
    }

    pub fn is_worn_armour(&self) -> bool {
        self.flags.contains(ItemFlags::ARMOUR | ItemFlags::EQUIPPED)
    }

    pub fn is_additive(&self) -> bool {
        self.flags.contains(ItemFlags::ADDITIVE)
    }

    pub fn is_talent(&self) -> bool {
        self.flags.contains(ItemFlags::TALENT)
    }

    pub fn is_psychic_power(&self) -> bool {
        self.flags.contains(ItemFlags::PSYCHIC_POWER)
    }

    pub fn is_aptitude(&self) -> bool {
        self.flags.contains(ItemFlags::APTITUDE)
    }

    /// Carried weight: `weight × quantity`, or the bare weight when unstacked.
    pub fn carried_weight(&self) -> f64 {
        if self.quantity == 0 {
            self.weight
        } else {
            self.weight * f64::from(self.quantity)
        }
    }
}
