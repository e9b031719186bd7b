//! Characteristics - the base attributes every other layer reads.
//!
//! ```text
//! total = base + advance
//! bonus = floor(total / 10) + unnatural
//! ```
//!
//! When the actor's fatigue exceeds a characteristic's un-penalised bonus the
//! characteristic is impaired for this pass: its total is halved (rounded up)
//! and the bonus recomputed from the halved total. The check runs exactly
//! once; a halved bonus never triggers a second halving.

use std::collections::BTreeMap;

use strum::IntoEnumIterator;

use super::vitals::Fatigue;

/// The nine characteristics of a sheet, in canonical sheet order.
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
pub enum CharacteristicKind {
    WeaponSkill,
    BallisticSkill,
    Strength,
    Toughness,
    Agility,
    Intelligence,
    Perception,
    Willpower,
    Fellowship,
}

impl CharacteristicKind {
    /// Short code used by skills and roll formulas to reference this characteristic.
    pub const fn short_code(self) -> &'static str {
        match self {
            Self::WeaponSkill => "WS",
            Self::BallisticSkill => "BS",
            Self::Strength => "S",
            Self::Toughness => "T",
            Self::Agility => "Ag",
            Self::Intelligence => "Int",
            Self::Perception => "Per",
            Self::Willpower => "WP",
            Self::Fellowship => "Fel",
        }
    }

    /// Aptitudes that discount advancing this characteristic.
    pub const fn default_aptitudes(self) -> [&'static str; 2] {
        match self {
            Self::WeaponSkill => ["Weapon Skill", "Offence"],
            Self::BallisticSkill => ["Ballistic Skill", "Finesse"],
            Self::Strength => ["Strength", "Offence"],
            Self::Toughness => ["Toughness", "Defence"],
            Self::Agility => ["Agility", "Finesse"],
            Self::Intelligence => ["Intelligence", "Knowledge"],
            Self::Perception => ["Perception", "Fieldcraft"],
            Self::Willpower => ["Willpower", "Psyker"],
            Self::Fellowship => ["Fellowship", "Social"],
        }
    }

    /// Looks up a kind by its short code (exact match).
    pub fn from_short(code: &str) -> Option<Self> {
        Self::iter().find(|kind| kind.short_code() == code)
    }
}

/// Advance level of a characteristic, labelled by its tier letter.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharacteristicAdvance {
    #[default]
    #[strum(serialize = "N")]
    #[cfg_attr(feature = "serde", serde(rename = "N"))]
    Unadvanced,
    #[strum(serialize = "S")]
    #[cfg_attr(feature = "serde", serde(rename = "S"))]
    Simple,
    #[strum(serialize = "I")]
    #[cfg_attr(feature = "serde", serde(rename = "I"))]
    Intermediate,
    #[strum(serialize = "T")]
    #[cfg_attr(feature = "serde", serde(rename = "T"))]
    Trained,
    #[strum(serialize = "P")]
    #[cfg_attr(feature = "serde", serde(rename = "P"))]
    Proficient,
    #[strum(serialize = "E")]
    #[cfg_attr(feature = "serde", serde(rename = "E"))]
    Expert,
}

impl CharacteristicAdvance {
    /// Label for an advance value. Values off the 5-point grid read as unadvanced.
    pub const fn from_advance(advance: i32) -> Self {
        match advance {
            5 => Self::Simple,
            10 => Self::Intermediate,
            15 => Self::Trained,
            20 => Self::Proficient,
            25 => Self::Expert,
            _ => Self::Unadvanced,
        }
    }
}

/// A single characteristic record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct Characteristic {
    pub base: i32,
    pub advance: i32,
    pub unnatural: i32,

    /// Derived: `base + advance`, halved when impaired by fatigue.
    pub total: i32,

    /// Derived: `floor(total / 10) + unnatural`.
    pub bonus: i32,

    /// Derived: sheet column placement.
    pub is_left: bool,
    pub is_right: bool,

    /// Derived: tier letter for the current advance.
    #[cfg_attr(feature = "serde", serde(rename = "advanceCharacteristic"))]
    pub advance_label: CharacteristicAdvance,

    pub aptitudes: Vec<String>,

    /// Short code skills use to reference this characteristic.
    pub short: String,

    /// Display tag, passed through untouched.
    #[cfg_attr(feature = "serde", serde(rename = "characteristicTag"))]
    pub tag: String,

    /// XP spent on advances. Written in automatic mode, read in manual mode.
    #[cfg_attr(
        feature = "serde",
        serde(deserialize_with = "crate::lenient::i32_or_zero")
    )]
    pub cost: i32,
}

impl Characteristic {
    /// Creates an unadvanced characteristic with the kind's short code and aptitudes.
    pub fn new(kind: CharacteristicKind, base: i32) -> Self {
        Self {
            base,
            short: kind.short_code().to_owned(),
            aptitudes: kind
                .default_aptitudes()
                .iter()
                .map(|a| (*a).to_owned())
                .collect(),
            ..Self::default()
        }
    }

    pub fn with_advance(mut self, advance: i32) -> Self {
        self.advance = advance;
        self
    }

    pub fn with_unnatural(mut self, unnatural: i32) -> Self {
        self.unnatural = unnatural;
        self
    }

    pub fn with_cost(mut self, cost: i32) -> Self {
        self.cost = cost;
        self
    }

    /// Bonus for a total: tens digit (floored) plus unnatural.
    pub const fn bonus_for(total: i32, unnatural: i32) -> i32 {
        total.div_euclid(10).saturating_add(unnatural)
    }

    /// Tens digit of `base + advance`, ignoring fatigue and unnatural.
    pub const fn unpenalised_tens(&self) -> i32 {
        self.base.saturating_add(self.advance).div_euclid(10)
    }

    fn derive(&mut self, fatigue: i32) {
        self.total = self.base.saturating_add(self.advance);
        self.bonus = Self::bonus_for(self.total, self.unnatural);

        if fatigue > self.bonus {
            // ceil(total / 2)
            self.total = self.total.div_euclid(2) + self.total.rem_euclid(2);
            self.bonus = Self::bonus_for(self.total, self.unnatural);
        }

        self.advance_label = CharacteristicAdvance::from_advance(self.advance);
    }
}

/// Characteristics keyed by kind, iterated in canonical order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct CharacteristicSet {
    entries: BTreeMap<CharacteristicKind, Characteristic>,
}

impl CharacteristicSet {
    /// All nine characteristics at base 0.
    pub fn standard() -> Self {
        CharacteristicKind::iter()
            .map(|kind| (kind, Characteristic::new(kind, 0)))
            .collect()
    }

    /// A set with no characteristics.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn get(&self, kind: CharacteristicKind) -> Option<&Characteristic> {
        self.entries.get(&kind)
    }

    pub fn get_mut(&mut self, kind: CharacteristicKind) -> Option<&mut Characteristic> {
        self.entries.get_mut(&kind)
    }

    /// Inserts or replaces a characteristic, returning the previous record.
    pub fn insert(
        &mut self,
        kind: CharacteristicKind,
        characteristic: Characteristic,
    ) -> Option<Characteristic> {
        self.entries.insert(kind, characteristic)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CharacteristicKind, &Characteristic)> {
        self.entries.iter().map(|(kind, c)| (*kind, c))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (CharacteristicKind, &mut Characteristic)> {
        self.entries.iter_mut().map(|(kind, c)| (*kind, c))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves a characteristic by the `short` code stored on the record.
    pub fn find_short(&self, code: &str) -> Option<&Characteristic> {
        self.entries.values().find(|c| c.short == code)
    }

    /// Derived total of `kind`, `0` when the sheet lacks it.
    pub fn total(&self, kind: CharacteristicKind) -> i32 {
        self.get(kind).map_or(0, |c| c.total)
    }

    /// Derived bonus of `kind`, `0` when the sheet lacks it.
    pub fn bonus(&self, kind: CharacteristicKind) -> i32 {
        self.get(kind).map_or(0, |c| c.bonus)
    }

    fn unpenalised_tens(&self, kind: CharacteristicKind) -> i32 {
        self.get(kind).map_or(0, Characteristic::unpenalised_tens)
    }
}

impl Default for CharacteristicSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl FromIterator<(CharacteristicKind, Characteristic)> for CharacteristicSet {
    fn from_iter<I: IntoIterator<Item = (CharacteristicKind, Characteristic)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Derives totals, bonuses and layout for every characteristic, then the
/// fatigue threshold.
///
/// The fatigue threshold reads toughness and willpower from `base + advance`
/// alone, so it is unaffected by the penalty it feeds.
pub fn derive_characteristics(set: &mut CharacteristicSet, fatigue: &mut Fatigue) {
    let count = set.len();

    for (index, (kind, characteristic)) in set.entries.iter_mut().enumerate() {
        if characteristic.short.is_empty() {
            characteristic.short = kind.short_code().to_owned();
        }
        characteristic.derive(fatigue.value);
        characteristic.is_left = index * 2 < count;
        characteristic.is_right = !characteristic.is_left;
    }

    fatigue.max = set
        .unpenalised_tens(CharacteristicKind::Toughness)
        .saturating_add(set.unpenalised_tens(CharacteristicKind::Willpower));
}
