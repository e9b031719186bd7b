//! Skills - characteristic total plus the skill's own advance.
//!
//! A skill names its governing characteristic by short code. The reference is
//! resolved against the sheet on every pass; an empty list or an unknown code
//! resolves to a zero-valued characteristic, so the skill total is just its
//! advance. That fallback is part of the contract, not an error.

use std::collections::BTreeMap;

use super::characteristic::CharacteristicSet;

/// Untrained skills sit at -20.
pub const UNTRAINED_ADVANCE: i32 = -20;

/// Training rank of a skill, labelled by its letter.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillRank {
    #[default]
    #[strum(serialize = "U")]
    #[cfg_attr(feature = "serde", serde(rename = "U"))]
    Untrained,
    #[strum(serialize = "K")]
    #[cfg_attr(feature = "serde", serde(rename = "K"))]
    Known,
    #[strum(serialize = "T")]
    #[cfg_attr(feature = "serde", serde(rename = "T"))]
    Trained,
    #[strum(serialize = "E")]
    #[cfg_attr(feature = "serde", serde(rename = "E"))]
    Experienced,
    #[strum(serialize = "V")]
    #[cfg_attr(feature = "serde", serde(rename = "V"))]
    Veteran,
}

impl SkillRank {
    /// Rank for an advance value. Values off the 10-point grid read as untrained.
    pub const fn from_advance(advance: i32) -> Self {
        match advance {
            0 => Self::Known,
            10 => Self::Trained,
            20 => Self::Experienced,
            30 => Self::Veteran,
            _ => Self::Untrained,
        }
    }
}

/// A speciality of a specialist skill.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct Speciality {
    pub advance: i32,
    /// Derived.
    pub total: i32,
}

impl Default for Speciality {
    fn default() -> Self {
        Self {
            advance: UNTRAINED_ADVANCE,
            total: 0,
        }
    }
}

/// A skill record.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct Skill {
    /// Governing characteristic short codes. Only the first entry is used.
    pub characteristics: Vec<String>,
    pub advance: i32,

    /// Derived: governing characteristic total plus advance.
    pub total: i32,

    /// XP spent on the skill. Written in automatic mode, read in manual mode.
    #[cfg_attr(
        feature = "serde",
        serde(deserialize_with = "crate::lenient::i32_or_zero")
    )]
    pub cost: i32,

    pub is_specialist: bool,
    pub specialities: BTreeMap<String, Speciality>,

    /// Starter skills were granted at creation; their first rank is free.
    pub starter: bool,
    pub aptitudes: Vec<String>,

    /// Derived.
    #[cfg_attr(feature = "serde", serde(rename = "advanceSkill"))]
    pub advance_label: SkillRank,
}

impl Default for Skill {
    fn default() -> Self {
        Self {
            characteristics: Vec::new(),
            advance: UNTRAINED_ADVANCE,
            total: 0,
            cost: 0,
            is_specialist: false,
            specialities: BTreeMap::new(),
            starter: false,
            aptitudes: Vec::new(),
            advance_label: SkillRank::Untrained,
        }
    }
}

impl Skill {
    /// Creates an untrained skill governed by `short`.
    pub fn new(short: &str) -> Self {
        Self {
            characteristics: vec![short.to_owned()],
            ..Self::default()
        }
    }

    pub fn with_advance(mut self, advance: i32) -> Self {
        self.advance = advance;
        self
    }

    pub fn with_aptitudes(mut self, aptitudes: &[&str]) -> Self {
        self.aptitudes = aptitudes.iter().map(|a| (*a).to_owned()).collect();
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

    /// Adds a speciality and marks the skill as specialist.
    pub fn with_speciality(mut self, name: &str, advance: i32) -> Self {
        self.is_specialist = true;
        self.specialities.insert(
            name.to_owned(),
            Speciality {
                advance,
                total: 0,
            },
        );
        self
    }

    /// The short code the skill is governed by, if any.
    pub fn governing_short(&self) -> Option<&str> {
        self.characteristics.first().map(String::as_str)
    }

    fn derive(&mut self, characteristics: &CharacteristicSet) {
        let base = self
            .governing_short()
            .and_then(|short| characteristics.find_short(short))
            .map_or(0, |c| c.total);

        self.total = base.saturating_add(self.advance);
        self.advance_label = SkillRank::from_advance(self.advance);
        for speciality in self.specialities.values_mut() {
            speciality.total = base.saturating_add(speciality.advance);
        }
    }
}

/// Derives every skill's total against the already-derived characteristics.
pub fn derive_skills(skills: &mut BTreeMap<String, Skill>, characteristics: &CharacteristicSet) {
    for skill in skills.values_mut() {
        skill.derive(characteristics);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{Characteristic, CharacteristicKind, Fatigue, derive_characteristics};

    fn characteristics() -> CharacteristicSet {
        let mut set = CharacteristicSet::standard();
        set.insert(
            CharacteristicKind::Agility,
            Characteristic::new(CharacteristicKind::Agility, 38).with_advance(5),
        );
        set.insert(
            CharacteristicKind::Intelligence,
            Characteristic::new(CharacteristicKind::Intelligence, 31),
        );
        derive_characteristics(&mut set, &mut Fatigue::default());
        set
    }

    fn derive_one(skill: Skill, set: &CharacteristicSet) -> Skill {
        let mut skills = BTreeMap::from([("probe".to_owned(), skill)]);
        derive_skills(&mut skills, set);
        skills.remove("probe").unwrap()
    }

    #[test]
    fn total_adds_advance_to_governing_characteristic() {
        let set = characteristics();
        let skill = derive_one(Skill::new("Ag").with_advance(10), &set);
        assert_eq!(skill.total, 53);
        assert_eq!(skill.advance_label, SkillRank::Trained);
    }

    #[test]
    fn only_the_first_reference_counts() {
        let set = characteristics();
        let mut skill = Skill::new("Int");
        skill.characteristics.push("Ag".to_owned());
        assert_eq!(derive_one(skill, &set).total, 31 - 20);
    }

    #[test]
    fn unresolved_reference_falls_back_to_zero() {
        let set = characteristics();
        let skill = derive_one(Skill::new("Xyz").with_advance(0), &set);
        assert_eq!(skill.total, 0);

        let skill = derive_one(Skill::default(), &set);
        assert_eq!(skill.total, UNTRAINED_ADVANCE);
    }

    #[test]
    fn reference_is_resolved_on_every_pass() {
        let mut set = characteristics();
        let mut skills = BTreeMap::from([("probe".to_owned(), Skill::new("Ag"))]);
        derive_skills(&mut skills, &set);
        assert_eq!(skills["probe"].total, 23);

        set.get_mut(CharacteristicKind::Agility).unwrap().base = 48;
        derive_characteristics(&mut set, &mut Fatigue::default());
        derive_skills(&mut skills, &set);
        assert_eq!(skills["probe"].total, 33);
    }

    #[test]
    fn specialities_share_the_governing_characteristic() {
        let set = characteristics();
        let skill = derive_one(
            Skill::new("Int")
                .with_speciality("Imperium", 10)
                .with_speciality("Xenos", UNTRAINED_ADVANCE),
            &set,
        );
        assert!(skill.is_specialist);
        assert_eq!(skill.specialities["Imperium"].total, 41);
        assert_eq!(skill.specialities["Xenos"].total, 11);
    }

    #[test]
    fn rank_labels_follow_the_training_grid() {
        assert_eq!(SkillRank::from_advance(-20).to_string(), "U");
        assert_eq!(SkillRank::from_advance(0).to_string(), "K");
        assert_eq!(SkillRank::from_advance(30).to_string(), "V");
        assert_eq!(SkillRank::from_advance(5).to_string(), "U");
    }
}
