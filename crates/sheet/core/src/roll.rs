//! Roll preparation: target numbers for tests made from a sheet.
//!
//! The engine does not roll dice. It hands the host a [`RollData`] with the
//! target to roll under, and rewrites damage formulas so characteristic bonus
//! tokens (`SB`, `TB`, ...) become numbers.

use crate::sheet::ActorSheet;
use crate::stats::{CharacteristicKind, CharacteristicSet};

/// Base target of a custom roll.
pub const CUSTOM_ROLL_TARGET: i32 = 50;

/// Label of a custom roll.
pub const CUSTOM_ROLL_NAME: &str = "DIALOG.CUSTOM_ROLL";

/// A test to roll under.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct RollData {
    pub name: String,
    pub base_target: i32,
    pub modifier: i32,
}

impl RollData {
    pub fn new(name: impl Into<String>, base_target: i32) -> Self {
        Self {
            name: name.into(),
            base_target,
            modifier: 0,
        }
    }

    pub fn with_modifier(mut self, modifier: i32) -> Self {
        self.modifier = modifier;
        self
    }

    pub const fn target(&self) -> i32 {
        self.base_target.saturating_add(self.modifier)
    }
}

/// Test against a characteristic's derived total.
pub fn characteristic_roll(sheet: &ActorSheet, kind: CharacteristicKind) -> Option<RollData> {
    sheet
        .characteristics
        .get(kind)
        .map(|c| RollData::new(kind.to_string(), c.total))
}

/// Test against a skill's derived total.
pub fn skill_roll(sheet: &ActorSheet, key: &str) -> Option<RollData> {
    sheet
        .skills
        .get(key)
        .map(|skill| RollData::new(key, skill.total))
}

/// Test against one speciality of a specialist skill.
pub fn speciality_roll(sheet: &ActorSheet, key: &str, speciality: &str) -> Option<RollData> {
    sheet
        .skills
        .get(key)
        .and_then(|skill| skill.specialities.get(speciality))
        .map(|s| RollData::new(format!("{key}: {speciality}"), s.total))
}

pub fn custom_roll() -> RollData {
    RollData::new(CUSTOM_ROLL_NAME, CUSTOM_ROLL_TARGET)
}

/// Replaces every `<short>B` token in `formula` with that characteristic's
/// bonus, ignoring case.
///
/// Characteristics are substituted in sheet order, so `WSB` is consumed before
/// `SB` can match inside it.
pub fn substitute_bonuses(formula: &str, characteristics: &CharacteristicSet) -> String {
    characteristics
        .iter()
        .filter(|(_, c)| !c.short.is_empty())
        .fold(formula.to_owned(), |acc, (_, c)| {
            let token = format!("{}B", c.short);
            replace_ignore_ascii_case(&acc, &token, &c.bonus.to_string())
        })
}

fn replace_ignore_ascii_case(haystack: &str, needle: &str, replacement: &str) -> String {
    let mut out = String::with_capacity(haystack.len());
    let mut rest = haystack;

    while let Some(ch) = rest.chars().next() {
        let matches = rest
            .get(..needle.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(needle));
        if matches {
            out.push_str(replacement);
            rest = &rest[needle.len()..];
        } else {
            out.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{Characteristic, Fatigue, Skill, derive_characteristics, derive_skills};

    fn sheet() -> ActorSheet {
        let mut sheet = ActorSheet::new("Interrogator Vail");
        sheet.characteristics.insert(
            CharacteristicKind::WeaponSkill,
            Characteristic::new(CharacteristicKind::WeaponSkill, 52),
        );
        sheet.characteristics.insert(
            CharacteristicKind::Strength,
            Characteristic::new(CharacteristicKind::Strength, 41),
        );
        sheet.characteristics.insert(
            CharacteristicKind::Toughness,
            Characteristic::new(CharacteristicKind::Toughness, 35),
        );
        sheet.characteristics.insert(
            CharacteristicKind::Intelligence,
            Characteristic::new(CharacteristicKind::Intelligence, 30),
        );
        sheet.characteristics.insert(
            CharacteristicKind::Perception,
            Characteristic::new(CharacteristicKind::Perception, 40),
        );
        sheet.skills.insert(
            "commonLore".to_owned(),
            Skill::new("Int").with_speciality("Imperium", 10),
        );
        sheet.skills.insert(
            "awareness".to_owned(),
            Skill::new("Per").with_advance(0),
        );
        derive_characteristics(&mut sheet.characteristics, &mut Fatigue::default());
        derive_skills(&mut sheet.skills, &sheet.characteristics);
        sheet
    }

    #[test]
    fn bonus_tokens_are_replaced_case_insensitively() {
        let sheet = sheet();
        assert_eq!(
            substitute_bonuses("1d10+SB", &sheet.characteristics),
            "1d10+4"
        );
        assert_eq!(
            substitute_bonuses("2d10+sb-tb", &sheet.characteristics),
            "2d10+4-3"
        );
        assert_eq!(
            substitute_bonuses("1d5+WSB", &sheet.characteristics),
            "1d5+5"
        );
        assert_eq!(substitute_bonuses("1d10+2", &sheet.characteristics), "1d10+2");
    }

    #[test]
    fn non_ascii_formulas_pass_through() {
        let sheet = sheet();
        assert_eq!(
            substitute_bonuses("1d10×SB", &sheet.characteristics),
            "1d10×4"
        );
    }

    #[test]
    fn characteristic_and_skill_rolls_target_derived_totals() {
        let sheet = sheet();
        let ws = characteristic_roll(&sheet, CharacteristicKind::WeaponSkill).unwrap();
        assert_eq!(ws.target(), 52);

        let awareness = skill_roll(&sheet, "awareness").unwrap();
        assert_eq!(awareness.target(), 40);

        let lore = speciality_roll(&sheet, "commonLore", "Imperium").unwrap();
        assert_eq!(lore.name, "commonLore: Imperium");
        assert_eq!(lore.base_target, 40);

        assert!(skill_roll(&sheet, "navigate").is_none());
        assert!(speciality_roll(&sheet, "commonLore", "Tech").is_none());
    }

    #[test]
    fn custom_roll_starts_at_fifty() {
        let roll = custom_roll().with_modifier(-10);
        assert_eq!(roll.base_target, 50);
        assert_eq!(roll.target(), 40);
    }
}
