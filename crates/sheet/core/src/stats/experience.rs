//! Experience accounting in two mutually exclusive modes.
//!
//! - **Automatic** recomputes every advancement cost from the cost tables and
//!   the actor's aptitudes, and writes the costs back onto the records.
//! - **Manual** trusts whatever cost is stored on each record, so a GM can
//!   override individual prices.
//!
//! Both modes fill the same summary:
//!
//! ```text
//! total_spent = characteristics + skills + talents + psychic powers + other
//! remaining   = value - total_spent
//! ```

use std::collections::{BTreeMap, BTreeSet};

use super::characteristic::CharacteristicSet;
use super::skill::{Skill, UNTRAINED_ADVANCE};
use super::vitals::Psy;
use crate::config::CostTables;
use crate::item::ItemSnapshot;

/// Aptitude every actor has, whether or not it is listed.
pub const GENERAL_APTITUDE: &str = "General";

/// XP per skill rank step before aptitude discounts.
const SKILL_RANK_STEP: i32 = 100;

/// XP per psy rating step.
const PSY_RATING_STEP: i32 = 200;

/// How advancement costs are obtained.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum ExperienceMode {
    /// Costs recomputed from the tables on every pass.
    #[default]
    Automatic,
    /// Costs read from the stored records.
    Manual,
}

impl ExperienceMode {
    pub const fn from_auto_flag(auto_xp_costs: bool) -> Self {
        if auto_xp_costs {
            Self::Automatic
        } else {
            Self::Manual
        }
    }
}

/// Experience totals.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct Experience {
    /// Total XP earned.
    pub value: i32,

    pub spent_characteristics: i32,
    pub spent_skills: i32,
    pub spent_talents: i32,
    pub spent_psychic_powers: i32,

    /// XP spent outside the tracked categories; entered by hand in both modes.
    #[cfg_attr(
        feature = "serde",
        serde(deserialize_with = "crate::lenient::i32_or_zero")
    )]
    pub spent_other: i32,

    pub total_spent: i32,
    pub remaining: i32,

    /// Cost of each talent item, keyed by item id.
    pub talent_costs: BTreeMap<String, i32>,
}

/// Mutable advancement records the accountant reads and, in automatic mode,
/// writes costs back to.
pub struct Advancements<'a> {
    pub characteristics: &'a mut CharacteristicSet,
    pub skills: &'a mut BTreeMap<String, Skill>,
    pub psy: &'a mut Psy,
    pub items: &'a [ItemSnapshot],
}

impl Experience {
    pub fn new(value: i32) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }

    /// Recomputes every spent field and the remaining balance.
    pub fn recompute<T>(&mut self, mode: ExperienceMode, tables: &T, records: Advancements<'_>)
    where
        T: CostTables + ?Sized,
    {
        self.talent_costs.clear();
        match mode {
            ExperienceMode::Automatic => self.compute_automatic(tables, records),
            ExperienceMode::Manual => self.compute_manual(records),
        }

        self.total_spent = saturating_sum([
            self.spent_characteristics,
            self.spent_skills,
            self.spent_talents,
            self.spent_psychic_powers,
            self.spent_other,
        ]);
        self.remaining = self.value.saturating_sub(self.total_spent);
    }

    fn compute_automatic<T>(&mut self, tables: &T, records: Advancements<'_>)
    where
        T: CostTables + ?Sized,
    {
        let known = known_aptitudes(records.items);

        records.psy.cost = psy_rating_cost(records.psy.rating);
        self.spent_psychic_powers = records.psy.cost;

        self.spent_characteristics = 0;
        for (_, characteristic) in records.characteristics.iter_mut() {
            let matched = matched_aptitudes(&known, &characteristic.aptitudes);
            characteristic.cost = characteristic_cost(tables, characteristic.advance, matched);
            self.spent_characteristics =
                self.spent_characteristics.saturating_add(characteristic.cost);
        }

        self.spent_skills = 0;
        for skill in records.skills.values_mut() {
            let matched = matched_aptitudes(&known, &skill.aptitudes);
            skill.cost = skill_cost(skill.advance, skill.starter, matched);
            self.spent_skills = self.spent_skills.saturating_add(skill.cost);
        }

        self.spent_talents = 0;
        for item in records.items {
            if item.is_talent() {
                let cost = talent_cost(tables, item, &known);
                self.talent_costs.insert(item.id.clone(), cost);
                self.spent_talents = self.spent_talents.saturating_add(cost);
            } else if item.is_psychic_power() {
                self.spent_psychic_powers =
                    self.spent_psychic_powers.saturating_add(item.cost);
            }
        }
    }

    fn compute_manual(&mut self, records: Advancements<'_>) {
        self.spent_characteristics =
            saturating_sum(records.characteristics.iter().map(|(_, c)| c.cost));
        self.spent_skills = saturating_sum(records.skills.values().map(|s| s.cost));

        self.spent_talents = 0;
        self.spent_psychic_powers = records.psy.cost;
        for item in records.items {
            if item.is_talent() {
                self.talent_costs.insert(item.id.clone(), item.cost);
                self.spent_talents = self.spent_talents.saturating_add(item.cost);
            } else if item.is_psychic_power() {
                self.spent_psychic_powers =
                    self.spent_psychic_powers.saturating_add(item.cost);
            }
        }
    }
}

/// Cost of a psy rating: every point after the first costs 200 × its rank.
pub const fn psy_rating_cost(rating: i32) -> i32 {
    let rating = rating as i64;
    let points = rating * (rating + 1) / 2 - 1;
    clamp_to_i32(points.saturating_mul(PSY_RATING_STEP as i64))
}

/// Cost of a characteristic's advances: one table row per 5-point tier up to
/// the current advance, tier 0 included.
pub fn characteristic_cost<T>(tables: &T, advance: i32, matched: usize) -> i32
where
    T: CostTables + ?Sized,
{
    let tiers = tables.characteristic_tiers();
    let Ok(reached) = usize::try_from(advance.div_euclid(5)) else {
        return 0;
    };
    if tiers == 0 {
        return 0;
    }
    saturating_sum(
        (0..=reached.min(tiers - 1)).map(|tier| tables.characteristic_cost(tier, matched)),
    )
}

/// Cost of a skill's ranks: rank `i` (one per 10 points of advance) costs
/// `(i + 1) × (3 - matched) × 100`. A starter skill's first rank is free.
///
/// An advance of exactly 0 is priced as untrained, so a merely known skill
/// costs nothing.
pub fn skill_cost(advance: i32, starter: bool, matched: usize) -> i32 {
    let advance = if advance == 0 { UNTRAINED_ADVANCE } else { advance };
    let discount = 3 - matched.min(2) as i64;
    let first = i64::from(starter);
    let last = i64::from(advance.div_euclid(10));
    if last < first {
        return 0;
    }
    // Σ (rank + 1) for rank in first..=last
    let ranks = triangular(last + 1) - triangular(first);
    clamp_to_i32(
        ranks
            .saturating_mul(discount)
            .saturating_mul(i64::from(SKILL_RANK_STEP)),
    )
}

const fn triangular(n: i64) -> i64 {
    n * (n + 1) / 2
}

/// Negative costs read as 0; costs past `i32::MAX` saturate.
const fn clamp_to_i32(cost: i64) -> i32 {
    if cost <= 0 {
        0
    } else if cost > i32::MAX as i64 {
        i32::MAX
    } else {
        cost as i32
    }
}

fn saturating_sum(costs: impl IntoIterator<Item = i32>) -> i32 {
    costs.into_iter().fold(0, i32::saturating_add)
}

fn talent_cost<T>(tables: &T, talent: &ItemSnapshot, known: &BTreeSet<&str>) -> i32
where
    T: CostTables + ?Sized,
{
    if talent.starter {
        return 0;
    }
    let matched = matched_aptitudes(known, &talent.aptitudes);
    tables.talent_cost(talent.tier, matched).unwrap_or(0)
}

/// Names of the actor's aptitude items, deduplicated, plus `General`.
fn known_aptitudes(items: &[ItemSnapshot]) -> BTreeSet<&str> {
    items
        .iter()
        .filter(|item| item.is_aptitude())
        .map(|item| item.name.trim())
        .chain(core::iter::once(GENERAL_APTITUDE))
        .collect()
}

/// Number of known aptitudes appearing in `aptitudes`.
fn matched_aptitudes(known: &BTreeSet<&str>, aptitudes: &[String]) -> usize {
    known
        .iter()
        .filter(|name| aptitudes.iter().any(|a| a.trim() == **name))
        .count()
}
