//! Rules configuration: cost tables, hit locations and the XP costing flag.

use crate::stats::{ExperienceMode, HitLocation};

/// Oracle providing the advancement cost tables.
///
/// Columns are indexed by the number of matching aptitudes counted from the
/// right: column 0 is "two matches", column 2 is "no match". Callers pass the
/// raw match count; implementations clamp it to the column range.
pub trait CostTables {
    /// Number of characteristic advance tiers the table defines.
    fn characteristic_tiers(&self) -> usize;

    /// Cost of a single characteristic advance tier, `0` outside the table.
    fn characteristic_cost(&self, tier: usize, matched_aptitudes: usize) -> i32;

    /// Cost of a talent of `tier` (1-based), `None` outside tiers 1–3.
    fn talent_cost(&self, tier: i32, matched_aptitudes: usize) -> Option<i32>;
}

/// World-level rules configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct RulesConfig {
    /// Characteristic advance costs, one row per 5-point tier.
    pub characteristic_costs: Vec<[i32; 3]>,

    /// Talent costs, one row per talent tier (1–3).
    pub talent_costs: [[i32; 3]; 3],

    /// Hit locations aggregated for armour. Empty means all six.
    pub hit_locations: Vec<HitLocation>,

    /// World setting selecting automatic XP costing.
    pub auto_xp_costs: bool,
}

impl RulesConfig {
    /// Number of aptitude columns in every cost table.
    pub const APTITUDE_COLUMNS: usize = 3;

    pub const DEFAULT_CHARACTERISTIC_COSTS: [[i32; 3]; 6] = [
        [0, 0, 0],
        [100, 250, 500],
        [250, 500, 750],
        [500, 750, 1000],
        [750, 1000, 1500],
        [1250, 1500, 2500],
    ];

    pub const DEFAULT_TALENT_COSTS: [[i32; 3]; 3] =
        [[200, 300, 600], [300, 450, 900], [400, 600, 1200]];

    pub fn new() -> Self {
        Self {
            characteristic_costs: Self::DEFAULT_CHARACTERISTIC_COSTS.to_vec(),
            talent_costs: Self::DEFAULT_TALENT_COSTS,
            hit_locations: HitLocation::ALL.to_vec(),
            auto_xp_costs: true,
        }
    }

    /// The experience mode selected by the world setting.
    pub fn experience_mode(&self) -> ExperienceMode {
        ExperienceMode::from_auto_flag(self.auto_xp_costs)
    }

    /// Configured hit locations, falling back to all six when none are set.
    pub fn hit_locations(&self) -> &[HitLocation] {
        if self.hit_locations.is_empty() {
            &HitLocation::ALL
        } else {
            &self.hit_locations
        }
    }

    fn column(matched_aptitudes: usize) -> usize {
        (Self::APTITUDE_COLUMNS - 1) - matched_aptitudes.min(Self::APTITUDE_COLUMNS - 1)
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl CostTables for RulesConfig {
    fn characteristic_tiers(&self) -> usize {
        self.characteristic_costs.len()
    }

    fn characteristic_cost(&self, tier: usize, matched_aptitudes: usize) -> i32 {
        self.characteristic_costs
            .get(tier)
            .map_or(0, |row| row[Self::column(matched_aptitudes)])
    }

    fn talent_cost(&self, tier: i32, matched_aptitudes: usize) -> Option<i32> {
        if !(1..=3).contains(&tier) {
            return None;
        }
        let row = self.talent_costs[(tier - 1) as usize];
        Some(row[Self::column(matched_aptitudes)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_count_matches_from_the_right() {
        let rules = RulesConfig::new();
        assert_eq!(rules.characteristic_cost(1, 2), 100);
        assert_eq!(rules.characteristic_cost(1, 1), 250);
        assert_eq!(rules.characteristic_cost(1, 0), 500);
        // More matches than columns clamp to the cheapest column
        assert_eq!(rules.characteristic_cost(1, 5), 100);
    }

    #[test]
    fn out_of_range_lookups_are_empty() {
        let rules = RulesConfig::new();
        assert_eq!(rules.characteristic_cost(99, 0), 0);
        assert_eq!(rules.talent_cost(0, 0), None);
        assert_eq!(rules.talent_cost(4, 0), None);
        assert_eq!(rules.talent_cost(3, 1), Some(600));
    }

    #[test]
    fn empty_hit_locations_fall_back_to_all() {
        let rules = RulesConfig {
            hit_locations: Vec::new(),
            ..RulesConfig::new()
        };
        assert_eq!(rules.hit_locations(), &HitLocation::ALL);
    }
}
