//! Rules configuration loader.

use std::path::Path;

use sheet_core::RulesConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for rules configuration from TOML files.
pub struct RulesLoader;

impl RulesLoader {
    /// Load rules from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<RulesConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<RulesConfig> {
        let rules: RulesConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse rules TOML: {}", e))?;

        if rules.characteristic_costs.is_empty() {
            anyhow::bail!("Rules must define at least one characteristic cost tier");
        }
        Ok(rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheet_core::{CostTables, ExperienceMode, HitLocation};

    #[test]
    fn empty_document_yields_defaults() {
        let rules = RulesLoader::parse("").unwrap();
        assert_eq!(rules, RulesConfig::default());
    }

    #[test]
    fn partial_document_overrides_only_what_it_names() {
        let rules = RulesLoader::parse(
            r#"
            autoXpCosts = false
            hitLocations = ["head", "body"]
            talentCosts = [[1, 2, 3], [4, 5, 6], [7, 8, 9]]
            "#,
        )
        .unwrap();

        assert_eq!(rules.experience_mode(), ExperienceMode::Manual);
        assert_eq!(rules.hit_locations(), &[HitLocation::Head, HitLocation::Body]);
        assert_eq!(rules.talent_cost(2, 1), Some(5));
        assert_eq!(rules.characteristic_cost(1, 2), 100);
    }

    #[test]
    fn empty_characteristic_table_is_rejected() {
        let err = RulesLoader::parse("characteristicCosts = []").unwrap_err();
        assert!(err.to_string().contains("characteristic cost tier"));
    }
}
