//! CLI configuration from environment variables.
use std::env;
use std::path::PathBuf;

use anyhow::Result;
use runtime::{RuntimeConfig, SheetRuntime};
use sheet_content::RulesLoader;
use sheet_core::{ExperienceMode, RulesConfig};

#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub rules_path: Option<PathBuf>,
    pub auto_xp_costs: Option<bool>,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SHEET_RULES_PATH` - Rules TOML file (default: built-in rules)
    /// - `SHEET_AUTO_XP_COSTS` - Override the rules' automatic XP costing flag
    pub fn from_env() -> Self {
        Self {
            rules_path: env::var("SHEET_RULES_PATH").ok().map(PathBuf::from),
            auto_xp_costs: read_env::<bool>("SHEET_AUTO_XP_COSTS"),
        }
    }

    pub fn load_rules(&self) -> Result<RulesConfig> {
        let mut rules = match &self.rules_path {
            Some(path) => RulesLoader::load(path)?,
            None => RulesConfig::default(),
        };
        if let Some(auto) = self.auto_xp_costs {
            rules.auto_xp_costs = auto;
        }
        Ok(rules)
    }

    /// Build a runtime over the configured rules, optionally forcing the
    /// experience mode.
    pub fn runtime(&self, mode: Option<ExperienceMode>) -> Result<SheetRuntime> {
        let mut config = RuntimeConfig::from_rules(self.load_rules()?);
        if let Some(mode) = mode {
            config.experience_mode = mode;
        }
        Ok(SheetRuntime::builder().config(config).build()?)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
