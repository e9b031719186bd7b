//! Apply a damage batch file to a sheet file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sheet_content::DamageLoader;

use super::{ACTOR_ID, load_actor, print_json};
use crate::config::CliConfig;

/// Apply a damage batch and print the outcome as JSON
#[derive(Parser)]
pub struct Damage {
    /// Actor sheet file (.json or .ron)
    #[arg(value_name = "ACTOR_FILE")]
    actor: PathBuf,

    /// Damage batch file (.json or .ron)
    #[arg(value_name = "EVENTS_FILE")]
    events: PathBuf,

    /// Write the damaged sheet back to ACTOR_FILE as JSON
    #[arg(long)]
    write: bool,
}

impl Damage {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let runtime = config.runtime(None)?;
        load_actor(&runtime, &self.actor)?;
        let events = DamageLoader::load(&self.events)?;

        let outcome = runtime.apply_damage(ACTOR_ID, &events)?;

        if self.write {
            let sheet = runtime.sheet(ACTOR_ID)?;
            let json = serde_json::to_string_pretty(&sheet)?;
            std::fs::write(&self.actor, json)
                .with_context(|| format!("Failed to write {}", self.actor.display()))?;
        }

        print_json(&outcome)
    }
}
