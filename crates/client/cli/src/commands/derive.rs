//! Recompute a sheet file and print the derived record.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use sheet_core::ExperienceMode;

use super::{ACTOR_ID, load_actor, print_json};
use crate::config::CliConfig;

/// Recompute a sheet and print it as JSON
#[derive(Parser)]
pub struct Derive {
    /// Actor sheet file (.json or .ron)
    #[arg(value_name = "ACTOR_FILE")]
    actor: PathBuf,

    /// Force an experience mode instead of the rules' setting
    #[arg(short, long, value_enum)]
    mode: Option<ModeArg>,
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub(crate) enum ModeArg {
    /// Recompute every advancement cost from the tables
    Automatic,
    /// Keep the costs stored on the sheet
    Manual,
}

impl From<ModeArg> for ExperienceMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Automatic => Self::Automatic,
            ModeArg::Manual => Self::Manual,
        }
    }
}

impl Derive {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let runtime = config.runtime(self.mode.map(Into::into))?;
        load_actor(&runtime, &self.actor)?;
        print_json(&runtime.sheet(ACTOR_ID)?)
    }
}
