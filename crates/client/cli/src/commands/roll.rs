//! Prepare roll targets and bonus-substituted formulas from a sheet.

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;
use sheet_core::CharacteristicKind;
use sheet_core::roll::{
    characteristic_roll, custom_roll, skill_roll, speciality_roll, substitute_bonuses,
};

use super::{ACTOR_ID, load_actor, print_json};
use crate::config::CliConfig;

/// Prepare a test or expand a damage formula
#[derive(Parser)]
pub struct Roll {
    /// Actor sheet file (.json or .ron)
    #[arg(value_name = "ACTOR_FILE")]
    actor: PathBuf,

    /// Characteristic (e.g. `agility`) or skill key; omit for a custom roll
    #[arg(value_name = "TARGET")]
    target: Option<String>,

    /// Speciality of a specialist skill
    #[arg(short, long)]
    speciality: Option<String>,

    /// Modifier added to the target
    #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
    modifier: i32,

    /// Damage formula whose bonus tokens (e.g. `SB`) are substituted instead
    #[arg(short, long, conflicts_with_all = ["target", "speciality"])]
    formula: Option<String>,
}

impl Roll {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let runtime = config.runtime(None)?;
        load_actor(&runtime, &self.actor)?;
        let sheet = runtime.sheet(ACTOR_ID)?;

        if let Some(formula) = &self.formula {
            println!("{}", substitute_bonuses(formula, &sheet.characteristics));
            return Ok(());
        }

        let roll = match (&self.target, &self.speciality) {
            (None, _) => custom_roll(),
            (Some(skill), Some(speciality)) => speciality_roll(&sheet, skill, speciality)
                .ok_or_else(|| anyhow!("No speciality {speciality:?} on skill {skill:?}"))?,
            (Some(target), None) => match target.parse::<CharacteristicKind>() {
                Ok(kind) => characteristic_roll(&sheet, kind),
                Err(_) => skill_roll(&sheet, target),
            }
            .ok_or_else(|| anyhow!("No characteristic or skill named {target:?}"))?,
        };

        print_json(&roll.with_modifier(self.modifier))
    }
}
