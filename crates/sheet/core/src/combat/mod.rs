//! Combat resolution.

pub mod damage;

pub use damage::{DamageEvent, DamageLogEntry, DamageOutcome, DamageSource, apply_damage};
