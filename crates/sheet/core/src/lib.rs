//! Deterministic derived-stat engine for character sheets.
//!
//! `sheet-core` recomputes every derived field of an [`ActorSheet`] from its
//! base fields: characteristic bonuses, skill totals, armour per hit location,
//! encumbrance, movement and experience-point accounting. It also resolves
//! ordered damage batches into wound and critical-wound updates.
//!
//! The crate performs no I/O and keeps no global state. Hosts call
//! [`ActorSheet::recompute`] whenever base data changes and read the derived
//! record back; recoverable problems are reported through [`RecomputeReport`]
//! instead of aborting the pass.
pub mod combat;
pub mod config;
pub mod error;
pub mod item;
pub mod roll;
pub mod sheet;
pub mod stats;

#[cfg(feature = "serde")]
pub(crate) mod lenient;

pub use combat::{DamageEvent, DamageLogEntry, DamageOutcome, DamageSource, apply_damage};
pub use config::{CostTables, RulesConfig};
pub use error::{ErrorSeverity, SheetError};
pub use item::{ItemFlags, ItemSnapshot};
pub use roll::{RollData, substitute_bonuses};
pub use sheet::{ActorSheet, RecomputeReport, RecomputeWarning};
pub use stats::{
    ArmourError, ArmourLocation, ArmourProfile, Characteristic, CharacteristicAdvance,
    CharacteristicKind, CharacteristicSet, Encumbrance, Experience, ExperienceMode, Fatigue,
    HitLocation, Initiative, Movement, Psy, Skill, SkillRank, Speciality, Wounds,
};
