//! Derived-stat layers.
//!
//! Each layer reads base fields (and the outputs of earlier layers) and
//! overwrites its derived fields in place:
//!
//! ```text
//! [ Characteristics + fatigue penalty ]
//!      ↓
//! [ Skills / Initiative / Psy ]
//!      ↓
//! [ Encumbrance ]   [ Experience costs ]   [ Armour per location ]
//!      ↓
//! [ Movement ]
//! ```
//!
//! ## Principles
//!
//! 1. **Base data is the source of truth**: derived fields are never read back
//!    as inputs, so a pass is idempotent
//! 2. **No failure escapes a layer**: unresolved references and malformed data
//!    degrade to documented zero values
//! 3. **Deterministic**: integer arithmetic, no I/O

pub mod armour;
pub mod characteristic;
pub mod encumbrance;
pub mod experience;
pub mod movement;
pub mod skill;
pub mod vitals;

pub use armour::{
    ArmourError, ArmourLocation, ArmourProfile, HitLocation, aggregate_armour, derive_armour,
};
pub use characteristic::{
    Characteristic, CharacteristicAdvance, CharacteristicKind, CharacteristicSet,
    derive_characteristics,
};
pub use encumbrance::{Encumbrance, carry_capacity};
pub use experience::{Advancements, Experience, ExperienceMode, psy_rating_cost};
pub use movement::Movement;
pub use skill::{Skill, SkillRank, Speciality, derive_skills};
pub use vitals::{Fatigue, Initiative, Psy, Wounds};
