//! The actor sheet and its recompute pass.
//!
//! A recompute runs every derived-stat layer in dependency order and
//! overwrites derived fields in place:
//!
//! 1. characteristics (fatigue penalty, fatigue threshold)
//! 2. skills
//! 3. initiative and psy rating
//! 4. encumbrance
//! 5. experience
//! 6. armour
//! 7. movement
//!
//! Running it twice on unchanged base data yields the same sheet.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::combat::{DamageEvent, DamageOutcome, apply_damage};
use crate::config::CostTables;
use crate::error::{ErrorSeverity, SheetError};
use crate::item::ItemSnapshot;
use crate::stats::{
    Advancements, ArmourError, ArmourProfile, CharacteristicKind, CharacteristicSet, Encumbrance,
    Experience, ExperienceMode, Fatigue, HitLocation, Initiative, Movement, Psy, Skill, Wounds,
    derive_armour, derive_characteristics, derive_skills, movement::AVERAGE_SIZE,
};

/// Full character record: base fields set by the host, derived fields written
/// by [`ActorSheet::recompute`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct ActorSheet {
    pub name: String,
    pub characteristics: CharacteristicSet,
    pub skills: BTreeMap<String, Skill>,
    pub items: Vec<ItemSnapshot>,
    pub experience: Experience,
    pub wounds: Wounds,
    pub fatigue: Fatigue,
    pub psy: Psy,
    pub initiative: Initiative,
    pub size: i32,

    /// Derived.
    pub armour: ArmourProfile,
    /// Derived.
    pub encumbrance: Encumbrance,
    /// Derived.
    pub movement: Movement,
}

impl Default for ActorSheet {
    fn default() -> Self {
        Self {
            name: String::new(),
            characteristics: CharacteristicSet::standard(),
            skills: BTreeMap::new(),
            items: Vec::new(),
            experience: Experience::default(),
            wounds: Wounds::default(),
            fatigue: Fatigue::default(),
            psy: Psy::default(),
            initiative: Initiative::default(),
            size: AVERAGE_SIZE,
            armour: ArmourProfile::default(),
            encumbrance: Encumbrance::default(),
            movement: Movement::default(),
        }
    }
}

/// A problem a recompute pass recovered from.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RecomputeWarning {
    #[error("armour reset to zero: {0}")]
    ArmourFallback(#[from] ArmourError),
}

impl SheetError for RecomputeWarning {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ArmourFallback(_) => "RECOMPUTE_ARMOUR_FALLBACK",
        }
    }
}

/// Warnings collected during one recompute pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecomputeReport {
    pub warnings: Vec<RecomputeWarning>,
}

impl RecomputeReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

impl ActorSheet {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            ..Self::default()
        }
    }

    /// Recomputes every derived field from the base fields.
    ///
    /// Never fails: recoverable problems substitute their fallback value and
    /// are reported in the returned [`RecomputeReport`].
    pub fn recompute<T>(
        &mut self,
        tables: &T,
        hit_locations: &[HitLocation],
        mode: ExperienceMode,
    ) -> RecomputeReport
    where
        T: CostTables + ?Sized,
    {
        let mut report = RecomputeReport::default();

        derive_characteristics(&mut self.characteristics, &mut self.fatigue);
        derive_skills(&mut self.skills, &self.characteristics);
        self.initiative.derive(&self.characteristics);
        self.psy.derive();

        self.encumbrance = Encumbrance::compute(
            &self.items,
            self.characteristics
                .bonus(CharacteristicKind::Strength)
                .saturating_add(self.characteristics.bonus(CharacteristicKind::Toughness)),
        );

        self.experience.recompute(
            mode,
            tables,
            Advancements {
                characteristics: &mut self.characteristics,
                skills: &mut self.skills,
                psy: &mut self.psy,
                items: &self.items,
            },
        );

        let (armour, error) = derive_armour(&self.items, self.toughness_bonus(), hit_locations);
        self.armour = armour;
        if let Some(error) = error {
            report.warnings.push(error.into());
        }

        self.movement = Movement::compute(
            self.characteristics.bonus(CharacteristicKind::Agility),
            self.size,
        );

        report
    }

    /// Resolves a damage batch against this sheet's derived armour and
    /// toughness. The sheet itself is not modified.
    pub fn apply_damage(&self, events: &[DamageEvent]) -> DamageOutcome {
        apply_damage(&self.wounds, self.toughness_bonus(), &self.armour, events)
    }

    /// Derived toughness bonus, fatigue penalty included.
    pub fn toughness_bonus(&self) -> i32 {
        self.characteristics.bonus(CharacteristicKind::Toughness)
    }
}
