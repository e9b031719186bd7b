use std::sync::{Arc, Mutex};

use runtime::{
    ActorRepository, DamageHook, DamageReport, HookRegistry, InMemoryActorRepo, RuntimeConfig,
    RuntimeError, SheetRuntime, WoundUpdate,
};
use sheet_content::ActorLoader;
use sheet_core::{
    ActorSheet, Characteristic, CharacteristicKind, DamageEvent, DamageSource, ExperienceMode,
    ItemSnapshot, RulesConfig, Wounds,
};

fn acolyte() -> ActorSheet {
    let mut sheet = ActorSheet::new("Acolyte Rhen");
    sheet.characteristics.insert(
        CharacteristicKind::Toughness,
        Characteristic::new(CharacteristicKind::Toughness, 34),
    );
    sheet.characteristics.insert(
        CharacteristicKind::Agility,
        Characteristic::new(CharacteristicKind::Agility, 40).with_advance(5),
    );
    sheet.items = vec![ItemSnapshot::armour("flak", false, &[("body", 4)])];
    sheet.wounds = Wounds::new(0, 0, 10);
    sheet
}

/// Vetoes any update that adds critical wounds and records every report.
#[derive(Default)]
struct NoCriticals {
    reports: Mutex<Vec<(bool, usize)>>,
}

impl DamageHook for NoCriticals {
    fn name(&self) -> &'static str {
        "no_criticals"
    }

    fn allow(&self, update: &WoundUpdate<'_>) -> bool {
        update.critical_added() == 0
    }

    fn on_applied(&self, report: &DamageReport<'_>) {
        self.reports
            .lock()
            .unwrap()
            .push((report.applied, report.outcome.log.len()));
    }
}

#[test]
fn insert_recomputes_before_storing() {
    let runtime = SheetRuntime::builder().build().unwrap();
    let report = runtime.insert("rhen", acolyte()).unwrap();
    assert!(report.is_clean());

    let stored = runtime.sheet("rhen").unwrap();
    assert_eq!(stored.characteristics.bonus(CharacteristicKind::Toughness), 3);
    assert_eq!(stored.armour.body.total, 7);
    assert_eq!(stored.movement.half, 4);
    assert_eq!(runtime.actor_ids().unwrap(), ["rhen"]);
}

#[test]
fn damage_is_persisted_when_no_hook_objects() {
    let runtime = SheetRuntime::builder()
        .hooks(HookRegistry::empty())
        .build()
        .unwrap();
    runtime.insert("rhen", acolyte()).unwrap();

    let outcome = runtime
        .apply_damage("rhen", &[DamageEvent::new(10, "ARMOUR.BODY")])
        .unwrap();
    // 10 - TB 3 - armour 4
    assert_eq!(outcome.wounds.value, 3);
    assert_eq!(runtime.sheet("rhen").unwrap().wounds.value, 3);
}

#[test]
fn vetoed_update_leaves_the_stored_wounds_alone() {
    let hook = Arc::new(NoCriticals::default());
    let runtime = SheetRuntime::builder()
        .hook(hook.clone())
        .build()
        .unwrap();
    runtime.insert("rhen", acolyte()).unwrap();

    let outcome = runtime
        .apply_damage("rhen", &[DamageEvent::new(30, "ARMOUR.HEAD")])
        .unwrap();
    assert_eq!(outcome.wounds, Wounds::new(10, 17, 10));
    assert_eq!(outcome.log[1].source, DamageSource::Critical);
    assert_eq!(runtime.sheet("rhen").unwrap().wounds, Wounds::new(0, 0, 10));

    runtime
        .apply_damage("rhen", &[DamageEvent::new(5, "ARMOUR.HEAD")])
        .unwrap();
    assert_eq!(runtime.sheet("rhen").unwrap().wounds.value, 2);

    assert_eq!(*hook.reports.lock().unwrap(), [(false, 2), (true, 1)]);
}

#[test]
fn empty_batches_are_not_reported() {
    let hook = Arc::new(NoCriticals::default());
    let runtime = SheetRuntime::builder()
        .hooks(HookRegistry::new(vec![hook.clone() as Arc<dyn DamageHook>]))
        .build()
        .unwrap();
    runtime.insert("rhen", acolyte()).unwrap();

    let outcome = runtime.apply_damage("rhen", &[]).unwrap();
    assert!(outcome.log.is_empty());
    assert!(hook.reports.lock().unwrap().is_empty());
}

#[test]
fn recompute_picks_up_base_changes_in_the_repository() {
    let repository = Arc::new(InMemoryActorRepo::new());
    let runtime = SheetRuntime::builder()
        .repository(repository.clone())
        .build()
        .unwrap();
    runtime.insert("rhen", acolyte()).unwrap();

    let mut edited = repository.load("rhen").unwrap().unwrap();
    edited
        .items
        .push(ItemSnapshot::armour("plate", true, &[("body", 2)]));
    repository.save("rhen", &edited).unwrap();

    runtime.recompute("rhen").unwrap();
    assert_eq!(runtime.sheet("rhen").unwrap().armour.body.value, 6);
}

#[test]
fn armour_fallback_is_reported_not_fatal() {
    let runtime = SheetRuntime::builder().build().unwrap();
    let mut sheet = acolyte();
    sheet.items.extend([
        ItemSnapshot::armour("plate-a", true, &[("body", i32::MAX)]),
        ItemSnapshot::armour("plate-b", true, &[("body", 1)]),
    ]);

    let report = runtime.insert("rhen", sheet).unwrap();
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(runtime.sheet("rhen").unwrap().armour.body.total, 0);
}

#[test]
fn manual_mode_from_rules_keeps_stored_costs() {
    let rules = RulesConfig {
        auto_xp_costs: false,
        ..RulesConfig::default()
    };
    let runtime = SheetRuntime::builder()
        .config(RuntimeConfig::from_rules(rules))
        .build()
        .unwrap();
    assert_eq!(runtime.config().experience_mode, ExperienceMode::Manual);

    let mut sheet = acolyte();
    sheet
        .characteristics
        .get_mut(CharacteristicKind::Agility)
        .unwrap()
        .cost = 75;
    runtime.insert("rhen", sheet).unwrap();

    let stored = runtime.sheet("rhen").unwrap();
    assert_eq!(stored.experience.spent_characteristics, 75);
}

#[test]
fn builder_mode_follows_rules_unless_set() {
    let manual_rules = RulesConfig {
        auto_xp_costs: false,
        ..RulesConfig::default()
    };

    let runtime = SheetRuntime::builder()
        .rules(manual_rules.clone())
        .build()
        .unwrap();
    assert_eq!(runtime.config().experience_mode, ExperienceMode::Manual);

    let runtime = SheetRuntime::builder()
        .experience_mode(ExperienceMode::Automatic)
        .rules(manual_rules)
        .build()
        .unwrap();
    assert_eq!(runtime.config().experience_mode, ExperienceMode::Automatic);
}

#[test]
fn unknown_actors_and_bad_rules_are_errors() {
    let runtime = SheetRuntime::builder().build().unwrap();
    assert!(matches!(
        runtime.sheet("ghost"),
        Err(RuntimeError::ActorNotFound(id)) if id == "ghost"
    ));

    let empty_tables = RulesConfig {
        characteristic_costs: Vec::new(),
        ..RulesConfig::default()
    };
    assert!(matches!(
        SheetRuntime::builder().rules(empty_tables).build(),
        Err(RuntimeError::InvalidConfig(_))
    ));
}

#[test]
fn loaded_sheets_run_through_the_runtime() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vail.json");
    std::fs::write(
        &path,
        r#"{
            "name": "Interrogator Vail",
            "characteristics": { "toughness": { "base": 41 } },
            "wounds": { "value": 0, "max": 14 }
        }"#,
    )
    .unwrap();

    let runtime = SheetRuntime::builder().build().unwrap();
    runtime
        .insert("vail", ActorLoader::load(&path).unwrap())
        .unwrap();

    let outcome = runtime
        .apply_damage("vail", &[DamageEvent::new(9, "ARMOUR.HEAD")])
        .unwrap();
    assert_eq!(outcome.wounds.value, 5);
}
