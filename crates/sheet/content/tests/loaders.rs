use std::fs;
use std::path::Path;

use sheet_content::{ActorLoader, ContentFactory, DamageLoader};
use sheet_core::{CharacteristicKind, DamageSource, ExperienceMode, HitLocation};

const ACTOR_JSON: &str = r#"{
    "name": "Acolyte Rhen",
    "characteristics": {
        "toughness": { "base": 38, "advance": 5, "cost": "250" },
        "agility": { "base": 36, "advance": 5, "cost": "not a number" },
        "strength": { "base": 32 }
    },
    "skills": {
        "dodge": {
            "characteristics": ["Ag"],
            "advance": 10,
            "aptitudes": ["Agility", "Defence"],
            "cost": 300
        }
    },
    "items": [
        {
            "id": "flak",
            "name": "Flak vest",
            "flags": "ARMOUR | EQUIPPED",
            "weight": 5.0,
            "quantity": 1,
            "armour": { "body": 4 }
        },
        { "id": "apt-ag", "name": "Agility", "flags": "APTITUDE" }
    ],
    "wounds": { "value": 3, "critical": 0, "max": 12 },
    "experience": { "value": 1500, "spentOther": "100" }
}"#;

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn actor_json_loads_with_lenient_costs() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "rhen.json", ACTOR_JSON);

    let sheet = ActorLoader::load(&path).unwrap();

    assert_eq!(sheet.name, "Acolyte Rhen");
    assert_eq!(sheet.characteristics.len(), 3);
    let toughness = sheet
        .characteristics
        .get(CharacteristicKind::Toughness)
        .unwrap();
    assert_eq!(toughness.cost, 250);
    let agility = sheet
        .characteristics
        .get(CharacteristicKind::Agility)
        .unwrap();
    assert_eq!(agility.cost, 0);
    assert_eq!(sheet.experience.spent_other, 100);
    assert_eq!(sheet.size, 4);
    assert!(sheet.items[0].is_worn_armour());
    assert!(sheet.items[1].is_aptitude());
}

#[test]
fn loaded_actor_recomputes() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "rhen.json", ACTOR_JSON);
    let mut sheet = ActorLoader::load(&path).unwrap();

    let factory = ContentFactory::new(dir.path());
    let rules = factory.load_rules().unwrap();
    let report = sheet.recompute(&rules, rules.hit_locations(), rules.experience_mode());

    assert!(report.is_clean());
    // Short codes are filled in from the kind when the record omits them
    assert_eq!(sheet.characteristics.bonus(CharacteristicKind::Toughness), 4);
    assert_eq!(sheet.skills["dodge"].total, 51);
    assert_eq!(sheet.armour.body.total, 8);
}

#[test]
fn string_item_numbers_degrade_instead_of_failing() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "scav.json",
        r#"{
            "name": "Scavenger",
            "items": [
                {
                    "id": "vest",
                    "flags": "ARMOUR | EQUIPPED",
                    "weight": "3.5",
                    "quantity": "2",
                    "armour": { "body": "4", "head": "none" }
                }
            ]
        }"#,
    );

    let mut sheet = ActorLoader::load(&path).unwrap();
    assert_eq!(sheet.items[0].armour["body"], 4);
    assert_eq!(sheet.items[0].armour["head"], 0);

    let rules = ContentFactory::new(dir.path()).load_rules().unwrap();
    sheet.recompute(&rules, rules.hit_locations(), rules.experience_mode());
    assert_eq!(sheet.armour.body.value, 4);
    assert_eq!(sheet.encumbrance.value, 7.0);
}

#[test]
fn actor_ron_loads_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "vail.ron",
        r#"(
            name: "Interrogator Vail",
            characteristics: {
                willpower: (base: 45, advance: 10),
            },
            psy: (rating: 3, sustained: 1),
        )"#,
    );

    let sheet = ActorLoader::load(&path).unwrap();
    assert_eq!(sheet.name, "Interrogator Vail");
    assert_eq!(sheet.psy.rating, 3);
    assert_eq!(
        sheet
            .characteristics
            .get(CharacteristicKind::Willpower)
            .unwrap()
            .advance,
        10
    );
}

#[test]
fn malformed_actor_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "broken.json", "{ \"name\": ");

    let err = ActorLoader::load(&path).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("broken.json"));
    assert!(message.contains("actor sheet JSON"));
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ActorLoader::load(&dir.path().join("nobody.json")).unwrap_err();
    assert!(err.to_string().contains("Failed to read file"));
}

#[test]
fn damage_batch_accepts_lenient_numbers() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "hits.json",
        r#"[
            { "amount": "12", "location": "ARMOUR.BODY", "penetration": 2, "type": "I" },
            { "amount": 7, "location": "ARMOUR.HEAD", "righteousFury": "x" }
        ]"#,
    );

    let events = DamageLoader::load(&path).unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].amount, 12);
    assert_eq!(events[0].damage_type, "I");
    assert_eq!(events[1].righteous_fury, 0);
}

#[test]
fn single_damage_event_reads_as_a_batch_of_one() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "hit.ron",
        r#"(amount: 9, location: "body", righteousFury: 4)"#,
    );

    let events = DamageLoader::load(&path).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].righteous_fury, 4);
}

#[test]
fn factory_loads_rules_and_sorted_actors() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "rules.toml",
        "autoXpCosts = false\nhitLocations = [\"body\"]\n",
    );
    fs::create_dir(dir.path().join("actors")).unwrap();
    write(&dir.path().join("actors"), "zed.json", r#"{ "name": "Zed" }"#);
    write(&dir.path().join("actors"), "abel.ron", r#"(name: "Abel")"#);
    write(&dir.path().join("actors"), "notes.txt", "ignored");

    let factory = ContentFactory::new(dir.path());
    let rules = factory.load_rules().unwrap();
    assert_eq!(rules.experience_mode(), ExperienceMode::Manual);
    assert_eq!(rules.hit_locations(), &[HitLocation::Body]);

    let actors = factory.load_actors().unwrap();
    let ids: Vec<_> = actors.iter().map(|(id, _)| id.as_str()).collect();
    assert_eq!(ids, ["abel", "zed"]);
    assert_eq!(actors[0].1.name, "Abel");
}

#[test]
fn damage_outcome_serializes_with_host_labels() {
    let dir = tempfile::tempdir().unwrap();
    let actor = write(dir.path(), "rhen.json", ACTOR_JSON);
    let hits = write(
        dir.path(),
        "hits.json",
        r#"[{ "amount": 30, "location": "ARMOUR.BODY", "type": "R" }]"#,
    );

    let mut sheet = ActorLoader::load(&actor).unwrap();
    let rules = ContentFactory::new(dir.path()).load_rules().unwrap();
    sheet.recompute(&rules, rules.hit_locations(), rules.experience_mode());
    let outcome = sheet.apply_damage(&DamageLoader::load(&hits).unwrap());

    assert_eq!(outcome.log[1].source, DamageSource::Critical);
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["log"][1]["source"], "Critical");
    assert_eq!(json["log"][1]["type"], "R");
    assert_eq!(json["wounds"]["max"], 12);
}
