//! Tests for TOML variant files.

use std::io::Write;
use strictly_rps::{ConfigurationError, Engine, Variant, VariantConfig};

const LIZARD_SPOCK_FROM_CLASSIC: &str = r#"
extends = "classic"

[[moves]]
name = "scissors"
shortcut = "SC"

[[moves]]
name = "Lizard"
beats = [{ move = "spock", verb = "poisons" }, { move = "paper", verb = "eats" }]
loses_to = [{ move = "scissors", verb = "decapitates" }, { move = "rock", verb = "crushes" }]

[[moves]]
name = "Spock"
shortcut = "SP"
beats = [{ move = "scissors", verb = "smashes" }, { move = "rock", verb = "vaporizes" }]
loses_to = [{ move = "paper", verb = "disproves" }]
"#;

#[test]
fn test_file_extension_matches_preset() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(LIZARD_SPOCK_FROM_CLASSIC.as_bytes()).unwrap();

    let built = VariantConfig::from_file(file.path()).unwrap().build().unwrap();
    assert_eq!(built, Variant::LizardSpock.catalog().unwrap());
}

#[test]
fn test_missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = VariantConfig::from_file(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigurationError::Read(_))));
}

#[test]
fn test_new_move_without_rules_is_incomplete() {
    let config = VariantConfig::from_toml_str(
        r#"
        extends = "classic"

        [[moves]]
        name = "dynamite"
        "#,
    )
    .unwrap();
    assert!(matches!(
        config.build(),
        Err(ConfigurationError::Incomplete { .. })
    ));
}

#[test]
fn test_contradiction_within_file_is_rejected() {
    let config = VariantConfig::from_toml_str(
        r#"
        [[moves]]
        name = "fire"
        beats = [{ move = "water" }]

        [[moves]]
        name = "water"
        beats = [{ move = "fire" }]
        "#,
    )
    .unwrap();
    assert!(matches!(
        config.build(),
        Err(ConfigurationError::Contradiction { .. })
    ));
}

#[test]
fn test_standalone_file_uses_default_verb() {
    let config = VariantConfig::from_toml_str(
        r#"
        [[moves]]
        name = "fire"
        beats = [{ move = "grass" }]

        [[moves]]
        name = "water"
        shortcut = "A"
        beats = [{ move = "fire", verb = "douses" }]

        [[moves]]
        name = "grass"
        beats = [{ move = "water", verb = "drinks" }]
        "#,
    )
    .unwrap();
    let catalog = config.build().unwrap();
    let fire = catalog.find("fire").unwrap();
    let grass = catalog.find("grass").unwrap();
    assert_eq!(catalog.verb(fire, grass), Some("beats"));
    assert_eq!(catalog.parse("a").unwrap(), catalog.find("water").unwrap());
}

#[test]
fn test_removing_a_preset_move() {
    let config = VariantConfig::new(Some(Variant::LizardSpock), vec!["Spock".to_string()], vec![]);
    let engine = Engine::new(config.build().unwrap());
    assert_eq!(engine.catalog().len(), 4);
    assert!(engine.catalog().find("spock").is_none());
}

#[test]
fn test_exported_catalog_rebuilds_identically() {
    let catalog = Variant::LizardSpock.catalog().unwrap();
    let text = VariantConfig::from_catalog(&catalog).to_toml().unwrap();
    assert!(text.contains("name = \"lizard\""));

    let rebuilt = VariantConfig::from_toml_str(&text).unwrap().build().unwrap();
    assert_eq!(rebuilt, catalog);
}
