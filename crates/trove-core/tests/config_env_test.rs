use serial_test::serial;
use std::fs;
use tempfile::TempDir;
use trove_core::constants::vocabulary;
use trove_core::{StoreConfig, TripleStore};

const OVERRIDES: [&str; 5] = [
    "TROVE_CONFIG_PATH",
    "TROVE_INSTANCE_OF_PREDICATE",
    "TROVE_SUBCLASS_OF_PREDICATE",
    "TROVE_CAPACITY_HINT",
    "TROVE_STRICT_LOADING",
];

fn clear_overrides() {
    // SAFETY: every test touching the environment is #[serial], so no other thread reads it
    // concurrently.
    unsafe {
        for key in OVERRIDES {
            std::env::remove_var(key);
        }
    }
}

#[test]
#[serial]
fn test_missing_config_file_uses_defaults() {
    clear_overrides();
    let dir = TempDir::new().unwrap();
    // SAFETY: see clear_overrides.
    unsafe {
        std::env::set_var("TROVE_CONFIG_PATH", dir.path().join("absent.toml"));
    }

    let config = StoreConfig::load().unwrap();
    assert_eq!(config, StoreConfig::default());
    clear_overrides();
}

#[test]
#[serial]
fn test_config_file_from_environment_path() {
    clear_overrides();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("trove.toml");
    fs::write(
        &path,
        "[vocabulary]\ninstance_of = \"a\"\nsubclass_of = \"isA\"\n\n[loading]\ncapacity_hint = 64\n",
    )
    .unwrap();
    // SAFETY: see clear_overrides.
    unsafe {
        std::env::set_var("TROVE_CONFIG_PATH", &path);
    }

    let config = StoreConfig::load().unwrap();
    assert_eq!(config.vocabulary.instance_of, "a");
    assert_eq!(config.vocabulary.subclass_of, "isA");
    assert_eq!(config.loading.capacity_hint, 64);
    assert!(!config.loading.strict);

    let store =
        TripleStore::from_statements_with_config([("x", "a", "C"), ("C", "isA", "D")], &config)
            .unwrap();
    assert_eq!(store.classes_of("x"), vec!["C", "D"]);
    clear_overrides();
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_overrides();
    // SAFETY: see clear_overrides.
    unsafe {
        std::env::set_var("TROVE_INSTANCE_OF_PREDICATE", "type");
        std::env::set_var("TROVE_CAPACITY_HINT", "1000");
        std::env::set_var("TROVE_STRICT_LOADING", "true");
    }

    let config = StoreConfig::default().apply_env_overrides().unwrap();
    assert_eq!(config.vocabulary.instance_of, "type");
    assert_eq!(config.vocabulary.subclass_of, vocabulary::RDFS_SUB_CLASS_OF);
    assert_eq!(config.loading.capacity_hint, 1000);
    assert!(config.loading.strict);
    clear_overrides();
}

#[test]
#[serial]
fn test_unparsable_overrides_are_ignored() {
    clear_overrides();
    // SAFETY: see clear_overrides.
    unsafe {
        std::env::set_var("TROVE_CAPACITY_HINT", "lots");
        std::env::set_var("TROVE_STRICT_LOADING", "maybe");
    }

    let config = StoreConfig::default().apply_env_overrides().unwrap();
    assert_eq!(config, StoreConfig::default());
    clear_overrides();
}

#[test]
#[serial]
fn test_override_colliding_with_subclass_predicate_is_rejected() {
    clear_overrides();
    // SAFETY: see clear_overrides.
    unsafe {
        std::env::set_var("TROVE_INSTANCE_OF_PREDICATE", vocabulary::RDFS_SUB_CLASS_OF);
    }

    let err = StoreConfig::default().apply_env_overrides().unwrap_err();
    assert_eq!(err.category(), "configuration");
    clear_overrides();

    let mut config = StoreConfig::default();
    config.vocabulary.instance_of = vocabulary::RDFS_SUB_CLASS_OF.to_string();
    let statements = [
        ("x", vocabulary::RDF_TYPE, "A"),
        ("A", vocabulary::RDFS_SUB_CLASS_OF, "B"),
    ];
    assert!(TripleStore::from_statements_with_config(statements, &config).is_err());
}

#[test]
#[serial]
fn test_invalid_config_file_is_rejected() {
    clear_overrides();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("trove.toml");
    fs::write(&path, "[vocabulary]\ninstance_of = \"same\"\nsubclass_of = \"same\"\n").unwrap();

    let err = StoreConfig::from_path(&path).unwrap_err();
    assert_eq!(err.category(), "configuration");
    assert!(!err.is_recoverable());
}
