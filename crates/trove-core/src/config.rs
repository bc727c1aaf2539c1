//! Store configuration
//!
//! Read from a TOML file (`trove.toml` unless `TROVE_CONFIG_PATH` says otherwise) and
//! optionally overridden from the environment:
//!
//! ```toml
//! [vocabulary]
//! instance_of = "<http://www.w3.org/1999/02/22-rdf-syntax-ns#type>"
//! subclass_of = "<http://www.w3.org/2000/01/rdf-schema#subClassOf>"
//!
//! [loading]
//! capacity_hint = 100000
//! strict = false
//! ```

use crate::constants::{config as sources, vocabulary};
use crate::error::{ResultExt, TroveError, TroveResult};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{info, warn};

/// Predicates the taxonomy reasoner treats specially
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VocabularyConfig {
    #[serde(default = "default_instance_of")]
    pub instance_of: String,
    #[serde(default = "default_subclass_of")]
    pub subclass_of: String,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self { instance_of: default_instance_of(), subclass_of: default_subclass_of() }
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadingConfig {
    /// Expected number of statements, used to pre-size tables
    #[serde(default)]
    pub capacity_hint: usize,
    /// Abort a load on lines with fewer than three terms instead of skipping them
    #[serde(default)]
    pub strict: bool,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreConfig {
    #[serde(default)]
    pub vocabulary: VocabularyConfig,
    #[serde(default)]
    pub loading: LoadingConfig,
}

impl StoreConfig {
    /// Configuration with custom distinguished predicates and default loading settings
    pub fn with_vocabulary(instance_of: impl Into<String>, subclass_of: impl Into<String>) -> Self {
        Self {
            vocabulary: VocabularyConfig {
                instance_of: instance_of.into(),
                subclass_of: subclass_of.into(),
            },
            loading: LoadingConfig::default(),
        }
    }

    /// Load the configuration file named by `TROVE_CONFIG_PATH` (default `trove.toml`).
    ///
    /// A missing file is not an error: defaults are used and a warning is logged.
    pub fn load() -> TroveResult<Self> {
        let config_path = std::env::var(sources::CONFIG_PATH_ENV)
            .unwrap_or_else(|_| sources::DEFAULT_CONFIG_PATH.to_string());

        match fs::read_to_string(&config_path) {
            Ok(config_str) => {
                info!(path = %config_path, "Loading store configuration");
                Self::from_toml_str(&config_str)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                warn!(
                    "Configuration file '{}' not found. Using default configuration.",
                    config_path
                );
                Ok(Self::default())
            }
            Err(err) => Err(TroveError::io(&config_path, &err)),
        }
    }

    /// Load configuration from an explicit file
    pub fn from_path(path: impl AsRef<Path>) -> TroveResult<Self> {
        let path = path.as_ref();
        let config_str = fs::read_to_string(path).map_err(|err| TroveError::io(path, &err))?;
        Self::from_toml_str(&config_str)
    }

    /// Parse and validate configuration text
    pub fn from_toml_str(config_str: &str) -> TroveResult<Self> {
        let config: Self = toml::from_str(config_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `TROVE_*` environment variable overrides and re-validate.
    ///
    /// Numeric and boolean values that fail to parse are ignored with a warning; overridden
    /// predicates that leave the vocabulary invalid are an error.
    pub fn apply_env_overrides(mut self) -> TroveResult<Self> {
        if let Ok(instance_of) = std::env::var(sources::INSTANCE_OF_ENV) {
            self.vocabulary.instance_of = instance_of;
        }
        if let Ok(subclass_of) = std::env::var(sources::SUBCLASS_OF_ENV) {
            self.vocabulary.subclass_of = subclass_of;
        }
        if let Ok(hint) = std::env::var(sources::CAPACITY_HINT_ENV) {
            match hint.parse::<usize>() {
                Ok(hint) => self.loading.capacity_hint = hint,
                Err(_) => warn!(value = %hint, variable = sources::CAPACITY_HINT_ENV, "Ignoring unparsable override"),
            }
        }
        if let Ok(strict) = std::env::var(sources::STRICT_LOADING_ENV) {
            match strict.parse::<bool>() {
                Ok(strict) => self.loading.strict = strict,
                Err(_) => warn!(value = %strict, variable = sources::STRICT_LOADING_ENV, "Ignoring unparsable override"),
            }
        }

        self.validate()?;
        Ok(self)
    }

    /// Reject settings the store cannot work with
    pub fn validate(&self) -> TroveResult<()> {
        check_predicate(&self.vocabulary.instance_of)
            .with_setting_context("vocabulary.instance_of")?;
        check_predicate(&self.vocabulary.subclass_of)
            .with_setting_context("vocabulary.subclass_of")?;

        if self.vocabulary.instance_of == self.vocabulary.subclass_of {
            return Err(TroveError::configuration(
                "vocabulary",
                "distinct instance-of and subclass-of predicates",
                &self.vocabulary.instance_of,
                "instance-of and subclass-of predicates must differ",
            ));
        }

        Ok(())
    }
}

fn check_predicate(predicate: &str) -> TroveResult<()> {
    if predicate.is_empty() || predicate.split_whitespace().count() != 1 {
        return Err(TroveError::configuration(
            "vocabulary",
            "a single non-empty term",
            predicate,
            "distinguished predicate must be a single term",
        ));
    }
    Ok(())
}

fn default_instance_of() -> String {
    vocabulary::RDF_TYPE.to_string()
}
fn default_subclass_of() -> String {
    vocabulary::RDFS_SUB_CLASS_OF.to_string()
}
