#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::domain::model::FixtureKind;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_list, validate_path, Validate};
use std::path::PathBuf;
use toml_config::TomlConfig;

pub const DEFAULT_OUTPUT_DIR: &str = "rules";

/// Fully resolved run settings after defaults, TOML and CLI flags are layered.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorSettings {
    pub output_dir: PathBuf,
    pub fixtures: Vec<FixtureKind>,
    pub dry_run: bool,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            fixtures: FixtureKind::ALL.to_vec(),
            dry_run: false,
        }
    }
}

impl GeneratorSettings {
    pub fn apply_toml(mut self, config: &TomlConfig) -> Self {
        if let Some(dir) = config.output_dir() {
            self.output_dir = PathBuf::from(dir);
        }
        if let Some(enabled) = config.enabled_fixtures() {
            self = self.with_fixtures(enabled);
        }
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Duplicates are dropped; first occurrence wins the position.
    pub fn with_fixtures(mut self, fixtures: &[FixtureKind]) -> Self {
        let mut selected = Vec::with_capacity(fixtures.len());
        for &kind in fixtures {
            if !selected.contains(&kind) {
                selected.push(kind);
            }
        }
        self.fixtures = selected;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

impl Validate for GeneratorSettings {
    fn validate(&self) -> Result<()> {
        validate_path("output_dir", &self.output_dir.to_string_lossy())?;
        validate_non_empty_list("fixtures", &self.fixtures)
    }
}
