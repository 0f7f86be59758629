pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod fixtures;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{DryRunStorage, XlsxStorage};
pub use config::GeneratorSettings;
pub use core::generator::FixtureGenerator;
pub use domain::model::{CellValue, FixtureKind, GeneratedFixture};
pub use utils::error::{FixtureError, Result};
