pub mod generator;
pub mod report;

pub use crate::domain::model::{FixtureKind, GeneratedFixture};
pub use crate::domain::ports::WorkbookSink;
pub use crate::utils::error::Result;
