// Adapters layer: concrete sinks for finished sheets.

pub mod xlsx;

pub use xlsx::{DryRunStorage, XlsxStorage};
