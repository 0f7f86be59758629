use crate::domain::model::SheetGrid;
use crate::utils::error::Result;
use std::path::PathBuf;

/// Destination for finished sheets.
pub trait WorkbookSink {
    /// Writes `grid` as a single-sheet workbook named `file_name` and returns the
    /// path it was written to. Any existing file at that path is replaced.
    fn write_workbook(
        &self,
        file_name: &str,
        sheet_name: Option<&str>,
        grid: &SheetGrid,
    ) -> Result<PathBuf>;

    /// `false` for sinks that only resolve paths.
    fn writes_files(&self) -> bool {
        true
    }
}
