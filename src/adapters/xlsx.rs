use crate::domain::model::{CellValue, SheetGrid};
use crate::domain::ports::WorkbookSink;
use crate::utils::error::Result;
use rust_xlsxwriter::{DocProperties, ExcelDateTime, Workbook};
use std::fs;
use std::path::PathBuf;

/// Fixed so repeated runs produce byte-identical workbooks.
const CREATED_AT: (u16, u8, u8) = (2024, 1, 1);

/// Writes workbooks under a base directory, creating it on first use.
#[derive(Debug, Clone)]
pub struct XlsxStorage {
    base_dir: PathBuf,
}

impl XlsxStorage {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

fn fixed_properties() -> Result<DocProperties> {
    let (year, month, day) = CREATED_AT;
    let created = ExcelDateTime::from_ymd(year, month, day)?;
    Ok(DocProperties::new().set_creation_datetime(&created))
}

impl WorkbookSink for XlsxStorage {
    fn write_workbook(
        &self,
        file_name: &str,
        sheet_name: Option<&str>,
        grid: &SheetGrid,
    ) -> Result<PathBuf> {
        // 已存在時不報錯
        fs::create_dir_all(&self.base_dir)?;
        let full_path = self.base_dir.join(file_name);

        let mut workbook = Workbook::new();
        workbook.set_properties(&fixed_properties()?);

        let worksheet = workbook.add_worksheet();
        if let Some(name) = sheet_name {
            worksheet.set_name(name)?;
        }

        for (cell, value) in grid.cells() {
            match value {
                CellValue::Text(text) => {
                    worksheet.write_string(cell.row, cell.col, text.as_str())?;
                }
                CellValue::Number(number) => {
                    worksheet.write_number(cell.row, cell.col, *number)?;
                }
                CellValue::Empty => {}
            }
        }

        workbook.save(&full_path)?;
        tracing::debug!(
            "Wrote {} cells to {}",
            grid.len(),
            full_path.display()
        );

        Ok(full_path)
    }
}

/// Resolves output paths without touching the filesystem.
#[derive(Debug, Clone)]
pub struct DryRunStorage {
    base_dir: PathBuf,
}

impl DryRunStorage {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

impl WorkbookSink for DryRunStorage {
    fn write_workbook(
        &self,
        file_name: &str,
        sheet_name: Option<&str>,
        grid: &SheetGrid,
    ) -> Result<PathBuf> {
        let full_path = self.base_dir.join(file_name);
        tracing::info!(
            "🔍 Would write {} cells to {} (sheet: {})",
            grid.len(),
            full_path.display(),
            sheet_name.unwrap_or("default")
        );
        Ok(full_path)
    }

    fn writes_files(&self) -> bool {
        false
    }
}
