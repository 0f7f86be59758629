//! Built-in rule-table fixtures.
//!
//! Every layout is a fixed set of literals. Template cells carry placeholder
//! tokens (`$1`, `$2`, `$param`) that are written as-is for the rule tool to
//! expand later.

pub mod discount;
pub mod sample_rules;
pub mod shipping;

use crate::domain::model::{CellValue, FixtureInfo, FixtureKind, FixtureSpec, SheetGrid};
use crate::utils::error::{FixtureError, Result};
use crate::utils::validation::{validate_file_name, Validate};

pub(crate) fn text_rows(rows: &[&[&str]]) -> Vec<Vec<CellValue>> {
    rows.iter()
        .map(|row| row.iter().map(|&value| CellValue::from(value)).collect())
        .collect()
}

pub(crate) fn addressed(cells: Vec<(&str, CellValue)>) -> Vec<(String, CellValue)> {
    cells
        .into_iter()
        .map(|(reference, value)| (reference.to_string(), value))
        .collect()
}

impl FixtureKind {
    pub fn spec(&self) -> FixtureSpec {
        match self {
            FixtureKind::CustomerDiscount => discount::customer_discount(),
            FixtureKind::ProductShipping => shipping::product_shipping(),
            FixtureKind::SampleRulesFlat => sample_rules::sample_rules_flat(),
            FixtureKind::SampleRules => sample_rules::sample_rules(),
        }
    }
}

pub fn catalogue() -> Vec<FixtureInfo> {
    FixtureKind::ALL
        .iter()
        .map(|kind| FixtureInfo::from(&kind.spec()))
        .collect()
}

impl FixtureSpec {
    pub fn grid(&self) -> Result<SheetGrid> {
        SheetGrid::from_layout(&self.layout)
    }

    pub fn template_row(&self) -> u32 {
        self.header_row + 1
    }

    pub fn data_row_count(&self, grid: &SheetGrid) -> u32 {
        let (rows, _) = grid.dimensions();
        rows.saturating_sub(self.header_row + 2)
    }

    fn layout_error(&self, message: impl Into<String>) -> FixtureError {
        FixtureError::LayoutError {
            fixture: self.kind.to_string(),
            message: message.into(),
        }
    }

    /// The rule tool finds the table by a `NAME` cell in column A, reads the
    /// template row right below it, then one rule per named row.
    pub fn check_table_shape(&self, grid: &SheetGrid) -> Result<()> {
        let header = grid.row(self.header_row);
        if header.first().and_then(CellValue::as_text) != Some("NAME") {
            return Err(self.layout_error(format!(
                "row {} must start with a NAME header",
                self.header_row + 1
            )));
        }
        if header.iter().any(CellValue::is_empty) {
            return Err(self.layout_error("header row has gaps"));
        }
        let width = header.len();

        let template = grid.row(self.template_row());
        if template.is_empty() {
            return Err(self.layout_error("template row is missing"));
        }
        if template.len() > width {
            return Err(self.layout_error("template row is wider than the header"));
        }

        let data_rows = self.data_row_count(grid);
        if data_rows == 0 {
            return Err(self.layout_error("no data rows"));
        }

        let first_data_row = self.header_row + 2;
        for row in first_data_row..first_data_row + data_rows {
            let values = grid.row(row);
            if values.len() > width {
                return Err(self.layout_error(format!(
                    "row {} is wider than the header",
                    row + 1
                )));
            }
            if values.first().map_or(true, CellValue::is_empty) {
                return Err(self.layout_error(format!("row {} has no rule name", row + 1)));
            }
        }

        Ok(())
    }
}

impl Validate for FixtureSpec {
    fn validate(&self) -> Result<()> {
        validate_file_name("file_name", self.file_name, "xlsx")?;
        let grid = self.grid()?;
        self.check_table_shape(&grid)
    }
}
