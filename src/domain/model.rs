use crate::utils::error::{FixtureError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Largest row/column index a worksheet accepts (zero-based).
pub const MAX_ROW: u32 = 1_048_575;
pub const MAX_COL: u16 = 16_383;

/// The fixtures this crate knows how to write, in the order they are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum FixtureKind {
    CustomerDiscount,
    ProductShipping,
    SampleRulesFlat,
    SampleRules,
}

impl FixtureKind {
    pub const ALL: [FixtureKind; 4] = [
        FixtureKind::CustomerDiscount,
        FixtureKind::ProductShipping,
        FixtureKind::SampleRulesFlat,
        FixtureKind::SampleRules,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FixtureKind::CustomerDiscount => "customer-discount",
            FixtureKind::ProductShipping => "product-shipping",
            FixtureKind::SampleRulesFlat => "sample-rules-flat",
            FixtureKind::SampleRules => "sample-rules",
        }
    }
}

impl fmt::Display for FixtureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Empty,
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            CellValue::Number(_) => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// `""` stays an explicit empty-string cell; use `CellValue::Empty` for no cell.
impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

/// Zero-based cell coordinate parsed from an A1-style reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CellRef {
    pub row: u32,
    pub col: u16,
}

fn cell_ref_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^([A-Z]{1,3})([1-9][0-9]{0,6})$").unwrap())
}

impl CellRef {
    pub fn new(row: u32, col: u16) -> Self {
        Self { row, col }
    }

    pub fn parse(reference: &str) -> Result<Self> {
        let invalid = || FixtureError::InvalidCellRef {
            reference: reference.to_string(),
        };

        let caps = cell_ref_pattern()
            .captures(reference.trim())
            .ok_or_else(invalid)?;

        let col = caps[1]
            .bytes()
            .fold(0u32, |acc, b| acc * 26 + u32::from(b - b'A' + 1))
            - 1;
        let row: u32 = caps[2].parse().map_err(|_| invalid())?;
        let row = row - 1;

        if row > MAX_ROW || col > u32::from(MAX_COL) {
            return Err(invalid());
        }

        Ok(Self {
            row,
            col: col as u16,
        })
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut letters = Vec::new();
        let mut n = u32::from(self.col) + 1;
        while n > 0 {
            let rem = (n - 1) % 26;
            letters.push(char::from(b'A' + rem as u8));
            n = (n - 1) / 26;
        }
        let column: String = letters.into_iter().rev().collect();
        write!(f, "{}{}", column, self.row + 1)
    }
}

/// How a layout's literals are placed on the sheet.
#[derive(Debug, Clone, PartialEq)]
pub enum TableLayout {
    /// Row-major literals written from A1 onwards, one column per value.
    Rows(Vec<Vec<CellValue>>),
    /// Literals assigned to explicit A1-style references.
    Addressed(Vec<(String, CellValue)>),
}

/// Sparse grid of assigned cells, keyed by zero-based `(row, col)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetGrid {
    cells: BTreeMap<(u32, u16), CellValue>,
}

impl SheetGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_layout(layout: &TableLayout) -> Result<Self> {
        let mut grid = Self::new();
        match layout {
            TableLayout::Rows(rows) => {
                for (row_idx, row) in rows.iter().enumerate() {
                    for (col_idx, value) in row.iter().enumerate() {
                        let cell = CellRef::new(row_idx as u32, col_idx as u16);
                        grid.set(cell, value.clone());
                    }
                }
            }
            TableLayout::Addressed(cells) => {
                for (reference, value) in cells {
                    grid.set(CellRef::parse(reference)?, value.clone());
                }
            }
        }
        Ok(grid)
    }

    /// `Empty` clears the cell. An empty-string `Text` is kept and written.
    pub fn set(&mut self, cell: CellRef, value: CellValue) {
        if value == CellValue::Empty {
            self.cells.remove(&(cell.row, cell.col));
        } else {
            self.cells.insert((cell.row, cell.col), value);
        }
    }

    pub fn get(&self, row: u32, col: u16) -> Option<&CellValue> {
        self.cells.get(&(row, col))
    }

    pub fn get_ref(&self, reference: &str) -> Result<Option<&CellValue>> {
        let cell = CellRef::parse(reference)?;
        Ok(self.get(cell.row, cell.col))
    }

    pub fn cells(&self) -> impl Iterator<Item = (CellRef, &CellValue)> {
        self.cells
            .iter()
            .map(|(&(row, col), value)| (CellRef::new(row, col), value))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// `(rows, columns)` spanned from A1 to the last used cell.
    pub fn dimensions(&self) -> (u32, u16) {
        let rows = self.cells.keys().map(|&(r, _)| r + 1).max().unwrap_or(0);
        let cols = self.cells.keys().map(|&(_, c)| c + 1).max().unwrap_or(0);
        (rows, cols)
    }

    /// Cells of one row, padded with `Empty` up to the last used column of that row.
    pub fn row(&self, row: u32) -> Vec<CellValue> {
        let width = self
            .cells
            .range((row, 0)..=(row, MAX_COL))
            .map(|(&(_, c), _)| c + 1)
            .max()
            .unwrap_or(0);
        (0..width)
            .map(|col| self.get(row, col).cloned().unwrap_or(CellValue::Empty))
            .collect()
    }

    /// Placeholder tokens (`$1`, `$param`) found in one row, in column order.
    pub fn placeholders(&self, row: u32) -> Vec<String> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let pattern =
            PATTERN.get_or_init(|| Regex::new(r"\$([0-9]+|[A-Za-z_][A-Za-z0-9_]*)").unwrap());

        self.cells
            .range((row, 0)..=(row, MAX_COL))
            .filter_map(|(_, value)| value.as_text())
            .flat_map(|text| pattern.find_iter(text).map(|m| m.as_str().to_string()))
            .collect()
    }
}

/// A fixture's full definition: where it goes and what it holds.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureSpec {
    pub kind: FixtureKind,
    pub file_name: &'static str,
    /// `None` keeps the writer's default sheet name.
    pub sheet_name: Option<&'static str>,
    pub description: &'static str,
    /// Zero-based row holding the `NAME` header.
    pub header_row: u32,
    pub layout: TableLayout,
}

/// Catalogue entry printed by `--list`.
#[derive(Debug, Clone, Serialize)]
pub struct FixtureInfo {
    pub kind: FixtureKind,
    pub file_name: String,
    pub sheet_name: Option<String>,
    pub description: String,
}

impl From<&FixtureSpec> for FixtureInfo {
    fn from(spec: &FixtureSpec) -> Self {
        Self {
            kind: spec.kind,
            file_name: spec.file_name.to_string(),
            sheet_name: spec.sheet_name.map(str::to_string),
            description: spec.description.to_string(),
        }
    }
}

/// What one `generate_and_write` call produced.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedFixture {
    pub kind: FixtureKind,
    pub path: PathBuf,
    /// `false` when the sink only resolved the path (dry run).
    pub written: bool,
    pub rows: u32,
    pub columns: u16,
    pub data_rows: u32,
    pub placeholders: Vec<String>,
}
