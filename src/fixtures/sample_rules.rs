use super::addressed;
use crate::domain::model::{CellValue, FixtureKind, FixtureSpec, TableLayout};

use CellValue::Number;

fn text(value: &str) -> CellValue {
    CellValue::from(value)
}

/// Plain rule table starting at A1, with numeric thresholds and rates.
pub fn sample_rules_flat() -> FixtureSpec {
    let cells = vec![
        ("A1", text("NAME")),
        ("B1", text("CONDITION")),
        ("C1", text("CONDITION")),
        ("D1", text("ACTION")),
        ("B2", text("customer.getAge() >= $param")),
        ("C2", text("customer.getAge() < $param")),
        ("D2", text("customer.setDiscount($param)")),
        ("A3", text("YoungAdultRule")),
        ("B3", Number(18.0)),
        ("C3", Number(26.0)),
        ("D3", Number(0.05)),
        ("A4", text("SeniorRule")),
        ("B4", Number(65.0)),
        ("C4", Number(120.0)),
        ("D4", Number(0.15)),
        ("A5", text("PremiumRule")),
        ("B5", Number(26.0)),
        ("C5", Number(65.0)),
        ("D5", Number(0.10)),
    ];

    FixtureSpec {
        kind: FixtureKind::SampleRulesFlat,
        file_name: "SampleRules_flat.xlsx",
        sheet_name: None,
        description: "Flat age-band discount rule table",
        header_row: 0,
        layout: TableLayout::Addressed(addressed(cells)),
    }
}

/// RuleSet metadata block followed by a nested rule table at row 7.
///
/// Rates are kept as text so `0.10` survives verbatim.
pub fn sample_rules() -> FixtureSpec {
    let cells = vec![
        ("A1", text("RuleSet")),
        ("B1", text("CustomerRules")),
        ("A2", text("Import")),
        ("B2", text("com.example.model.Customer")),
        ("A3", text("Variables")),
        ("B3", text("com.example.model.Customer customer")),
        ("A4", text("Sequential")),
        ("B4", text("true")),
        ("A6", text("RuleTable CustomerDiscounts")),
        ("A7", text("NAME")),
        ("B7", text("CONDITION")),
        ("C7", text("CONDITION")),
        ("D7", text("ACTION")),
        ("B8", text("customer.getAge() >= $param")),
        ("C8", text("customer.getAge() < $param")),
        ("D8", text("customer.setDiscount($param)")),
        ("A9", text("YoungAdultRule")),
        ("B9", text("18")),
        ("C9", text("26")),
        ("D9", text("0.05")),
        ("A10", text("SeniorRule")),
        ("B10", text("65")),
        ("C10", text("120")),
        ("D10", text("0.15")),
        ("A11", text("PremiumRule")),
        ("B11", text("26")),
        ("C11", text("65")),
        ("D11", text("0.10")),
    ];

    FixtureSpec {
        kind: FixtureKind::SampleRules,
        file_name: "SampleRules.xlsx",
        sheet_name: None,
        description: "RuleSet metadata with a nested age-band discount rule table",
        header_row: 6,
        layout: TableLayout::Addressed(addressed(cells)),
    }
}
