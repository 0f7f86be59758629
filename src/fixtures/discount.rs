use super::text_rows;
use crate::domain::model::{FixtureKind, FixtureSpec, TableLayout};

const HEADERS: [&str; 5] = ["NAME", "CONDITION-1", "CONDITION-2", "ACTION-1", "ACTION-2"];

const TEMPLATES: [&str; 5] = [
    "",
    "customer.age >= $1",
    "customer.category == \"$2\"",
    "discount.setPercentage($1)",
    "discount.setReason(\"$2\")",
];

const DATA_ROWS: [[&str; 5]; 5] = [
    ["Senior Discount", "65", "SENIOR", "15", "Senior citizen discount"],
    ["Student Discount", "18", "STUDENT", "10", "Student discount"],
    ["Premium Customer", "25", "PREMIUM", "20", "Premium customer discount"],
    ["Regular Customer", "18", "REGULAR", "5", "Regular customer discount"],
    ["VIP Customer", "21", "VIP", "25", "VIP customer discount"],
];

pub fn customer_discount() -> FixtureSpec {
    let mut rows = text_rows(&[&HEADERS[..], &TEMPLATES[..]]);
    rows.extend(text_rows(&DATA_ROWS.iter().map(|r| &r[..]).collect::<Vec<_>>()));

    FixtureSpec {
        kind: FixtureKind::CustomerDiscount,
        file_name: "customer_discount_rules.xlsx",
        sheet_name: Some("DecisionTable"),
        description: "Customer discount decision table (5 columns, 5 rules)",
        header_row: 0,
        layout: TableLayout::Rows(rows),
    }
}
