use super::text_rows;
use crate::domain::model::{FixtureKind, FixtureSpec, TableLayout};

const HEADERS: [&str; 4] = ["NAME", "CONDITION-1", "CONDITION-2", "ACTION-1"];

const TEMPLATES: [&str; 4] = [
    "",
    "product.category == \"$1\"",
    "order.quantity >= $2",
    "shipping.setFree($1)",
];

const DATA_ROWS: [[&str; 4]; 4] = [
    ["Electronics Free Shipping", "ELECTRONICS", "100", "true"],
    ["Books Free Shipping", "BOOKS", "50", "true"],
    ["Clothing Bulk Order", "CLOTHING", "200", "true"],
    ["Home & Garden", "HOME", "150", "true"],
];

pub fn product_shipping() -> FixtureSpec {
    let mut rows = text_rows(&[&HEADERS[..], &TEMPLATES[..]]);
    rows.extend(text_rows(&DATA_ROWS.iter().map(|r| &r[..]).collect::<Vec<_>>()));

    FixtureSpec {
        kind: FixtureKind::ProductShipping,
        file_name: "product_shipping_rules.xlsx",
        sheet_name: Some("ProductRules"),
        description: "Product free-shipping rule table (4 columns, 4 rules)",
        header_row: 0,
        layout: TableLayout::Rows(rows),
    }
}
