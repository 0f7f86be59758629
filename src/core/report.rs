//! Console lines printed around a generation run.

use crate::domain::model::GeneratedFixture;
use std::path::Path;

pub const BANNER: &str = "Creating sample Drools decision tables...";

pub const CLOSING_NOTE: &str = "These files contain sample Drools decision tables that can be used to test the Rules Manager application.";

pub fn confirmation(path: &Path, written: bool) -> String {
    if written {
        format!("Created sample decision table: {}", path.display())
    } else {
        format!("Would create sample decision table: {}", path.display())
    }
}

/// Heading, numbered paths and closing note. The heading only claims files
/// were created when every fixture was actually written.
pub fn summary_lines(generated: &[GeneratedFixture]) -> Vec<String> {
    let all_written = generated.iter().all(|g| g.written);
    let heading = if all_written {
        "Sample files created:"
    } else {
        "Sample files that would be created (dry run):"
    };

    let mut lines = Vec::with_capacity(generated.len() + 3);
    lines.push(format!("\n{}", heading));
    for (i, fixture) in generated.iter().enumerate() {
        lines.push(format!("{}. {}", i + 1, fixture.path.display()));
    }
    if all_written {
        lines.push(format!("\n{}", CLOSING_NOTE));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::FixtureKind;
    use std::path::PathBuf;

    fn fixture(name: &str, written: bool) -> GeneratedFixture {
        GeneratedFixture {
            kind: FixtureKind::CustomerDiscount,
            path: PathBuf::from("rules").join(name),
            written,
            rows: 7,
            columns: 5,
            data_rows: 5,
            placeholders: vec![],
        }
    }

    #[test]
    fn test_confirmation_wording() {
        let path = Path::new("rules/customer_discount_rules.xlsx");
        assert_eq!(
            confirmation(path, true),
            "Created sample decision table: rules/customer_discount_rules.xlsx"
        );
        assert_eq!(
            confirmation(path, false),
            "Would create sample decision table: rules/customer_discount_rules.xlsx"
        );
    }

    #[test]
    fn test_summary_after_real_run() {
        let lines = summary_lines(&[fixture("a.xlsx", true), fixture("b.xlsx", true)]);

        assert_eq!(lines[0], "\nSample files created:");
        assert_eq!(lines[1], "1. rules/a.xlsx");
        assert_eq!(lines[2], "2. rules/b.xlsx");
        assert_eq!(lines[3], format!("\n{}", CLOSING_NOTE));
    }

    #[test]
    fn test_summary_after_dry_run_claims_nothing() {
        let lines = summary_lines(&[fixture("a.xlsx", false)]);

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("would be created"));
        assert!(lines.iter().all(|l| !l.contains("Sample files created")));
    }
}
