use crate::core::report::confirmation;
use crate::domain::model::{FixtureKind, GeneratedFixture};
use crate::domain::ports::WorkbookSink;
use crate::utils::error::Result;
use crate::utils::validation::Validate;

pub struct FixtureGenerator<S: WorkbookSink> {
    sink: S,
}

impl<S: WorkbookSink> FixtureGenerator<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Builds one fixture's grid and hands it to the sink. Placeholders in the
    /// template row are written untouched.
    pub fn generate_and_write(&self, kind: FixtureKind) -> Result<GeneratedFixture> {
        let spec = kind.spec();
        spec.validate()?;
        let grid = spec.grid()?;

        let path = self
            .sink
            .write_workbook(spec.file_name, spec.sheet_name, &grid)?;
        let written = self.sink.writes_files();
        println!("{}", confirmation(&path, written));

        let (rows, columns) = grid.dimensions();
        let generated = GeneratedFixture {
            kind,
            path,
            written,
            rows,
            columns,
            data_rows: spec.data_row_count(&grid),
            placeholders: grid.placeholders(spec.template_row()),
        };
        tracing::debug!(
            "{}: {}x{} grid, {} rules, placeholders {:?}",
            kind,
            generated.rows,
            generated.columns,
            generated.data_rows,
            generated.placeholders
        );

        Ok(generated)
    }

    /// Generates each kind in order, stopping at the first failure.
    pub fn run(&self, kinds: &[FixtureKind]) -> Result<Vec<GeneratedFixture>> {
        tracing::info!("Generating {} fixture(s)", kinds.len());

        let mut generated = Vec::with_capacity(kinds.len());
        for &kind in kinds {
            generated.push(self.generate_and_write(kind)?);
        }

        Ok(generated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::DryRunStorage;
    use crate::core::report::summary_lines;
    use crate::domain::model::SheetGrid;
    use crate::utils::error::FixtureError;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct MemorySink {
        written: RefCell<Vec<(String, Option<String>, SheetGrid)>>,
    }

    impl WorkbookSink for MemorySink {
        fn write_workbook(
            &self,
            file_name: &str,
            sheet_name: Option<&str>,
            grid: &SheetGrid,
        ) -> Result<PathBuf> {
            self.written.borrow_mut().push((
                file_name.to_string(),
                sheet_name.map(str::to_string),
                grid.clone(),
            ));
            Ok(PathBuf::from("mem").join(file_name))
        }
    }

    struct FailingSink;

    impl WorkbookSink for FailingSink {
        fn write_workbook(&self, _: &str, _: Option<&str>, _: &SheetGrid) -> Result<PathBuf> {
            Err(FixtureError::IoError(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only filesystem",
            )))
        }
    }

    #[test]
    fn test_generate_and_write_reports_shape() {
        let generator = FixtureGenerator::new(MemorySink::default());

        let generated = generator
            .generate_and_write(FixtureKind::CustomerDiscount)
            .unwrap();

        assert_eq!(generated.path, PathBuf::from("mem/customer_discount_rules.xlsx"));
        assert!(generated.written);
        assert_eq!((generated.rows, generated.columns), (7, 5));
        assert_eq!(generated.data_rows, 5);
        assert_eq!(generated.placeholders, vec!["$1", "$2", "$1", "$2"]);

        let written = generator.sink().written.borrow();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].1.as_deref(), Some("DecisionTable"));
    }

    #[test]
    fn test_run_keeps_order() {
        let generator = FixtureGenerator::new(MemorySink::default());

        let generated = generator.run(&FixtureKind::ALL).unwrap();

        let kinds: Vec<_> = generated.iter().map(|g| g.kind).collect();
        assert_eq!(kinds, FixtureKind::ALL.to_vec());

        let names: Vec<_> = generator
            .sink()
            .written
            .borrow()
            .iter()
            .map(|(name, _, _)| name.clone())
            .collect();
        assert_eq!(
            names,
            vec![
                "customer_discount_rules.xlsx",
                "product_shipping_rules.xlsx",
                "SampleRules_flat.xlsx",
                "SampleRules.xlsx",
            ]
        );
    }

    #[test]
    fn test_template_tokens_reach_sink_verbatim() {
        let generator = FixtureGenerator::new(MemorySink::default());
        generator.generate_and_write(FixtureKind::SampleRules).unwrap();

        let written = generator.sink().written.borrow();
        let grid = &written[0].2;
        assert_eq!(
            grid.get_ref("B8").unwrap().and_then(|v| v.as_text()),
            Some("customer.getAge() >= $param")
        );
    }

    #[test]
    fn test_dry_run_is_not_reported_as_written() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let base = temp_dir.path().join("rules");
        let generator = FixtureGenerator::new(DryRunStorage::new(&base));

        let generated = generator.run(&FixtureKind::ALL).unwrap();

        assert!(generated.iter().all(|g| !g.written));
        assert!(!base.exists());
        for fixture in &generated {
            let line = confirmation(&fixture.path, fixture.written);
            assert!(line.starts_with("Would create"), "{}", line);
        }
        assert!(summary_lines(&generated)
            .iter()
            .all(|l| !l.contains("Sample files created")));
    }

    #[test]
    fn test_sink_failure_propagates() {
        let generator = FixtureGenerator::new(FailingSink);

        let err = generator.run(&FixtureKind::ALL).unwrap_err();
        assert!(matches!(err, FixtureError::IoError(_)));
    }
}
