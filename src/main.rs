use anyhow::Context;
use clap::Parser;
use rule_fixtures::core::report;
use rule_fixtures::fixtures::catalogue;
use rule_fixtures::utils::logger;
use rule_fixtures::{
    CliConfig, DryRunStorage, FixtureError, FixtureGenerator, GeneratedFixture,
    GeneratorSettings, XlsxStorage,
};

fn print_catalogue(json: bool) -> anyhow::Result<()> {
    let entries = catalogue();
    if json {
        let rendered =
            serde_json::to_string_pretty(&entries).context("Failed to render fixture list")?;
        println!("{}", rendered);
        return Ok(());
    }

    for entry in entries {
        println!(
            "{:<18} {:<30} {}",
            entry.kind.as_str(),
            entry.file_name,
            entry.description
        );
    }
    Ok(())
}

fn print_summary(generated: &[GeneratedFixture]) {
    for line in report::summary_lines(generated) {
        println!("{}", line);
    }
}

fn generate(settings: &GeneratorSettings) -> rule_fixtures::Result<Vec<GeneratedFixture>> {
    if settings.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No files will be written");
        FixtureGenerator::new(DryRunStorage::new(&settings.output_dir)).run(&settings.fixtures)
    } else {
        FixtureGenerator::new(XlsxStorage::new(&settings.output_dir)).run(&settings.fixtures)
    }
}

fn report_failure(e: &FixtureError) -> ! {
    tracing::error!("❌ Fixture generation failed: {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e);
    std::process::exit(e.exit_code());
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose, config.log_format);
    tracing::debug!("CLI config: {:?}", config);

    if config.list {
        return print_catalogue(config.json);
    }

    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => report_failure(&e),
    };
    println!("{}", report::BANNER);
    tracing::info!(
        "🚀 Creating sample rule tables in {}",
        settings.output_dir.display()
    );

    match generate(&settings) {
        Ok(generated) => {
            print_summary(&generated);
            tracing::info!("✅ {} fixture(s) done", generated.len());
        }
        Err(e) => report_failure(&e),
    }

    Ok(())
}
