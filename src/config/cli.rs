use super::toml_config::TomlConfig;
use super::GeneratorSettings;
use crate::domain::model::FixtureKind;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::Validate;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "rule-fixtures")]
#[command(about = "Generate sample rule-table spreadsheets for a rule-management tool")]
pub struct CliConfig {
    /// Directory the workbooks are written to [default: rules]
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Only generate these fixtures (comma separated)
    #[arg(long, value_enum, value_delimiter = ',')]
    pub only: Vec<FixtureKind>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// List the available fixtures and exit
    #[arg(long)]
    pub list: bool,

    /// Print the list as JSON
    #[arg(long, requires = "list")]
    pub json: bool,

    /// Validate layouts and show target paths without writing anything
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl CliConfig {
    /// Layers defaults, the optional TOML file and the command-line flags.
    pub fn resolve(&self) -> Result<GeneratorSettings> {
        let mut settings = GeneratorSettings::default();

        if let Some(path) = &self.config {
            tracing::info!("📁 Loading configuration from: {}", path);
            let config = TomlConfig::from_file(path)?;
            config.validate()?;
            settings = settings.apply_toml(&config);
        }

        // 命令列參數優先
        if let Some(dir) = &self.output_dir {
            settings = settings.with_output_dir(dir);
        }
        if !self.only.is_empty() {
            settings = settings.with_fixtures(&self.only);
        }

        let settings = settings.with_dry_run(self.dry_run);
        settings.validate()?;
        Ok(settings)
    }
}
