use crate::domain::model::FixtureKind;
use crate::utils::error::{FixtureError, Result};
use crate::utils::validation::{validate_non_empty_list, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub output: Option<OutputConfig>,
    pub fixtures: Option<FixturesConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixturesConfig {
    pub enabled: Option<Vec<FixtureKind>>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FixtureError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FixtureError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${FIXTURE_ROOT})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FixtureError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn output_dir(&self) -> Option<&str> {
        self.output.as_ref().map(|o| o.dir.as_str())
    }

    pub fn enabled_fixtures(&self) -> Option<&[FixtureKind]> {
        self.fixtures.as_ref().and_then(|f| f.enabled.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(dir) = self.output_dir() {
            validate_path("output.dir", dir)?;
        }
        if let Some(enabled) = self.enabled_fixtures() {
            validate_non_empty_list("fixtures.enabled", enabled)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[output]
dir = "fixtures/rules"

[fixtures]
enabled = ["customer-discount", "sample-rules"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.output_dir(), Some("fixtures/rules"));
        assert_eq!(
            config.enabled_fixtures(),
            Some(&[FixtureKind::CustomerDiscount, FixtureKind::SampleRules][..])
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.output_dir(), None);
        assert_eq!(config.enabled_fixtures(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("RULE_FIXTURES_TEST_ROOT", "/tmp/fixture-root");

        let toml_content = r#"
[output]
dir = "${RULE_FIXTURES_TEST_ROOT}/rules"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output_dir(), Some("/tmp/fixture-root/rules"));

        std::env::remove_var("RULE_FIXTURES_TEST_ROOT");
    }

    #[test]
    fn test_unset_env_var_is_left_verbatim() {
        let toml_content = r#"
[output]
dir = "${RULE_FIXTURES_DEFINITELY_UNSET}/rules"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.output_dir(),
            Some("${RULE_FIXTURES_DEFINITELY_UNSET}/rules")
        );
    }

    #[test]
    fn test_unknown_fixture_is_a_config_error() {
        let toml_content = r#"
[fixtures]
enabled = ["loyalty-points"]
"#;

        assert!(matches!(
            TomlConfig::from_toml_str(toml_content),
            Err(FixtureError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_config_validation() {
        let empty_dir = TomlConfig::from_toml_str("[output]\ndir = \"\"\n").unwrap();
        assert!(empty_dir.validate().is_err());

        let no_fixtures = TomlConfig::from_toml_str("[fixtures]\nenabled = []\n").unwrap();
        assert!(no_fixtures.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[output]\ndir = \"from-file\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.output_dir(), Some("from-file"));
    }
}
