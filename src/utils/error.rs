use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Workbook error: {0}")]
    XlsxError(#[from] rust_xlsxwriter::XlsxError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid cell reference: '{reference}'")]
    InvalidCellRef { reference: String },

    #[error("Layout error in {fixture}: {message}")]
    LayoutError { fixture: String, message: String },
}

impl FixtureError {
    /// 2 for configuration problems, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            FixtureError::ConfigError { .. } | FixtureError::InvalidConfigValueError { .. } => 2,
            _ => 1,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FixtureError::IoError(_) => {
                "Check that the output directory is writable and the disk is not full"
            }
            FixtureError::XlsxError(_) => {
                "Close any program holding the workbook open and try again"
            }
            FixtureError::ConfigError { .. } => "Make sure the config file is valid TOML",
            FixtureError::InvalidConfigValueError { .. } => {
                "Fix the reported field in the config file or on the command line"
            }
            FixtureError::InvalidCellRef { .. } | FixtureError::LayoutError { .. } => {
                "This is a bug in a built-in fixture layout"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, FixtureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let config = FixtureError::ConfigError {
            message: "bad".to_string(),
        };
        assert_eq!(config.exit_code(), 2);

        let io = FixtureError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(io.exit_code(), 1);
        assert!(io.to_string().contains("denied"));
    }
}
