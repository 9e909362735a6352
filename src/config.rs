use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub files: FilesConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FilesConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

fn default_delimiter() -> char {
    ','
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::from_path(Path::new("config/default.toml"))
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        let config: Config = toml::from_str(&config_str)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let toml_str = r#"
[files]
input_path = "/tmp/input.csv"
output_path = "/tmp/output.csv"
delimiter = ";"

[logging]
level = "debug"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.files.input_path, PathBuf::from("/tmp/input.csv"));
        assert_eq!(config.files.output_path, PathBuf::from("/tmp/output.csv"));
        assert_eq!(config.files.delimiter, ';');
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn delimiter_defaults_to_comma() {
        let toml_str = r#"
[files]
input_path = "in.csv"
output_path = "out.csv"

[logging]
level = "info"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.files.delimiter, ',');
    }

    #[test]
    fn rejects_multi_char_delimiter() {
        let toml_str = r#"
[files]
input_path = "in.csv"
output_path = "out.csv"
delimiter = "||"

[logging]
level = "info"
"#;
        assert!(toml::from_str::<Config>(toml_str).is_err());
    }
}
