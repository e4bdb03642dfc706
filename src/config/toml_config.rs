use crate::config::{ExtractorConfig, DEFAULT_HEADER_ROWS};
use crate::domain::schema::ColumnSchema;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{parse_delimiter, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub path: String,
    pub delimiter: Option<String>,
    pub header_rows: Option<usize>,
    /// Full left-to-right column list; the built-in pricebook layout when absent.
    pub columns: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    pub pretty: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| EtlError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn delimiter(&self) -> Result<u8> {
        match &self.source.delimiter {
            Some(delimiter) => parse_delimiter("source.delimiter", delimiter),
            None => Ok(b','),
        }
    }

    pub fn column_schema(&self) -> ColumnSchema {
        match &self.source.columns {
            Some(columns) => ColumnSchema::new(columns.clone()),
            None => ColumnSchema::default(),
        }
    }

    pub fn into_extractor_config(self) -> Result<ExtractorConfig> {
        self.validate()?;
        Ok(ExtractorConfig {
            delimiter: self.delimiter()?,
            column_schema: self.column_schema(),
            header_rows: self.source.header_rows.unwrap_or(DEFAULT_HEADER_ROWS),
            pretty: self.output.pretty.unwrap_or(true),
            source_path: self.source.path,
            destination_path: self.output.path,
        })
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("source.path", &self.source.path)?;
        validate_path("output.path", &self.output.path)?;
        self.delimiter()?;
        self.column_schema().resolve()?;
        Ok(())
    }
}
