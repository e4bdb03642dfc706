pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::schema::ColumnSchema;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::{Args, Parser, Subcommand};

pub const DEFAULT_SOURCE_PATH: &str = "scripts/pricebook.csv";
pub const DEFAULT_DESTINATION_PATH: &str = "backend/data.json";
pub const DEFAULT_HEADER_ROWS: usize = 2;

/// Everything one extraction run needs, passed in explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractorConfig {
    pub source_path: String,
    pub destination_path: String,
    pub column_schema: ColumnSchema,
    pub delimiter: u8,
    pub header_rows: usize,
    pub pretty: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            source_path: DEFAULT_SOURCE_PATH.to_string(),
            destination_path: DEFAULT_DESTINATION_PATH.to_string(),
            column_schema: ColumnSchema::default(),
            delimiter: b',',
            header_rows: DEFAULT_HEADER_ROWS,
            pretty: true,
        }
    }
}

impl ConfigProvider for ExtractorConfig {
    fn source_path(&self) -> &str {
        &self.source_path
    }

    fn destination_path(&self) -> &str {
        &self.destination_path
    }

    fn column_schema(&self) -> &ColumnSchema {
        &self.column_schema
    }

    fn delimiter(&self) -> u8 {
        self.delimiter
    }

    fn header_rows(&self) -> usize {
        self.header_rows
    }

    fn pretty(&self) -> bool {
        self.pretty
    }
}

impl Validate for ExtractorConfig {
    fn validate(&self) -> Result<()> {
        validate_path("source_path", &self.source_path)?;
        validate_path("destination_path", &self.destination_path)?;
        self.column_schema.resolve()?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "pricebook-etl")]
#[command(about = "Convert the regional support pricebook sheet into a JSON document")]
pub struct CliConfig {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Read the pricebook sheet and write the JSON document
    Extract(ExtractArgs),
    /// List regions present in a document
    Regions(DataArgs),
    /// List countries, optionally for one region
    Countries {
        #[command(flatten)]
        data: DataArgs,
        #[arg(long)]
        region: Option<String>,
    },
    /// Look up a price, e.g. `quote Germany yearly L2 with`
    Quote {
        #[command(flatten)]
        data: DataArgs,
        country: String,
        /// yearly, dispatch, incident or project
        service: String,
        parts: Vec<String>,
    },
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Args)]
pub struct DataArgs {
    /// Pricebook document to query
    #[arg(long, default_value = DEFAULT_DESTINATION_PATH)]
    pub data: String,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Args)]
pub struct ExtractArgs {
    /// TOML configuration file; flags below override it
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long)]
    pub source: Option<String>,

    #[arg(long)]
    pub destination: Option<String>,

    /// Single character, or `tab`
    #[arg(long)]
    pub delimiter: Option<String>,

    #[arg(long)]
    pub header_rows: Option<usize>,

    /// Write the document without indentation
    #[arg(long)]
    pub compact: bool,
}

#[cfg(feature = "cli")]
impl ExtractArgs {
    pub fn resolve(&self) -> Result<ExtractorConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("Loading configuration from: {}", path);
                toml_config::TomlConfig::from_file(path)?.into_extractor_config()?
            }
            None => ExtractorConfig::default(),
        };

        if let Some(source) = &self.source {
            config.source_path = source.clone();
        }
        if let Some(destination) = &self.destination {
            config.destination_path = destination.clone();
        }
        if let Some(delimiter) = &self.delimiter {
            config.delimiter = crate::utils::validation::parse_delimiter("--delimiter", delimiter)?;
        }
        if let Some(header_rows) = self.header_rows {
            config.header_rows = header_rows;
        }
        if self.compact {
            config.pretty = false;
        }

        config.validate()?;
        Ok(config)
    }
}
