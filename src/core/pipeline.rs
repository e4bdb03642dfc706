use crate::core::output::serialize;
use crate::core::source::{load, SourceFormat};
use crate::core::transform::build_document;
use crate::core::{ConfigProvider, Pipeline, SourceRow, Storage, TransformResult};
use crate::domain::schema::ColumnLayout;
use crate::utils::error::Result;

pub struct PricebookPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    layout: ColumnLayout,
}

impl<S: Storage, C: ConfigProvider> PricebookPipeline<S, C> {
    /// Fails when the configured column schema does not name every mapped column.
    pub fn new(storage: S, config: C) -> Result<Self> {
        let layout = config.column_schema().resolve()?;
        Ok(Self {
            storage,
            config,
            layout,
        })
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for PricebookPipeline<S, C> {
    fn extract(&self) -> Result<Vec<SourceRow>> {
        tracing::debug!("Reading source: {}", self.config.source_path());
        let data = self.storage.read_file(self.config.source_path())?;

        load(
            data.as_slice(),
            SourceFormat {
                delimiter: self.config.delimiter(),
                header_rows: self.config.header_rows(),
                width: self.layout.width,
            },
        )
    }

    fn transform(&self, rows: Vec<SourceRow>) -> Result<TransformResult> {
        Ok(build_document(&rows, &self.layout))
    }

    fn load(&self, result: TransformResult) -> Result<String> {
        let bytes = serialize(&result.document, self.config.pretty())?;
        let destination = self.config.destination_path();

        tracing::debug!("Writing {} bytes to {}", bytes.len(), destination);
        self.storage.write_file(destination, &bytes)?;

        Ok(destination.to_string())
    }
}
