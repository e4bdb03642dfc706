use crate::domain::model::{SourceRow, TransformResult};
use crate::domain::schema::ColumnSchema;
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    /// Writes the whole file or nothing.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn source_path(&self) -> &str;
    fn destination_path(&self) -> &str;
    fn column_schema(&self) -> &ColumnSchema;
    fn delimiter(&self) -> u8;
    fn header_rows(&self) -> usize;
    fn pretty(&self) -> bool;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<SourceRow>>;
    fn transform(&self, rows: Vec<SourceRow>) -> Result<TransformResult>;
    fn load(&self, result: TransformResult) -> Result<String>;
}
