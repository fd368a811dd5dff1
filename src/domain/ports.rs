use crate::domain::model::{AggregateRecord, RunSummary, SplitResult};
use crate::utils::error::Result;
use std::path::Path;

pub trait Storage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;
    /// Writes `data` to `path`, replacing any existing file.
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()>;
    fn create_dir_all(&self, path: &Path) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &Path;
    fn companies_output_path(&self) -> &Path;
    fn candidates_dir(&self) -> &Path;
    fn dry_run(&self) -> bool;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<AggregateRecord>>;
    fn transform(&self, records: Vec<AggregateRecord>) -> Result<SplitResult>;
    fn load(&self, result: SplitResult) -> Result<RunSummary>;
}
