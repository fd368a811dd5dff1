pub mod etl;
pub mod splitter;

pub use crate::domain::model::{
    AggregateRecord, CandidateFile, CompanyRecord, RunSummary, SplitResult,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
