use crate::domain::fields::{field_or_default, CANDIDATES_FIELD, COMPANY_FIELDS};
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::PathBuf;

/// One element of the input array: company metadata plus its candidates.
#[derive(Debug, Clone)]
pub struct AggregateRecord {
    pub index: usize,
    pub data: Map<String, Value>,
}

impl AggregateRecord {
    pub fn new(index: usize, data: Map<String, Value>) -> Self {
        Self { index, data }
    }

    pub fn to_company(&self) -> CompanyRecord {
        let fields = COMPANY_FIELDS
            .iter()
            .map(|(key, default)| (key.to_string(), field_or_default(&self.data, key, *default)))
            .collect();

        CompanyRecord {
            id: self.index,
            fields,
        }
    }

    /// The candidate list, when present as a non-empty array.
    pub fn candidates(&self) -> Option<&Vec<Value>> {
        match self.data.get(CANDIDATES_FIELD) {
            Some(Value::Array(items)) if !items.is_empty() => Some(items),
            _ => None,
        }
    }

    pub fn into_candidate_file(mut self) -> Option<CandidateFile> {
        match self.data.remove(CANDIDATES_FIELD) {
            Some(Value::Array(candidates)) if !candidates.is_empty() => Some(CandidateFile {
                company_id: self.index,
                candidates,
            }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyRecord {
    pub id: usize,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CandidateFile {
    pub company_id: usize,
    pub candidates: Vec<Value>,
}

impl CandidateFile {
    pub fn file_name(&self) -> String {
        candidate_file_name(self.company_id)
    }
}

pub fn candidate_file_name(company_id: usize) -> String {
    format!("company_{}.json", company_id)
}

#[derive(Debug, Clone)]
pub struct SplitResult {
    pub companies: Vec<CompanyRecord>,
    pub candidate_files: Vec<CandidateFile>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub companies_path: PathBuf,
    pub candidates_dir: PathBuf,
    pub company_count: usize,
    pub candidate_ids: Vec<usize>,
    pub dry_run: bool,
}
