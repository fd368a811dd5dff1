use crate::core::{
    AggregateRecord, ConfigProvider, Pipeline, Result, RunSummary, SplitResult, Storage,
};
use crate::utils::error::SplitError;
use serde_json::Value;

/// Splits the aggregate companies-and-candidates document into a company list
/// and one candidate file per company.
pub struct SplitPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> SplitPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for SplitPipeline<S, C> {
    fn extract(&self) -> Result<Vec<AggregateRecord>> {
        let input_path = self.config.input_path();
        tracing::info!("Reading input file: {}", input_path.display());

        let bytes = self.storage.read_file(input_path)?;
        let document: Value = serde_json::from_slice(&bytes)
            .map_err(|e| SplitError::parse(input_path, e.to_string()))?;

        let items = match document {
            Value::Array(items) => items,
            other => {
                return Err(SplitError::parse(
                    input_path,
                    format!(
                        "expected an array at the document root, found {}",
                        json_type_name(&other)
                    ),
                ))
            }
        };

        let mut records = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            match item {
                Value::Object(data) => {
                    let record = AggregateRecord::new(index, data);
                    tracing::debug!(
                        "Record {}: {} candidates",
                        index,
                        record.candidates().map_or(0, Vec::len)
                    );
                    records.push(record);
                }
                other => {
                    return Err(SplitError::parse(
                        input_path,
                        format!(
                            "record {} is {}, expected an object",
                            index,
                            json_type_name(&other)
                        ),
                    ))
                }
            }
        }

        Ok(records)
    }

    fn transform(&self, records: Vec<AggregateRecord>) -> Result<SplitResult> {
        let companies = records.iter().map(AggregateRecord::to_company).collect();
        let candidate_files = records
            .into_iter()
            .filter_map(AggregateRecord::into_candidate_file)
            .collect();

        Ok(SplitResult {
            companies,
            candidate_files,
        })
    }

    fn load(&self, result: SplitResult) -> Result<RunSummary> {
        let companies_path = self.config.companies_output_path();
        let candidates_dir = self.config.candidates_dir();

        let summary = RunSummary {
            companies_path: companies_path.to_path_buf(),
            candidates_dir: candidates_dir.to_path_buf(),
            company_count: result.companies.len(),
            candidate_ids: result.candidate_files.iter().map(|f| f.company_id).collect(),
            dry_run: self.config.dry_run(),
        };

        if summary.dry_run {
            tracing::info!(
                "Dry run: would write {} companies to {} and {} candidate files to {}",
                summary.company_count,
                companies_path.display(),
                summary.candidate_ids.len(),
                candidates_dir.display()
            );
            return Ok(summary);
        }

        tracing::info!("Saving companies data to: {}", companies_path.display());
        let companies_json = serde_json::to_string_pretty(&result.companies)?;
        self.storage.write_file(companies_path, companies_json.as_bytes())?;

        self.storage.create_dir_all(candidates_dir)?;
        for file in &result.candidate_files {
            let path = candidates_dir.join(file.file_name());
            tracing::debug!(
                "Saving candidates for company {} to: {}",
                file.company_id,
                path.display()
            );
            let candidates_json = serde_json::to_string_pretty(&file.candidates)?;
            self.storage.write_file(&path, candidates_json.as_bytes())?;
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::SplitError;
    use serde_json::json;
    use std::collections::{HashMap, HashSet};
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
        dirs: Arc<Mutex<HashSet<PathBuf>>>,
        read_only: bool,
    }

    impl MockStorage {
        fn with_input(content: &str) -> Self {
            let storage = Self::default();
            storage
                .files
                .lock()
                .unwrap()
                .insert(PathBuf::from("input.json"), content.as_bytes().to_vec());
            storage
        }

        fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            self.files.lock().unwrap().get(Path::new(path)).cloned()
        }

        fn file_count(&self) -> usize {
            self.files.lock().unwrap().len()
        }
    }

    impl Storage for MockStorage {
        fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
            let files = self.files.lock().unwrap();
            files.get(path).cloned().ok_or_else(|| {
                SplitError::read(
                    path,
                    std::io::Error::new(std::io::ErrorKind::NotFound, "File not found"),
                )
            })
        }

        fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
            if self.read_only {
                return Err(SplitError::write(
                    path,
                    std::io::Error::from(std::io::ErrorKind::PermissionDenied),
                ));
            }
            let mut files = self.files.lock().unwrap();
            files.insert(path.to_path_buf(), data.to_vec());
            Ok(())
        }

        fn create_dir_all(&self, path: &Path) -> Result<()> {
            self.dirs.lock().unwrap().insert(path.to_path_buf());
            Ok(())
        }
    }

    struct MockConfig {
        input_path: PathBuf,
        companies_output_path: PathBuf,
        candidates_dir: PathBuf,
        dry_run: bool,
    }

    impl MockConfig {
        fn new() -> Self {
            Self {
                input_path: PathBuf::from("input.json"),
                companies_output_path: PathBuf::from("out/companies.json"),
                candidates_dir: PathBuf::from("out/candidates"),
                dry_run: false,
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn input_path(&self) -> &Path {
            &self.input_path
        }

        fn companies_output_path(&self) -> &Path {
            &self.companies_output_path
        }

        fn candidates_dir(&self) -> &Path {
            &self.candidates_dir
        }

        fn dry_run(&self) -> bool {
            self.dry_run
        }
    }

    fn run(pipeline: &SplitPipeline<MockStorage, MockConfig>) -> Result<RunSummary> {
        let records = pipeline.extract()?;
        let result = pipeline.transform(records)?;
        pipeline.load(result)
    }

    #[test]
    fn test_extract_assigns_positional_indices() {
        let storage =
            MockStorage::with_input(r#"[{"företagsnamn":"A"},{"företagsnamn":"B"},{}]"#);
        let pipeline = SplitPipeline::new(storage, MockConfig::new());

        let records = pipeline.extract().unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(
            records.iter().map(|r| r.index).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
        assert_eq!(records[1].data["företagsnamn"], json!("B"));
    }

    #[test]
    fn test_extract_missing_input_is_read_error() {
        let pipeline = SplitPipeline::new(MockStorage::default(), MockConfig::new());

        let err = pipeline.extract().unwrap_err();

        assert!(matches!(err, SplitError::ReadError { .. }));
        assert!(err.to_string().contains("input.json"));
    }

    #[test]
    fn test_extract_invalid_json_is_parse_error() {
        let storage = MockStorage::with_input("[{\"företagsnamn\": ");
        let pipeline = SplitPipeline::new(storage, MockConfig::new());

        let err = pipeline.extract().unwrap_err();

        assert!(matches!(err, SplitError::ParseError { .. }));
        assert!(err.to_string().contains("EOF"));
    }

    #[test]
    fn test_extract_rejects_non_array_root() {
        let storage = MockStorage::with_input(r#"{"företagsnamn":"Acme"}"#);
        let pipeline = SplitPipeline::new(storage, MockConfig::new());

        let err = pipeline.extract().unwrap_err();

        assert!(matches!(err, SplitError::ParseError { .. }));
        assert!(err.to_string().contains("found an object"));
    }

    #[test]
    fn test_extract_rejects_non_object_element() {
        let storage = MockStorage::with_input(r#"[{}, "oops"]"#);
        let pipeline = SplitPipeline::new(storage, MockConfig::new());

        let err = pipeline.extract().unwrap_err();

        assert!(err.to_string().contains("record 1 is a string"));
    }

    #[test]
    fn test_transform_projects_every_record_and_filters_candidates() {
        let storage = MockStorage::with_input(
            r#"[
                {"företagsnamn":"Acme","matched_candidates":[{"name":"X"}]},
                {"företagsnamn":"Beta"},
                {"företagsnamn":"Gamma","matched_candidates":[]},
                {"företagsnamn":"Delta","matched_candidates":null},
                {"företagsnamn":"Epsilon","matched_candidates":[{"name":"Y"},{"name":"Z"}]}
            ]"#,
        );
        let pipeline = SplitPipeline::new(storage, MockConfig::new());

        let records = pipeline.extract().unwrap();
        let result = pipeline.transform(records).unwrap();

        assert_eq!(result.companies.len(), 5);
        for (i, company) in result.companies.iter().enumerate() {
            assert_eq!(company.id, i);
            assert!(!company.fields.contains_key("matched_candidates"));
        }
        assert_eq!(
            result
                .candidate_files
                .iter()
                .map(|f| f.company_id)
                .collect::<Vec<_>>(),
            vec![0, 4]
        );
        assert_eq!(result.candidate_files[1].candidates.len(), 2);
    }

    #[test]
    fn test_load_writes_companies_and_candidate_files() {
        let storage = MockStorage::with_input(
            r#"[
                {"företagsnamn":"Acme","matched_candidates":[{"name":"X"}]},
                {"företagsnamn":"Beta"}
            ]"#,
        );
        let pipeline = SplitPipeline::new(storage.clone(), MockConfig::new());

        let summary = run(&pipeline).unwrap();

        assert_eq!(summary.company_count, 2);
        assert_eq!(summary.candidate_ids, vec![0]);
        assert!(storage.dirs.lock().unwrap().contains(Path::new("out/candidates")));

        let companies: Vec<Value> =
            serde_json::from_slice(&storage.get_file("out/companies.json").unwrap()).unwrap();
        assert_eq!(companies[0]["id"], json!(0));
        assert_eq!(companies[1]["företagsnamn"], json!("Beta"));
        assert_eq!(companies[1]["sökterm"], json!([]));

        let candidates = storage.get_file("out/candidates/company_0.json").unwrap();
        assert_eq!(
            String::from_utf8(candidates).unwrap(),
            "[\n  {\n    \"name\": \"X\"\n  }\n]"
        );
        assert!(storage.get_file("out/candidates/company_1.json").is_none());
    }

    #[test]
    fn test_load_preserves_non_ascii_literally() {
        let storage = MockStorage::with_input(r#"[{"företagsnamn":"Åbro Bryggeri"}]"#);
        let pipeline = SplitPipeline::new(storage.clone(), MockConfig::new());

        run(&pipeline).unwrap();

        let companies = String::from_utf8(storage.get_file("out/companies.json").unwrap()).unwrap();
        assert!(companies.contains("\"företagsnamn\": \"Åbro Bryggeri\""));
        assert!(!companies.contains("\\u"));
        assert!(companies.starts_with("[\n  {\n    \"id\": 0,"));
    }

    #[test]
    fn test_load_creates_candidates_dir_without_candidates() {
        let storage = MockStorage::with_input(r#"[{"företagsnamn":"Beta"}]"#);
        let pipeline = SplitPipeline::new(storage.clone(), MockConfig::new());

        let summary = run(&pipeline).unwrap();

        assert!(summary.candidate_ids.is_empty());
        assert!(storage.dirs.lock().unwrap().contains(Path::new("out/candidates")));
        assert_eq!(storage.file_count(), 2); // input + companies
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let storage = MockStorage::with_input(
            r#"[{"företagsnamn":"Acme","matched_candidates":[{"name":"X"}]}]"#,
        );
        let mut config = MockConfig::new();
        config.dry_run = true;
        let pipeline = SplitPipeline::new(storage.clone(), config);

        let summary = run(&pipeline).unwrap();

        assert!(summary.dry_run);
        assert_eq!(summary.candidate_ids, vec![0]);
        assert_eq!(storage.file_count(), 1);
        assert!(storage.dirs.lock().unwrap().is_empty());
    }

    #[test]
    fn test_load_propagates_write_error() {
        let mut storage = MockStorage::with_input(r#"[{"företagsnamn":"Acme"}]"#);
        storage.read_only = true;
        let pipeline = SplitPipeline::new(storage, MockConfig::new());

        let err = run(&pipeline).unwrap_err();

        assert!(matches!(err, SplitError::WriteError { .. }));
        assert!(err.to_string().contains("companies.json"));
    }
}
