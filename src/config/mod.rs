#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_distinct_paths, validate_input_outside_candidates, validate_path, Validate,
};
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT_PATH: &str = "public/Companies_and_candidates.json";
pub const DEFAULT_COMPANIES_OUTPUT_PATH: &str = "public/companies.json";
pub const DEFAULT_CANDIDATES_DIR: &str = "public/candidates";

/// Fully resolved run configuration: defaults, then TOML, then CLI flags.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitConfig {
    pub base_dir: PathBuf,
    pub input: PathBuf,
    pub companies_output: PathBuf,
    pub candidates_dir: PathBuf,
    pub dry_run: bool,
    pub verbose: bool,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            companies_output: PathBuf::from(DEFAULT_COMPANIES_OUTPUT_PATH),
            candidates_dir: PathBuf::from(DEFAULT_CANDIDATES_DIR),
            dry_run: false,
            verbose: false,
        }
    }
}

impl ConfigProvider for SplitConfig {
    fn input_path(&self) -> &Path {
        &self.input
    }

    fn companies_output_path(&self) -> &Path {
        &self.companies_output
    }

    fn candidates_dir(&self) -> &Path {
        &self.candidates_dir
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }
}

impl Validate for SplitConfig {
    fn validate(&self) -> Result<()> {
        validate_path("paths.base_dir", &self.base_dir.to_string_lossy())?;
        validate_path("paths.input", &self.input.to_string_lossy())?;
        validate_path("paths.companies_output", &self.companies_output.to_string_lossy())?;
        validate_path("paths.candidates_dir", &self.candidates_dir.to_string_lossy())?;
        validate_distinct_paths("paths.companies_output", &self.input, &self.companies_output)?;
        validate_input_outside_candidates(
            "paths.candidates_dir",
            &self.input,
            &self.candidates_dir,
        )?;
        Ok(())
    }
}
