use crate::config::SplitConfig;
use crate::utils::error::{Result, SplitError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub paths: Option<PathsConfig>,
    pub run: Option<RunConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    pub base_dir: Option<PathBuf>,
    pub input: Option<PathBuf>,
    pub companies_output: Option<PathBuf>,
    pub candidates_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunConfig {
    pub dry_run: Option<bool>,
    pub verbose: Option<bool>,
}

impl TomlConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| SplitError::ConfigError {
            message: format!("cannot read config file {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SplitError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` references with environment values. Unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SplitError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Overlay the values set in this file onto `config`.
    pub fn apply_to(&self, config: &mut SplitConfig) {
        if let Some(paths) = &self.paths {
            if let Some(base_dir) = &paths.base_dir {
                config.base_dir = base_dir.clone();
            }
            if let Some(input) = &paths.input {
                config.input = input.clone();
            }
            if let Some(companies_output) = &paths.companies_output {
                config.companies_output = companies_output.clone();
            }
            if let Some(candidates_dir) = &paths.candidates_dir {
                config.candidates_dir = candidates_dir.clone();
            }
        }

        if let Some(run) = &self.run {
            if let Some(dry_run) = run.dry_run {
                config.dry_run = dry_run;
            }
            if let Some(verbose) = run.verbose {
                config.verbose = verbose;
            }
        }
    }
}
