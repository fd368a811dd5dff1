use crate::utils::error::{Result, SplitError};
use regex::Regex;
use std::path::{Component, Path, PathBuf};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(SplitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SplitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Drops `.` components so `./public/a.json` and `public/a.json` compare equal.
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

pub fn validate_distinct_paths(field_name: &str, input: &Path, output: &Path) -> Result<()> {
    if normalize(input) == normalize(output) {
        return Err(SplitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: output.display().to_string(),
            reason: "Output would overwrite the input file".to_string(),
        });
    }
    Ok(())
}

/// Rejects a candidates directory in which a `company_{i}.json` would replace the input.
pub fn validate_input_outside_candidates(
    field_name: &str,
    input: &Path,
    candidates_dir: &Path,
) -> Result<()> {
    let input = normalize(input);
    let in_candidates_dir = input.parent() == Some(normalize(candidates_dir).as_path());
    let candidate_name =
        Regex::new(r"^company_\d+\.json$").map_err(|e| SplitError::ConfigError {
            message: format!("invalid candidate file pattern: {}", e),
        })?;
    let looks_like_candidate = input
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| candidate_name.is_match(name));

    if in_candidates_dir && looks_like_candidate {
        return Err(SplitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: candidates_dir.display().to_string(),
            reason: "A candidate file would overwrite the input file".to_string(),
        });
    }
    Ok(())
}
