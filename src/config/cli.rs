use crate::config::toml_config::TomlConfig;
use crate::config::SplitConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

/// Command line flags. Every flag is optional; without any the tool reads
/// `public/Companies_and_candidates.json` relative to the working directory.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "company-splitter")]
#[command(about = "Split an aggregate companies-and-candidates JSON file into per-company files")]
pub struct CliConfig {
    /// Directory the relative paths resolve against
    #[arg(long)]
    pub base_dir: Option<PathBuf>,

    /// Aggregate input file
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Destination of the company-only array
    #[arg(long)]
    pub companies_output: Option<PathBuf>,

    /// Directory receiving one company_{i}.json per company with candidates
    #[arg(long)]
    pub candidates_dir: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Show what would be written without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Merge defaults, the optional TOML file and these flags, in that order.
    pub fn resolve(&self) -> Result<SplitConfig> {
        let mut config = SplitConfig::default();

        if let Some(path) = &self.config {
            TomlConfig::from_file(path)?.apply_to(&mut config);
        }

        if let Some(base_dir) = &self.base_dir {
            config.base_dir = base_dir.clone();
        }
        if let Some(input) = &self.input {
            config.input = input.clone();
        }
        if let Some(companies_output) = &self.companies_output {
            config.companies_output = companies_output.clone();
        }
        if let Some(candidates_dir) = &self.candidates_dir {
            config.candidates_dir = candidates_dir.clone();
        }
        config.dry_run |= self.dry_run;
        config.verbose |= self.verbose;

        Ok(config)
    }
}
