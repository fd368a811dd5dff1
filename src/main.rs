use clap::Parser;
use company_splitter::utils::{logger, validation::Validate};
use company_splitter::{CliConfig, EtlEngine, LocalStorage, SplitError, SplitPipeline};

fn fail(e: &SplitError) -> ! {
    tracing::error!("{} (Category: {:?})", e, e.category());
    tracing::error!("Suggestion: {}", e.recovery_suggestion());
    eprintln!("Error: {}", e.user_friendly_message());
    eprintln!("Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn main() {
    let cli = CliConfig::parse();

    let config = cli.resolve();
    let verbose = config.as_ref().map_or(cli.verbose, |c| c.verbose);
    logger::init_cli_logger(verbose);

    let config = match config {
        Ok(config) => config,
        Err(e) => fail(&e),
    };
    if let Err(e) = config.validate() {
        fail(&e);
    }

    tracing::info!("Working directory: {}", config.base_dir.display());
    tracing::debug!("Config: {:?}", config);

    let storage = LocalStorage::new(config.base_dir.clone());
    let pipeline = SplitPipeline::new(storage, config);
    let engine = EtlEngine::new(pipeline);

    match engine.run() {
        Ok(summary) => {
            if summary.dry_run {
                println!("Dry run completed, no files written:");
            } else {
                println!("Split completed successfully:");
            }
            println!(
                "- Companies file: {} ({} companies)",
                summary.companies_path.display(),
                summary.company_count
            );
            println!(
                "- Candidates directory: {} ({} files)",
                summary.candidates_dir.display(),
                summary.candidate_ids.len()
            );
        }
        Err(e) => fail(&e),
    }
}
