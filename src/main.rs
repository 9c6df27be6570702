use clap::Parser;
use test_reporter::cli::commands::cmd_report;
use test_reporter::cli::config::{Cli, load_config, resolve_settings};

fn main() {
    let cli = Cli::parse();
    let config = load_config(&cli.project_dir, cli.config.as_deref());

    // Resolve report settings: CLI > config > defaults
    let settings = resolve_settings(&cli, &config);

    if cli.verbose > 0 {
        eprintln!(
            "Reading results from {} (format={})...",
            settings.results_dir.display(),
            settings.format
        );
    }

    if let Err(e) = cmd_report(&settings, cli.verbose) {
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }
}
