use std::path::{Path, PathBuf};

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::report::sink::default_output_name;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "test-reporter",
    version,
    about = "Aggregate JUnit XML test results into a shareable report document"
)]
pub struct Cli {
    /// Project directory whose test results should be aggregated
    #[arg(default_value = ".")]
    pub project_dir: PathBuf,

    /// Output format: html, console, json
    #[arg(long)]
    pub format: Option<String>,

    /// Output file path (default: test-report.<ext> in the project directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Results directory, relative to the project directory
    #[arg(long)]
    pub results_dir: Option<String>,

    /// Report title shown on the cover
    #[arg(long)]
    pub title: Option<String>,

    /// Project label shown on the cover (default: project directory name)
    #[arg(long)]
    pub project_label: Option<String>,

    /// Path to config file (default: test-reporter.yaml in the project dir)
    #[arg(long)]
    pub config: Option<String>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `test-reporter.yaml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where result files live, relative to the project directory
    #[serde(default = "default_results_dir")]
    pub results_dir: String,

    #[serde(default)]
    pub report: ReportConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            results_dir: default_results_dir(),
            report: ReportConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_title")]
    pub title: String,

    /// Project label override; defaults to the project directory name
    pub project: Option<String>,

    #[serde(default = "default_format")]
    pub format: String,

    pub output: Option<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            project: None,
            format: default_format(),
            output: None,
        }
    }
}

// Serde default helpers
fn default_results_dir() -> String {
    "build/test-results/test".to_string()
}
fn default_title() -> String {
    "Test Execution Report".to_string()
}
fn default_format() -> String {
    "html".to_string()
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if the file is missing or
/// malformed.
pub fn load_config(project_dir: &Path, path: Option<&str>) -> AppConfig {
    let config_path = match path {
        Some(p) => PathBuf::from(p),
        None => project_dir.join("test-reporter.yaml"),
    };
    match std::fs::read_to_string(&config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Settings Resolution (merge CLI args with config file)
// ============================================================================

/// Fully resolved report settings: CLI flag > config file > built-in default.
#[derive(Debug, Clone)]
pub struct ReportSettings {
    pub results_dir: PathBuf,
    pub title: String,
    pub project_label: String,
    pub format: String,
    pub output: PathBuf,
}

/// Resolve the effective settings for one invocation.
pub fn resolve_settings(cli: &Cli, config: &AppConfig) -> ReportSettings {
    let format = cli
        .format
        .clone()
        .unwrap_or_else(|| config.report.format.clone());

    let title = cli
        .title
        .clone()
        .unwrap_or_else(|| config.report.title.clone());

    let project_label = cli
        .project_label
        .clone()
        .or_else(|| config.report.project.clone())
        .unwrap_or_else(|| project_label_from_dir(&cli.project_dir));

    let results_dir = cli
        .results_dir
        .as_deref()
        .unwrap_or(&config.results_dir);

    let output = cli
        .output
        .clone()
        .or_else(|| config.report.output.as_deref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(default_output_name(&format)));

    ReportSettings {
        results_dir: cli.project_dir.join(results_dir),
        title,
        project_label,
        format,
        output: join_if_relative(&cli.project_dir, output),
    }
}

/// Project label from the directory name, resolving `.` and `..` first.
fn project_label_from_dir(dir: &Path) -> String {
    dir.canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| dir.display().to_string())
}

fn join_if_relative(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}
