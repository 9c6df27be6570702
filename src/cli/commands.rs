use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::cli::config::ReportSettings;
use crate::error::ReportError;
use crate::record::junit::parse_record;
use crate::record::record_model::RawSuiteRecord;
use crate::report::builder::{ReportMeta, build_sections};
use crate::report::sink::renderer_for;
use crate::summary::aggregator::aggregate;
use crate::summary::summary_model::RunSummary;

// ============================================================================
// report command
// ============================================================================

/// Aggregate the project's result files and write the rendered report.
pub fn cmd_report(
    settings: &ReportSettings,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let records = load_records(&settings.results_dir, verbose)?;

    if verbose > 0 {
        eprintln!("Aggregating {} result files...", records.len());
    }

    let summary = aggregate(records);

    let meta = ReportMeta {
        title: settings.title.clone(),
        generated_at: Local::now(),
        project_label: settings.project_label.clone(),
    };
    let sections = build_sections(&summary, &meta);

    let renderer = renderer_for(&settings.format);
    let document = renderer.render(&sections);

    std::fs::write(&settings.output, &document).map_err(|e| ReportError::WriteFailed {
        path: settings.output.clone(),
        source: e,
    })?;

    println!("Report written: {}", settings.output.display());
    println!("{}", summary_line(&summary));

    Ok(())
}

/// One-line run summary printed to stdout after the report is written.
pub fn summary_line(summary: &RunSummary) -> String {
    format!(
        "Total: {} | Passed: {} | Failed: {} | Errors: {} | Skipped: {}",
        summary.total_tests,
        summary.total_passed,
        summary.total_failures,
        summary.total_errors,
        summary.total_skipped
    )
}

// ============================================================================
// Record discovery
// ============================================================================

/// Load all result records from a results directory.
///
/// Every discovered file contributes a record: one that cannot be read or
/// parsed is warned about on stderr and becomes a placeholder record named
/// after the file stem, so the record count always matches the file count.
pub fn load_records(results_dir: &Path, verbose: u8) -> Result<Vec<RawSuiteRecord>, ReportError> {
    let paths = discover_result_files(results_dir)?;

    let mut records = Vec::with_capacity(paths.len());
    for path in paths {
        if verbose > 1 {
            eprintln!("  Parsing: {}", path.display());
        }
        records.push(load_one(&path));
    }

    Ok(records)
}

/// List `*.xml` files in the results directory, sorted by filename.
pub fn discover_result_files(results_dir: &Path) -> Result<Vec<PathBuf>, ReportError> {
    if !results_dir.is_dir() {
        return Err(ReportError::NoRecordsFound {
            dir: results_dir.to_path_buf(),
        });
    }

    let entries =
        std::fs::read_dir(results_dir).map_err(|e| ReportError::ResultsDirUnreadable {
            dir: results_dir.to_path_buf(),
            source: e,
        })?;

    let mut paths: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|p| p.extension().map_or(false, |ext| ext == "xml"))
        .collect();
    paths.sort();

    if paths.is_empty() {
        return Err(ReportError::NoRecordsFound {
            dir: results_dir.to_path_buf(),
        });
    }

    Ok(paths)
}

fn load_one(path: &Path) -> RawSuiteRecord {
    let parsed = File::open(path)
        .map_err(|e| e.to_string())
        .and_then(|f| parse_record(BufReader::new(f)).map_err(|e| e.to_string()));

    match parsed {
        Ok(mut record) => {
            if record.name.is_none() {
                record.name = file_stem(path);
            }
            record
        }
        Err(reason) => {
            let err = ReportError::MalformedRecord {
                path: path.to_path_buf(),
                reason,
            };
            eprintln!("Warning: {}", err);
            RawSuiteRecord {
                name: file_stem(path),
                ..RawSuiteRecord::default()
            }
        }
    }
}

fn file_stem(path: &Path) -> Option<String> {
    path.file_stem().map(|s| s.to_string_lossy().into_owned())
}
