use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ReportError {
    /// No result records found at the expected location (fatal)
    NoRecordsFound { dir: PathBuf },

    /// A result file could not be parsed as JUnit XML (recovered by
    /// substituting a placeholder record)
    MalformedRecord { path: PathBuf, reason: String },

    /// The results directory exists but could not be scanned
    ResultsDirUnreadable { dir: PathBuf, source: std::io::Error },

    /// The rendered document could not be written to its destination
    WriteFailed { path: PathBuf, source: std::io::Error },
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::NoRecordsFound { dir } => {
                write!(f, "No test result files found in {}", dir.display())
            }
            ReportError::MalformedRecord { path, reason } => {
                write!(f, "Could not parse {}: {}", path.display(), reason)
            }
            ReportError::ResultsDirUnreadable { dir, source } => {
                write!(f, "Could not read results directory {}: {}", dir.display(), source)
            }
            ReportError::WriteFailed { path, source } => {
                write!(f, "Could not write report to {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::ResultsDirUnreadable { source, .. } => Some(source),
            ReportError::WriteFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}
