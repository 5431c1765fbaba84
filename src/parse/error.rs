use std::path::PathBuf;
use std::{error, fmt, io};

use crate::error::Error;
use crate::metrics::MetricId;

/// Why a report could not be turned into metrics.
///
/// A missing `read` row, header label or summary line is not an error;
/// those metrics are simply absent from the result.
#[derive(Debug)]
pub enum ParseError {
    /// The report file couldn't be opened.
    Open { path: PathBuf, source: io::Error },
    /// The report stream failed mid-way.
    Read(io::Error),
    /// The `read` row has a different number of values than the header has columns.
    ColumnCount { expected: usize, actual: usize },
    /// A `read` row value isn't a decimal floating-point number.
    NotANumber {
        token: String,
        column: usize,
        metric: Option<MetricId>,
    },
}

impl ParseError {
    pub fn is_io(&self) -> bool {
        matches!(self, ParseError::Open { .. } | ParseError::Read(_))
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ParseError::*;
        match self {
            Open { path, source } => write!(f, "open {}: {}", path.display(), source),
            Read(source) => write!(f, "read failed: {}", source),
            ColumnCount { expected, actual } => write!(
                f,
                "Incorrect number of fields: expected {} but got {}",
                expected, actual
            ),
            NotANumber {
                token,
                metric: Some(metric),
                ..
            } => write!(f, "'{}' latency value must be a float ({})", token, metric),
            NotANumber {
                token,
                column,
                metric: None,
            } => write!(
                f,
                "'{}' latency value must be a float (column {})",
                token, column
            ),
        }
    }
}

impl error::Error for ParseError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            ParseError::Open { source, .. } | ParseError::Read(source) => Some(source),
            _ => None,
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        ("couldn't parse report", err).into()
    }
}
