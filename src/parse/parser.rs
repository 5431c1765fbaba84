use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::error::ParseError;
use super::header::Header;
use super::line::LineReader;
use super::number::decimal;
use super::summary::summary_value;
use crate::metrics::Metrics;

/// Row type carrying the latency distribution.
const SELECTOR: &str = "read";

/// Parses a load generator report into metrics.
///
/// The first `#`-prefixed line declares the columns. The first `read` row
/// after it is aligned to those columns by position. `Total QPS` and
/// `Misses` summary lines are picked up wherever they appear, whether or not
/// a `read` row exists.
///
/// Fails atomically: a malformed `read` row yields an error and no metrics.
pub fn parse_from_reader<R: Read>(reader: R) -> Result<Metrics, ParseError> {
    let mut metrics = Metrics::new();
    let mut header: Option<Header> = None;
    let mut selector_seen = false;

    for line in LineReader::new(BufReader::new(reader)) {
        let line = line.map_err(ParseError::Read)?;

        if let Some((id, value)) = summary_value(&line) {
            metrics.insert(id, value);
            continue;
        }

        let header = match header {
            Some(ref header) => header,
            None => {
                header = Header::parse(line.split_whitespace());
                continue;
            }
        };

        let mut tokens = line.split_whitespace();
        if selector_seen || tokens.next() != Some(SELECTOR) {
            continue;
        }
        selector_seen = true;

        let values = tokens.collect::<Vec<_>>();
        if values.len() != header.len() {
            return Err(ParseError::ColumnCount {
                expected: header.len(),
                actual: values.len(),
            });
        }

        for (column, (metric, token)) in header.columns().iter().zip(values).enumerate() {
            let value = decimal(token).ok_or_else(|| ParseError::NotANumber {
                token: token.to_owned(),
                column,
                metric: *metric,
            })?;

            // Repeated labels: the rightmost column wins.
            if let Some(metric) = metric {
                metrics.insert(*metric, value);
            }
        }
    }

    Ok(metrics)
}

/// Opens `path` and parses it with [`parse_from_reader`].
pub fn parse_from_path<P: AsRef<Path>>(path: P) -> Result<Metrics, ParseError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ParseError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    parse_from_reader(file)
}
