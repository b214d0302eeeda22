//! Whitespace-delimited dataset loading.
//!
//! Each non-blank line holds the attribute values followed by the
//! label in the last column; a label of zero means `false`, anything
//! else `true`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{ArbolError, Result};
use crate::instance::{AttrValue, Instance};

/// Parses instances from a whitespace-delimited reader.
///
/// Blank lines are skipped. Each remaining line must hold at least a
/// label column; every column but the last parses as an attribute
/// value, and the last as an integer label (nonzero means `true`).
///
/// # Errors
///
/// Returns an error on I/O failure or an unparseable token, reporting
/// the 1-based line number.
///
/// # Examples
///
/// ```
/// use arbol::dataset::parse_dataset;
///
/// let data = "0 1 1\n1 0 1\n0 0 0\n";
/// let instances = parse_dataset(std::io::Cursor::new(data)).unwrap();
/// assert_eq!(instances.len(), 3);
/// assert_eq!(instances[0].attrs, vec![0, 1]);
/// assert_eq!(instances[2].label, Some(false));
/// ```
pub fn parse_dataset<R: BufRead>(reader: R) -> Result<Vec<Instance>> {
    let mut instances = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        let (label_token, attr_tokens) = tokens.split_last().unwrap_or((&"", &[]));
        let mut attrs = Vec::with_capacity(attr_tokens.len());
        for token in attr_tokens {
            let value: AttrValue = token.parse().map_err(|_| ArbolError::Parse {
                line: line_no + 1,
                message: format!("invalid attribute value {token:?}"),
            })?;
            attrs.push(value);
        }
        let label: i64 = label_token.parse().map_err(|_| ArbolError::Parse {
            line: line_no + 1,
            message: format!("invalid label {label_token:?}"),
        })?;
        instances.push(Instance::new(attrs, label != 0));
    }
    Ok(instances)
}

/// Loads instances from a whitespace-delimited file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or parsed.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Vec<Instance>> {
    let file = File::open(path)?;
    parse_dataset(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_basic() {
        let data = "0 1 2 1\n3 4 5 0\n";
        let instances = parse_dataset(Cursor::new(data)).unwrap();
        assert_eq!(instances.len(), 2);
        assert_eq!(instances[0].attrs, vec![0, 1, 2]);
        assert_eq!(instances[0].label, Some(true));
        assert_eq!(instances[1].attrs, vec![3, 4, 5]);
        assert_eq!(instances[1].label, Some(false));
        assert_eq!(instances[0].weight, 1.0);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let data = "1 1\n\n   \n0 0\n";
        let instances = parse_dataset(Cursor::new(data)).unwrap();
        assert_eq!(instances.len(), 2);
    }

    #[test]
    fn test_nonzero_label_is_true() {
        let data = "0 7\n";
        let instances = parse_dataset(Cursor::new(data)).unwrap();
        assert_eq!(instances[0].label, Some(true));
    }

    #[test]
    fn test_label_only_line() {
        let data = "1\n";
        let instances = parse_dataset(Cursor::new(data)).unwrap();
        assert!(instances[0].attrs.is_empty());
        assert_eq!(instances[0].label, Some(true));
    }

    #[test]
    fn test_bad_attribute_reports_line() {
        let data = "0 1 1\nx 1 0\n";
        let err = parse_dataset(Cursor::new(data)).unwrap_err();
        match err {
            ArbolError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bad_label_is_error() {
        let data = "0 1 yes\n";
        assert!(parse_dataset(Cursor::new(data)).is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(load_dataset("/nonexistent/path/data.txt").is_err());
    }
}
