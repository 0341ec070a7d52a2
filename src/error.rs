use std::{io, result};
use thiserror::Error;

/// Errors raised while loading, selecting or rendering a table.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid style {0:?}: expected \"t\", \"a\" or \"f<N>\"")]
    InvalidStyle(String),
    #[error("invalid delimiter {0:?}: expected a single ASCII character")]
    InvalidDelimiter(String),
    #[error("unknown column(s): {}", .0.join(", "))]
    UnknownColumns(Vec<String>),

    #[error("input table has no header line")]
    EmptyInput,
    #[error("duplicate column {0:?} in header")]
    DuplicateColumn(String),
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: u64,
        expected: usize,
        found: usize,
    },
    #[error("cannot read table")]
    Read(#[source] csv::Error),

    #[error("cannot write table")]
    Write(#[source] io::Error),
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        match err.kind() {
            csv::ErrorKind::UnequalLengths {
                pos,
                expected_len,
                len,
            } => Error::FieldCount {
                line: pos.as_ref().map(|pos| pos.line()).unwrap_or_default(),
                expected: *expected_len as usize,
                found: *len as usize,
            },
            _ => Error::Read(err),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
