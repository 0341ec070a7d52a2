//! Loading of delimited text files into a [`Table`].
//!
//! The first line of the input is the header. Every following line is
//! a data row and must carry exactly as many fields as the header.
//! Fields may be double-quoted, following the usual CSV rules.

use log::{debug, trace};
use std::{
    collections::HashSet,
    fs::File,
    io::{self, Read},
    path::Path,
};

use super::Table;
use crate::{Error, Result};

/// Default field delimiter.
pub const DEFAULT_DELIMITER: u8 = b'\t';

/// Path standing for the standard input.
pub const STDIN_PATH: &str = "-";

/// Parse a delimiter argument.
///
/// Accepts any single ASCII character, plus the escape `\t` for a tab.
pub fn parse_delimiter(delimiter: &str) -> Result<u8> {
    match delimiter {
        "\\t" => Ok(b'\t'),
        d if d.len() == 1 && d.is_ascii() => Ok(d.as_bytes()[0]),
        d => Err(Error::InvalidDelimiter(d.to_owned())),
    }
}

/// Builder reading delimited text into a [`Table`].
#[derive(Clone, Debug)]
pub struct TableReader {
    delimiter: u8,
}

impl Default for TableReader {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl TableReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Read the table from a file, or from stdin if the path is `-`.
    pub fn read_path<P: AsRef<Path>>(&self, path: P) -> Result<Table> {
        let path = path.as_ref();
        debug!("reading table from {:?}", path);

        if path == Path::new(STDIN_PATH) {
            self.read(io::stdin().lock())
        } else {
            let file = File::open(path).map_err(|err| Error::Read(err.into()))?;
            self.read(file)
        }
    }

    pub fn read<R: Read>(&self, reader: R) -> Result<Table> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(false)
            .from_reader(reader);

        let columns: Vec<String> = reader.headers()?.iter().map(String::from).collect();
        if columns.is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut seen = HashSet::new();
        if let Some(dup) = columns.iter().find(|column| !seen.insert(column.as_str())) {
            return Err(Error::DuplicateColumn(dup.clone()));
        }
        trace!("columns: {:?}", columns);

        let rows = reader
            .records()
            .map(|record| Ok(record?.iter().map(String::from).collect()))
            .collect::<Result<Vec<_>>>()?;
        debug!("read {} column(s), {} row(s)", columns.len(), rows.len());

        Ok(Table::new(columns, rows))
    }
}
