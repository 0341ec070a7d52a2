//! In-memory representation of a delimited table.
//!
//! A [`Table`] is a list of column names plus a list of rows. Every
//! row holds exactly one cell per column, in column order. Cells are
//! always plain text: missing values are stored as empty strings.

pub mod columns;
pub mod reader;

use log::{debug, trace};

use crate::{Error, Result};

pub use self::{columns::ColumnSpec, reader::TableReader};

/// Representation of a table row.
pub type Row = Vec<String>;

/// A fully materialized table.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Build a table from its header and rows.
    ///
    /// Short rows are padded with empty cells so that every row has
    /// one cell per column; extra cells are dropped.
    pub fn new<C, R>(columns: C, rows: R) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        R: IntoIterator<Item = Row>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();

        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over the data cells of the column at the given index.
    pub fn column_cells(&self, index: usize) -> impl Iterator<Item = &str> + '_ {
        self.rows.iter().map(move |row| row[index].as_str())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Restrict the table to the given columns, in the given order.
    ///
    /// A column may be requested more than once. Every requested name
    /// missing from the table is reported at once.
    pub fn project<S: AsRef<str>>(&self, names: &[S]) -> Result<Table> {
        let mut indexes = Vec::with_capacity(names.len());
        let mut unknown = Vec::new();

        for name in names {
            match self.position(name.as_ref()) {
                Some(index) => indexes.push(index),
                None => unknown.push(name.as_ref().to_owned()),
            }
        }

        if !unknown.is_empty() {
            debug!("unknown columns: {:?}", unknown);
            return Err(Error::UnknownColumns(unknown));
        }

        trace!("projected column indexes: {:?}", indexes);

        let columns = indexes.iter().map(|&i| self.columns[i].clone()).collect();
        let rows = self
            .rows
            .iter()
            .map(|row| indexes.iter().map(|&i| row[i].clone()).collect())
            .collect();

        Ok(Table { columns, rows })
    }
}
