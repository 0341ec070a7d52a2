//! Column selection.

use std::{convert::Infallible, fmt, str::FromStr};

use super::Table;

/// Token selecting every column of the table.
pub const ALL_COLUMNS: &str = "all-columns";

/// User expression selecting which columns to display.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum ColumnSpec {
    /// Every column, in header order.
    #[default]
    All,
    /// The given columns, in the given order.
    Names(Vec<String>),
}

impl ColumnSpec {
    /// Resolve the spec against a table.
    ///
    /// Names are returned as given: they are neither deduplicated nor
    /// checked against the table. Unknown names surface when the table
    /// is projected.
    pub fn select(&self, table: &Table) -> Vec<String> {
        match self {
            Self::All => table.columns().to_vec(),
            Self::Names(names) => names.clone(),
        }
    }
}

impl FromStr for ColumnSpec {
    type Err = Infallible;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        if spec == ALL_COLUMNS {
            Ok(Self::All)
        } else {
            Ok(Self::Names(spec.split(',').map(String::from).collect()))
        }
    }
}

impl From<&str> for ColumnSpec {
    fn from(spec: &str) -> Self {
        match spec.parse() {
            Ok(spec) => spec,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "{ALL_COLUMNS}"),
            Self::Names(names) => write!(f, "{}", names.join(",")),
        }
    }
}
