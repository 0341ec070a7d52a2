use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use std::{path::PathBuf, str::FromStr};

use crate::{
    config::{self, TomlConfig},
    output::Style,
    printer::{PrintTableOpts, Printer},
    table::{
        reader::{parse_delimiter, DEFAULT_DELIMITER},
        ColumnSpec, TableReader,
    },
};

/// Select columns, align and view
///
/// Read a delimited table, keep the requested columns and print them
/// either tab-separated, aligned, or aligned with a fixed maximum
/// column width.
#[derive(Parser, Debug)]
#[command(name = "tv", author, version, about, long_about = None)]
pub struct Cli {
    /// Input file
    ///
    /// Path to a delimited text file whose first line is the header.
    /// Use "-" to read the standard input.
    #[arg(long, short, value_name = "FILE")]
    pub input: PathBuf,

    /// Column names, separated by ","
    ///
    /// Columns are printed in the given order. The special value
    /// "all-columns" selects every column in header order.
    /// [default: all-columns]
    #[arg(long, short, value_name = "SPEC")]
    pub columns: Option<String>,

    /// Table delimiter
    ///
    /// A single ASCII character. "\t" is accepted for a tab.
    /// [default: tab]
    #[arg(long, short, value_name = "CHAR")]
    pub delimiter: Option<String>,

    /// Print style
    ///
    /// The possible values are:
    ///
    ///  - t: tab separated table
    ///
    ///  - a: align columns
    ///
    ///  - f<N>: align columns, columns wider than N keep their last N
    ///    characters, e.g. "f50"
    ///
    /// [default: t]
    #[arg(long, short, alias = "stlye", value_name = "STYLE")]
    #[arg(value_parser = Style::from_str)]
    pub style: Option<Style>,

    /// Override the default configuration file path
    ///
    /// The configuration file provides defaults for the delimiter,
    /// columns and style options.
    #[arg(long, value_name = "PATH", value_parser = config::path_parser)]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn execute(self, printer: &mut impl Printer) -> Result<()> {
        let config = TomlConfig::from_opt_path(self.config.as_deref())?;

        let delimiter = match self.delimiter.or(config.delimiter) {
            Some(delimiter) => parse_delimiter(&delimiter)?,
            None => DEFAULT_DELIMITER,
        };
        let spec = self
            .columns
            .or(config.columns)
            .map(|spec| ColumnSpec::from(spec.as_str()))
            .unwrap_or_default();
        let style = self.style.or(config.style).unwrap_or_default();
        debug!("delimiter: {:?}", delimiter as char);
        debug!("columns: {}", spec);
        debug!("style: {}", style);

        let table = TableReader::new()
            .delimiter(delimiter)
            .read_path(&self.input)
            .with_context(|| format!("cannot load table from {:?}", self.input))?;

        let columns = spec.select(&table);
        let table = table
            .project(&columns)
            .context("cannot select columns")?;

        printer
            .print_table(&table, PrintTableOpts { style })
            .context("cannot print table")
    }
}
