//! # tv
//!
//! Select columns of a delimited table, align and view them.
//!
//! The pipeline is: read the file into a [`table::Table`], resolve the
//! [`table::ColumnSpec`] into column names, project the table onto
//! them, then render it with an [`output::Style`].

pub mod cli;
pub mod config;
mod error;
pub mod output;
pub mod printer;
pub mod table;

pub use error::{Error, Result};
