use std::io;

use crate::{
    output::{self, Style},
    table::Table,
    Error, Result,
};

pub trait PrintTable {
    fn print_table(&self, writer: &mut dyn io::Write, opts: PrintTableOpts) -> Result<()>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PrintTableOpts {
    pub style: Style,
}

impl PrintTable for Table {
    fn print_table(&self, writer: &mut dyn io::Write, opts: PrintTableOpts) -> Result<()> {
        output::render(self, opts.style, writer).map_err(Error::Write)
    }
}
