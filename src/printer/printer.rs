use log::debug;
use std::{
    fmt::Debug,
    io::{self, BufWriter, Write},
};

use crate::{
    printer::{PrintTable, PrintTableOpts},
    Error, Result,
};

pub trait Printer {
    fn print_table<T: Debug + PrintTable + ?Sized>(
        &mut self,
        data: &T,
        opts: PrintTableOpts,
    ) -> Result<()>;
}

pub struct StdoutPrinter {
    pub writer: Box<dyn Write>,
}

impl Default for StdoutPrinter {
    fn default() -> Self {
        let writer = Box::new(BufWriter::new(io::stdout()));
        Self { writer }
    }
}

impl StdoutPrinter {
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl Printer for StdoutPrinter {
    fn print_table<T: Debug + PrintTable + ?Sized>(
        &mut self,
        data: &T,
        opts: PrintTableOpts,
    ) -> Result<()> {
        debug!("printing table with style {}", opts.style);
        data.print_table(self.writer.as_mut(), opts)?;
        self.writer.flush().map_err(Error::Write)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::{output::Style, table::Table};

    /// Writer sharing its buffer so the test can read what was printed.
    #[derive(Clone, Default)]
    struct SharedBuf(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn print_table_writes_and_flushes() {
        let buf = SharedBuf::default();
        let mut printer = StdoutPrinter::new(Box::new(BufWriter::new(buf.clone())));
        let table = Table::new(["a", "b"], vec![vec!["1".into(), "2".into()]]);

        printer
            .print_table(&table, PrintTableOpts { style: Style::Tab })
            .unwrap();

        assert_eq!(buf.0.borrow().as_slice(), b"a\tb\n1\t2\n");
    }
}
