pub mod print_table;
#[allow(clippy::module_inception)]
pub mod printer;

pub use print_table::*;
pub use printer::*;
