mod readers;
mod util;
mod writers;

pub use readers::open_table_reader;
pub use util::{handle_error_and_exit, InspectorError, Result};
pub use writers::create_output_writer;
