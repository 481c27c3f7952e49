pub mod driver;
pub mod prelude;

pub use driver::{output_path, Compilation, Driver, DriverError};
pub use prelude::{PreludeWriter, END_OF_INPUT, LINT_HEADER};
