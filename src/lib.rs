pub mod codegen;
pub mod config;
pub mod diagnostic;
pub mod lexing;
pub mod source;
pub mod translation;

use codegen::*;
use config::Config;
use diagnostic::Reporter;
use std::path::Path;
use std::rc::Rc;

pub use source::Source;

/// The source path, when exactly one argument follows the program name.
pub fn cli_path(args: &[String]) -> Option<&str> {
    match args {
        [_, path] => Some(path.as_str()),
        _ => None,
    }
}

pub fn usage(program: &str) -> String {
    format!("usage: {} <file>", program)
}

pub fn run(path: &Path, config: Config, reporter: Rc<dyn Reporter>) -> Result<Compilation, DriverError> {
    Driver::new(config, reporter).compile(path)
}
