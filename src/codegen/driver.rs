use crate::config::Config;
use crate::diagnostic::Reporter;
use crate::source::Source;
use crate::translation::Translator;
use log::{debug, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("couldn't read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("couldn't write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("couldn't run {compiler}: {source}")]
    Compiler { compiler: String, source: io::Error },
}

/// Where the translation of `source` is written: the same path with an `rs` extension.
pub fn output_path(source: &Path) -> PathBuf {
    source.with_extension("rs")
}

pub struct Compilation {
    pub output_path: PathBuf,
    pub status: ExitStatus,
}

pub struct Driver {
    config: Config,
    reporter: Rc<dyn Reporter>,
}

impl Driver {
    pub fn new(config: Config, reporter: Rc<dyn Reporter>) -> Self {
        Driver { config, reporter }
    }

    /// Translates `path`, writes the result next to it and runs the compiler on it.
    pub fn compile(&self, path: &Path) -> Result<Compilation, DriverError> {
        let output_path = self.emit(path)?;
        let status = self.invoke_compiler(&output_path)?;

        info!(target: "driver", "{} exited with {}", self.config.compiler, status);

        Ok(Compilation {
            output_path,
            status,
        })
    }

    /// Translates `path` and writes the result without compiling it.
    pub fn emit(&self, path: &Path) -> Result<PathBuf, DriverError> {
        let source = Source::load(path).map_err(|source| DriverError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut translator = Translator::new(&self.config, Rc::clone(&self.reporter));
        let program = translator.translate(&source);

        let output_path = output_path(path);
        debug!(target: "driver", "Writing {} ({} statics)", output_path.display(), translator.registry().len());

        fs::write(&output_path, program).map_err(|source| DriverError::Write {
            path: output_path.clone(),
            source,
        })?;

        Ok(output_path)
    }

    fn invoke_compiler(&self, output_path: &Path) -> Result<ExitStatus, DriverError> {
        debug!(
            target: "driver",
            "Running {} {} {}",
            self.config.compiler,
            self.config.compiler_flags.join(" "),
            output_path.display()
        );

        Command::new(&self.config.compiler)
            .args(&self.config.compiler_flags)
            .arg(output_path)
            .status()
            .map_err(|source| DriverError::Compiler {
                compiler: self.config.compiler.clone(),
                source,
            })
    }
}
