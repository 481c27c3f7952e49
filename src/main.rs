use env_logger;
use spark_bootstrap::config::Config;
use spark_bootstrap::diagnostic::{DefaultReporter, Diagnostic, Reporter};
use std::env;
use std::path::Path;
use std::process;
use std::rc::Rc;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let path = match spark_bootstrap::cli_path(&args) {
        Some(path) => path,
        None => {
            let program = args.first().map_or("spark-bootstrap", |p| p.as_str());
            println!("{}", spark_bootstrap::usage(program));
            return;
        }
    };

    let reporter: Rc<dyn Reporter> = DefaultReporter::new();
    let config = Config::from_env();

    match spark_bootstrap::run(Path::new(path), config, Rc::clone(&reporter)) {
        Ok(compilation) => {
            if !compilation.status.success() {
                process::exit(compilation.status.code().unwrap_or(1));
            }
        }
        Err(error) => {
            reporter.report(Diagnostic::error(&error.to_string()));
            process::exit(1);
        }
    }
}
