use crate::source::Location;
use colored::*;
use std::fmt;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub location: Option<Location>,
    pub line: Option<String>,
}

impl Diagnostic {
    pub fn error(message: &str) -> Self {
        Diagnostic {
            severity: Severity::Error,
            message: String::from(message),
            location: None,
            line: None,
        }
    }

    pub fn warning(location: Location, line: &str, message: &str) -> Self {
        Diagnostic {
            severity: Severity::Warning,
            message: String::from(message),
            location: Some(location),
            line: Some(String::from(line)),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let severity = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        match &self.location {
            Some(location) => write!(f, "{} at {}: {}", severity, location, self.message),
            None => write!(f, "{}: {}", severity, self.message),
        }
    }
}

pub trait Reporter {
    fn report(&self, diagnostic: Diagnostic);
}

pub struct DefaultReporter {}

impl DefaultReporter {
    pub fn new() -> Rc<Self> {
        Rc::new(DefaultReporter {})
    }
}

impl Reporter for DefaultReporter {
    fn report(&self, diagnostic: Diagnostic) {
        let header = if diagnostic.severity == Severity::Error {
            "• Error:".red().bold()
        } else {
            "• Warning:".yellow().bold()
        };
        println!("\n{} {}\n", header, diagnostic.message);

        if let (Some(location), Some(line)) = (&diagnostic.location, &diagnostic.line) {
            println!("  {}", line);
            println!("  {}", location.underline());
            println!("  {}\n", location);
        }
    }
}
