pub use spark_bootstrap::diagnostic::*;
use spark_bootstrap::translation::{LineTranslator, StaticRegistry};
use std::cell::RefCell;
use std::rc::Rc;

pub type TestResult = std::result::Result<(), String>;

pub struct TestReporter {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

#[allow(dead_code)]
impl TestReporter {
    pub fn new() -> Rc<TestReporter> {
        Rc::new(TestReporter {
            diagnostics: RefCell::new(Vec::new()),
        })
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }
}

impl Reporter for TestReporter {
    fn report(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }
}

pub trait DiagnosticString {
    fn diagnostic_string(&self) -> String;
}

impl DiagnosticString for [Diagnostic] {
    fn diagnostic_string(&self) -> String {
        self.iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Runs `lines` through one line translator sharing a fresh registry.
#[allow(dead_code)]
pub fn translate_lines(lines: &[&str]) -> (Vec<String>, StaticRegistry, Vec<Diagnostic>) {
    let reporter = TestReporter::new();
    let mut registry = StaticRegistry::new();
    let translated: Vec<String> = {
        let mut translator = LineTranslator::new(&mut registry, reporter.as_ref());
        lines
            .iter()
            .enumerate()
            .map(|(index, line)| translator.translate(line, index + 1))
            .collect()
    };
    (translated, registry, reporter.diagnostics())
}

#[allow(dead_code)]
pub fn assert_lines(lines: &[&str], expected: &[&str]) -> TestResult {
    let (translated, _, diagnostics) = translate_lines(lines);

    if !diagnostics.is_empty() {
        return Err(format!(
            "Expected no diagnostics, got: {}",
            diagnostics.diagnostic_string()
        ));
    }

    if translated == expected {
        Ok(())
    } else {
        println!();
        println!("Expected:");
        println!("{}", expected.join("\n"));
        println!("Got:");
        println!("{}", translated.join("\n"));
        println!();
        Err(String::from("Translation did not match"))
    }
}
