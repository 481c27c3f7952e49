use super::line::{declared_static, LineTranslator};
use super::statics::StaticRegistry;
use crate::codegen::{PreludeWriter, LINT_HEADER};
use crate::config::{Config, RuntimeFiles, StaticScope};
use crate::diagnostic::Reporter;
use crate::source::Source;
use log::{debug, trace};
use std::rc::Rc;

/// Translates whole programs. The registry is reset at the start of every
/// translation, so one translator can be reused across sources.
pub struct Translator {
    registry: StaticRegistry,
    reporter: Rc<dyn Reporter>,
    scope: StaticScope,
    runtime: RuntimeFiles,
}

impl Translator {
    pub fn new(config: &Config, reporter: Rc<dyn Reporter>) -> Self {
        Translator {
            registry: StaticRegistry::new(),
            reporter,
            scope: config.static_scope,
            runtime: config.runtime.clone(),
        }
    }

    pub fn translate(&mut self, source: &Source) -> String {
        self.registry = StaticRegistry::new();

        if self.scope == StaticScope::WholeProgram {
            self.collect_statics(source);
        }

        debug!(target: "translate", "Translating {} ({} lines)", source.name, source.line_count());

        let mut lines = Vec::new();
        let mut translator = LineTranslator::new(&mut self.registry, self.reporter.as_ref());
        for (index, line) in source.lines().enumerate() {
            lines.push(translator.translate(line, index + 1));
        }

        trace!(target: "translate", "{}", self.registry);

        let mut program = String::from(LINT_HEADER);
        program.push('\n');
        program.push_str(&lines.join("\n"));
        program.push_str(&PreludeWriter::write(&self.registry, &self.runtime));
        program
    }

    /// Statics known after the most recent translation.
    pub fn registry(&self) -> &StaticRegistry {
        &self.registry
    }

    fn collect_statics(&mut self, source: &Source) {
        for line in source.lines() {
            if let Some(name) = declared_static(line) {
                self.registry.register(&name);
            }
        }
    }
}

/// Translates `source` with the default configuration.
pub fn translate(source: &Source, reporter: Rc<dyn Reporter>) -> String {
    Translator::new(&Config::default(), reporter).translate(source)
}
