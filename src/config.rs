use log::warn;
use std::env;

/// Which lines see a static once it is declared.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StaticScope {
    /// Only lines after the declaration have their references rewritten.
    FollowingLines,
    /// Every declaration is collected first, so references anywhere are rewritten.
    WholeProgram,
}

impl StaticScope {
    pub fn parse(value: &str) -> Option<StaticScope> {
        match value.trim() {
            "following" => Some(StaticScope::FollowingLines),
            "whole" => Some(StaticScope::WholeProgram),
            _ => None,
        }
    }
}

/// Files the emitted program reads from and writes to, relative to its working directory.
#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeFiles {
    pub input: String,
    pub output: String,
}

impl Default for RuntimeFiles {
    fn default() -> Self {
        RuntimeFiles {
            input: String::from("test.txt"),
            output: String::from("out.bin"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub runtime: RuntimeFiles,
    pub compiler: String,
    pub compiler_flags: Vec<String>,
    pub static_scope: StaticScope,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            runtime: RuntimeFiles::default(),
            compiler: String::from("rustc"),
            compiler_flags: vec![String::from("-O")],
            static_scope: StaticScope::FollowingLines,
        }
    }
}

impl Config {
    pub fn from_env() -> Config {
        Config::from_vars(|key| env::var(key).ok())
    }

    /// Builds a config from the defaults, overridden by whatever `lookup` yields
    /// for the `SPARK_*` keys.
    pub fn from_vars<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(compiler) = lookup("SPARK_RUSTC") {
            config.compiler = compiler;
        }
        if let Some(flags) = lookup("SPARK_RUSTC_FLAGS") {
            config.compiler_flags = flags.split_whitespace().map(String::from).collect();
        }
        if let Some(input) = lookup("SPARK_INPUT") {
            config.runtime.input = input;
        }
        if let Some(output) = lookup("SPARK_OUTPUT") {
            config.runtime.output = output;
        }
        if let Some(scope) = lookup("SPARK_STATIC_SCOPE") {
            match StaticScope::parse(&scope) {
                Some(scope) => config.static_scope = scope,
                None => warn!(target: "config", "Ignoring unknown static scope '{}'", scope),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_without_overrides() {
        let config = Config::from_vars(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(config.compiler, "rustc");
        assert_eq!(config.compiler_flags, vec![String::from("-O")]);
        assert_eq!(config.runtime.input, "test.txt");
        assert_eq!(config.runtime.output, "out.bin");
    }

    #[test]
    fn overrides() {
        let mut vars = HashMap::new();
        vars.insert("SPARK_RUSTC", "/opt/rust/bin/rustc");
        vars.insert("SPARK_RUSTC_FLAGS", "-C opt-level=3");
        vars.insert("SPARK_INPUT", "in.txt");
        vars.insert("SPARK_STATIC_SCOPE", "whole");

        let config = Config::from_vars(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.compiler, "/opt/rust/bin/rustc");
        assert_eq!(config.compiler_flags, vec!["-C", "opt-level=3"]);
        assert_eq!(config.runtime.input, "in.txt");
        assert_eq!(config.runtime.output, "out.bin");
        assert_eq!(config.static_scope, StaticScope::WholeProgram);
    }

    #[test]
    fn unknown_scope_keeps_default() {
        let config = Config::from_vars(|key| {
            if key == "SPARK_STATIC_SCOPE" {
                Some(String::from("sometimes"))
            } else {
                None
            }
        });
        assert_eq!(config.static_scope, StaticScope::FollowingLines);
    }
}
