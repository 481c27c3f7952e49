use crate::lexing::{self, Token, TokenKind, TokenString};
use log::trace;
use std::collections::BTreeSet;
use std::fmt;

/// The expression every reference to a static is replaced with: a checked
/// dereference of its lazily initialized cell.
pub fn wrapper(name: &str) -> String {
    format!("(*{}.as_mut().unwrap())", name)
}

/// Names declared as statics so far in one translation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StaticRegistry {
    names: BTreeSet<String>,
}

impl StaticRegistry {
    pub fn new() -> Self {
        StaticRegistry {
            names: BTreeSet::new(),
        }
    }

    /// Returns whether `name` was newly added.
    pub fn register(&mut self, name: &str) -> bool {
        let added = self.names.insert(String::from(name));
        if added {
            trace!(target: "statics", "Registered static {}", name);
        }
        added
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|n| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Replaces every word token naming a registered static with its wrapper,
    /// leaving the token at `exempt` alone. Returns the number of replacements.
    pub fn rewrite_tokens(&self, tokens: &mut [Token], exempt: Option<usize>) -> usize {
        let mut count = 0;
        for (index, token) in tokens.iter_mut().enumerate() {
            if Some(index) == exempt || token.kind != TokenKind::Word {
                continue;
            }
            if self.contains(&token.lexeme) {
                token.lexeme = wrapper(&token.lexeme);
                count += 1;
            }
        }
        count
    }
}

impl fmt::Display for StaticRegistry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let names: Vec<&str> = self.names().collect();
        write!(f, "StaticRegistry({})", names.join(", "))
    }
}

/// Rewrites every free-standing reference to a registered static in `line`.
/// Names embedded in longer identifiers, string or char literals, or comments
/// are left untouched.
pub fn rewrite_references(line: &str, registry: &StaticRegistry) -> String {
    if registry.is_empty() {
        return String::from(line);
    }
    let mut tokens = lexing::lex(line);
    registry.rewrite_tokens(&mut tokens, None);
    tokens.text()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(names: &[&str]) -> StaticRegistry {
        let mut registry = StaticRegistry::new();
        for name in names {
            registry.register(name);
        }
        registry
    }

    #[test]
    fn register_is_idempotent() {
        let mut registry = StaticRegistry::new();
        assert!(registry.register("counter"));
        assert!(!registry.register("counter"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn rewrites_only_whole_words() {
        let registry = registry(&["counter"]);
        assert_eq!(
            rewrite_references("counter = counter2 + 1", &registry),
            "(*counter.as_mut().unwrap()) = counter2 + 1"
        );
        assert_eq!(
            rewrite_references("my_counter = xcounter;", &registry),
            "my_counter = xcounter;"
        );
    }

    #[test]
    fn rewrites_every_occurrence() {
        let registry = registry(&["n", "m"]);
        assert_eq!(
            rewrite_references("n = n + m;", &registry),
            "(*n.as_mut().unwrap()) = (*n.as_mut().unwrap()) + (*m.as_mut().unwrap());"
        );
    }

    #[test]
    fn leaves_literals_alone() {
        let registry = registry(&["n"]);
        assert_eq!(
            rewrite_references("f(\"n\", 'n', n) // n", &registry),
            "f(\"n\", 'n', (*n.as_mut().unwrap())) // n"
        );
    }

    #[test]
    fn field_access_on_static() {
        let registry = registry(&["point"]);
        assert_eq!(
            rewrite_references("point.x = 3;", &registry),
            "(*point.as_mut().unwrap()).x = 3;"
        );
    }

    #[test]
    fn enumerates_sorted() {
        let registry = registry(&["zeta", "alpha", "mid"]);
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
        assert_eq!(registry.to_string(), "StaticRegistry(alpha, mid, zeta)");
    }
}
