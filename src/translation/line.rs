use super::statics::StaticRegistry;
use crate::diagnostic::{Diagnostic, Reporter};
use crate::lexing::{self, Token, TokenKind};
use crate::source::Location;
use log::trace;
use std::ops::Range;

pub const STRUCT_DERIVE: &str = "#[derive(Debug, Clone, Copy, PartialEq, Eq)]";
pub const ZEROED: &str = "unsafe { std::mem::zeroed() }";

/// The structural rule a line falls under, in precedence order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Rule {
    Struct,
    Static,
    UninitializedLet,
    Conditional,
    FunctionWithParameters,
    Plain,
}

impl Rule {
    pub fn classify(tokens: &[Token]) -> Rule {
        let leading = |word: &str| {
            tokens.len() > 1 && tokens[0].is_word(word) && tokens[1].kind == TokenKind::Whitespace
        };

        if leading("struct") {
            Rule::Struct
        } else if leading("static") {
            Rule::Static
        } else if leading("let") && !tokens.iter().any(|t| t.is_symbol("=")) {
            Rule::UninitializedLet
        } else if leading("if") && tokens.last().map_or(false, |t| t.is_symbol("{")) {
            Rule::Conditional
        } else if leading("fn") && has_parameters(tokens) {
            Rule::FunctionWithParameters
        } else {
            Rule::Plain
        }
    }
}

/// The pieces of a `static <name>: <type>;` line, as token positions.
struct StaticDecl {
    name: Option<usize>,
    colon: Option<usize>,
    terminated: bool,
}

impl StaticDecl {
    fn parse(tokens: &[Token]) -> StaticDecl {
        let name = next_significant(tokens, 1).filter(|&i| tokens[i].kind == TokenKind::Word);
        let colon = name
            .and_then(|i| next_significant(tokens, i + 1))
            .filter(|&i| tokens[i].is_symbol(":"));
        let terminated = tokens.last().map_or(false, |t| t.is_symbol(";"));
        StaticDecl {
            name,
            colon,
            terminated,
        }
    }

    fn type_range(&self, tokens: &[Token]) -> Option<Range<usize>> {
        let start = self.colon? + 1;
        let end = if self.terminated {
            tokens.len() - 1
        } else {
            tokens.len()
        };
        if start < end && tokens[start..end].iter().any(|t| t.kind != TokenKind::Whitespace) {
            Some(start..end)
        } else {
            None
        }
    }
}

/// The name a line declares as a static, if it is a static declaration.
pub fn declared_static(line: &str) -> Option<String> {
    let tokens = code_tokens(line.trim());
    if Rule::classify(&tokens) != Rule::Static {
        return None;
    }
    StaticDecl::parse(&tokens)
        .name
        .map(|i| tokens[i].lexeme().to_string())
}

/// Translates one physical line at a time, registering statics as their
/// declarations go by.
pub struct LineTranslator<'a> {
    registry: &'a mut StaticRegistry,
    reporter: &'a dyn Reporter,
}

impl<'a> LineTranslator<'a> {
    pub fn new(registry: &'a mut StaticRegistry, reporter: &'a dyn Reporter) -> Self {
        LineTranslator { registry, reporter }
    }

    /// `line_number` is 1-based and only used for diagnostics.
    pub fn translate(&mut self, line: &str, line_number: usize) -> String {
        let content = line.trim_start();
        let indent = &line[..line.len() - content.len()];
        let content = content.trim_end();

        let mut tokens = code_tokens(content);
        let rule = Rule::classify(&tokens);

        let declaration = if rule == Rule::Static {
            Some(StaticDecl::parse(&tokens))
        } else {
            None
        };
        let exempt = declaration.as_ref().and_then(|d| d.name);
        self.registry.rewrite_tokens(&mut tokens, exempt);

        let context = LineContext {
            line,
            line_number,
            indent,
        };
        let translated = match (rule, declaration) {
            (Rule::Struct, _) => self.struct_decl(&tokens, indent),
            (Rule::Static, Some(declaration)) => self.static_decl(&tokens, &declaration, &context),
            (Rule::UninitializedLet, _) => self.uninitialized_let(&tokens),
            (Rule::Conditional, _) => self.conditional(&tokens, &context),
            (Rule::FunctionWithParameters, _) => self.function_decl(&tokens),
            _ => self.plain(&tokens, &context),
        };

        trace!(target: "translate", "{:?} line {}: {}", rule, line_number, translated.trim());

        format!("{}{}", indent, translated.trim())
    }

    fn struct_decl(&self, tokens: &[Token], indent: &str) -> String {
        let declaration = format!("{}{}", tokens[0].lexeme(), render(tokens, 1..tokens.len()));
        format!("{}\n{}{}", STRUCT_DERIVE, indent, declaration.trim())
    }

    fn static_decl(
        &mut self,
        tokens: &[Token],
        declaration: &StaticDecl,
        context: &LineContext,
    ) -> String {
        let name = match declaration.name {
            Some(index) => tokens[index].lexeme(),
            None => {
                self.warn(context, tokens, "Static declaration is missing a name");
                return render(tokens, 0..tokens.len());
            }
        };
        self.registry.register(name);

        let type_range = match declaration.type_range(tokens) {
            Some(range) => range,
            None => {
                self.warn(context, tokens, "Static declaration is missing a type");
                return render(tokens, 0..tokens.len());
            }
        };
        if !declaration.terminated {
            self.warn(context, tokens, "Static declaration should end with ';'");
        }

        let static_type = render(tokens, type_range);
        format!("static mut {}: Option<{}> = None;", name, static_type.trim())
    }

    fn uninitialized_let(&self, tokens: &[Token]) -> String {
        let binding = render(tokens, 0..tokens.len());
        let binding = binding.trim_end().trim_end_matches(';').trim_end();
        format!("{} = {};", binding, ZEROED)
    }

    fn conditional(&self, tokens: &[Token], context: &LineContext) -> String {
        let condition = render(tokens, 2..tokens.len() - 1);
        let condition = condition.trim();
        if condition.is_empty() {
            self.warn(context, tokens, "Conditional is missing its condition");
        }
        format!("if ({}) as usize != 0 {{", condition)
    }

    fn function_decl(&self, tokens: &[Token]) -> String {
        let (open, close) = match parameter_list(tokens) {
            Some(bounds) => bounds,
            None => return render(tokens, 0..tokens.len()),
        };

        let parameters: Vec<String> = split_parameters(tokens, open + 1..close)
            .into_iter()
            .map(|range| render(tokens, range).trim().to_string())
            .filter(|parameter| !parameter.is_empty())
            .map(|parameter| format!("mut {}", parameter))
            .collect();

        let closing = if close < tokens.len() {
            String::from(")") + &render(tokens, close + 1..tokens.len())
        } else {
            String::new()
        };

        format!(
            "{}({}{}",
            render(tokens, 0..open),
            parameters.join(", "),
            closing
        )
    }

    fn plain(&self, tokens: &[Token], context: &LineContext) -> String {
        if tokens.len() > 1 && tokens[0].is_word("if") && tokens[1].kind == TokenKind::Whitespace {
            self.warn(context, tokens, "Conditional should end with '{'");
        }
        render(tokens, 0..tokens.len())
    }

    fn warn(&self, context: &LineContext, tokens: &[Token], message: &str) {
        let indent = context.indent.chars().count();
        let length = tokens
            .last()
            .map_or(0, |t| t.column + t.lexeme().chars().count());
        let location = Location::new(context.line_number, indent + 1, length);
        self.reporter
            .report(Diagnostic::warning(location, context.line, message));
    }
}

struct LineContext<'a> {
    line: &'a str,
    line_number: usize,
    indent: &'a str,
}

/// Lexes `content`, dropping any trailing comment and trailing whitespace.
fn code_tokens(content: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = lexing::lex(content)
        .into_iter()
        .take_while(|t| t.kind != TokenKind::Comment)
        .collect();
    while tokens
        .last()
        .map_or(false, |t| t.kind == TokenKind::Whitespace)
    {
        tokens.pop();
    }
    tokens
}

/// Renders `tokens[range]`, applying the keyword rewrites. Lookahead may
/// reach past the end of `range`.
fn render(tokens: &[Token], range: Range<usize>) -> String {
    range
        .map(|index| match keyword(tokens, index) {
            Some(replacement) => replacement,
            None => tokens[index].lexeme(),
        })
        .collect()
}

fn keyword(tokens: &[Token], index: usize) -> Option<&'static str> {
    let token = &tokens[index];
    if token.kind != TokenKind::Word {
        return None;
    }
    match token.lexeme() {
        "int" => Some("usize"),
        "let" => Some("let mut"),
        "type" => Some("type_"),
        "struct" => Some("struct_"),
        "static" => Some("static mut"),
        "fn" => Some("unsafe fn"),
        "main" if is_empty_call(tokens, index + 1) => Some("main_"),
        _ => None,
    }
}

fn is_empty_call(tokens: &[Token], index: usize) -> bool {
    index + 1 < tokens.len() && tokens[index].is_symbol("(") && tokens[index + 1].is_symbol(")")
}

fn next_significant(tokens: &[Token], from: usize) -> Option<usize> {
    (from..tokens.len()).find(|&i| tokens[i].kind != TokenKind::Whitespace)
}

/// Positions of the first `(` and its matching `)`; the latter is
/// `tokens.len()` when the list is never closed.
fn parameter_list(tokens: &[Token]) -> Option<(usize, usize)> {
    let open = tokens.iter().position(|t| t.is_symbol("("))?;
    let mut depth = 0;
    for (index, token) in tokens.iter().enumerate().skip(open) {
        match token.lexeme() {
            "(" if token.kind == TokenKind::Symbol => depth += 1,
            ")" if token.kind == TokenKind::Symbol => {
                depth -= 1;
                if depth == 0 {
                    return Some((open, index));
                }
            }
            _ => (),
        }
    }
    Some((open, tokens.len()))
}

fn has_parameters(tokens: &[Token]) -> bool {
    match parameter_list(tokens) {
        Some((open, close)) => tokens[open + 1..close]
            .iter()
            .any(|t| t.kind != TokenKind::Whitespace),
        None => false,
    }
}

/// Splits `range` on commas that aren't nested inside brackets.
fn split_parameters(tokens: &[Token], range: Range<usize>) -> Vec<Range<usize>> {
    let mut parameters = Vec::new();
    let mut depth = 0;
    let mut start = range.start;
    for index in range.clone() {
        let token = &tokens[index];
        if token.kind != TokenKind::Symbol {
            continue;
        }
        match token.lexeme() {
            "(" | "[" | "<" => depth += 1,
            ")" | "]" | ">" => depth -= 1,
            "," if depth == 0 => {
                parameters.push(start..index);
                start = index + 1;
            }
            _ => (),
        }
    }
    parameters.push(start..range.end);
    parameters
}
