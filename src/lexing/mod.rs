pub mod lexer;
pub mod token;

pub use lexer::{is_identifier_char, Lexer};
pub use token::{Token, TokenKind, TokenString};

pub fn lex(line: &str) -> Vec<Token> {
    Lexer::new(line).lex()
}
