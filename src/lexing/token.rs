use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TokenKind {
    /// A maximal run of identifier characters: keywords, names and numbers alike.
    Word,
    StringLiteral,
    CharLiteral,
    Comment,
    Whitespace,
    Symbol,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    /// Character offset of the token within the lexed text.
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: &str, column: usize) -> Self {
        Token {
            kind,
            lexeme: String::from(lexeme),
            column,
        }
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn is_word(&self, word: &str) -> bool {
        self.kind == TokenKind::Word && self.lexeme == word
    }

    pub fn is_symbol(&self, symbol: &str) -> bool {
        self.kind == TokenKind::Symbol && self.lexeme == symbol
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Token(kind: {:#?}, lexeme: {})",
            self.kind,
            self.lexeme()
        )
    }
}

pub trait TokenString {
    fn token_string(&self) -> String;
    fn text(&self) -> String;
}

impl TokenString for [Token] {
    fn token_string(&self) -> String {
        let toks = self
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        String::from("Vec(") + &toks + ")"
    }

    fn text(&self) -> String {
        self.iter().map(|t| t.lexeme()).collect()
    }
}
