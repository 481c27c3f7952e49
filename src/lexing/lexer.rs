use super::token::*;

/// Whether `character` may appear inside an identifier.
pub fn is_identifier_char(character: char) -> bool {
    character.is_ascii_alphanumeric() || character == '_'
}

/// Splits a single line into tokens. Lexing never fails: anything that isn't
/// a word, literal, comment or whitespace becomes a one-character symbol.
pub struct Lexer {
    chars: Vec<char>,
    start: usize,
    current: usize,
}

impl Lexer {
    pub fn new(line: &str) -> Self {
        Lexer {
            chars: line.chars().collect(),
            start: 0,
            current: 0,
        }
    }

    pub fn lex(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while !self.is_at_end() {
            self.start = self.current;
            tokens.push(self.token());
        }

        tokens
    }

    fn token(&mut self) -> Token {
        let character = self.advance();
        match character {
            '/' if self.peek() == Some('/') => self.comment(),
            '"' => self.string(),
            '\'' => self.character(),
            c if is_identifier_char(c) => self.word(),
            c if c.is_whitespace() => self.whitespace(),
            _ => self.make_token(TokenKind::Symbol),
        }
    }

    fn comment(&mut self) -> Token {
        self.current = self.chars.len();
        self.make_token(TokenKind::Comment)
    }

    fn string(&mut self) -> Token {
        while let Some(character) = self.peek() {
            self.advance();
            match character {
                '\\' => {
                    if !self.is_at_end() {
                        self.advance();
                    }
                }
                '"' => break,
                _ => (),
            }
        }
        self.make_token(TokenKind::StringLiteral)
    }

    fn character(&mut self) -> Token {
        match self.peek() {
            Some('\\') => {
                self.advance();
                if !self.is_at_end() {
                    self.advance();
                }
            }
            Some('\'') | None => return self.make_token(TokenKind::Symbol),
            Some(_) => {
                self.advance();
            }
        }

        if self.consume('\'') {
            self.make_token(TokenKind::CharLiteral)
        } else {
            self.current = self.start + 1;
            self.make_token(TokenKind::Symbol)
        }
    }

    fn word(&mut self) -> Token {
        while let Some(character) = self.peek() {
            if is_identifier_char(character) {
                self.advance();
            } else {
                break;
            }
        }
        self.make_token(TokenKind::Word)
    }

    fn whitespace(&mut self) -> Token {
        while let Some(character) = self.peek() {
            if character.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
        self.make_token(TokenKind::Whitespace)
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        let lexeme: String = self.chars[self.start..self.current].iter().collect();
        Token::new(kind, &lexeme, self.start)
    }

    fn consume(&mut self, character: char) -> bool {
        if self.peek() == Some(character) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn advance(&mut self) -> char {
        let character = self.chars[self.current];
        self.current += 1;
        character
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.current).copied()
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(line: &str) -> Vec<(TokenKind, String)> {
        Lexer::new(line)
            .lex()
            .into_iter()
            .map(|t| (t.kind, t.lexeme))
            .collect()
    }

    #[test]
    fn identifier_chars() {
        assert!(is_identifier_char('a'));
        assert!(is_identifier_char('Z'));
        assert!(is_identifier_char('7'));
        assert!(is_identifier_char('_'));
        assert!(!is_identifier_char('-'));
        assert!(!is_identifier_char(' '));
        assert!(!is_identifier_char('é'));
    }

    #[test]
    fn unterminated_char_is_a_symbol() {
        assert_eq!(
            kinds("'ab"),
            vec![
                (TokenKind::Symbol, String::from("'")),
                (TokenKind::Word, String::from("ab")),
            ]
        );
    }

    #[test]
    fn escaped_quote_stays_in_string() {
        assert_eq!(
            kinds(r#""a\"b" x"#),
            vec![
                (TokenKind::StringLiteral, String::from(r#""a\"b""#)),
                (TokenKind::Whitespace, String::from(" ")),
                (TokenKind::Word, String::from("x")),
            ]
        );
    }
}
