use spark_bootstrap::lexing::*;

fn test(kind: TokenKind, text: &str, column: usize) -> Token {
    Token::new(kind, text, column)
}

#[test]
fn static_declaration() {
    let tokens = lex("static counter: int;");
    assert_eq!(
        tokens,
        vec![
            test(TokenKind::Word, "static", 0),
            test(TokenKind::Whitespace, " ", 6),
            test(TokenKind::Word, "counter", 7),
            test(TokenKind::Symbol, ":", 14),
            test(TokenKind::Whitespace, " ", 15),
            test(TokenKind::Word, "int", 16),
            test(TokenKind::Symbol, ";", 19),
        ]
    );
}

#[test]
fn words_are_maximal() {
    let words: Vec<String> = lex("counter2 + _tmp + 1counter")
        .into_iter()
        .filter(|t| t.kind == TokenKind::Word)
        .map(|t| t.lexeme)
        .collect();
    assert_eq!(words, vec!["counter2", "_tmp", "1counter"]);
}

#[test]
fn comment_runs_to_end_of_line() {
    let tokens = lex("x = 1; // x = 2");
    let last = tokens.last().unwrap();
    assert_eq!(last.kind, TokenKind::Comment);
    assert_eq!(last.lexeme(), "// x = 2");
    assert_eq!(last.column, 7);
}

#[test]
fn literals() {
    let tokens = lex("write('a', \"n // m\", '\\n')");
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Word,
            TokenKind::Symbol,
            TokenKind::CharLiteral,
            TokenKind::Symbol,
            TokenKind::Whitespace,
            TokenKind::StringLiteral,
            TokenKind::Symbol,
            TokenKind::Whitespace,
            TokenKind::CharLiteral,
            TokenKind::Symbol,
        ]
    );
    assert_eq!(tokens[8].lexeme(), "'\\n'");
}

#[test]
fn text_round_trips() {
    let line = "  fn add(a: int, b: int) -> int { // sum";
    assert_eq!(lex(line).text(), line);
}

#[test]
fn token_string() {
    let tokens = lex("x;");
    assert_eq!(
        tokens.token_string(),
        "Vec(Token(kind: Word, lexeme: x), Token(kind: Symbol, lexeme: ;))"
    );
}
