use apa::interpreter::lexer::{Lexer, Token};

fn ident(name: &str) -> Token {
    Token::Ident(name.to_string())
}

#[test]
fn next_token_covers_the_full_token_set() {
    let input = r#"låt fem = 5;
låt tio = 10;
låt addera = funktion(x, y) {
     x + y;
};
låt resultat = addera(fem, tio);
!-/*5;
5 < 10 > 5;
om (5 < 10) {
   tillbaka sant;
} annars {
   tillbaka falskt;
}

10 == 10;
10 != 9;
"foobar"
"foo bar"
låt arr = [1, 2]; arr[1];"#;

    let expected = [
        Token::Let,
        ident("fem"),
        Token::Assign,
        Token::Int(5),
        Token::Semicolon,
        Token::Let,
        ident("tio"),
        Token::Assign,
        Token::Int(10),
        Token::Semicolon,
        Token::Let,
        ident("addera"),
        Token::Assign,
        Token::Function,
        Token::LParen,
        ident("x"),
        Token::Comma,
        ident("y"),
        Token::RParen,
        Token::LBrace,
        ident("x"),
        Token::Plus,
        ident("y"),
        Token::Semicolon,
        Token::RBrace,
        Token::Semicolon,
        Token::Let,
        ident("resultat"),
        Token::Assign,
        ident("addera"),
        Token::LParen,
        ident("fem"),
        Token::Comma,
        ident("tio"),
        Token::RParen,
        Token::Semicolon,
        Token::Bang,
        Token::Minus,
        Token::Slash,
        Token::Asterisk,
        Token::Int(5),
        Token::Semicolon,
        Token::Int(5),
        Token::Lt,
        Token::Int(10),
        Token::Gt,
        Token::Int(5),
        Token::Semicolon,
        Token::If,
        Token::LParen,
        Token::Int(5),
        Token::Lt,
        Token::Int(10),
        Token::RParen,
        Token::LBrace,
        Token::Return,
        Token::True,
        Token::Semicolon,
        Token::RBrace,
        Token::Else,
        Token::LBrace,
        Token::Return,
        Token::False,
        Token::Semicolon,
        Token::RBrace,
        Token::Int(10),
        Token::Equal,
        Token::Int(10),
        Token::Semicolon,
        Token::Int(10),
        Token::NotEqual,
        Token::Int(9),
        Token::Semicolon,
        Token::Str("foobar".to_string()),
        Token::Str("foo bar".to_string()),
        Token::Let,
        ident("arr"),
        Token::Assign,
        Token::LBracket,
        Token::Int(1),
        Token::Comma,
        Token::Int(2),
        Token::RBracket,
        Token::Semicolon,
        ident("arr"),
        Token::LBracket,
        Token::Int(1),
        Token::RBracket,
        Token::Semicolon,
    ];

    let mut lexer = Lexer::new(input);
    for (index, expected_token) in expected.iter().enumerate() {
        let token = lexer.next_token();
        assert_eq!(token.as_ref(), Some(expected_token), "tokens[{index}]");
    }

    // Past the end the stream stays exhausted.
    assert_eq!(lexer.next_token(), None);
    assert_eq!(lexer.next_token(), None);
}

#[test]
fn keywords_are_not_matched_inside_longer_identifiers() {
    let mut lexer = Lexer::new("låter santa omelett");

    assert_eq!(lexer.next_token(), Some(ident("låter")));
    assert_eq!(lexer.next_token(), Some(ident("santa")));
    assert_eq!(lexer.next_token(), Some(ident("omelett")));
    assert_eq!(lexer.next_token(), None);
}

#[test]
fn multi_byte_identifiers_lex_as_single_tokens() {
    let mut lexer = Lexer::new("längd två_öl");

    assert_eq!(lexer.next_token(), Some(ident("längd")));
    assert_eq!(lexer.next_token(), Some(ident("två_öl")));
    assert_eq!(lexer.next_token(), None);
}

#[test]
fn hash_literal_input_lexes_with_colons() {
    let input = r#"{"ett": 1}"#;
    let expected = [
        Token::LBrace,
        Token::Str("ett".to_string()),
        Token::Colon,
        Token::Int(1),
        Token::RBrace,
    ];

    let mut lexer = Lexer::new(input);
    for expected_token in &expected {
        assert_eq!(lexer.next_token().as_ref(), Some(expected_token));
    }
    assert_eq!(lexer.next_token(), None);
}

#[test]
fn unterminated_strings_run_to_the_end_of_input() {
    let mut lexer = Lexer::new(r#""hej"#);

    assert_eq!(lexer.next_token(), Some(Token::Str("hej".to_string())));
    assert_eq!(lexer.next_token(), None);
}

#[test]
fn unrecognized_input_becomes_illegal_tokens() {
    let mut lexer = Lexer::new("5 @ 5");

    assert_eq!(lexer.next_token(), Some(Token::Int(5)));
    assert_eq!(lexer.next_token(), Some(Token::Illegal("@".to_string())));
    assert_eq!(lexer.next_token(), Some(Token::Int(5)));
    assert_eq!(lexer.next_token(), None);
}

#[test]
fn integer_literals_that_overflow_are_illegal() {
    let mut lexer = Lexer::new("99999999999999999999");

    assert_eq!(
        lexer.next_token(),
        Some(Token::Illegal("99999999999999999999".to_string()))
    );
    assert_eq!(lexer.next_token(), None);
}
