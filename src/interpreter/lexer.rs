use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// `låt`
    #[token("låt")]
    Let,
    /// `funktion`
    #[token("funktion")]
    Function,
    /// `sant`
    #[token("sant")]
    True,
    /// `falskt`
    #[token("falskt")]
    False,
    /// `om`
    #[token("om")]
    If,
    /// `annars`
    #[token("annars")]
    Else,
    /// `tillbaka`
    #[token("tillbaka")]
    Return,
    /// Identifier tokens; variable or function names such as `x` or `addera`.
    ///
    /// An identifier is the longest run of letter-class characters: ASCII
    /// letters, underscores, and any non-ASCII character. Treating every
    /// non-ASCII character as a letter keeps multi-byte names such as
    /// `längd` intact.
    #[regex(r"([A-Za-z_]|[^\x00-\x7F])+", |lex| lex.slice().to_string())]
    Ident(String),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Int(i64),
    /// String literal tokens. The payload is the text between the quotes,
    /// with no escape processing. A string missing its closing quote runs
    /// to the end of the input.
    #[regex(r#""[^"]*"?"#, trim_quotes)]
    Str(String),
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    Lt,
    /// `>`
    #[token(">")]
    Gt,
    /// `==`
    #[token("==")]
    Equal,
    /// `!=`
    #[token("!=")]
    NotEqual,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// Input no other rule matches, carried verbatim so the parser can
    /// report it.
    #[regex(r".", |lex| lex.slice().to_string(), priority = 0)]
    Illegal(String),
    /// Spaces, tabs and line breaks.
    #[regex(r"[ \t\r\n]+", logos::skip)]
    Ignored,
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if it fits.
/// - `None`: If the digit run overflows a 64-bit integer, which turns the
///   slice into a [`Token::Illegal`] token.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Strips the surrounding quotes from a string literal slice.
fn trim_quotes(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    let content = slice.strip_prefix('"').unwrap_or(slice);
    content.strip_suffix('"').unwrap_or(content).to_string()
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let literal = match self {
            Self::Let => "låt",
            Self::Function => "funktion",
            Self::True => "sant",
            Self::False => "falskt",
            Self::If => "om",
            Self::Else => "annars",
            Self::Return => "tillbaka",
            Self::Ident(name) => name.as_str(),
            Self::Int(value) => return write!(f, "{value}"),
            Self::Str(value) => value.as_str(),
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Illegal(literal) => literal.as_str(),
            Self::Ignored => "",
        };
        write!(f, "{literal}")
    }
}

/// Turns a source string into tokens on demand.
///
/// The lexer owns no buffer; it walks the borrowed source and hands out one
/// token per [`Lexer::next_token`] call. Input that matches no token rule is
/// returned as [`Token::Illegal`] rather than stopping the stream, so lexing
/// itself never fails.
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, Token>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer over the given source text.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner: Token::lexer(source) }
    }

    /// Pulls the next token from the source.
    ///
    /// # Returns
    /// - `Some(token)`: The next token, with unrecognized input mapped to
    ///   [`Token::Illegal`].
    /// - `None`: Once the input is exhausted, and on every call after that.
    pub fn next_token(&mut self) -> Option<Token> {
        match self.inner.next() {
            Some(Ok(token)) => Some(token),
            Some(Err(())) => Some(Token::Illegal(self.inner.slice().to_string())),
            None => None,
        }
    }
}
