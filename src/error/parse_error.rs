#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// The parser expected one token and found another.
    UnexpectedToken {
        /// The expected token, rendered as its source literal.
        expected: String,
        /// The token that was actually found.
        found: String,
    },
    /// A token appeared in expression position that no expression can
    /// start with.
    NoPrefixParseFn {
        /// The offending token.
        token: String,
    },
    /// The lexer could not match the input against any token rule.
    IllegalToken {
        /// The unrecognized source text.
        literal: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found } => {
                write!(f, "expected next token to be {expected}, got {found} instead")
            },
            Self::NoPrefixParseFn { token } => {
                write!(f, "no prefix parse function for {token} found")
            },
            Self::IllegalToken { literal } => write!(f, "illegal token {literal:?}"),
        }
    }
}

impl std::error::Error for ParseError {}
