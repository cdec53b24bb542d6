#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Positions are byte offsets into the canonical expression text.
pub enum ParseError {
    /// Found a character or token that cannot start or continue the
    /// expression at this point.
    UnexpectedToken {
        /// The offending source slice.
        token:    String,
        /// Byte offset where the token starts.
        position: usize,
    },
    /// Reached the end of input while an operand was still expected.
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Byte offset of the unmatched `(`.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Byte offset where the extra token starts.
        position: usize,
    },
    /// Parentheses, calls or operator chains are nested deeper than the
    /// parser allows.
    NestingTooDeep {
        /// Byte offset where the limit was exceeded.
        position: usize,
    },
    /// The expression has more tokens than the parser accepts.
    TooManyTokens {
        /// The token limit.
        limit: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, position } => {
                write!(f, "Unexpected token '{token}' at position {position}.")
            },
            Self::UnexpectedEndOfInput => write!(f, "Unexpected end of input."),
            Self::ExpectedClosingParen { position } => write!(f,
                                                              "Expected closing parenthesis ')' for the '(' at position {position}."),
            Self::UnexpectedTrailingTokens { token, position } => write!(f,
                                                                         "Extra tokens after expression, starting with '{token}' at position {position}."),
            Self::NestingTooDeep { position } => {
                write!(f, "Expression is nested too deeply at position {position}.")
            },
            Self::TooManyTokens { limit } => {
                write!(f, "Expression is too long; at most {limit} tokens are allowed.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
