use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token of canonical expression text.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// The set is closed: anything else in the input is a lexing error.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `3`, `3.`, `3.14`, `.5` or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", parse_number)]
    #[regex(r"[0-9]+\.?", parse_number)]
    Number(f64),
    /// Identifier tokens; constant or function names such as `pi` or `sqrt`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `**`
    #[token("**")]
    DoubleStar,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::DoubleStar => write!(f, "**"),
            Self::Slash => write!(f, "/"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Comma => write!(f, ","),
        }
    }
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Converts source text into `(Token, position)` pairs.
///
/// The position is the byte offset of the token's first character.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` for the first slice the lexer cannot
/// recognise, such as a stray `!`, `%` or `^`.
///
/// # Example
/// ```
/// use sciexpr::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2 ** x").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number(2.0), 0),
///                 (Token::DoubleStar, 2),
///                 (Token::Identifier("x".to_string()), 5)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.span().start));
        } else {
            return Err(ParseError::UnexpectedToken { token:    lexer.slice().to_string(),
                                                     position: lexer.span().start, });
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).unwrap().into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn number_forms() {
        assert_eq!(kinds("12 12. 12.5 .5 1e3 2.5E-2"),
                   vec![Token::Number(12.0),
                        Token::Number(12.0),
                        Token::Number(12.5),
                        Token::Number(0.5),
                        Token::Number(1000.0),
                        Token::Number(0.025)]);
    }

    #[test]
    fn double_star_is_one_token() {
        assert_eq!(kinds("2**3*4"),
                   vec![Token::Number(2.0),
                        Token::DoubleStar,
                        Token::Number(3.0),
                        Token::Star,
                        Token::Number(4.0)]);
    }

    #[test]
    fn identifiers_keep_digits_and_underscores() {
        assert_eq!(kinds("log10(x_1)"),
                   vec![Token::Identifier("log10".into()),
                        Token::LParen,
                        Token::Identifier("x_1".into()),
                        Token::RParen]);
    }

    #[test]
    fn unknown_characters_report_their_offset() {
        assert_eq!(tokenize("3 + 4!"),
                   Err(ParseError::UnexpectedToken { token:    "!".into(),
                                                     position: 5, }));
        assert!(tokenize("a.b").is_err());
    }
}
