use crate::error::ParseError;

#[derive(Debug, Clone, PartialEq)]
/// Represents every way a single evaluation can fail.
///
/// All variants are terminal for the call that produced them; nothing is
/// retried and no state survives the failure.
pub enum EvaluationError {
    /// The canonical text was blank.
    EmptyExpression,
    /// The text does not follow the expression grammar.
    Syntax(ParseError),
    /// An identifier is not a constant, or a called name is not a function.
    UnknownName {
        /// The name as written.
        name:     String,
        /// Byte offset of the identifier.
        position: usize,
    },
    /// A function was called with the wrong number of arguments.
    ArityError {
        /// The function name.
        name:     String,
        /// The declared arity.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
        /// Byte offset of the call.
        position: usize,
    },
    /// The operation is undefined for its operands, or its result would not
    /// be finite.
    DomainError {
        /// What went wrong.
        details:  String,
        /// Byte offset of the operator or call.
        position: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// Byte offset of the `/` operator.
        position: usize,
    },
}

/// The kind of an [`EvaluationError`], without its payload.
///
/// Presentation layers map these to user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input was empty or only whitespace.
    EmptyExpression,
    /// The text could not be tokenized or parsed.
    SyntaxError,
    /// A name is not a known constant or function.
    UnknownName,
    /// A function was called with the wrong number of arguments.
    ArityError,
    /// An argument or result left the real domain or overflowed.
    DomainError,
    /// A value was divided by zero.
    DivisionByZero,
}

impl EvaluationError {
    /// Returns the kind of this error.
    ///
    /// # Example
    /// ```
    /// use sciexpr::{error::ErrorKind, evaluate_expression};
    ///
    /// let err = evaluate_expression("10/0").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyExpression => ErrorKind::EmptyExpression,
            Self::Syntax(_) => ErrorKind::SyntaxError,
            Self::UnknownName { .. } => ErrorKind::UnknownName,
            Self::ArityError { .. } => ErrorKind::ArityError,
            Self::DomainError { .. } => ErrorKind::DomainError,
            Self::DivisionByZero { .. } => ErrorKind::DivisionByZero,
        }
    }

    pub(crate) fn domain(details: impl Into<String>, position: usize) -> Self {
        Self::DomainError { details: details.into(),
                            position }
    }
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "Nothing to evaluate."),
            Self::Syntax(e) => write!(f, "Syntax error: {e}"),
            Self::UnknownName { name, position } => {
                write!(f, "Unknown name '{name}' at position {position}.")
            },
            Self::ArityError { name,
                               expected,
                               found,
                               position, } => write!(f,
                                                     "Function '{name}' at position {position} takes {expected} argument(s) but {found} were given."),
            Self::DomainError { details, position } => {
                write!(f, "Math domain error at position {position}: {details}.")
            },
            Self::DivisionByZero { position } => {
                write!(f, "Division by zero at position {position}.")
            },
        }
    }
}

impl std::error::Error for EvaluationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseError> for EvaluationError {
    fn from(e: ParseError) -> Self {
        Self::Syntax(e)
    }
}
