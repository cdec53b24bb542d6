/// An abstract syntax tree (AST) node representing a canonical expression.
///
/// Every variant records the byte offset of the token that introduced it, so
/// evaluation errors can point back into the canonical text. Names are kept
/// verbatim; resolving them against the symbol table is the evaluator's job.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A non-negative numeric literal.
    Number {
        /// The literal value.
        value:    f64,
        /// Byte offset in the canonical text.
        position: usize,
    },
    /// A bare name, expected to resolve to a constant.
    Identifier {
        /// Name as written.
        name:     String,
        /// Byte offset in the canonical text.
        position: usize,
    },
    /// A prefix sign applied to an operand.
    UnaryOp {
        /// The unary operator.
        op:       UnaryOperator,
        /// The operand expression.
        expr:     Box<Self>,
        /// Byte offset of the operator.
        position: usize,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Byte offset of the operator.
        position: usize,
    },
    /// A function call such as `sin(x)` or `pow(2, 8)`.
    Call {
        /// Name of the function being called.
        name:      String,
        /// Argument expressions, in order.
        arguments: Vec<Self>,
        /// Byte offset of the function name.
        position:  usize,
    },
}

impl Expr {
    /// Returns the byte offset associated with this node.
    ///
    /// # Example
    /// ```
    /// use sciexpr::interpreter::{lexer::tokenize, parser::core::parse_tokens};
    ///
    /// let expr = parse_tokens(&tokenize("1 + sqrt(4)").unwrap()).unwrap();
    /// assert_eq!(expr.position(), 2);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Number { position, .. }
            | Self::Identifier { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::Call { position, .. } => *position,
        }
    }
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `-x`
    Negate,
    /// `+x`
    Plus,
}

/// Infix operators, all operating on `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `**`
    Pow,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "**",
        };
        write!(f, "{symbol}")
    }
}
