#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating tokens against the
/// operand stack.
///
/// Every variant except [`RuntimeError::ZeroModulus`] is recoverable: the
/// message is printed and evaluation continues with the next token.
pub enum RuntimeError {
    /// Pushed onto a stack that already holds its maximum of 23 operands.
    StackOverflow,
    /// Applied a binary operator with fewer than two operands available.
    StackUnderflow,
    /// Asked for the top of a stack that has never received a push.
    StackEmpty,
    /// Divided by zero.
    DivideByZero,
    /// Raised a value to a negative power.
    NegativeExponent,
    /// Took a modulus with a zero divisor. The one arithmetic error that
    /// terminates the session after being reported.
    ZeroModulus,
}

impl RuntimeError {
    /// Returns `true` for the single error that aborts the session instead of
    /// letting evaluation continue with the next token.
    #[must_use]
    pub const fn is_fatal(self) -> bool {
        matches!(self, Self::ZeroModulus)
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The casing and punctuation below are the calculator's historical
        // output and must not be normalized.
        match self {
            Self::StackOverflow => write!(f, "Stack overflow."),
            Self::StackUnderflow => write!(f, "Stack underflow."),
            Self::StackEmpty => write!(f, "Stack Empty"),
            Self::DivideByZero | Self::ZeroModulus => write!(f, "Divide by 0"),
            Self::NegativeExponent => write!(f, "Negative power."),
        }
    }
}

impl std::error::Error for RuntimeError {}
