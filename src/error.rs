/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating tokens
/// against the operand stack. Runtime errors include stack bound violations,
/// division by zero, and invalid exponents. Their display strings are part of
/// the calculator's observable contract and are reproduced verbatim.
pub mod runtime_error;

pub use runtime_error::RuntimeError;
