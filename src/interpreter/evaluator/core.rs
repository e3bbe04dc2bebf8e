use std::{
    io::{self, Write},
    ops::ControlFlow,
};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{random::RandomSource, stack::Stack},
        lexer::Lexer,
        tokenizer::{self, Command, Operator, Token},
    },
    util::num::saturate,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Exit status reported when a zero modulus aborts the session.
pub const FATAL_EXIT_STATUS: i32 = 136;

/// Stores one interactive calculator session.
///
/// This struct holds every piece of state that outlives a single input line:
/// the lexer's comment flag, the operand stack, and the pseudo-random source.
/// Substrings and tokens are transient; they are produced and consumed inside
/// [`Session::eval_line`].
///
/// ## Usage
///
/// `Session` is created once and fed input lines until the input ends or a
/// fatal error breaks the loop.
#[derive(Debug)]
pub struct Session {
    lexer:  Lexer,
    stack:  Stack,
    random: RandomSource,
}

#[allow(clippy::new_without_default)]
impl Session {
    /// Creates a session with a fresh stack, no open comment, and the default
    /// random seed.
    #[must_use]
    pub fn new() -> Self {
        Self { lexer:  Lexer::new(),
               stack:  Stack::new(),
               random: RandomSource::new(), }
    }

    /// Creates a session whose `r` command draws from the given seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self { lexer:  Lexer::new(),
               stack:  Stack::new(),
               random: RandomSource::with_seed(seed), }
    }

    /// Evaluates one line of user input.
    ///
    /// The line is fully lexed, tokenized, and executed before this function
    /// returns. Recoverable errors are written to `out` as messages and
    /// evaluation resumes with the next token of the same line; the fatal
    /// zero-modulus error stops evaluation and yields
    /// `ControlFlow::Break(FATAL_EXIT_STATUS)` so the caller can terminate
    /// the process.
    ///
    /// # Parameters
    /// - `line`: One line of input, without its trailing newline.
    /// - `out`: Where evaluation output and error messages are written.
    ///
    /// # Returns
    /// `ControlFlow::Continue(())` to keep reading input, or
    /// `ControlFlow::Break(status)` when the session must end with the given
    /// exit status.
    ///
    /// ## Errors
    /// Propagates failures of the output writer.
    ///
    /// # Example
    /// ```
    /// use std::ops::ControlFlow;
    ///
    /// use srpn::Session;
    ///
    /// let mut session = Session::new();
    /// let mut out = Vec::new();
    ///
    /// let flow = session.eval_line("5 3 - =", &mut out).unwrap();
    /// assert_eq!(flow, ControlFlow::Continue(()));
    /// assert_eq!(String::from_utf8(out).unwrap(), "2\n");
    /// ```
    pub fn eval_line<W: Write>(&mut self,
                               line: &str,
                               out: &mut W)
                               -> io::Result<ControlFlow<i32>> {
        let substrings = self.lexer.lex(line);
        let tokens = tokenizer::tokenize(&substrings);
        self.read_tokens(tokens, out)
    }

    /// Read access to the operand stack, primarily for inspection in tests.
    #[must_use]
    pub const fn stack(&self) -> &Stack {
        &self.stack
    }

    /// Executes tokens in order against the session stack.
    ///
    /// Each token either completes or raises a [`RuntimeError`]; recoverable
    /// errors are printed and skipped, the fatal one breaks the loop.
    fn read_tokens<W: Write>(&mut self,
                             tokens: Vec<Token>,
                             out: &mut W)
                             -> io::Result<ControlFlow<i32>> {
        for token in tokens {
            let step = match token {
                Token::Operand(value) => self.stack.push(value),
                Token::Operator(operator) => self.eval_operator(operator),
                Token::Command(command) => self.eval_command(command, out)?,
            };

            if let Err(error) = step {
                writeln!(out, "{error}")?;
                if error.is_fatal() {
                    return Ok(ControlFlow::Break(FATAL_EXIT_STATUS));
                }
            }
        }

        Ok(ControlFlow::Continue(()))
    }

    /// Applies a binary operator to the two topmost operands.
    ///
    /// Preconditions are checked before anything is consumed, so a failing
    /// operator leaves the stack exactly as it was.
    fn eval_operator(&mut self, operator: Operator) -> EvalResult<()> {
        let (left, right) = self.stack.peek_pair()?;
        let value = apply_operator(operator, left, right)?;
        self.stack.replace_pair(value)
    }

    /// Executes an interactive command, writing any output to `out`.
    ///
    /// The outer `Result` carries writer failures; the inner one carries the
    /// command's evaluation outcome.
    fn eval_command<W: Write>(&mut self,
                              command: Command,
                              out: &mut W)
                              -> io::Result<EvalResult<()>> {
        let result = match command {
            Command::PrintStack => {
                for value in self.stack.values() {
                    writeln!(out, "{value}")?;
                }
                Ok(())
            },
            Command::PrintTop => match self.stack.top() {
                Ok(value) => {
                    writeln!(out, "{value}")?;
                    Ok(())
                },
                Err(error) => Err(error),
            },
            Command::PushRandom => {
                let value = self.random.next_value();
                self.stack.push(value)
            },
        };

        Ok(result)
    }
}

/// Computes `left <operator> right` with 32-bit saturation.
///
/// Results are produced in extended precision and clamped to the calculator
/// bounds exactly once. Division truncates toward zero; modulus is floored,
/// taking the divisor's sign.
///
/// # Parameters
/// - `operator`: The operator to apply.
/// - `left`: The operand below the top of the stack.
/// - `right`: The topmost operand.
///
/// # Returns
/// The saturated result.
///
/// ## Errors
/// - [`RuntimeError::DivideByZero`] for a division with a zero right operand.
/// - [`RuntimeError::NegativeExponent`] for a negative exponent.
/// - [`RuntimeError::ZeroModulus`] for a modulus with a zero right operand;
///   this one is fatal to the session.
///
/// # Example
/// ```
/// use srpn::interpreter::{evaluator::core::apply_operator, tokenizer::Operator};
///
/// assert_eq!(apply_operator(Operator::Sub, 5, 3), Ok(2));
/// assert_eq!(apply_operator(Operator::Add, 2_147_483_647, 1), Ok(2_147_483_647));
/// assert_eq!(apply_operator(Operator::Div, -7, 2), Ok(-3));
/// ```
pub fn apply_operator(operator: Operator, left: i32, right: i32) -> EvalResult<i32> {
    let a = i128::from(left);
    let b = i128::from(right);

    match operator {
        Operator::Add => Ok(saturate(a + b)),
        Operator::Sub => Ok(saturate(a - b)),
        Operator::Mul => Ok(saturate(a * b)),
        Operator::Div => {
            if right == 0 {
                return Err(RuntimeError::DivideByZero);
            }
            Ok(saturate(a / b))
        },
        Operator::Mod => {
            if right == 0 {
                return Err(RuntimeError::ZeroModulus);
            }
            let mut remainder = a % b;
            if remainder != 0 && (remainder < 0) != (b < 0) {
                remainder += b;
            }
            Ok(saturate(remainder))
        },
        Operator::Pow => {
            if right < 0 {
                return Err(RuntimeError::NegativeExponent);
            }
            #[allow(clippy::cast_sign_loss)]
            let exponent = right as u32;
            Ok(saturate(integer_pow(left, exponent)))
        },
    }
}

/// Raises `base` to `exponent` in extended precision.
///
/// The magnitude is computed with saturating multiplication and capped far
/// enough above the 32-bit range that the final clamp sees the same result
/// exact arithmetic would produce; the sign alternates with the exponent's
/// parity for negative bases.
#[allow(clippy::cast_possible_wrap)]
fn integer_pow(base: i32, exponent: u32) -> i128 {
    let magnitude = u128::from(base.unsigned_abs()).saturating_pow(exponent)
                                                   .min(1 << 40) as i128;

    if base < 0 && exponent % 2 == 1 {
        -magnitude
    } else {
        magnitude
    }
}
