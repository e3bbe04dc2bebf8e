use crate::{
    interpreter::lexer::{Substring, SubstringKind},
    util::num::parse_saturating,
};

/// A binary arithmetic operator.
///
/// Operators consume the two topmost stack operands and push one saturated
/// result in their place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `^`
    Pow,
}

/// An interactive command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `d`: print every stack element, bottom to top, one per line.
    PrintStack,
    /// `=`: print the topmost operand.
    PrintTop,
    /// `r`: push the next pseudo-random value.
    PushRandom,
}

/// A typed unit of work for the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A 32-bit value to push, saturated at construction.
    Operand(i32),
    /// A binary arithmetic operator.
    Operator(Operator),
    /// An interactive command.
    Command(Command),
}

/// Converts classified substrings into evaluator tokens.
///
/// The mapping is total and order-preserving. Space substrings are elided,
/// and anything without an arithmetic meaning — a `#` that was not a comment
/// marker, or an unrecognized character — degrades to a zero operand instead
/// of failing.
///
/// # Parameters
/// - `substrings`: The lexed line.
///
/// # Returns
/// The tokens in input order, whitespace entries removed.
///
/// # Example
/// ```
/// use srpn::interpreter::{
///     lexer::decompose,
///     tokenizer::{tokenize, Operator, Token},
/// };
///
/// let tokens = tokenize(&decompose("1 2 +"));
/// assert_eq!(tokens,
///            vec![Token::Operand(1), Token::Operand(2), Token::Operator(Operator::Add)]);
/// ```
#[must_use]
pub fn tokenize(substrings: &[Substring]) -> Vec<Token> {
    substrings.iter().filter_map(convert_substring).collect()
}

/// Maps one classified substring to its token, or to `None` for whitespace.
fn convert_substring(substring: &Substring) -> Option<Token> {
    match substring.kind() {
        SubstringKind::Space => None,
        SubstringKind::Plus => Some(Token::Operator(Operator::Add)),
        SubstringKind::Minus => Some(Token::Operator(Operator::Sub)),
        SubstringKind::Multiply => Some(Token::Operator(Operator::Mul)),
        SubstringKind::Divide => Some(Token::Operator(Operator::Div)),
        SubstringKind::Modulo => Some(Token::Operator(Operator::Mod)),
        SubstringKind::Exponent => Some(Token::Operator(Operator::Pow)),
        SubstringKind::Digits => Some(Token::Operand(parse_saturating(substring.text()))),
        SubstringKind::LetterD => Some(Token::Command(Command::PrintStack)),
        SubstringKind::Equals => Some(Token::Command(Command::PrintTop)),
        SubstringKind::Random => Some(Token::Command(Command::PushRandom)),
        SubstringKind::Hashtag | SubstringKind::Other => Some(Token::Operand(0)),
    }
}
