/// The evaluator module executes tokens and computes results.
///
/// The evaluator consumes the token stream in order, mutating the bounded
/// operand stack, performing saturating 32-bit arithmetic, and emitting
/// command output. It is the core execution engine of the calculator.
///
/// # Responsibilities
/// - Executes operand, operator, and command tokens against the stack.
/// - Saturates every produced value to the 32-bit calculator bounds.
/// - Reports runtime errors such as stack bound violations or division by
///   zero, continuing with the next token wherever the error is recoverable.
pub mod evaluator;
/// The lexer module decomposes raw input for tokenization.
///
/// The lexer reads one line of user input and produces an ordered sequence
/// of classified substrings. It strips comments, carrying an unmatched
/// comment marker's state over to the next line, and fuses negation signs
/// onto the digit runs they belong to. This is the first stage of
/// evaluation.
///
/// # Responsibilities
/// - Decomposes the input into classified substrings, consuming every
///   character.
/// - Tracks comment state across lines and removes commented-out input.
/// - Distinguishes subtraction from negation and fuses negative operands.
pub mod lexer;
/// The tokenizer module maps classified substrings to typed tokens.
///
/// The tokenizer applies a fixed total mapping from substring categories to
/// operands, operators, and commands, eliding whitespace and degrading
/// anything unrecognized to a zero operand.
///
/// # Responsibilities
/// - Converts substrings into tokens, preserving input order.
/// - Parses digit runs with saturation to the 32-bit bounds.
pub mod tokenizer;
