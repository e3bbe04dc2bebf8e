/// Core evaluation logic for tokens and session state.
///
/// Contains the session struct, the per-token dispatch with its
/// recoverable-error policy, and the saturating operator arithmetic.
pub mod core;

/// Deterministic pseudo-random operand source.
///
/// Backs the `r` command with a seeded generator so sequences are
/// reproducible across runs.
pub mod random;

/// The bounded operand stack.
///
/// Holds up to 23 operands and tracks the new-stack sentinel state that
/// distinguishes a never-pushed stack from a populated one.
pub mod stack;
