//! # srpn
//!
//! srpn is an interactive reverse Polish notation calculator written in Rust.
//! Each input line is decomposed into classified substrings, converted into
//! typed tokens, and executed against a bounded operand stack with 32-bit
//! saturating arithmetic. The operand stack and the lexer's comment state
//! persist across lines for the lifetime of a session.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides unified error types for evaluation.
///
/// This module defines all errors that can be raised while executing tokens
/// against the operand stack. Error display strings are part of the
/// calculator's observable contract and are preserved verbatim, including
/// their historical casing and punctuation.
///
/// # Responsibilities
/// - Defines the runtime error enum covering all failure modes.
/// - Separates the single fatal error from the recoverable ones.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of command evaluation.
///
/// This module ties together lexing, tokenization, evaluation, the operand
/// stack, and the pseudo-random source to provide a complete runtime for
/// interactive calculator sessions. It exposes the public API for feeding
/// input lines to a session.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, tokenizer, and evaluator.
/// - Provides the session entry point for evaluating input lines.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for numeric saturation.
///
/// This module provides the 32-bit clamp applied to every value the
/// calculator produces and the saturating parse for digit-run literals.
///
/// # Responsibilities
/// - Clamps extended-precision results to the calculator bounds.
/// - Parses operand literals with saturation instead of failure.
pub mod util;

pub use interpreter::evaluator::core::Session;
