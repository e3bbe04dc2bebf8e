/// Inclusive upper bound of the calculator's value range.
pub const UPPER_BOUND: i32 = i32::MAX;
/// Inclusive lower bound of the calculator's value range.
pub const LOWER_BOUND: i32 = i32::MIN;

/// Clamps an extended-precision value to the calculator's 32-bit range.
///
/// Every arithmetic result is computed in `i128` and passed through this
/// function exactly once before it is stored on the stack.
///
/// # Parameters
/// - `value`: The extended-precision value to clamp.
///
/// # Returns
/// The value itself if it fits in 32 bits, otherwise the nearest bound.
///
/// # Example
/// ```
/// use srpn::util::num::saturate;
///
/// assert_eq!(saturate(1), 1);
/// assert_eq!(saturate(9_000_000_000), 2_147_483_647);
/// assert_eq!(saturate(-9_000_000_000), -2_147_483_648);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn saturate(value: i128) -> i32 {
    if value > UPPER_BOUND as i128 {
        UPPER_BOUND
    } else if value < LOWER_BOUND as i128 {
        LOWER_BOUND
    } else {
        value as i32
    }
}

/// Parses a digit-run literal, clamping values beyond the 32-bit range.
///
/// The input is a run of decimal digits, optionally prefixed with a single
/// negation sign by the lexer's fusion pass. Literals too long to parse at
/// all clamp straight to the bound on their side of zero.
///
/// # Parameters
/// - `text`: The literal text, digits with an optional leading `-`.
///
/// # Returns
/// The parsed value, saturated to the calculator bounds.
///
/// # Example
/// ```
/// use srpn::util::num::parse_saturating;
///
/// assert_eq!(parse_saturating("42"), 42);
/// assert_eq!(parse_saturating("-3"), -3);
/// assert_eq!(parse_saturating("99999999999"), 2_147_483_647);
/// assert_eq!(parse_saturating("-99999999999"), -2_147_483_648);
/// ```
#[must_use]
pub fn parse_saturating(text: &str) -> i32 {
    match text.parse::<i128>() {
        Ok(value) => saturate(value),
        Err(_) if text.starts_with('-') => LOWER_BOUND,
        Err(_) => UPPER_BOUND,
    }
}
