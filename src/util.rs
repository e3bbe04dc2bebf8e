/// Numeric saturation helpers.
///
/// This module provides the clamp used for every value the calculator
/// produces, together with the saturating parse for digit-run literals.
/// All arithmetic is carried out in extended precision and funneled through
/// these helpers exactly once per produced value.
pub mod num;
