/// Numeric helpers.
///
/// This module provides small `f64` predicates and conversions shared by the
/// evaluator and the formatter: integrality checks, lossless narrowing to
/// `u32`, and negative-zero normalization.
pub mod num;
/// Display formatting of results.
///
/// Renders an `f64` the way the calculator shows it: integral values without
/// a decimal point, everything else with a fixed number of significant
/// digits.
pub mod format;
