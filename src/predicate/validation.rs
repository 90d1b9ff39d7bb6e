//! Lifting predicate checks into `Result`
//!
//! Every predicate is total, so nothing in this crate fails on its own.
//! These helpers let a caller turn a failed check into an error of their
//! choosing and keep propagating with `?`.

use super::combinators::Predicate;

/// Validate a value using a predicate.
///
/// Returns `Ok(value)` if the predicate is satisfied, otherwise
/// `Err(error)`.
///
/// # Example
///
/// ```rust
/// use fieldwise::predicate::*;
///
/// assert_eq!(validate(7, gt(0), "must be positive"), Ok(7));
/// assert_eq!(validate(-7, gt(0), "must be positive"), Err("must be positive"));
/// ```
pub fn validate<T, E, P>(value: T, predicate: P, error: E) -> Result<T, E>
where
    P: Predicate<T>,
{
    if predicate.check(&value) {
        Ok(value)
    } else {
        Err(error)
    }
}

/// Validate a value with an error factory.
///
/// The factory sees the rejected value, so the error can describe it.
///
/// # Example
///
/// ```rust
/// use fieldwise::predicate::*;
///
/// let result = validate_with(
///     String::from("draft"),
///     contains_ignoring_case("final"),
///     |title| format!("'{}' is not a final title", title),
/// );
/// assert_eq!(result, Err("'draft' is not a final title".to_string()));
/// ```
pub fn validate_with<T, E, P, F>(value: T, predicate: P, error_fn: F) -> Result<T, E>
where
    P: Predicate<T>,
    F: FnOnce(&T) -> E,
{
    if predicate.check(&value) {
        Ok(value)
    } else {
        Err(error_fn(&value))
    }
}
