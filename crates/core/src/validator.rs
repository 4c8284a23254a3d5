//! Throw validator - refuses throws that cannot happen before they reach the machine.
//!
//! Pure functions only: nothing here mutates a context.

use crate::context::GameContext;
use crate::types::{ValidationError, PINS_PER_FRAME};

/// Pins still standing for the next throw of the current frame.
///
/// A full rack (strike or spare in the final frame) counts as re-racked, which is
/// why the running total is taken modulo ten.
pub fn pins_left(ctx: &GameContext) -> u8 {
    PINS_PER_FRAME - (ctx.pins_down() % PINS_PER_FRAME)
}

/// Range half of the validator: a throw knocks down `0..=10` pins.
pub fn check_range(candidate: i64) -> Result<u8, ValidationError> {
    u8::try_from(candidate)
        .ok()
        .filter(|&p| p <= PINS_PER_FRAME)
        .ok_or(ValidationError::OutOfRange)
}

/// Check a candidate throw against the pin range and the frame's pin budget.
///
/// Range is checked first, so `11` is out of range even on a fresh rack.
///
/// # Examples
///
/// ```
/// use tui_bowling_core::{validate_throw, GameContext};
/// use tui_bowling_core::types::ValidationError;
///
/// let ctx = GameContext::new();
/// assert_eq!(validate_throw(&ctx, 7), Ok(7));
/// assert_eq!(validate_throw(&ctx, -1), Err(ValidationError::OutOfRange));
/// ```
pub fn validate_throw(ctx: &GameContext, candidate: i64) -> Result<u8, ValidationError> {
    let pins = check_range(candidate)?;
    let left = pins_left(ctx);
    if pins > left {
        return Err(ValidationError::BudgetExceeded { pins_left: left });
    }
    Ok(pins)
}

/// Parse raw text from the pin-entry field.
///
/// Anything that is not a plain integer (empty text, `4.5`, `abc`) is out of range.
pub fn parse_throw(raw: &str) -> Result<i64, ValidationError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::OutOfRange)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ctx_with(throws: &[u8]) -> GameContext {
        let mut ctx = GameContext::new();
        for &t in throws {
            ctx.record_throw(t);
        }
        ctx
    }

    #[rstest]
    #[case(&[], 10)]
    #[case(&[5], 5)]
    #[case(&[0], 10)]
    #[case(&[10], 10)]
    #[case(&[5, 5], 10)]
    #[case(&[10, 10], 10)]
    #[case(&[10, 3], 7)]
    fn pins_left_wraps_on_full_rack(#[case] throws: &[u8], #[case] expected: u8) {
        assert_eq!(pins_left(&ctx_with(throws)), expected);
    }

    #[test]
    fn accepts_everything_on_a_fresh_rack() {
        let ctx = GameContext::new();
        for pins in 0..=10i64 {
            assert_eq!(validate_throw(&ctx, pins), Ok(pins as u8));
        }
    }

    #[rstest]
    #[case(-1)]
    #[case(11)]
    #[case(256)]
    #[case(i64::MIN)]
    fn rejects_out_of_range(#[case] candidate: i64) {
        assert_eq!(
            validate_throw(&GameContext::new(), candidate),
            Err(ValidationError::OutOfRange)
        );
    }

    #[rstest]
    #[case(0, Ok(0))]
    #[case(10, Ok(10))]
    #[case(-1, Err(ValidationError::OutOfRange))]
    #[case(11, Err(ValidationError::OutOfRange))]
    fn check_range_ignores_the_budget(
        #[case] candidate: i64,
        #[case] expected: Result<u8, ValidationError>,
    ) {
        assert_eq!(check_range(candidate), expected);
    }

    #[test]
    fn out_of_range_wins_over_budget() {
        let ctx = ctx_with(&[9]);
        assert_eq!(validate_throw(&ctx, 12), Err(ValidationError::OutOfRange));
    }

    #[test]
    fn rejects_over_budget_with_pins_left() {
        let ctx = ctx_with(&[5]);
        assert_eq!(
            validate_throw(&ctx, 6),
            Err(ValidationError::BudgetExceeded { pins_left: 5 })
        );
        assert_eq!(validate_throw(&ctx, 5), Ok(5));
    }

    #[rstest]
    #[case("7", Ok(7))]
    #[case(" 10 ", Ok(10))]
    #[case("-3", Ok(-3))]
    #[case("", Err(ValidationError::OutOfRange))]
    #[case("4.5", Err(ValidationError::OutOfRange))]
    #[case("abc", Err(ValidationError::OutOfRange))]
    fn parse_throw_accepts_integers_only(
        #[case] raw: &str,
        #[case] expected: Result<i64, ValidationError>,
    ) {
        assert_eq!(parse_throw(raw), expected);
    }
}
