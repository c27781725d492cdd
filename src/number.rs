//! Fixed-capacity decimal formatting for the number drawing entry points.

use core::fmt::Write;

use crate::error::NumberError;

/// Formatted number. Large enough for any `i64` and for every float that
/// passes the overflow guard.
pub type NumberText = heapless::String<24>;

/// Most decimal places [`format_float`] will print.
pub const MAX_DECIMALS: u8 = 7;

/// Integer part limit; magnitudes at or above this take the overflow path.
const INTEGER_LIMIT: f64 = 2_147_483_647.0;

/// Significant digits printed in total before fraction digits are dropped.
const MAX_DIGITS: u32 = 8;

/// Base-10 rendering of `value`.
pub fn format_integer(value: i64) -> NumberText {
    let mut text = NumberText::new();
    // 20 bytes always fit.
    let _ = write!(text, "{}", value);
    text
}

/// Round-half-up rendering of `value` with up to `decimals` fraction digits.
///
/// `decimals` is clamped to [`MAX_DECIMALS`]. The decimal point is always
/// printed, so zero decimals renders as `N.0`. At most eight significant
/// digits are printed; fraction digits past that are dropped. Values whose
/// rounded magnitude does not fit 31 bits, and non-finite values, fail with
/// [`NumberError::Overflow`].
pub fn format_float(value: f64, decimals: u8) -> Result<NumberText, NumberError> {
    if !value.is_finite() {
        return Err(NumberError::Overflow);
    }
    let decimals = decimals.min(MAX_DECIMALS);
    let mut text = NumberText::new();

    let mut rounding = 0.5;
    for _ in 0..decimals {
        rounding /= 10.0;
    }

    let mut magnitude = value;
    if value < -rounding {
        let _ = text.push('-');
        magnitude = -value;
    }
    magnitude += rounding;
    if magnitude >= INTEGER_LIMIT {
        return Err(NumberError::Overflow);
    }
    // In (-rounding, 0) the sum is still non-negative.
    let magnitude = magnitude.max(0.0);

    let integer = magnitude as u32;
    let before = text.len();
    let _ = write!(text, "{}", integer);
    let mut digits = (text.len() - before) as u32;
    let _ = text.push('.');

    let mut fraction = magnitude - f64::from(integer);
    let mut printed = 0u8;
    while printed < decimals && digits < MAX_DIGITS {
        fraction *= 10.0;
        let digit = (fraction as u8).min(9);
        fraction -= f64::from(digit);
        let _ = text.push(char::from(b'0' + digit));
        printed += 1;
        digits += 1;
    }
    if printed == 0 {
        let _ = text.push('0');
    }
    Ok(text)
}
