use crate::errors::{Result, TrackerError};
use crate::models::InputValue;

/// Accepts a finite, non-negative number; anything else is `InvalidInput`.
///
/// Text is read like a typed field: leading whitespace is skipped and the
/// longest numeric prefix wins, so `"250 rub"` reads as 250.
pub fn parse_amount(input: &InputValue) -> Result<f64> {
    let value = match input {
        InputValue::Number(value) => *value,
        InputValue::Text(text) => leading_number(text).ok_or(TrackerError::InvalidInput)?,
    };

    if !value.is_finite() || value < 0.0 {
        return Err(TrackerError::InvalidInput);
    }

    // Folds -0 into +0.
    Ok(value + 0.0)
}

fn leading_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if text[end..].starts_with("Infinity") {
        return text[..end + "Infinity".len()].replace("Infinity", "inf").parse().ok();
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}
