//! Argument decoding for loosely typed request fields.

use serde_json::Value;

use crate::errors::{Result, XofError};

fn required<'a>(name: &str, value: Option<&'a Value>) -> Result<&'a Value> {
    match value {
        None | Some(Value::Null) => Err(XofError::MissingArgument(name.to_string())),
        Some(v) => Ok(v),
    }
}

/// Decode a JSON array of integers in `0..=255`.
pub(crate) fn bytes(name: &str, value: Option<&Value>) -> Result<Vec<u8>> {
    let items = required(name, value)?
        .as_array()
        .ok_or_else(|| XofError::InvalidInputType(format!("{} must be a byte array", name)))?;

    items
        .iter()
        .map(|item| {
            item.as_u64()
                .and_then(|b| u8::try_from(b).ok())
                .ok_or_else(|| {
                    XofError::InvalidInputType(format!(
                        "{} must contain only integers in 0..=255, found {}",
                        name, item
                    ))
                })
        })
        .collect()
}

/// Decode a byte count. Negative counts clamp to 0, fractions truncate.
///
/// `default` is used when the argument is omitted; without one an omitted
/// count is a `MissingArgument`.
pub(crate) fn length(name: &str, value: Option<&Value>, default: Option<usize>) -> Result<usize> {
    let value = match (value, default) {
        (None | Some(Value::Null), Some(default)) => return Ok(default),
        (value, _) => required(name, value)?,
    };

    let Value::Number(number) = value else {
        return Err(XofError::InvalidInputType(format!("{} must be a number", name)));
    };

    if let Some(n) = number.as_u64() {
        return Ok(usize::try_from(n).unwrap_or(usize::MAX));
    }
    if number.as_i64().is_some() {
        // only negatives reach here
        return Ok(0);
    }
    // float casts saturate
    let n = number.as_f64().unwrap_or(0.0) as i64;
    Ok(usize::try_from(n.max(0)).unwrap_or(usize::MAX))
}

/// Decode a keystream position without loss.
///
/// Accepts JSON integers and decimal strings. Negative, fractional or
/// oversized values are `PositionOutOfRange`; other shapes are
/// `InvalidInputType`.
pub(crate) fn position(name: &str, value: Option<&Value>) -> Result<u64> {
    match required(name, value)? {
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| XofError::PositionOutOfRange(n.to_string())),
        Value::String(s) => {
            if let Ok(p) = s.parse::<u64>() {
                return Ok(p);
            }
            let digits = s.strip_prefix('-').unwrap_or(s);
            let numeric = !digits.is_empty()
                && digits
                    .split_once('.')
                    .map_or(digits, |(int, _)| int)
                    .chars()
                    .all(|c| c.is_ascii_digit());
            if numeric {
                Err(XofError::PositionOutOfRange(s.clone()))
            } else {
                Err(XofError::InvalidInputType(format!(
                    "{} must be an integer, found {:?}",
                    name, s
                )))
            }
        }
        other => Err(XofError::InvalidInputType(format!(
            "{} must be an integer, found {}",
            name, other
        ))),
    }
}
