use crate::error::PilotError;
use crate::fatal;
use crate::util::Point;
use regex::Regex;
use std::sync::LazyLock;

/// Separators accepted between the three components of a point.
static SEPARATOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\s,]+").unwrap_or_else(|e| fatal!("Invalid separator pattern: {e}"))
});

/// The `{X:1 Y:2 Z:3}` form older saves wrote for the home point.
static LEGACY_POINT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\{?\s*X:\s*(\S+)\s+Y:\s*(\S+)\s+Z:\s*(\S+?)\s*\}?$")
        .unwrap_or_else(|e| fatal!("Invalid legacy point pattern: {e}"))
});

/// Encodes a single record line.
pub fn encode_line(key: &str, value: &str) -> String { format!("{key}={value}") }

/// Splits a record line on its first `=`.
///
/// # Returns
/// `None` for lines without `=` or with an empty key.
pub fn decode_line(line: &str) -> Option<(&str, &str)> {
    line.split_once('=').filter(|(key, _)| !key.is_empty())
}

/// Encodes a point as `x,y,z` in the shortest form that parses back bit-exactly.
pub fn encode_point(point: &Point) -> String {
    format!("{},{},{}", point.x(), point.y(), point.z())
}

/// Decodes a point from three numbers separated by whitespace and/or commas.
///
/// # Errors
/// [`PilotError::Parse`] if there are not exactly three components or one of them is
/// not a number.
pub fn decode_point(input: &str) -> Result<Point, PilotError> {
    let trimmed = input.trim();
    let tokens: Vec<&str> = if let Some(caps) = LEGACY_POINT_REGEX.captures(trimmed) {
        caps.iter().skip(1).flatten().map(|m| m.as_str()).collect()
    } else {
        SEPARATOR_REGEX.split(trimmed).filter(|t| !t.is_empty()).collect()
    };
    let [x, y, z] = tokens.as_slice() else {
        return Err(PilotError::Parse(input.to_string()));
    };
    let parse = |t: &str| t.parse::<f64>().map_err(|_| PilotError::Parse(input.to_string()));
    Ok(Point::new(parse(*x)?, parse(*y)?, parse(*z)?))
}
