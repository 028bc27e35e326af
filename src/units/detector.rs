use lazy_static::lazy_static;
use regex::Regex;

use crate::units::error::{NormalizeError, NormalizeResult};

lazy_static! {
    /// Any digit run, with optional decimal part: "70", "5.5", ".8"
    static ref NUMBER_PATTERN: Regex = Regex::new(r"\d+(\.\d+)?|\.\d+").unwrap();

    /// Words people wrap around a measurement: "weighs about", "is roughly", "and"
    static ref FILLER_PATTERN: Regex = Regex::new(
        r"\b(?:weighs?|weighing|weight|height|tall|is|are|was|about|around|approx|approximately|roughly|circa|nearly|almost|maybe|like|just|patient|he|she|they|stands?|measures?|measuring|and|of)\b"
    ).unwrap();

    /// A period closing a word ("lbs.", "ft.", "approx."), not a decimal point
    static ref WORD_DOT_PATTERN: Regex = Regex::new(r"(\p{L})\.").unwrap();

    /// A decimal point with no digits after it: "70.", "70. kg"
    static ref DANGLING_DOT_PATTERN: Regex = Regex::new(r"(\d)\.(\s|$)").unwrap();

    /// Sign in front of the first number: "-5", "- 70kg", "minus 3"
    static ref NEGATIVE_PATTERN: Regex =
        Regex::new(r"^(?:-|minus\b|negative\b)\s*\.?\d").unwrap();

    /// `<number> [unit]`, unit optional: "70kg", "5.5 ft", "180"
    static ref TRAILING_UNIT_PATTERN: Regex = Regex::new(
        r"^(?P<num>-?(?:\d+(?:\.\d+)?|\.\d+))\s*(?P<unit>[^\d\s]+)?$"
    ).unwrap();

    /// `<unit> <number>`: "kg 70", "lbs 150"
    static ref LEADING_UNIT_PATTERN: Regex = Regex::new(
        r"^(?P<unit>[^\d\s.\-]+)\s*(?P<num>-?(?:\d+(?:\.\d+)?|\.\d+))$"
    ).unwrap();

    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// A single number with at most one unit token next to it
#[derive(Debug, Clone, PartialEq)]
pub struct ValueWithUnit<'a> {
    pub value: f64,
    pub unit: Option<&'a str>,
}

/// Check whether a string has anything a measurement could be read from
pub fn contains_number(s: &str) -> bool {
    NUMBER_PATTERN.is_match(s)
}

/// Lowercase, normalize quote marks, and drop filler words.
///
/// Fails with `InvalidFormat` when nothing numeric is left.
pub fn clean_text(raw: &str) -> NormalizeResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(NormalizeError::format("input is empty"));
    }

    let lowered: String = trimmed
        .to_lowercase()
        .chars()
        .map(|c| match c {
            '′' | '’' | '‘' | '`' | '´' => '\'',
            '″' | '”' | '“' => '"',
            ',' | ';' | ':' | '=' | '~' | '≈' => ' ',
            other => other,
        })
        .collect();

    let undotted = WORD_DOT_PATTERN.replace_all(&lowered, "$1");
    let undotted = DANGLING_DOT_PATTERN.replace_all(&undotted, "$1$2");
    let unfilled = FILLER_PATTERN.replace_all(&undotted, " ");
    let cleaned = WHITESPACE.replace_all(unfilled.trim(), " ").into_owned();

    if !contains_number(&cleaned) {
        return Err(NormalizeError::format(format!(
            "no number found in '{}'",
            trimmed
        )));
    }

    Ok(cleaned)
}

/// Reject a leading minus sign before any notation is tried
pub fn reject_negative(cleaned: &str) -> NormalizeResult<()> {
    if NEGATIVE_PATTERN.is_match(cleaned) {
        return Err(NormalizeError::value(format!(
            "'{}' is negative; measurements must be zero or more",
            cleaned
        )));
    }
    Ok(())
}

pub fn parse_number(token: &str) -> NormalizeResult<f64> {
    let value: f64 = token
        .parse()
        .map_err(|_| NormalizeError::format(format!("'{}' is not a number", token)))?;
    if !value.is_finite() {
        return Err(NormalizeError::format(format!("'{}' is not a finite number", token)));
    }
    Ok(value)
}

/// Split cleaned text into one number and an optional unit on either side.
///
/// Returns `Ok(None)` when the text has some other shape (two numbers, words
/// between them, ...).
pub fn split_value_and_unit(cleaned: &str) -> NormalizeResult<Option<ValueWithUnit<'_>>> {
    let caps = match TRAILING_UNIT_PATTERN
        .captures(cleaned)
        .or_else(|| LEADING_UNIT_PATTERN.captures(cleaned))
    {
        Some(caps) => caps,
        None => return Ok(None),
    };

    let num = match caps.name("num") {
        Some(m) => m.as_str(),
        None => return Ok(None),
    };
    let value = parse_number(num)?;
    let unit = caps.name("unit").map(|m| m.as_str());

    Ok(Some(ValueWithUnit { value, unit }))
}
