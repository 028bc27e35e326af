use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::units::detector::{clean_text, parse_number, reject_negative, split_value_and_unit};
use crate::units::error::{NormalizeError, NormalizeResult};
use crate::units::table::{round_to, Unit, POUNDS_PER_STONE, WEIGHT_DECIMALS};
use crate::units::types::{Dimension, WeightQuantity};
use crate::units::validator::{ensure_non_negative, validate_dimension};

lazy_static! {
    /// "11 st 6 lb", "11stone6", "11 stones", "11 st 6 pounds"
    static ref STONE_POUND_PATTERN: Regex = Regex::new(
        r"^(?P<stone>\d+(?:\.\d+)?)\s*(?:stones?|stn|st)\s*(?:(?P<pounds>\d+(?:\.\d+)?)\s*(?P<unit>[^\d\s]+)?)?$"
    ).unwrap();

    /// "11-6": stone, hyphen, pounds
    static ref STONE_HYPHEN_PATTERN: Regex = Regex::new(
        r"^(?P<stone>\d+)\s*-\s*(?P<pounds>\d+(?:\.\d+)?)$"
    ).unwrap();
}

/// Parse a free-form weight into pounds.
///
/// Stone composites are tried before anything else, so "11-6" is 11 stone
/// 6 pounds and never a range. A bare number is taken as pounds.
pub fn parse_weight(text: &str) -> NormalizeResult<WeightQuantity> {
    let cleaned = clean_text(text)?;
    reject_negative(&cleaned)?;

    let pounds = match parse_stone_composite(&cleaned)? {
        Some(pounds) => {
            debug!(input = text, "weight read as stone composite");
            pounds
        }
        None => parse_single_unit(&cleaned)?,
    };

    let pounds = ensure_non_negative(pounds, "weight")?;
    let pounds = round_to(pounds, WEIGHT_DECIMALS);
    debug!(input = text, pounds, "normalized weight");

    Ok(WeightQuantity::new(pounds))
}

/// `N1 * 14 + N2` for "N1 st [N2 [lb]]" or "N1-N2"; `None` for any other shape
fn parse_stone_composite(cleaned: &str) -> NormalizeResult<Option<f64>> {
    let caps = match STONE_POUND_PATTERN
        .captures(cleaned)
        .or_else(|| STONE_HYPHEN_PATTERN.captures(cleaned))
    {
        Some(caps) => caps,
        None => return Ok(None),
    };

    let stone = match caps.name("stone") {
        Some(m) => parse_number(m.as_str())?,
        None => return Ok(None),
    };
    let pounds = match caps.name("pounds") {
        Some(m) => parse_number(m.as_str())?,
        None => 0.0,
    };

    if let Some(unit) = caps.name("unit") {
        let def = validate_dimension(unit.as_str(), Dimension::Mass)?;
        if def.unit != Unit::Pound {
            return Err(NormalizeError::format(format!(
                "expected pounds after stone, found '{}'",
                unit.as_str()
            )));
        }
    }

    Ok(Some(stone * POUNDS_PER_STONE + pounds))
}

/// One number with an optional mass unit on either side
fn parse_single_unit(cleaned: &str) -> NormalizeResult<f64> {
    let parsed = split_value_and_unit(cleaned)?.ok_or_else(|| {
        NormalizeError::format(format!("could not read a weight from '{}'", cleaned))
    })?;

    let value = ensure_non_negative(parsed.value, "weight")?;

    match parsed.unit {
        None => {
            debug!(value, "no unit given, assuming pounds");
            Ok(value)
        }
        Some(token) => {
            let def = validate_dimension(token, Dimension::Mass)?;
            debug!(value, unit = def.canonical, "weight unit resolved");
            Ok(value * def.factor)
        }
    }
}
