use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::units::detector::{clean_text, parse_number, reject_negative, split_value_and_unit};
use crate::units::error::{NormalizeError, NormalizeResult};
use crate::units::table::{round_to, Unit, UnitConversionTable};
use crate::units::types::{Dimension, HeightQuantity, NotationClass};
use crate::units::validator::{ensure_non_negative, validate_dimension};

/// Bare numbers at or above this are read as centimeters (adult heights
/// run roughly 140-210 cm).
pub const CENTIMETER_THRESHOLD: f64 = 100.0;

/// Bare numbers below this are read as meters (adult heights run roughly
/// 1.4-2.1 m). Everything in `[METER_THRESHOLD, CENTIMETER_THRESHOLD)` is feet.
pub const METER_THRESHOLD: f64 = 3.0;

/// Inches kept to one decimal place
const INCH_DECIMALS: i32 = 1;

lazy_static! {
    /// Two numbers separated by a feet token: "5'11", "5ft 11in", "5 feet 11 inches"
    static ref COMPOSITE_PATTERN: Regex = Regex::new(
        r"^(?P<feet>\d+(?:\.\d+)?)\s*(?P<feet_unit>[^\d\s.]+)\s*(?P<inches>\d+(?:\.\d+)?)\s*(?P<inch_unit>[^\d\s]+)?$"
    ).unwrap();
}

/// One step of the notation priority chain
struct HeightRule {
    name: &'static str,
    notation: NotationClass,
    /// `Ok(None)` hands the text to the next rule
    attempt: fn(&str) -> NormalizeResult<Option<HeightQuantity>>,
}

/// Tried in order; the first rule that returns a height wins
static HEIGHT_RULES: &[HeightRule] = &[
    HeightRule {
        name: "composite",
        notation: NotationClass::Composite,
        attempt: parse_composite,
    },
    HeightRule {
        name: "decimal_feet",
        notation: NotationClass::SingleNumber,
        attempt: parse_decimal_feet,
    },
    HeightRule {
        name: "length_unit",
        notation: NotationClass::SingleNumber,
        attempt: parse_length_unit,
    },
    HeightRule {
        name: "magnitude_inference",
        notation: NotationClass::SingleNumber,
        attempt: parse_bare_number,
    },
];

/// Parse a free-form height into feet and inches
pub fn parse_height(text: &str) -> NormalizeResult<HeightQuantity> {
    parse_height_classified(text).map(|(_, height)| height)
}

/// Like `parse_height`, also reporting which notation the text used
pub fn parse_height_classified(text: &str) -> NormalizeResult<(NotationClass, HeightQuantity)> {
    let cleaned = clean_text(text)?;
    reject_negative(&cleaned)?;

    for rule in HEIGHT_RULES {
        if let Some(height) = (rule.attempt)(&cleaned)? {
            debug!(
                input = text,
                rule = rule.name,
                feet = height.feet,
                inches = height.inches,
                "normalized height"
            );
            return Ok((rule.notation, height));
        }
    }

    Err(NormalizeError::format(format!(
        "could not read a height from '{}'",
        text.trim()
    )))
}

/// Unit a bare, unlabeled number is assumed to be in
pub fn infer_unit(value: f64) -> Unit {
    if value >= CENTIMETER_THRESHOLD {
        Unit::Centimeter
    } else if value < METER_THRESHOLD {
        Unit::Meter
    } else {
        Unit::Foot
    }
}

/// Split a length in inches into whole feet and the inch remainder
pub fn decompose_inches(total_inches: f64) -> NormalizeResult<HeightQuantity> {
    let feet = (total_inches / 12.0).floor();
    carry(feet, total_inches - feet * 12.0)
}

/// Fractional feet are scaled, not read as inches: 5.5 ft is 5'6", not 5'5"
pub fn decompose_feet(feet: f64) -> NormalizeResult<HeightQuantity> {
    let whole = feet.trunc();
    carry(whole, (feet - whole) * 12.0)
}

/// Round the inches and move a full 12 into the feet
fn carry(feet: f64, inches: f64) -> NormalizeResult<HeightQuantity> {
    let mut feet = feet;
    let mut inches = round_to(inches, INCH_DECIMALS);
    if inches >= 12.0 {
        feet += 1.0;
        inches -= 12.0;
    }
    if inches <= 0.0 {
        inches = 0.0;
    }
    if feet > f64::from(u32::MAX) {
        return Err(NormalizeError::value(format!(
            "height of {} ft is too large",
            feet
        )));
    }
    Ok(HeightQuantity::new(feet as u32, inches))
}

fn is_foot_token(token: &str) -> bool {
    UnitConversionTable::global()
        .lookup(token)
        .map(|def| def.unit == Unit::Foot)
        .unwrap_or(false)
}

/// Feet and inches written out separately, taken literally
fn parse_composite(cleaned: &str) -> NormalizeResult<Option<HeightQuantity>> {
    let caps = match COMPOSITE_PATTERN.captures(cleaned) {
        Some(caps) => caps,
        None => return Ok(None),
    };
    let (feet, feet_unit, inches) = match (
        caps.name("feet"),
        caps.name("feet_unit"),
        caps.name("inches"),
    ) {
        (Some(f), Some(u), Some(i)) => (f.as_str(), u.as_str(), i.as_str()),
        _ => return Ok(None),
    };

    if !is_foot_token(feet_unit) {
        return Err(NormalizeError::format(format!(
            "only feet and inches can be combined, found '{}' before the second number",
            feet_unit
        )));
    }

    if let Some(inch_unit) = caps.name("inch_unit") {
        let def = validate_dimension(inch_unit.as_str(), Dimension::Length)?;
        if def.unit != Unit::Inch {
            return Err(NormalizeError::format(format!(
                "expected inches after feet, found '{}'",
                inch_unit.as_str()
            )));
        }
    }

    let feet_value = parse_number(feet)?;
    if feet_value.fract() != 0.0 {
        return Err(NormalizeError::format(format!(
            "feet must be a whole number when inches are given, found '{}'",
            feet
        )));
    }

    let inches_value = parse_number(inches)?;
    if inches_value >= 12.0 {
        return Err(NormalizeError::value(format!(
            "inches must be below 12 when feet are given, found {}",
            inches
        )));
    }

    // 11.96 rounds to 12.0 and moves into the feet
    carry(feet_value, inches_value).map(Some)
}

/// One number followed by a feet token
fn parse_decimal_feet(cleaned: &str) -> NormalizeResult<Option<HeightQuantity>> {
    match split_value_and_unit(cleaned)? {
        Some(parsed) if parsed.unit.map(is_foot_token).unwrap_or(false) => {
            let feet = ensure_non_negative(parsed.value, "height")?;
            decompose_feet(feet).map(Some)
        }
        _ => Ok(None),
    }
}

/// One number with an explicit non-feet length unit (cm, m, mm, in)
fn parse_length_unit(cleaned: &str) -> NormalizeResult<Option<HeightQuantity>> {
    let parsed = match split_value_and_unit(cleaned)? {
        Some(parsed) => parsed,
        None => return Ok(None),
    };
    let token = match parsed.unit {
        Some(token) => token,
        None => return Ok(None),
    };

    let def = validate_dimension(token, Dimension::Length)?;
    let value = ensure_non_negative(parsed.value, "height")?;
    debug!(value, unit = def.canonical, "height unit resolved");

    decompose_inches(value * def.factor).map(Some)
}

/// No unit at all: pick one from the magnitude
fn parse_bare_number(cleaned: &str) -> NormalizeResult<Option<HeightQuantity>> {
    let parsed = match split_value_and_unit(cleaned)? {
        Some(parsed) if parsed.unit.is_none() => parsed,
        _ => return Ok(None),
    };
    let value = ensure_non_negative(parsed.value, "height")?;

    let unit = infer_unit(value);
    debug!(value, unit = ?unit, "height unit inferred from magnitude");

    let height = match unit {
        Unit::Foot => decompose_feet(value)?,
        unit => {
            let factor = UnitConversionTable::global().factor(unit).ok_or_else(|| {
                NormalizeError::format(format!("no conversion factor for {:?}", unit))
            })?;
            decompose_inches(value * factor)?
        }
    };

    Ok(Some(height))
}
