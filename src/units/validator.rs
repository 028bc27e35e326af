use crate::units::error::{NormalizeError, NormalizeResult};
use crate::units::table::{UnitConversionTable, UnitDef};
use crate::units::types::Dimension;

/// Resolve a unit token and check it measures what the caller expects.
///
/// Unknown tokens and tokens of the other dimension ("kg" given as a
/// height) are both `InvalidFormat`.
pub fn validate_dimension(
    token: &str,
    expected_dimension: Dimension,
) -> NormalizeResult<&'static UnitDef> {
    let def = UnitConversionTable::global()
        .lookup(token)
        .ok_or_else(|| NormalizeError::format(format!("unrecognized unit '{}'", token)))?;

    if def.dimension != expected_dimension {
        return Err(NormalizeError::format(format!(
            "'{}' is a unit of {}, expected a unit of {}",
            token, def.dimension, expected_dimension
        )));
    }

    Ok(def)
}

/// Fail with `InvalidValue` on a negative magnitude
pub fn ensure_non_negative(value: f64, what: &str) -> NormalizeResult<f64> {
    if value < 0.0 {
        return Err(NormalizeError::value(format!(
            "{} cannot be negative (got {})",
            what, value
        )));
    }
    Ok(value)
}
