// Fixed-formula metric -> imperial conversion for already-clean numbers.
// No text parsing here; see `weight` and `height` for free-form input.

use serde::Serialize;

use crate::height::parser::decompose_inches;
use crate::units::error::NormalizeResult;
use crate::units::table::{round_to, CENTIMETERS_PER_INCH, POUNDS_PER_KILOGRAM};
use crate::units::validator::ensure_non_negative;

const OUNCES_PER_POUND: f64 = 16.0;

/// Weight and height split into imperial whole units and remainders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImperialMetrics {
    pub weight_lbs: u32,
    /// Remaining ounces, one decimal place
    pub weight_oz: f64,
    pub height_ft: u32,
    /// Remaining inches, one decimal place
    pub height_in: f64,
}

pub fn convert_health_metrics(weight_kg: f64, height_cm: f64) -> NormalizeResult<ImperialMetrics> {
    let weight_kg = ensure_non_negative(weight_kg, "weight")?;
    let height_cm = ensure_non_negative(height_cm, "height")?;

    let total_lbs = weight_kg * POUNDS_PER_KILOGRAM;
    let mut pounds = total_lbs.trunc();
    let mut ounces = round_to((total_lbs - pounds) * OUNCES_PER_POUND, 1);
    if ounces >= OUNCES_PER_POUND {
        pounds += 1.0;
        ounces -= OUNCES_PER_POUND;
    }

    let height = decompose_inches(height_cm / CENTIMETERS_PER_INCH)?;

    Ok(ImperialMetrics {
        weight_lbs: pounds as u32,
        weight_oz: ounces,
        height_ft: height.feet,
        height_in: height.inches,
    })
}
