use serde::Serialize;
use std::fmt;

use crate::height::formatter::format_height;

/// Physical dimension a unit token belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// Canonical unit: pounds
    Mass,
    /// Canonical unit: inches
    Length,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Mass => write!(f, "mass"),
            Dimension::Length => write!(f, "length"),
        }
    }
}

/// A body weight, always in pounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightQuantity {
    pub pounds: f64,
}

impl WeightQuantity {
    pub fn new(pounds: f64) -> Self {
        Self { pounds }
    }
}

impl fmt::Display for WeightQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} lbs", self.pounds)
    }
}

/// A body height as the feet/inches decomposition of one length.
///
/// `inches` is always in `[0, 12)` and relative to the completed `feet`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeightQuantity {
    pub feet: u32,
    pub inches: f64,
}

impl HeightQuantity {
    pub fn new(feet: u32, inches: f64) -> Self {
        Self { feet, inches }
    }

    pub fn total_inches(&self) -> f64 {
        f64::from(self.feet) * 12.0 + self.inches
    }

    /// The `(feet, inches)` pair handed to formatters and report code
    pub fn as_pair(&self) -> (u32, f64) {
        (self.feet, self.inches)
    }
}

impl fmt::Display for HeightQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_height(self.feet, self.inches))
    }
}

/// How a height string was written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotationClass {
    /// Feet and inches given as two literal numbers: `5'11`, `5ft 11in`
    Composite,
    /// One number, with or without a single unit: `5.5 ft`, `180cm`, `1.8`
    SingleNumber,
}
