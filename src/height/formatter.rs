use serde::{Deserialize, Serialize};

use crate::units::table::round_to;
use crate::units::types::HeightQuantity;

/// How a height is written out in a report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeightStyle {
    /// `5'11"`
    #[default]
    Compact,
    /// `5 ft 11 in`
    Verbose,
}

/// Render a feet/inches pair as `5'11"` (or `5'10.9"` for fractional inches)
pub fn format_height(feet: u32, inches: f64) -> String {
    HeightFormatter::new(HeightStyle::Compact).format_pair(feet, inches)
}

/// Formats heights in one configured style
#[derive(Debug, Clone, Copy, Default)]
pub struct HeightFormatter {
    style: HeightStyle,
}

impl HeightFormatter {
    pub fn new(style: HeightStyle) -> Self {
        Self { style }
    }

    pub fn format(&self, height: &HeightQuantity) -> String {
        self.format_pair(height.feet, height.inches)
    }

    pub fn format_pair(&self, feet: u32, inches: f64) -> String {
        let mut feet = feet;
        let mut inches = round_to(inches, 1);
        if inches >= 12.0 {
            feet += 1;
            inches -= 12.0;
        }
        let inches = inches_text(inches);

        match self.style {
            HeightStyle::Compact => format!("{}'{}\"", feet, inches),
            HeightStyle::Verbose => format!("{} ft {} in", feet, inches),
        }
    }
}

fn inches_text(inches: f64) -> String {
    if inches.fract() == 0.0 {
        format!("{:.0}", inches)
    } else {
        format!("{:.1}", inches)
    }
}
