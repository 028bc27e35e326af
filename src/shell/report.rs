use crate::height::formatter::HeightFormatter;
use crate::shell::config::ReportConfig;
use crate::units::types::{HeightQuantity, WeightQuantity};

const BANNER_WIDTH: usize = 40;

/// One patient's normalized measurements
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub weight: WeightQuantity,
    pub height: HeightQuantity,
}

impl Report {
    pub fn new(weight: WeightQuantity, height: HeightQuantity) -> Self {
        Self { weight, height }
    }

    pub fn render(&self, config: &ReportConfig) -> String {
        let rule = "*".repeat(BANNER_WIDTH);
        let height = HeightFormatter::new(config.height_style).format(&self.height);

        format!(
            "\n{rule}\n{title:^width$}\n{rule}\n  WEIGHT: {weight:.decimals$} lbs\n  HEIGHT: {height}\n{rule}\n",
            rule = rule,
            title = "STANDARDIZED REPORT",
            width = BANNER_WIDTH,
            weight = self.weight.pounds,
            decimals = config.weight_decimals,
            height = height,
        )
    }
}
