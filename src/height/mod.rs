pub mod formatter;
pub mod parser;

#[cfg(test)]
mod tests;

pub use formatter::{format_height, HeightFormatter, HeightStyle};
pub use parser::{parse_height, parse_height_classified, CENTIMETER_THRESHOLD, METER_THRESHOLD};
