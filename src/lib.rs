pub mod convert;
pub mod height;
pub mod shell;
pub mod units;
pub mod weight;

pub use height::{format_height, parse_height};
pub use units::{HeightQuantity, NormalizeError, WeightQuantity};
pub use weight::parse_weight;
