// Unit vocabulary and text handling shared by the weight and height normalizers

pub mod detector;
pub mod error;
pub mod table;
pub mod types;
pub mod validator;

pub use detector::{clean_text, contains_number};
pub use error::{NormalizeError, NormalizeResult};
pub use table::{Unit, UnitConversionTable, UnitDef};
pub use types::{Dimension, HeightQuantity, NotationClass, WeightQuantity};
pub use validator::{ensure_non_negative, validate_dimension};
