use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::units::types::Dimension;

/// 1 kilogram in pounds
pub const POUNDS_PER_KILOGRAM: f64 = 2.20462;
/// 1 inch in centimeters
pub const CENTIMETERS_PER_INCH: f64 = 2.54;
/// 1 stone in pounds
pub const POUNDS_PER_STONE: f64 = 14.0;
/// Decimal places kept on a normalized weight
pub const WEIGHT_DECIMALS: i32 = 2;

/// Units known to the normalizers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Kilogram,
    Gram,
    Pound,
    Ounce,
    Stone,
    /// Chinese market catty, 0.5 kg
    Jin,
    /// Iberian arroba, 11.5 kg
    Arroba,
    Millimeter,
    Centimeter,
    Meter,
    Inch,
    Foot,
}

/// One row of the conversion table
#[derive(Debug)]
pub struct UnitDef {
    pub unit: Unit,
    pub canonical: &'static str,
    pub dimension: Dimension,
    /// Multiplier into pounds (mass) or inches (length)
    pub factor: f64,
    /// Every spelling that resolves to this unit, canonical one included
    pub aliases: &'static [&'static str],
}

static UNIT_DEFS: &[UnitDef] = &[
    UnitDef {
        unit: Unit::Kilogram,
        canonical: "kg",
        dimension: Dimension::Mass,
        factor: POUNDS_PER_KILOGRAM,
        aliases: &[
            "kg", "kgs", "kilo", "kilos", "kilogram", "kilograms", "kilogramme", "kilogrammes",
            "killogram", "killograms", "kilogam", "kilogams", "kilogarm", "kilogarms",
            "kilgram", "kilgrams", "kilograme", "kilogrames", "killo", "killos", "kgr",
        ],
    },
    UnitDef {
        unit: Unit::Gram,
        canonical: "g",
        dimension: Dimension::Mass,
        factor: POUNDS_PER_KILOGRAM / 1000.0,
        aliases: &["g", "gr", "grs", "gram", "grams", "gramme", "grammes"],
    },
    UnitDef {
        unit: Unit::Pound,
        canonical: "lb",
        dimension: Dimension::Mass,
        factor: 1.0,
        aliases: &[
            "lb", "lbs", "ib", "ibs", "pound", "pounds", "pount", "pounts", "pund", "punds",
            "pownd", "pownds", "poud", "pouds", "poound", "pounde", "pnd", "pnds",
        ],
    },
    UnitDef {
        unit: Unit::Ounce,
        canonical: "oz",
        dimension: Dimension::Mass,
        factor: 1.0 / 16.0,
        aliases: &["oz", "ozs", "ounce", "ounces", "ounze", "ounzes"],
    },
    UnitDef {
        unit: Unit::Stone,
        canonical: "st",
        dimension: Dimension::Mass,
        factor: POUNDS_PER_STONE,
        aliases: &["st", "stn", "stone", "stones", "ston", "stons"],
    },
    UnitDef {
        unit: Unit::Jin,
        canonical: "jin",
        dimension: Dimension::Mass,
        factor: 0.5 * POUNDS_PER_KILOGRAM,
        aliases: &["jin", "jins", "catty", "catties", "斤"],
    },
    UnitDef {
        unit: Unit::Arroba,
        canonical: "arroba",
        dimension: Dimension::Mass,
        factor: 11.5 * POUNDS_PER_KILOGRAM,
        aliases: &["arroba", "arrobas", "aroba", "arobas", "@"],
    },
    UnitDef {
        unit: Unit::Millimeter,
        canonical: "mm",
        dimension: Dimension::Length,
        factor: 0.1 / CENTIMETERS_PER_INCH,
        aliases: &["mm", "millimeter", "millimeters", "millimetre", "millimetres"],
    },
    UnitDef {
        unit: Unit::Centimeter,
        canonical: "cm",
        dimension: Dimension::Length,
        factor: 1.0 / CENTIMETERS_PER_INCH,
        aliases: &[
            "cm", "cms", "centimeter", "centimeters", "centimetre", "centimetres",
            "centimter", "centimters", "centi",
        ],
    },
    UnitDef {
        unit: Unit::Meter,
        canonical: "m",
        dimension: Dimension::Length,
        factor: 100.0 / CENTIMETERS_PER_INCH,
        aliases: &["m", "mt", "mts", "mtr", "mtrs", "meter", "meters", "metre", "metres", "meeter", "meeters"],
    },
    UnitDef {
        unit: Unit::Inch,
        canonical: "in",
        dimension: Dimension::Length,
        factor: 1.0,
        aliases: &["in", "ins", "inch", "inches", "inchs", "inchees", "\"", "''"],
    },
    UnitDef {
        unit: Unit::Foot,
        canonical: "ft",
        dimension: Dimension::Length,
        factor: 12.0,
        aliases: &["ft", "fts", "foot", "feet", "feets", "fet", "'"],
    },
];

lazy_static! {
    static ref GLOBAL_TABLE: UnitConversionTable = UnitConversionTable::build(UNIT_DEFS);
}

/// Read-only lookup from unit token to its definition.
///
/// Built once from `UNIT_DEFS` and shared by every parse call.
pub struct UnitConversionTable {
    defs: &'static [UnitDef],
    by_alias: HashMap<&'static str, usize>,
}

impl UnitConversionTable {
    fn build(defs: &'static [UnitDef]) -> Self {
        let mut by_alias = HashMap::new();
        for (idx, def) in defs.iter().enumerate() {
            for alias in def.aliases {
                by_alias.insert(*alias, idx);
            }
        }
        Self { defs, by_alias }
    }

    /// The process-wide table
    pub fn global() -> &'static UnitConversionTable {
        &GLOBAL_TABLE
    }

    /// Resolve a token (any case, trailing dot allowed: "Lbs.")
    pub fn lookup(&self, token: &str) -> Option<&UnitDef> {
        let key = token.trim().trim_end_matches('.').to_lowercase();
        self.by_alias.get(key.as_str()).map(|idx| &self.defs[*idx])
    }

    pub fn def(&self, unit: Unit) -> Option<&UnitDef> {
        self.defs.iter().find(|d| d.unit == unit)
    }

    pub fn factor(&self, unit: Unit) -> Option<f64> {
        self.def(unit).map(|d| d.factor)
    }

    pub fn units(&self) -> impl Iterator<Item = &UnitDef> {
        self.defs.iter()
    }

    /// Number of distinct spellings known to the table
    pub fn alias_count(&self) -> usize {
        self.by_alias.len()
    }
}

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_are_unique() {
        let mut seen = HashMap::new();
        for def in UNIT_DEFS {
            for alias in def.aliases {
                if let Some(prev) = seen.insert(*alias, def.unit) {
                    assert_eq!(prev, def.unit, "alias '{}' maps to two units", alias);
                }
            }
        }
    }

    #[test]
    fn test_every_unit_lists_its_canonical_name() {
        for def in UNIT_DEFS {
            assert!(
                def.aliases.contains(&def.canonical),
                "{:?} does not list '{}'",
                def.unit,
                def.canonical
            );
        }
    }

    #[test]
    fn test_typos_resolve_to_canonical_unit() {
        let table = UnitConversionTable::global();
        assert_eq!(table.lookup("killograms").unwrap().unit, Unit::Kilogram);
        assert_eq!(table.lookup("pount").unwrap().unit, Unit::Pound);
        assert_eq!(table.lookup("KG").unwrap().unit, Unit::Kilogram);
        assert_eq!(table.lookup("lbs.").unwrap().unit, Unit::Pound);
        assert_eq!(table.lookup("斤").unwrap().unit, Unit::Jin);
        assert!(table.lookup("furlong").is_none());
    }

    #[test]
    fn test_dimensions() {
        let table = UnitConversionTable::global();
        assert_eq!(table.def(Unit::Arroba).unwrap().dimension, Dimension::Mass);
        assert_eq!(table.def(Unit::Centimeter).unwrap().dimension, Dimension::Length);
        assert_eq!(table.def(Unit::Foot).unwrap().dimension, Dimension::Length);
    }

    #[test]
    fn test_factors() {
        let table = UnitConversionTable::global();
        assert!((table.factor(Unit::Jin).unwrap() * 100.0 - 110.231).abs() < 0.001);
        assert!((table.factor(Unit::Arroba).unwrap() - 25.353).abs() < 0.001);
        assert_eq!(table.factor(Unit::Foot), Some(12.0));
        assert!((table.factor(Unit::Centimeter).unwrap() * 254.0 - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(154.3234, 2), 154.32);
        assert_eq!(round_to(1.2000000000000002, 1), 1.2);
        assert_eq!(round_to(10.96, 1), 11.0);
    }
}
