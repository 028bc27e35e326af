#[cfg(test)]
mod tests {
    use super::super::parser::*;
    use crate::units::error::NormalizeError;
    use crate::units::table::Unit;
    use crate::units::types::NotationClass;

    fn pair(text: &str) -> (u32, f64) {
        parse_height(text)
            .unwrap_or_else(|e| panic!("'{}' failed to parse: {}", text, e))
            .as_pair()
    }

    #[test]
    fn test_decimal_feet_is_scaled_not_read_as_inches() {
        assert_eq!(pair("5.5 ft"), (5, 6.0));
        assert_ne!(pair("5.5 ft"), (5, 5.0));
        assert_eq!(pair("5.1 ft"), (5, 1.2));
        assert_eq!(pair("5.25 feet"), (5, 3.0));
        assert_eq!(pair("6ft"), (6, 0.0));
        assert_eq!(pair("5'"), (5, 0.0));
    }

    #[test]
    fn test_composite_notation_is_literal() {
        assert_eq!(pair("5'11"), (5, 11.0));
        assert_eq!(pair("5ft 11in"), (5, 11.0));
        assert_eq!(pair("5'11"), pair("5ft 11in"));
        assert_eq!(pair("5' 11\""), (5, 11.0));
        assert_eq!(pair("5'11''"), (5, 11.0));
        assert_eq!(pair("5 feet 11 inches"), (5, 11.0));
        assert_eq!(pair("5 foot 1"), (5, 1.0));
        assert_eq!(pair("5’11”"), (5, 11.0));
        assert_eq!(pair("5'5.5"), (5, 5.5));
        assert_eq!(pair("5'11.96"), (6, 0.0));
        assert_eq!(pair("5'11.96"), pair("71.96 in"));
    }

    #[test]
    fn test_composite_wins_over_decimal_feet() {
        let (notation, height) = parse_height_classified("5'5").unwrap();
        assert_eq!(notation, NotationClass::Composite);
        assert_eq!(height.as_pair(), (5, 5.0));

        let (notation, height) = parse_height_classified("5.5'").unwrap();
        assert_eq!(notation, NotationClass::SingleNumber);
        assert_eq!(height.as_pair(), (5, 6.0));
    }

    #[test]
    fn test_composite_rejects_inches_of_twelve_or_more() {
        assert!(matches!(
            parse_height("5'12"),
            Err(NormalizeError::InvalidValue(_))
        ));
        assert!(matches!(
            parse_height("5 ft 14 in"),
            Err(NormalizeError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_composite_rejects_mismatched_tokens() {
        for text in ["5.5'11", "1 m 80", "5 ft 11 cm", "5 ft 11 kg"] {
            assert!(
                matches!(parse_height(text), Err(NormalizeError::InvalidFormat(_))),
                "'{}' should be InvalidFormat, got {:?}",
                text,
                parse_height(text)
            );
        }
    }

    #[test]
    fn test_metric_units() {
        assert_eq!(pair("180cm"), (5, 10.9));
        assert_eq!(pair("180 centimetres"), (5, 10.9));
        assert_eq!(pair("1.8 m"), (5, 10.9));
        assert_eq!(pair("1800 mm"), (5, 10.9));
        assert_eq!(pair("152.4 cm"), (5, 0.0));
    }

    #[test]
    fn test_inches_only() {
        assert_eq!(pair("71 in"), (5, 11.0));
        assert_eq!(pair("71\""), (5, 11.0));
        assert_eq!(pair("72 inches"), (6, 0.0));
    }

    #[test]
    fn test_magnitude_inference() {
        let cm = pair("180");
        let m = pair("1.8");
        assert_eq!(cm.0, 5);
        assert_eq!(m.0, 5);
        assert!((cm.1 - m.1).abs() < 0.1, "{:?} vs {:?}", cm, m);

        assert_eq!(pair("5.5"), (5, 6.0));
        assert_eq!(pair("6"), (6, 0.0));
    }

    #[test]
    fn test_inference_thresholds() {
        assert_eq!(infer_unit(CENTIMETER_THRESHOLD), Unit::Centimeter);
        assert_eq!(infer_unit(CENTIMETER_THRESHOLD - 0.1), Unit::Foot);
        assert_eq!(infer_unit(METER_THRESHOLD), Unit::Foot);
        assert_eq!(infer_unit(METER_THRESHOLD - 0.1), Unit::Meter);
        assert_eq!(infer_unit(180.0), Unit::Centimeter);
        assert_eq!(infer_unit(1.8), Unit::Meter);
        assert_eq!(infer_unit(5.5), Unit::Foot);
    }

    #[test]
    fn test_filler_words() {
        assert_eq!(pair("she is about 5'11 tall"), (5, 11.0));
        assert_eq!(pair("height: 180 cm"), (5, 10.9));
    }

    #[test]
    fn test_decomposition_invariants() {
        let inputs = [
            "0", "1.8", "2.99", "3", "5.99 ft", "99.9", "100", "180", "250cm", "1.5 m",
            "5'11.9", "71.96 in", "6.999 ft", "12 in",
        ];
        for text in inputs {
            let height = parse_height(text).unwrap();
            assert!(
                height.inches >= 0.0 && height.inches < 12.0,
                "'{}' gave inches {}",
                text,
                height.inches
            );
        }
    }

    #[test]
    fn test_decompose_preserves_total_length() {
        for total in [0.0, 11.96, 60.0, 70.866, 71.5, 95.04] {
            let height = decompose_inches(total).unwrap();
            assert!(
                (height.total_inches() - total).abs() <= 0.05 + 1e-9,
                "{} -> {:?}",
                total,
                height
            );
        }
        assert_eq!(decompose_inches(11.96).unwrap().as_pair(), (1, 0.0));
        assert_eq!(decompose_feet(6.999).unwrap().as_pair(), (7, 0.0));
    }

    #[test]
    fn test_feet_beyond_range_are_rejected() {
        for text in ["9999999999 ft", "99999999999999 cm", "9999999999'5", "99999999999999"] {
            assert!(
                matches!(parse_height(text), Err(NormalizeError::InvalidValue(_))),
                "'{}' should be InvalidValue, got {:?}",
                text,
                parse_height(text)
            );
        }
        assert!(decompose_feet(f64::from(u32::MAX)).is_ok());
    }

    #[test]
    fn test_invalid_format() {
        for text in ["", "  ", "tall", "180 kg", "5 furlongs", "five foot"] {
            assert!(
                matches!(parse_height(text), Err(NormalizeError::InvalidFormat(_))),
                "'{}' should be InvalidFormat, got {:?}",
                text,
                parse_height(text)
            );
        }
    }

    #[test]
    fn test_invalid_value() {
        for text in ["-180", "-5'11", "-1.8 m", "minus 6 ft"] {
            assert!(
                matches!(parse_height(text), Err(NormalizeError::InvalidValue(_))),
                "'{}' should be InvalidValue, got {:?}",
                text,
                parse_height(text)
            );
        }
    }
}
