//! Colorscale validation.
//!
//! A colorscale is either a palette name or an explicit list of
//! `[position, color]` stops. Stops must sit in [0, 1], must not go backwards,
//! and must cover both endpoints.

use super::color::parse_error_kind;
use super::Validator;
use crate::color::{canonical_colorscale, ColorStop, Colorscale, CssColor, NAMED_COLORSCALES};
use crate::error::{Endpoint, ValidationError, ValidationErrorKind};
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default)]
pub struct ColorscaleValidator;

impl ColorscaleValidator {
    fn validate_stops(
        &self,
        path: &str,
        value: &Value,
        entries: &[Value],
    ) -> Result<Colorscale, ValidationError> {
        let mut stops: Vec<ColorStop> = Vec::with_capacity(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            let entry_path = format!("{path}[{index}]");
            let (position, color) = match entry {
                Value::Array(pair) if pair.len() == 2 => (&pair[0], &pair[1]),
                _ => return Err(self.reject(&entry_path, ValidationErrorKind::TypeMismatch, entry)),
            };

            let (Value::Number(position), Some(at)) = (position, position.as_f64()) else {
                return Err(self.reject(&entry_path, ValidationErrorKind::TypeMismatch, entry));
            };
            if !(0.0..=1.0).contains(&at) {
                let detail = format!("position {position} is outside [0, 1]");
                return Err(self.reject(&entry_path, ValidationErrorKind::Range(detail), entry));
            }
            if let Some(prev) = stops.last() {
                if prev.position.as_f64().is_some_and(|p| at < p) {
                    let detail = format!(
                        "position {position} comes after the larger position {}",
                        prev.position
                    );
                    return Err(self.reject(&entry_path, ValidationErrorKind::Range(detail), entry));
                }
            }

            let color_path = format!("{entry_path}[1]");
            let Value::String(text) = color else {
                return Err(self.reject(&color_path, ValidationErrorKind::TypeMismatch, color));
            };
            let color = CssColor::parse(text)
                .map_err(|err| self.reject(&color_path, parse_error_kind(err), color))?;

            stops.push(ColorStop {
                position: position.clone(),
                color,
            });
        }

        let starts_at_zero = stops
            .first()
            .and_then(|stop| stop.position.as_f64())
            .is_some_and(|p| p == 0.0);
        let ends_at_one = stops
            .last()
            .and_then(|stop| stop.position.as_f64())
            .is_some_and(|p| p == 1.0);
        let missing = match (starts_at_zero, ends_at_one) {
            (true, true) => None,
            (false, true) => Some(Endpoint::Zero),
            (true, false) => Some(Endpoint::One),
            (false, false) => Some(Endpoint::Both),
        };
        if let Some(endpoint) = missing {
            return Err(self.reject(
                path,
                ValidationErrorKind::IncompleteColorscale(endpoint),
                value,
            ));
        }

        Ok(Colorscale::Stops(stops))
    }
}

impl Validator for ColorscaleValidator {
    type Output = Colorscale;

    fn validate(&self, path: &str, value: &Value) -> Result<Colorscale, ValidationError> {
        match value {
            Value::String(name) => canonical_colorscale(name)
                .map(Colorscale::Named)
                .ok_or_else(|| {
                    self.reject(path, ValidationErrorKind::UnknownEnumValue(name.clone()), value)
                }),
            Value::Array(entries) => self.validate_stops(path, value, entries),
            _ => Err(self.reject(path, ValidationErrorKind::TypeMismatch, value)),
        }
    }

    fn accepted(&self) -> Vec<String> {
        vec![
            "a list of 2-element lists where the first element is the normalized color level \
             value (starting at 0 and ending at 1) and the second item is a valid color string \
             (e.g. [[0, 'green'], [0.5, 'red'], [1.0, 'rgb(0, 0, 255)']])"
                .to_string(),
            format!("one of the named colorscales: {}", NAMED_COLORSCALES.join(", ")),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PATH: &str = "parcoords.line.colorscale";

    #[test]
    fn explicit_stops_round_trip() {
        let input = json!([[0, "green"], [1, "red"]]);
        let scale = ColorscaleValidator.validate(PATH, &input).unwrap();
        assert_eq!(Value::from(&scale), input);
    }

    #[test]
    fn named_palette_is_canonicalized() {
        let scale = ColorscaleValidator.validate(PATH, &json!("viridis")).unwrap();
        assert_eq!(scale, Colorscale::Named("Viridis"));
    }

    #[test]
    fn unknown_palette_is_unknown_enum_value() {
        let err = ColorscaleValidator
            .validate(PATH, &json!("Plasma"))
            .unwrap_err();
        assert_eq!(
            err.kind,
            ValidationErrorKind::UnknownEnumValue("Plasma".to_string())
        );
    }

    #[test]
    fn missing_zero_endpoint_is_incomplete() {
        let err = ColorscaleValidator
            .validate(PATH, &json!([[0.2, "green"], [1, "red"]]))
            .unwrap_err();
        assert_eq!(
            err.kind,
            ValidationErrorKind::IncompleteColorscale(Endpoint::Zero)
        );
        assert_eq!(err.path, PATH);
    }

    #[test]
    fn missing_one_endpoint_is_incomplete() {
        let err = ColorscaleValidator
            .validate(PATH, &json!([[0, "green"], [0.8, "red"]]))
            .unwrap_err();
        assert_eq!(
            err.kind,
            ValidationErrorKind::IncompleteColorscale(Endpoint::One)
        );
    }

    #[test]
    fn empty_list_misses_both_endpoints() {
        let err = ColorscaleValidator.validate(PATH, &json!([])).unwrap_err();
        assert_eq!(
            err.kind,
            ValidationErrorKind::IncompleteColorscale(Endpoint::Both)
        );
    }

    #[test]
    fn negative_position_is_out_of_range() {
        let err = ColorscaleValidator
            .validate(PATH, &json!([[-0.1, "green"], [1, "red"]]))
            .unwrap_err();
        assert!(matches!(err.kind, ValidationErrorKind::Range(_)));
        assert_eq!(err.path, "parcoords.line.colorscale[0]");
    }

    #[test]
    fn decreasing_positions_are_out_of_range() {
        let err = ColorscaleValidator
            .validate(PATH, &json!([[0, "green"], [0.7, "blue"], [0.3, "red"], [1, "red"]]))
            .unwrap_err();
        assert!(matches!(err.kind, ValidationErrorKind::Range(_)));
        assert_eq!(err.path, "parcoords.line.colorscale[2]");
    }

    #[test]
    fn stop_color_must_be_a_color_string() {
        let err = ColorscaleValidator
            .validate(PATH, &json!([[0, 3], [1, "red"]]))
            .unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::TypeMismatch);
        assert_eq!(err.path, "parcoords.line.colorscale[0][1]");

        let err = ColorscaleValidator
            .validate(PATH, &json!([[0, "mauve-ish"], [1, "red"]]))
            .unwrap_err();
        assert!(matches!(err.kind, ValidationErrorKind::UnknownEnumValue(_)));
    }

    #[test]
    fn malformed_entries_are_type_mismatches() {
        let cases = [
            json!([[0, "green", 1], [1, "red"]]),
            json!([["0", "green"], [1, "red"]]),
            json!(42),
        ];
        for bad in cases {
            let err = ColorscaleValidator.validate(PATH, &bad).unwrap_err();
            assert_eq!(err.kind, ValidationErrorKind::TypeMismatch);
        }
    }
}
