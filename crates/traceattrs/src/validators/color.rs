//! Color validation.
//!
//! A color attribute accepts one color, or (when array-capable) a homogeneous
//! array of colors. Numbers count as colors only when the attribute is bound to
//! a colorscale, in which case they are mapped through that scale downstream.

use super::Validator;
use crate::color::{ColorParseError, ColorValue, CssColor};
use crate::error::{json_type_name, ValidationError, ValidationErrorKind};
use serde_json::{Number, Value};

#[derive(Debug, Clone, Copy, Default)]
pub struct ColorValidator {
    array_ok: bool,
    /// Fully-qualified colorscale attribute numbers are mapped through.
    colorscale: Option<&'static str>,
}

/// One validated array element.
enum Item {
    Css(CssColor),
    Scalar(Number),
}

impl Item {
    fn variant(&self) -> &'static str {
        match self {
            Item::Css(_) => "color string",
            Item::Scalar(_) => "number",
        }
    }
}

impl ColorValidator {
    /// A single color string.
    pub const fn single() -> Self {
        Self {
            array_ok: false,
            colorscale: None,
        }
    }

    pub const fn array_ok(mut self) -> Self {
        self.array_ok = true;
        self
    }

    /// Also accept numbers, interpreted through `colorscale`.
    pub const fn with_colorscale(mut self, colorscale: &'static str) -> Self {
        self.colorscale = Some(colorscale);
        self
    }

    fn validate_item(&self, path: &str, value: &Value) -> Result<Item, ValidationError> {
        match value {
            Value::String(text) => CssColor::parse(text)
                .map(Item::Css)
                .map_err(|err| self.reject(path, parse_error_kind(err), value)),
            Value::Number(n) if self.colorscale.is_some() => Ok(Item::Scalar(n.clone())),
            _ => Err(self.reject(path, ValidationErrorKind::TypeMismatch, value)),
        }
    }

    fn validate_array(
        &self,
        path: &str,
        value: &Value,
        items: &[Value],
    ) -> Result<ColorValue, ValidationError> {
        let mut colors = Vec::new();
        let mut scalars = Vec::new();
        let mut first: Option<&'static str> = None;

        for (index, element) in items.iter().enumerate() {
            let item = self.validate_item(&format!("{path}[{index}]"), element)?;
            let variant = item.variant();
            match first {
                None => first = Some(variant),
                Some(expected) if expected != variant => {
                    return Err(self.reject(
                        path,
                        ValidationErrorKind::MixedTypeArray {
                            first: expected,
                            conflicting: variant,
                            index,
                        },
                        value,
                    ));
                }
                Some(_) => {}
            }
            match item {
                Item::Css(color) => colors.push(color),
                Item::Scalar(n) => scalars.push(n),
            }
        }

        Ok(if scalars.is_empty() {
            ColorValue::Colors(colors)
        } else {
            ColorValue::Scalars(scalars)
        })
    }
}

/// Map a parse failure onto the error taxonomy: unrecognized words are unknown
/// enumeration members, broken notation is a type mismatch.
pub(crate) fn parse_error_kind(err: ColorParseError) -> ValidationErrorKind {
    match err {
        ColorParseError::UnknownName(name) => ValidationErrorKind::UnknownEnumValue(name),
        ColorParseError::MalformedHex | ColorParseError::MalformedFunctional => {
            ValidationErrorKind::TypeMismatch
        }
    }
}

impl Validator for ColorValidator {
    type Output = ColorValue;

    fn validate(&self, path: &str, value: &Value) -> Result<ColorValue, ValidationError> {
        match value {
            Value::Array(items) if self.array_ok => self.validate_array(path, value, items),
            Value::Array(_) | Value::Object(_) | Value::Bool(_) | Value::Null => {
                tracing::trace!(path, kind = json_type_name(value), "rejecting non-color value");
                Err(self.reject(path, ValidationErrorKind::TypeMismatch, value))
            }
            _ => Ok(match self.validate_item(path, value)? {
                Item::Css(color) => ColorValue::Color(color),
                Item::Scalar(n) => ColorValue::Scalar(n),
            }),
        }
    }

    fn accepted(&self) -> Vec<String> {
        let mut forms = vec![
            "a hex string (e.g. '#ff0000')".to_string(),
            "an rgb/rgba string (e.g. 'rgb(255,0,0)')".to_string(),
            "an hsl/hsla string (e.g. 'hsl(0,100%,50%)')".to_string(),
            "an hsv/hsva string (e.g. 'hsv(0,100%,100%)')".to_string(),
            "a named CSS color".to_string(),
        ];
        if let Some(colorscale) = self.colorscale {
            forms.push(format!(
                "a number that will be interpreted as a color according to {colorscale}"
            ));
        }
        if self.array_ok {
            forms.push(
                "a list or array of any of the above, all strings or all numbers".to_string(),
            );
        }
        forms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PATH: &str = "parcoords.line.color";

    fn line_color() -> ColorValidator {
        ColorValidator::single()
            .array_ok()
            .with_colorscale("parcoords.line.colorscale")
    }

    #[test]
    fn accepts_hex_string() {
        let value = line_color().validate(PATH, &json!("#ff0000")).unwrap();
        assert_eq!(Value::from(&value), json!("#ff0000"));
    }

    #[test]
    fn accepts_number_only_with_colorscale() {
        assert_eq!(
            line_color().validate(PATH, &json!(5)).unwrap(),
            ColorValue::Scalar(Number::from(5))
        );
        let err = ColorValidator::single()
            .validate("parcoords.line.colorbar.bgcolor", &json!(5))
            .unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::TypeMismatch);
    }

    #[test]
    fn mixed_array_is_rejected() {
        let err = line_color()
            .validate(PATH, &json!(["#ff0000", 5]))
            .unwrap_err();
        assert_eq!(
            err.kind,
            ValidationErrorKind::MixedTypeArray {
                first: "color string",
                conflicting: "number",
                index: 1
            }
        );
        assert_eq!(err.path, PATH);
    }

    #[test]
    fn mixed_string_forms_are_one_variant() {
        let value = line_color()
            .validate(PATH, &json!(["#ff0000", "red", "rgb(0,0,255)"]))
            .unwrap();
        assert!(matches!(value, ColorValue::Colors(ref c) if c.len() == 3));
    }

    #[test]
    fn numeric_array_is_scalars() {
        let value = line_color().validate(PATH, &json!([1, 2.5, 3])).unwrap();
        assert!(value.is_numeric());
        assert_eq!(Value::from(&value), json!([1, 2.5, 3]));
    }

    #[test]
    fn malformed_element_reports_element_path() {
        let err = line_color()
            .validate(PATH, &json!(["red", "#12"]))
            .unwrap_err();
        assert_eq!(err.path, "parcoords.line.color[1]");
        assert_eq!(err.kind, ValidationErrorKind::TypeMismatch);
    }

    #[test]
    fn unknown_word_is_unknown_enum_value() {
        let err = line_color().validate(PATH, &json!("notacolor")).unwrap_err();
        assert_eq!(
            err.kind,
            ValidationErrorKind::UnknownEnumValue("notacolor".to_string())
        );
        assert_eq!(err.accepted.len(), 7);
    }

    #[test]
    fn arrays_need_array_ok() {
        let err = ColorValidator::single()
            .validate(PATH, &json!(["red"]))
            .unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::TypeMismatch);
    }

    #[test]
    fn booleans_are_not_colors() {
        let err = line_color().validate(PATH, &json!(true)).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::TypeMismatch);
        assert_eq!(err.actual, "boolean true");
    }
}
