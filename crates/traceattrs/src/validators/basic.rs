//! Scalar and array validators.

use super::Validator;
use crate::error::{ValidationError, ValidationErrorKind};
use serde_json::{Number, Value};

/// Accepts `true` or `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanValidator;

impl Validator for BooleanValidator {
    type Output = bool;

    fn validate(&self, path: &str, value: &Value) -> Result<bool, ValidationError> {
        match value {
            Value::Bool(flag) => Ok(*flag),
            _ => Err(self.reject(path, ValidationErrorKind::TypeMismatch, value)),
        }
    }

    fn accepted(&self) -> Vec<String> {
        vec!["a bool (either true or false)".to_string()]
    }
}

/// Accepts any int or float within optional inclusive bounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberValidator {
    min: Option<f64>,
    max: Option<f64>,
}

impl NumberValidator {
    pub const fn unbounded() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    pub const fn at_least(min: f64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub const fn between(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }
}

fn interval(min: Option<String>, max: Option<String>) -> String {
    format!(
        "[{}, {}]",
        min.unwrap_or_else(|| "-inf".to_string()),
        max.unwrap_or_else(|| "inf".to_string())
    )
}

impl Validator for NumberValidator {
    type Output = Number;

    fn validate(&self, path: &str, value: &Value) -> Result<Number, ValidationError> {
        let Value::Number(number) = value else {
            return Err(self.reject(path, ValidationErrorKind::TypeMismatch, value));
        };
        let Some(x) = number.as_f64() else {
            return Err(self.reject(path, ValidationErrorKind::TypeMismatch, value));
        };
        let below = self.min.is_some_and(|min| x < min);
        let above = self.max.is_some_and(|max| x > max);
        if below || above {
            let detail = format!(
                "{number} is not in {}",
                interval(self.min.map(|v| v.to_string()), self.max.map(|v| v.to_string()))
            );
            return Err(self.reject(path, ValidationErrorKind::Range(detail), value));
        }
        Ok(number.clone())
    }

    fn accepted(&self) -> Vec<String> {
        if self.min.is_none() && self.max.is_none() {
            return vec!["an int or float".to_string()];
        }
        vec![format!(
            "an int or float in the interval {}",
            interval(self.min.map(|v| v.to_string()), self.max.map(|v| v.to_string()))
        )]
    }
}

/// Accepts whole numbers within optional inclusive bounds. Floats are rejected
/// even when they have no fractional part.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerValidator {
    min: Option<i64>,
    max: Option<i64>,
}

impl IntegerValidator {
    pub const fn at_least(min: i64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }
}

impl Validator for IntegerValidator {
    type Output = Number;

    fn validate(&self, path: &str, value: &Value) -> Result<Number, ValidationError> {
        let whole = match value {
            Value::Number(n) => n
                .as_i64()
                .map(i128::from)
                .or_else(|| n.as_u64().map(i128::from)),
            _ => None,
        };
        let (Some(whole), Value::Number(number)) = (whole, value) else {
            return Err(self.reject(path, ValidationErrorKind::TypeMismatch, value));
        };
        let below = self.min.is_some_and(|min| whole < i128::from(min));
        let above = self.max.is_some_and(|max| whole > i128::from(max));
        if below || above {
            let detail = format!(
                "{whole} is not in {}",
                interval(self.min.map(|v| v.to_string()), self.max.map(|v| v.to_string()))
            );
            return Err(self.reject(path, ValidationErrorKind::Range(detail), value));
        }
        Ok(number.clone())
    }

    fn accepted(&self) -> Vec<String> {
        vec![format!(
            "an int in the interval {}",
            interval(self.min.map(|v| v.to_string()), self.max.map(|v| v.to_string()))
        )]
    }
}

/// Accepts any number of degrees and normalizes it into [-180, 180).
#[derive(Debug, Clone, Copy, Default)]
pub struct AngleValidator;

impl Validator for AngleValidator {
    type Output = Number;

    fn validate(&self, path: &str, value: &Value) -> Result<Number, ValidationError> {
        let Value::Number(number) = value else {
            return Err(self.reject(path, ValidationErrorKind::TypeMismatch, value));
        };
        let Some(degrees) = number.as_f64() else {
            return Err(self.reject(path, ValidationErrorKind::TypeMismatch, value));
        };
        if (-180.0..180.0).contains(&degrees) {
            return Ok(number.clone());
        }
        let wrapped = (degrees + 180.0).rem_euclid(360.0) - 180.0;
        let normalized = if wrapped.fract() == 0.0 && (number.is_i64() || number.is_u64()) {
            // `wrapped` is a whole number in [-180, 180)
            Some(Number::from(wrapped as i64))
        } else {
            Number::from_f64(wrapped)
        };
        normalized.ok_or_else(|| self.reject(path, ValidationErrorKind::TypeMismatch, value))
    }

    fn accepted(&self) -> Vec<String> {
        vec!["an int or float (angles are mapped into [-180, 180))".to_string()]
    }
}

/// Accepts strings. A non-strict validator also accepts numbers and stores
/// their decimal text.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringValidator {
    strict: bool,
    no_blank: bool,
}

impl StringValidator {
    pub const fn strict() -> Self {
        Self {
            strict: true,
            no_blank: false,
        }
    }

    pub const fn lenient() -> Self {
        Self {
            strict: false,
            no_blank: false,
        }
    }

    /// Non-blank strict strings, used for `*src` column references.
    pub const fn src() -> Self {
        Self {
            strict: true,
            no_blank: true,
        }
    }

    pub const fn no_blank(mut self) -> Self {
        self.no_blank = true;
        self
    }
}

impl Validator for StringValidator {
    type Output = String;

    fn validate(&self, path: &str, value: &Value) -> Result<String, ValidationError> {
        let text = match value {
            Value::String(s) => s.clone(),
            Value::Number(n) if !self.strict => n.to_string(),
            _ => return Err(self.reject(path, ValidationErrorKind::TypeMismatch, value)),
        };
        if self.no_blank && text.trim().is_empty() {
            return Err(self.reject(path, ValidationErrorKind::TypeMismatch, value));
        }
        Ok(text)
    }

    fn accepted(&self) -> Vec<String> {
        let base = if self.no_blank {
            "a non-empty string"
        } else {
            "a string"
        };
        if self.strict {
            vec![base.to_string()]
        } else {
            vec![
                base.to_string(),
                "an int or float that will be converted to a string".to_string(),
            ]
        }
    }
}

/// Accepts exactly one of a fixed set of strings.
#[derive(Debug, Clone, Copy)]
pub struct EnumeratedValidator {
    values: &'static [&'static str],
}

impl EnumeratedValidator {
    pub const fn new(values: &'static [&'static str]) -> Self {
        Self { values }
    }
}

impl Validator for EnumeratedValidator {
    type Output = String;

    fn validate(&self, path: &str, value: &Value) -> Result<String, ValidationError> {
        match value {
            Value::String(s) if self.values.contains(&s.as_str()) => Ok(s.clone()),
            Value::String(s) => Err(self.reject(
                path,
                ValidationErrorKind::UnknownEnumValue(s.clone()),
                value,
            )),
            _ => Err(self.reject(path, ValidationErrorKind::TypeMismatch, value)),
        }
    }

    fn accepted(&self) -> Vec<String> {
        let quoted: Vec<String> = self.values.iter().map(|v| format!("'{v}'")).collect();
        vec![format!("one of [{}]", quoted.join(", "))]
    }
}

/// Accepts any array of data values.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataArrayValidator;

impl Validator for DataArrayValidator {
    type Output = Vec<Value>;

    fn validate(&self, path: &str, value: &Value) -> Result<Vec<Value>, ValidationError> {
        match value {
            Value::Array(items) => Ok(items.clone()),
            _ => Err(self.reject(path, ValidationErrorKind::TypeMismatch, value)),
        }
    }

    fn accepted(&self) -> Vec<String> {
        vec!["a list or array of data values".to_string()]
    }
}

/// Accepts an array of exactly `len` free values.
#[derive(Debug, Clone, Copy)]
pub struct InfoArrayValidator {
    len: usize,
}

impl InfoArrayValidator {
    pub const fn new(len: usize) -> Self {
        Self { len }
    }
}

impl Validator for InfoArrayValidator {
    type Output = Vec<Value>;

    fn validate(&self, path: &str, value: &Value) -> Result<Vec<Value>, ValidationError> {
        match value {
            Value::Array(items) if items.len() == self.len => Ok(items.clone()),
            _ => Err(self.reject(path, ValidationErrorKind::TypeMismatch, value)),
        }
    }

    fn accepted(&self) -> Vec<String> {
        vec![format!("a list of exactly {} values", self.len)]
    }
}

/// Accepts anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyValidator;

impl Validator for AnyValidator {
    type Output = Value;

    fn validate(&self, _path: &str, value: &Value) -> Result<Value, ValidationError> {
        Ok(value.clone())
    }

    fn accepted(&self) -> Vec<String> {
        vec!["any value".to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PATH: &str = "parcoords.line.colorbar.attr";

    #[test]
    fn boolean_rejects_numbers() {
        assert!(BooleanValidator.validate(PATH, &json!(false)).is_ok());
        let err = BooleanValidator.validate(PATH, &json!(1)).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::TypeMismatch);
        assert_eq!(err.actual, "number 1");
    }

    #[test]
    fn number_keeps_integer_representation() {
        let n = NumberValidator::unbounded()
            .validate(PATH, &json!(5))
            .unwrap();
        assert_eq!(Value::Number(n), json!(5));
    }

    #[test]
    fn number_rejects_booleans_and_strings() {
        for bad in [json!(true), json!("5")] {
            let err = NumberValidator::unbounded().validate(PATH, &bad).unwrap_err();
            assert_eq!(err.kind, ValidationErrorKind::TypeMismatch);
        }
    }

    #[test]
    fn number_bounds_are_inclusive() {
        let validator = NumberValidator::between(-2.0, 3.0);
        assert!(validator.validate(PATH, &json!(-2)).is_ok());
        assert!(validator.validate(PATH, &json!(3.0)).is_ok());
        let err = validator.validate(PATH, &json!(3.5)).unwrap_err();
        assert_eq!(
            err.kind,
            ValidationErrorKind::Range("3.5 is not in [-2, 3]".to_string())
        );
        assert_eq!(
            err.accepted,
            vec!["an int or float in the interval [-2, 3]".to_string()]
        );
    }

    #[test]
    fn lower_bound_only_reports_open_upper_end() {
        let err = NumberValidator::at_least(0.0)
            .validate(PATH, &json!(-1))
            .unwrap_err();
        assert_eq!(
            err.kind,
            ValidationErrorKind::Range("-1 is not in [0, inf]".to_string())
        );
    }

    #[test]
    fn integer_rejects_floats() {
        let validator = IntegerValidator::at_least(0);
        assert!(validator.validate(PATH, &json!(4)).is_ok());
        let err = validator.validate(PATH, &json!(4.0)).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::TypeMismatch);
        let err = validator.validate(PATH, &json!(-1)).unwrap_err();
        assert!(matches!(err.kind, ValidationErrorKind::Range(_)));
    }

    #[test]
    fn angle_wraps_into_half_open_range() {
        let wrap = |v: Value| Value::Number(AngleValidator.validate(PATH, &v).unwrap());
        assert_eq!(wrap(json!(90)), json!(90));
        assert_eq!(wrap(json!(270)), json!(-90));
        assert_eq!(wrap(json!(180)), json!(-180));
        assert_eq!(wrap(json!(-190.5)), json!(169.5));
    }

    #[test]
    fn lenient_string_converts_numbers() {
        let text = StringValidator::lenient().validate(PATH, &json!(12)).unwrap();
        assert_eq!(text, "12");
        let err = StringValidator::strict()
            .validate(PATH, &json!(12))
            .unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::TypeMismatch);
    }

    #[test]
    fn src_rejects_blank_strings() {
        assert!(StringValidator::src().validate(PATH, &json!("col-a")).is_ok());
        assert!(StringValidator::src().validate(PATH, &json!("  ")).is_err());
    }

    #[test]
    fn enumerated_reports_unknown_value() {
        let validator = EnumeratedValidator::new(&["fraction", "pixels"]);
        assert_eq!(validator.validate(PATH, &json!("pixels")).unwrap(), "pixels");
        let err = validator.validate(PATH, &json!("inches")).unwrap_err();
        assert_eq!(
            err.kind,
            ValidationErrorKind::UnknownEnumValue("inches".to_string())
        );
        assert_eq!(err.accepted, vec!["one of ['fraction', 'pixels']".to_string()]);
        let err = validator.validate(PATH, &json!(3)).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::TypeMismatch);
    }

    #[test]
    fn enumerated_accepts_empty_member() {
        let validator = EnumeratedValidator::new(&["outside", "inside", ""]);
        assert_eq!(validator.validate(PATH, &json!("")).unwrap(), "");
    }

    #[test]
    fn info_array_checks_length() {
        let validator = InfoArrayValidator::new(2);
        assert!(validator.validate(PATH, &json!([null, 1000])).is_ok());
        assert!(validator.validate(PATH, &json!([1])).is_err());
    }

    #[test]
    fn data_array_requires_array() {
        assert_eq!(
            DataArrayValidator.validate(PATH, &json!([1, "a"])).unwrap(),
            vec![json!(1), json!("a")]
        );
        assert!(DataArrayValidator.validate(PATH, &json!("a")).is_err());
    }
}
