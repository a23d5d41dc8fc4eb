//! # Validators
//!
//! A validator checks one candidate value for one attribute and returns its
//! normalized form. Validators are small `const`-constructible values; each
//! schema pairs every declared attribute with one of them.
//!
//! Validators never see `null`: absence and `null` both mean "clear the
//! attribute" and are handled by [`validate_optional`] before dispatch.

mod basic;
mod color;
mod colorscale;

pub use basic::{
    AngleValidator, AnyValidator, BooleanValidator, DataArrayValidator, EnumeratedValidator,
    InfoArrayValidator, IntegerValidator, NumberValidator, StringValidator,
};
pub use color::ColorValidator;
pub use colorscale::ColorscaleValidator;

use crate::error::{ValidationError, ValidationErrorKind};
use serde_json::Value;

pub trait Validator {
    type Output;

    /// Check `value` for the attribute at the fully-qualified `path`.
    fn validate(&self, path: &str, value: &Value) -> Result<Self::Output, ValidationError>;

    /// Human-readable list of acceptable forms.
    fn accepted(&self) -> Vec<String>;

    fn reject(&self, path: &str, kind: ValidationErrorKind, value: &Value) -> ValidationError {
        ValidationError::new(path, kind, value, self.accepted())
    }
}

/// Validate an assignment that may clear the attribute.
pub fn validate_optional<V: Validator>(
    validator: &V,
    path: &str,
    value: Option<Value>,
) -> Result<Option<V::Output>, ValidationError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(value) => validator.validate(path, &value).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_and_absent_clear() {
        assert_eq!(
            validate_optional(&BooleanValidator, "line.cauto", None).unwrap(),
            None
        );
        assert_eq!(
            validate_optional(&BooleanValidator, "line.cauto", Some(Value::Null)).unwrap(),
            None
        );
    }

    #[test]
    fn present_values_are_validated() {
        assert_eq!(
            validate_optional(&BooleanValidator, "line.cauto", Some(json!(true))).unwrap(),
            Some(true)
        );
        let err =
            validate_optional(&BooleanValidator, "line.cauto", Some(json!("yes"))).unwrap_err();
        assert_eq!(err.path, "line.cauto");
        assert_eq!(err.kind, ValidationErrorKind::TypeMismatch);
    }
}
