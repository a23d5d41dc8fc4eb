//! # Colors
//!
//! Color values as the attribute tree stores them. Parsing only classifies and
//! checks the notation; the original text is kept verbatim so that an exported
//! tree re-imports to exactly the same values.
//!
//! | Form | Example |
//! |------|---------|
//! | hex | `#f00`, `#ff0000`, `#ff000080` |
//! | functional | `rgb(255,0,0)`, `hsla(0,100%,50%,0.5)`, `hsv(0,100%,100%)` |
//! | named | `red`, `Dark Slate Gray` |
//!
//! Numbers are also colors when an attribute is bound to a colorscale; they are
//! carried by [`ColorValue::Scalar`] and [`ColorValue::Scalars`].

pub mod named;
pub mod scale;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Number, Value};
use std::fmt;

pub use named::{is_named_color, NAMED_COLORS};
pub use scale::{canonical_colorscale, ColorStop, Colorscale, NAMED_COLORSCALES};

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$")
        .expect("hex color pattern is valid")
});

static FUNCTIONAL_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(rgb|hsl|hsv)(a?)\(((?:\d+(?:\.\d*)?|\.\d+)%?(?:,(?:\d+(?:\.\d*)?|\.\d+)%?)*)\)$")
        .expect("functional color pattern is valid")
});

/// The notation a color string was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorForm {
    Hex,
    Rgb,
    Rgba,
    Hsl,
    Hsla,
    Hsv,
    Hsva,
    Named,
}

/// Why a string is not a color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Starts with `#` but is not 3, 4, 6 or 8 hex digits.
    MalformedHex,
    /// Looks like `name(...)` but is not a recognized functional form.
    MalformedFunctional,
    /// A bare word outside the named-color set.
    UnknownName(String),
}

/// A validated color string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssColor {
    text: String,
    form: ColorForm,
}

impl CssColor {
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let form = classify(input)?;
        Ok(Self {
            text: input.to_string(),
            form,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn form(&self) -> ColorForm {
        self.form
    }
}

impl fmt::Display for CssColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn classify(input: &str) -> Result<ColorForm, ColorParseError> {
    let trimmed = input.trim();
    if trimmed.starts_with('#') {
        return if HEX_COLOR.is_match(trimmed) {
            Ok(ColorForm::Hex)
        } else {
            Err(ColorParseError::MalformedHex)
        };
    }

    let compact: String = trimmed
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();

    if compact.contains('(') {
        let caps = FUNCTIONAL_COLOR
            .captures(&compact)
            .ok_or(ColorParseError::MalformedFunctional)?;
        let alpha = !caps[2].is_empty();
        let components = caps[3].split(',').count();
        if components != if alpha { 4 } else { 3 } {
            return Err(ColorParseError::MalformedFunctional);
        }
        return Ok(match (&caps[1], alpha) {
            ("rgb", false) => ColorForm::Rgb,
            ("rgb", true) => ColorForm::Rgba,
            ("hsl", false) => ColorForm::Hsl,
            ("hsl", true) => ColorForm::Hsla,
            ("hsv", false) => ColorForm::Hsv,
            _ => ColorForm::Hsva,
        });
    }

    if is_named_color(&compact) {
        Ok(ColorForm::Named)
    } else {
        Err(ColorParseError::UnknownName(input.to_string()))
    }
}

/// The normalized value of a color attribute.
///
/// Arrays are homogeneous by construction: an array of color strings and an
/// array of numbers are distinct variants.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorValue {
    Color(CssColor),
    /// A number to be mapped through the attribute's colorscale.
    Scalar(Number),
    Colors(Vec<CssColor>),
    Scalars(Vec<Number>),
}

impl ColorValue {
    pub fn is_array(&self) -> bool {
        matches!(self, ColorValue::Colors(_) | ColorValue::Scalars(_))
    }

    /// Whether the value is interpreted through a colorscale.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColorValue::Scalar(_) | ColorValue::Scalars(_))
    }
}

impl From<&ColorValue> for Value {
    fn from(value: &ColorValue) -> Self {
        match value {
            ColorValue::Color(color) => Value::String(color.text.clone()),
            ColorValue::Scalar(n) => Value::Number(n.clone()),
            ColorValue::Colors(colors) => colors
                .iter()
                .map(|c| Value::String(c.text.clone()))
                .collect(),
            ColorValue::Scalars(numbers) => numbers.iter().cloned().map(Value::Number).collect(),
        }
    }
}
