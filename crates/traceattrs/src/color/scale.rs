//! Colorscale values.

use super::CssColor;
use serde_json::{Number, Value};

/// Palette names accepted in place of an explicit stop list.
pub const NAMED_COLORSCALES: &[&str] = &[
    "Greys", "YlGnBu", "Greens", "YlOrRd", "Bluered", "RdBu", "Reds", "Blues", "Picnic",
    "Rainbow", "Portland", "Jet", "Hot", "Blackbody", "Earth", "Electric", "Viridis",
    "Cividis",
];

/// Canonical spelling of a palette name, matched case-insensitively.
pub fn canonical_colorscale(name: &str) -> Option<&'static str> {
    NAMED_COLORSCALES
        .iter()
        .copied()
        .find(|candidate| candidate.eq_ignore_ascii_case(name.trim()))
}

/// One `[position, color]` entry of an explicit colorscale.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorStop {
    /// Normalized position in [0, 1], kept as given (integer or float).
    pub position: Number,
    pub color: CssColor,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Colorscale {
    Named(&'static str),
    /// Stops with non-decreasing positions, starting at 0 and ending at 1.
    Stops(Vec<ColorStop>),
}

impl Colorscale {
    pub fn name(&self) -> Option<&'static str> {
        match self {
            Colorscale::Named(name) => Some(name),
            Colorscale::Stops(_) => None,
        }
    }

    pub fn stops(&self) -> Option<&[ColorStop]> {
        match self {
            Colorscale::Named(_) => None,
            Colorscale::Stops(stops) => Some(stops),
        }
    }
}

impl From<&Colorscale> for Value {
    fn from(scale: &Colorscale) -> Self {
        match scale {
            Colorscale::Named(name) => Value::String((*name).to_string()),
            Colorscale::Stops(stops) => stops
                .iter()
                .map(|stop| {
                    Value::Array(vec![
                        Value::Number(stop.position.clone()),
                        Value::String(stop.color.as_str().to_string()),
                    ])
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_name_ignores_case() {
        assert_eq!(canonical_colorscale("viridis"), Some("Viridis"));
        assert_eq!(canonical_colorscale("YLGNBU"), Some("YlGnBu"));
        assert_eq!(canonical_colorscale("Plasma"), None);
    }

    #[test]
    fn stops_export_as_pairs() {
        let scale = Colorscale::Stops(vec![
            ColorStop {
                position: Number::from(0),
                color: CssColor::parse("green").unwrap(),
            },
            ColorStop {
                position: Number::from(1),
                color: CssColor::parse("red").unwrap(),
            },
        ]);
        assert_eq!(
            Value::from(&scale),
            serde_json::json!([[0, "green"], [1, "red"]])
        );
        assert_eq!(scale.name(), None);
        assert_eq!(scale.stops().map(<[ColorStop]>::len), Some(2));
    }
}
