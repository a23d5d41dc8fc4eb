//! Attribute specifications.
//!
//! Each schema declares its attributes as a static slice of [`AttributeSpec`],
//! in declaration order. The order drives construction (attributes are consumed
//! from the seed one by one) and export (keys come out in this order).

/// The kind of value an attribute holds.
///
/// This mirrors the validator paired with the attribute and is what
/// [`describe`](crate::container::AttributeContainer::describe) reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    /// `true` / `false`
    Boolean,

    /// Any number, possibly bounded
    Number,

    /// Whole numbers, possibly bounded
    Integer,

    /// Degrees, normalized into [-180, 180)
    Angle,

    /// Free text
    String,

    /// One of a closed set of strings (e.g. `lenmode`)
    Enumerated,

    /// A color, or an array of colors when array-capable
    Color,

    /// A named palette or a list of `[position, color]` stops
    Colorscale,

    /// Reference to a data source column (the `*src` attributes)
    Src,

    /// An arbitrary array of data values
    DataArray,

    /// A fixed-length array of free values
    InfoArray,

    /// Any non-null value
    Any,

    /// A nested attribute container
    Compound,

    /// An array of nested attribute containers
    CompoundArray,
}

impl AttributeKind {
    /// How the kind reads in attribute documentation.
    pub const fn noun(&self) -> &'static str {
        match self {
            AttributeKind::Boolean => "a boolean",
            AttributeKind::Number => "a number",
            AttributeKind::Integer => "an integer",
            AttributeKind::Angle => "an angle",
            AttributeKind::String => "a string",
            AttributeKind::Enumerated => "an enumeration value",
            AttributeKind::Color => "a color",
            AttributeKind::Colorscale => "a colorscale",
            AttributeKind::Src => "a data source reference",
            AttributeKind::DataArray => "a data array",
            AttributeKind::InfoArray => "an info array",
            AttributeKind::Any => "any value",
            AttributeKind::Compound => "a nested container",
            AttributeKind::CompoundArray => "a list of nested containers",
        }
    }
}

/// Specification for a single attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSpec {
    /// The attribute name used as the mapping key (e.g. "colorscale")
    pub name: &'static str,

    /// The kind of value this attribute holds
    pub kind: AttributeKind,

    /// Whether the attribute also accepts an array of its element kind
    pub array_ok: bool,

    /// One-paragraph documentation
    pub description: &'static str,
}

impl AttributeSpec {
    pub const fn new(name: &'static str, kind: AttributeKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            array_ok: false,
            description,
        }
    }

    /// Set the array_ok flag.
    pub const fn array_ok(mut self) -> Self {
        self.array_ok = true;
        self
    }

    /// Whether the attribute holds nested containers.
    pub const fn is_compound(&self) -> bool {
        matches!(
            self.kind,
            AttributeKind::Compound | AttributeKind::CompoundArray
        )
    }
}

impl AttributeSpec {
    /// One-line summary of the accepted value, e.g.
    /// `The 'color' property is a color, or an array of them.`
    pub fn summary(&self) -> String {
        let array = if self.array_ok { ", or an array of them" } else { "" };
        format!("The '{}' property is {}{}.", self.name, self.kind.noun(), array)
    }
}

/// Look up an attribute spec by name in a registry.
pub fn find_spec<'a>(registry: &'a [AttributeSpec], name: &str) -> Option<&'a AttributeSpec> {
    registry.iter().find(|spec| spec.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const REGISTRY: &[AttributeSpec] = &[
        AttributeSpec::new("showscale", AttributeKind::Boolean, "Show the bar."),
        AttributeSpec::new("color", AttributeKind::Color, "Line color.").array_ok(),
        AttributeSpec::new("colorbar", AttributeKind::Compound, "Nested bar."),
    ];

    #[test]
    fn find_spec_returns_declared_entry() {
        let spec = find_spec(REGISTRY, "color").unwrap();
        assert_eq!(spec.kind, AttributeKind::Color);
        assert!(spec.array_ok);
    }

    #[test]
    fn unknown_attribute_returns_none() {
        assert!(find_spec(REGISTRY, "nonexistent").is_none());
    }

    #[test]
    fn new_spec_defaults_to_scalar() {
        let spec = find_spec(REGISTRY, "showscale").unwrap();
        assert!(!spec.array_ok);
        assert!(!spec.is_compound());
    }

    #[test]
    fn summary_names_kind_and_array_form() {
        let color = find_spec(REGISTRY, "color").unwrap();
        assert_eq!(
            color.summary(),
            "The 'color' property is a color, or an array of them."
        );
        let showscale = find_spec(REGISTRY, "showscale").unwrap();
        assert_eq!(showscale.summary(), "The 'showscale' property is a boolean.");
    }

    #[test]
    fn compound_kinds_are_flagged() {
        assert!(find_spec(REGISTRY, "colorbar").unwrap().is_compound());
        assert!(AttributeSpec::new("stops", AttributeKind::CompoundArray, "").is_compound());
    }
}
