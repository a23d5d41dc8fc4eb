use crate::attributes::{AttributeKind, AttributeSpec};
use crate::color::ColorValue;
use crate::config::StyleConfig;
use crate::container::{container_impls, AttributeContainer, ContainerCore};
use crate::error::ValidationError;
use crate::parcoords::getters;
use crate::path::ContainerPath;
use crate::validators::{validate_optional, ColorValidator, NumberValidator, StringValidator};
use serde_json::{Number, Value};

const COLOR: ColorValidator = ColorValidator::single();
const FAMILY: StringValidator = StringValidator::strict().no_blank();
const SIZE: NumberValidator = NumberValidator::at_least(1.0);

/// A font used by the color bar for tick labels or its title.
///
/// The same schema serves both `tickfont` and `titlefont`; only its name in
/// the tree differs.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    core: ContainerCore,
    color: Option<ColorValue>,
    family: Option<String>,
    size: Option<Number>,
}

impl Font {
    getters!(by_ref color: ColorValue, size: Number);
    getters!(text family);
}

impl AttributeContainer for Font {
    const TYPE_NAME: &'static str = "Font";

    const ATTRIBUTES: &'static [AttributeSpec] = &[
        AttributeSpec::new("color", AttributeKind::Color, "Sets the font color."),
        AttributeSpec::new(
            "family",
            AttributeKind::String,
            "HTML font family, the typeface applied by the web browser. The browser only \
             applies a font if it is available on the system it runs on. Provide several \
             comma-separated families to fall back in order of preference.",
        ),
        AttributeSpec::new("size", AttributeKind::Number, "Sets the font size, at least 1."),
    ];

    fn default_path() -> ContainerPath {
        ContainerPath::new(["parcoords", "line", "colorbar"], "tickfont")
    }

    fn empty(path: ContainerPath) -> Self {
        Self {
            core: ContainerCore::new(path),
            color: None,
            family: None,
            size: None,
        }
    }

    fn core(&self) -> &ContainerCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ContainerCore {
        &mut self.core
    }

    fn declared_value(&self, name: &str) -> Option<Value> {
        match name {
            "color" => self.color.as_ref().map(Value::from),
            "family" => self.family.clone().map(Value::String),
            "size" => self.size.clone().map(Value::Number),
            _ => None,
        }
    }

    fn assign(
        &mut self,
        name: &str,
        value: Option<Value>,
        _config: &StyleConfig,
    ) -> Result<(), ValidationError> {
        let path = self.core.path.attr(name);
        match name {
            "color" => self.color = validate_optional(&COLOR, &path, value)?,
            "family" => self.family = validate_optional(&FAMILY, &path, value)?,
            "size" => self.size = validate_optional(&SIZE, &path, value)?,
            _ => {}
        }
        Ok(())
    }

    fn relocate_children(&mut self) {}
}

container_impls!(Font);
