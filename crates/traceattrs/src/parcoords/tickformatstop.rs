use crate::attributes::{AttributeKind, AttributeSpec};
use crate::config::StyleConfig;
use crate::container::{container_impls, AttributeContainer, ContainerCore};
use crate::error::ValidationError;
use crate::parcoords::getters;
use crate::path::ContainerPath;
use crate::validators::{validate_optional, BooleanValidator, InfoArrayValidator, StringValidator};
use serde_json::Value;

const DTICKRANGE: InfoArrayValidator = InfoArrayValidator::new(2);
const TEXT: StringValidator = StringValidator::strict();

/// A tick format that applies within a range of tick spacings.
#[derive(Debug, Clone, PartialEq)]
pub struct TickFormatStop {
    core: ContainerCore,
    dtickrange: Option<Vec<Value>>,
    enabled: Option<bool>,
    name: Option<String>,
    value: Option<String>,
}

impl TickFormatStop {
    getters!(by_ref dtickrange: Vec<Value>);
    getters!(copy enabled: bool);
    getters!(text name, value);
}

impl AttributeContainer for TickFormatStop {
    const TYPE_NAME: &'static str = "TickFormatStop";

    const ATTRIBUTES: &'static [AttributeSpec] = &[
        AttributeSpec::new(
            "dtickrange",
            AttributeKind::InfoArray,
            "Range [min, max] of tick spacings this format applies to. Either end may be \
             null to leave it open.",
        ),
        AttributeSpec::new(
            "enabled",
            AttributeKind::Boolean,
            "Whether this stop is used. Disabled stops are kept but ignored.",
        ),
        AttributeSpec::new(
            "name",
            AttributeKind::String,
            "Name used to refer to this stop when merging with a template.",
        ),
        AttributeSpec::new(
            "value",
            AttributeKind::String,
            "The tick format applied within `dtickrange`, same syntax as `tickformat`.",
        ),
    ];

    fn default_path() -> ContainerPath {
        ContainerPath::new(["parcoords", "line", "colorbar"], "tickformatstop")
    }

    fn empty(path: ContainerPath) -> Self {
        Self {
            core: ContainerCore::new(path),
            dtickrange: None,
            enabled: None,
            name: None,
            value: None,
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
            "dtickrange" => self.dtickrange.clone().map(Value::Array),
            "enabled" => self.enabled.map(Value::Bool),
            "name" => self.name.clone().map(Value::String),
            "value" => self.value.clone().map(Value::String),
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
            "dtickrange" => self.dtickrange = validate_optional(&DTICKRANGE, &path, value)?,
            "enabled" => self.enabled = validate_optional(&BooleanValidator, &path, value)?,
            "name" => self.name = validate_optional(&TEXT, &path, value)?,
            "value" => self.value = validate_optional(&TEXT, &path, value)?,
            _ => {}
        }
        Ok(())
    }

    fn relocate_children(&mut self) {}
}

container_impls!(TickFormatStop);
