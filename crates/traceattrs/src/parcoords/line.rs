use crate::attributes::{AttributeKind, AttributeSpec};
use crate::color::{ColorValue, Colorscale};
use crate::config::StyleConfig;
use crate::container::{container_impls, optional_child, AttributeContainer, ContainerCore};
use crate::error::{Result, ValidationError};
use crate::parcoords::{getters, ColorBar};
use crate::path::ContainerPath;
use crate::validators::{
    validate_optional, BooleanValidator, ColorValidator, ColorscaleValidator, NumberValidator,
    StringValidator,
};
use serde_json::{Map, Number, Value};

const COLOR: ColorValidator = ColorValidator::single()
    .array_ok()
    .with_colorscale("parcoords.line.colorscale");
const BOUND: NumberValidator = NumberValidator::unbounded();
const SRC: StringValidator = StringValidator::src();

/// Line styling of a parcoords trace.
///
/// `color` is either a fixed color or numbers mapped through `colorscale`,
/// optionally bounded by `cmin`/`cmax`. When the color is numeric a
/// [`ColorBar`] can be shown alongside.
///
/// ```ignore
/// let mut line = Line::blank();
/// line.set_attr("color", json!([1, 2, 3]))?;
/// line.set_attr("colorscale", "Viridis")?;
/// line.set_attr("colorbar", json!({"x": 0.5}))?;
/// assert_eq!(
///     Value::Object(line.to_map()),
///     json!({"color": [1, 2, 3], "colorbar": {"x": 0.5}, "colorscale": "Viridis"})
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    core: ContainerCore,
    autocolorscale: Option<bool>,
    cauto: Option<bool>,
    cmax: Option<Number>,
    cmin: Option<Number>,
    color: Option<ColorValue>,
    colorbar: Option<ColorBar>,
    colorscale: Option<Colorscale>,
    colorsrc: Option<String>,
    reversescale: Option<bool>,
    showscale: Option<bool>,
}

impl Line {
    getters!(copy
        autocolorscale: bool,
        cauto: bool,
        reversescale: bool,
        showscale: bool,
    );
    getters!(by_ref
        cmax: Number,
        cmin: Number,
        color: ColorValue,
        colorbar: ColorBar,
        colorscale: Colorscale,
    );
    getters!(text colorsrc);

    pub fn colorbar_mut(&mut self) -> Option<&mut ColorBar> {
        self.colorbar.as_mut()
    }

    /// Adopt `colorbar`, re-parenting it and everything under it.
    pub fn set_colorbar(&mut self, mut colorbar: ColorBar) {
        colorbar.relocate(self.core.path.child("colorbar"));
        self.colorbar = Some(colorbar);
        self.core.modified = true;
    }
}

impl AttributeContainer for Line {
    const TYPE_NAME: &'static str = "Line";

    const ATTRIBUTES: &'static [AttributeSpec] = &[
        AttributeSpec::new(
            "autocolorscale",
            AttributeKind::Boolean,
            "Only used when `color` is numeric. Whether the colorscale is a default palette \
             chosen from the sign of the color values instead of `colorscale`. Defaults to \
             false so that parcoords falls back to Viridis.",
        ),
        AttributeSpec::new(
            "cauto",
            AttributeKind::Boolean,
            "Only used when `color` is numeric and `cmin`/`cmax` are set. Whether the \
             colorscale spans the range of the color values (true) or `cmin`..`cmax` (false).",
        ),
        AttributeSpec::new(
            "cmax",
            AttributeKind::Number,
            "Only used when `color` is numeric. Upper bound of the color domain. Set \
             together with `cmin`.",
        ),
        AttributeSpec::new(
            "cmin",
            AttributeKind::Number,
            "Only used when `color` is numeric. Lower bound of the color domain. Set \
             together with `cmax`.",
        ),
        AttributeSpec::new(
            "color",
            AttributeKind::Color,
            "Sets the line color: a specific color, or an array of numbers mapped to \
             `colorscale` relative to their min and max, or to `cmin` and `cmax` if set.",
        )
        .array_ok(),
        AttributeSpec::new(
            "colorbar",
            AttributeKind::Compound,
            "The color bar shown for a numeric `color`.",
        ),
        AttributeSpec::new(
            "colorscale",
            AttributeKind::Colorscale,
            "Only used when `color` is numeric. Either a list of [position, color] stops \
             covering 0 and 1, e.g. [[0, 'rgb(0,0,255)'], [1, 'rgb(255,0,0)']], or a \
             palette name: Greys, YlGnBu, Greens, YlOrRd, Bluered, RdBu, Reds, Blues, \
             Picnic, Rainbow, Portland, Jet, Hot, Blackbody, Earth, Electric, Viridis, \
             Cividis.",
        ),
        AttributeSpec::new("colorsrc", AttributeKind::Src, "Source reference for `color`."),
        AttributeSpec::new(
            "reversescale",
            AttributeKind::Boolean,
            "Only used when `color` is numeric. Reverses the color mapping so `cmin` maps \
             to the last color and `cmax` to the first.",
        ),
        AttributeSpec::new(
            "showscale",
            AttributeKind::Boolean,
            "Only used when `color` is numeric. Whether the color bar is displayed.",
        ),
    ];

    fn default_path() -> ContainerPath {
        ContainerPath::new(["parcoords"], "line")
    }

    fn empty(path: ContainerPath) -> Self {
        Self {
            core: ContainerCore::new(path),
            autocolorscale: None,
            cauto: None,
            cmax: None,
            cmin: None,
            color: None,
            colorbar: None,
            colorscale: None,
            colorsrc: None,
            reversescale: None,
            showscale: None,
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
            "autocolorscale" => self.autocolorscale.map(Value::Bool),
            "cauto" => self.cauto.map(Value::Bool),
            "cmax" => self.cmax.clone().map(Value::Number),
            "cmin" => self.cmin.clone().map(Value::Number),
            "color" => self.color.as_ref().map(Value::from),
            "colorbar" => self.colorbar.as_ref().map(|c| Value::Object(c.to_map())),
            "colorscale" => self.colorscale.as_ref().map(Value::from),
            "colorsrc" => self.colorsrc.clone().map(Value::String),
            "reversescale" => self.reversescale.map(Value::Bool),
            "showscale" => self.showscale.map(Value::Bool),
            _ => None,
        }
    }

    fn assign(
        &mut self,
        name: &str,
        value: Option<Value>,
        config: &StyleConfig,
    ) -> std::result::Result<(), ValidationError> {
        let path = self.core.path.attr(name);
        match name {
            "autocolorscale" => {
                self.autocolorscale = validate_optional(&BooleanValidator, &path, value)?
            }
            "cauto" => self.cauto = validate_optional(&BooleanValidator, &path, value)?,
            "cmax" => self.cmax = validate_optional(&BOUND, &path, value)?,
            "cmin" => self.cmin = validate_optional(&BOUND, &path, value)?,
            "color" => self.color = validate_optional(&COLOR, &path, value)?,
            "colorbar" => {
                self.colorbar = optional_child(self.core.path.child("colorbar"), value, config)?
            }
            "colorscale" => {
                self.colorscale = validate_optional(&ColorscaleValidator, &path, value)?
            }
            "colorsrc" => self.colorsrc = validate_optional(&SRC, &path, value)?,
            "reversescale" => {
                self.reversescale = validate_optional(&BooleanValidator, &path, value)?
            }
            "showscale" => self.showscale = validate_optional(&BooleanValidator, &path, value)?,
            _ => {}
        }
        Ok(())
    }

    fn relocate_children(&mut self) {
        let path = self.core.path.child("colorbar");
        if let Some(colorbar) = &mut self.colorbar {
            colorbar.relocate(path);
        }
    }

    fn children_modified(&self) -> bool {
        self.colorbar.as_ref().is_some_and(|colorbar| colorbar.is_modified())
    }

    fn mark_children_clean(&mut self) {
        if let Some(colorbar) = &mut self.colorbar {
            colorbar.mark_clean();
        }
    }

    fn merge_child(&mut self, name: &str, patch: &Map<String, Value>) -> Option<Result<()>> {
        match name {
            "colorbar" => self
                .colorbar
                .as_mut()
                .map(|colorbar| colorbar.update(patch.clone())),
            _ => None,
        }
    }
}

container_impls!(Line);
