//! The color bar drawn next to a parcoords trace when its line color is
//! mapped through a colorscale.

use crate::attributes::{AttributeKind, AttributeSpec};
use crate::color::ColorValue;
use crate::config::StyleConfig;
use crate::container::{
    container_impls, element_path, export_children, optional_child, optional_children,
    AttributeContainer, ContainerCore,
};
use crate::error::{Result, ValidationError};
use crate::parcoords::{getters, Font, TickFormatStop};
use crate::path::ContainerPath;
use crate::validators::{
    validate_optional, AngleValidator, AnyValidator, BooleanValidator, ColorValidator,
    DataArrayValidator, EnumeratedValidator, IntegerValidator, NumberValidator, StringValidator,
};
use serde_json::{Map, Number, Value};

const COLOR: ColorValidator = ColorValidator::single();
const SIZE: NumberValidator = NumberValidator::at_least(0.0);
const POSITION: NumberValidator = NumberValidator::between(-2.0, 3.0);
const NTICKS: IntegerValidator = IntegerValidator::at_least(0);
const TEXT: StringValidator = StringValidator::strict();
const TITLE: StringValidator = StringValidator::lenient();
const SRC: StringValidator = StringValidator::src();

const EXPONENTFORMAT: EnumeratedValidator =
    EnumeratedValidator::new(&["none", "e", "E", "power", "SI", "B"]);
const SIZING_MODE: EnumeratedValidator = EnumeratedValidator::new(&["fraction", "pixels"]);
const SHOW: EnumeratedValidator = EnumeratedValidator::new(&["all", "first", "last", "none"]);
const TICKMODE: EnumeratedValidator = EnumeratedValidator::new(&["auto", "linear", "array"]);
const TICKS: EnumeratedValidator = EnumeratedValidator::new(&["outside", "inside", ""]);
const TITLESIDE: EnumeratedValidator = EnumeratedValidator::new(&["right", "top", "bottom"]);
const XANCHOR: EnumeratedValidator = EnumeratedValidator::new(&["left", "center", "right"]);
const YANCHOR: EnumeratedValidator = EnumeratedValidator::new(&["top", "middle", "bottom"]);

#[derive(Debug, Clone, PartialEq)]
pub struct ColorBar {
    core: ContainerCore,
    bgcolor: Option<ColorValue>,
    bordercolor: Option<ColorValue>,
    borderwidth: Option<Number>,
    dtick: Option<Value>,
    exponentformat: Option<String>,
    len: Option<Number>,
    lenmode: Option<String>,
    nticks: Option<Number>,
    outlinecolor: Option<ColorValue>,
    outlinewidth: Option<Number>,
    separatethousands: Option<bool>,
    showexponent: Option<String>,
    showticklabels: Option<bool>,
    showtickprefix: Option<String>,
    showticksuffix: Option<String>,
    thickness: Option<Number>,
    thicknessmode: Option<String>,
    tick0: Option<Value>,
    tickangle: Option<Number>,
    tickcolor: Option<ColorValue>,
    tickfont: Option<Font>,
    tickformat: Option<String>,
    tickformatstops: Option<Vec<TickFormatStop>>,
    ticklen: Option<Number>,
    tickmode: Option<String>,
    tickprefix: Option<String>,
    ticks: Option<String>,
    ticksuffix: Option<String>,
    ticktext: Option<Vec<Value>>,
    ticktextsrc: Option<String>,
    tickvals: Option<Vec<Value>>,
    tickvalssrc: Option<String>,
    tickwidth: Option<Number>,
    title: Option<String>,
    titlefont: Option<Font>,
    titleside: Option<String>,
    x: Option<Number>,
    xanchor: Option<String>,
    xpad: Option<Number>,
    y: Option<Number>,
    yanchor: Option<String>,
    ypad: Option<Number>,
}

impl ColorBar {
    getters!(by_ref
        bgcolor: ColorValue,
        bordercolor: ColorValue,
        borderwidth: Number,
        dtick: Value,
        len: Number,
        nticks: Number,
        outlinecolor: ColorValue,
        outlinewidth: Number,
        thickness: Number,
        tick0: Value,
        tickangle: Number,
        tickcolor: ColorValue,
        tickfont: Font,
        ticklen: Number,
        ticktext: Vec<Value>,
        tickvals: Vec<Value>,
        tickwidth: Number,
        titlefont: Font,
        x: Number,
        xpad: Number,
        y: Number,
        ypad: Number,
    );
    getters!(copy separatethousands: bool, showticklabels: bool);
    getters!(text
        exponentformat,
        lenmode,
        showexponent,
        showtickprefix,
        showticksuffix,
        thicknessmode,
        tickformat,
        tickmode,
        tickprefix,
        ticks,
        ticksuffix,
        ticktextsrc,
        tickvalssrc,
        title,
        titleside,
        xanchor,
        yanchor,
    );

    pub fn tickformatstops(&self) -> Option<&[TickFormatStop]> {
        self.tickformatstops.as_deref()
    }

    pub fn tickfont_mut(&mut self) -> Option<&mut Font> {
        self.tickfont.as_mut()
    }

    pub fn titlefont_mut(&mut self) -> Option<&mut Font> {
        self.titlefont.as_mut()
    }

    /// Adopt `font` as the tick label font.
    pub fn set_tickfont(&mut self, mut font: Font) {
        font.relocate(self.core.path.child("tickfont"));
        self.tickfont = Some(font);
        self.core.modified = true;
    }

    /// Adopt `font` as the title font.
    pub fn set_titlefont(&mut self, mut font: Font) {
        font.relocate(self.core.path.child("titlefont"));
        self.titlefont = Some(font);
        self.core.modified = true;
    }

    pub fn set_tickformatstops(&mut self, stops: Vec<TickFormatStop>) {
        self.tickformatstops = Some(stops);
        self.relocate_children();
        self.core.modified = true;
    }
}

impl AttributeContainer for ColorBar {
    const TYPE_NAME: &'static str = "ColorBar";

    const ATTRIBUTES: &'static [AttributeSpec] = &[
        AttributeSpec::new("bgcolor", AttributeKind::Color, "Sets the color of the padded area."),
        AttributeSpec::new("bordercolor", AttributeKind::Color, "Sets the axis line color."),
        AttributeSpec::new(
            "borderwidth",
            AttributeKind::Number,
            "Sets the width (in px) of the border enclosing this color bar.",
        ),
        AttributeSpec::new(
            "dtick",
            AttributeKind::Any,
            "Sets the step in-between ticks on this axis. Use with `tick0`. Must be a \
             positive number, or a special string such as `L<f>`, `D1`, `D2` or `M<n>` for \
             log and date axes.",
        ),
        AttributeSpec::new(
            "exponentformat",
            AttributeKind::Enumerated,
            "Formatting rule for tick exponents. For 1,000,000,000: `none` gives \
             1,000,000,000, `e` gives 1e+9, `E` gives 1E+9, `power` gives 1x10^9, `SI` \
             gives 1G and `B` gives 1B.",
        ),
        AttributeSpec::new(
            "len",
            AttributeKind::Number,
            "Sets the length of the color bar, excluding the padding at both ends.",
        ),
        AttributeSpec::new(
            "lenmode",
            AttributeKind::Enumerated,
            "Whether `len` is measured in plot `fraction` or in `pixels`.",
        ),
        AttributeSpec::new(
            "nticks",
            AttributeKind::Integer,
            "Maximum number of ticks. The actual number is chosen automatically to be at \
             most `nticks`. Only used when `tickmode` is `auto`.",
        ),
        AttributeSpec::new("outlinecolor", AttributeKind::Color, "Sets the axis line color."),
        AttributeSpec::new(
            "outlinewidth",
            AttributeKind::Number,
            "Sets the width (in px) of the axis line.",
        ),
        AttributeSpec::new(
            "separatethousands",
            AttributeKind::Boolean,
            "If true, even 4-digit integers are separated.",
        ),
        AttributeSpec::new(
            "showexponent",
            AttributeKind::Enumerated,
            "Which tick exponents are shown: `all`, only the `first`, only the `last`, \
             or `none`.",
        ),
        AttributeSpec::new(
            "showticklabels",
            AttributeKind::Boolean,
            "Whether tick labels are drawn.",
        ),
        AttributeSpec::new(
            "showtickprefix",
            AttributeKind::Enumerated,
            "Which tick labels carry `tickprefix`: `all`, the `first`, the `last`, or \
             `none`.",
        ),
        AttributeSpec::new(
            "showticksuffix",
            AttributeKind::Enumerated,
            "Same as `showtickprefix` but for tick suffixes.",
        ),
        AttributeSpec::new(
            "thickness",
            AttributeKind::Number,
            "Sets the thickness of the color bar, excluding padding, ticks and labels.",
        ),
        AttributeSpec::new(
            "thicknessmode",
            AttributeKind::Enumerated,
            "Whether `thickness` is measured in plot `fraction` or in `pixels`.",
        ),
        AttributeSpec::new(
            "tick0",
            AttributeKind::Any,
            "Placement of the first tick. Use with `dtick`. On log axes give the log of \
             the starting tick; on date axes give a date string.",
        ),
        AttributeSpec::new(
            "tickangle",
            AttributeKind::Angle,
            "Angle of the tick labels with respect to the horizontal. -90 draws them \
             vertically.",
        ),
        AttributeSpec::new("tickcolor", AttributeKind::Color, "Sets the tick color."),
        AttributeSpec::new(
            "tickfont",
            AttributeKind::Compound,
            "Sets the color bar's tick label font.",
        ),
        AttributeSpec::new(
            "tickformat",
            AttributeKind::String,
            "Tick label formatting rule using the d3 format mini-languages, plus `%{n}f` \
             for fractional seconds with n digits.",
        ),
        AttributeSpec::new(
            "tickformatstops",
            AttributeKind::CompoundArray,
            "Tick formats that apply within given ranges of tick spacing.",
        ),
        AttributeSpec::new("ticklen", AttributeKind::Number, "Sets the tick length (in px)."),
        AttributeSpec::new(
            "tickmode",
            AttributeKind::Enumerated,
            "How ticks are placed: `auto` uses `nticks`, `linear` uses `tick0` and \
             `dtick`, `array` uses `tickvals` and `ticktext`.",
        ),
        AttributeSpec::new("tickprefix", AttributeKind::String, "Sets a tick label prefix."),
        AttributeSpec::new(
            "ticks",
            AttributeKind::Enumerated,
            "Whether ticks are drawn `outside` or `inside` the axis line. An empty string \
             hides them.",
        ),
        AttributeSpec::new("ticksuffix", AttributeKind::String, "Sets a tick label suffix."),
        AttributeSpec::new(
            "ticktext",
            AttributeKind::DataArray,
            "Text displayed at the positions given by `tickvals`. Only used when \
             `tickmode` is `array`.",
        ),
        AttributeSpec::new(
            "ticktextsrc",
            AttributeKind::Src,
            "Source reference for `ticktext`.",
        ),
        AttributeSpec::new(
            "tickvals",
            AttributeKind::DataArray,
            "Values at which ticks appear. Only used when `tickmode` is `array`.",
        ),
        AttributeSpec::new(
            "tickvalssrc",
            AttributeKind::Src,
            "Source reference for `tickvals`.",
        ),
        AttributeSpec::new("tickwidth", AttributeKind::Number, "Sets the tick width (in px)."),
        AttributeSpec::new("title", AttributeKind::String, "Sets the title of the color bar."),
        AttributeSpec::new(
            "titlefont",
            AttributeKind::Compound,
            "Sets this color bar's title font.",
        ),
        AttributeSpec::new(
            "titleside",
            AttributeKind::Enumerated,
            "Location of the title relative to the color bar.",
        ),
        AttributeSpec::new(
            "x",
            AttributeKind::Number,
            "Sets the x position of the color bar (in plot fraction), within [-2, 3].",
        ),
        AttributeSpec::new(
            "xanchor",
            AttributeKind::Enumerated,
            "Binds the `x` position to the `left`, `center` or `right` of the color bar.",
        ),
        AttributeSpec::new(
            "xpad",
            AttributeKind::Number,
            "Sets the padding (in px) along the x direction.",
        ),
        AttributeSpec::new(
            "y",
            AttributeKind::Number,
            "Sets the y position of the color bar (in plot fraction), within [-2, 3].",
        ),
        AttributeSpec::new(
            "yanchor",
            AttributeKind::Enumerated,
            "Binds the `y` position to the `top`, `middle` or `bottom` of the color bar.",
        ),
        AttributeSpec::new(
            "ypad",
            AttributeKind::Number,
            "Sets the padding (in px) along the y direction.",
        ),
    ];

    fn default_path() -> ContainerPath {
        ContainerPath::new(["parcoords", "line"], "colorbar")
    }

    fn empty(path: ContainerPath) -> Self {
        Self {
            core: ContainerCore::new(path),
            bgcolor: None,
            bordercolor: None,
            borderwidth: None,
            dtick: None,
            exponentformat: None,
            len: None,
            lenmode: None,
            nticks: None,
            outlinecolor: None,
            outlinewidth: None,
            separatethousands: None,
            showexponent: None,
            showticklabels: None,
            showtickprefix: None,
            showticksuffix: None,
            thickness: None,
            thicknessmode: None,
            tick0: None,
            tickangle: None,
            tickcolor: None,
            tickfont: None,
            tickformat: None,
            tickformatstops: None,
            ticklen: None,
            tickmode: None,
            tickprefix: None,
            ticks: None,
            ticksuffix: None,
            ticktext: None,
            ticktextsrc: None,
            tickvals: None,
            tickvalssrc: None,
            tickwidth: None,
            title: None,
            titlefont: None,
            titleside: None,
            x: None,
            xanchor: None,
            xpad: None,
            y: None,
            yanchor: None,
            ypad: None,
        }
    }

    fn core(&self) -> &ContainerCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ContainerCore {
        &mut self.core
    }

    fn declared_value(&self, name: &str) -> Option<Value> {
        let color = |c: &Option<ColorValue>| c.as_ref().map(Value::from);
        let number = |n: &Option<Number>| n.clone().map(Value::Number);
        let text = |s: &Option<String>| s.clone().map(Value::String);
        let array = |a: &Option<Vec<Value>>| a.clone().map(Value::Array);

        match name {
            "bgcolor" => color(&self.bgcolor),
            "bordercolor" => color(&self.bordercolor),
            "borderwidth" => number(&self.borderwidth),
            "dtick" => self.dtick.clone(),
            "exponentformat" => text(&self.exponentformat),
            "len" => number(&self.len),
            "lenmode" => text(&self.lenmode),
            "nticks" => number(&self.nticks),
            "outlinecolor" => color(&self.outlinecolor),
            "outlinewidth" => number(&self.outlinewidth),
            "separatethousands" => self.separatethousands.map(Value::Bool),
            "showexponent" => text(&self.showexponent),
            "showticklabels" => self.showticklabels.map(Value::Bool),
            "showtickprefix" => text(&self.showtickprefix),
            "showticksuffix" => text(&self.showticksuffix),
            "thickness" => number(&self.thickness),
            "thicknessmode" => text(&self.thicknessmode),
            "tick0" => self.tick0.clone(),
            "tickangle" => number(&self.tickangle),
            "tickcolor" => color(&self.tickcolor),
            "tickfont" => self.tickfont.as_ref().map(|f| Value::Object(f.to_map())),
            "tickformat" => text(&self.tickformat),
            "tickformatstops" => self.tickformatstops.as_deref().map(export_children),
            "ticklen" => number(&self.ticklen),
            "tickmode" => text(&self.tickmode),
            "tickprefix" => text(&self.tickprefix),
            "ticks" => text(&self.ticks),
            "ticksuffix" => text(&self.ticksuffix),
            "ticktext" => array(&self.ticktext),
            "ticktextsrc" => text(&self.ticktextsrc),
            "tickvals" => array(&self.tickvals),
            "tickvalssrc" => text(&self.tickvalssrc),
            "tickwidth" => number(&self.tickwidth),
            "title" => text(&self.title),
            "titlefont" => self.titlefont.as_ref().map(|f| Value::Object(f.to_map())),
            "titleside" => text(&self.titleside),
            "x" => number(&self.x),
            "xanchor" => text(&self.xanchor),
            "xpad" => number(&self.xpad),
            "y" => number(&self.y),
            "yanchor" => text(&self.yanchor),
            "ypad" => number(&self.ypad),
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
            "bgcolor" => self.bgcolor = validate_optional(&COLOR, &path, value)?,
            "bordercolor" => self.bordercolor = validate_optional(&COLOR, &path, value)?,
            "borderwidth" => self.borderwidth = validate_optional(&SIZE, &path, value)?,
            "dtick" => self.dtick = validate_optional(&AnyValidator, &path, value)?,
            "exponentformat" => {
                self.exponentformat = validate_optional(&EXPONENTFORMAT, &path, value)?
            }
            "len" => self.len = validate_optional(&SIZE, &path, value)?,
            "lenmode" => self.lenmode = validate_optional(&SIZING_MODE, &path, value)?,
            "nticks" => self.nticks = validate_optional(&NTICKS, &path, value)?,
            "outlinecolor" => self.outlinecolor = validate_optional(&COLOR, &path, value)?,
            "outlinewidth" => self.outlinewidth = validate_optional(&SIZE, &path, value)?,
            "separatethousands" => {
                self.separatethousands = validate_optional(&BooleanValidator, &path, value)?
            }
            "showexponent" => self.showexponent = validate_optional(&SHOW, &path, value)?,
            "showticklabels" => {
                self.showticklabels = validate_optional(&BooleanValidator, &path, value)?
            }
            "showtickprefix" => self.showtickprefix = validate_optional(&SHOW, &path, value)?,
            "showticksuffix" => self.showticksuffix = validate_optional(&SHOW, &path, value)?,
            "thickness" => self.thickness = validate_optional(&SIZE, &path, value)?,
            "thicknessmode" => {
                self.thicknessmode = validate_optional(&SIZING_MODE, &path, value)?
            }
            "tick0" => self.tick0 = validate_optional(&AnyValidator, &path, value)?,
            "tickangle" => self.tickangle = validate_optional(&AngleValidator, &path, value)?,
            "tickcolor" => self.tickcolor = validate_optional(&COLOR, &path, value)?,
            "tickfont" => {
                self.tickfont = optional_child(self.core.path.child("tickfont"), value, config)?
            }
            "tickformat" => self.tickformat = validate_optional(&TEXT, &path, value)?,
            "tickformatstops" => {
                self.tickformatstops =
                    optional_children(&self.core.path, "tickformatstops", value, config)?
            }
            "ticklen" => self.ticklen = validate_optional(&SIZE, &path, value)?,
            "tickmode" => self.tickmode = validate_optional(&TICKMODE, &path, value)?,
            "tickprefix" => self.tickprefix = validate_optional(&TEXT, &path, value)?,
            "ticks" => self.ticks = validate_optional(&TICKS, &path, value)?,
            "ticksuffix" => self.ticksuffix = validate_optional(&TEXT, &path, value)?,
            "ticktext" => self.ticktext = validate_optional(&DataArrayValidator, &path, value)?,
            "ticktextsrc" => self.ticktextsrc = validate_optional(&SRC, &path, value)?,
            "tickvals" => self.tickvals = validate_optional(&DataArrayValidator, &path, value)?,
            "tickvalssrc" => self.tickvalssrc = validate_optional(&SRC, &path, value)?,
            "tickwidth" => self.tickwidth = validate_optional(&SIZE, &path, value)?,
            "title" => self.title = validate_optional(&TITLE, &path, value)?,
            "titlefont" => {
                self.titlefont = optional_child(self.core.path.child("titlefont"), value, config)?
            }
            "titleside" => self.titleside = validate_optional(&TITLESIDE, &path, value)?,
            "x" => self.x = validate_optional(&POSITION, &path, value)?,
            "xanchor" => self.xanchor = validate_optional(&XANCHOR, &path, value)?,
            "xpad" => self.xpad = validate_optional(&SIZE, &path, value)?,
            "y" => self.y = validate_optional(&POSITION, &path, value)?,
            "yanchor" => self.yanchor = validate_optional(&YANCHOR, &path, value)?,
            "ypad" => self.ypad = validate_optional(&SIZE, &path, value)?,
            _ => {}
        }
        Ok(())
    }

    fn relocate_children(&mut self) {
        let path = self.core.path.clone();
        if let Some(font) = &mut self.tickfont {
            font.relocate(path.child("tickfont"));
        }
        if let Some(font) = &mut self.titlefont {
            font.relocate(path.child("titlefont"));
        }
        if let Some(stops) = &mut self.tickformatstops {
            for (index, stop) in stops.iter_mut().enumerate() {
                stop.relocate(element_path(&path, "tickformatstops", index));
            }
        }
    }

    fn children_modified(&self) -> bool {
        let font_modified = |font: &Option<Font>| font.as_ref().is_some_and(Font::is_modified);
        font_modified(&self.tickfont)
            || font_modified(&self.titlefont)
            || self
                .tickformatstops
                .iter()
                .flatten()
                .any(TickFormatStop::is_modified)
    }

    fn mark_children_clean(&mut self) {
        for font in [&mut self.tickfont, &mut self.titlefont].into_iter().flatten() {
            font.mark_clean();
        }
        for stop in self.tickformatstops.iter_mut().flatten() {
            stop.mark_clean();
        }
    }

    fn merge_child(&mut self, name: &str, patch: &Map<String, Value>) -> Option<Result<()>> {
        match name {
            "tickfont" => self.tickfont.as_mut().map(|font| font.update(patch.clone())),
            "titlefont" => self.titlefont.as_mut().map(|font| font.update(patch.clone())),
            _ => None,
        }
    }
}

container_impls!(ColorBar);
