//! # Attribute Containers
//!
//! An attribute container is a named, nested, schema-validated record. Each
//! concrete schema ([`Line`](crate::parcoords::Line),
//! [`ColorBar`](crate::parcoords::ColorBar), ...) is a plain struct with one typed
//! field per declared attribute. This module holds the behavior they share.
//!
//! ## Construction
//!
//! ```text
//! seed (absent | container | mapping | JSON value)  +  overrides
//!          │
//!          ▼
//! for each declared attribute, in declaration order:
//!     take it out of the seed; a non-null override wins;
//!     validate and store (absent clears)
//!          │
//!          ▼
//! leftover seed keys + unmatched overrides ──► forwarded into `extra`
//! ```
//!
//! Copying from an existing container is a structural deep copy; it gives the
//! same result as exporting the source and constructing from the export.
//!
//! ## Mutation
//!
//! All writes go through [`AttributeContainer::set_attr`] (or a typed setter
//! built on it). A write either stores the validator's normalized output or
//! fails and leaves the container untouched. Successful writes mark the
//! container modified.
//!
//! ## Unknown Attributes
//!
//! Keys a schema does not declare are never rejected. They are kept verbatim in
//! the container's `extra` map, exported after the declared attributes, and
//! logged through `tracing`.

use crate::attributes::{find_spec, AttributeSpec};
use crate::config::StyleConfig;
use crate::error::{json_type_name, Result, StyleError, ValidationError, ValidationErrorKind};
use crate::path::ContainerPath;
use serde_json::{Map, Value};
use std::fmt;

/// State every container carries besides its declared attributes.
#[derive(Debug, Clone, Default)]
pub struct ContainerCore {
    pub(crate) path: ContainerPath,
    pub(crate) extra: Map<String, Value>,
    pub(crate) modified: bool,
}

impl ContainerCore {
    pub fn new(path: ContainerPath) -> Self {
        Self {
            path,
            extra: Map::new(),
            modified: false,
        }
    }
}

// The modified flag is bookkeeping for consumers, not part of the value.
impl PartialEq for ContainerCore {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path && self.extra == other.extra
    }
}

/// What a container is constructed from.
#[derive(Debug)]
pub enum Seed<'a, C> {
    Absent,
    /// Deep-copy another container of the same schema.
    Container(&'a C),
    Mapping(Map<String, Value>),
    /// A dynamic value; must be `null` or an object.
    Value(Value),
}

pub trait AttributeContainer: Clone + fmt::Debug + Sized {
    /// Schema name used in diagnostics, e.g. `ColorBar`.
    const TYPE_NAME: &'static str;

    /// Declared attributes in declaration order.
    const ATTRIBUTES: &'static [AttributeSpec];

    /// Where a standalone instance lives in the attribute tree.
    fn default_path() -> ContainerPath;

    /// An empty container at `path`.
    fn empty(path: ContainerPath) -> Self;

    fn core(&self) -> &ContainerCore;

    fn core_mut(&mut self) -> &mut ContainerCore;

    /// Normalized JSON form of a declared attribute, `None` when unset.
    fn declared_value(&self, name: &str) -> Option<Value>;

    /// Validate and store a declared attribute. `None` or `null` clears it.
    ///
    /// Must leave `self` untouched on error.
    fn assign(
        &mut self,
        name: &str,
        value: Option<Value>,
        config: &StyleConfig,
    ) -> std::result::Result<(), ValidationError>;

    /// Re-parent nested containers under this container's current path.
    fn relocate_children(&mut self);

    /// Whether any nested container has unsaved changes.
    fn children_modified(&self) -> bool {
        false
    }

    /// Clear the modified flag of every nested container.
    fn mark_children_clean(&mut self) {}

    /// Merge a mapping into an existing nested container, for [`update`].
    ///
    /// Returns `None` when `name` is not a compound attribute that is
    /// currently set, in which case the patch value is assigned instead.
    ///
    /// [`update`]: AttributeContainer::update
    fn merge_child(&mut self, _name: &str, _patch: &Map<String, Value>) -> Option<Result<()>> {
        None
    }

    fn blank() -> Self {
        Self::empty(Self::default_path())
    }

    fn path(&self) -> &ContainerPath {
        &self.core().path
    }

    fn spec(name: &str) -> Option<&'static AttributeSpec> {
        find_spec(Self::ATTRIBUTES, name)
    }

    fn declares(name: &str) -> bool {
        Self::spec(name).is_some()
    }

    /// Build a container from a seed and overrides.
    fn construct(
        seed: Seed<'_, Self>,
        overrides: Map<String, Value>,
        config: &StyleConfig,
    ) -> Result<Self> {
        let copied = matches!(seed, Seed::Container(_));
        let (mut out, seed_map) = match seed {
            Seed::Absent | Seed::Value(Value::Null) => (Self::blank(), Map::new()),
            Seed::Container(source) => {
                let mut copy = source.clone();
                copy.relocate(Self::default_path());
                (copy, Map::new())
            }
            Seed::Mapping(map) | Seed::Value(Value::Object(map)) => (Self::blank(), map),
            Seed::Value(other) => {
                return Err(StyleError::InvalidArgument {
                    container: Self::TYPE_NAME.to_string(),
                    expected: "a mapping or compatible container",
                    received: json_type_name(&other).to_string(),
                });
            }
        };

        out.populate(seed_map, overrides, copied, config)?;
        Ok(out)
    }

    /// Consume `seed` and `overrides` attribute by attribute, then forward the
    /// leftovers. With `keep_existing`, attributes absent from both are left as
    /// they are instead of being cleared.
    fn populate(
        &mut self,
        mut seed: Map<String, Value>,
        mut overrides: Map<String, Value>,
        keep_existing: bool,
        config: &StyleConfig,
    ) -> std::result::Result<(), ValidationError> {
        for spec in Self::ATTRIBUTES {
            let seeded = seed.shift_remove(spec.name);
            let winner = match overrides.shift_remove(spec.name) {
                Some(value) if !value.is_null() => Some(value),
                _ => seeded,
            };
            if keep_existing && winner.is_none() {
                continue;
            }
            if let Err(err) = self.assign(spec.name, winner, config) {
                if !config.skip_invalid {
                    return Err(err);
                }
                tracing::warn!(attribute = %err.path, error = %err, "skipping invalid value");
            }
        }

        seed.extend(overrides);
        self.forward_unknown(seed, config);
        self.mark_clean();
        Ok(())
    }

    fn from_map(map: Map<String, Value>) -> Result<Self> {
        Self::construct(Seed::Mapping(map), Map::new(), &StyleConfig::default())
    }

    /// Build from a dynamic value, which must be `null` or an object.
    fn from_value(value: Value) -> Result<Self> {
        Self::construct(Seed::Value(value), Map::new(), &StyleConfig::default())
    }

    fn copy_of(source: &Self) -> Self {
        let mut copy = source.clone();
        copy.relocate(Self::default_path());
        copy.mark_clean();
        copy
    }

    /// Current normalized value of `name`; forwarded attributes included.
    fn get_attr(&self, name: &str) -> Option<Value> {
        if Self::declares(name) {
            self.declared_value(name)
        } else {
            self.core().extra.get(name).cloned()
        }
    }

    /// Validate and store `value`. `null` clears. Undeclared names are forwarded.
    fn set_attr(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        if Self::declares(name) {
            self.assign(name, Some(value), &StyleConfig::default())?;
        } else if value.is_null() {
            self.core_mut().extra.shift_remove(name);
        } else {
            let mut single = Map::new();
            single.insert(name.to_string(), value);
            self.forward_unknown(single, &StyleConfig::default());
        }
        self.core_mut().modified = true;
        Ok(())
    }

    fn clear_attr(&mut self, name: &str) -> Result<()> {
        self.set_attr(name, Value::Null)
    }

    /// Apply several changes at once. Mappings given for nested containers
    /// that are already set are merged into them rather than replacing them.
    ///
    /// Either every change is applied or none is.
    fn update(&mut self, patch: Map<String, Value>) -> Result<()> {
        let mut next = self.clone();
        for (name, value) in patch {
            if let Value::Object(inner) = &value {
                if let Some(merged) = next.merge_child(&name, inner) {
                    merged?;
                    next.core_mut().modified = true;
                    continue;
                }
            }
            next.set_attr(&name, value)?;
        }
        *self = next;
        Ok(())
    }

    /// Move this container (and everything under it) to `path`.
    fn relocate(&mut self, path: ContainerPath) {
        tracing::trace!(from = %self.path(), to = %path, "relocating container");
        self.core_mut().path = path;
        self.relocate_children();
    }

    /// Store undeclared keys verbatim. Nulls are dropped.
    fn forward_unknown(&mut self, unknown: Map<String, Value>, config: &StyleConfig) {
        for (name, value) in unknown {
            if value.is_null() {
                continue;
            }
            if config.warn_unknown {
                tracing::warn!(
                    container = %self.path(),
                    attribute = %name,
                    "forwarding unknown attribute"
                );
            } else {
                tracing::debug!(
                    container = %self.path(),
                    attribute = %name,
                    "forwarding unknown attribute"
                );
            }
            self.core_mut().extra.insert(name, value);
        }
    }

    /// Forwarded (undeclared) attributes.
    fn extra(&self) -> &Map<String, Value> {
        &self.core().extra
    }

    /// Whether this container or anything nested under it changed since
    /// construction or the last [`mark_clean`](AttributeContainer::mark_clean).
    fn is_modified(&self) -> bool {
        self.core().modified || self.children_modified()
    }

    fn mark_clean(&mut self) {
        self.core_mut().modified = false;
        self.mark_children_clean();
    }

    /// Sparse export: set attributes in declaration order, then forwarded ones.
    fn to_map(&self) -> Map<String, Value> {
        let mut out = Map::new();
        for spec in Self::ATTRIBUTES {
            if let Some(value) = self.declared_value(spec.name) {
                out.insert(spec.name.to_string(), value);
            }
        }
        for (name, value) in &self.core().extra {
            out.entry(name.clone()).or_insert_with(|| value.clone());
        }
        out
    }

    /// Attribute documentation, one indented paragraph per declared attribute
    /// opening with its kind.
    fn describe() -> String {
        let mut out = String::new();
        for spec in Self::ATTRIBUTES {
            out.push_str(spec.name);
            out.push('\n');
            let text = format!("{} {}", spec.summary(), spec.description);
            for line in wrap(&text, 68) {
                out.push_str("    ");
                out.push_str(&line);
                out.push('\n');
            }
        }
        out
    }
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Build a nested container from a compound attribute's value.
pub(crate) fn seed_child<C: AttributeContainer>(
    path: ContainerPath,
    value: Value,
    config: &StyleConfig,
) -> std::result::Result<C, ValidationError> {
    let Value::Object(map) = value else {
        return Err(ValidationError::new(
            format!("{path}"),
            ValidationErrorKind::TypeMismatch,
            &value,
            compound_forms::<C>(),
        ));
    };
    let mut child = C::empty(path);
    child.populate(map, Map::new(), false, config)?;
    Ok(child)
}

/// [`seed_child`] for an assignment that may clear the attribute.
pub(crate) fn optional_child<C: AttributeContainer>(
    path: ContainerPath,
    value: Option<Value>,
    config: &StyleConfig,
) -> std::result::Result<Option<C>, ValidationError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(value) => seed_child(path, value, config).map(Some),
    }
}

/// [`seed_children`] for an assignment that may clear the attribute.
pub(crate) fn optional_children<C: AttributeContainer>(
    owner: &ContainerPath,
    attr: &str,
    value: Option<Value>,
    config: &StyleConfig,
) -> std::result::Result<Option<Vec<C>>, ValidationError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(value) => seed_children(owner, attr, value, config).map(Some),
    }
}

/// Build the elements of a compound-array attribute.
pub(crate) fn seed_children<C: AttributeContainer>(
    owner: &ContainerPath,
    attr: &str,
    value: Value,
    config: &StyleConfig,
) -> std::result::Result<Vec<C>, ValidationError> {
    let Value::Array(items) = value else {
        let mut forms = vec![format!("a list of {} instances", C::TYPE_NAME)];
        forms.push(format!("a list of mappings of {} attributes", C::TYPE_NAME));
        return Err(ValidationError::new(
            owner.attr(attr),
            ValidationErrorKind::TypeMismatch,
            &value,
            forms,
        ));
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| seed_child(element_path(owner, attr, index), item, config))
        .collect()
}

pub(crate) fn element_path(owner: &ContainerPath, attr: &str, index: usize) -> ContainerPath {
    owner.child(format!("{attr}[{index}]"))
}

pub(crate) fn compound_forms<C: AttributeContainer>() -> Vec<String> {
    vec![
        format!("an instance of {}", C::TYPE_NAME),
        format!("a mapping of {} attributes", C::TYPE_NAME),
    ]
}

/// Export a list of nested containers.
pub(crate) fn export_children<C: AttributeContainer>(children: &[C]) -> Value {
    children
        .iter()
        .map(|child| Value::Object(child.to_map()))
        .collect()
}

/// Serde, `Default` and `TryFrom<Value>` for a schema, all routed through the
/// validated construction path.
macro_rules! container_impls {
    ($ty:ty) => {
        impl Default for $ty {
            fn default() -> Self {
                <$ty as $crate::container::AttributeContainer>::blank()
            }
        }

        impl TryFrom<serde_json::Value> for $ty {
            type Error = $crate::error::StyleError;

            fn try_from(value: serde_json::Value) -> $crate::error::Result<Self> {
                <$ty as $crate::container::AttributeContainer>::from_value(value)
            }
        }

        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                serde::Serialize::serialize(
                    &$crate::container::AttributeContainer::to_map(self),
                    serializer,
                )
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> std::result::Result<Self, D::Error> {
                let map: serde_json::Map<String, serde_json::Value> =
                    serde::Deserialize::deserialize(deserializer)?;
                <$ty as $crate::container::AttributeContainer>::from_map(map)
                    .map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use container_impls;

/// Registry checks shared by the schema tests.
#[cfg(test)]
pub(crate) mod testing {
    use super::AttributeContainer;
    use crate::attributes::AttributeKind;
    use crate::error::{StyleError, ValidationErrorKind};
    use serde_json::{json, Value};

    /// A value every attribute of `kind` accepts and stores unchanged.
    /// Enumerations have no value common to all of them.
    fn sample(kind: AttributeKind) -> Option<Value> {
        Some(match kind {
            AttributeKind::Boolean => json!(true),
            AttributeKind::Number | AttributeKind::Integer => json!(1),
            AttributeKind::Angle => json!(45),
            AttributeKind::String => json!("a"),
            AttributeKind::Enumerated => return None,
            AttributeKind::Color => json!("red"),
            AttributeKind::Colorscale => json!("Viridis"),
            AttributeKind::Src => json!("grid:col1"),
            AttributeKind::DataArray | AttributeKind::InfoArray => json!([1, 2]),
            AttributeKind::Any => json!(5),
            AttributeKind::Compound => json!({}),
            AttributeKind::CompoundArray => json!([{}]),
        })
    }

    /// Every declared attribute reaches a validator matching its declared
    /// kind and array form, and stores what that validator accepts.
    pub(crate) fn assert_registry_dispatches<C: AttributeContainer>() {
        for spec in C::ATTRIBUTES {
            let name = spec.name;
            let mut container = C::blank();

            match sample(spec.kind) {
                Some(value) => {
                    container
                        .set_attr(name, value.clone())
                        .unwrap_or_else(|err| panic!("{name}: {err}"));
                    assert_eq!(container.get_attr(name), Some(value), "{name}");
                    assert!(container.extra().is_empty(), "{name}");
                }
                None => {
                    let err = container.set_attr(name, "not-a-member").unwrap_err();
                    assert!(
                        matches!(
                            err,
                            StyleError::Validation(ref e)
                                if matches!(e.kind, ValidationErrorKind::UnknownEnumValue(_))
                        ),
                        "{name}: {err}"
                    );
                }
            }

            if !matches!(spec.kind, AttributeKind::Any | AttributeKind::Compound) {
                assert!(container.set_attr(name, json!({"k": 1})).is_err(), "{name}");
            }
            if spec.kind == AttributeKind::Color {
                let accepted = container.set_attr(name, json!(["red", "blue"])).is_ok();
                assert_eq!(accepted, spec.array_ok, "{name}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_respects_width() {
        let lines = wrap("Sets the x position of the color bar (in plot fraction).", 20);
        assert!(lines.iter().all(|line| line.len() <= 20));
        assert_eq!(lines.join(" "), "Sets the x position of the color bar (in plot fraction).");
    }

    #[test]
    fn core_equality_ignores_modified_flag() {
        let path = ContainerPath::new(["parcoords"], "line");
        let mut a = ContainerCore::new(path.clone());
        let b = ContainerCore::new(path);
        a.modified = true;
        assert_eq!(a, b);
    }

    #[test]
    fn element_path_indexes_attribute_name() {
        let owner = ContainerPath::new(["parcoords", "line"], "colorbar");
        let path = element_path(&owner, "tickformatstops", 2);
        assert_eq!(
            path.attr("value"),
            "parcoords.line.colorbar.tickformatstops[2].value"
        );
    }
}
