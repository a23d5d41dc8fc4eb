//! Container identity within the attribute tree.
//!
//! A container knows its own `name` (the key it lives under in its parent) and
//! its `parent_path` (the names of all ancestors). Nested containers always
//! satisfy `child.parent_path == parent.parent_path + [parent.name]`.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContainerPath {
    parent: Vec<String>,
    name: String,
}

impl ContainerPath {
    pub fn new<I, S>(parent: I, name: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            parent: parent.into_iter().map(Into::into).collect(),
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent_path(&self) -> &[String] {
        &self.parent
    }

    /// All segments including this container's own name.
    pub fn segments(&self) -> Vec<String> {
        let mut segments = self.parent.clone();
        segments.push(self.name.clone());
        segments
    }

    /// The path of a container nested under this one.
    pub fn child(&self, name: impl Into<String>) -> Self {
        Self {
            parent: self.segments(),
            name: name.into(),
        }
    }

    /// Fully-qualified name of one of this container's attributes.
    pub fn attr(&self, attr: &str) -> String {
        format!("{self}.{attr}")
    }
}

impl fmt::Display for ContainerPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.parent {
            write!(f, "{segment}.")?;
        }
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_extends_parent_path_with_parent_name() {
        let line = ContainerPath::new(["parcoords"], "line");
        let colorbar = line.child("colorbar");
        assert_eq!(colorbar.parent_path(), &["parcoords", "line"]);
        assert_eq!(colorbar.name(), "colorbar");
    }

    #[test]
    fn attr_is_fully_qualified() {
        let colorbar = ContainerPath::new(["parcoords", "line"], "colorbar");
        assert_eq!(colorbar.attr("x"), "parcoords.line.colorbar.x");
    }

    #[test]
    fn root_path_displays_name_only() {
        let path = ContainerPath::new(Vec::<String>::new(), "line");
        assert_eq!(path.to_string(), "line");
        assert_eq!(path.attr("color"), "line.color");
    }
}
