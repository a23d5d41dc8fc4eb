//! # Attribute Schemas
//!
//! Every attribute container declares its attributes up front. A declaration
//! pairs a name with the kind of value it holds and its documentation:
//!
//! | Kind | Examples | Description |
//! |------|----------|-------------|
//! | `Boolean` | `showscale`, `cauto` | Simple true/false |
//! | `Number` | `cmin`, `colorbar.x` | Int or float, optionally bounded |
//! | `Enumerated` | `colorbar.lenmode` | Closed set of strings |
//! | `Color` | `color`, `colorbar.bgcolor` | Color string, number, or array |
//! | `Colorscale` | `colorscale` | Palette name or stop list |
//! | `Compound` | `colorbar`, `colorbar.tickfont` | Nested container |
//!
//! The declarations are the single source of truth for which keys a container
//! understands. Anything else is forwarded untouched.

mod spec;

pub use spec::{find_spec, AttributeKind, AttributeSpec};
