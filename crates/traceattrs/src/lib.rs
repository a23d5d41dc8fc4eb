//! # Traceattrs Architecture
//!
//! Traceattrs models the `line` styling group of a parallel-coordinates trace as
//! a tree of **schema-validated attribute containers**. Every value that enters
//! a container goes through a validator first; what is stored is always the
//! validator's normalized output.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Schemas (parcoords/)                                       │
//! │  - Line, ColorBar, Font, TickFormatStop                     │
//! │  - One typed field per attribute, static declaration list   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Container behavior (container.rs)                          │
//! │  - Construction from seeds and overrides                    │
//! │  - get/set/update, forwarding of unknown keys, export       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Validators (validators/, color/)                           │
//! │  - Pure functions from a JSON value to a normalized value   │
//! │  - Errors carry the attribute path and the accepted forms   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principles
//!
//! - **Atomic writes**: a failed assignment leaves the container exactly as it
//!   was. `update` extends this to a whole patch.
//! - **Unknown keys are forwarded**: attributes a schema does not declare are
//!   kept in `extra` and exported verbatim, never rejected.
//! - **Sparse export**: attributes that were never set do not appear in
//!   [`to_map`](container::AttributeContainer::to_map).
//! - **Paths are structural**: a nested container's parent path is always its
//!   parent's parent path plus the parent's name, including after adoption.
//!
//! ## Example
//!
//! ```ignore
//! use traceattrs::{AttributeContainer, Line};
//! use serde_json::json;
//!
//! let mut line = Line::blank();
//! line.set_attr("color", json!([0.1, 0.5, 0.9]))?;
//! line.set_attr("colorscale", "Viridis")?;
//! line.set_attr("colorbar", json!({"x": 0.5}))?;
//!
//! let err = line.set_attr("color", json!(["red", 3])).unwrap_err();
//! println!("{err}");
//! ```
//!
//! ## Logging
//!
//! The crate emits `tracing` events and never installs a subscriber.
//! Forwarded unknown attributes log at `debug` (or `warn`, see
//! [`StyleConfig::warn_unknown`]); values dropped under
//! [`StyleConfig::skip_invalid`] log at `warn`.

pub mod attributes;
pub mod color;
pub mod config;
pub mod container;
pub mod error;
pub mod parcoords;
pub mod path;
pub mod validators;

pub use color::{ColorValue, Colorscale, CssColor};
pub use config::StyleConfig;
pub use container::{AttributeContainer, Seed};
pub use error::{Endpoint, Result, StyleError, ValidationError, ValidationErrorKind};
pub use parcoords::{ColorBar, Font, Line, TickFormatStop};
pub use path::ContainerPath;
