//! # Parcoords Line Schemas
//!
//! The `line` styling group of a parallel-coordinates trace and the containers
//! nested under it:
//!
//! ```text
//! parcoords.line                          Line
//! └── colorbar                            ColorBar
//!     ├── tickfont                        Font
//!     ├── titlefont                       Font
//!     └── tickformatstops[i]              TickFormatStop
//! ```
//!
//! Each schema is a plain struct with one `Option` field per declared
//! attribute. Dynamic access goes through
//! [`AttributeContainer`](crate::container::AttributeContainer); typed getters
//! return the normalized values directly.

/// Typed getters over `Option` fields.
macro_rules! getters {
    (copy $($name:ident: $ty:ty),* $(,)?) => {
        $(
            pub fn $name(&self) -> Option<$ty> {
                self.$name
            }
        )*
    };
    (by_ref $($name:ident: $ty:ty),* $(,)?) => {
        $(
            pub fn $name(&self) -> Option<&$ty> {
                self.$name.as_ref()
            }
        )*
    };
    (text $($name:ident),* $(,)?) => {
        $(
            pub fn $name(&self) -> Option<&str> {
                self.$name.as_deref()
            }
        )*
    };
}

pub(crate) use getters;

mod colorbar;
mod font;
mod line;
mod tickformatstop;

pub use colorbar::ColorBar;
pub use font::Font;
pub use line::Line;
pub use tickformatstop::TickFormatStop;
