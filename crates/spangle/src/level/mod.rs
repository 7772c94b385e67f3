//! Per-level message layout.
//!
//! Each logging level is described by a [`LevelTemplate`]: the console method
//! it prints through, a default title, a prefix icon, a title color and
//! padding around the icon. [`compose`] lays a [`Message`] out on a span tree
//! using one of these descriptors.

mod layout;
mod message;
mod template;

pub use layout::TITLE_SEPARATOR;
pub(crate) use layout::compose;
pub use message::{LogOptions, Message};
pub use template::{Level, LevelOverride, LevelTemplate, Padding, DEFAULT_TITLE_COLOR};
