//! Flattening span trees into console calls.
//!
//! - [`render_tree`]: Walks a [`SpanTree`](crate::SpanTree) into dispatchable [`ConsoleCall`](crate::ConsoleCall)s
//! - [`segments`]: Splits a rendered template back into text, style and value pieces,
//!   the way a host console consumes it

mod renderer;
mod template;

pub use renderer::{is_dispatchable, render_records, render_tree};
pub use template::{segments, Segment};
