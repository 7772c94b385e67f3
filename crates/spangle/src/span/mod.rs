//! The styled span tree.
//!
//! - [`SpanTree`]: An arena of spans with a cursor, plus the scope-stack operations
//! - [`Span`] / [`SpanKind`]: Nodes and their payloads
//! - [`SpanId`]: Stable index of a span within its tree
//!
//! Style scopes are real nesting in the tree. Groups are not: group, group-end
//! and line spans are markers whose meaning comes from their position among
//! their siblings, which keeps rendering a single linear pass.

mod tree;

pub use tree::{Span, SpanId, SpanKind, SpanTree};
