//! Style declarations and their CSS rendering.
//!
//! This module provides the styling primitives carried by style spans:
//!
//! - [`StyleValue`]: A declaration value, either a string or a number
//! - [`Declarations`]: An insertion-ordered mapping of CSS property to value
//! - [`to_css`]: Normalizes declarations into a single `property:value;` string
//!
//! Declarations are merged parent-first when a style scope opens, so a span
//! always carries its cumulative style rather than only its own overrides.

mod css;
mod declarations;
mod value;

pub use css::{to_css, to_kebab_case, UNITLESS_PROPERTIES};
pub use declarations::Declarations;
pub use value::StyleValue;
