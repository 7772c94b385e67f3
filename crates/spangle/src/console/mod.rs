//! Host console surface.
//!
//! This module provides what the renderer dispatches into:
//!
//! - [`ConsoleMethod`]: The closed set of host logging methods
//! - [`Arg`] / [`ElementRef`]: Positional arguments for template placeholders
//! - [`ConsoleCall`]: One rendered record (method, template, arguments)
//! - [`Console`]: The trait a host implements to receive records
//!
//! Three hosts are provided: [`RecordingConsole`] keeps calls in memory,
//! `TermConsole` writes styled lines to a terminal, and `WebConsole`
//! (wasm32 only) forwards to the browser's `console` object.

mod arg;
mod method;
mod recording;
#[cfg(not(target_arch = "wasm32"))]
mod term;
#[cfg(target_arch = "wasm32")]
mod web;

pub use arg::{Arg, ElementRef};
pub use method::{ConsoleMethod, ELEMENT_PLACEHOLDER, OBJECT_PLACEHOLDER, STYLE_PLACEHOLDER};
pub use recording::RecordingConsole;
#[cfg(not(target_arch = "wasm32"))]
pub use term::TermConsole;
#[cfg(target_arch = "wasm32")]
pub use web::WebConsole;

use crate::render::{segments, Segment};

/// The console used by [`ConsoleLogger::new`](crate::ConsoleLogger::new).
#[cfg(target_arch = "wasm32")]
pub type DefaultConsole = WebConsole;

/// The console used by [`ConsoleLogger::new`](crate::ConsoleLogger::new).
#[cfg(not(target_arch = "wasm32"))]
pub type DefaultConsole = TermConsole;

/// A host console that accepts template-plus-arguments calls.
pub trait Console {
    /// Invokes `method` with `template` followed by `args`.
    fn call(&mut self, method: ConsoleMethod, template: &str, args: &[Arg]);

    /// Whether the host exposes `method`. Records for unsupported methods
    /// are skipped rather than dispatched.
    fn supports(&self, _method: ConsoleMethod) -> bool {
        true
    }
}

impl<C: Console + ?Sized> Console for &mut C {
    fn call(&mut self, method: ConsoleMethod, template: &str, args: &[Arg]) {
        (**self).call(method, template, args)
    }

    fn supports(&self, method: ConsoleMethod) -> bool {
        (**self).supports(method)
    }
}

impl<C: Console + ?Sized> Console for Box<C> {
    fn call(&mut self, method: ConsoleMethod, template: &str, args: &[Arg]) {
        (**self).call(method, template, args)
    }

    fn supports(&self, method: ConsoleMethod) -> bool {
        (**self).supports(method)
    }
}

/// A single rendered console invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleCall {
    pub method: ConsoleMethod,
    pub template: String,
    pub args: Vec<Arg>,
}

impl ConsoleCall {
    pub fn new(method: ConsoleMethod) -> Self {
        Self {
            method,
            template: String::new(),
            args: Vec::new(),
        }
    }

    /// Returns the style arguments, in order.
    pub fn styles(&self) -> impl Iterator<Item = &str> {
        self.args.iter().filter_map(Arg::as_style)
    }

    /// Renders the call as the host would show it with styling stripped.
    ///
    /// Elements print as markup and objects as compact JSON.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for segment in segments(&self.template, &self.args) {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Style(_) => {}
                Segment::Value { arg, .. } => out.push_str(&arg.to_string()),
                Segment::Trailing(arg) => {
                    out.push(' ');
                    out.push_str(&arg.to_string());
                }
            }
        }
        out
    }
}
