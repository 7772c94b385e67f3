//! Browser console host.

use js_sys::{Array, JSON};
use wasm_bindgen::JsValue;

use super::{Arg, Console, ConsoleMethod};

/// A console that forwards records to the browser's `console` object.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebConsole;

impl WebConsole {
    pub fn new() -> Self {
        Self
    }
}

fn to_js(arg: &Arg) -> JsValue {
    match arg {
        Arg::Style(css) => JsValue::from_str(css),
        Arg::Element(element) => JsValue::from(element.element().clone()),
        Arg::Object(value) => {
            JSON::parse(&value.to_string()).unwrap_or_else(|_| JsValue::from_str(&value.to_string()))
        }
    }
}

impl Console for WebConsole {
    fn call(&mut self, method: ConsoleMethod, template: &str, args: &[Arg]) {
        let data = Array::new();
        data.push(&JsValue::from_str(template));
        for arg in args {
            data.push(&to_js(arg));
        }

        match method {
            ConsoleMethod::Log => web_sys::console::log(&data),
            ConsoleMethod::Info => web_sys::console::info(&data),
            ConsoleMethod::Debug => web_sys::console::debug(&data),
            ConsoleMethod::Warn => web_sys::console::warn(&data),
            ConsoleMethod::Error => web_sys::console::error(&data),
            ConsoleMethod::Group => web_sys::console::group(&data),
            ConsoleMethod::GroupCollapsed => web_sys::console::group_collapsed(&data),
            ConsoleMethod::GroupEnd => web_sys::console::group_end(),
        }
    }
}
