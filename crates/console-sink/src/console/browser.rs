//! crates/console-sink/src/console/browser.rs
//!
//! Output through the JavaScript `console.log` of the hosting page.

use std::io;

use js_sys::Array;
use values::{Loggable, Number};
use wasm_bindgen::JsValue;

use super::{Console, ConsoleLine};

/// Console forwarding each argument to `console.log` as its own JavaScript value.
///
/// Keeping the arguments separate lets the browser apply `%c` directives in
/// the first argument to the style strings that follow it.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserConsole;

impl BrowserConsole {
    /// Creates the console.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[allow(clippy::cast_precision_loss)]
fn to_js(arg: &Loggable) -> JsValue {
    match arg {
        Loggable::Text(text) => JsValue::from_str(text),
        Loggable::Number(Number::Int(value)) => JsValue::from_f64(*value as f64),
        Loggable::Number(Number::UInt(value)) => JsValue::from_f64(*value as f64),
        Loggable::Number(Number::Float(value)) => JsValue::from_f64(*value),
    }
}

impl Console for BrowserConsole {
    fn write_line(&mut self, line: &ConsoleLine) -> io::Result<()> {
        let args: Array = line.args().iter().map(to_js).collect();
        web_sys::console::log(&args);
        Ok(())
    }
}
