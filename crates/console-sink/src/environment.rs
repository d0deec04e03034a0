//! crates/console-sink/src/environment.rs

use std::fmt;
use std::str::FromStr;

use levels::{ParseSurfaceError, Surface};

use crate::sink::{BrowserSink, Sink, TerminalSink};

/// The kind of runtime a logger writes to.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Environment {
    /// A terminal-style host that understands ANSI escape codes.
    #[default]
    Terminal,
    /// A browser-style host whose console applies `%c` CSS directives.
    Browser,
}

impl Environment {
    /// Both environments.
    pub const ALL: [Self; 2] = [Self::Terminal, Self::Browser];

    /// Probes the host runtime.
    ///
    /// On `wasm32-unknown-unknown` the module may run inside a browser or
    /// under Node.js; a global `process.versions.node` selects the terminal
    /// renderer, anything else the browser one. Every other target is a
    /// terminal.
    #[must_use]
    pub fn detect() -> Self {
        #[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
        {
            Self::for_host(node_runtime())
        }
        #[cfg(not(all(target_arch = "wasm32", target_os = "unknown")))]
        {
            Self::Terminal
        }
    }

    /// The environment for a JavaScript host, given whether it is Node.js.
    #[must_use]
    pub const fn for_host(is_node: bool) -> Self {
        if is_node { Self::Terminal } else { Self::Browser }
    }

    /// The style table this environment renders with.
    #[must_use]
    pub const fn surface(self) -> Surface {
        match self {
            Self::Terminal => Surface::Terminal,
            Self::Browser => Surface::Browser,
        }
    }

    /// The rendering path for this environment.
    #[must_use]
    pub fn sink(self) -> &'static dyn Sink {
        match self {
            Self::Terminal => &TerminalSink,
            Self::Browser => &BrowserSink,
        }
    }

    /// Compact encoding for atomic storage.
    #[must_use]
    pub const fn to_u8(self) -> u8 {
        match self {
            Self::Terminal => 0,
            Self::Browser => 1,
        }
    }

    /// Inverse of [`to_u8`](Self::to_u8).
    #[must_use]
    pub const fn from_u8(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Terminal),
            1 => Some(Self::Browser),
            _ => None,
        }
    }

    /// Lowercase name, shared with [`Surface`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.surface().as_str()
    }
}

/// Reports whether `globalThis.process.versions.node` is set.
#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
fn node_runtime() -> bool {
    use js_sys::Reflect;
    use wasm_bindgen::JsValue;

    let lookup = |target: &JsValue, key: &str| {
        if target.is_object() {
            Reflect::get(target, &JsValue::from_str(key)).unwrap_or(JsValue::UNDEFINED)
        } else {
            JsValue::UNDEFINED
        }
    };

    let process = lookup(&js_sys::global().into(), "process");
    let versions = lookup(&process, "versions");
    lookup(&versions, "node").is_truthy()
}

impl From<Surface> for Environment {
    fn from(surface: Surface) -> Self {
        match surface {
            Surface::Terminal => Self::Terminal,
            Surface::Browser => Self::Browser,
        }
    }
}

impl From<Environment> for Surface {
    fn from(environment: Environment) -> Self {
        environment.surface()
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ParseSurfaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Surface>().map(Self::from)
    }
}
