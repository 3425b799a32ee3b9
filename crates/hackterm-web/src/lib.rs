//! hackterm browser front end
//!
//! Wires [`hackterm_core::Terminal`] to the page:
//!
//! - **DomConsole**: `#output`, `#cwd`, `#memUsed`, `#memTot`, `#connBadge`
//! - **BrowserClock**: `setTimeout` delays, `getrandom` jitter
//! - **IndexedDbStore**: the `HackStorage` JS bridge over IndexedDB
//!
//! The page loads `js/hack-storage.js` before this module and calls:
//!
//! ```text
//! const term = new WebTerminal();          // or new WebTerminal('{"memory_capacity_mb":1024}')
//! await term.boot();
//! form.onsubmit = async () => { await term.submit(input.value); };
//! input.onkeydown = (e) => { if (e.key === "Tab") input.value = term.complete(input.value) ?? input.value; };
//! ```

mod clock;
mod console;
mod storage;

pub use clock::BrowserClock;
pub use console::DomConsole;
pub use storage::IndexedDbStore;

use hackterm_core::{Terminal, TerminalConfig};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    init_logging();
}

/// Route `tracing` events from the core to the devtools console.
///
/// Safe to call more than once: only the first call installs the subscriber.
pub fn init_logging() {
    #[cfg(feature = "tracing-wasm")]
    {
        if tracing_wasm::try_set_as_global_default().is_ok() {
            log("[hackterm] tracing subscriber installed");
        }
    }
}

/// The terminal exported to JavaScript.
#[wasm_bindgen]
pub struct WebTerminal {
    inner: Terminal<DomConsole, BrowserClock, IndexedDbStore>,
}

#[wasm_bindgen]
impl WebTerminal {
    /// Create a terminal on the default world.
    ///
    /// `config_json` is an optional partial `TerminalConfig` document.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<WebTerminal, JsValue> {
        let config = match config_json.as_deref() {
            Some(text) => TerminalConfig::from_json(text).map_err(|e| JsValue::from_str(&e.to_string()))?,
            None => TerminalConfig::default(),
        };
        let console = DomConsole::from_document()?;
        let inner = Terminal::with_default_world(console, BrowserClock::new(), IndexedDbStore::new(), config)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log("[hackterm] Terminal created");
        Ok(WebTerminal { inner })
    }

    /// Open storage, print the banner and push the initial prompt.
    #[wasm_bindgen]
    pub async fn boot(&mut self) -> Result<JsValue, JsValue> {
        log("[hackterm] Booting...");
        self.inner
            .store()
            .open()
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.inner
            .boot()
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        log("[hackterm] Boot complete");
        Ok(JsValue::TRUE)
    }

    /// Run one input line. Resolves once the command, delays included, is done.
    #[wasm_bindgen]
    pub async fn submit(&mut self, line: String) -> Result<JsValue, JsValue> {
        self.inner.submit(&line).await;
        Ok(JsValue::UNDEFINED)
    }

    /// Completed input line for Tab, or `undefined`.
    #[wasm_bindgen]
    pub fn complete(&self, line: &str) -> Option<String> {
        self.inner.complete(line)
    }

    /// Current prompt text, e.g. `192.168.0.42 wax[ADMIN] => main$`.
    #[wasm_bindgen(getter)]
    pub fn prompt(&self) -> Result<String, JsValue> {
        self.inner
            .session()
            .prompt()
            .map(|p| p.to_string())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
