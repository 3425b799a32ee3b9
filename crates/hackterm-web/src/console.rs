//! DOM output.

use hackterm_core::{Authority, Console, MemoryState, Prompt};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

const AUTH_CLASSES: [&str; 3] = ["cwdAuthGuest", "cwdAuthUser", "cwdAuthAdmin"];

/// [`Console`] writing into the terminal page.
pub struct DomConsole {
    document: Document,
    output: Element,
    cwd: Element,
    mem_used: Element,
    mem_total: Element,
    badge: Element,
}

impl DomConsole {
    /// Look up the terminal elements in the current document.
    pub fn from_document() -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let find = |id: &str| {
            document
                .get_element_by_id(id)
                .ok_or_else(|| JsValue::from_str(&format!("missing #{} element", id)))
        };

        Ok(Self {
            output: find("output")?,
            cwd: find("cwd")?,
            mem_used: find("memUsed")?,
            mem_total: find("memTot")?,
            badge: find("connBadge")?,
            document,
        })
    }

    fn append(&self, text: &str, prompt: bool) {
        let Ok(line) = self.document.create_element("div") else {
            return;
        };
        line.set_class_name("line");
        if prompt {
            if let Ok(marker) = self.document.create_element("span") {
                marker.set_class_name("prompt");
                marker.set_text_content(Some("> "));
                let _ = line.append_child(&marker);
            }
            let _ = line.append_child(&self.document.create_text_node(text));
        } else {
            line.set_text_content(Some(text));
        }
        let _ = self.output.append_child(&line);
        self.output.set_scroll_top(self.output.scroll_height());
    }
}

fn auth_class(authority: Authority) -> &'static str {
    match authority {
        Authority::Guest => AUTH_CLASSES[0],
        Authority::User => AUTH_CLASSES[1],
        Authority::Admin => AUTH_CLASSES[2],
    }
}

impl Console for DomConsole {
    fn write_line(&mut self, text: &str) {
        self.append(text, false);
    }

    fn write_prompt_line(&mut self, text: &str) {
        self.append(text, true);
    }

    fn clear(&mut self) {
        self.output.set_inner_html("");
    }

    fn update_prompt(&mut self, prompt: &Prompt) {
        let classes = self.cwd.class_list();
        for class in AUTH_CLASSES {
            let _ = classes.remove_1(class);
        }
        let _ = classes.add_1(auth_class(prompt.authority));
        self.cwd.set_text_content(Some(&prompt.to_string()));
    }

    fn update_memory(&mut self, memory: &MemoryState) {
        self.mem_used.set_text_content(Some(&memory.used().to_string()));
        self.mem_total.set_text_content(Some(&memory.total().to_string()));
    }

    fn update_connection(&mut self, connected: bool) {
        self.badge
            .set_text_content(Some(if connected { "connected" } else { "offline" }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_class() {
        assert_eq!(auth_class(Authority::Admin), "cwdAuthAdmin");
        assert_eq!(auth_class(Authority::Guest), "cwdAuthGuest");
    }
}
