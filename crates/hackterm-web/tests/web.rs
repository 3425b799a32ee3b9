//! Browser tests, run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use hackterm_core::{Authority, Clock, Console, MemoryState, Prompt};
use hackterm_web::{init_logging, BrowserClock, DomConsole};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_terminal_elements() {
    let document = web_sys::window().unwrap().document().unwrap();
    let body = document.body().unwrap();
    for id in ["output", "cwd", "memUsed", "memTot", "connBadge"] {
        if document.get_element_by_id(id).is_none() {
            let el = document.create_element("div").unwrap();
            el.set_id(id);
            body.append_child(&el).unwrap();
        }
    }
}

#[wasm_bindgen_test]
fn test_dom_console_writes_lines() {
    mount_terminal_elements();
    let mut console = DomConsole::from_document().unwrap();
    console.clear();

    console.write_line("hello");
    console.write_prompt_line("ls");

    let document = web_sys::window().unwrap().document().unwrap();
    let output = document.get_element_by_id("output").unwrap();
    assert_eq!(output.child_element_count(), 2);
    assert_eq!(output.text_content().unwrap(), "hello> ls");

    console.clear();
    assert_eq!(output.child_element_count(), 0);
}

#[wasm_bindgen_test]
fn test_dom_console_status() {
    mount_terminal_elements();
    let mut console = DomConsole::from_document().unwrap();

    console.update_memory(&MemoryState::new(512));
    console.update_connection(true);
    console.update_prompt(&Prompt {
        label: "192.168.2.1 Bob[GUEST] => home".into(),
        connected: true,
        authority: Authority::Guest,
    });

    let document = web_sys::window().unwrap().document().unwrap();
    let text = |id: &str| document.get_element_by_id(id).unwrap().text_content().unwrap();
    assert_eq!(text("memTot"), "512");
    assert_eq!(text("memUsed"), "0");
    assert_eq!(text("connBadge"), "connected");
    assert_eq!(text("cwd"), "192.168.2.1 Bob[GUEST] => home#");
    let cwd = document.get_element_by_id("cwd").unwrap();
    assert!(cwd.class_list().contains("cwdAuthGuest"));
}

#[wasm_bindgen_test]
async fn test_browser_clock() {
    let clock = BrowserClock::new();
    let before = clock.now_millis();
    clock.delay(10).await;
    assert!(clock.now_millis() >= before);
    assert!(clock.jitter(100) < 100);
    assert_eq!(clock.jitter(0), 0);
}

#[cfg(feature = "tracing-wasm")]
#[wasm_bindgen_test]
fn test_init_logging_is_idempotent() {
    init_logging();
    init_logging();

    assert!(tracing::dispatcher::has_been_set());
    tracing::info!(verb = "ls", "dispatched");
}
