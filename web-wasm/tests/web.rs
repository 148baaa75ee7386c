//! ブラウザ上のテスト（wasm-pack test --headless --firefox）

#![cfg(target_arch = "wasm32")]

use portfolio_ai_common::{BackendConfig, DEFAULT_BASE_URL};
use portfolio_ai_wasm::api::FetchBackend;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn backend_defaults_without_meta_tag() {
    let backend = FetchBackend::from_document();
    assert_eq!(backend.config().base_url, DEFAULT_BASE_URL);
}

#[wasm_bindgen_test]
fn backend_reads_meta_tag() {
    let document = web_sys::window().unwrap().document().unwrap();
    let meta = document.create_element("meta").unwrap();
    meta.set_attribute("name", "portfolio-ai-backend").unwrap();
    meta.set_attribute("content", "https://eval.example.com/").unwrap();
    document.head().unwrap().append_child(&meta).unwrap();

    let backend = FetchBackend::from_document();
    meta.remove();

    assert_eq!(
        backend.config(),
        &BackendConfig::new("https://eval.example.com").unwrap()
    );
}
