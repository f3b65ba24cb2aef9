//! Browser tests, run with `wasm-pack test --headless --firefox`

#![cfg(target_arch = "wasm32")]

use blockpage_wasm::WebsiteBuilder;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_export_in_browser() {
    let mut builder = WebsiteBuilder::new(false);
    builder.add_element("list").unwrap();
    builder.activate(0).unwrap();
    builder.set_field("item", Some(0), "First").unwrap();
    builder.save().unwrap();

    assert_eq!(
        builder.export_html(false),
        "<ul><li>First</li><li>Item 2</li><li>Item 3</li></ul>"
    );
}

#[wasm_bindgen_test]
fn test_unknown_kind_is_an_error() {
    let mut builder = WebsiteBuilder::new(false);
    assert!(builder.add_element("table").is_err());
}
