#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{window, Element, HtmlImageElement, HtmlInputElement};

use foodies_core::{data_url, is_data_url};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    window().expect("window").document().expect("document")
}

#[wasm_bindgen_test]
fn preview_src_is_a_data_url() {
    let img: HtmlImageElement = document()
        .create_element("img")
        .expect("create img")
        .dyn_into()
        .expect("img element");
    let url = data_url(&[0x89, b'P', b'N', b'G'], "image/png");
    img.set_src(&url);
    assert!(img.src().starts_with("data:image/png;base64,"));
    assert!(is_data_url(&img.src()));
}

#[wasm_bindgen_test]
fn feed_fragments_append_in_order() {
    let container: Element = document().create_element("div").expect("create div");
    container
        .insert_adjacent_html("beforeend", "<div class=\"meal\">first</div>")
        .expect("append first");
    container
        .insert_adjacent_html(
            "beforeend",
            "<div class=\"meal\">second</div><div class=\"meal\">third</div>",
        )
        .expect("append rest");
    assert_eq!(container.child_element_count(), 3);
    let last = container.last_element_child().expect("last child");
    assert_eq!(last.text_content().as_deref(), Some("third"));
}

#[wasm_bindgen_test]
fn image_click_delegates_to_hidden_input() {
    let doc = document();
    let input: HtmlInputElement = doc
        .create_element("input")
        .expect("create input")
        .dyn_into()
        .expect("input element");
    input.set_type("file");
    let img: HtmlImageElement = doc
        .create_element("img")
        .expect("create img")
        .dyn_into()
        .expect("img element");

    let clicks = Rc::new(Cell::new(0u32));
    let counter = {
        let clicks = clicks.clone();
        EventListener::new(&input, "click", move |_event| {
            clicks.set(clicks.get() + 1);
        })
    };
    let delegate = {
        let input = input.clone();
        EventListener::new(&img, "click", move |_event| {
            input.click();
        })
    };

    img.click();
    assert_eq!(clicks.get(), 1);

    drop(delegate);
    drop(counter);
}
