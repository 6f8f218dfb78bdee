use crate::constants::HIDDEN_CLASS;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Attach one shared click handler to every element carrying `class_name`.
pub fn add_class_click_listener(
    document: &web::Document,
    class_name: &str,
    handler: impl FnMut() + 'static,
) {
    let nodes = document.get_elements_by_class_name(class_name);
    if nodes.length() == 0 {
        return;
    }
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    for i in 0..nodes.length() {
        if let Some(el) = nodes.item(i) {
            _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        }
    }
    closure.forget();
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

#[inline]
pub fn show(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().remove_1(HIDDEN_CLASS);
    }
}

#[inline]
pub fn hide(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
    }
}

#[inline]
pub fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

pub fn set_cursor(canvas: &web::HtmlCanvasElement, css: &str) {
    _ = canvas.style().set_property("cursor", css);
}
