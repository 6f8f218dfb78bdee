use crate::SharedDispatcher;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Escape closes whichever panel is open.
pub fn wire_keyboard(dispatcher: &SharedDispatcher) {
    let dispatcher = dispatcher.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.repeat() || ev.key() != "Escape" {
            return;
        }
        if dispatcher
            .borrow_mut()
            .close_overlay(js_sys::Date::now())
        {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
