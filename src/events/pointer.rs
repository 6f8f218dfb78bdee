use crate::audio::WebSounds;
use crate::dom;
use crate::input;
use crate::SharedDispatcher;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer_handlers(
    canvas: &web::HtmlCanvasElement,
    dispatcher: &SharedDispatcher,
    unlock: WebSounds,
) {
    wire_pointermove(canvas, dispatcher);
    wire_click(canvas, dispatcher, unlock);
}

fn wire_pointermove(canvas: &web::HtmlCanvasElement, dispatcher: &SharedDispatcher) {
    let canvas_cb = canvas.clone();
    let dispatcher = dispatcher.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &canvas_cb);
        let Ok(mut d) = dispatcher.try_borrow_mut() else {
            return;
        };
        let cursor = d.pointer_moved(pos.x, pos.y);
        dom::set_cursor(&canvas_cb, cursor.css());
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_click(canvas: &web::HtmlCanvasElement, dispatcher: &SharedDispatcher, unlock: WebSounds) {
    let canvas_cb = canvas.clone();
    let dispatcher = dispatcher.clone();
    let first_click = Rc::new(Cell::new(true));
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        // Browsers only let audio start from inside a user gesture.
        if first_click.replace(false) {
            unlock.resume();
        }
        let pos = input::pointer_canvas_px(&ev, &canvas_cb);
        let now = js_sys::Date::now();
        let Ok(mut d) = dispatcher.try_borrow_mut() else {
            log::warn!("[click] dropped, dispatcher busy");
            return;
        };
        if d.clicked(pos.x, pos.y, now).is_some() {
            dom::set_cursor(&canvas_cb, room_core::Cursor::Default.css());
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
