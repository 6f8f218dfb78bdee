#![cfg(target_arch = "wasm32")]
use room_core::{
    InteractionContext, InteractionDispatcher, OverlayPanel, SceneConfig, SceneError, Viewport,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

use audio::WebSounds;
use constants::*;
use overlay::WebOverlays;

pub(crate) type SceneDispatcher = InteractionDispatcher<WebOverlays, WebSounds>;
pub(crate) type SharedDispatcher = Rc<RefCell<SceneDispatcher>>;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn create_canvas(
    document: &web::Document,
    container: &web::Element,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    canvas.set_id(CANVAS_ID);
    _ = canvas.style().set_property("width", "100%");
    _ = canvas.style().set_property("height", "100%");
    _ = canvas.style().set_property("display", "block");
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(canvas)
}

fn wire_overlay_buttons(document: &web::Document, dispatcher: &SharedDispatcher) {
    let d = dispatcher.clone();
    dom::add_class_click_listener(document, CLOSE_BUTTON_CLASS, move || {
        d.borrow_mut().close_overlay(js_sys::Date::now());
    });
    let d = dispatcher.clone();
    dom::add_class_click_listener(document, BACK_BUTTON_CLASS, move || {
        d.borrow_mut().overlays_mut().back_to_selection();
    });
    for (id, panel) in [
        (OPEN_DOCUMENTATION_ID, OverlayPanel::Documentation),
        (OPEN_TEAM_ID, OverlayPanel::Team),
        (OPEN_TOKENOMICS_ID, OverlayPanel::Tokenomics),
    ] {
        let d = dispatcher.clone();
        dom::add_click_listener(document, id, move || {
            d.borrow_mut().overlays_mut().open_document(panel);
        });
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let query = web::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let (config, rejected) = SceneConfig::parse_query(&query);
    console_log::init_with_level(config.log_level).ok();
    for msg in &rejected {
        log::warn!("[config] {}", msg);
    }
    log::info!("room-web starting");

    spawn_local(async move {
        if let Err(e) = init(config).await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init(config: SceneConfig) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let container = document
        .get_element_by_id(SCENE_CONTAINER_ID)
        .ok_or_else(|| SceneError::MissingHostElement(SCENE_CONTAINER_ID.to_string()))?;
    let canvas = create_canvas(&document, &container)?;
    wire_canvas_resize(&canvas);

    let sounds = WebSounds::new(document.clone(), config.muted);
    let overlays = WebOverlays::new(document.clone(), sounds.clone());
    let viewport = Viewport::new(canvas.width() as f32, canvas.height() as f32);
    let ctx = InteractionContext::new(&config, viewport, js_sys::Date::now());
    let dispatcher: SharedDispatcher = Rc::new(RefCell::new(InteractionDispatcher::new(
        ctx,
        overlays,
        sounds.clone(),
    )));

    assets::load_all(&dispatcher, &config);

    events::wire_pointer_handlers(&canvas, &dispatcher, sounds);
    events::wire_keyboard(&dispatcher);
    wire_overlay_buttons(&document, &dispatcher);

    let gpu = frame::init_gpu(&canvas).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        dispatcher, canvas, gpu,
    )));
    frame::start_loop(frame_ctx);
    Ok(())
}
