use crate::dom;
use crate::render::{self, mesh};
use crate::SharedDispatcher;
use instant::Instant;
use room_core::{Completion, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub dispatcher: SharedDispatcher,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub last_instant: Instant,
    cubes: Vec<mesh::Instance>,
    spheres: Vec<mesh::Instance>,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        dispatcher: SharedDispatcher,
        canvas: web::HtmlCanvasElement,
        gpu: Option<render::GpuState<'a>>,
    ) -> Self {
        Self {
            dispatcher,
            canvas,
            gpu,
            last_instant: Instant::now(),
            cubes: Vec::new(),
            spheres: Vec::new(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        let now_ms = js_sys::Date::now();

        let w = self.canvas.width();
        let h = self.canvas.height();
        let (view_proj, eye) = {
            let Ok(mut d) = self.dispatcher.try_borrow_mut() else {
                return;
            };
            d.resize(Viewport::new(w as f32, h as f32));
            if let Some(Completion::Zoomed(_)) = d.frame(now_ms, dt_sec) {
                dom::set_cursor(&self.canvas, d.context().highlight.cursor().css());
            }

            let ctx = d.context();
            self.cubes.clear();
            self.spheres.clear();
            for (_, node) in ctx.scene.iter() {
                let emissive = ctx.highlight.emissive(node.category);
                match mesh::instance_for(node, emissive) {
                    Some((mesh::MeshKind::Cube, inst)) => self.cubes.push(inst),
                    Some((mesh::MeshKind::Sphere, inst)) => self.spheres.push(inst),
                    None => {}
                }
            }
            let camera = ctx.camera_view();
            (camera.view_projection(), camera.eye)
        };

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(w, h);
            g.set_camera(view_proj, eye);
            g.set_instances(&self.cubes, &self.spheres);
            if let Err(e) = g.render() {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

fn request_frame(window: &web::Window, tick: &Closure<dyn FnMut()>) {
    _ = window.request_animation_frame(tick.as_ref().unchecked_ref());
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            request_frame(&w, cb);
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        request_frame(&w, cb);
    }
}
