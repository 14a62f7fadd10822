use crate::lifecycle::release_slot;
use crate::render::CanvasRenderer;
use crate::scroll;
use instant::Instant;
use rig_core::ScrollRig;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub rig: Rc<RefCell<ScrollRig>>,
    pub window: web::Window,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub renderer: CanvasRenderer,
    pub last_instant: Instant,
    pub mounted: bool,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let raw = scroll::raw_scroll_offset(&self.window, &self.document);
        let scene = {
            let mut rig = self.rig.borrow_mut();
            if !self.mounted {
                // page may load mid-scroll; start there instead of flying in from the top
                rig.reset(raw);
                self.mounted = true;
            }
            *rig.update(raw, dt_sec)
        };
        self.renderer
            .draw(&scene, self.canvas.width(), self.canvas.height());
    }
}

/// Drive `frame_ctx` from requestAnimationFrame until `running` is cleared.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>, running: Rc<Cell<bool>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running.get() {
            log::info!("[frame] loop stopped");
            release_after_return(&tick_clone);
            return;
        }
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

// Free the closure (and the FrameContext it owns) once the current tick returns.
fn release_after_return(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let release = Closure::once_into_js(release_slot(tick));
    if let Some(w) = web::window() {
        _ = w.set_timeout_with_callback(release.unchecked_ref());
    }
}
