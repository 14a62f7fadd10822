#![cfg(target_arch = "wasm32")]
use anyhow::anyhow;
use instant::Instant;
use rig_core::{ListenerGuard, ProgressHandler, ScrollRig, SECTIONS};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod frame;
mod layout;
mod lifecycle;
mod overlay;
mod render;
mod scroll;

thread_local! {
    // Rig shared with the JS-facing exports; set once by `init`.
    static RIG: RefCell<Option<Rc<RefCell<ScrollRig>>>> = const { RefCell::new(None) };
    // Last published progress; readable even while the rig is mid-update.
    static PUBLISHED: RefCell<Option<Rc<Cell<f32>>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("rig-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let (window, document) = dom::window_document().ok_or_else(|| anyhow!("no window"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!(format!("{:?}", e)))?;
    dom::wire_canvas_resize(&window, &canvas);

    let renderer = render::CanvasRenderer::new(&canvas)?;
    let rig = Rc::new(RefCell::new(ScrollRig::default()));
    RIG.with(|slot| *slot.borrow_mut() = Some(rig.clone()));
    let published = rig.borrow().last_published();
    PUBLISHED.with(|slot| *slot.borrow_mut() = Some(published));

    let guard = match overlay::DomOverlay::mount(&document, &SECTIONS) {
        Ok(mut overlay) => Some(ListenerGuard::attach(
            &rig,
            Box::new(move |v| overlay.on_progress(v)),
        )),
        Err(e) => {
            log::warn!("overlay disabled: {:?}", e);
            None
        }
    };

    let running = Rc::new(Cell::new(true));
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        rig: rig.clone(),
        window: window.clone(),
        document,
        canvas,
        renderer,
        last_instant: Instant::now(),
        mounted: false,
    }));
    frame::start_loop(frame_ctx, running.clone());

    dom::on_pagehide(&window, move || {
        log::info!("rig-web tearing down");
        running.set(false);
        drop(guard);
        RIG.with(|slot| slot.borrow_mut().take());
        PUBLISHED.with(|slot| slot.borrow_mut().take());
    });
    Ok(())
}

/// Replace the progress listener with a JS function, or detach it with `undefined`.
///
/// Exceptions thrown by `handler` are logged; the frame loop keeps running.
#[wasm_bindgen]
pub fn set_progress_listener(handler: Option<js_sys::Function>) -> Result<(), JsValue> {
    let rig = RIG
        .with(|slot| slot.borrow().clone())
        .ok_or_else(|| JsValue::from_str("journey not started"))?;
    let mut rig = rig
        .try_borrow_mut()
        .map_err(|_| JsValue::from_str("cannot change listener from inside a progress callback"))?;
    let handler = handler.map(|f| -> ProgressHandler {
        Box::new(move |v| {
            if let Err(e) = f.call1(&JsValue::NULL, &JsValue::from_f64(v as f64)) {
                log::warn!("progress listener threw: {:?}", e);
            }
        })
    });
    rig.register(handler);
    Ok(())
}

/// Smoothed progress as published to listeners, in [0, 0.9999].
#[wasm_bindgen]
pub fn journey_progress() -> f32 {
    PUBLISHED.with(|slot| slot.borrow().as_ref().map(|c| c.get()).unwrap_or(0.0))
}
