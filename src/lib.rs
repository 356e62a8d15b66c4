#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use viewer_core::render::Background;
use viewer_core::{ViewerConfig, ViewerContext, CONTAINER_ID};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod fetch;
mod frame;

// The canvas is appended to the container exactly once per page.
static STARTED: AtomicBool = AtomicBool::new(false);

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("viewer-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let container = document
        .get_element_by_id(CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CONTAINER_ID))?;

    let variant = dom::container_variant(&container);
    let config = ViewerConfig::for_variant(variant);
    log::info!("[init] variant={:?} model={}", variant, config.model_path);

    let canvas = dom::append_canvas(&document, &container)?;
    dom::size_canvas_to_window(&canvas);
    let (css_w, css_h) = dom::window_inner_size(&window);

    let model_path = config.model_path.clone();
    let material = config.material;
    let background = Background {
        hex: config.background_hex,
        transparent: config.transparent_background,
    };

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        viewer: ViewerContext::new(config, css_w, css_h),
        canvas: canvas.clone(),
        gpu: None,
    }));

    events::wire_window_resize(frame_ctx.clone());
    events::wire_input_handlers(&frame_ctx);

    // Model fetch and GPU setup run independently; the frame loop uploads
    // the mesh once both have finished.
    let load_ctx = frame_ctx.clone();
    spawn_local(async move {
        let outcome = fetch::fetch_model(&model_path, material).await;
        _ = load_ctx.borrow_mut().viewer.finish_load(outcome);
    });

    let gpu_ctx = frame_ctx.clone();
    spawn_local(async move {
        let gpu = frame::init_gpu(&canvas, background).await;
        gpu_ctx.borrow_mut().gpu = gpu;
    });

    frame::start_loop(frame_ctx);
    Ok(())
}
