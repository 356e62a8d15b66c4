use crate::dom;
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep the camera projection and canvas size in step with the window.
///
/// The projection is recomputed inside the handler so the next animation
/// frame never renders with the old aspect; the GPU surface follows the
/// canvas backing size at the start of that frame.
pub fn wire_window_resize(frame_ctx: Rc<RefCell<FrameContext>>) {
    let closure = Closure::wrap(Box::new(move || {
        let Some(window) = web::window() else {
            return;
        };
        let (w, h) = dom::window_inner_size(&window);
        let mut ctx = frame_ctx.borrow_mut();
        ctx.viewer.on_resize(w, h);
        dom::size_canvas_to_window(&ctx.canvas);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
