use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const PRIMARY_BUTTON: i16 = 0;

pub fn wire_input_handlers(frame_ctx: &Rc<RefCell<FrameContext>>) {
    wire_pointermove(frame_ctx.clone());
    wire_pointerdown(frame_ctx.clone());
    wire_pointerup(frame_ctx.clone());
    wire_wheel(frame_ctx.clone());
}

// Listens on the window so the sample keeps updating while a drag leaves
// the canvas; such positions fall outside [-1, 1] and are kept.
fn wire_pointermove(frame_ctx: Rc<RefCell<FrameContext>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        frame_ctx
            .borrow_mut()
            .viewer
            .on_pointer_move(ev.client_x() as f32, ev.client_y() as f32);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerdown(frame_ctx: Rc<RefCell<FrameContext>>) {
    let canvas = frame_ctx.borrow().canvas.clone();
    let canvas_for_capture = canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if ev.button() != PRIMARY_BUTTON {
            return;
        }
        frame_ctx
            .borrow_mut()
            .viewer
            .on_pointer_down(ev.client_x() as f32, ev.client_y() as f32);
        _ = canvas_for_capture.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(frame_ctx: Rc<RefCell<FrameContext>>) {
    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        frame_ctx.borrow_mut().viewer.on_pointer_up();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        _ = wnd.add_event_listener_with_callback("pointercancel", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_wheel(frame_ctx: Rc<RefCell<FrameContext>>) {
    let canvas = frame_ctx.borrow().canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        frame_ctx.borrow_mut().viewer.on_wheel(ev.delta_y() as f32);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);

    // Non-passive so prevent_default stops the page from scrolling
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = canvas.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}
