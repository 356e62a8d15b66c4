use std::cell::RefCell;
use std::rc::Rc;
use viewer_core::render::{Background, RenderError, Renderer};
use viewer_core::ViewerContext;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub viewer: ViewerContext,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<Renderer<'static>>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let uniforms = self.viewer.tick();

        let Some(g) = &mut self.gpu else {
            return;
        };
        if !g.has_mesh() {
            if let Some(model) = self.viewer.model() {
                g.upload_model(&model.data);
            }
        }
        g.resize_if_needed(self.canvas.width(), self.canvas.height());
        match g.render(&uniforms) {
            Ok(()) => {}
            Err(RenderError::Surface(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                g.reconfigure()
            }
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    background: Background,
) -> Option<Renderer<'static>> {
    let instance = wgpu::Instance::default();
    let surface = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
        Ok(s) => s,
        Err(e) => {
            log::error!("WebGPU surface error: {:?}", e);
            return None;
        }
    };
    match Renderer::new(
        &instance,
        surface,
        canvas.width(),
        canvas.height(),
        background,
    )
    .await
    {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
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
