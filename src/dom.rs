use viewer_core::Variant;
use wasm_bindgen::JsCast;
use web_sys as web;

/// CSS pixel size of the window's layout viewport.
pub fn window_inner_size(window: &web::Window) -> (f32, f32) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    (w as f32, h as f32)
}

/// Variant named by the container's `data-variant` attribute.
pub fn container_variant(container: &web::Element) -> Variant {
    match container.get_attribute("data-variant") {
        Some(name) => Variant::from_name(&name).unwrap_or_else(|| {
            log::warn!("[dom] unknown data-variant {:?}, using isometric", name);
            Variant::Isometric
        }),
        None => Variant::Isometric,
    }
}

/// Create the rendering canvas and append it to `container`.
pub fn append_canvas(
    document: &web::Document,
    container: &web::Element,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    _ = canvas.style().set_property("display", "block");
    _ = canvas.style().set_property("touch-action", "none");
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(canvas)
}

/// Size the canvas to the window: CSS size in CSS pixels, backing store in
/// device pixels. Returns the backing size.
pub fn size_canvas_to_window(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let Some(window) = web::window() else {
        return (canvas.width(), canvas.height());
    };
    let dpr = window.device_pixel_ratio();
    let (css_w, css_h) = window_inner_size(&window);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", css_w));
    _ = style.set_property("height", &format!("{}px", css_h));
    let w_px = ((css_w as f64 * dpr) as u32).max(1);
    let h_px = ((css_h as f64 * dpr) as u32).max(1);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    (w_px, h_px)
}
