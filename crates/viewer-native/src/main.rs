use std::sync::mpsc;
use std::thread;
use viewer_core::render::{Background, RenderError, Renderer};
use viewer_core::{
    decode_glb, LoadOutcome, MaterialOverride, Variant, ViewerConfig, ViewerContext,
};
use winit::{
    event::{ElementState, Event, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

// Wheel "lines" reported by mice are scaled to DOM-like pixel deltas
const LINE_DELTA_PX: f32 = 100.0;

/// Read and decode the model on a worker thread; the outcome arrives on the
/// returned channel exactly once.
fn spawn_model_load(path: String, material: MaterialOverride) -> mpsc::Receiver<LoadOutcome> {
    let (tx, rx) = mpsc::channel();
    let spawned = thread::Builder::new()
        .name("model-load".into())
        .spawn(move || {
            log::info!("[load] reading {}", path);
            let outcome: LoadOutcome = std::fs::read(&path)
                .map_err(Into::into)
                .and_then(|bytes| decode_glb(&bytes, material))
                .into();
            _ = tx.send(outcome);
        });
    if let Err(e) = spawned {
        log::error!("[load] could not start loader thread: {}", e);
    }
    rx
}

fn config_from_args() -> ViewerConfig {
    let mut args = std::env::args().skip(1);
    let path = args.next();
    let variant = args
        .next()
        .and_then(|name| {
            let v = Variant::from_name(&name);
            if v.is_none() {
                log::warn!("unknown variant {:?}, using isometric", name);
            }
            v
        })
        .unwrap_or(Variant::Isometric);
    let mut config = ViewerConfig::for_variant(variant);
    if let Some(path) = path {
        config.model_path = path;
    }
    config
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = config_from_args();
    let background = Background {
        hex: config.background_hex,
        transparent: config.transparent_background,
    };
    let load_rx = spawn_model_load(config.model_path.clone(), config.material);

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("GLB Viewer (native)")
        .with_transparent(background.transparent)
        .build(&event_loop)?;
    let window = &window;
    let size = window.inner_size();

    let instance = wgpu::Instance::default();
    let surface = instance.create_surface(window)?;
    let mut renderer = pollster::block_on(Renderer::new(
        &instance,
        surface,
        size.width,
        size.height,
        background,
    ))?;
    let mut viewer = ViewerContext::new(config, size.width as f32, size.height as f32);
    let mut cursor = (0.0_f32, 0.0_f32);
    let mut load_pending = true;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => {
                viewer.on_resize(size.width as f32, size.height as f32);
                renderer.resize_if_needed(size.width, size.height);
            }
            WindowEvent::CursorMoved { position, .. } => {
                cursor = (position.x as f32, position.y as f32);
                viewer.on_pointer_move(cursor.0, cursor.1);
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => viewer.on_pointer_down(cursor.0, cursor.1),
                ElementState::Released => viewer.on_pointer_up(),
            },
            WindowEvent::MouseWheel { delta, .. } => {
                // winit reports scrolling up as positive; the DOM the other way
                let delta_y = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -y * LINE_DELTA_PX,
                    MouseScrollDelta::PixelDelta(p) => -(p.y as f32),
                };
                viewer.on_wheel(delta_y);
            }
            WindowEvent::RedrawRequested => {
                if load_pending {
                    if let Ok(outcome) = load_rx.try_recv() {
                        load_pending = false;
                        if let Some(data) = viewer.finish_load(outcome) {
                            renderer.upload_model(data);
                        }
                    }
                }
                let uniforms = viewer.tick();
                match renderer.render(&uniforms) {
                    Ok(()) => {}
                    Err(RenderError::Surface(
                        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated,
                    )) => renderer.reconfigure(),
                    Err(RenderError::Surface(wgpu::SurfaceError::OutOfMemory)) => {
                        log::error!("[gpu] out of memory");
                        elwt.exit();
                    }
                    Err(e) => log::warn!("[gpu] frame skipped: {}", e),
                }
            }
            _ => {}
        },
        Event::AboutToWait => window.request_redraw(),
        _ => {}
    })?;
    Ok(())
}
