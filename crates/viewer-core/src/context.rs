//! The single owning context behind every event handler and the frame loop.
//!
//! Resize, pointer and load-completion handlers only write into this struct;
//! the frame callback reads it once per frame. Platform front-ends wrap it in
//! whatever sharing their event model needs.

use crate::camera::Camera;
use crate::config::ViewerConfig;
use crate::lighting::{PackedLights, MAX_DIRECTIONAL_LIGHTS};
use crate::loader::LoadOutcome;
use crate::model::{LoadedModel, ModelData, ObjectTransform};
use crate::orbit::OrbitController;
use crate::pointer::{OrientationTarget, PointerSample};
use crate::viewport::ViewportState;
use glam::{Mat3, Mat4};

/// Per-frame shader uniforms. Layout matches `Globals` in `model.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub normal_matrix: [[f32; 4]; 4],
    pub eye: [f32; 4],
    pub ambient: [f32; 4],
    pub light_dirs: [[f32; 4]; MAX_DIRECTIONAL_LIGHTS],
    pub light_colors: [[f32; 4]; MAX_DIRECTIONAL_LIGHTS],
}

/// Lifecycle of the single model load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    Pending,
    Loaded,
    Failed,
}

pub struct ViewerContext {
    pub config: ViewerConfig,
    viewport: ViewportState,
    camera: Camera,
    orbit: Option<OrbitController>,
    pointer: PointerSample,
    model: Option<LoadedModel>,
    load_state: LoadState,
    lights: PackedLights,
}

impl ViewerContext {
    pub fn new(config: ViewerConfig, width: f32, height: f32) -> Self {
        let viewport = ViewportState::new(width, height);
        let camera = Camera::new(
            config.projection,
            config.camera_position,
            config.camera_target,
            viewport,
        );
        let orbit = config.orbit.map(|s| OrbitController::new(s, &camera));
        let lights = config.lights.packed();
        log::info!(
            "[viewport] init {}x{} aspect={:.3} projection={:?}",
            viewport.width,
            viewport.height,
            camera.aspect(),
            config.projection
        );
        Self {
            config,
            viewport,
            camera,
            orbit,
            pointer: PointerSample::default(),
            model: None,
            load_state: LoadState::Pending,
            lights,
        }
    }

    #[inline]
    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    #[inline]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[inline]
    pub fn pointer(&self) -> PointerSample {
        self.pointer
    }

    #[inline]
    pub fn model(&self) -> Option<&LoadedModel> {
        self.model.as_ref()
    }

    #[inline]
    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    #[inline]
    pub fn orbit(&self) -> Option<&OrbitController> {
        self.orbit.as_ref()
    }

    /// Viewport sync: the projection is current before this returns.
    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.viewport = ViewportState::new(width, height);
        self.camera.sync_viewport(self.viewport);
        log::debug!(
            "[viewport] resize {}x{} aspect={:.3}",
            width,
            height,
            self.camera.aspect()
        );
    }

    pub fn on_pointer_move(&mut self, client_x: f32, client_y: f32) {
        self.pointer = PointerSample::from_client(client_x, client_y, self.viewport);
        if let Some(orbit) = self.orbit.as_mut() {
            orbit.drag_to(client_x, client_y, self.viewport.height);
        }
    }

    pub fn on_pointer_down(&mut self, client_x: f32, client_y: f32) {
        if let Some(orbit) = self.orbit.as_mut() {
            orbit.begin_drag(client_x, client_y);
        }
    }

    pub fn on_pointer_up(&mut self) {
        if let Some(orbit) = self.orbit.as_mut() {
            orbit.end_drag();
        }
    }

    pub fn on_wheel(&mut self, delta_y: f32) {
        if let Some(orbit) = self.orbit.as_mut() {
            orbit.zoom(&mut self.camera, delta_y);
        }
    }

    /// Consume the one load outcome. On success the model is installed and
    /// its data returned for GPU upload; failures and repeat outcomes return
    /// `None` and leave the scene as it is.
    pub fn finish_load(&mut self, outcome: LoadOutcome) -> Option<&ModelData> {
        if self.load_state != LoadState::Pending {
            log::warn!(
                "[load] ignoring extra load outcome (state={:?})",
                self.load_state
            );
            return None;
        }
        match outcome {
            LoadOutcome::Loaded(data) => {
                self.load_state = LoadState::Loaded;
                let transform =
                    ObjectTransform::new(self.config.model_scale, self.config.model_upright_x);
                log::info!(
                    "[load] model ready: {} triangles",
                    data.triangle_count()
                );
                self.model = Some(LoadedModel { data, transform });
                self.model.as_ref().map(|m| &m.data)
            }
            LoadOutcome::Failed(e) => {
                self.load_state = LoadState::Failed;
                log::error!("[load] {} failed: {}", self.config.model_path, e);
                None
            }
        }
    }

    /// Orientation the latest pointer sample maps to, when pointer follow is
    /// enabled.
    pub fn target_orientation(&self) -> Option<OrientationTarget> {
        self.config
            .follow_pointer
            .map(|mapper| mapper.orientation(self.pointer))
    }

    /// Advance one frame: settle orbit motion, assign the object orientation
    /// if a model is present, and pack the uniforms for drawing.
    pub fn tick(&mut self) -> FrameUniforms {
        if let Some(orbit) = self.orbit.as_mut() {
            orbit.update(&mut self.camera);
        }
        if let Some(target) = self.target_orientation() {
            if let Some(model) = self.model.as_mut() {
                model.transform.orientation = target;
            }
        }
        self.frame_uniforms()
    }

    pub fn frame_uniforms(&self) -> FrameUniforms {
        let model = self
            .model
            .as_ref()
            .map(|m| m.transform.matrix())
            .unwrap_or(Mat4::IDENTITY);
        let normal = Mat4::from_mat3(Mat3::from_mat4(model).inverse().transpose());
        FrameUniforms {
            view_proj: self.camera.view_projection().to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            normal_matrix: normal.to_cols_array_2d(),
            eye: self.camera.eye.extend(1.0).to_array(),
            ambient: self.lights.ambient,
            light_dirs: self.lights.directions,
            light_colors: self.lights.colors,
        }
    }
}
