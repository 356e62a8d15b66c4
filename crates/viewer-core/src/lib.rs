pub mod camera;
pub mod config;
pub mod constants;
pub mod context;
pub mod lighting;
pub mod loader;
pub mod model;
pub mod orbit;
pub mod pointer;
pub mod render;
pub mod viewport;

pub use camera::*;
pub use config::*;
pub use constants::*;
pub use context::*;
pub use lighting::*;
pub use loader::*;
pub use model::*;
pub use orbit::*;
pub use pointer::*;
pub use viewport::*;
