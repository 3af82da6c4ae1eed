pub mod app;
pub mod assets;
pub mod camera;
pub mod config;
pub mod input;
pub mod player;
pub mod scene;


pub use app::CameraDemoApp;
pub use assets::{AssetLoadError, AssetSource, EmbeddedAssets, MemoryAssets};
pub use config::{GameConfig, Movement, Variant};

/// Window width in pixels. The camera view has the same size.
pub const WINDOW_WIDTH: u32 = 800;
/// Window height in pixels.
pub const WINDOW_HEIGHT: u32 = 720;
/// The window is not upscaled.
pub const SCREEN_SCALE: u32 = 1;
