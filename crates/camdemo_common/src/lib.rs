pub mod app;
pub mod color;
pub mod geom;
pub mod key;
pub mod screen;
pub mod surface;

pub use app::App;
pub use color::Color;
pub use geom::{Blend, DrawOptions, Rect, Transform};
pub use key::Key;
pub use screen::Screen;
pub use surface::Surface;
