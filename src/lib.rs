#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod color;
pub mod components;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod panels;
pub mod primitive;
pub mod renderer;
pub mod session;
pub mod surface;
pub mod tools;

pub use app::PaintApp;
pub use canvas::Canvas;
pub use config::{Edition, SessionConfig};
pub use error::{ColorError, ConfigError};
pub use input::{InputHandler, PointerEvent};
pub use primitive::{Primitive, ShapeKind};
pub use renderer::Renderer;
pub use session::{DrawingSession, SizeChoice};
pub use surface::Surface;
pub use tools::ToolMode;
