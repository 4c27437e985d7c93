mod color_button;
mod tool_button;

pub use color_button::color_button;
pub use tool_button::ToolButton;
