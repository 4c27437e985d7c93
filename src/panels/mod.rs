mod central_panel;
pub mod prompts;
mod tools_panel;

pub use central_panel::central_panel;
pub use prompts::{Modal, modal_window};
pub use tools_panel::tools_panel;
