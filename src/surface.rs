use egui::Color32;

use crate::primitive::{PreviewHandle, Primitive};
use crate::tools::{Cursor, ToolMode};

/// Blocking request for an integer, e.g. a custom stroke width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerPrompt {
    pub title: &'static str,
    pub label: &'static str,
    pub min: u32,
    pub max: u32,
    pub initial: u32,
}

impl IntegerPrompt {
    pub fn accepts(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Blocking request for a line of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPrompt {
    pub title: &'static str,
    pub label: &'static str,
}

/// Everything the drawing session can ask of the GUI shell hosting it.
///
/// The session calls these one at a time from the shell's event thread. The two
/// `request_*` methods are synchronous: they return only once the user has
/// answered or dismissed the prompt, and `None` always means "cancelled".
pub trait Surface {
    /// Add a permanent primitive to the display list.
    fn commit(&mut self, primitive: Primitive);

    /// Show a transient primitive, replacing whatever preview was shown before.
    fn show_preview(&mut self, primitive: Primitive) -> PreviewHandle;

    /// Remove a preview. Unknown or stale handles are ignored.
    fn discard_preview(&mut self, handle: PreviewHandle);

    /// Empty the display list and drop any preview.
    fn clear(&mut self);

    fn set_cursor(&mut self, cursor: Cursor);

    /// Show `mode` as the single active tool button.
    fn highlight_tool(&mut self, mode: ToolMode);

    /// Repaint the color button in `color` with `foreground` text.
    fn update_color_indicator(&mut self, color: Color32, foreground: Color32);

    fn request_text(&mut self, prompt: &TextPrompt) -> Option<String>;

    fn request_integer(&mut self, prompt: &IntegerPrompt) -> Option<u32>;
}
