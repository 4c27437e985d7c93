use serde::{Deserialize, Serialize};
use std::fmt;

/// Drawing mode selected in the toolbar. Exactly one is active at a time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolMode {
    #[default]
    Pencil,
    Eraser,
    Square,
    Circle,
    Text,
}

/// Pointer affordance shown while hovering the canvas
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Pencil,
    DotBox,
    Crosshair,
    TextCaret,
    #[default]
    Default,
}

impl ToolMode {
    /// Return the name of the tool
    pub fn name(self) -> &'static str {
        match self {
            Self::Pencil => "pencil",
            Self::Eraser => "eraser",
            Self::Square => "square",
            Self::Circle => "circle",
            Self::Text => "text",
        }
    }

    /// Button caption
    pub fn label(self) -> &'static str {
        match self {
            Self::Pencil => "Pencil",
            Self::Eraser => "Eraser",
            Self::Square => "Square",
            Self::Circle => "Circle",
            Self::Text => "Text",
        }
    }

    pub fn cursor(self) -> Cursor {
        match self {
            Self::Pencil => Cursor::Pencil,
            Self::Eraser => Cursor::DotBox,
            Self::Square | Self::Circle => Cursor::Crosshair,
            Self::Text => Cursor::TextCaret,
        }
    }

    /// Pencil and eraser draw segment by segment as the pointer moves.
    pub fn is_freehand(self) -> bool {
        matches!(self, Self::Pencil | Self::Eraser)
    }

    /// Square and circle show a preview while dragging and commit on release.
    pub fn is_shape(self) -> bool {
        matches!(self, Self::Square | Self::Circle)
    }

    /// The text tool asks for input on press instead of tracking a drag.
    pub fn prompts_on_press(self) -> bool {
        matches!(self, Self::Text)
    }
}

impl fmt::Display for ToolMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Cursor {
    /// Closest egui cursor; egui has no pencil or dot-box icon.
    pub fn to_egui(self) -> egui::CursorIcon {
        match self {
            Self::Pencil | Self::Crosshair => egui::CursorIcon::Crosshair,
            Self::DotBox => egui::CursorIcon::Cell,
            Self::TextCaret => egui::CursorIcon::Text,
            Self::Default => egui::CursorIcon::Default,
        }
    }
}
