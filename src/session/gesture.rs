use egui::Pos2;

use super::DrawingSession;
use crate::geometry;
use crate::primitive::{DRAWN_SHAPE_TAG, OutlineStyle, PreviewHandle, Primitive, ShapeKind};
use crate::surface::{Surface, TextPrompt};
use crate::tools::ToolMode;

/// Asked on every press with the text tool.
pub const TEXT_PROMPT: TextPrompt = TextPrompt {
    title: "Text",
    label: "Enter text:",
};

/// State of the press → drag → release sequence in progress
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Gesture {
    pub(crate) anchor: Option<Pos2>,
    pub(crate) prev_point: Option<Pos2>,
    pub(crate) preview: Option<PreviewHandle>,
}

impl Gesture {
    /// Where the pointer went down
    pub fn anchor(&self) -> Option<Pos2> {
        self.anchor
    }

    /// Last point a freehand segment ended at
    pub fn prev_point(&self) -> Option<Pos2> {
        self.prev_point
    }

    pub fn preview(&self) -> Option<PreviewHandle> {
        self.preview
    }

    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}

impl DrawingSession {
    pub fn on_press(&mut self, pos: Pos2, surface: &mut impl Surface) {
        log::debug!("press at {pos:?} ({})", self.mode);
        // a press without a matching release leaves stale state behind
        self.cancel_gesture(surface);

        if self.mode.is_freehand() {
            self.gesture.anchor = Some(pos);
            self.gesture.prev_point = Some(pos);
            surface.commit(Primitive::Dot {
                center: pos,
                diameter: self.stroke_width as f32,
                color: self.drawing_color(),
            });
        } else if self.mode.is_shape() {
            self.gesture.anchor = Some(pos);
        } else if self.mode.prompts_on_press() {
            self.place_text(pos, surface);
        }
    }

    pub fn on_drag(&mut self, pos: Pos2, surface: &mut impl Surface) {
        if self.mode.is_freehand() {
            let Some(prev) = self.gesture.prev_point else {
                return;
            };
            surface.commit(Primitive::Segment {
                from: prev,
                to: pos,
                width: self.stroke_width as f32,
                color: self.drawing_color(),
            });
            self.gesture.prev_point = Some(pos);
        } else if self.mode.is_shape() {
            let Some(anchor) = self.gesture.anchor else {
                return;
            };
            if let Some(old) = self.gesture.preview.take() {
                surface.discard_preview(old);
            }
            let preview = Primitive::Outline {
                kind: self.shape_kind(),
                rect: geometry::bounding_box(anchor, pos),
                style: OutlineStyle::preview(),
                tag: None,
            };
            self.gesture.preview = Some(surface.show_preview(preview));
        }
    }

    pub fn on_release(&mut self, pos: Pos2, surface: &mut impl Surface) {
        log::debug!("release at {pos:?} ({})", self.mode);
        if let Some(preview) = self.gesture.preview.take() {
            surface.discard_preview(preview);
        }

        if self.mode.is_freehand() {
            self.gesture.prev_point = None;
            self.gesture.anchor = None;
        } else if self.mode.is_shape() {
            let Some(anchor) = self.gesture.anchor.take() else {
                return;
            };
            let width = self.effective_width() as f32;
            let rect = geometry::expand_degenerate(geometry::bounding_box(anchor, pos), width);
            surface.commit(Primitive::Outline {
                kind: self.shape_kind(),
                rect,
                style: OutlineStyle::solid(self.stroke_color, width),
                tag: Some(DRAWN_SHAPE_TAG),
            });
        }
    }

    /// Drop the gesture in progress and its preview, if any.
    pub(crate) fn cancel_gesture(&mut self, surface: &mut impl Surface) {
        if let Some(preview) = self.gesture.preview {
            surface.discard_preview(preview);
        }
        self.gesture = Gesture::default();
    }

    fn shape_kind(&self) -> ShapeKind {
        if self.mode == ToolMode::Circle {
            ShapeKind::Ellipse
        } else {
            ShapeKind::Rectangle
        }
    }

    fn place_text(&mut self, pos: Pos2, surface: &mut impl Surface) {
        let Some(font_size) = self.font_size else {
            return;
        };
        match surface.request_text(&TEXT_PROMPT) {
            Some(text) if !text.is_empty() => {
                surface.commit(Primitive::TextLabel {
                    anchor: pos,
                    text,
                    color: self.stroke_color,
                    font_size: font_size as f32,
                });
            }
            _ => log::debug!("Text entry cancelled"),
        }
    }
}
