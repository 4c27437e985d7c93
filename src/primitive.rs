use egui::{Color32, Pos2, Rect};

/// Tag attached to committed rectangle and ellipse outlines.
pub const DRAWN_SHAPE_TAG: &str = "drawn_shape";

/// Which outline a shape tool produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
}

/// Stroke settings of an outline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineStyle {
    pub color: Color32,
    pub width: f32,
    pub dashed: bool,
}

impl OutlineStyle {
    pub fn solid(color: Color32, width: f32) -> Self {
        Self {
            color,
            width,
            dashed: false,
        }
    }

    /// One pixel wide, dashed, neutral gray.
    pub fn preview() -> Self {
        Self {
            color: crate::color::PREVIEW_GRAY,
            width: 1.0,
            dashed: true,
        }
    }
}

/// A single drawing instruction the session hands to its surface.
///
/// Coordinates are canvas-local pixels with the origin at the top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Filled circle marking the start of a freehand stroke
    Dot {
        center: Pos2,
        diameter: f32,
        color: Color32,
    },
    /// Round-capped line between two consecutive pointer positions
    Segment {
        from: Pos2,
        to: Pos2,
        width: f32,
        color: Color32,
    },
    /// Rectangle or ellipse outline bounded by `rect`
    Outline {
        kind: ShapeKind,
        rect: Rect,
        style: OutlineStyle,
        tag: Option<&'static str>,
    },
    /// Text whose top-left corner sits at `anchor`
    TextLabel {
        anchor: Pos2,
        text: String,
        color: Color32,
        font_size: f32,
    },
}

impl Primitive {
    /// Short name used in logs and debug output
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Dot { .. } => "dot",
            Self::Segment { .. } => "line-segment",
            Self::Outline {
                kind: ShapeKind::Rectangle,
                ..
            } => "rect-outline",
            Self::Outline {
                kind: ShapeKind::Ellipse,
                ..
            } => "ellipse-outline",
            Self::TextLabel { .. } => "text-label",
        }
    }

    pub fn tag(&self) -> Option<&'static str> {
        match self {
            Self::Outline { tag, .. } => *tag,
            _ => None,
        }
    }

    pub fn is_dashed(&self) -> bool {
        matches!(self, Self::Outline { style, .. } if style.dashed)
    }
}

/// Opaque reference to the preview primitive currently shown by a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreviewHandle(u64);

impl PreviewHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}
