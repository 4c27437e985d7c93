// src/renderer.rs
use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Shape, Stroke};

use crate::canvas::Canvas;
use crate::geometry;
use crate::primitive::{OutlineStyle, Primitive, ShapeKind};

const DASH_LENGTH: f32 = 2.0;
const GAP_LENGTH: f32 = 2.0;

/// Paints a [`Canvas`] into an egui painter.
#[derive(Debug, Clone)]
pub struct Renderer {
    background: Color32,
}

impl Renderer {
    /// Creates a renderer that fills the canvas with `background` before drawing
    pub fn new(background: Color32) -> Self {
        Self { background }
    }

    /// Renders the current frame
    ///
    /// Args:
    ///     painter (egui::Painter): The painter to draw with, clipped to the canvas
    ///     rect (egui::Rect): Screen rectangle of the canvas; primitives are offset by its min corner
    ///     canvas (Canvas): Display list and preview to draw
    pub fn render(&self, painter: &egui::Painter, rect: Rect, canvas: &Canvas) {
        painter.rect_filled(rect, 0.0, self.background);

        for primitive in canvas.display_list() {
            Self::paint(painter, primitive, rect.min);
        }
        if let Some(preview) = canvas.preview() {
            Self::paint(painter, preview, rect.min);
        }
    }

    fn paint(painter: &egui::Painter, primitive: &Primitive, origin: Pos2) {
        if let Primitive::TextLabel {
            anchor,
            text,
            color,
            font_size,
        } = primitive
        {
            painter.text(
                geometry::to_screen(origin, *anchor),
                Align2::LEFT_TOP,
                text,
                FontId::proportional(*font_size),
                *color,
            );
        } else {
            painter.extend(Self::shapes_for(primitive, origin));
        }
    }

    /// Converts one primitive into egui shapes positioned relative to `origin`
    ///
    /// Text labels need the painter's fonts and yield no shapes here.
    pub fn shapes_for(primitive: &Primitive, origin: Pos2) -> Vec<Shape> {
        let at = |p: Pos2| geometry::to_screen(origin, p);

        match primitive {
            Primitive::Dot {
                center,
                diameter,
                color,
            } => {
                let center = at(*center);
                if *diameter <= 1.0 {
                    // single pixel mark
                    vec![Shape::rect_filled(
                        Rect::from_min_size(center, egui::vec2(1.0, 1.0)),
                        0.0,
                        *color,
                    )]
                } else {
                    vec![Shape::circle_filled(center, diameter / 2.0, *color)]
                }
            }
            Primitive::Segment {
                from,
                to,
                width,
                color,
            } => {
                let (from, to) = (at(*from), at(*to));
                let mut shapes = vec![Shape::line_segment([from, to], Stroke::new(*width, *color))];
                if *width > 1.0 {
                    // round caps
                    shapes.push(Shape::circle_filled(from, width / 2.0, *color));
                    shapes.push(Shape::circle_filled(to, width / 2.0, *color));
                }
                shapes
            }
            Primitive::Outline {
                kind, rect, style, ..
            } => {
                let rect = rect.translate(origin.to_vec2());
                let path = match kind {
                    ShapeKind::Rectangle => geometry::closed_rect_path(rect),
                    ShapeKind::Ellipse => geometry::close_path(geometry::ellipse_points(
                        rect,
                        geometry::ELLIPSE_SEGMENTS,
                    )),
                };
                Self::outline_shapes(path, style)
            }
            Primitive::TextLabel { .. } => Vec::new(),
        }
    }

    fn outline_shapes(path: Vec<Pos2>, style: &OutlineStyle) -> Vec<Shape> {
        let stroke = Stroke::new(style.width, style.color);
        if style.dashed {
            Shape::dashed_line(&path, stroke, DASH_LENGTH, GAP_LENGTH)
        } else {
            vec![Shape::line(path, stroke)]
        }
    }
}
