use egui::{Pos2, Rect, Vec2, pos2, vec2};

/// Number of straight segments used to approximate an ellipse outline.
pub const ELLIPSE_SEGMENTS: usize = 64;

/// Axis-aligned box spanned by two corner points, in any drag direction.
pub fn bounding_box(a: Pos2, b: Pos2) -> Rect {
    Rect::from_two_pos(a, b)
}

/// True when the box encloses no area (a click without movement, or a drag along one axis).
pub fn is_degenerate(rect: Rect) -> bool {
    rect.width() <= 0.0 || rect.height() <= 0.0
}

/// Grow a zero-area box by `amount` on both axes so it still renders as a visible shape.
///
/// The min corner stays put; boxes with area are returned unchanged.
pub fn expand_degenerate(rect: Rect, amount: f32) -> Rect {
    if is_degenerate(rect) {
        Rect::from_min_size(rect.min, rect.size() + Vec2::splat(amount))
    } else {
        rect
    }
}

/// Points along the ellipse inscribed in `rect`, without repeating the first point.
pub fn ellipse_points(rect: Rect, segments: usize) -> Vec<Pos2> {
    let center = rect.center();
    let radius = rect.size() / 2.0;
    let segments = segments.max(3);
    (0..segments)
        .map(|i| {
            let angle = std::f32::consts::TAU * i as f32 / segments as f32;
            center + vec2(radius.x * angle.cos(), radius.y * angle.sin())
        })
        .collect()
}

/// Corners of `rect` in drawing order, closed back to the first one.
pub fn closed_rect_path(rect: Rect) -> Vec<Pos2> {
    vec![
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
        rect.left_top(),
    ]
}

/// Close a polyline by appending its first point.
pub fn close_path(mut points: Vec<Pos2>) -> Vec<Pos2> {
    if let Some(first) = points.first().copied() {
        points.push(first);
    }
    points
}

/// Canvas-local position to screen position.
pub fn to_screen(origin: Pos2, local: Pos2) -> Pos2 {
    pos2(origin.x + local.x, origin.y + local.y)
}
