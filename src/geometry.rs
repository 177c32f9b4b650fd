//! Plane geometry helpers shared by shapes, the ship, and collision tests.
//!
//! Vector addition, subtraction and distance are plain [`Vec2`] operations;
//! this module only adds what `glam` does not provide.

use bevy::prelude::*;

/// Ray-casting parity test: is `point` inside the closed polygon `vertices`?
///
/// The polygon is closed implicitly (last vertex connects to the first).
/// Edges with equal endpoint `y` never straddle the ray, so they are skipped
/// before the intersection is computed.  Points exactly on an edge may land on
/// either side.
pub fn point_in_polygon(point: Vec2, vertices: &[Vec2]) -> bool {
    let Some(&last) = vertices.last() else {
        return false;
    };

    let mut inside = false;
    let mut prev = last;
    for &curr in vertices {
        if (curr.y > point.y) != (prev.y > point.y) {
            let crossing_x = (prev.x - curr.x) * (point.y - curr.y) / (prev.y - curr.y) + curr.x;
            if point.x < crossing_x {
                inside = !inside;
            }
        }
        prev = curr;
    }
    inside
}

/// Arithmetic mean of `points`, or `None` for an empty slice.
pub fn centroid(points: &[Vec2]) -> Option<Vec2> {
    if points.is_empty() {
        return None;
    }
    Some(points.iter().copied().sum::<Vec2>() / points.len() as f32)
}

/// Rotate `point` about the origin by `degrees`.
///
/// In screen space (+Y down) a positive angle turns clockwise on screen.
pub fn rotate_point(point: Vec2, degrees: f32) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vec2::new(point.x * cos - point.y * sin, point.x * sin + point.y * cos)
}

/// Unit vector pointing along `degrees`, where 0° is screen-up.
pub fn heading(degrees: f32) -> Vec2 {
    rotate_point(Vec2::NEG_Y, degrees)
}

/// True when `point` is on or beyond the edge of the `size` rectangle
/// anchored at the origin.
pub fn is_off_screen(point: Vec2, size: Vec2) -> bool {
    point.x <= 0.0 || point.x >= size.x || point.y <= 0.0 || point.y >= size.y
}
