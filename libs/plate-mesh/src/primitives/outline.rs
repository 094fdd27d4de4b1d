//! # Outlines
//!
//! 2D contours traced counter-clockwise in the XY plane.

use config::constants::MIN_PROJECTION_DISTANCE;
use glam::DVec2;
use std::f64::consts::{FRAC_PI_2, PI};

/// Traces a rounded rectangle with its lower-left corner at the origin.
///
/// Each corner is a quarter-circle of `segments_per_corner` steps, emitted
/// with both endpoints, so the outline has `4 * (segments_per_corner + 1)`
/// points. Corners are visited top-right, top-left, bottom-left,
/// bottom-right (counter-clockwise).
///
/// # Example
///
/// ```rust
/// use plate_mesh::primitives::rounded_rect_outline;
///
/// let outline = rounded_rect_outline(20.0, 10.0, 3.0, 8);
/// assert_eq!(outline.len(), 36);
/// ```
pub fn rounded_rect_outline(
    width: f64,
    height: f64,
    radius: f64,
    segments_per_corner: u32,
) -> Vec<DVec2> {
    let segments = segments_per_corner.max(1);
    let corners = [
        (DVec2::new(width - radius, height - radius), 0.0),
        (DVec2::new(radius, height - radius), FRAC_PI_2),
        (DVec2::new(radius, radius), PI),
        (DVec2::new(width - radius, radius), 3.0 * FRAC_PI_2),
    ];

    let mut points = Vec::with_capacity(4 * (segments as usize + 1));
    for (center, start_angle) in corners {
        for i in 0..=segments {
            let angle = start_angle + FRAC_PI_2 * f64::from(i) / f64::from(segments);
            points.push(center + radius * DVec2::new(angle.cos(), angle.sin()));
        }
    }
    points
}

/// Projects each outline point onto the circle of `radius` around `center`
/// along the ray from the center.
///
/// The result has the same point count and ordering as `outline`, which
/// lets the two contours be stitched with matched triangle strips.
pub fn project_to_circle(outline: &[DVec2], center: DVec2, radius: f64) -> Vec<DVec2> {
    outline
        .iter()
        .map(|&p| {
            let v = p - center;
            let dist = v.length().max(MIN_PROJECTION_DISTANCE);
            center + v / dist * radius
        })
        .collect()
}

/// Points of a full circle, counter-clockwise starting on +X.
pub fn circle_points(center: DVec2, radius: f64, segments: u32) -> Vec<DVec2> {
    (0..segments)
        .map(|i| {
            let angle = 2.0 * PI * f64::from(i) / f64::from(segments);
            center + radius * DVec2::new(angle.cos(), angle.sin())
        })
        .collect()
}

/// Signed area of a closed polygon; positive when counter-clockwise.
#[cfg(test)]
pub(crate) fn signed_area(points: &[DVec2]) -> f64 {
    let n = points.len();
    (0..n)
        .map(|i| points[i].perp_dot(points[(i + 1) % n]))
        .sum::<f64>()
        * 0.5
}
