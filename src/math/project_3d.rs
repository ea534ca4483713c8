use super::{Point3, Vector3};

/// Projects `point` onto the line `origin + t * direction`.
///
/// `direction` must be unit length; the result is the closest point on
/// the line to `point`.
#[must_use]
pub fn point_on_line(origin: &Point3, direction: &Vector3, point: &Point3) -> Point3 {
    origin + direction * (point - origin).dot(direction)
}

/// Signed distance from `point` to the plane through `origin` with unit
/// normal `normal`. Positive on the side the normal points into.
#[must_use]
pub fn signed_plane_distance(origin: &Point3, normal: &Vector3, point: &Point3) -> f64 {
    (point - origin).dot(normal)
}

/// Projects `point` onto the plane through `origin` with unit normal
/// `normal`, by removing the displacement along the normal.
#[must_use]
pub fn point_on_plane(origin: &Point3, normal: &Vector3, point: &Point3) -> Point3 {
    point - normal * signed_plane_distance(origin, normal, point)
}
