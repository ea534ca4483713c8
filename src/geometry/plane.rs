use crate::error::{GeometryError, ReferenceError, Result};
use crate::math::{point_on_plane, signed_plane_distance, Point3, Vector3, TOLERANCE};

/// A reference plane captured from three selected vertices.
///
/// The plane passes through `p1` with unit normal
/// `cross(p2 - p1, p3 - p1)`, normalized. Like
/// [`AxisReference`](crate::geometry::AxisReference), it starts
/// undefined and becomes defined through
/// [`from_points`](Self::from_points).
#[derive(Debug, Clone, Copy)]
pub struct PlaneReference {
    defined: bool,
    p1: Point3,
    p2: Point3,
    p3: Point3,
    normal: Vector3,
}

impl PlaneReference {
    /// Creates an undefined reference with a zero normal.
    #[must_use]
    pub fn undefined() -> Self {
        Self {
            defined: false,
            p1: Point3::origin(),
            p2: Point3::origin(),
            p3: Point3::origin(),
            normal: Vector3::zeros(),
        }
    }

    /// Creates a defined reference from three selected points.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateNormal`] if the points are
    /// collinear (or coincident) within tolerance.
    pub fn from_points(p1: Point3, p2: Point3, p3: Point3) -> Result<Self> {
        let normal = (p2 - p1).cross(&(p3 - p1));
        let len = normal.norm();
        if len < TOLERANCE {
            return Err(GeometryError::DegenerateNormal.into());
        }
        Ok(Self {
            defined: true,
            p1,
            p2,
            p3,
            normal: normal / len,
        })
    }

    /// Returns whether the reference has been defined.
    #[must_use]
    pub fn is_defined(&self) -> bool {
        self.defined
    }

    /// Returns the first reference point (the plane anchor).
    #[must_use]
    pub fn p1(&self) -> &Point3 {
        &self.p1
    }

    /// Returns the second reference point.
    #[must_use]
    pub fn p2(&self) -> &Point3 {
        &self.p2
    }

    /// Returns the third reference point.
    #[must_use]
    pub fn p3(&self) -> &Point3 {
        &self.p3
    }

    /// Returns the unit normal, or the zero vector while undefined.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Signed distance from a point to the reference plane.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceError::NotDefined`] if the plane has not been
    /// defined yet.
    pub fn signed_distance(&self, point: &Point3) -> Result<f64> {
        if !self.defined {
            return Err(ReferenceError::NotDefined { reference: "plane" }.into());
        }
        Ok(signed_plane_distance(&self.p1, &self.normal, point))
    }

    /// Projects a point onto the reference plane.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceError::NotDefined`] if the plane has not been
    /// defined yet.
    pub fn project(&self, point: &Point3) -> Result<Point3> {
        if !self.defined {
            return Err(ReferenceError::NotDefined { reference: "plane" }.into());
        }
        Ok(point_on_plane(&self.p1, &self.normal, point))
    }
}

impl Default for PlaneReference {
    fn default() -> Self {
        Self::undefined()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::AlineaError;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn xy_plane() -> PlaneReference {
        PlaneReference::from_points(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0))
            .unwrap()
    }

    #[test]
    fn from_points_computes_unit_normal() {
        let plane = xy_plane();
        assert!(plane.is_defined());
        assert!((plane.normal() - Vector3::new(0.0, 0.0, 1.0)).norm() < TOLERANCE);
    }

    #[test]
    fn normal_is_orthogonal_to_both_edges() {
        let p1 = p(1.0, 2.0, 3.0);
        let p2 = p(-1.0, 0.5, 2.0);
        let p3 = p(4.0, -2.0, 1.0);
        let plane = PlaneReference::from_points(p1, p2, p3).unwrap();
        assert!((plane.normal().norm() - 1.0).abs() < TOLERANCE);
        assert!(plane.normal().dot(&(p2 - p1)).abs() < TOLERANCE);
        assert!(plane.normal().dot(&(p3 - p1)).abs() < TOLERANCE);
    }

    #[test]
    fn collinear_points_are_degenerate() {
        let result =
            PlaneReference::from_points(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0), p(2.0, 2.0, 2.0));
        assert!(matches!(
            result,
            Err(AlineaError::Geometry(GeometryError::DegenerateNormal))
        ));
    }

    #[test]
    fn coincident_points_are_degenerate() {
        let q = p(3.0, 3.0, 3.0);
        assert!(PlaneReference::from_points(q, q, q).is_err());
    }

    #[test]
    fn projects_point_onto_plane() {
        let plane = xy_plane();
        let projected = plane.project(&p(5.0, 5.0, 5.0)).unwrap();
        assert!((projected - p(5.0, 5.0, 0.0)).norm() < TOLERANCE);
    }

    #[test]
    fn undefined_reference_refuses_projection() {
        let plane = PlaneReference::undefined();
        assert!(matches!(
            plane.project(&p(0.0, 0.0, 0.0)),
            Err(AlineaError::Reference(ReferenceError::NotDefined { .. }))
        ));
    }

    #[test]
    fn signed_distance_matches_projection_residual() {
        let plane = xy_plane();
        let query = p(2.0, -1.0, 4.0);
        let dist = plane.signed_distance(&query).unwrap();
        let foot = plane.project(&query).unwrap();
        assert!(((query - foot).norm() - dist.abs()).abs() < TOLERANCE);
    }
}
