use crate::error::{GeometryError, ReferenceError, Result};
use crate::math::{point_on_line, Point3, Vector3, TOLERANCE};

/// A reference line captured from two selected vertices.
///
/// The line passes through `p1` with unit direction `axis = p2 - p1`,
/// normalized. A freshly created reference is undefined; it becomes
/// defined through [`from_points`](Self::from_points) and stays defined
/// until it is replaced.
#[derive(Debug, Clone, Copy)]
pub struct AxisReference {
    defined: bool,
    p1: Point3,
    p2: Point3,
    axis: Vector3,
}

impl AxisReference {
    /// Creates an undefined reference with a zero axis.
    #[must_use]
    pub fn undefined() -> Self {
        Self {
            defined: false,
            p1: Point3::origin(),
            p2: Point3::origin(),
            axis: Vector3::zeros(),
        }
    }

    /// Creates a defined reference from the first two selected points.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateAxis`] if the points coincide
    /// within tolerance, so a zero axis can never be marked defined.
    pub fn from_points(p1: Point3, p2: Point3) -> Result<Self> {
        let direction = p2 - p1;
        let len = direction.norm();
        if len < TOLERANCE {
            return Err(GeometryError::DegenerateAxis.into());
        }
        Ok(Self {
            defined: true,
            p1,
            p2,
            axis: direction / len,
        })
    }

    /// Returns whether the reference has been defined.
    #[must_use]
    pub fn is_defined(&self) -> bool {
        self.defined
    }

    /// Returns the first reference point (the line anchor).
    #[must_use]
    pub fn p1(&self) -> &Point3 {
        &self.p1
    }

    /// Returns the second reference point.
    #[must_use]
    pub fn p2(&self) -> &Point3 {
        &self.p2
    }

    /// Returns the unit axis direction, or the zero vector while undefined.
    #[must_use]
    pub fn axis(&self) -> &Vector3 {
        &self.axis
    }

    /// Projects a point onto the reference line.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceError::NotDefined`] if the axis has not been
    /// defined yet.
    pub fn project(&self, point: &Point3) -> Result<Point3> {
        if !self.defined {
            return Err(ReferenceError::NotDefined { reference: "axis" }.into());
        }
        Ok(point_on_line(&self.p1, &self.axis, point))
    }

    /// Returns the endpoints of the axis segment extended past `p1` and
    /// `p2` by `extension`, for a host overlay to draw.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceError::NotDefined`] if the axis has not been
    /// defined yet.
    pub fn display_segment(&self, extension: f64) -> Result<[Point3; 2]> {
        if !self.defined {
            return Err(ReferenceError::NotDefined { reference: "axis" }.into());
        }
        Ok([self.p1 - self.axis * extension, self.p2 + self.axis * extension])
    }
}

impl Default for AxisReference {
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

    #[test]
    fn from_points_normalizes_axis() {
        let axis = AxisReference::from_points(p(0.0, 0.0, 0.0), p(2.0, 0.0, 0.0)).unwrap();
        assert!(axis.is_defined());
        assert!((axis.axis() - Vector3::new(1.0, 0.0, 0.0)).norm() < TOLERANCE);
    }

    #[test]
    fn axis_is_unit_and_parallel_to_chord() {
        let p1 = p(1.0, -2.0, 0.5);
        let p2 = p(4.0, 0.0, -1.5);
        let axis = AxisReference::from_points(p1, p2).unwrap();
        assert!((axis.axis().norm() - 1.0).abs() < TOLERANCE);
        // Parallel: cross product with the chord vanishes
        assert!(axis.axis().cross(&(p2 - p1)).norm() < TOLERANCE);
    }

    #[test]
    fn coincident_points_are_degenerate() {
        let result = AxisReference::from_points(p(1.0, 1.0, 1.0), p(1.0, 1.0, 1.0));
        assert!(matches!(
            result,
            Err(AlineaError::Geometry(GeometryError::DegenerateAxis))
        ));
    }

    #[test]
    fn undefined_reference_refuses_projection() {
        let axis = AxisReference::undefined();
        assert!(!axis.is_defined());
        assert!(matches!(
            axis.project(&p(1.0, 1.0, 1.0)),
            Err(AlineaError::Reference(ReferenceError::NotDefined { .. }))
        ));
    }

    #[test]
    fn projects_point_onto_line() {
        let axis = AxisReference::from_points(p(0.0, 0.0, 0.0), p(2.0, 0.0, 0.0)).unwrap();
        let projected = axis.project(&p(1.0, 1.0, 1.0)).unwrap();
        assert!((projected - p(1.0, 0.0, 0.0)).norm() < TOLERANCE);
    }

    #[test]
    fn display_segment_extends_both_ends() {
        let axis = AxisReference::from_points(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)).unwrap();
        let [start, end] = axis.display_segment(0.5).unwrap();
        assert!((start - p(-0.5, 0.0, 0.0)).norm() < TOLERANCE);
        assert!((end - p(1.5, 0.0, 0.0)).norm() < TOLERANCE);
    }

    #[test]
    fn display_segment_requires_definition() {
        assert!(AxisReference::undefined().display_segment(0.1).is_err());
    }
}
