use crate::error::{Result, SelectionError};
use crate::geometry::AxisReference;
use crate::math::Point3;
use crate::session::Session;

/// Defines the session axis from the first two selected vertices.
pub struct DefineAxis {
    selection: Vec<Point3>,
}

impl DefineAxis {
    /// Creates a new `DefineAxis` operation over the current selection,
    /// in selection order.
    #[must_use]
    pub fn new(selection: Vec<Point3>) -> Self {
        Self { selection }
    }

    /// Executes the definition, replacing the session's axis reference.
    ///
    /// The session is only mutated once validation has fully succeeded;
    /// on failure the previous reference is left intact.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two vertices are selected, or if
    /// the first two coincide (degenerate axis).
    pub fn execute(&self, session: &mut Session) -> Result<AxisReference> {
        if self.selection.len() < 2 {
            return Err(SelectionError::TooFew {
                required: 2,
                actual: self.selection.len(),
            }
            .into());
        }

        let axis = AxisReference::from_points(self.selection[0], self.selection[1])?;
        session.set_axis(axis);
        Ok(axis)
    }
}
