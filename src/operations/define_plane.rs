use crate::error::{Result, SelectionError};
use crate::geometry::PlaneReference;
use crate::math::Point3;
use crate::session::Session;

/// Defines the session plane from exactly three selected vertices.
///
/// Unlike [`DefineAxis`](crate::operations::DefineAxis), which takes the
/// first two of any larger selection, this operation rejects selections
/// of any size other than three.
pub struct DefinePlane {
    selection: Vec<Point3>,
}

impl DefinePlane {
    /// Creates a new `DefinePlane` operation over the current selection,
    /// in selection order.
    #[must_use]
    pub fn new(selection: Vec<Point3>) -> Self {
        Self { selection }
    }

    /// Executes the definition, replacing the session's plane reference.
    ///
    /// The session is only mutated once validation has fully succeeded;
    /// on failure the previous reference is left intact.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection does not contain exactly three
    /// vertices, or if the three are collinear (degenerate normal).
    pub fn execute(&self, session: &mut Session) -> Result<PlaneReference> {
        if self.selection.len() != 3 {
            return Err(SelectionError::ExactCount {
                required: 3,
                actual: self.selection.len(),
            }
            .into());
        }

        let plane =
            PlaneReference::from_points(self.selection[0], self.selection[1], self.selection[2])?;
        session.set_plane(plane);
        Ok(plane)
    }
}
