use crate::error::{ReferenceError, Result};
use crate::math::Point3;
use crate::session::Session;

/// Projects the selected vertices onto the session's defined plane.
///
/// Returns the projected positions in selection order; writing them
/// back to the mesh is the caller's responsibility. An empty selection
/// is accepted and yields an empty result.
pub struct Planarize {
    selection: Vec<Point3>,
}

impl Planarize {
    /// Creates a new `Planarize` operation over the current selection.
    #[must_use]
    pub fn new(selection: Vec<Point3>) -> Self {
        Self { selection }
    }

    /// Executes the planarization.
    ///
    /// # Errors
    ///
    /// Returns an error if the session plane is not defined.
    pub fn execute(&self, session: &Session) -> Result<Vec<Point3>> {
        let plane = session.plane();
        if !plane.is_defined() {
            return Err(ReferenceError::NotDefined { reference: "plane" }.into());
        }

        self.selection.iter().map(|v| plane.project(v)).collect()
    }
}
