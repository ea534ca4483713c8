use crate::error::{ReferenceError, Result, SelectionError};
use crate::math::Point3;
use crate::session::Session;

/// Projects the selected vertices onto the session's defined axis.
///
/// Returns the projected positions in selection order; writing them
/// back to the mesh is the caller's responsibility.
pub struct AlignToAxis {
    selection: Vec<Point3>,
}

impl AlignToAxis {
    /// Creates a new `AlignToAxis` operation over the current selection.
    #[must_use]
    pub fn new(selection: Vec<Point3>) -> Self {
        Self { selection }
    }

    /// Executes the alignment.
    ///
    /// # Errors
    ///
    /// Returns an error if the session axis is not defined, or if the
    /// selection is empty.
    pub fn execute(&self, session: &Session) -> Result<Vec<Point3>> {
        let axis = session.axis();
        if !axis.is_defined() {
            return Err(ReferenceError::NotDefined { reference: "axis" }.into());
        }
        if self.selection.is_empty() {
            return Err(SelectionError::TooFew {
                required: 1,
                actual: 0,
            }
            .into());
        }

        self.selection.iter().map(|v| axis.project(v)).collect()
    }
}
