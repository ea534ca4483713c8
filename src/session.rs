use crate::geometry::{AxisReference, PlaneReference};

/// Owns the reference records shared by the alignment operations.
///
/// The host creates one session per editing context and passes it to
/// each operation; there are no process-wide singletons. Define
/// operations replace a record wholesale, everything else reads it.
/// A session must not be mutated concurrently with a read.
#[derive(Debug, Default)]
pub struct Session {
    axis: AxisReference,
    plane: PlaneReference,
}

impl Session {
    /// Creates a session with both references undefined.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current axis reference.
    #[must_use]
    pub fn axis(&self) -> &AxisReference {
        &self.axis
    }

    /// Returns the current plane reference.
    #[must_use]
    pub fn plane(&self) -> &PlaneReference {
        &self.plane
    }

    /// Replaces the axis reference.
    pub(crate) fn set_axis(&mut self, axis: AxisReference) {
        self.axis = axis;
    }

    /// Replaces the plane reference.
    pub(crate) fn set_plane(&mut self, plane: PlaneReference) {
        self.plane = plane;
    }
}
