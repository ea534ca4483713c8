mod align_to_axis;
mod define_axis;
mod define_plane;
mod planarize;

pub use align_to_axis::AlignToAxis;
pub use define_axis::DefineAxis;
pub use define_plane::DefinePlane;
pub use planarize::Planarize;
