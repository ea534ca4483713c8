mod axis;
mod plane;

pub use axis::AxisReference;
pub use plane::PlaneReference;
