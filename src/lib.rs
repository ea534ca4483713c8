pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod session;

pub use error::{AlineaError, Result};
