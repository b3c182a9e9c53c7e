pub mod error;
pub mod shapes;

pub use error::{GeometryError, GeometryResult};
