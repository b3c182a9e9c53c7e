pub mod error;
pub mod index;
mod object_pool;
pub mod quadtree;
pub mod regions;

pub use common::shapes;
pub use error::{QuadtreeError, QuadtreeResult};
