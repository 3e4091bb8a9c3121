pub mod group;
pub mod marker;

pub use group::Group;
pub use marker::*;
