mod facet;
mod geometry;
mod point_cloud;

pub use facet::*;
pub use geometry::*;
pub use point_cloud::*;
