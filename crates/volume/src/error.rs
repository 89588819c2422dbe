//! Error types for volume computation.

use thiserror::Error;

use crate::triangle::Triangle;

/// Errors that can occur while computing a volume.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VolumeError {
    /// The triangle's normal has no z component, so its plane cannot be
    /// written as a height function `z = f(x, y)`.
    #[error("triangle {triangle} has no height function: its plane is vertical")]
    DegeneratePlane { triangle: Triangle },

    /// A triangle of a mesh has a vertical plane.
    #[error("facet {facet} has no height function: triangle {triangle} lies in a vertical plane")]
    DegenerateFacet { facet: usize, triangle: Triangle },

    /// A facet refers to a row that the point cloud does not have.
    #[error("facet {facet} references point {index}, but the cloud has {len} points")]
    IndexOutOfRange {
        facet: usize,
        index: usize,
        len: usize,
    },

    /// Triangulation needs at least three points.
    #[error("cannot triangulate {0} points, at least 3 are required")]
    TooFewPoints(usize),
}

/// Result type for volume operations.
pub type Result<T> = std::result::Result<T, VolumeError>;
