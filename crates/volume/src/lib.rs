//! Volume between a triangulated surface and a horizontal reference plane.
//!
//! Each triangle of the surface defines a plane `z = f(x, y)`. Its volume is
//! the double integral of that height function over the triangle's x-y
//! footprint, evaluated in closed form. A [`TriangulatedMesh`] sums the
//! triangle volumes of a whole point cloud.
//!
//! ```
//! use tinvol::{NoProgress, TriangulatedMesh, VolumeConfig};
//! use tinvol_mesh::{CartesianCoordinate, PointCloud};
//!
//! let cloud: PointCloud = [(0.0, 0.0, 2.0), (1.0, 0.0, 2.0), (1.0, 1.0, 2.0), (0.0, 1.0, 2.0)]
//!     .into_iter()
//!     .map(CartesianCoordinate::from)
//!     .collect();
//! let mesh = TriangulatedMesh::delaunay(cloud)?;
//! let volume = mesh.volume(&VolumeConfig::default(), &mut NoProgress)?;
//! assert!((volume - 2.0).abs() < 1e-12);
//! # Ok::<(), tinvol::VolumeError>(())
//! ```

mod config;
mod error;
mod mesh;
mod plane;
mod progress;
mod segment;
mod triangle;
mod triangulation;

pub use config::*;
pub use error::*;
pub use mesh::*;
pub use plane::*;
pub use progress::*;
pub use segment::*;
pub use triangle::*;
pub use triangulation::*;
