use log::debug;
use tinvol_mesh::{Bounds, Facet, PointCloud};

use crate::config::VolumeConfig;
use crate::error::{Result, VolumeError};
use crate::progress::{Progress, ProgressSink};
use crate::triangle::Triangle;
use crate::triangulation::{DelaunayTriangulator, Triangulator};

/// A point cloud together with a triangulation of its x-y projection.
///
/// Every facet index is checked against the cloud when the mesh is built, so
/// resolving a facet into a [`Triangle`] cannot fail afterwards.
#[derive(Debug, Clone)]
pub struct TriangulatedMesh {
    cloud: PointCloud,
    facets: Vec<Facet>,
}

/// Size and extent of a mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshSummary {
    pub points: usize,
    pub facets: usize,
    pub bounds: Option<Bounds>,
    pub has_elevation: bool,
}

impl TriangulatedMesh {
    /// Pairs a cloud with an externally computed triangulation.
    pub fn new(cloud: PointCloud, facets: Vec<Facet>) -> Result<Self> {
        let len = cloud.len();
        for (facet, f) in facets.iter().enumerate() {
            if let Some(&index) = f.indices().iter().find(|&&i| i >= len) {
                return Err(VolumeError::IndexOutOfRange { facet, index, len });
            }
        }
        Ok(Self { cloud, facets })
    }

    /// Triangulates the cloud's x-y projection with `triangulator`.
    pub fn triangulate<T>(cloud: PointCloud, triangulator: &T) -> Result<Self>
    where
        T: Triangulator + ?Sized,
    {
        if cloud.len() < 3 {
            return Err(VolumeError::TooFewPoints(cloud.len()));
        }
        let facets = triangulator.triangulate(&cloud.xy());
        Self::new(cloud, facets)
    }

    /// Delaunay triangulation of the cloud's x-y projection.
    pub fn delaunay(cloud: PointCloud) -> Result<Self> {
        Self::triangulate(cloud, &DelaunayTriangulator)
    }

    pub fn cloud(&self) -> &PointCloud {
        &self.cloud
    }

    pub fn facets(&self) -> &[Facet] {
        self.facets.as_slice()
    }

    pub fn facet_count(&self) -> usize {
        self.facets.len()
    }

    pub fn summary(&self) -> MeshSummary {
        MeshSummary {
            points: self.cloud.len(),
            facets: self.facets.len(),
            bounds: self.cloud.bounds(),
            has_elevation: self.cloud.has_elevation(),
        }
    }

    fn resolve(&self, f: &Facet) -> Triangle {
        let points = self.cloud.points();
        Triangle::new(points[f.p0], points[f.p1], points[f.p2])
    }

    /// The triangle for facet `index`.
    pub fn triangle(&self, index: usize) -> Option<Triangle> {
        self.facets.get(index).map(|f| self.resolve(f))
    }

    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.facets.iter().map(|f| self.resolve(f))
    }

    /// Sums the volume of every triangle above `config.reference_elevation`.
    ///
    /// Progress is reported to `progress` after each triangle. The first
    /// triangle whose plane is vertical aborts the sum with
    /// [`VolumeError::DegenerateFacet`].
    pub fn volume<P>(&self, config: &VolumeConfig, progress: &mut P) -> Result<f64>
    where
        P: ProgressSink + ?Sized,
    {
        let total = self.facets.len();
        debug!(
            "computing volume of {} facets above z = {}",
            total, config.reference_elevation
        );

        let mut volume = 0.0;
        for (facet, triangle) in self.triangles().enumerate() {
            let lowered = Triangle::new(
                triangle.p0.raised(-config.reference_elevation),
                triangle.p1.raised(-config.reference_elevation),
                triangle.p2.raised(-config.reference_elevation),
            );
            volume += lowered.volume().map_err(|e| match e {
                VolumeError::DegeneratePlane { .. } => {
                    VolumeError::DegenerateFacet { facet, triangle }
                }
                e => e,
            })?;
            progress.report(&Progress {
                current: facet + 1,
                total,
                prefix: &config.progress_prefix,
                suffix: &config.progress_suffix,
                length: config.progress_length,
            });
        }

        debug!("mesh volume is {}", volume);
        Ok(volume)
    }
}
