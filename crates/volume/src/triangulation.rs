use log::debug;
use tinvol_mesh::Facet;

/// Produces a triangulation of a set of points in the x-y plane.
///
/// Implementations return triangles as indices into `points`. The facets
/// should cover the convex hull without gaps or overlaps.
pub trait Triangulator {
    fn triangulate(&self, points: &[[f64; 2]]) -> Vec<Facet>;
}

/// Delaunay triangulation backed by the `delaunator` crate.
///
/// Fewer than three points, or points that are all collinear, produce no
/// facets.
#[derive(Debug, Default, Clone, Copy)]
pub struct DelaunayTriangulator;

impl Triangulator for DelaunayTriangulator {
    fn triangulate(&self, points: &[[f64; 2]]) -> Vec<Facet> {
        let coords: Vec<delaunator::Point> = points
            .iter()
            .map(|&[x, y]| delaunator::Point { x, y })
            .collect();
        let triangulation = delaunator::triangulate(&coords);
        let facets = Facet::from_flat(&triangulation.triangles);
        debug!("triangulated {} points into {} facets", points.len(), facets.len());
        facets
    }
}

impl<F> Triangulator for F
where
    F: Fn(&[[f64; 2]]) -> Vec<Facet>,
{
    fn triangulate(&self, points: &[[f64; 2]]) -> Vec<Facet> {
        self(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_with_center() {
        let points = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.5, 0.5]];
        let facets = DelaunayTriangulator.triangulate(&points);
        assert_eq!(4, facets.len());
        // Every facet uses the center point.
        assert!(facets.iter().all(|f| f.indices().contains(&4)));
    }

    #[test]
    fn collinear_points_have_no_facets() {
        let points = [[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]];
        assert!(DelaunayTriangulator.triangulate(&points).is_empty());
    }

    #[test]
    fn closures_are_triangulators() {
        let fixed = |_: &[[f64; 2]]| vec![Facet::new(0, 1, 2)];
        assert_eq!(vec![Facet::new(0, 1, 2)], fixed.triangulate(&[]));
    }
}
