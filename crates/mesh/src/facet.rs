/// A single triangle of a triangulation.
///
/// The corners are indices into a separate list of points rather than the
/// points themselves. A terrain triangulation shares every interior point
/// between roughly six triangles, so a facet costs 3 indices instead of
/// 3 full coordinates, and the point list stays the single source of truth
/// for heights.
///
///    0-------1
///    |\     /|
///    | \   / |
///    |  \ /  |
///    |   4   |
///    |  / \  |
///    | /   \ |
///    |/     \|
///    3-------2
///
/// Here the 5 points form 4 facets: (0, 1, 4), (1, 2, 4), (2, 3, 4) and
/// (3, 0, 4).
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct Facet {
    pub p0: usize,
    pub p1: usize,
    pub p2: usize,
}

impl Facet {
    pub const fn new(p0: usize, p1: usize, p2: usize) -> Self {
        Self { p0, p1, p2 }
    }

    pub fn indices(&self) -> [usize; 3] {
        [self.p0, self.p1, self.p2]
    }

    /// Builds facets from a flat list of indices, three per triangle.
    ///
    /// Trailing indices that do not complete a triangle are dropped.
    pub fn from_flat(indices: &[usize]) -> Vec<Facet> {
        indices
            .chunks_exact(3)
            .map(|c| Facet::new(c[0], c[1], c[2]))
            .collect()
    }
}
