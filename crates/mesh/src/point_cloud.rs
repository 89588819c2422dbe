use crate::geometry::CartesianCoordinate;

/// Tabular point data: one row per sample with `x`, `y`, `z` and an
/// optional `elevation` column.
///
/// The elevation column is carried along for consumers that want it, the
/// volume computation only reads `x`, `y` and `z`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCloud {
    points: Vec<CartesianCoordinate>,
    elevation: Option<Vec<f64>>,
}

/// Axis-aligned extent of a point cloud.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: CartesianCoordinate,
    pub max: CartesianCoordinate,
}

impl PointCloud {
    pub fn new(points: Vec<CartesianCoordinate>) -> Self {
        Self {
            points,
            elevation: None,
        }
    }

    /// Creates a cloud where every row also carries an elevation value.
    pub fn with_elevation<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (CartesianCoordinate, f64)>,
    {
        let (points, elevation) = rows.into_iter().unzip();
        Self {
            points,
            elevation: Some(elevation),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the coordinate stored in row `index`, if that row exists.
    pub fn point(&self, index: usize) -> Option<CartesianCoordinate> {
        self.points.get(index).copied()
    }

    pub fn points(&self) -> &[CartesianCoordinate] {
        self.points.as_slice()
    }

    pub fn has_elevation(&self) -> bool {
        self.elevation.is_some()
    }

    /// Returns the elevation column value for row `index`.
    ///
    /// `None` when the cloud has no elevation column or the row is missing.
    pub fn elevation(&self, index: usize) -> Option<f64> {
        self.elevation.as_ref()?.get(index).copied()
    }

    /// The x-y projection of every row, in row order.
    pub fn xy(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(|p| [p.x, p.y]).collect()
    }

    /// Returns the extent of the cloud, or `None` for an empty cloud.
    pub fn bounds(&self) -> Option<Bounds> {
        let first = *self.points.first()?;
        Some(self.points.iter().fold(
            Bounds {
                min: first,
                max: first,
            },
            |b, p| Bounds {
                min: CartesianCoordinate::new(b.min.x.min(p.x), b.min.y.min(p.y), b.min.z.min(p.z)),
                max: CartesianCoordinate::new(b.max.x.max(p.x), b.max.y.max(p.y), b.max.z.max(p.z)),
            },
        ))
    }
}

impl FromIterator<CartesianCoordinate> for PointCloud {
    fn from_iter<I: IntoIterator<Item = CartesianCoordinate>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
