use std::cmp::Ordering;

use ordered_float::OrderedFloat;

pub type Vector3 = cgmath::Vector3<f64>;

/// A point in a right-handed 3D cartesian system.
///
/// Coordinates are totally ordered on `x`, then `y`, then `z`. Floats are
/// compared with `ordered_float` semantics, so `-0.0 == 0.0` and NaN sorts
/// above every number; equality agrees with that order.
#[derive(Debug, Copy, Clone, Default)]
pub struct CartesianCoordinate {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl CartesianCoordinate {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the same point with `dz` added to its height.
    pub fn raised(self, dz: f64) -> Self {
        Self {
            z: self.z + dz,
            ..self
        }
    }

    /// Returns the same point moved by `(dx, dy)` in the x-y plane.
    pub fn shifted(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    pub fn to_vector(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    fn key(&self) -> (OrderedFloat<f64>, OrderedFloat<f64>, OrderedFloat<f64>) {
        (
            OrderedFloat(self.x),
            OrderedFloat(self.y),
            OrderedFloat(self.z),
        )
    }
}

impl PartialEq for CartesianCoordinate {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for CartesianCoordinate {}

impl PartialOrd for CartesianCoordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CartesianCoordinate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl std::ops::Sub for CartesianCoordinate {
    type Output = Vector3;

    fn sub(self, other: Self) -> Vector3 {
        self.to_vector() - other.to_vector()
    }
}

impl From<(f64, f64, f64)> for CartesianCoordinate {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self { x, y, z }
    }
}

impl std::fmt::Display for CartesianCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
