use tinvol_mesh::{CartesianCoordinate, Vector3};

/// A non-vertical plane written as a height function `z = f(x, y)`.
///
/// The plane is kept in point-normal form: `a (x - xo) + b (y - yo) +
/// c (z - zo) = 0` with normal `(a, b, c)` and anchor `(xo, yo, zo)`.
/// `c` is never zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: Vector3,
    origin: CartesianCoordinate,
}

impl Plane {
    /// The plane containing `a`, `b` and `c`, anchored at `a`.
    ///
    /// The normal is `(b - a) x (c - b)`. Returns `None` when its z component
    /// is zero: the points span a vertical plane, or are collinear.
    pub fn through(
        a: CartesianCoordinate,
        b: CartesianCoordinate,
        c: CartesianCoordinate,
    ) -> Option<Self> {
        let ab = b - a;
        let bc = c - b;
        let normal = ab.cross(bc);
        if normal.z == 0.0 {
            return None;
        }
        Some(Self { normal, origin: a })
    }

    /// `z(x, y) = (-a (x - xo) - b (y - yo)) / c + zo`
    pub fn height(&self, x: f64, y: f64) -> f64 {
        let Vector3 { x: a, y: b, z: c } = self.normal;
        (-a * (x - self.origin.x) - b * (y - self.origin.y)) / c + self.origin.z
    }

    /// The height function expanded to `z = p + q x + r y`, as `(p, q, r)`.
    pub fn coefficients(&self) -> (f64, f64, f64) {
        let Vector3 { x: a, y: b, z: c } = self.normal;
        let q = -a / c;
        let r = -b / c;
        let p = self.origin.z - q * self.origin.x - r * self.origin.y;
        (p, q, r)
    }
}

#[cfg(test)]
mod tests {
    use float_eq::assert_float_eq;

    use super::*;

    fn p(x: f64, y: f64, z: f64) -> CartesianCoordinate {
        CartesianCoordinate::new(x, y, z)
    }

    #[test]
    fn horizontal_plane() {
        let plane = Plane::through(p(0.0, 0.0, 3.0), p(1.0, 0.0, 3.0), p(0.0, 1.0, 3.0)).unwrap();
        assert_float_eq!(plane.height(10.0, -7.0), 3.0, abs <= 1e-12);
        let (p0, q, r) = plane.coefficients();
        assert_float_eq!(p0, 3.0, abs <= 1e-12);
        assert_float_eq!(q, 0.0, abs <= 1e-12);
        assert_float_eq!(r, 0.0, abs <= 1e-12);
    }

    #[test]
    fn coefficients_agree_with_height() {
        let plane = Plane::through(p(1.0, 2.0, 0.5), p(4.0, -1.0, 2.0), p(0.0, 5.0, -3.0)).unwrap();
        let (p0, q, r) = plane.coefficients();
        for (x, y) in [(0.0, 0.0), (1.5, -2.0), (-8.0, 3.25)] {
            assert_float_eq!(plane.height(x, y), p0 + q * x + r * y, abs <= 1e-9);
        }
    }

    #[test]
    fn vertical_and_collinear_points_have_no_height_function() {
        // Points in the plane x = y.
        assert_eq!(
            None,
            Plane::through(p(0.0, 0.0, 0.0), p(1.0, 1.0, 0.0), p(2.0, 2.0, 5.0))
        );
        // Collinear in 3D.
        assert_eq!(
            None,
            Plane::through(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0), p(2.0, 2.0, 2.0))
        );
    }
}
