use cgmath::InnerSpace;
use log::trace;
use tinvol_mesh::CartesianCoordinate;

use crate::error::{Result, VolumeError};
use crate::plane::Plane;
use crate::segment::{LineEquation, PlanarSegment};

/// Relative size of a cross product, against the edges that produced it,
/// below which the edges are taken to be parallel.
const COLLINEAR_TOLERANCE: f64 = 1e-12;

/// A triangle in 3D cartesian space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub p0: CartesianCoordinate,
    pub p1: CartesianCoordinate,
    pub p2: CartesianCoordinate,
}

/// A vertical slice of a triangle footprint: `from <= x <= to`, with `y`
/// running from the `lower` line to the `upper` line.
///
/// `lower` is not required to lie below `upper`. Swapping them only flips
/// the sign of the integral.
#[derive(Debug, Clone, Copy)]
struct Strip {
    from: f64,
    to: f64,
    lower: LineEquation,
    upper: LineEquation,
}

impl Strip {
    /// Integrates `plane` over the strip, first along y and then along x.
    ///
    /// The integrand is affine, so the inner integral is a quadratic in x:
    ///
    /// ```text
    ///   ∫ p + q x + r y dy  (y from m1 x + k1 to m2 x + k2)
    ///     = c0 + c1 x + c2 x²
    /// ```
    ///
    /// and the outer integral is its antiderivative evaluated at the strip
    /// bounds. A vertical bounding line means the strip has no width and
    /// contributes nothing.
    fn integrate(&self, plane: &Plane) -> f64 {
        let (
            LineEquation::Line {
                slope: m1,
                intercept: k1,
            },
            LineEquation::Line {
                slope: m2,
                intercept: k2,
            },
        ) = (self.lower, self.upper)
        else {
            return 0.0;
        };
        let (p, q, r) = plane.coefficients();
        let dm = m2 - m1;
        let dk = k2 - k1;

        let c0 = p * dk + r / 2.0 * (k2 * k2 - k1 * k1);
        let c1 = p * dm + q * dk + r * (m2 * k2 - m1 * k1);
        let c2 = q * dm + r / 2.0 * (m2 * m2 - m1 * m1);

        let (x0, x1) = (self.from, self.to);
        c0 * (x1 - x0) + c1 / 2.0 * (x1 * x1 - x0 * x0) + c2 / 3.0 * (x1.powi(3) - x0.powi(3))
    }
}

impl Triangle {
    pub fn new(p0: CartesianCoordinate, p1: CartesianCoordinate, p2: CartesianCoordinate) -> Self {
        Self { p0, p1, p2 }
    }

    pub fn points(&self) -> [CartesianCoordinate; 3] {
        [self.p0, self.p1, self.p2]
    }

    /// The vertices ordered ascending on x, then y, then z.
    pub fn sorted_points(&self) -> [CartesianCoordinate; 3] {
        let mut points = self.points();
        points.sort();
        points
    }

    /// Returns the plane through the three vertices as a height function.
    ///
    /// The normal is `(p1 - p0) x (p2 - p1)` and the plane is anchored at
    /// `p0`.
    pub fn plane(&self) -> Result<Plane> {
        Plane::through(self.p0, self.p1, self.p2)
            .ok_or(VolumeError::DegeneratePlane { triangle: *self })
    }

    /// The volume between the triangle's plane and `z = 0`, over the
    /// triangle's footprint in the x-y plane.
    ///
    /// With the vertices sorted on x into `a`, `b`, `c`, the footprint is
    /// cut at `x = b.x` into two strips:
    ///
    /// ```text
    ///          b
    ///         /|\
    ///        / | \
    ///       /  |  \
    ///      a---+---c
    ///       (1)  (2)
    /// ```
    ///
    /// Strip 1 spans `a.x..b.x` between edges `ac` and `ab`, strip 2 spans
    /// `b.x..c.x` between `ac` and `bc`. The magnitudes of the two strip
    /// integrals are summed, so a plane that crosses `z = 0` inside a strip
    /// does not cancel across the strips.
    ///
    /// Returns 0 for footprints without width (all x equal) and for
    /// zero-area triangles: coincident vertices, or vertices collinear up to
    /// floating point rounding. Any other triangle in a vertical plane is a
    /// [`VolumeError::DegeneratePlane`].
    pub fn volume(&self) -> Result<f64> {
        let [a, b, c] = self.sorted_points();

        // Integrate with `a` projected onto the origin. The integrand does not
        // change under an x-y translation, and the cubic terms stay small for
        // georeferenced coordinates.
        let [a, b, c] = [a, b, c].map(|p| p.shifted(-a.x, -a.y));

        let long = PlanarSegment::new(a, c).equation();
        if long == LineEquation::Vertical {
            trace!("triangle {} has no footprint width", self);
            return Ok(0.0);
        }
        let (ab, bc) = (b - a, c - b);
        if ab.cross(bc).magnitude() <= COLLINEAR_TOLERANCE * ab.magnitude() * bc.magnitude() {
            trace!("triangle {} has zero area", self);
            return Ok(0.0);
        }
        let strips = [
            Strip {
                from: a.x,
                to: b.x,
                lower: long,
                upper: PlanarSegment::new(a, b).equation(),
            },
            Strip {
                from: b.x,
                to: c.x,
                lower: long,
                upper: PlanarSegment::new(b, c).equation(),
            },
        ];

        let plane =
            Plane::through(a, b, c).ok_or(VolumeError::DegeneratePlane { triangle: *self })?;

        let volume: f64 = strips.iter().map(|s| s.integrate(&plane).abs()).sum();
        trace!("triangle {} encloses {}", self, volume);
        Ok(volume)
    }
}

impl std::fmt::Display for Triangle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}, {}]", self.p0, self.p1, self.p2)
    }
}
