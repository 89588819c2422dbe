use tinvol_mesh::CartesianCoordinate;

/// The straight line through a segment's endpoints, in the x-y plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineEquation {
    /// `y = slope * x + intercept`
    Line { slope: f64, intercept: f64 },
    /// Both endpoints share x; the line is parallel to the y axis and has
    /// no slope-intercept form.
    Vertical,
}

/// A triangle edge projected onto the x-y plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarSegment {
    pub point_a: CartesianCoordinate,
    pub point_b: CartesianCoordinate,
}

impl PlanarSegment {
    pub fn new(point_a: CartesianCoordinate, point_b: CartesianCoordinate) -> Self {
        Self { point_a, point_b }
    }

    /// Returns the equation of the line connecting `point_a` to `point_b`.
    ///
    /// Endpoints with exactly equal x give [`LineEquation::Vertical`]; no
    /// tolerance is applied.
    pub fn equation(&self) -> LineEquation {
        let dx = self.point_b.x - self.point_a.x;
        if dx == 0.0 {
            return LineEquation::Vertical;
        }
        let slope = (self.point_b.y - self.point_a.y) / dx;
        LineEquation::Line {
            slope,
            intercept: self.point_a.y - slope * self.point_a.x,
        }
    }
}

#[cfg(test)]
mod tests {
    use float_eq::assert_float_eq;

    use super::*;

    fn p(x: f64, y: f64) -> CartesianCoordinate {
        CartesianCoordinate::new(x, y, 0.0)
    }

    #[test]
    fn equal_x_is_vertical() {
        for (a, b) in [
            (p(0.0, 0.0), p(0.0, 5.0)),
            (p(-3.25, 1.0), p(-3.25, -1.0)),
            (p(1e9, 2.0), p(1e9, 2.0)),
        ] {
            assert_eq!(LineEquation::Vertical, PlanarSegment::new(a, b).equation());
            assert_eq!(LineEquation::Vertical, PlanarSegment::new(b, a).equation());
        }
    }

    #[test]
    fn slope_and_intercept() {
        let LineEquation::Line { slope, intercept } =
            PlanarSegment::new(p(1.0, 3.0), p(3.0, 7.0)).equation()
        else {
            panic!("expected a line");
        };
        assert_float_eq!(slope, 2.0, abs <= 1e-12);
        assert_float_eq!(intercept, 1.0, abs <= 1e-12);
    }

    #[test]
    fn line_passes_through_both_endpoints() {
        let a = p(-2.0, 0.5);
        let b = p(4.0, -1.0);
        let LineEquation::Line { slope, intercept } = PlanarSegment::new(a, b).equation() else {
            panic!("expected a line");
        };
        assert_float_eq!(slope * a.x + intercept, a.y, abs <= 1e-12);
        assert_float_eq!(slope * b.x + intercept, b.y, abs <= 1e-12);
    }

    #[test]
    fn heights_are_ignored() {
        let flat = PlanarSegment::new(p(0.0, 0.0), p(2.0, 2.0)).equation();
        let steep = PlanarSegment::new(
            CartesianCoordinate::new(0.0, 0.0, -40.0),
            CartesianCoordinate::new(2.0, 2.0, 90.0),
        )
        .equation();
        assert_eq!(flat, steep);
    }
}
