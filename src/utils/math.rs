use nalgebra::Point2;

/// A straight line `y = slope * x + intercept` in the planform plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub slope: f64,
    pub intercept: f64,
}

impl Line {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Line through two points with distinct x coordinates.
    pub fn through(start: Point2<f64>, end: Point2<f64>) -> Self {
        let slope = (end.y - start.y) / (end.x - start.x);
        Self::new(slope, start.y - slope * start.x)
    }

    #[inline]
    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Crossing point of two lines, `None` when they are parallel.
    pub fn intersect(&self, other: &Line) -> Option<Point2<f64>> {
        let denominator = self.slope - other.slope;
        if denominator == 0.0 || !denominator.is_finite() {
            return None;
        }
        let x = (other.intercept - self.intercept) / denominator;
        Some(Point2::new(x, self.at(x)))
    }
}

/// Area and centroid of a simple polygon (shoelace formula).
/// Returns `None` for polygons with zero area.
pub fn polygon_area_centroid(vertices: &[Point2<f64>]) -> Option<(f64, Point2<f64>)> {
    let mut twice_area = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;
    for (i, p) in vertices.iter().enumerate() {
        let q = vertices[(i + 1) % vertices.len()];
        let cross = p.x * q.y - q.x * p.y;
        twice_area += cross;
        cx += (p.x + q.x) * cross;
        cy += (p.y + q.y) * cross;
    }
    if twice_area == 0.0 {
        return None;
    }
    let area = twice_area / 2.0;
    Some((area.abs(), Point2::new(cx / (6.0 * area), cy / (6.0 * area))))
}
