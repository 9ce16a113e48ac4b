use nalgebra::Point2;

use crate::components::wing::WingResult;
use crate::utils::{polygon_area_centroid, Result, WingError};

/// Outline of one wing half. `x` runs along the span from the root, `y`
/// runs chordwise from the root leading edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Planform {
    /// Root LE, tip LE, tip TE, root TE.
    pub vertices: [Point2<f64>; 4],
}

impl Planform {
    pub fn new(half_span: f64, chord_root: f64, chord_tip: f64, displacement: f64) -> Self {
        Self {
            vertices: [
                Point2::new(0.0, 0.0),
                Point2::new(half_span, displacement),
                Point2::new(half_span, displacement + chord_tip),
                Point2::new(0.0, chord_root),
            ],
        }
    }

    pub fn from_result(result: &WingResult) -> Self {
        Self::new(
            result.half_span,
            result.chord_root,
            result.chord_tip,
            result.shape.displacement(),
        )
    }

    /// Area of this half-wing; the whole wing has twice this.
    pub fn area(&self) -> Result<f64> {
        Ok(self.area_centroid()?.0)
    }

    /// Geometric centre of the half-planform; `x` is the spanwise y-mean.
    pub fn centroid(&self) -> Result<Point2<f64>> {
        Ok(self.area_centroid()?.1)
    }

    fn area_centroid(&self) -> Result<(f64, Point2<f64>)> {
        polygon_area_centroid(&self.vertices)
            .ok_or_else(|| WingError::DegenerateGeometry("planform has zero area".to_string()))
    }
}
