use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::components::wing::WingShape;
use crate::utils::{Line, Result, WingError, CHORD_TOLERANCE};

/// Chord lengths at the root and at the tip of one wing half (m).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Chords {
    pub root: f64,
    pub tip: f64,
}

/// Length of the mean aerodynamic chord and the point where the
/// construction diagonals cross; `crossing.x` is the spanwise MAC station.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeanAerodynamicChord {
    pub length: f64,
    pub crossing: Point2<f64>,
}

impl WingShape {
    /// Chord distribution for the given required area.
    ///
    /// The root chord sits on the manufacturing floor for both shapes. The
    /// right trapezoid solves `tip = (area / 2) * (2 / half_span) - root`, so
    /// each half-wing trapezoid carries `area / 2`. The obtuse trapezoid uses
    /// its own design tip chord and ignores the area.
    pub fn chords(&self, area: f64, half_span: f64, minimum_chord: f64) -> Result<Chords> {
        let root = minimum_chord;
        let tip = match self {
            WingShape::RightTrapezoid => (area / 2.0) * (2.0 / half_span) - root,
            WingShape::ObtuseTrapezoid { chord_tip, .. } => *chord_tip,
        };
        let chords = Chords { root, tip };
        if let WingShape::RightTrapezoid = self {
            check_solved_tip(&chords)?;
        }
        debug!(
            "{} chords: root {:.4} m, tip {:.4} m",
            self.name(),
            chords.root,
            chords.tip
        );
        Ok(chords)
    }

    /// Locates the MAC by crossing two construction diagonals drawn over
    /// the half-planform.
    pub fn mean_aerodynamic_chord(
        &self,
        half_span: f64,
        chords: &Chords,
    ) -> Result<MeanAerodynamicChord> {
        let Chords { root, tip } = *chords;
        let mac = match self {
            WingShape::RightTrapezoid => {
                let rising = Line::through(Point2::origin(), Point2::new(half_span, 3.0 * root));
                let falling = Line::through(
                    Point2::new(0.0, 2.0 * root + tip),
                    Point2::new(half_span, 0.0),
                );
                let crossing = crossing_point(&rising, &falling)?;
                // Intercept theorem: taper left between the station and the tip.
                let h = (half_span - crossing.x) * (tip - root) / half_span;
                MeanAerodynamicChord {
                    length: root + h,
                    crossing,
                }
            }
            WingShape::ObtuseTrapezoid { displacement, .. } => {
                let d = *displacement;
                let rising = Line::through(
                    Point2::origin(),
                    Point2::new(half_span, tip + d + 2.0 * root),
                );
                let falling = Line::through(
                    Point2::new(0.0, tip + 2.0 * root),
                    Point2::new(half_span, tip + d - root),
                );
                let crossing = crossing_point(&rising, &falling)?;
                let top = Line::through(Point2::origin(), Point2::new(half_span, tip - root + d));
                let bottom = Line::through(Point2::new(0.0, tip), Point2::new(half_span, tip + d));
                MeanAerodynamicChord {
                    length: (top.at(crossing.x) - bottom.at(crossing.x)).abs(),
                    crossing,
                }
            }
        };
        debug!(
            "{} MAC: {:.4} m at {:.4} m from the root",
            self.name(),
            mac.length,
            mac.crossing.x
        );
        Ok(mac)
    }
}

fn crossing_point(rising: &Line, falling: &Line) -> Result<Point2<f64>> {
    rising.intersect(falling).ok_or_else(|| {
        WingError::DegenerateGeometry(format!(
            "MAC diagonals are parallel (slope {})",
            rising.slope
        ))
    })
}

/// A tip solved from the area must be buildable and tapered away from the root.
fn check_solved_tip(chords: &Chords) -> Result<()> {
    if !chords.tip.is_finite() || chords.tip <= 0.0 {
        return Err(WingError::DegenerateGeometry(format!(
            "non-positive tip chord {:.4} m",
            chords.tip
        )));
    }
    if (chords.tip - chords.root).abs() <= CHORD_TOLERANCE * chords.root.max(chords.tip) {
        return Err(WingError::DegenerateGeometry(format!(
            "untapered planform, root and tip chord are both {:.4} m",
            chords.root
        )));
    }
    if chords.tip < chords.root {
        return Err(WingError::DegenerateGeometry(format!(
            "tip chord {:.4} m is below the {:.4} m manufacturing floor",
            chords.tip, chords.root
        )));
    }
    Ok(())
}
