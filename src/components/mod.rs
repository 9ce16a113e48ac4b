mod mass;
mod wing;

pub use mass::{ComponentMass, FoamPanels, MassBreakdown, MassBudget, SparBeam};
pub use wing::*;
