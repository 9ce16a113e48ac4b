// dewpoint=6C, temp=15C, H=43m, P=1008hPa
pub const AIR_DENSITY: f64 = 1.214; // kg/m^3
pub const GRAVITY: f64 = 9.81; // m/s^2

// Required lift as a multiple of the aircraft weight.
pub const WEIGHT_CORRECTION: f64 = 1.5;
// Read off the airfoil polar at the cruise angle of attack.
pub const LIFT_COEFFICIENT: f64 = 0.2;

// Manufacturing limits
pub const MINIMUM_CHORD: f64 = 0.1; // m

// Relative tolerance below which two chords are treated as equal.
pub const CHORD_TOLERANCE: f64 = 1e-9;

pub const GRAMS_PER_KILOGRAM: f64 = 1000.0;
pub const CUBIC_MM_PER_CUBIC_M: f64 = 1e9;
