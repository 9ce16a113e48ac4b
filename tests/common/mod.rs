
// Re-export
pub use assertions::{assert_mac_within_chords, assert_result_valid, assert_trapezoid_area};

pub use helpers::*;
