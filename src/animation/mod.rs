mod wiggle;

pub use wiggle::{PHASE_PER_COORDINATE, WiggleAnimator, wiggle_points};
