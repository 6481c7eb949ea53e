//! The morph engine proper: smoothed per-group formedness, static entity
//! populations, and the per-tick transform solve.

pub mod population;
pub mod solver;
pub mod transition;
