//! Systems that act on the grid each generation.

pub mod life;
pub mod stagnation;
