//! Core storage and primitives shared by every other layer.

pub mod error;
pub mod grid;
pub mod random;
