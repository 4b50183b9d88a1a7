//! Domain data: what gets seeded, how it is coloured, how it is configured.

pub mod config;
pub mod palette;
pub mod patterns;
