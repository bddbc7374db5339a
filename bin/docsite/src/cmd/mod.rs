//! Command implementations.

pub mod check;
pub mod render;
pub mod serve;
