//! CLI library components for Secret Santa draws.

pub mod draw;
pub mod example;
pub mod logging;
