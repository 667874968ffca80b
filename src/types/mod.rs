//! Core types for Lectio.

pub mod essay;
pub mod generation;

pub use essay::*;
pub use generation::*;
