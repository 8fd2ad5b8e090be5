//! Snapshot store implementations.

pub mod fs;
