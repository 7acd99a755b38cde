//! Adapter implementations for the image store port.

pub mod filesystem;
pub mod memory;
