//! Adapter implementations for adoption listing ports.

pub mod memory;
pub mod postgres;
