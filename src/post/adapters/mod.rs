//! Adapter implementations for report persistence.

pub mod memory;
pub mod postgres;
