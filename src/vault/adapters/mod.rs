//! Adapter implementations for the token vault port.

pub mod json_file;
pub mod memory;
