//! Photo uploads attached to listings.
//!
//! Publishers may attach one photo per listing. Uploads are validated in the
//! domain, written through the [`ports::ImageStore`] port, and referenced
//! from listings by their public URL.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
