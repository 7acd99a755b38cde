//! Adoption listings.
//!
//! A shelter or neighbour lists an animal looking for a home. Whoever holds
//! the listing's edit token may mark it adopted. Any visitor may report a
//! listing; once enough reports accumulate the contact details are hidden
//! while the community reviews it.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
