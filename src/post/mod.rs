//! Lost and found pet reports.
//!
//! A report (a "post") describes an animal that went missing or was found in
//! the area, with an approximate zone, the date of the event, and a way to
//! reach the publisher. Whoever holds the post's edit token may mark it
//! resolved, which hides the contact details. The module follows hexagonal
//! architecture:
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
