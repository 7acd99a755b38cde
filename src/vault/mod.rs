//! Publisher-side storage of edit tokens.
//!
//! When a listing is published its creator receives the edit token exactly
//! once. The creator's client keeps it under a well-known key
//! (`edit_token_<id>` for reports, `adoption_edit_token_<id>` for adoptions)
//! and later presents it to resolve or adopt the listing. This module models
//! that client-side storage so any Rust client (or test) can play the
//! publisher's role.

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
