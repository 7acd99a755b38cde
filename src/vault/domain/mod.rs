//! Keys under which publisher tokens are stored.

mod key;

pub use key::TokenKey;
