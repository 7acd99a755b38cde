//! In-memory adapters for report persistence.

mod post;

pub use post::InMemoryPostRepository;
