//! Unit tests for publisher-side token storage.
