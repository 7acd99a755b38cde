//! Unit tests for image uploads and stores.

mod domain_tests;
