//! Unit tests for the shared listing vocabulary.

mod domain_tests;
