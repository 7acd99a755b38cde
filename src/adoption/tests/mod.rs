//! Unit tests for adoption listings.

mod domain_tests;
