//! Unit tests for display projections.

mod contact_tests;
