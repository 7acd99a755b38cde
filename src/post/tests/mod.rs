//! Unit tests for lost and found reports.
