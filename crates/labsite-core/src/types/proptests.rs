//! Property-based tests for row grouping.
