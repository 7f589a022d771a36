//! Property-based tests for term parsing and polynomial insertion.
