//! Property-based tests for selection, sorting and projection

mod projection;
