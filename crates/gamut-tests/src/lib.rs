//! Integration tests for the gamut mapping crates.
//!
//! End-to-end checks across color primitives, the method registry and the
//! sweep harness.
