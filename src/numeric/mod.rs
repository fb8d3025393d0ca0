// ============================================================================
// Numeric Module
// Nullable 64-bit float with explicit present/absent state
// ============================================================================
//
// This module provides:
// - NullableFloat: Option<f64> wrapper exposing a validity flag at boundaries
// - NullableError: Error types for scan, parse and encoding failures
//
// Design principles:
// - Absent values carry no stale payload (Option, not a flag beside a value)
// - All decoding returns Result (no panics)
// - Text formatting uses the shortest round-trip representation

mod errors;
mod nullable_float;

pub use errors::{NullableError, NullableResult};
pub use nullable_float::NullableFloat;

#[cfg(feature = "sql")]
pub(crate) use nullable_float::parse_float;
