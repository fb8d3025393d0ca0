// ============================================================================
// Nullable Float Library
// Optional f64 that round-trips SQL NULL, JSON null and absent XML values
// ============================================================================

//! # Nullable Float
//!
//! A single value type, [`NullableFloat`](numeric::NullableFloat), that keeps
//! "absent" and "present with a value" as the two states of one wrapper and
//! carries them across storage and wire boundaries.
//!
//! ## Boundaries
//!
//! | Boundary | Absent | Present |
//! |---|---|---|
//! | generic accessor | `None` | `Some(f64)` |
//! | SQLite (`sql` feature) | `NULL` | `REAL` |
//! | plain text | `null` | shortest round-trip number |
//! | JSON (`serde` feature) | `null` | shortest round-trip number |
//! | XML element (`xml` feature) | element omitted | `<tag>value</tag>` |
//! | XML attribute (`xml` feature) | no attribute | `name="value"` |
//!
//! ## Example
//!
//! ```rust
//! use nullable_float::prelude::*;
//!
//! let mut reading = NullableFloat::default();
//! reading.unmarshal_text(b"2.5").unwrap();
//! assert_eq!(reading.interface(), Some(2.5));
//!
//! reading.unmarshal_text(b"null").unwrap();
//! assert!(reading.is_null());
//! ```

mod codec;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{NullableError, NullableFloat, NullableResult};
}
