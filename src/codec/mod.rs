// ============================================================================
// Codec Module
// Boundary protocols for NullableFloat
// ============================================================================
//
// Each codec adds inherent methods and trait impls to NullableFloat:
// - json: `null` / JSON number, serde Serialize + Deserialize
// - sql:  SQLite driver values (rusqlite FromSql + ToSql)
// - xml:  elements (omitted when absent) and attributes (quick-xml)

#[cfg(feature = "serde")]
mod json;
#[cfg(feature = "sql")]
mod sql;
#[cfg(feature = "xml")]
mod xml;
