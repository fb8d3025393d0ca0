// ============================================================================
// SQL Driver Codec
// Scan from and bind to SQLite values through rusqlite
// ============================================================================

use crate::numeric::{parse_float, NullableError, NullableFloat, NullableResult};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, Value, ValueRef};

impl NullableFloat {
    /// Scan a driver value in place.
    ///
    /// `NULL` marks the value absent, `REAL` and `INTEGER` are taken as
    /// floats, `TEXT` is parsed as an f64. Anything else is a
    /// [`NullableError::Conversion`] and leaves the receiver unchanged.
    pub fn scan(&mut self, raw: ValueRef<'_>) -> NullableResult<()> {
        match Self::column_result(raw) {
            Ok(scanned) => {
                if scanned.is_null() {
                    tracing::trace!("scanned SQL NULL");
                }
                *self = scanned;
                Ok(())
            },
            Err(err) => {
                tracing::debug!("cannot scan {:?} as float: {}", raw.data_type(), err);
                Err(NullableError::Conversion(err.to_string()))
            },
        }
    }

    /// Scan an owned driver value in place. See [`NullableFloat::scan`].
    pub fn scan_value(&mut self, raw: &Value) -> NullableResult<()> {
        self.scan(ValueRef::from(raw))
    }

    /// Driver value for parameter binding: `NULL` when absent, `REAL` otherwise.
    pub fn driver_value(&self) -> Value {
        match self.interface() {
            Some(v) => Value::Real(v),
            None => Value::Null,
        }
    }
}

impl FromSql for NullableFloat {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Text(bytes) => {
                let text = std::str::from_utf8(bytes).map_err(|e| FromSqlError::Other(Box::new(e)))?;
                parse_float(text)
                    .map(NullableFloat::new)
                    .map_err(|e| FromSqlError::Other(Box::new(e)))
            },
            other => Option::<f64>::column_result(other).map(NullableFloat::from),
        }
    }
}

impl ToSql for NullableFloat {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::Owned(self.driver_value()))
    }
}
