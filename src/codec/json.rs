// ============================================================================
// JSON Codec
// `null` for absent values, shortest round-trip number otherwise
// ============================================================================

use crate::numeric::{NullableFloat, NullableResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl NullableFloat {
    /// Encode as JSON text: `null` when absent, otherwise a JSON number.
    ///
    /// JSON has no NaN or infinity, so non-finite values encode as `null`.
    pub fn marshal_json(&self) -> String {
        serde_json::Value::from(*self).to_string()
    }

    /// Decode raw JSON text in place.
    ///
    /// Accepts the `null` literal or any text that parses as an f64. On
    /// failure the value is left absent.
    pub fn unmarshal_json(&mut self, text: &[u8]) -> NullableResult<()> {
        self.unmarshal_text(text)
    }
}

impl From<NullableFloat> for serde_json::Value {
    fn from(value: NullableFloat) -> Self {
        match value.interface() {
            Some(v) => serde_json::Value::from(v),
            None => serde_json::Value::Null,
        }
    }
}

impl Serialize for NullableFloat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.interface() {
            Some(v) => serializer.serialize_f64(v),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for NullableFloat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<f64>::deserialize(deserializer).map(NullableFloat::from)
    }
}
