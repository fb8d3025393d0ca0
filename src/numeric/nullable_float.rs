// ============================================================================
// Nullable Float
// Optional f64 with SQL NULL semantics and a text/JSON/XML boundary shape
// ============================================================================

use super::errors::{NullableError, NullableResult};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Literal used for an absent value in JSON and plain text.
pub(crate) const NULL_LITERAL: &str = "null";

/// Nullable 64-bit float.
///
/// Internally an `Option<f64>`: `None` is SQL `NULL` / JSON `null` / an
/// omitted XML node. The `(value, valid)` pair familiar from database
/// drivers is available through [`NullableFloat::into_parts`] and
/// [`NullableFloat::from_parts`].
///
/// # Example
/// ```
/// use nullable_float::numeric::NullableFloat;
///
/// let price = NullableFloat::new(3.25);
/// assert_eq!(price.interface(), Some(3.25));
///
/// let missing = NullableFloat::default();
/// assert!(!missing.is_valid());
/// assert_eq!(missing.to_string(), "null");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[repr(transparent)]
pub struct NullableFloat(Option<f64>);

impl NullableFloat {
    /// Absent value.
    pub const NULL: Self = Self(None);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a present value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(Some(value))
    }

    /// Create an absent value.
    #[inline]
    pub const fn null() -> Self {
        Self::NULL
    }

    /// Create from the driver-style `(value, valid)` pair.
    ///
    /// When `valid` is false the value is discarded.
    #[inline]
    pub const fn from_parts(value: f64, valid: bool) -> Self {
        if valid {
            Self(Some(value))
        } else {
            Self(None)
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Generic value accessor: `None` when absent, otherwise the float.
    #[inline]
    pub const fn interface(self) -> Option<f64> {
        self.0
    }

    /// Whether a value is present.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0.is_some()
    }

    /// Whether the value is absent.
    #[inline]
    pub const fn is_null(self) -> bool {
        self.0.is_none()
    }

    /// Split into the driver-style `(value, valid)` pair.
    ///
    /// An absent value reports `0.0`, which must not be read as data.
    #[inline]
    pub fn into_parts(self) -> (f64, bool) {
        match self.0 {
            Some(value) => (value, true),
            None => (0.0, false),
        }
    }

    /// The value, or `default` when absent.
    #[inline]
    pub fn unwrap_or(self, default: f64) -> f64 {
        self.0.unwrap_or(default)
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Store a present value.
    #[inline]
    pub fn set(&mut self, value: f64) {
        self.0 = Some(value);
    }

    /// Mark the value absent.
    #[inline]
    pub fn clear(&mut self) {
        self.0 = None;
    }

    /// Take the value out, leaving the receiver absent.
    #[inline]
    pub fn take(&mut self) -> Option<f64> {
        self.0.take()
    }

    // ========================================================================
    // Plain Text
    // ========================================================================

    /// Decode plain text in place.
    ///
    /// `null` marks the value absent. Anything else must parse as an f64;
    /// on failure the value is left absent and the parse error returned.
    pub fn unmarshal_text(&mut self, text: &[u8]) -> NullableResult<()> {
        let decoded = std::str::from_utf8(text)
            .map_err(NullableError::InvalidUtf8)
            .and_then(|text| {
                if text == NULL_LITERAL {
                    Ok(None)
                } else {
                    parse_float(text).map(Some)
                }
            });

        match decoded {
            Ok(value) => {
                self.0 = value;
                Ok(())
            },
            Err(err) => {
                self.0 = None;
                Err(err)
            },
        }
    }

    /// Apply the XML text rule shared by elements and attributes.
    ///
    /// Empty text and `null` leave the receiver untouched, including a
    /// previously present value. Other text must parse as an f64.
    pub fn set_from_xml_text(&mut self, text: &str) -> NullableResult<()> {
        if text.is_empty() || text == NULL_LITERAL {
            tracing::trace!("xml text {:?} treated as absent", text);
            return Ok(());
        }

        let value = parse_float(text)?;
        self.0 = Some(value);
        Ok(())
    }

    /// Shortest decimal text that parses back to the same bits, without
    /// exponent notation. `None` when absent.
    pub fn format_round_trip(self) -> Option<String> {
        self.0.map(|value| value.to_string())
    }

    // ========================================================================
    // Decimal Conversion (API boundaries)
    // ========================================================================

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// Absent, non-finite and out-of-range values map to `None`.
    pub fn to_decimal(self) -> Option<Decimal> {
        self.0.and_then(Decimal::from_f64)
    }

    /// Create a present value from a `rust_decimal::Decimal`.
    pub fn from_decimal(d: Decimal) -> Self {
        Self(d.to_f64())
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Parse numeric text as an f64, rejecting finite literals that overflow.
///
/// `str::parse` rounds `1e400` to infinity; only the `inf`/`infinity`
/// spellings may produce an infinite value.
pub(crate) fn parse_float(text: &str) -> NullableResult<f64> {
    let value = text.parse::<f64>()?;
    if value.is_infinite() && !is_infinity_literal(text) {
        return Err(NullableError::OutOfRange(text.to_string()));
    }
    Ok(value)
}

fn is_infinity_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl From<f64> for NullableFloat {
    #[inline]
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Option<f64>> for NullableFloat {
    #[inline]
    fn from(value: Option<f64>) -> Self {
        Self(value)
    }
}

impl From<NullableFloat> for Option<f64> {
    #[inline]
    fn from(value: NullableFloat) -> Self {
        value.0
    }
}

impl fmt::Display for NullableFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{}", value),
            None => f.write_str(NULL_LITERAL),
        }
    }
}

impl FromStr for NullableFloat {
    type Err = NullableError;

    /// Parse plain text: `null` is absent, anything else must be an f64.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut out = Self::NULL;
        out.unmarshal_text(s.as_bytes())?;
        Ok(out)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_is_valid() {
        let x = NullableFloat::new(3.25);
        assert!(x.is_valid());
        assert_eq!(x.interface(), Some(3.25));
    }

    #[test]
    fn test_default_is_null() {
        let x = NullableFloat::default();
        assert!(x.is_null());
        assert_eq!(x.interface(), None);
        assert_eq!(x, NullableFloat::NULL);
    }

    #[test]
    fn test_parts() {
        assert_eq!(NullableFloat::from_parts(2.5, true).into_parts(), (2.5, true));
        assert_eq!(NullableFloat::from_parts(2.5, false).into_parts(), (0.0, false));
        assert_eq!(NullableFloat::from_parts(2.5, false), NullableFloat::null());
    }

    #[test]
    fn test_mutation() {
        let mut x = NullableFloat::null();
        x.set(1.5);
        assert_eq!(x.unwrap_or(0.0), 1.5);
        assert_eq!(x.take(), Some(1.5));
        assert!(x.is_null());
        x.set(2.0);
        x.clear();
        assert_eq!(x.unwrap_or(-1.0), -1.0);
    }

    #[test]
    fn test_unmarshal_text() {
        let mut x = NullableFloat::null();
        x.unmarshal_text(b"2.5").unwrap();
        assert_eq!(x.interface(), Some(2.5));

        x.unmarshal_text(b"null").unwrap();
        assert!(x.is_null());
    }

    #[test]
    fn test_unmarshal_text_invalid_clears() {
        let mut x = NullableFloat::new(1.0);
        let err = x.unmarshal_text(b"abc").unwrap_err();
        assert!(matches!(err, NullableError::Parse(_)));
        assert!(x.is_null());
    }

    #[test]
    fn test_unmarshal_text_out_of_range_clears() {
        for input in ["1e400", "-1e999"] {
            let mut x = NullableFloat::new(1.0);
            let err = x.unmarshal_text(input.as_bytes()).unwrap_err();
            assert_eq!(err, NullableError::OutOfRange(input.to_string()));
            assert!(x.is_null());
        }
    }

    #[test]
    fn test_unmarshal_text_infinity_literals() {
        let mut x = NullableFloat::null();
        x.unmarshal_text(b"inf").unwrap();
        assert_eq!(x.interface(), Some(f64::INFINITY));
        x.unmarshal_text(b"-Infinity").unwrap();
        assert_eq!(x.interface(), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn test_unmarshal_text_invalid_utf8() {
        let mut x = NullableFloat::new(1.0);
        let err = x.unmarshal_text(&[b'1', 0xff]).unwrap_err();
        assert!(matches!(err, NullableError::InvalidUtf8(_)));
        assert!(err.is_parse_error());
        assert!(x.is_null());
    }

    #[test]
    fn test_parse_float_underflow_is_zero() {
        assert_eq!(parse_float("1e-400").unwrap(), 0.0);
    }

    #[test]
    fn test_unmarshal_text_empty_is_error() {
        let mut x = NullableFloat::null();
        assert!(x.unmarshal_text(b"").is_err());
    }

    #[test]
    fn test_xml_text_rule_keeps_prior_state() {
        let mut x = NullableFloat::new(7.0);
        x.set_from_xml_text("").unwrap();
        assert_eq!(x.interface(), Some(7.0));
        x.set_from_xml_text("null").unwrap();
        assert_eq!(x.interface(), Some(7.0));

        let err = x.set_from_xml_text("notanumber").unwrap_err();
        assert!(matches!(err, NullableError::Parse(_)));
        assert_eq!(x.interface(), Some(7.0));

        for input in ["1e400", "-1e999"] {
            let err = x.set_from_xml_text(input).unwrap_err();
            assert_eq!(err, NullableError::OutOfRange(input.to_string()));
            assert_eq!(x.interface(), Some(7.0));
        }

        x.set_from_xml_text("-0.25").unwrap();
        assert_eq!(x.interface(), Some(-0.25));
    }

    #[test]
    fn test_display() {
        assert_eq!(NullableFloat::new(3.25).to_string(), "3.25");
        assert_eq!(NullableFloat::new(1.0).to_string(), "1");
        assert_eq!(NullableFloat::new(1e21).to_string(), "1000000000000000000000");
        assert_eq!(NullableFloat::null().to_string(), "null");
    }

    #[test]
    fn test_from_str() {
        let x: NullableFloat = "42.125".parse().unwrap();
        assert_eq!(x.interface(), Some(42.125));

        let y: NullableFloat = "null".parse().unwrap();
        assert!(y.is_null());

        let z: Result<NullableFloat, _> = "not_a_number".parse();
        assert!(matches!(z, Err(NullableError::Parse(_))));
    }

    #[test]
    fn test_format_round_trip() {
        assert_eq!(NullableFloat::new(0.1).format_round_trip().as_deref(), Some("0.1"));
        assert_eq!(NullableFloat::null().format_round_trip(), None);
    }

    #[test]
    fn test_decimal_conversion() {
        let d = Decimal::new(25, 1); // 2.5
        let x = NullableFloat::from_decimal(d);
        assert_eq!(x.interface(), Some(2.5));
        assert_eq!(x.to_decimal(), Some(d));

        assert_eq!(NullableFloat::null().to_decimal(), None);
        assert_eq!(NullableFloat::new(f64::NAN).to_decimal(), None);
    }

    proptest! {
        #[test]
        fn display_parses_back_bit_identical(value in any::<f64>().prop_filter("finite", |v| v.is_finite())) {
            let text = NullableFloat::new(value).to_string();
            let back: NullableFloat = text.parse().unwrap();
            prop_assert_eq!(back.interface().map(f64::to_bits), Some(value.to_bits()));
        }

        #[test]
        fn display_never_uses_exponent(value in any::<f64>().prop_filter("finite", |v| v.is_finite())) {
            let text = NullableFloat::new(value).to_string();
            prop_assert!(!text.contains('e') && !text.contains('E'));
        }
    }
}
