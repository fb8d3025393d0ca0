// ============================================================================
// XML Codec
// Absent values are omitted from element output and written as no attribute
// ============================================================================
//
// Unlike JSON, an absent value produces no element at all. Decoding treats
// empty text and the literal `null` as "nothing to store" and leaves the
// receiver as it was.

use crate::numeric::{NullableError, NullableFloat, NullableResult};
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesStart, BytesText, Event};
use quick_xml::name::QName;
use quick_xml::{Reader, Writer};
use std::borrow::Cow;
use std::fmt;
use std::io::{BufRead, Write};

fn xml_error(err: impl fmt::Display) -> NullableError {
    NullableError::Xml(err.to_string())
}

impl NullableFloat {
    // ========================================================================
    // Elements
    // ========================================================================

    /// Write `<tag>value</tag>`, or nothing at all when absent.
    pub fn marshal_xml_element<W: Write>(&self, writer: &mut Writer<W>, tag: &str) -> NullableResult<()> {
        let Some(text) = self.format_round_trip() else {
            return Ok(());
        };

        writer
            .create_element(tag)
            .write_text_content(BytesText::new(&text))
            .map_err(xml_error)?;
        Ok(())
    }

    /// Decode the element opened by `start`, consuming events up to and
    /// including its end tag.
    ///
    /// Only the element's own text and CDATA are considered; nested
    /// elements are skipped.
    pub fn unmarshal_xml_element<R: BufRead>(
        &mut self,
        reader: &mut Reader<R>,
        start: &BytesStart<'_>,
    ) -> NullableResult<()> {
        let mut buf = Vec::new();
        let mut text = String::new();
        let mut depth = 0usize;

        loop {
            match reader.read_event_into(&mut buf).map_err(xml_error)? {
                Event::Text(t) if depth == 0 => {
                    text.push_str(&t.unescape().map_err(xml_error)?);
                },
                Event::CData(c) if depth == 0 => {
                    text.push_str(std::str::from_utf8(&c).map_err(xml_error)?);
                },
                Event::Start(_) => depth += 1,
                Event::End(e) => {
                    if depth == 0 {
                        if e.name() != start.name() {
                            return Err(NullableError::Xml(format!(
                                "expected closing tag for {}",
                                String::from_utf8_lossy(start.name().as_ref())
                            )));
                        }
                        break;
                    }
                    depth -= 1;
                },
                Event::Eof => {
                    return Err(NullableError::Xml(
                        "unexpected end of document inside element".to_string(),
                    ));
                },
                _ => {},
            }
            buf.clear();
        }

        self.set_from_xml_text(&text)
    }

    /// Encode as a standalone element document.
    ///
    /// Returns an empty string when absent.
    pub fn to_xml_element_string(&self, tag: &str) -> NullableResult<String> {
        let mut writer = Writer::new(Vec::new());
        self.marshal_xml_element(&mut writer, tag)?;
        String::from_utf8(writer.into_inner()).map_err(xml_error)
    }

    /// Decode the first element of an XML document.
    ///
    /// A self-closing element decodes as absent.
    pub fn from_xml_element_str(xml: &str) -> NullableResult<Self> {
        let mut reader = Reader::from_str(xml);
        let mut buf = Vec::new();
        let mut out = Self::NULL;

        loop {
            match reader.read_event_into(&mut buf).map_err(xml_error)? {
                Event::Start(e) => {
                    let start = e.into_owned();
                    out.unmarshal_xml_element(&mut reader, &start)?;
                    return Ok(out);
                },
                Event::Empty(_) => {
                    out.set_from_xml_text("")?;
                    return Ok(out);
                },
                Event::Eof => {
                    return Err(NullableError::Xml("no element found".to_string()));
                },
                _ => {},
            }
            buf.clear();
        }
    }

    // ========================================================================
    // Attributes
    // ========================================================================

    /// Attribute `name="value"` using the shortest round-trip decimal text,
    /// or `None` when absent.
    pub fn marshal_xml_attr<'a>(&self, name: &'a str) -> Option<Attribute<'a>> {
        self.format_round_trip().map(|text| Attribute {
            key: QName(name.as_bytes()),
            value: Cow::Owned(text.into_bytes()),
        })
    }

    /// Decode an attribute value in place.
    pub fn unmarshal_xml_attr(&mut self, attr: &Attribute<'_>) -> NullableResult<()> {
        let value = attr.unescape_value().map_err(xml_error)?;
        self.set_from_xml_text(&value)
    }
}
