//! Tag-per-field XML rendering.

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Cursor;

use crate::error::{SerializerError, SerializerResult};
use crate::introspect::Introspect;

/// Renders an introspected record as an XML document: the root element is
/// named after the record's type, with one child element per field holding
/// the field's textual value. Indentation is cosmetic; reserved characters
/// in values are escaped by the writer.
#[derive(Debug, Default, Clone)]
pub struct XmlSerializer;

impl XmlSerializer {
    pub fn new() -> Self {
        Self
    }

    pub fn serialize<T: Introspect>(&self, record: &T) -> SerializerResult<String> {
        let root = T::type_name();
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 4);

        writer.write_event(Event::Start(BytesStart::new(root)))?;
        for field in record.fields() {
            writer.write_event(Event::Start(BytesStart::new(field.name)))?;
            writer.write_event(Event::Text(BytesText::new(&field.value)))?;
            writer.write_event(Event::End(BytesEnd::new(field.name)))?;
        }
        writer.write_event(Event::End(BytesEnd::new(root)))?;

        String::from_utf8(writer.into_inner().into_inner())
            .map_err(|e| SerializerError::Xml(e.to_string()))
    }
}
