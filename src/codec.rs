//! XML encode/decode for one structured document.
//!
//! The wire shape matches the generation side exactly: a `root` element
//! holding two `var` elements (`id` then `level`) followed by one
//! `objects` container of `object` elements. The decoder resolves `var`
//! fields by their `name` attribute, so field order is not significant
//! on the way in, and it is strict: a missing or duplicate `id`/`level`,
//! a non-numeric level, or a truncated container fails the whole entry.

use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};

use crate::constants::xml::{
    ATTR_NAME, ATTR_VALUE, FIELD_ID, FIELD_LEVEL, TAG_OBJECT, TAG_OBJECTS, TAG_ROOT, TAG_VAR,
};
use crate::document::{Document, ObjectRef};
use crate::errors::CorpusError;

/// Serialize a document to XML bytes.
pub fn encode(document: &Document) -> Result<Vec<u8>, CorpusError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Start(BytesStart::new(TAG_ROOT)))?;

    let mut id_var = BytesStart::new(TAG_VAR);
    id_var.push_attribute((ATTR_NAME, FIELD_ID));
    id_var.push_attribute((ATTR_VALUE, document.id.as_str()));
    writer.write_event(Event::Empty(id_var))?;

    let mut level_var = BytesStart::new(TAG_VAR);
    level_var.push_attribute((ATTR_NAME, FIELD_LEVEL));
    level_var.push_attribute((ATTR_VALUE, document.level.to_string().as_str()));
    writer.write_event(Event::Empty(level_var))?;

    writer.write_event(Event::Start(BytesStart::new(TAG_OBJECTS)))?;
    for object in &document.objects {
        let mut element = BytesStart::new(TAG_OBJECT);
        element.push_attribute((ATTR_NAME, object.name.as_str()));
        writer.write_event(Event::Empty(element))?;
    }
    writer.write_event(Event::End(BytesEnd::new(TAG_OBJECTS)))?;

    writer.write_event(Event::End(BytesEnd::new(TAG_ROOT)))?;
    Ok(writer.into_inner())
}

/// Parse XML bytes back into a document.
///
/// `entry` is the archive entry name the bytes came from; it is only used
/// for error context.
pub fn decode(entry: &str, data: &[u8]) -> Result<Document, CorpusError> {
    let mut reader = Reader::from_reader(data);
    reader.config_mut().trim_text(true);

    // Advance to the root element, skipping declarations and comments.
    loop {
        match reader.read_event()? {
            Event::Start(start) if start.name().as_ref() == TAG_ROOT.as_bytes() => break,
            Event::Decl(_) | Event::Comment(_) | Event::Text(_) => continue,
            Event::Eof => return Err(CorpusError::decode(entry, "missing root element")),
            other => {
                return Err(CorpusError::decode(
                    entry,
                    format!("unexpected event before root: {other:?}"),
                ))
            }
        }
    }

    let mut id = None;
    let mut level = None;
    let mut objects: Option<Vec<ObjectRef>> = None;

    loop {
        match reader.read_event()? {
            Event::Empty(element) | Event::Start(element)
                if element.name().as_ref() == TAG_VAR.as_bytes() =>
            {
                let (name, value) = var_attributes(entry, &element)?;
                match name.as_str() {
                    FIELD_ID => {
                        if id.replace(value).is_some() {
                            return Err(CorpusError::decode(entry, "duplicate 'id' var"));
                        }
                    }
                    FIELD_LEVEL => {
                        let parsed = value.parse::<u32>().map_err(|err| {
                            CorpusError::decode(entry, format!("level '{value}': {err}"))
                        })?;
                        if level.replace(parsed).is_some() {
                            return Err(CorpusError::decode(entry, "duplicate 'level' var"));
                        }
                    }
                    // Unknown vars are tolerated, matching name-based lookup.
                    _ => {}
                }
            }
            Event::Start(element) if element.name().as_ref() == TAG_OBJECTS.as_bytes() => {
                if objects.replace(read_objects(entry, &mut reader)?).is_some() {
                    return Err(CorpusError::decode(entry, "duplicate 'objects' container"));
                }
            }
            Event::Empty(element) if element.name().as_ref() == TAG_OBJECTS.as_bytes() => {
                if objects.replace(Vec::new()).is_some() {
                    return Err(CorpusError::decode(entry, "duplicate 'objects' container"));
                }
            }
            Event::End(end) if end.name().as_ref() == TAG_ROOT.as_bytes() => break,
            Event::End(end) if end.name().as_ref() == TAG_VAR.as_bytes() => continue,
            Event::Comment(_) | Event::Text(_) => continue,
            Event::Eof => return Err(CorpusError::decode(entry, "truncated document")),
            other => {
                return Err(CorpusError::decode(
                    entry,
                    format!("unexpected element in root: {other:?}"),
                ))
            }
        }
    }

    let id = id.ok_or_else(|| CorpusError::decode(entry, "missing 'id' var"))?;
    let level = level.ok_or_else(|| CorpusError::decode(entry, "missing 'level' var"))?;
    let objects =
        objects.ok_or_else(|| CorpusError::decode(entry, "missing 'objects' container"))?;

    Ok(Document { id, level, objects })
}

/// Read `object` elements until the container closes, preserving order.
fn read_objects(entry: &str, reader: &mut Reader<&[u8]>) -> Result<Vec<ObjectRef>, CorpusError> {
    let mut objects = Vec::new();
    loop {
        match reader.read_event()? {
            Event::Empty(element) | Event::Start(element)
                if element.name().as_ref() == TAG_OBJECT.as_bytes() =>
            {
                objects.push(ObjectRef {
                    name: required_attribute(entry, &element, ATTR_NAME)?,
                });
            }
            Event::End(end) if end.name().as_ref() == TAG_OBJECTS.as_bytes() => break,
            Event::End(end) if end.name().as_ref() == TAG_OBJECT.as_bytes() => continue,
            Event::Comment(_) | Event::Text(_) => continue,
            Event::Eof => return Err(CorpusError::decode(entry, "truncated objects container")),
            other => {
                return Err(CorpusError::decode(
                    entry,
                    format!("unexpected element in objects: {other:?}"),
                ))
            }
        }
    }
    Ok(objects)
}

/// Extract the `name`/`value` attribute pair from a `var` element.
fn var_attributes(entry: &str, element: &BytesStart<'_>) -> Result<(String, String), CorpusError> {
    let name = required_attribute(entry, element, ATTR_NAME)?;
    let value = required_attribute(entry, element, ATTR_VALUE)?;
    Ok((name, value))
}

fn required_attribute(
    entry: &str,
    element: &BytesStart<'_>,
    key: &str,
) -> Result<String, CorpusError> {
    for attribute in element.attributes() {
        let attribute = attribute.map_err(|err| CorpusError::decode(entry, err))?;
        if attribute.key.as_ref() == key.as_bytes() {
            let value = attribute
                .unescape_value()
                .map_err(|err| CorpusError::decode(entry, err))?;
            return Ok(value.into_owned());
        }
    }
    Err(CorpusError::decode(
        entry,
        format!(
            "element '{}' is missing attribute '{key}'",
            String::from_utf8_lossy(element.name().as_ref())
        ),
    ))
}
