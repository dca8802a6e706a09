use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::models::FeedEntry;
use crate::RssError;

/// Parse an RSS 2.0 or Atom document from raw XML bytes
///
/// Entries are returned in document order. Namespaced elements are matched on
/// their local name, so `content:encoded` is read as a summary fallback.
pub fn parse_feed(xml: &[u8]) -> Result<Vec<FeedEntry>, RssError> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut entries = Vec::new();
    let mut buf = Vec::new();

    let mut current_entry: Option<EntryBuilder> = None;
    let mut current_field: Option<Field> = None;
    let mut text = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = local_name(&e);

                if name == "item" || name == "entry" {
                    current_entry = Some(EntryBuilder::default());
                    current_field = None;
                } else if let Some(ref mut entry) = current_entry {
                    if name == "link" {
                        entry.take_href(&e);
                    }
                    if let Some(field) = Field::from_name(&name) {
                        current_field = Some(field);
                        text.clear();
                    }
                }
            }
            Ok(Event::Empty(e)) => {
                // Atom: <link rel="alternate" href="..."/>
                if let Some(ref mut entry) = current_entry {
                    if local_name(&e) == "link" {
                        entry.take_href(&e);
                    }
                }
            }
            Ok(Event::Text(e)) => {
                if current_entry.is_some() && current_field.is_some() {
                    // HTML-only entities such as &rsquo; are not XML; keep them verbatim
                    let chunk = match e.unescape() {
                        Ok(chunk) => chunk.into_owned(),
                        Err(err) => {
                            tracing::debug!("Keeping raw feed text: {}", err);
                            String::from_utf8_lossy(&e).into_owned()
                        }
                    };
                    push_chunk(&mut text, &chunk);
                }
            }
            Ok(Event::CData(e)) => {
                if current_entry.is_some() && current_field.is_some() {
                    let raw = e.into_inner();
                    push_chunk(&mut text, &String::from_utf8_lossy(&raw));
                }
            }
            Ok(Event::End(e)) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();

                if name == "item" || name == "entry" {
                    if let Some(builder) = current_entry.take() {
                        entries.push(builder.build());
                    }
                    current_field = None;
                } else if let (Some(field), Some(entry)) = (current_field, current_entry.as_mut()) {
                    if Field::from_name(&name) == Some(field) {
                        entry.set(field, std::mem::take(&mut text));
                        current_field = None;
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(RssError::Parse(format!("XML parse error: {}", e))),
            _ => {}
        }
        buf.clear();
    }

    Ok(entries)
}

fn local_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).to_string()
}

fn push_chunk(text: &mut String, chunk: &str) {
    if chunk.is_empty() {
        return;
    }
    if !text.is_empty() {
        text.push(' ');
    }
    text.push_str(chunk);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Link,
    Description,
    Content,
}

impl Field {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "title" => Some(Field::Title),
            "link" => Some(Field::Link),
            "description" | "summary" => Some(Field::Description),
            "encoded" | "content" => Some(Field::Content),
            _ => None,
        }
    }
}

#[derive(Default)]
struct EntryBuilder {
    title: Option<String>,
    link: Option<String>,
    description: Option<String>,
    content: Option<String>,
}

impl EntryBuilder {
    fn set(&mut self, field: Field, value: String) {
        if value.is_empty() {
            return;
        }
        let slot = match field {
            Field::Title => &mut self.title,
            Field::Link => &mut self.link,
            Field::Description => &mut self.description,
            Field::Content => &mut self.content,
        };
        if slot.is_none() {
            *slot = Some(value);
        }
    }

    fn take_href(&mut self, e: &BytesStart<'_>) {
        if self.link.is_some() {
            return;
        }
        let mut href = None;
        let mut alternate = true;
        for attr in e.attributes().flatten() {
            let value = String::from_utf8_lossy(&attr.value).to_string();
            match attr.key.as_ref() {
                b"href" => href = Some(value),
                b"rel" => alternate = value == "alternate",
                _ => {}
            }
        }
        if alternate {
            self.link = href;
        }
    }

    fn build(self) -> FeedEntry {
        FeedEntry {
            title: self.title.unwrap_or_default(),
            summary: self.description.or(self.content),
            link: self.link,
        }
    }
}
