use std::borrow::Cow;
use std::io::Write;

use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::QName;

use super::element::Element;
use crate::attr::AttrValue;
use crate::error::RenderError;

const HEADER: &[u8] = br#"<?xml version="1.0" encoding="UTF-8"?>"#;
const INDENT: &[u8] = b"  ";

#[derive(Clone, Copy, PartialEq, Eq)]
enum Context {
    Attribute,
    Text,
}

/// Characters allowed by the XML 1.0 `Char` production.
fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\t' | '\n' | '\r'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

fn needs_rewrite(c: char, context: Context) -> bool {
    match c {
        '\r' => true,
        '\t' | '\n' => context == Context::Attribute,
        c => !is_xml_char(c),
    }
}

/// Entity-escape `raw` for the given position in the document.
///
/// Characters outside the XML character set become U+FFFD. Carriage returns,
/// and inside attribute values tabs and newlines too, are written as character
/// references so parsers do not normalise them away.
fn escape(raw: &str, context: Context) -> Cow<'_, str> {
    let escaped = quick_xml::escape::escape(raw);
    if !escaped.chars().any(|c| needs_rewrite(c, context)) {
        return escaped;
    }
    let mut out = String::with_capacity(escaped.len() + 8);
    for c in escaped.chars() {
        match c {
            '\t' if context == Context::Attribute => out.push_str("&#x9;"),
            '\n' if context == Context::Attribute => out.push_str("&#xA;"),
            '\r' => out.push_str("&#xD;"),
            c if !is_xml_char(c) => out.push('\u{FFFD}'),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Attribute list of one start tag, built in emission order.
///
/// Each setter applies the omission rule for its kind of value, so element
/// impls read as a plain list of `(name, field)` pairs.
pub(crate) struct Attributes {
    start: BytesStart<'static>,
}

impl Attributes {
    pub(crate) fn new(name: &'static str) -> Self {
        Self {
            start: BytesStart::new(name),
        }
    }

    /// Omitted when empty.
    pub(crate) fn text(&mut self, name: &'static str, value: &str) -> &mut Self {
        if !value.is_empty() {
            self.push(name, value);
        }
        self
    }

    /// Omitted when zero.
    pub(crate) fn number(&mut self, name: &'static str, value: impl Into<u64>) -> &mut Self {
        let value = value.into();
        if value != 0 {
            self.push(name, &value.to_string());
        }
        self
    }

    /// Omitted when false.
    pub(crate) fn flag(&mut self, name: &'static str, value: bool) -> &mut Self {
        if value {
            self.push(name, "true");
        }
        self
    }

    /// Rendered as `true` or `false` regardless of value.
    pub(crate) fn boolean(&mut self, name: &'static str, value: bool) -> &mut Self {
        self.push(name, if value { "true" } else { "false" });
        self
    }

    /// Omitted when the raw value is zero. A non-zero value that encodes to
    /// nothing is still rendered, as `name=""`.
    pub(crate) fn value(&mut self, name: &'static str, value: &impl AttrValue) -> &mut Self {
        if !value.is_zero() {
            let (name, encoded) = value.to_attr(name);
            self.push(name, &encoded);
        }
        self
    }

    fn push(&mut self, name: &'static str, value: &str) {
        let value = match escape(value, Context::Attribute) {
            Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
            Cow::Owned(s) => Cow::Owned(s.into_bytes()),
        };
        self.start.push_attribute(Attribute {
            key: QName(name.as_bytes()),
            value,
        });
    }

    fn into_start(self) -> BytesStart<'static> {
        self.start
    }
}

/// Indenting markup writer.
///
/// Start tags go on a new line, indented two spaces per level. An end tag gets
/// its own line only when the element had child elements, so leaf elements
/// stay on one line with their text: `<Say>Hi</Say>`.
pub(crate) struct DocumentWriter<W: Write> {
    xml: quick_xml::Writer<W>,
    depth: usize,
    // Set once anything has been written; the first tag gets no leading newline.
    started: bool,
    // The innermost open element has no child elements yet.
    leaf: bool,
}

impl<W: Write> DocumentWriter<W> {
    pub(crate) fn new(sink: W) -> Self {
        Self {
            xml: quick_xml::Writer::new(sink),
            depth: 0,
            started: false,
            leaf: false,
        }
    }

    pub(crate) fn header(&mut self) -> Result<(), RenderError> {
        let sink = self.xml.get_mut();
        sink.write_all(HEADER)?;
        sink.write_all(b"\n")?;
        Ok(())
    }

    pub(crate) fn open(&mut self, start: BytesStart<'_>) -> Result<(), RenderError> {
        self.newline()?;
        self.depth += 1;
        self.leaf = true;
        self.xml.write_event(Event::Start(start))?;
        Ok(())
    }

    pub(crate) fn close(&mut self, name: &str) -> Result<(), RenderError> {
        self.depth -= 1;
        if self.leaf {
            self.leaf = false;
        } else {
            self.newline()?;
        }
        self.xml.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    /// Escaped character data. Nothing is written for an empty string.
    pub(crate) fn text(&mut self, text: &str) -> Result<(), RenderError> {
        if !text.is_empty() {
            let escaped = escape(text, Context::Text);
            self.xml
                .write_event(Event::Text(BytesText::from_escaped(escaped)))?;
        }
        Ok(())
    }

    /// A child element holding only text: `<name>text</name>`.
    pub(crate) fn text_element(&mut self, name: &'static str, text: &str) -> Result<(), RenderError> {
        self.open(BytesStart::new(name))?;
        self.text(text)?;
        self.close(name)
    }

    pub(crate) fn element<E: Element>(&mut self, element: &E) -> Result<(), RenderError> {
        let mut attrs = Attributes::new(E::NAME);
        element.attributes(&mut attrs);
        self.open(attrs.into_start())?;
        self.text(element.text())?;
        element.children(self)?;
        self.close(E::NAME)
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.xml.into_inner()
    }

    fn newline(&mut self) -> Result<(), RenderError> {
        let sink = self.xml.get_mut();
        if self.started {
            sink.write_all(b"\n")?;
        } else {
            self.started = true;
        }
        for _ in 0..self.depth {
            sink.write_all(INDENT)?;
        }
        Ok(())
    }
}
