//! Minimal element tree for IRS e-file documents
//!
//! Returns are small enough to hold in memory, and extraction needs random
//! access by path, so documents are read into an arena of elements with
//! namespace prefixes stripped.

use std::borrow::Cow;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::Result;

/// One element of a parsed document
#[derive(Debug, Clone, Default)]
pub struct Element {
    /// Local name, without namespace prefix
    pub name: String,
    /// Concatenated, trimmed character data directly inside the element
    pub text: String,
    /// Attributes by local name, in document order
    pub attributes: Vec<(String, String)>,
    /// Child element indexes, in document order
    pub children: Vec<usize>,
    /// Parent element index; `None` for the root
    pub parent: Option<usize>,
}

impl Element {
    /// Attribute value by local name
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Element text, if it is not empty
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        if self.text.is_empty() {
            None
        } else {
            Some(&self.text)
        }
    }
}

/// A parsed XML document
#[derive(Debug, Clone, Default)]
pub struct XmlDocument {
    elements: Vec<Element>,
}

impl XmlDocument {
    /// Parse a document from text
    ///
    /// # Errors
    /// Returns `Xml` for malformed input, including mismatched end tags
    pub fn parse(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut elements: Vec<Element> = Vec::new();
        let mut open: Vec<usize> = Vec::new();

        loop {
            match reader.read_event()? {
                Event::Start(start) => {
                    let idx = push_element(&mut elements, &start, open.last().copied())?;
                    open.push(idx);
                }
                Event::Empty(start) => {
                    push_element(&mut elements, &start, open.last().copied())?;
                }
                Event::End(_) => {
                    open.pop();
                }
                Event::Text(text) => {
                    if let Some(&idx) = open.last() {
                        append_text(&mut elements[idx].text, &text.unescape()?);
                    }
                }
                Event::CData(data) => {
                    if let Some(&idx) = open.last() {
                        append_text(&mut elements[idx].text, &String::from_utf8_lossy(&data));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(Self { elements })
    }

    /// The document element, if the document has one
    #[must_use]
    pub fn root(&self) -> Option<&Element> {
        self.elements.first()
    }

    /// Element by index
    #[must_use]
    pub fn element(&self, idx: usize) -> &Element {
        &self.elements[idx]
    }

    /// All elements in document order
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Number of elements
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the document has no elements
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Child of `idx` with the given local name, first in document order
    #[must_use]
    pub fn child(&self, idx: usize, name: &str) -> Option<usize> {
        self.elements[idx]
            .children
            .iter()
            .copied()
            .find(|&child| self.elements[child].name == name)
    }

    /// First descendant of `idx` at a slash-separated relative path that
    /// carries text
    ///
    /// Later siblings are searched when the first match at a step is empty.
    #[must_use]
    pub fn descendant_value(&self, idx: usize, relative: &str) -> Option<&str> {
        let segments: Vec<&str> = relative.split('/').filter(|s| !s.is_empty()).collect();
        self.find_value(idx, &segments)
    }

    fn find_value(&self, idx: usize, segments: &[&str]) -> Option<&str> {
        let Some((first, rest)) = segments.split_first() else {
            return self.elements[idx].value();
        };
        self.elements[idx]
            .children
            .iter()
            .copied()
            .filter(|&child| self.elements[child].name == *first)
            .find_map(|child| self.find_value(child, rest))
    }
}

fn push_element(
    elements: &mut Vec<Element>,
    start: &BytesStart<'_>,
    parent: Option<usize>,
) -> Result<usize> {
    let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
        let value: Cow<'_, str> = attr.unescape_value()?;
        attributes.push((key, value.into_owned()));
    }

    let idx = elements.len();
    elements.push(Element {
        name,
        text: String::new(),
        attributes,
        children: Vec::new(),
        parent,
    });
    if let Some(parent) = parent {
        elements[parent].children.push(idx);
    }
    Ok(idx)
}

fn append_text(target: &mut String, text: &str) {
    let text = text.trim();
    if text.is_empty() {
        return;
    }
    if !target.is_empty() {
        target.push(' ');
    }
    target.push_str(text);
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Return xmlns="http://www.irs.gov/efile" xmlns:efile="http://www.irs.gov/efile" returnVersion="2019v5.1">
  <efile:ReturnHeader>
    <Filer><EIN>123456789</EIN></Filer>
  </efile:ReturnHeader>
  <ReturnData>
    <IRS990>
      <MissionDesc><![CDATA[Feeding <everyone>]]></MissionDesc>
      <Note>Fish &amp; chips</Note>
      <Empty/>
    </IRS990>
  </ReturnData>
</Return>"#;

    #[test]
    fn test_parse_strips_prefixes_and_keeps_structure() {
        let doc = XmlDocument::parse(SAMPLE).expect("parse");
        let root = doc.root().expect("root");
        assert_eq!(root.name, "Return");
        assert_eq!(root.attribute("returnVersion"), Some("2019v5.1"));

        let header = doc.child(0, "ReturnHeader").expect("header");
        assert_eq!(doc.descendant_value(header, "Filer/EIN"), Some("123456789"));
        assert_eq!(doc.element(header).parent, Some(0));
    }

    #[test]
    fn test_text_cdata_and_entities() {
        let doc = XmlDocument::parse(SAMPLE).expect("parse");
        let data = doc.child(0, "ReturnData").expect("data");
        let form = doc.child(data, "IRS990").expect("form");
        assert_eq!(doc.descendant_value(form, "MissionDesc"), Some("Feeding <everyone>"));
        assert_eq!(doc.descendant_value(form, "Note"), Some("Fish & chips"));
        assert_eq!(doc.descendant_value(form, "Empty"), None);
        assert_eq!(doc.descendant_value(form, "Missing"), None);
    }

    #[test]
    fn test_descendant_value_skips_empty_siblings() {
        let doc = XmlDocument::parse("<A><B/><B><C>x</C></B></A>").expect("parse");
        assert_eq!(doc.descendant_value(0, "B/C"), Some("x"));
    }

    #[test]
    fn test_mismatched_tags_fail() {
        assert!(XmlDocument::parse("<A><B></A>").is_err());
    }
}
