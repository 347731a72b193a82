//! Owned markup tree built from a body resource
//!
//! Elements live in a flat arena and refer to their children by index, so the
//! tree has a single owner and no parent back-references. Walking it is an
//! explicit stack-driven pre-order traversal.

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::NsReader;

use super::error::MarkupError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Index of an element inside its [`MarkupTree`]
pub type ElementId = usize;

/// Namespace-qualified element name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedName {
    pub namespace: Option<String>,
    pub local: String,
}

impl QualifiedName {
    pub fn matches(&self, namespace: &str, local: &str) -> bool {
        self.local == local && self.namespace.as_deref() == Some(namespace)
    }
}

#[derive(Debug, Clone)]
pub struct Element {
    pub name: QualifiedName,
    /// All character data whose parent is this element, entities resolved.
    /// Text before, between and after child elements is concatenated.
    pub text: String,
    pub children: Vec<ElementId>,
}

#[derive(Debug, Clone)]
pub struct MarkupTree {
    elements: Vec<Element>,
}

impl MarkupTree {
    /// Parse a complete XML document into a tree.
    ///
    /// The input must hold exactly one root element, every element must be
    /// closed and every prefix must be bound to a namespace.
    pub fn parse(bytes: &[u8]) -> Result<Self, MarkupError> {
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        let mut reader = NsReader::from_reader(bytes);
        reader.config_mut().trim_text(false); // whitespace inside runs is content

        let mut elements: Vec<Element> = Vec::new();
        let mut open: Vec<ElementId> = Vec::new();
        let mut buf = Vec::new();

        loop {
            match reader.read_resolved_event_into(&mut buf)? {
                (ns, Event::Start(ref e)) => {
                    let id = push_element(&mut elements, &open, ns, e)?;
                    open.push(id);
                }
                (ns, Event::Empty(ref e)) => {
                    push_element(&mut elements, &open, ns, e)?;
                }
                (_, Event::End(_)) => {
                    open.pop();
                }
                (_, Event::Text(ref e)) => match open.last() {
                    Some(&id) => elements[id].text.push_str(&e.unescape()?),
                    None if !is_xml_whitespace(e) => {
                        let text = e.unescape()?;
                        return Err(MarkupError::TextOutsideRoot(text.trim().to_string()));
                    }
                    None => {}
                },
                (_, Event::CData(ref e)) => match open.last() {
                    Some(&id) => elements[id].text.push_str(&String::from_utf8_lossy(e)),
                    None => {
                        return Err(MarkupError::TextOutsideRoot(
                            String::from_utf8_lossy(e).into_owned(),
                        ));
                    }
                },
                (_, Event::Eof) => break,
                _ => {}
            }
            buf.clear();
        }

        if let Some(&id) = open.last() {
            return Err(MarkupError::Unclosed(display_name(&elements[id].name)));
        }
        if elements.is_empty() {
            return Err(MarkupError::NoRoot);
        }

        Ok(MarkupTree { elements })
    }

    pub fn root(&self) -> ElementId {
        0
    }

    pub fn element(&self, id: ElementId) -> &Element {
        &self.elements[id]
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// `from` and everything below it, in document order
    pub fn descendants(&self, from: ElementId) -> Descendants<'_> {
        Descendants {
            tree: self,
            stack: vec![from],
        }
    }

    /// Every element at or below `from` with the given qualified name, in
    /// document order and regardless of nesting depth
    pub fn find_all<'a>(
        &'a self,
        from: ElementId,
        namespace: &'a str,
        local: &'a str,
    ) -> impl Iterator<Item = ElementId> + 'a {
        self.descendants(from)
            .filter(move |&id| self.elements[id].name.matches(namespace, local))
    }
}

/// Pre-order walk driven by an explicit stack
pub struct Descendants<'a> {
    tree: &'a MarkupTree,
    stack: Vec<ElementId>,
}

impl Iterator for Descendants<'_> {
    type Item = ElementId;

    fn next(&mut self) -> Option<ElementId> {
        let id = self.stack.pop()?;
        // Reversed so the first child is popped next
        self.stack
            .extend(self.tree.elements[id].children.iter().rev().copied());
        Some(id)
    }
}

fn push_element(
    elements: &mut Vec<Element>,
    open: &[ElementId],
    ns: ResolveResult<'_>,
    start: &BytesStart<'_>,
) -> Result<ElementId, MarkupError> {
    let raw_name = String::from_utf8_lossy(start.name().as_ref()).into_owned();

    if open.is_empty() && !elements.is_empty() {
        return Err(MarkupError::TrailingElement(raw_name));
    }

    for attr in start.attributes() {
        attr.map_err(quick_xml::Error::from)?;
    }

    let namespace = match ns {
        ResolveResult::Bound(ns) => Some(String::from_utf8_lossy(ns.as_ref()).into_owned()),
        ResolveResult::Unbound => None,
        ResolveResult::Unknown(prefix) => {
            return Err(MarkupError::UnboundPrefix(
                String::from_utf8_lossy(&prefix).into_owned(),
            ));
        }
    };
    let local = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();

    let id = elements.len();
    elements.push(Element {
        name: QualifiedName { namespace, local },
        text: String::new(),
        children: Vec::new(),
    });
    if let Some(&parent) = open.last() {
        elements[parent].children.push(id);
    }
    Ok(id)
}

fn is_xml_whitespace(bytes: &[u8]) -> bool {
    bytes
        .iter()
        .all(|&b| matches!(b, b' ' | b'\t' | b'\r' | b'\n'))
}

fn display_name(name: &QualifiedName) -> String {
    match &name.namespace {
        Some(ns) => format!("{{{ns}}}{}", name.local),
        None => name.local.clone(),
    }
}
