//! Handler for XML resources.
//!
//! The document is folded into a mapping with these rules:
//!
//! - the root element's name is ignored, its children become the top-level keys
//! - an element holding only text becomes a string (XML values are untyped)
//! - an element with child elements or attributes becomes a nested mapping;
//!   attributes are stored as `@name`, surrounding text as `#text`
//! - repeated sibling elements with the same name become an array
//! - an empty element without attributes becomes `null`
//!
//! XML support lives behind the `xml` Cargo feature, checked when the handler
//! is constructed.

use tracing::debug;

use crate::error::ConfigError;
use crate::file::ResDirs;
use crate::handler::{Handler, HandlerCore};
use crate::types::{HandlerType, LoadOptions, LoadOutcome};

#[derive(Debug, Clone)]
pub struct XmlHandler {
    core: HandlerCore,
}

impl XmlHandler {
    pub fn new(res_dirs: ResDirs) -> Result<Self, ConfigError> {
        if !cfg!(feature = "xml") {
            return Err(ConfigError::DependencyMissing {
                format: "XML",
                feature: "xml",
            });
        }
        debug!(dirs = res_dirs.len(), "creating XML config handler");
        Ok(Self {
            core: HandlerCore::new(res_dirs),
        })
    }
}

impl Handler for XmlHandler {
    fn core(&self) -> &HandlerCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut HandlerCore {
        &mut self.core
    }

    fn load(&mut self, resource: &str, options: LoadOptions) -> LoadOutcome {
        self.core
            .load_with(resource, options, HandlerType::Xml, parse_xml)
    }
}

#[cfg(not(feature = "xml"))]
pub fn parse_xml(_content: &str) -> Result<crate::types::ConfigMap, crate::error::ParseError> {
    Err(crate::error::ParseError::NoUsableData)
}

#[cfg(feature = "xml")]
pub use self::convert::parse_xml;

#[cfg(feature = "xml")]
mod convert {
    use quick_xml::Reader;
    use quick_xml::events::{BytesStart, Event};

    use crate::error::ParseError;
    use crate::types::{ConfigMap, ConfigValue};

    /// An element that has been opened but not yet closed.
    struct Element {
        name: String,
        map: ConfigMap,
        text: String,
    }

    impl Element {
        fn open(start: &BytesStart<'_>) -> Result<Self, ParseError> {
            let mut map = ConfigMap::new();
            for attr in start.attributes() {
                let attr = attr.map_err(xml_error)?;
                let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
                let value = attr.unescape_value().map_err(xml_error)?.into_owned();
                map.insert(format!("@{key}"), ConfigValue::String(value));
            }
            Ok(Self {
                name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
                map,
                text: String::new(),
            })
        }

        fn into_value(self) -> ConfigValue {
            let text = self.text.trim();
            match (self.map.is_empty(), text.is_empty()) {
                (true, true) => ConfigValue::Null,
                (true, false) => ConfigValue::String(text.to_string()),
                (false, _) => {
                    let mut map = self.map;
                    if !text.is_empty() {
                        map.insert("#text".into(), ConfigValue::String(text.to_string()));
                    }
                    ConfigValue::Object(map)
                }
            }
        }
    }

    fn xml_error(e: impl std::fmt::Display) -> ParseError {
        ParseError::Xml(e.to_string())
    }

    /// Add a closed child to its parent, turning repeated names into an array.
    /// Element values are never arrays themselves, so an existing array means
    /// the name was already repeated.
    fn insert_child(parent: &mut ConfigMap, name: String, value: ConfigValue) {
        match parent.get_mut(&name) {
            Some(ConfigValue::Array(items)) => items.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = ConfigValue::Array(vec![first, value]);
            }
            None => {
                parent.insert(name, value);
            }
        }
    }

    fn close(stack: &mut [Element], root: &mut Option<ConfigMap>, element: Element) -> Result<(), ParseError> {
        match stack.last_mut() {
            Some(parent) => {
                let name = element.name.clone();
                insert_child(&mut parent.map, name, element.into_value());
            }
            None if root.is_none() => *root = Some(element.map),
            None => return Err(ParseError::Xml("multiple root elements".into())),
        }
        Ok(())
    }

    /// Parse an XML document into a mapping of the root element's children.
    pub fn parse_xml(content: &str) -> Result<ConfigMap, ParseError> {
        let mut reader = Reader::from_str(content);
        let mut buf = Vec::new();
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<ConfigMap> = None;

        loop {
            match reader.read_event_into(&mut buf).map_err(xml_error)? {
                Event::Start(start) => {
                    if stack.is_empty() && root.is_some() {
                        return Err(ParseError::Xml("multiple root elements".into()));
                    }
                    stack.push(Element::open(&start)?);
                }
                Event::Empty(start) => {
                    let element = Element::open(&start)?;
                    close(&mut stack, &mut root, element)?;
                }
                Event::End(_) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| ParseError::Xml("unexpected closing tag".into()))?;
                    close(&mut stack, &mut root, element)?;
                }
                Event::Text(text) => {
                    let text = text.unescape().map_err(xml_error)?;
                    match stack.last_mut() {
                        Some(element) => element.text.push_str(&text),
                        None if text.trim().is_empty() => {}
                        None => {
                            return Err(ParseError::Xml("text outside of the root element".into()));
                        }
                    }
                }
                Event::CData(data) => {
                    if let Some(element) = stack.last_mut() {
                        element.text.push_str(&String::from_utf8_lossy(&data.into_inner()));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        if !stack.is_empty() {
            return Err(ParseError::Xml("unexpected end of document".into()));
        }
        let root = root.ok_or_else(|| ParseError::Xml("no root element found".into()))?;
        if root.is_empty() {
            return Err(ParseError::NoUsableData);
        }
        Ok(root)
    }
}
