// * Owned XML tree for configuration files.
// * roxmltree borrows the source text, so the document is converted once into
// * owned nodes that the Context can keep for its whole lifetime.

use crate::config::numeric::parse_int;
use crate::framework::errors::FrameworkError;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlNode {
    name: String,
    props: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

impl XmlNode {
    fn from_element(node: roxmltree::Node<'_, '_>) -> Self {
        Self {
            name: node.tag_name().name().to_string(),
            props: node
                .attributes()
                .map(|attr| (attr.name().to_string(), attr.value().to_string()))
                .collect(),
            children: node
                .children()
                .filter(|child| child.is_element())
                .map(Self::from_element)
                .collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    // * First direct child with the given tag
    pub fn child(&self, tag: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.name == tag)
    }

    pub fn prop(&self, name: &str) -> Option<&str> {
        self.props
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    // * Property value or "" when absent
    pub fn prop_or_empty(&self, name: &str) -> &str {
        self.prop(name).unwrap_or("")
    }

    /// Integer property through `parse_int`; a missing value reads as 0.
    pub fn int_prop(&self, name: &str) -> i64 {
        parse_int(self.prop_or_empty(name))
    }

    /// Integer property where only a missing or empty value yields `default`.
    pub fn pint_prop(&self, name: &str, default: i64) -> i64 {
        match self.prop(name) {
            Some(value) if !value.is_empty() => parse_int(value),
            _ => default,
        }
    }

    /// Depth-first search through this node and its descendants for a node
    /// tagged `tag`. When `name` is given, the node's `name` property must match.
    pub fn find(&self, tag: &str, name: Option<&str>) -> Option<&XmlNode> {
        if self.name == tag && name.map_or(true, |n| self.prop("name") == Some(n)) {
            return Some(self);
        }

        self.children.iter().find_map(|c| c.find(tag, name))
    }
}

// * Parsed configuration file
#[derive(Debug, Clone)]
pub struct UniXml {
    path: PathBuf,
    root: XmlNode,
}

impl UniXml {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, FrameworkError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| FrameworkError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse_str(path, &text)
    }

    // * Parses already loaded text; `path` is kept for error reporting only.
    pub fn parse_str(path: impl AsRef<Path>, text: &str) -> Result<Self, FrameworkError> {
        let path = path.as_ref().to_path_buf();
        let doc = roxmltree::Document::parse(text).map_err(|source| FrameworkError::Xml {
            path: path.clone(),
            source,
        })?;

        let root = XmlNode::from_element(doc.root_element());
        debug!("Parsed '{}' (root <{}>)", path.display(), root.name());

        Ok(Self { path, root })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn root(&self) -> &XmlNode {
        &self.root
    }

    pub fn find_node(&self, tag: &str, name: Option<&str>) -> Option<&XmlNode> {
        self.root.find(tag, name)
    }

    // * Like find_node, but a missing node is an error
    pub fn require_node(&self, tag: &str) -> Result<&XmlNode, FrameworkError> {
        self.find_node(tag, None)
            .ok_or_else(|| FrameworkError::MissingNode(tag.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<root>
  <settings>
    <TestGen name="Other" test_int="1"/>
    <TestGen name="TestProc1" test_int="42" neg="-3" bad="x1" zero="0" hex="0x10" prefix="12abc" empty=""/>
  </settings>
</root>"#;

    #[test]
    fn test_find_by_tag_and_name() {
        let xml = UniXml::parse_str("mem.xml", DOC).unwrap();
        let node = xml.find_node("TestGen", Some("TestProc1")).unwrap();
        assert_eq!(node.int_prop("test_int"), 42);

        // * Without a name filter the first match wins
        let first = xml.find_node("TestGen", None).unwrap();
        assert_eq!(first.prop("name"), Some("Other"));
    }

    #[test]
    fn test_int_prop_conversions() {
        let xml = UniXml::parse_str("mem.xml", DOC).unwrap();
        let node = xml.find_node("TestGen", Some("TestProc1")).unwrap();

        assert_eq!(node.int_prop("bad"), 0);
        assert_eq!(node.int_prop("missing"), 0);
        assert_eq!(node.int_prop("hex"), 16);
        assert_eq!(node.int_prop("prefix"), 12);
        assert_eq!(node.prop_or_empty("missing"), "");
    }

    #[test]
    fn test_pint_prop_default_only_when_missing_or_empty() {
        let xml = UniXml::parse_str("mem.xml", DOC).unwrap();
        let node = xml.find_node("TestGen", Some("TestProc1")).unwrap();

        assert_eq!(node.pint_prop("test_int", 9), 42);
        assert_eq!(node.pint_prop("zero", 9), 0);
        assert_eq!(node.pint_prop("neg", 9), -3);
        assert_eq!(node.pint_prop("hex", 9), 16);
        assert_eq!(node.pint_prop("empty", 9), 9);
        assert_eq!(node.pint_prop("missing", 9), 9);
    }

    #[test]
    fn test_require_missing_node() {
        let xml = UniXml::parse_str("mem.xml", DOC).unwrap();
        match xml.require_node("ObjectsMap") {
            Err(FrameworkError::MissingNode(tag)) => assert_eq!(tag, "ObjectsMap"),
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_malformed_xml() {
        let result = UniXml::parse_str("broken.xml", "<root><open></root>");
        assert!(matches!(result, Err(FrameworkError::Xml { .. })));
    }

    #[test]
    fn test_open_missing_file() {
        let result = UniXml::open("/definitely/not/here/test.xml");
        assert!(matches!(result, Err(FrameworkError::Io { .. })));
    }
}
