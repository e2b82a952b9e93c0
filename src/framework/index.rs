// * Object index: name <-> id map built from <ObjectsMap>.
// * Sensors, objects, controllers and services are keyed by their full
// * repository name "<RootSection>/<Section>/<name>"; nodes by bare name.

use crate::config::constants::DEFAULT_OBJECT_ID;
use crate::framework::errors::FrameworkError;
use crate::framework::xml::{UniXml, XmlNode};
use crate::framework::ObjectId;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use tracing::debug;

// * Repository sections holding named items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Sensors,
    Objects,
    Controllers,
    Services,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Sensors,
        Section::Objects,
        Section::Controllers,
        Section::Services,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Section::Sensors => "sensors",
            Section::Objects => "objects",
            Section::Controllers => "controllers",
            Section::Services => "services",
        }
    }
}

// * Sensor I/O type, taken from the "iotype" property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoType {
    DI,
    DO,
    AI,
    AO,
    Unknown,
}

impl IoType {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "DI" => IoType::DI,
            "DO" => IoType::DO,
            "AI" => IoType::AI,
            "AO" => IoType::AO,
            _ => IoType::Unknown,
        }
    }
}

impl fmt::Display for IoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IoType::DI => "DI",
            IoType::DO => "DO",
            IoType::AI => "AI",
            IoType::AO => "AO",
            IoType::Unknown => "UnknownIOType",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectInfo {
    pub id: ObjectId,
    pub rep_name: String,
    pub text_name: String,
    pub io_type: IoType,
}

#[derive(Debug, Clone, Default)]
pub struct ObjectIndex {
    root_section: String,
    prefixes: HashMap<Section, String>,
    by_name: HashMap<String, ObjectId>,
    by_id: BTreeMap<ObjectId, ObjectInfo>,
    nodes: HashMap<String, ObjectId>,
}

impl ObjectIndex {
    pub fn build(xml: &UniXml) -> Result<Self, FrameworkError> {
        let root_section = xml
            .find_node("RootSection", None)
            .and_then(|n| n.prop("name"))
            .filter(|n| !n.is_empty())
            .ok_or_else(|| FrameworkError::MissingNode("RootSection".to_string()))?
            .to_string();

        let map = xml.require_node("ObjectsMap")?;

        let mut index = Self {
            root_section,
            ..Self::default()
        };

        for section in Section::ALL {
            index.read_section(map, section)?;
        }
        index.read_nodes(map)?;

        debug!(
            "Object index built: {} items, {} nodes",
            index.by_id.len(),
            index.nodes.len()
        );

        Ok(index)
    }

    fn read_section(&mut self, map: &XmlNode, section: Section) -> Result<(), FrameworkError> {
        let node = map
            .find(section.tag(), None)
            .ok_or_else(|| FrameworkError::MissingNode(section.tag().to_string()))?;

        if node.children().is_empty() {
            return Err(FrameworkError::EmptySection(section.tag().to_string()));
        }

        let secname = node
            .prop("section")
            .filter(|s| !s.is_empty())
            .or_else(|| node.prop("name").filter(|s| !s.is_empty()))
            .ok_or_else(|| FrameworkError::UnnamedSection(section.tag().to_string()))?;

        let prefix = format!("{}/{}", self.root_section, secname);

        for item in node.children() {
            let name = item.prop_or_empty("name");
            let id = Self::item_id(item, section.tag())?;

            let text_name = match item.prop_or_empty("textname") {
                "" => name.to_string(),
                t => t.to_string(),
            };

            let info = ObjectInfo {
                id,
                rep_name: format!("{}/{}", prefix, name),
                text_name,
                io_type: IoType::parse(item.prop_or_empty("iotype")),
            };

            self.insert(info)?;
        }

        self.prefixes.insert(section, prefix);
        Ok(())
    }

    fn read_nodes(&mut self, map: &XmlNode) -> Result<(), FrameworkError> {
        let node = map
            .find("nodes", None)
            .ok_or_else(|| FrameworkError::MissingNode("nodes".to_string()))?;

        if node.children().is_empty() {
            return Err(FrameworkError::EmptySection("nodes".to_string()));
        }

        for item in node.children() {
            let name = item.prop_or_empty("name");
            let id = Self::item_id(item, "nodes")?;

            let text_name = match item.prop_or_empty("textname") {
                "" => name.to_string(),
                t => t.to_string(),
            };

            self.insert(ObjectInfo {
                id,
                rep_name: name.to_string(),
                text_name,
                io_type: IoType::Unknown,
            })?;
            self.nodes.insert(name.to_string(), id);
        }

        Ok(())
    }

    fn item_id(item: &XmlNode, section: &str) -> Result<ObjectId, FrameworkError> {
        match item.pint_prop("id", DEFAULT_OBJECT_ID) {
            DEFAULT_OBJECT_ID => Err(FrameworkError::MissingId {
                section: section.to_string(),
                name: item.prop_or_empty("name").to_string(),
            }),
            id => Ok(id),
        }
    }

    fn insert(&mut self, info: ObjectInfo) -> Result<(), FrameworkError> {
        if let Some(existing) = self.by_id.get(&info.id) {
            return Err(FrameworkError::DuplicateId {
                id: info.id,
                first: existing.rep_name.clone(),
                second: info.rep_name,
            });
        }

        self.by_name.insert(info.rep_name.clone(), info.id);
        self.by_id.insert(info.id, info);
        Ok(())
    }

    pub fn root_section(&self) -> &str {
        &self.root_section
    }

    // * "<RootSection>/<Section>" as used in repository names
    pub fn section_prefix(&self, section: Section) -> Option<&str> {
        self.prefixes.get(&section).map(String::as_str)
    }

    /// Looks up a full repository name; unknown names yield `DEFAULT_OBJECT_ID`.
    pub fn id_by_name(&self, rep_name: &str) -> ObjectId {
        self.by_name
            .get(rep_name)
            .copied()
            .unwrap_or(DEFAULT_OBJECT_ID)
    }

    pub fn id_in(&self, section: Section, name: &str) -> ObjectId {
        match self.section_prefix(section) {
            Some(prefix) => self.id_by_name(&format!("{}/{}", prefix, name)),
            None => DEFAULT_OBJECT_ID,
        }
    }

    pub fn node_id(&self, name: &str) -> ObjectId {
        self.nodes.get(name).copied().unwrap_or(DEFAULT_OBJECT_ID)
    }

    pub fn info(&self, id: ObjectId) -> Option<&ObjectInfo> {
        self.by_id.get(&id)
    }

    pub fn map_name(&self, id: ObjectId) -> Option<&str> {
        self.info(id).map(|i| i.rep_name.as_str())
    }

    pub fn text_name(&self, id: ObjectId) -> Option<&str> {
        self.info(id).map(|i| i.text_name.as_str())
    }

    pub fn io_type(&self, id: ObjectId) -> IoType {
        self.info(id).map_or(IoType::Unknown, |i| i.io_type)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_from(text: &str) -> Result<ObjectIndex, FrameworkError> {
        let xml = UniXml::parse_str("index.xml", text)?;
        ObjectIndex::build(&xml)
    }

    const MAP: &str = r#"<UNISETPLC>
  <UniSet><RootSection name="ROOT"/></UniSet>
  <ObjectsMap>
    <nodes><item id="3000" name="localhost"/></nodes>
    <sensors name="Sensors"><item id="1" name="Input1_S" iotype="di" textname="Input 1"/></sensors>
    <objects section="Objects"><item id="6000" name="TestProc1"/></objects>
    <controllers name="Controllers"><item id="5000" name="SharedMemory"/></controllers>
    <services name="Services"><item id="5010" name="InfoServer"/></services>
  </ObjectsMap>
</UNISETPLC>"#;

    #[test]
    fn test_repository_names() {
        let index = index_from(MAP).unwrap();
        assert_eq!(index.root_section(), "ROOT");
        assert_eq!(index.id_by_name("ROOT/Sensors/Input1_S"), 1);
        assert_eq!(index.id_in(Section::Objects, "TestProc1"), 6000);
        assert_eq!(index.map_name(5000), Some("ROOT/Controllers/SharedMemory"));
        assert_eq!(index.node_id("localhost"), 3000);
        assert_eq!(index.len(), 5);
    }

    #[test]
    fn test_text_name_and_iotype() {
        let index = index_from(MAP).unwrap();
        assert_eq!(index.text_name(1), Some("Input 1"));
        assert_eq!(index.text_name(6000), Some("TestProc1"));
        assert_eq!(index.io_type(1), IoType::DI);
        assert_eq!(index.io_type(6000), IoType::Unknown);
        assert_eq!(index.io_type(12345), IoType::Unknown);
    }

    #[test]
    fn test_unknown_name() {
        let index = index_from(MAP).unwrap();
        assert_eq!(index.id_in(Section::Sensors, "Nope"), DEFAULT_OBJECT_ID);
        assert_eq!(index.node_id("remote"), DEFAULT_OBJECT_ID);
    }

    #[test]
    fn test_missing_root_section() {
        let text = MAP.replace(r#"<RootSection name="ROOT"/>"#, "");
        assert!(matches!(
            index_from(&text),
            Err(FrameworkError::MissingNode(tag)) if tag == "RootSection"
        ));
    }

    #[test]
    fn test_item_without_id() {
        let text = MAP.replace(r#"<item id="6000" name="TestProc1"/>"#, r#"<item name="TestProc1"/>"#);
        match index_from(&text) {
            Err(FrameworkError::MissingId { section, name }) => {
                assert_eq!(section, "objects");
                assert_eq!(name, "TestProc1");
            }
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_unnamed_section() {
        let text = MAP.replace(r#"<services name="Services">"#, "<services>");
        assert!(matches!(
            index_from(&text),
            Err(FrameworkError::UnnamedSection(tag)) if tag == "services"
        ));
    }

    #[test]
    fn test_empty_section() {
        let text = MAP.replace(
            r#"<services name="Services"><item id="5010" name="InfoServer"/></services>"#,
            r#"<services name="Services"/>"#,
        );
        assert!(matches!(
            index_from(&text),
            Err(FrameworkError::EmptySection(tag)) if tag == "services"
        ));
    }

    #[test]
    fn test_empty_nodes() {
        let text = MAP.replace(
            r#"<nodes><item id="3000" name="localhost"/></nodes>"#,
            "<nodes/>",
        );
        assert!(matches!(
            index_from(&text),
            Err(FrameworkError::EmptySection(tag)) if tag == "nodes"
        ));
    }

    #[test]
    fn test_zero_and_hex_ids_accepted() {
        let text = MAP
            .replace(r#"id="6000""#, r#"id="0""#)
            .replace(r#"id="5000""#, r#"id="0x20""#);
        let index = index_from(&text).unwrap();
        assert_eq!(index.id_in(Section::Objects, "TestProc1"), 0);
        assert_eq!(index.id_in(Section::Controllers, "SharedMemory"), 32);
    }

    #[test]
    fn test_duplicate_id() {
        let text = MAP.replace(r#"id="5000""#, r#"id="6000""#);
        assert!(matches!(
            index_from(&text),
            Err(FrameworkError::DuplicateId { id: 6000, .. })
        ));
    }
}
