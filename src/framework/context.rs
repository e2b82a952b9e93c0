// * Framework context: the explicit handle produced by initialization.
// * Holds the parsed configuration, the object index and the framework-wide
// * parameters. Built once at startup and passed by reference afterwards.

use crate::config::constants::{
    DEFAULT_COUNT_OF_NET, DEFAULT_HEARTBEAT_MSEC, DEFAULT_OBJECT_ID, DEFAULT_REPEAT_COUNT,
    DEFAULT_REPEAT_TIMEOUT_MS,
};
use crate::config::Params;
use crate::framework::errors::FrameworkError;
use crate::framework::index::{IoType, ObjectIndex, Section};
use crate::framework::xml::{UniXml, XmlNode};
use crate::framework::ObjectId;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct Context {
    params: Params,
    xml: UniXml,
    index: ObjectIndex,
    local_node_name: String,
    local_node: ObjectId,
    count_of_net: usize,
    repeat_count: usize,
    repeat_timeout: Duration,
    heartbeat: Duration,
}

impl Context {
    /// Initializes the framework from a configuration file path.
    pub fn init(xmlfile: impl AsRef<Path>) -> Result<Self, FrameworkError> {
        Self::load(Params::new(), xmlfile.as_ref())
    }

    /// Initializes the framework from an argv-style parameter list.
    /// `--confile` selects the configuration file, `default_xmlfile` otherwise.
    pub fn init_params(params: &Params, default_xmlfile: &str) -> Result<Self, FrameworkError> {
        let confile = params.confile(default_xmlfile);
        Self::load(params.clone(), Path::new(&confile))
    }

    fn load(params: Params, path: &Path) -> Result<Self, FrameworkError> {
        info!("Loading configuration '{}'", path.display());

        let xml = UniXml::open(path)?;
        let uniset = xml.require_node("UniSet")?;
        let index = ObjectIndex::build(&xml)?;

        let count_of_net = uniset
            .child("CountOfNet")
            .map_or(DEFAULT_COUNT_OF_NET as i64, |n| n.int_prop("name"));
        let repeat_count = Self::name_pint(uniset, "RepeatCount", DEFAULT_REPEAT_COUNT as i64);
        let repeat_timeout =
            Self::name_pint(uniset, "RepeatTimeoutMS", DEFAULT_REPEAT_TIMEOUT_MS as i64);

        // * Non-positive heartbeat falls back to the default period
        let heartbeat = match xml.find_node("HeartBeatTime", None) {
            Some(n) if n.int_prop("msec") > 0 => n.int_prop("msec"),
            _ => DEFAULT_HEARTBEAT_MSEC as i64,
        };

        // * --localNode overrides <LocalNode name="...">
        let conf_node = uniset
            .child("LocalNode")
            .map(|n| n.prop_or_empty("name"))
            .unwrap_or("");
        let local_node_name = params.get_arg_param("--localNode", conf_node);

        let local_node = if local_node_name.is_empty() {
            warn!("No local node configured");
            DEFAULT_OBJECT_ID
        } else {
            match index.node_id(&local_node_name) {
                DEFAULT_OBJECT_ID => {
                    return Err(FrameworkError::UnknownLocalNode(local_node_name));
                }
                id => id,
            }
        };

        debug!(
            "Context ready: local node '{}' ({}), {} objects indexed",
            local_node_name,
            local_node,
            index.len()
        );

        Ok(Self {
            params,
            xml,
            index,
            local_node_name,
            local_node,
            count_of_net: usize::try_from(count_of_net).unwrap_or(DEFAULT_COUNT_OF_NET),
            repeat_count: usize::try_from(repeat_count).unwrap_or(DEFAULT_REPEAT_COUNT),
            repeat_timeout: Duration::from_millis(
                u64::try_from(repeat_timeout).unwrap_or(DEFAULT_REPEAT_TIMEOUT_MS),
            ),
            heartbeat: Duration::from_millis(
                u64::try_from(heartbeat).unwrap_or(DEFAULT_HEARTBEAT_MSEC),
            ),
        })
    }

    // * Reads <Tag name="N"/> children of <UniSet>, where the value lives in "name"
    fn name_pint(uniset: &XmlNode, tag: &str, default: i64) -> i64 {
        uniset
            .child(tag)
            .map_or(default, |n| n.pint_prop("name", default))
    }

    pub fn conf_file(&self) -> PathBuf {
        self.xml.path().to_path_buf()
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn xml(&self) -> &UniXml {
        &self.xml
    }

    pub fn index(&self) -> &ObjectIndex {
        &self.index
    }

    pub fn local_node(&self) -> ObjectId {
        self.local_node
    }

    pub fn local_node_name(&self) -> &str {
        &self.local_node_name
    }

    pub fn count_of_net(&self) -> usize {
        self.count_of_net
    }

    pub fn repeat_count(&self) -> usize {
        self.repeat_count
    }

    pub fn repeat_timeout(&self) -> Duration {
        self.repeat_timeout
    }

    pub fn heartbeat(&self) -> Duration {
        self.heartbeat
    }

    fn lookup(&self, section: Section, name: &str) -> ObjectId {
        if name.is_empty() {
            return DEFAULT_OBJECT_ID;
        }
        self.index.id_in(section, name)
    }

    pub fn sensor_id(&self, name: &str) -> ObjectId {
        self.lookup(Section::Sensors, name)
    }

    pub fn object_id(&self, name: &str) -> ObjectId {
        self.lookup(Section::Objects, name)
    }

    pub fn controller_id(&self, name: &str) -> ObjectId {
        self.lookup(Section::Controllers, name)
    }

    pub fn service_id(&self, name: &str) -> ObjectId {
        self.lookup(Section::Services, name)
    }

    pub fn node_id(&self, name: &str) -> ObjectId {
        if name.is_empty() {
            return DEFAULT_OBJECT_ID;
        }
        self.index.node_id(name)
    }

    /// Resolves a numeric string verbatim, otherwise searches sensors, objects,
    /// controllers, nodes and services, in that order.
    pub fn any_id(&self, name: &str) -> ObjectId {
        if let Some(id) = parse_numeric_id(name) {
            return id;
        }

        [
            self.sensor_id(name),
            self.object_id(name),
            self.controller_id(name),
            self.node_id(name),
            self.service_id(name),
        ]
        .into_iter()
        .find(|id| *id != DEFAULT_OBJECT_ID)
        .unwrap_or(DEFAULT_OBJECT_ID)
    }

    pub fn io_type(&self, id: ObjectId) -> IoType {
        self.index.io_type(id)
    }

    // * <settings><section name="name" .../></settings>
    pub fn settings_node(&self, section: &str, name: &str) -> Option<&XmlNode> {
        self.xml
            .find_node("settings", None)
            .and_then(|s| s.find(section, Some(name)))
    }
}

// * Digits only; signs and blanks do not count as numeric ids
pub fn parse_numeric_id(value: &str) -> Option<ObjectId> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}
