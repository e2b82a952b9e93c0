// * TestGen: code-generated style process object.
// * Every field is filled once from the context at construction time:
// *   <settings><TestGen name="TestProc1" input1_s="..." test_int="..." sleep_msec="..."/></settings>
// * Per-instance arguments "--<myname>-<prop>" override the settings properties.

use crate::config::constants::{DEFAULT_OBJECT_ID, DEFAULT_SLEEP_MSEC};
use crate::config::parse_int;
use crate::framework::context::parse_numeric_id;
use crate::framework::{Context, ObjectId, PassiveTimer};
use crate::object::errors::ObjectError;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct TestGen {
    myname: String,
    section: String,
    id: ObjectId,
    input1_s: ObjectId,
    test_int: i64,
    sleep_timer: PassiveTimer,
}

impl TestGen {
    /// Per-type initializer: builds the object named `name` from the
    /// `<section name="name">` settings node.
    pub fn init(ctx: &Context, name: &str, section: &str) -> Result<Self, ObjectError> {
        let id = ctx.object_id(name);
        if id == DEFAULT_OBJECT_ID {
            return Err(ObjectError::UnknownObject(name.to_string()));
        }

        let cnode = ctx
            .settings_node(section, name)
            .ok_or_else(|| ObjectError::SettingsNotFound {
                section: section.to_string(),
                name: name.to_string(),
            })?;

        let params = ctx.params();
        let argprefix = format!("--{}-", name);

        let input1_name = params.get_arg_param(
            &format!("{}input1_s", argprefix),
            cnode.prop_or_empty("input1_s"),
        );
        let input1_s = Self::resolve_sensor(ctx, &input1_name);
        if input1_s == DEFAULT_OBJECT_ID && !input1_name.is_empty() {
            warn!("{}: sensor '{}' not found for input1_s", name, input1_name);
        }

        let test_int = parse_int(&params.get_arg_param(
            &format!("{}test_int", argprefix),
            cnode.prop_or_empty("test_int"),
        ));

        // * A negative delay is clamped to zero
        let sleep_msec = params.get_arg_pint(
            "--sleep-msec",
            cnode.pint_prop("sleep_msec", DEFAULT_SLEEP_MSEC as i64),
        )
        .max(0);

        let obj = Self {
            myname: name.to_string(),
            section: section.to_string(),
            id,
            input1_s,
            test_int,
            sleep_timer: PassiveTimer::new(Duration::from_millis(sleep_msec.unsigned_abs())),
        };

        debug!(
            "{}: id={} input1_s={} test_int={} sleep_msec={}",
            obj.myname, obj.id, obj.input1_s, obj.test_int, sleep_msec
        );

        Ok(obj)
    }

    fn resolve_sensor(ctx: &Context, value: &str) -> ObjectId {
        parse_numeric_id(value).unwrap_or_else(|| ctx.sensor_id(value))
    }

    pub fn myname(&self) -> &str {
        &self.myname
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn input1_s(&self) -> ObjectId {
        self.input1_s
    }

    pub fn test_int(&self) -> i64 {
        self.test_int
    }

    pub fn sleep_msec(&self) -> Duration {
        self.sleep_timer.interval()
    }

    pub fn sleep_timer(&self) -> &PassiveTimer {
        &self.sleep_timer
    }
}
