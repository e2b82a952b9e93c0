// * TestObjectReporter: initialize the framework, construct the object, report.

use crate::config::constants::{DEFAULT_CONFILE, DEFAULT_OBJECT_NAME, DEFAULT_SECTION};
use crate::config::Params;
use crate::framework::{Context, FrameworkError};
use crate::object::{ObjectError, TestGen};
use crate::report::render::{write_report, ReportError};
use crate::report::variant::{InitMode, OutputFormat, ReportVariant};
use std::io::Write;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum ReporterError {
    #[error("Framework initialization failed: {0}")]
    Framework(#[from] FrameworkError),

    #[error("Object construction failed: {0}")]
    Object(#[from] ObjectError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReporterOptions {
    pub confile: String,
    pub name: String,
    pub section: String,
    pub variant: ReportVariant,
    pub format: OutputFormat,
    pub await_delay: bool,
    // * Extra framework parameters, forwarded by the parameter-based init only
    pub extra_args: Vec<String>,
}

impl Default for ReporterOptions {
    fn default() -> Self {
        Self {
            confile: DEFAULT_CONFILE.to_string(),
            name: DEFAULT_OBJECT_NAME.to_string(),
            section: DEFAULT_SECTION.to_string(),
            variant: ReportVariant::default(),
            format: OutputFormat::default(),
            await_delay: false,
            extra_args: Vec::new(),
        }
    }
}

impl ReporterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_confile(mut self, confile: impl Into<String>) -> Self {
        self.confile = confile.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = section.into();
        self
    }

    pub fn with_variant(mut self, variant: ReportVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_await_delay(mut self, await_delay: bool) -> Self {
        self.await_delay = await_delay;
        self
    }

    pub fn with_extra_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_args = args.into_iter().map(Into::into).collect();
        self
    }

    // * "--confile <path>" followed by the extra arguments
    pub fn params(&self) -> Params {
        Params::new()
            .add_pair("--confile", self.confile.as_str())
            .extend(self.extra_args.iter().cloned())
    }
}

pub struct TestObjectReporter {
    options: ReporterOptions,
}

impl TestObjectReporter {
    pub fn new(options: ReporterOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ReporterOptions {
        &self.options
    }

    // * Step 1: framework context, through the variant's init API
    pub fn initialize(&self) -> Result<Context, FrameworkError> {
        match self.options.variant.init_mode() {
            InitMode::File => {
                if !self.options.extra_args.is_empty() {
                    warn!(
                        "File-based init ignores {} extra argument(s)",
                        self.options.extra_args.len()
                    );
                }
                Context::init(&self.options.confile)
            }
            InitMode::Params => {
                let params = self.options.params();
                debug!("Init params: {}", params);
                Context::init_params(&params, DEFAULT_CONFILE)
            }
        }
    }

    // * Step 2: the test object
    pub fn construct(&self, ctx: &Context) -> Result<TestGen, ObjectError> {
        TestGen::init(ctx, &self.options.name, &self.options.section)
    }

    // * Step 3: field lines
    pub fn report<W: Write>(&self, out: &mut W, obj: &TestGen) -> Result<(), ReportError> {
        write_report(out, obj, self.options.variant, self.options.format)
    }

    /// Runs all three steps. Nothing is written to `out` unless the context
    /// and the object were both built.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<TestGen, ReporterError> {
        let ctx = self.initialize()?;
        let obj = self.construct(&ctx)?;

        if self.options.await_delay {
            if self.options.variant.reads_timer() {
                info!(
                    "{}: waiting {} ms before reporting",
                    obj.myname(),
                    obj.sleep_msec().as_millis()
                );
                obj.sleep_timer().wait().await;
            } else {
                debug!("Variant {:?} has no delay to await", self.options.variant);
            }
        }

        self.report(out, &obj)?;
        Ok(obj)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ReporterOptions::default();
        assert_eq!(options.confile, "test.xml");
        assert_eq!(options.name, "TestProc1");
        assert_eq!(options.section, "TestGen");
        assert_eq!(options.variant, ReportVariant::ParamsFull);
        assert!(!options.await_delay);
    }

    #[test]
    fn test_params_carry_confile_first() {
        let options = ReporterOptions::new()
            .with_confile("plant.xml")
            .with_extra_args(["--sleep-msec", "10"]);
        let params = options.params();
        assert_eq!(
            params.as_slice(),
            ["testgen", "--confile", "plant.xml", "--sleep-msec", "10"]
        );
    }

    #[tokio::test]
    async fn test_run_failure_writes_nothing() {
        let reporter = TestObjectReporter::new(
            ReporterOptions::new().with_confile("/no/such/dir/test.xml"),
        );
        let mut out = Vec::new();
        let result = reporter.run(&mut out).await;

        assert!(matches!(result, Err(ReporterError::Framework(_))));
        assert!(out.is_empty());
    }
}
