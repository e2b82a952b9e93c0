use clap::Parser;
use testgen::config::constants::{
    DEFAULT_CONFILE, DEFAULT_LOG_FILTER, DEFAULT_OBJECT_NAME, DEFAULT_SECTION,
};
use testgen::ops::telemetry;
use testgen::report::{OutputFormat, ReportVariant, ReporterOptions, TestObjectReporter};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "testgen")]
#[command(about = "Initializes the TestGen process object from a uniset configuration and prints its fields")]
struct Cli {
    /// Configuration file
    #[arg(long, default_value = DEFAULT_CONFILE)]
    confile: String,
    /// Instance name of the object
    #[arg(long, default_value = DEFAULT_OBJECT_NAME)]
    name: String,
    /// Type (settings section) of the object
    #[arg(long, default_value = DEFAULT_SECTION)]
    section: String,
    /// Report variant
    #[arg(long, value_enum, default_value_t = ReportVariant::ParamsFull)]
    variant: ReportVariant,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Wait for the object's loop delay before reporting (file-timer variant)
    #[arg(long)]
    await_delay: bool,
    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = DEFAULT_LOG_FILTER)]
    log_level: String,
    /// Human-readable logs instead of JSON
    #[arg(long)]
    pretty: bool,
    /// Extra framework parameters, e.g. -- --sleep-msec 300 --TestProc1-test_int 5
    #[arg(last = true)]
    framework_args: Vec<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // * Initialize Telemetry (stderr only)
    if cli.pretty {
        telemetry::init_tracing_pretty(&cli.log_level);
    } else {
        telemetry::init_tracing_with_level(&cli.log_level);
    }

    let options = ReporterOptions::new()
        .with_confile(cli.confile)
        .with_name(cli.name)
        .with_section(cli.section)
        .with_variant(cli.variant)
        .with_format(cli.format)
        .with_await_delay(cli.await_delay)
        .with_extra_args(cli.framework_args);

    info!(variant = ?options.variant, confile = %options.confile, "Starting TestGen report");

    let reporter = TestObjectReporter::new(options);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    // * Fail fast: any init error aborts before a single field line is printed.
    // * The error is reported once, through the log.
    if let Err(e) = reporter.run(&mut out).await {
        error!("{}", e);
        drop(out);
        std::process::exit(1);
    }
}
