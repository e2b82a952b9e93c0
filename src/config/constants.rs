// * Configuration Constants
// * Central location for default names and timings

// * argv[0] of parameter lists built in code
pub const PROGRAM_NAME: &str = "testgen";

// * Configuration file used when no --confile is given
pub const DEFAULT_CONFILE: &str = "test.xml";

// * Instance name of the test object
pub const DEFAULT_OBJECT_NAME: &str = "TestProc1";

// * Type (settings section) name of the test object
pub const DEFAULT_SECTION: &str = "TestGen";

// * Object id meaning "not found / not set"
pub const DEFAULT_OBJECT_ID: i64 = -1;

// * Object loop delay when neither argument nor property sets one
pub const DEFAULT_SLEEP_MSEC: u64 = 200;

// * Framework-wide parameter defaults
pub const DEFAULT_COUNT_OF_NET: usize = 1;
pub const DEFAULT_REPEAT_COUNT: usize = 3;
pub const DEFAULT_REPEAT_TIMEOUT_MS: u64 = 50;
pub const DEFAULT_HEARTBEAT_MSEC: u64 = 3000;

// * Log filter applied when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "warn";
