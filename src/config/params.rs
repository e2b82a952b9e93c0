// * Argv-style parameter list handed to the framework initializer.
// * Slot 0 is the program name and is never matched as a flag.
// * Lookups follow the "--name value" convention; the first occurrence wins.

use crate::config::constants::PROGRAM_NAME;
use crate::config::numeric::parse_int;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
    args: Vec<String>,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            args: vec![PROGRAM_NAME.to_string()],
        }
    }
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    // * Full argv, program name first (e.g. std::env::args())
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        if args.is_empty() {
            return Self::default();
        }
        Self { args }
    }

    pub fn add(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn add_pair(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.add(name).add(value)
    }

    pub fn extend<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    // * Number of arguments after the program name
    pub fn len(&self) -> usize {
        self.args.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn program(&self) -> &str {
        &self.args[0]
    }

    pub fn as_slice(&self) -> &[String] {
        &self.args
    }

    /// Returns the value following the first occurrence of `name` (program
    /// name excluded), or `default` when the flag is absent or is the last
    /// argument.
    pub fn get_arg_param(&self, name: &str, default: &str) -> String {
        self.find(name)
            .map(str::to_string)
            .unwrap_or_else(|| default.to_string())
    }

    /// Numeric lookup: a missing flag yields `default`, a present value goes
    /// through `parse_int`.
    pub fn get_arg_int(&self, name: &str, default: i64) -> i64 {
        self.find(name).map_or(default, parse_int)
    }

    /// Like `get_arg_int`, but an empty value also yields `default`.
    pub fn get_arg_pint(&self, name: &str, default: i64) -> i64 {
        match self.find(name) {
            Some(value) if !value.is_empty() => parse_int(value),
            _ => default,
        }
    }

    pub fn confile(&self, default: &str) -> String {
        self.get_arg_param("--confile", default)
    }

    fn find(&self, name: &str) -> Option<&str> {
        self.args
            .windows(2)
            .skip(1)
            .find(|pair| pair[0] == name)
            .map(|pair| pair[1].as_str())
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.args.join(" "))
    }
}
