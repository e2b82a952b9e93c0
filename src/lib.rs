pub mod config;
pub mod framework;
pub mod object;
pub mod ops;
pub mod report;
