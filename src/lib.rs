pub mod cliopt;
pub mod config;
pub mod error;
pub mod metrics;
pub mod output;
pub mod parse;
pub mod runner;
pub mod utils;
pub mod workload;
