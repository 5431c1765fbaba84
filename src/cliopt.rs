use std::path::PathBuf;
use std::time::Duration;

use structopt::StructOpt;

use crate::metrics::Timestamp;
use crate::utils::parse::parse_duration;
use crate::utils::time::parse_iso_time;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "benchparse",
    about = "Build load generator command lines and parse their reports"
)]
pub struct CliOpt {
    /// Log debug events to stderr (RUST_LOG takes precedence)
    #[structopt(long = "verbose", short = "v")]
    pub verbose: bool,

    #[structopt(subcommand)]
    pub command: Command,
}

#[derive(Debug, StructOpt)]
pub enum Command {
    /// Parse a mutilate report into metrics
    Parse {
        /// Report file, stdin when omitted or "-"
        #[structopt(parse(from_os_str))]
        path: Option<PathBuf>,

        #[structopt(long = "encode", short = "e", default_value = "json", possible_values = &["json", "human"])]
        encode: String,

        /// RFC 3339 time the metrics are published at, now by default
        #[structopt(long = "timestamp", short = "t", parse(try_from_str = parse_iso_time))]
        timestamp: Option<Timestamp>,
    },

    /// Print a load generator command line
    Command {
        #[structopt(subcommand)]
        workload: Workload,
    },
}

#[derive(Debug, StructOpt)]
pub enum Workload {
    Mutilate {
        /// JSON file overriding the default mutilate settings
        #[structopt(long = "config", short = "c", parse(from_os_str))]
        config: Option<PathBuf>,

        #[structopt(subcommand)]
        command: MutilateCommand,
    },

    Specjbb {
        /// JSON file overriding the default SPECjbb settings
        #[structopt(long = "config", short = "c", parse(from_os_str))]
        config: Option<PathBuf>,

        #[structopt(subcommand)]
        command: SpecjbbCommand,
    },
}

#[derive(Debug, StructOpt)]
pub enum MutilateCommand {
    Populate,

    Load {
        #[structopt(long = "qps", short = "q")]
        qps: u64,

        #[structopt(long = "duration", short = "d", parse(try_from_str = parse_duration))]
        duration: Duration,

        #[structopt(long = "agent", short = "a")]
        agents: Vec<String>,
    },

    Tune {
        /// Latency SLO in microseconds
        #[structopt(long = "slo", short = "s")]
        slo: u64,

        #[structopt(long = "agent", short = "a")]
        agents: Vec<String>,
    },

    Agent,
}

#[derive(Debug, StructOpt)]
pub enum SpecjbbCommand {
    Backend {
        #[structopt(long = "index", short = "i", default_value = "1")]
        index: u32,
    },

    Txinjector {
        #[structopt(long = "index", short = "i", default_value = "1")]
        index: u32,
    },

    Load {
        #[structopt(long = "injection-rate", short = "r")]
        injection_rate: u64,

        #[structopt(long = "duration", short = "d", parse(try_from_str = parse_duration))]
        duration: Duration,
    },

    Tune,

    Reporter {
        #[structopt(long = "raw-file", short = "f")]
        raw_file: String,
    },
}
