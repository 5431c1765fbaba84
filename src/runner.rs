use std::io::Read;
use std::path::Path;

use crate::cliopt::{Command, MutilateCommand, SpecjbbCommand, Workload};
use crate::config::load_config;
use crate::error::{Error, Result};
use crate::metrics::Timestamp;
use crate::output::encoder::{Encoder, HumanReadableEncoder, JsonEncoder};
use crate::output::writer::Writer;
use crate::output::Output;
use crate::parse::{parse_from_path, parse_from_reader};
use crate::utils::time;
use crate::workload::{mutilate, specjbb};

// parse:   report (file | stdin) -> Metrics -> Encoder -> Writer
// command: config (file | defaults) -> command line -> Writer

/// Executes a single CLI command. `stdin` is only read by `parse` when no
/// report path is given.
pub fn run(command: Command, stdin: Box<dyn Read>, writer: Box<dyn Writer>) -> Result<()> {
    match command {
        Command::Parse {
            path,
            encode,
            timestamp,
        } => {
            let mut output = Output::new(writer, encoder(&encode)?);
            parse(path.as_deref(), stdin, timestamp, &mut output)
        }
        Command::Command { workload } => {
            let line = build_command(workload)?;
            tracing::debug!(command = %line, "built command line");

            let mut writer = writer;
            writer
                .write(line.as_bytes())
                .map_err(|e| ("writer failed", e))?;
            Ok(())
        }
    }
}

fn encoder(name: &str) -> Result<Box<dyn Encoder>> {
    match name {
        "json" => Ok(Box::new(JsonEncoder::new())),
        "human" => Ok(Box::new(HumanReadableEncoder::new())),
        other => Err(format!("unknown encoder '{}'", other).into()),
    }
}

fn parse(
    path: Option<&Path>,
    stdin: Box<dyn Read>,
    timestamp: Option<Timestamp>,
    output: &mut Output,
) -> Result<()> {
    let metrics = match path {
        Some(path) if path != Path::new("-") => {
            tracing::debug!(path = %path.display(), "parsing report file");
            parse_from_path(path)?
        }
        _ => {
            tracing::debug!("parsing report from stdin");
            parse_from_reader(stdin)?
        }
    };

    if metrics.is_empty() {
        tracing::warn!("report carries no known metrics");
    } else {
        tracing::info!(count = metrics.len(), "parsed report");
    }

    output.write(&metrics, timestamp.unwrap_or_else(time::now))
}

fn build_command(workload: Workload) -> Result<String> {
    let line = match workload {
        Workload::Mutilate { config, command } => {
            let config: mutilate::MutilateConfig = load_config(config.as_deref())?;
            match command {
                MutilateCommand::Populate => mutilate::populate_command(&config),
                MutilateCommand::Load {
                    qps,
                    duration,
                    agents,
                } => mutilate::load_command(&config, qps, duration, &agents),
                MutilateCommand::Tune { slo, agents } => {
                    mutilate::tune_command(&config, slo, &agents)
                }
                MutilateCommand::Agent => mutilate::agent_command(&config),
            }
        }
        Workload::Specjbb { config, command } => {
            let config: specjbb::SpecjbbConfig = load_config(config.as_deref())?;
            match command {
                SpecjbbCommand::Backend { index } => specjbb::backend_command(&config, index),
                SpecjbbCommand::Txinjector { index } => {
                    specjbb::txinjector_command(&config, index)
                }
                SpecjbbCommand::Load {
                    injection_rate,
                    duration,
                } => specjbb::controller_load_command(&config, injection_rate, duration),
                SpecjbbCommand::Tune => specjbb::controller_tune_command(&config),
                SpecjbbCommand::Reporter { raw_file } => {
                    if raw_file.is_empty() {
                        return Err(Error::new("reporter needs a raw results file"));
                    }
                    specjbb::reporter_command(&config, &raw_file)
                }
            }
        }
    };

    Ok(line)
}
