use std::time::Duration;

use serde::Deserialize;

use super::{deserialize_duration, CommandLine};

/// Settings of a mutilate (memcached load generator) cluster:
/// one master driving the load, optionally helped by agents.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MutilateConfig {
    pub path_to_binary: String,
    pub memcached_host: String,
    pub memcached_port: u16,

    #[serde(deserialize_with = "deserialize_duration")]
    pub warmup_time: Duration,
    #[serde(deserialize_with = "deserialize_duration")]
    pub tuning_time: Duration,
    pub latency_percentile: String,

    pub key_size: String,
    pub value_size: String,
    pub inter_arrival_dist: String,
    pub records: u64,
    pub update: String,

    pub master_threads: u32,
    pub master_connections: u32,
    pub master_connections_depth: u32,
    /// Zero leaves the master's own QPS unset.
    pub master_qps: u32,
    pub master_affinity: bool,
    pub master_blocking: bool,

    pub agent_threads: u32,
    pub agent_port: u16,
    pub agent_connections: u32,
    pub agent_connections_depth: u32,
    pub agent_affinity: bool,
    pub agent_blocking: bool,
}

impl Default for MutilateConfig {
    fn default() -> Self {
        Self {
            path_to_binary: "mutilate".into(),
            memcached_host: "127.0.0.1".into(),
            memcached_port: 11211,

            warmup_time: Duration::from_secs(10),
            tuning_time: Duration::from_secs(10),
            latency_percentile: "99".into(),

            key_size: "30".into(),
            value_size: "200".into(),
            inter_arrival_dist: "exponential".into(),
            records: 10000,
            update: "0.0".into(),

            master_threads: 1,
            master_connections: 4,
            master_connections_depth: 4,
            master_qps: 0,
            master_affinity: false,
            master_blocking: true,

            agent_threads: 8,
            agent_port: 5556,
            agent_connections: 1,
            agent_connections_depth: 1,
            agent_affinity: false,
            agent_blocking: true,
        }
    }
}

/// Fills memcached with `records` keys before measuring.
pub fn populate_command(config: &MutilateConfig) -> String {
    let mut cmd = CommandLine::new(&config.path_to_binary);
    cmd.opt(
        "-s",
        format!("{}:{}", config.memcached_host, config.memcached_port),
    )
    .flag("--loadonly")
    .opt("-K", &config.key_size)
    .opt("-V", &config.value_size)
    .opt("-r", config.records);
    cmd.into_string()
}

/// Drives `qps` queries per second for `duration`.
pub fn load_command(
    config: &MutilateConfig,
    qps: u64,
    duration: Duration,
    agents: &[String],
) -> String {
    let mut cmd = master_command(config);
    cmd.opt("-t", duration.as_secs())
        .opt("-q", qps)
        .opt("-r", config.records)
        .opt("-u", &config.update);
    with_agents(&mut cmd, config, agents);
    cmd.into_string()
}

/// Searches for the highest QPS keeping the configured latency
/// percentile under `slo` microseconds.
pub fn tune_command(config: &MutilateConfig, slo: u64, agents: &[String]) -> String {
    let mut cmd = master_command(config);
    cmd.opt("-t", config.tuning_time.as_secs()).opt(
        "--search",
        format!("{}:{}", config.latency_percentile, slo),
    );
    with_agents(&mut cmd, config, agents);
    cmd.into_string()
}

pub fn agent_command(config: &MutilateConfig) -> String {
    let mut cmd = CommandLine::new(&config.path_to_binary);
    cmd.flag("-A")
        .opt("-p", config.agent_port)
        .opt("-T", config.agent_threads)
        .flag_if("--affinity", config.agent_affinity)
        .flag_if("-B", config.agent_blocking);
    cmd.into_string()
}

fn master_command(config: &MutilateConfig) -> CommandLine {
    let mut cmd = CommandLine::new(&config.path_to_binary);
    cmd.opt(
        "-s",
        format!("{}:{}", config.memcached_host, config.memcached_port),
    )
    .opt("--warmup", config.warmup_time.as_secs())
    .flag("--noload")
    .opt("-K", &config.key_size)
    .opt("-V", &config.value_size)
    .opt("-i", &config.inter_arrival_dist)
    .opt("-T", config.master_threads)
    .opt("-d", config.agent_connections_depth)
    .opt("-c", config.agent_connections)
    .flag_if("--affinity", config.master_affinity)
    .flag_if("-B", config.master_blocking);

    if config.master_qps != 0 {
        cmd.opt("-Q", config.master_qps);
    }
    cmd
}

fn with_agents(cmd: &mut CommandLine, config: &MutilateConfig, agents: &[String]) {
    if agents.is_empty() {
        return;
    }

    for agent in agents {
        cmd.opt("-a", agent);
    }
    cmd.opt("-D", config.master_connections_depth)
        .opt("-C", config.master_connections)
        .opt("-p", config.agent_port);
}
