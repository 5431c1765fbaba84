use std::time::Duration;

use serde::Deserialize;

use super::CommandLine;

const GROUP: &str = "GRP1";

/// Settings of a distributed SPECjbb2015 run: a controller, transaction
/// injectors and backends, all in one group.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpecjbbConfig {
    pub path_to_java: String,
    pub path_to_binary: String,
    pub path_to_props: String,
    pub output_dir: String,
    pub controller_host: String,
    pub customer_number: u32,
    pub products_number: u32,
    /// Passed as both `-Xms` and `-Xmx` when set, e.g. `4g`.
    pub jvm_heap_size: Option<String>,
}

impl Default for SpecjbbConfig {
    fn default() -> Self {
        Self {
            path_to_java: "java".into(),
            path_to_binary: "/opt/swan/share/specjbb/specjbb2015.jar".into(),
            path_to_props: "/opt/swan/share/specjbb/config/specjbb2015.props".into(),
            output_dir: "/opt/swan/share/specjbb".into(),
            controller_host: "127.0.0.1".into(),
            customer_number: 100,
            products_number: 100,
            jvm_heap_size: None,
        }
    }
}

pub fn backend_command(config: &SpecjbbConfig, index: u32) -> String {
    let mut cmd = java(config);
    cmd.prop("specjbb.controller.host", &config.controller_host);
    agent_mode(&mut cmd, config, "backend", index);
    cmd.into_string()
}

pub fn txinjector_command(config: &SpecjbbConfig, index: u32) -> String {
    let mut cmd = java(config);
    cmd.prop("specjbb.controller.host", &config.controller_host);
    agent_mode(&mut cmd, config, "txinjector", index);
    cmd.into_string()
}

/// Controller injecting a constant `injection_rate` for `duration`.
pub fn controller_load_command(
    config: &SpecjbbConfig,
    injection_rate: u64,
    duration: Duration,
) -> String {
    let mut cmd = java(config);
    cmd.prop("specjbb.controller.type", "PRESET")
        .prop("specjbb.controller.preset.ir", injection_rate)
        .prop("specjbb.controller.preset.duration", duration.as_millis());
    controller_mode(&mut cmd, config);
    cmd.into_string()
}

/// Controller searching for the high bound injection rate.
pub fn controller_tune_command(config: &SpecjbbConfig) -> String {
    let mut cmd = java(config);
    cmd.prop("specjbb.controller.type", "HBIR");
    controller_mode(&mut cmd, config);
    cmd.into_string()
}

/// Builds the final report out of the controller's raw results file.
pub fn reporter_command(config: &SpecjbbConfig, raw_file: &str) -> String {
    let mut cmd = java(config);
    cmd.opt("-jar", &config.path_to_binary)
        .opt("-m", "reporter")
        .opt("-s", raw_file);
    cmd.into_string()
}

fn java(config: &SpecjbbConfig) -> CommandLine {
    let mut cmd = CommandLine::new(&config.path_to_java);
    if let Some(heap) = &config.jvm_heap_size {
        cmd.arg(format!("-Xms{}", heap)).arg(format!("-Xmx{}", heap));
    }
    cmd
}

fn agent_mode(cmd: &mut CommandLine, config: &SpecjbbConfig, mode: &str, index: u32) {
    cmd.opt("-jar", &config.path_to_binary)
        .opt("-m", mode)
        .opt("-p", &config.path_to_props)
        .opt("-G", GROUP)
        .opt("-J", format!("JVM{}", index));
}

fn controller_mode(cmd: &mut CommandLine, config: &SpecjbbConfig) {
    cmd.prop("specjbb.input.number_customers", config.customer_number)
        .prop("specjbb.input.number_products", config.products_number)
        .opt("-jar", &config.path_to_binary)
        .opt("-m", "distcontroller")
        .opt("-p", &config.path_to_props)
        .opt("-t", &config.output_dir);
}

#[cfg(test)]
mod tests {
    use super::*;

    const JAR: &str = "/opt/swan/share/specjbb/specjbb2015.jar";
    const PROPS: &str = "/opt/swan/share/specjbb/config/specjbb2015.props";
    const OUTPUT_DIR: &str = "/opt/swan/share/specjbb";

    fn assert_contains(command: &str, expected: &str) {
        assert!(
            command.contains(expected),
            "command {:?} should contain {:?}",
            command,
            expected
        );
    }

    #[test]
    fn test_txinjector_command() {
        let command = txinjector_command(&SpecjbbConfig::default(), 1);

        assert!(command.starts_with("java "));
        assert_contains(&command, "-m txinjector");
        assert_contains(&command, "-Dspecjbb.controller.host=127.0.0.1");
        assert_contains(&command, "-G GRP1");
        assert_contains(&command, "-J JVM1");
        assert_contains(&command, JAR);
        assert_contains(&command, PROPS);
    }

    #[test]
    fn test_backend_command() {
        let command = backend_command(&SpecjbbConfig::default(), 2);

        assert_contains(&command, "-m backend");
        assert_contains(&command, "-G GRP1");
        assert_contains(&command, "-J JVM2");
        assert_contains(&command, JAR);
        assert_contains(&command, PROPS);
    }

    #[test]
    fn test_controller_load_command() {
        let command = controller_load_command(
            &SpecjbbConfig::default(),
            6000,
            Duration::from_secs(100),
        );

        assert_contains(&command, "-m distcontroller");
        assert_contains(&command, "-Dspecjbb.controller.type=PRESET");
        assert_contains(&command, "-Dspecjbb.controller.preset.ir=6000");
        assert_contains(&command, "-Dspecjbb.controller.preset.duration=100000");
        assert_contains(&command, "-Dspecjbb.input.number_customers=100");
        assert_contains(&command, "-Dspecjbb.input.number_products=100");
        assert_contains(&command, JAR);
        assert_contains(&command, PROPS);
        assert_contains(&command, OUTPUT_DIR);
    }

    #[test]
    fn test_controller_tune_command() {
        let command = controller_tune_command(&SpecjbbConfig::default());

        assert_contains(&command, "-m distcontroller");
        assert_contains(&command, "-Dspecjbb.controller.type=HBIR");
        assert_contains(&command, "-Dspecjbb.input.number_customers=100");
        assert_contains(&command, "-Dspecjbb.input.number_products=100");
        assert_contains(&command, JAR);
        assert_contains(&command, PROPS);
        assert_contains(&command, OUTPUT_DIR);
    }

    #[test]
    fn test_reporter_command() {
        let command = reporter_command(&SpecjbbConfig::default(), "abc");

        assert_contains(&command, "-m reporter");
        assert_contains(&command, "-s abc");
        assert_contains(&command, JAR);
    }

    #[test]
    fn test_jvm_heap_size() {
        let config = SpecjbbConfig {
            jvm_heap_size: Some("4g".into()),
            ..SpecjbbConfig::default()
        };

        assert!(backend_command(&config, 1).starts_with("java -Xms4g -Xmx4g -D"));
        assert!(!controller_tune_command(&SpecjbbConfig::default()).contains("-Xm"));
    }

    #[test]
    fn test_system_properties_precede_jar() {
        let command = controller_load_command(
            &SpecjbbConfig::default(),
            1,
            Duration::from_secs(1),
        );
        let jar = command.find("-jar").expect("no -jar in command");
        let last_prop = command.rfind("-D").expect("no properties in command");
        assert!(last_prop < jar, "{:?}", command);
    }
}
