pub mod mutilate;
pub mod specjbb;

use std::fmt::Display;
use std::time::Duration;

use serde::{Deserialize, Deserializer};

use crate::utils::parse::parse_duration;

/// Space-separated command line assembled argument by argument.
pub(crate) struct CommandLine {
    args: Vec<String>,
}

impl CommandLine {
    pub fn new(program: &str) -> Self {
        Self {
            args: vec![program.to_owned()],
        }
    }

    pub fn arg<T: Display>(&mut self, arg: T) -> &mut Self {
        self.args.push(arg.to_string());
        self
    }

    pub fn flag(&mut self, flag: &str) -> &mut Self {
        self.arg(flag)
    }

    pub fn flag_if(&mut self, flag: &str, enabled: bool) -> &mut Self {
        if enabled {
            self.arg(flag);
        }
        self
    }

    pub fn opt<T: Display>(&mut self, name: &str, value: T) -> &mut Self {
        self.arg(name).arg(value)
    }

    /// Java system property, `-Dname=value`.
    pub fn prop<T: Display>(&mut self, name: &str, value: T) -> &mut Self {
        self.arg(format!("-D{}={}", name, value))
    }

    pub fn into_string(self) -> String {
        self.args.join(" ")
    }
}

pub(crate) fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_duration(&s).map_err(serde::de::Error::custom)
}
