use anyhow::Result;
use colored::{ColoredString, Colorize};
use serde::Deserialize;
use smart_default::SmartDefault;
use std::io::{self, Write};

use crate::log::level::LogLevel;
use crate::log::sink::LogSink;

/// 输出目标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, SmartDefault)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Stdout,
    #[default]
    Stderr,
}

/// ConsoleSink 配置
#[derive(Debug, Clone, Deserialize, SmartDefault)]
#[serde(default)]
pub struct ConsoleSinkConfig {
    /// 输出目标
    pub target: Target,

    /// 是否按级别着色
    #[default = true]
    pub colored: bool,
}

/// 终端输出端
///
/// 以 logcat 的 `{级别}/{tag}: {消息}` 形式逐行输出
pub struct ConsoleSink {
    config: ConsoleSinkConfig,
}

impl ConsoleSink {
    pub fn new(config: ConsoleSinkConfig) -> Self {
        Self { config }
    }

    fn render(&self, level: LogLevel, tag: &str, message: &str) -> String {
        let line = format!("{}/{}: {}", level.short(), tag, message);
        if self.config.colored {
            colorize(level, &line).to_string()
        } else {
            line
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new(ConsoleSinkConfig::default())
    }
}

fn colorize(level: LogLevel, line: &str) -> ColoredString {
    match level {
        LogLevel::Verbose => line.dimmed(),
        LogLevel::Debug => line.cyan(),
        LogLevel::Info => line.green(),
        LogLevel::Warn => line.yellow(),
        LogLevel::Error => line.red(),
        LogLevel::Assert => line.red().bold(),
    }
}

impl LogSink for ConsoleSink {
    fn println(&self, level: LogLevel, tag: &str, message: &str) -> Result<()> {
        let line = self.render(level, tag, message);
        match self.config.target {
            Target::Stdout => writeln!(io::stdout().lock(), "{}", line)?,
            Target::Stderr => writeln!(io::stderr().lock(), "{}", line)?,
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        match self.config.target {
            Target::Stdout => io::stdout().flush()?,
            Target::Stderr => io::stderr().flush()?,
        }
        Ok(())
    }
}

crate::impl_from!(ConsoleSinkConfig => ConsoleSink);
crate::impl_box_from!(ConsoleSink => dyn LogSink);
