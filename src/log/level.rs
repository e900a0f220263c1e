use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 日志级别
///
/// 取值与 Android `android.util.Log` 的优先级一致
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// 最详细的日志
    Verbose = 2,
    /// 调试信息
    Debug = 3,
    /// 一般信息
    Info = 4,
    /// 警告信息
    Warn = 5,
    /// 错误信息
    Error = 6,
    /// 断言
    Assert = 7,
}

impl LogLevel {
    /// 所有级别，按优先级升序
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Verbose,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Assert,
    ];

    /// 数值优先级
    pub fn priority(self) -> i32 {
        self as i32
    }

    /// 从数值优先级转换，未知值返回 None
    pub fn from_priority(priority: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.priority() == priority)
    }

    /// 级别名称，如 `Debug`、`Info`
    pub fn name(self) -> &'static str {
        match self {
            LogLevel::Verbose => "Verbose",
            LogLevel::Debug => "Debug",
            LogLevel::Info => "Info",
            LogLevel::Warn => "Warn",
            LogLevel::Error => "Error",
            LogLevel::Assert => "Assert",
        }
    }

    /// 单字符缩写，logcat 行前缀使用
    pub fn short(self) -> char {
        match self {
            LogLevel::Verbose => 'V',
            LogLevel::Debug => 'D',
            LogLevel::Info => 'I',
            LogLevel::Warn => 'W',
            LogLevel::Error => 'E',
            LogLevel::Assert => 'A',
        }
    }
}

/// 数值优先级到名称的映射，未知值为 `Unknown`
pub fn level_name(priority: i32) -> &'static str {
    LogLevel::from_priority(priority).map_or("Unknown", LogLevel::name)
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" | "v" => Ok(LogLevel::Verbose),
            "debug" | "d" => Ok(LogLevel::Debug),
            "info" | "i" => Ok(LogLevel::Info),
            "warn" | "w" => Ok(LogLevel::Warn),
            "error" | "e" => Ok(LogLevel::Error),
            "assert" | "a" => Ok(LogLevel::Assert),
            _ => Err(format!("invalid log level: {}", s)),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
