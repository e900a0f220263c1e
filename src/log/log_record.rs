use chrono::{DateTime, Local};

use crate::log::level::LogLevel;

/// 日志记录
///
/// 每次调用构造一次，输出后丢弃
#[derive(Debug, Clone)]
pub struct LogRecord {
    /// 日志级别
    pub level: LogLevel,
    /// 日志 tag
    pub tag: String,
    /// 消息行，至少一行
    pub lines: Vec<String>,
    /// 时间戳
    pub timestamp: DateTime<Local>,
}

impl LogRecord {
    /// 创建新的日志记录，时间戳取当前本地时间
    pub fn new(level: LogLevel, tag: impl Into<String>, lines: impl IntoLines) -> Self {
        Self {
            level,
            tag: tag.into(),
            lines: lines.into_lines(),
            timestamp: Local::now(),
        }
    }

    /// 指定时间戳
    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// 最长一行的字符数
    pub fn longest_line_len(&self) -> usize {
        self.lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
    }
}

/// 可以转换为若干消息行的类型
///
/// 单条消息（`&str`、`String`）或多条消息（数组、切片、`Vec`）都可以直接传给日志方法
pub trait IntoLines {
    fn into_lines(self) -> Vec<String>;
}

impl IntoLines for &str {
    fn into_lines(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoLines for String {
    fn into_lines(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoLines for &String {
    fn into_lines(self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl<S: AsRef<str>> IntoLines for Vec<S> {
    fn into_lines(self) -> Vec<String> {
        self.iter().map(|s| s.as_ref().to_string()).collect()
    }
}

impl<S: AsRef<str>> IntoLines for &[S] {
    fn into_lines(self) -> Vec<String> {
        self.iter().map(|s| s.as_ref().to_string()).collect()
    }
}

impl<S: AsRef<str>, const N: usize> IntoLines for [S; N] {
    fn into_lines(self) -> Vec<String> {
        self.iter().map(|s| s.as_ref().to_string()).collect()
    }
}

impl<S: AsRef<str>, const N: usize> IntoLines for &[S; N] {
    fn into_lines(self) -> Vec<String> {
        self.iter().map(|s| s.as_ref().to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_record_new() {
        let record = LogRecord::new(LogLevel::Info, "APP", "test message");

        assert_eq!(record.level, LogLevel::Info);
        assert_eq!(record.tag, "APP");
        assert_eq!(record.lines, vec!["test message".to_string()]);
    }

    #[test]
    fn test_log_record_multiple_lines() {
        let record = LogRecord::new(LogLevel::Warn, "APP", ["A", "BB"]);
        assert_eq!(record.lines, vec!["A".to_string(), "BB".to_string()]);
        assert_eq!(record.longest_line_len(), 2);
    }

    #[test]
    fn test_longest_line_counts_chars() {
        let record = LogRecord::new(LogLevel::Debug, "APP", vec!["日志记录", "abc"]);
        assert_eq!(record.longest_line_len(), 4);
    }

    #[test]
    fn test_into_lines_variants() {
        let owned = String::from("owned");
        let slice: &[&str] = &["a", "b"];

        assert_eq!((&owned).into_lines(), vec!["owned"]);
        assert_eq!(owned.into_lines(), vec!["owned"]);
        assert_eq!(slice.into_lines(), vec!["a", "b"]);
        assert_eq!((&["x"; 3]).into_lines(), vec!["x", "x", "x"]);
        assert!(Vec::<String>::new().into_lines().is_empty());
    }

    #[test]
    fn test_with_timestamp() {
        let ts = Local::now() - chrono::Duration::days(1);
        let record = LogRecord::new(LogLevel::Error, "APP", "late").with_timestamp(ts);
        assert_eq!(record.timestamp, ts);
    }
}
