use anyhow::Result;
use std::sync::{Mutex, PoisonError};

use crate::log::level::LogLevel;
use crate::log::sink::LogSink;

/// 内存中记录的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkLine {
    pub level: LogLevel,
    pub tag: String,
    pub message: String,
}

/// 内存输出端
///
/// 按顺序保存所有输出行，便于检查输出或在测试中断言
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<SinkLine>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// 所有已输出的行
    pub fn lines(&self) -> Vec<SinkLine> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// 仅消息文本
    pub fn messages(&self) -> Vec<String> {
        self.lines().into_iter().map(|line| line.message).collect()
    }

    pub fn clear(&self) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl LogSink for MemorySink {
    fn println(&self, level: LogLevel, tag: &str, message: &str) -> Result<()> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(SinkLine {
                level,
                tag: tag.to_string(),
                message: message.to_string(),
            });
        Ok(())
    }
}

crate::impl_box_from!(MemorySink => dyn LogSink);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_records_in_order() -> Result<()> {
        let sink = MemorySink::new();
        sink.println(LogLevel::Info, "APP", "first")?;
        sink.println(LogLevel::Error, "APP", "second")?;

        let lines = sink.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].level, LogLevel::Error);
        assert_eq!(sink.messages(), vec!["first", "second"]);

        sink.clear();
        assert!(sink.lines().is_empty());
        Ok(())
    }
}
