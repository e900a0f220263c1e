use anyhow::Result;

use crate::log::level::LogLevel;

/// 日志输出端 trait
///
/// 对应平台日志接口：每次调用输出一行，由级别、tag 和消息三部分组成
pub trait LogSink: Send + Sync {
    /// 输出一行日志
    fn println(&self, level: LogLevel, tag: &str, message: &str) -> Result<()>;

    /// 刷新缓冲区（默认实现为空操作）
    fn flush(&self) -> Result<()> {
        Ok(())
    }
}
