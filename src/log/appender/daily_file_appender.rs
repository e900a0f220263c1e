use chrono::{DateTime, Local, NaiveDate};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::fs::{force_delete, DeleteReport};
use crate::log::context::AppContext;
use crate::log::error::LogCatError;
use crate::log::log_record::LogRecord;

/// 按天切分的本地日志文件
///
/// 文件名为 `{appName}_{yyyy-MM-dd}.log`。每次写入都重新以追加模式打开文件，
/// 写完立即关闭，不持有文件句柄，也不做缓冲。
pub struct DailyFileAppender {
    dir: PathBuf,
    app_name: String,
}

impl DailyFileAppender {
    pub fn new(context: &AppContext) -> Self {
        Self {
            dir: context.log_dir(),
            app_name: context.app_name().to_string(),
        }
    }

    /// 日志目录
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// 指定日期的日志文件名
    pub fn file_name(&self, date: NaiveDate) -> String {
        format!("{}_{}.log", self.app_name, date.format("%Y-%m-%d"))
    }

    /// 指定日期的日志文件路径
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(self.file_name(date))
    }

    /// 追加一行到记录当天的日志文件
    ///
    /// 日志目录不存在时会先创建
    pub fn append(&self, record: &LogRecord, message: &str) -> io::Result<()> {
        std::fs::create_dir_all(&self.dir)?;

        let path = self.path_for(record.timestamp.date_naive());
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(format_file_line(record, message).as_bytes())?;
        Ok(())
    }

    /// 读取指定日期的日志全文
    pub fn read(&self, date: NaiveDate) -> Result<String, LogCatError> {
        let path = self.path_for(date);
        if !path.is_file() {
            return Err(LogCatError::FileNotFound {
                file: self.file_name(date),
            });
        }
        Ok(std::fs::read_to_string(path)?)
    }

    /// 删除整个日志目录
    pub fn clear(&self) -> DeleteReport {
        force_delete(&self.dir)
    }
}

/// 文件中的一行：`[tag={tag}, level={Level}, time={yyyy-MM-dd HH:mm:ss.SS}]: {message}\n`
pub fn format_file_line(record: &LogRecord, message: &str) -> String {
    format!(
        "[tag={}, level={}, time={}]: {}\n",
        record.tag,
        record.level.name(),
        format_time(&record.timestamp),
        message
    )
}

/// `yyyy-MM-dd HH:mm:ss.SS`，毫秒至少两位
fn format_time(time: &DateTime<Local>) -> String {
    format!(
        "{}.{:02}",
        time.format("%Y-%m-%d %H:%M:%S"),
        time.timestamp_subsec_millis()
    )
}
