use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::fs::DeleteReport;
use crate::log::appender::DailyFileAppender;
use crate::log::context::AppContext;
use crate::log::error::LogCatError;
use crate::log::formatter::{BorderStyle, BoxFormatter, BoxFormatterConfig, LineKind};
use crate::log::level::LogLevel;
use crate::log::log_record::{IntoLines, LogRecord};
use crate::log::sink::{ConsoleSink, LogSink};

/// LogCat 配置
#[derive(Debug, Clone, Serialize, Deserialize, SmartDefault, PartialEq, Eq)]
#[serde(default)]
pub struct LogCatConfig {
    /// 日志 tag
    #[default = "GLogCat"]
    pub tag: String,

    /// 边框最大长度
    #[default = 64]
    pub max_border_size: usize,

    /// 输出标题行（tag 与级别）
    pub show_title: bool,

    /// 多行之间输出分隔线
    pub show_divider: bool,

    /// 同时写入本地日志文件（需要绑定 AppContext）
    pub save_to_local: bool,

    /// 静默模式，不输出也不写文件
    pub silence: bool,
}

impl From<&LogCatConfig> for BoxFormatterConfig {
    fn from(config: &LogCatConfig) -> Self {
        BoxFormatterConfig {
            max_border_size: config.max_border_size,
            show_title: config.show_title,
            show_divider: config.show_divider,
        }
    }
}

/// 一次日志输出的结果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Emission {
    /// 是否因静默模式被跳过
    pub silenced: bool,
    /// 成功输出到 sink 的行数
    pub printed: usize,
    /// 成功写入本地文件的行数
    pub persisted: usize,
    /// 写入本地文件失败的行数
    pub persist_failures: usize,
}

/// 盒式日志器
///
/// 将一条或多条消息渲染成带边框的日志输出到 sink，可选同时按天写入本地文件。
/// 配置可随时修改，每次输出开始时读取一份配置快照。
///
/// # 示例
///
/// ```
/// use std::sync::Arc;
/// use droidx::log::{LogCat, LogCatConfig, MemorySink};
///
/// let sink = Arc::new(MemorySink::new());
/// let logcat = LogCat::new(LogCatConfig::default()).with_sink(sink.clone());
/// logcat.set_tag("APP");
/// logcat.show_title();
///
/// logcat.w(["A", "BB"]);
/// assert_eq!(sink.messages()[1], "│ APP ─ Level[Warn]");
/// ```
pub struct LogCat {
    config: RwLock<LogCatConfig>,
    style: RwLock<BorderStyle>,
    context: RwLock<Option<AppContext>>,
    sink: RwLock<Arc<dyn LogSink>>,
}

impl LogCat {
    pub fn new(config: LogCatConfig) -> Self {
        Self {
            config: RwLock::new(config),
            style: RwLock::new(BorderStyle::default()),
            context: RwLock::new(None),
            sink: RwLock::new(Arc::new(ConsoleSink::default())),
        }
    }

    /// 替换输出端
    pub fn with_sink(self, sink: Arc<dyn LogSink>) -> Self {
        self.set_sink(sink);
        self
    }

    /// 绑定应用上下文
    pub fn with_context(self, context: AppContext) -> Self {
        self.bind_context(context);
        self
    }

    pub fn set_sink(&self, sink: Arc<dyn LogSink>) {
        *write(&self.sink) = sink;
    }

    pub fn bind_context(&self, context: AppContext) {
        *write(&self.context) = Some(context);
    }

    pub fn unbind_context(&self) -> Option<AppContext> {
        write(&self.context).take()
    }

    pub fn context(&self) -> Option<AppContext> {
        read(&self.context).clone()
    }

    /// 当前配置快照
    pub fn config(&self) -> LogCatConfig {
        read(&self.config).clone()
    }

    pub fn set_config(&self, config: LogCatConfig) {
        *write(&self.config) = config;
    }

    pub fn set_border_style(&self, style: BorderStyle) {
        *write(&self.style) = style;
    }

    pub fn tag(&self) -> String {
        read(&self.config).tag.clone()
    }

    pub fn set_tag(&self, tag: impl Into<String>) {
        write(&self.config).tag = tag.into();
    }

    pub fn set_max_border_size(&self, size: usize) {
        write(&self.config).max_border_size = size;
    }

    /// 输出标题行（tag 与级别）
    pub fn show_title(&self) {
        self.set_show_title(true);
    }

    pub fn set_show_title(&self, enabled: bool) {
        write(&self.config).show_title = enabled;
    }

    /// 多行之间输出分隔线
    pub fn show_divider(&self) {
        self.set_show_divider(true);
    }

    pub fn set_show_divider(&self, enabled: bool) {
        write(&self.config).show_divider = enabled;
    }

    /// 同时写入本地日志文件
    pub fn save_to_local(&self) {
        self.set_save_to_local(true);
    }

    pub fn set_save_to_local(&self, enabled: bool) {
        write(&self.config).save_to_local = enabled;
    }

    /// 静默模式
    pub fn silence(&self) {
        self.set_silence(true);
    }

    pub fn set_silence(&self, enabled: bool) {
        write(&self.config).silence = enabled;
    }

    pub fn v(&self, lines: impl IntoLines) -> Emission {
        self.println(LogLevel::Verbose, lines)
    }

    pub fn d(&self, lines: impl IntoLines) -> Emission {
        self.println(LogLevel::Debug, lines)
    }

    pub fn i(&self, lines: impl IntoLines) -> Emission {
        self.println(LogLevel::Info, lines)
    }

    pub fn w(&self, lines: impl IntoLines) -> Emission {
        self.println(LogLevel::Warn, lines)
    }

    pub fn e(&self, lines: impl IntoLines) -> Emission {
        self.println(LogLevel::Error, lines)
    }

    /// 以指定级别输出一条日志
    ///
    /// 开启本地保存且已绑定上下文时，每个消息行在输出前先追加到当天的日志文件；
    /// 写文件失败会以 Error 级别报告到 sink，但不会中断本次输出。
    pub fn println(&self, level: LogLevel, lines: impl IntoLines) -> Emission {
        let config = self.config();
        if config.silence {
            return Emission {
                silenced: true,
                ..Default::default()
            };
        }

        let record = LogRecord::new(level, config.tag.clone(), lines);
        if record.lines.is_empty() {
            return Emission::default();
        }

        let formatter =
            BoxFormatter::new(BoxFormatterConfig::from(&config)).with_style(read(&self.style).clone());
        let sink = Arc::clone(&*read(&self.sink));
        let appender = if config.save_to_local {
            read(&self.context).as_ref().map(DailyFileAppender::new)
        } else {
            None
        };

        let mut emission = Emission::default();
        for line in formatter.format(&record) {
            if let (LineKind::Content(index), Some(appender)) = (line.kind, &appender) {
                match appender.append(&record, &record.lines[index]) {
                    Ok(()) => emission.persisted += 1,
                    Err(e) => {
                        emission.persist_failures += 1;
                        let _ = sink.println(
                            LogLevel::Error,
                            &record.tag,
                            &format!("GLogCat Error: {}", e),
                        );
                    }
                }
            }

            if sink.println(record.level, &record.tag, &line.text).is_ok() {
                emission.printed += 1;
            }
        }

        emission
    }

    /// 本地日志目录，未绑定上下文时为 None
    pub fn local_log_path(&self) -> Option<PathBuf> {
        read(&self.context).as_ref().map(AppContext::log_dir)
    }

    /// 读取指定日期的本地日志
    pub fn read_log(&self, date: NaiveDate) -> Result<String, LogCatError> {
        let context = self.context().ok_or(LogCatError::UnboundContext)?;
        DailyFileAppender::new(&context).read(date)
    }

    /// 删除本地日志目录
    pub fn clear_local_log(&self) -> Result<DeleteReport, LogCatError> {
        let context = self.context().ok_or(LogCatError::UnboundContext)?;
        Ok(DailyFileAppender::new(&context).clear())
    }
}

impl Default for LogCat {
    fn default() -> Self {
        Self::new(LogCatConfig::default())
    }
}

crate::impl_from!(LogCatConfig => LogCat);

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::sink::MemorySink;
    use chrono::Local;
    use tempfile::TempDir;

    fn memory_logcat(config: LogCatConfig) -> (LogCat, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let logcat = LogCat::new(config).with_sink(sink.clone());
        (logcat, sink)
    }

    #[test]
    fn test_default_config() {
        let config = LogCatConfig::default();
        assert_eq!(config.tag, "GLogCat");
        assert_eq!(config.max_border_size, 64);
        assert!(!config.show_title);
        assert!(!config.show_divider);
        assert!(!config.save_to_local);
        assert!(!config.silence);
    }

    #[test]
    fn test_setters() {
        let logcat = LogCat::default();
        logcat.set_tag("APP");
        logcat.set_max_border_size(10);
        logcat.show_title();
        logcat.show_divider();
        logcat.save_to_local();
        logcat.silence();

        let config = logcat.config();
        assert_eq!(logcat.tag(), "APP");
        assert_eq!(config.max_border_size, 10);
        assert!(config.show_title && config.show_divider);
        assert!(config.save_to_local && config.silence);

        logcat.set_silence(false);
        assert!(!logcat.config().silence);
    }

    #[test]
    fn test_warn_with_title() {
        let (logcat, sink) = memory_logcat(LogCatConfig {
            tag: "APP".to_string(),
            show_title: true,
            ..Default::default()
        });

        let emission = logcat.w(["A", "BB"]);

        assert_eq!(
            sink.messages(),
            vec!["╭──", "│ APP ─ Level[Warn]", "├──", "├─A", "├─BB", "╰──"]
        );
        assert!(sink
            .lines()
            .iter()
            .all(|l| l.level == LogLevel::Warn && l.tag == "APP"));
        assert_eq!(emission.printed, 6);
        assert_eq!(emission.persisted, 0);
    }

    #[test]
    fn test_levels_map_to_sink() {
        let (logcat, sink) = memory_logcat(LogCatConfig::default());

        logcat.v("v");
        logcat.d("d");
        logcat.i("i");
        logcat.e("e");
        logcat.println(LogLevel::Assert, "a");

        let levels: Vec<LogLevel> = sink
            .lines()
            .iter()
            .filter(|l| l.message.starts_with("├─"))
            .map(|l| l.level)
            .collect();
        assert_eq!(
            levels,
            vec![
                LogLevel::Verbose,
                LogLevel::Debug,
                LogLevel::Info,
                LogLevel::Error,
                LogLevel::Assert
            ]
        );
    }

    #[test]
    fn test_silence_is_noop() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let (logcat, sink) = memory_logcat(LogCatConfig {
            save_to_local: true,
            silence: true,
            ..Default::default()
        });
        logcat.bind_context(AppContext::new("Demo", temp_dir.path()));

        let emission = logcat.e(["a", "b"]);

        assert!(emission.silenced);
        assert!(sink.lines().is_empty());
        assert!(!temp_dir.path().join("logs").exists());
        Ok(())
    }

    #[test]
    fn test_empty_lines_is_noop() {
        let (logcat, sink) = memory_logcat(LogCatConfig::default());
        let emission = logcat.i(Vec::<String>::new());

        assert_eq!(emission, Emission::default());
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_save_to_local_appends_one_line_per_message() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let (logcat, _sink) = memory_logcat(LogCatConfig {
            tag: "APP".to_string(),
            save_to_local: true,
            show_divider: true,
            ..Default::default()
        });
        logcat.bind_context(AppContext::new("Demo", temp_dir.path()));

        let first = logcat.i(["one", "two"]);
        let second = logcat.w("three");

        assert_eq!(first.persisted, 2);
        assert_eq!(second.persisted, 1);

        let text = logcat.read_log(Local::now().date_naive())?;
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("[tag=APP, level=Info, time="));
        assert!(lines[0].ends_with("]: one"));
        assert!(lines[1].ends_with("]: two"));
        assert!(lines[2].starts_with("[tag=APP, level=Warn, time="));
        assert!(lines[2].ends_with("]: three"));
        Ok(())
    }

    #[test]
    fn test_save_to_local_without_context_only_prints() {
        let (logcat, sink) = memory_logcat(LogCatConfig {
            save_to_local: true,
            ..Default::default()
        });

        let emission = logcat.d("hello");
        assert_eq!(emission.persisted, 0);
        assert_eq!(emission.persist_failures, 0);
        assert_eq!(sink.lines().len(), 3);
    }

    #[test]
    fn test_persist_failure_is_reported_and_swallowed() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        // files_dir 是一个普通文件，logs 目录无法创建
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "not a dir")?;

        let (logcat, sink) = memory_logcat(LogCatConfig {
            tag: "APP".to_string(),
            save_to_local: true,
            ..Default::default()
        });
        logcat.bind_context(AppContext::new("Demo", &blocker));

        let emission = logcat.i(["a", "b"]);

        assert_eq!(emission.persist_failures, 2);
        assert_eq!(emission.printed, 4);

        let lines = sink.lines();
        let errors: Vec<_> = lines
            .iter()
            .filter(|l| l.message.starts_with("GLogCat Error: "))
            .collect();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|l| l.level == LogLevel::Error && l.tag == "APP"));
        // 错误报告出现在对应消息行之前
        assert!(lines[1].message.starts_with("GLogCat Error: "));
        assert_eq!(lines[2].message, "├─a");
        Ok(())
    }

    #[test]
    fn test_read_log_errors() -> anyhow::Result<()> {
        let logcat = LogCat::default();
        let date = NaiveDate::from_ymd_opt(2021, 7, 8).unwrap();

        let err = logcat.read_log(date).unwrap_err();
        assert!(matches!(err, LogCatError::UnboundContext));
        assert_eq!(err.to_string(), "read fail, application is null.");

        let temp_dir = TempDir::new()?;
        logcat.bind_context(AppContext::new("Demo", temp_dir.path()));
        let err = logcat.read_log(date).unwrap_err();
        assert_eq!(err.to_string(), "read fail, file `Demo_2021-07-08.log` non-existent.");
        Ok(())
    }

    #[test]
    fn test_clear_local_log() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let logcat = LogCat::default()
            .with_sink(Arc::new(MemorySink::new()))
            .with_context(AppContext::new("Demo", temp_dir.path()));
        logcat.save_to_local();
        logcat.i("keep me?");

        let log_dir = logcat.local_log_path().unwrap();
        assert!(log_dir.exists());

        let report = logcat.clear_local_log()?;
        assert!(report.is_success());
        assert!(!log_dir.exists());

        logcat.unbind_context();
        assert!(matches!(
            logcat.clear_local_log(),
            Err(LogCatError::UnboundContext)
        ));
        assert!(logcat.local_log_path().is_none());
        Ok(())
    }

    #[test]
    fn test_long_line_uses_dotted_border() {
        let (logcat, sink) = memory_logcat(LogCatConfig {
            max_border_size: 4,
            ..Default::default()
        });

        logcat.i("abcdefgh");
        assert_eq!(sink.messages(), vec!["╭┄┄┄┄", "├─abcdefgh", "╰┄┄┄┄"]);
    }

    #[test]
    fn test_from_config() {
        let logcat = LogCat::from(LogCatConfig {
            tag: "CFG".to_string(),
            ..Default::default()
        });
        assert_eq!(logcat.tag(), "CFG");
    }
}
