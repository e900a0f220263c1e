//! 全局 LogCat 单例
//!
//! 进程启动时调用一次 [`init`] 绑定应用上下文并完成配置，之后在任意位置
//! 通过 `v` / `d` / `i` / `w` / `e` 输出日志。需要多个独立配置时直接创建 [`LogCat`] 实例。

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use std::path::PathBuf;

use crate::fs::DeleteReport;
use crate::log::context::AppContext;
use crate::log::error::LogCatError;
use crate::log::level::LogLevel;
use crate::log::log_record::IntoLines;
use crate::log::logcat::{Emission, LogCat, LogCatConfig};

static GLOBAL_LOGCAT: Lazy<LogCat> = Lazy::new(LogCat::default);

/// 获取全局 LogCat
pub fn logcat() -> &'static LogCat {
    &GLOBAL_LOGCAT
}

/// 初始化全局 LogCat：绑定应用上下文并在其上执行配置
///
/// # 示例
///
/// ```no_run
/// use droidx::log::{self, AppContext};
///
/// log::init(AppContext::new("Demo", "/data/demo/files"), |logcat| {
///     logcat.set_tag("Demo");
///     logcat.show_title();
///     logcat.save_to_local();
/// });
///
/// log::w(["disk almost full", "free: 12MB"]);
/// ```
pub fn init<F>(context: AppContext, block: F)
where
    F: FnOnce(&LogCat),
{
    let logcat = logcat();
    logcat.bind_context(context);
    block(logcat);
}

/// 使用配置对象初始化全局 LogCat
pub fn init_with_config(context: AppContext, config: LogCatConfig) {
    init(context, |logcat| logcat.set_config(config));
}

pub fn println(level: LogLevel, lines: impl IntoLines) -> Emission {
    logcat().println(level, lines)
}

pub fn v(lines: impl IntoLines) -> Emission {
    logcat().v(lines)
}

pub fn d(lines: impl IntoLines) -> Emission {
    logcat().d(lines)
}

pub fn i(lines: impl IntoLines) -> Emission {
    logcat().i(lines)
}

pub fn w(lines: impl IntoLines) -> Emission {
    logcat().w(lines)
}

pub fn e(lines: impl IntoLines) -> Emission {
    logcat().e(lines)
}

/// 静默模式，之后的日志既不输出也不写文件
pub fn silence() {
    logcat().silence();
}

pub fn read_log(date: NaiveDate) -> Result<String, LogCatError> {
    logcat().read_log(date)
}

pub fn clear_local_log() -> Result<DeleteReport, LogCatError> {
    logcat().clear_local_log()
}

pub fn local_log_path() -> Option<PathBuf> {
    logcat().local_log_path()
}
