//! 日志模块
//!
//! 盒式 logcat 输出，可选按天保存到本地文件。
//!
//! # 特性
//!
//! - 多行消息渲染在一个边框内，可选标题行（tag 与级别）和行间分隔线
//! - 输出端可替换：ConsoleSink、MemorySink 或自定义 LogSink
//! - 本地保存：`{files_dir}/logs/{appName}_{yyyy-MM-dd}.log`，每条消息一行
//! - 全局单例与独立实例两种用法
//!
//! # 快速开始
//!
//! ```rust,no_run
//! use droidx::log::{self, AppContext};
//!
//! log::init(AppContext::new("Demo", "/data/demo/files"), |logcat| {
//!     logcat.set_tag("Demo");
//!     logcat.show_title();
//!     logcat.show_divider();
//!     logcat.save_to_local();
//! });
//!
//! log::i("Application started");
//! log::e(["Connection failed", "retry in 5s"]);
//!
//! let today = chrono::Local::now().date_naive();
//! match log::read_log(today) {
//!     Ok(text) => print!("{}", text),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

pub mod appender;
pub mod context;
pub mod error;
pub mod formatter;
pub mod global;
pub mod level;
pub mod log_record;
pub mod logcat;
pub mod macros;
pub mod sink;

pub use appender::{format_file_line, DailyFileAppender};
pub use context::AppContext;
pub use error::LogCatError;
pub use formatter::{BorderStyle, BoxFormatter, BoxFormatterConfig, FormattedLine, LineKind};
pub use global::{
    clear_local_log, d, e, i, init, init_with_config, local_log_path, println, read_log,
    silence, v, w,
};
pub use level::{level_name, LogLevel};
pub use log_record::{IntoLines, LogRecord};
pub use logcat::{Emission, LogCat, LogCatConfig};
pub use sink::{ConsoleSink, ConsoleSinkConfig, LogSink, MemorySink, SinkLine, Target};
