//! droidx - 源自 Android 工具扩展的小型工具集合
//!
//! ## 模块
//!
//! - **log**: 盒式 logcat 输出，可选按天保存到本地文件
//! - **fs**: 递归删除
//! - **json**: JSON 解析与取值的便捷封装（基于 serde_json）
//! - **text**: 字符串空判断等工具
//! - **cfg**: 从 JSON5 / YAML / TOML 加载配置

pub mod cfg;
pub mod fs;
pub mod json;
pub mod log;
pub mod text;

// 重新导出主要的公共 API
pub use fs::{force_delete, DeleteReport};
pub use json::{JsonArray, JsonObject, JsonStrExt};
pub use log::{AppContext, Emission, LogCat, LogCatConfig, LogCatError, LogLevel, LogSink};
pub use text::TextExt;
