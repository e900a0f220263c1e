//! cfg 模块 - 配置加载
//!
//! 从 JSON5 / YAML / TOML 加载任意可反序列化的配置结构

pub mod loader;
pub mod macros;

pub use loader::{from_file, from_json5, from_toml, from_yaml};
