// 配置加载：JSON5 / YAML / TOML

use anyhow::{anyhow, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

/// 从 JSON 字符串加载配置（支持 JSON5：注释、尾随逗号、未引用的键）
pub fn from_json5<T: DeserializeOwned>(text: &str) -> Result<T> {
    Ok(json5::from_str(text)?)
}

/// 从 YAML 字符串加载配置
pub fn from_yaml<T: DeserializeOwned>(text: &str) -> Result<T> {
    Ok(serde_yaml::from_str(text)?)
}

/// 从 TOML 字符串加载配置
pub fn from_toml<T: DeserializeOwned>(text: &str) -> Result<T> {
    Ok(toml::from_str(text)?)
}

/// 从文件加载配置，按扩展名选择格式
///
/// 支持 `.json` / `.json5` / `.yaml` / `.yml` / `.toml`
pub fn from_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|e| anyhow!("读取配置文件失败 {}: {}", path.display(), e))?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "json" | "json5" => from_json5(&text),
        "yaml" | "yml" => from_yaml(&text),
        "toml" => from_toml(&text),
        _ => Err(anyhow!("不支持的配置文件格式: {}", path.display())),
    }
}
