use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};

/// 日志子目录名
pub const LOG_DIR_NAME: &str = "logs";

/// 应用上下文
///
/// 提供应用名称与应用私有文件目录，本地日志保存在 `{files_dir}/logs` 下
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppContext {
    app_name: String,
    files_dir: PathBuf,
}

impl AppContext {
    pub fn new(app_name: impl Into<String>, files_dir: impl Into<PathBuf>) -> Self {
        Self {
            app_name: app_name.into(),
            files_dir: files_dir.into(),
        }
    }

    /// 使用平台数据目录：`{data_local_dir}/{app_name}`
    pub fn from_app_name(app_name: impl Into<String>) -> Result<Self> {
        let app_name = app_name.into();
        let base = dirs::data_local_dir().ok_or_else(|| anyhow!("无法确定本地数据目录"))?;
        let files_dir = base.join(&app_name);
        Ok(Self::new(app_name, files_dir))
    }

    /// 应用显示名称，用作日志文件名前缀
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn files_dir(&self) -> &Path {
        &self.files_dir
    }

    /// 本地日志目录
    pub fn log_dir(&self) -> PathBuf {
        self.files_dir.join(LOG_DIR_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_dir() {
        let context = AppContext::new("Demo", "/data/demo/files");
        assert_eq!(context.app_name(), "Demo");
        assert_eq!(context.files_dir(), Path::new("/data/demo/files"));
        assert_eq!(context.log_dir(), PathBuf::from("/data/demo/files/logs"));
    }

    #[test]
    fn test_from_app_name() {
        if let Ok(context) = AppContext::from_app_name("Demo") {
            assert!(context.files_dir().ends_with("Demo"));
            assert!(context.log_dir().ends_with("Demo/logs"));
        }
    }
}
