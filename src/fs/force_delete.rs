//! 递归删除
//!
//! 删除文件或目录；目录会先递归删除其所有子项，最后删除自身。
//! 符号链接只删除链接本身，不会跟随，因此不会因链接成环而无限递归。

use smart_default::SmartDefault;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 递归删除选项
#[derive(Debug, Clone, SmartDefault)]
pub struct ForceDeleteOptions {
    /// 最大递归深度（根目录为 0），超过该深度的条目不会被删除并记为失败
    #[default = 64]
    pub max_depth: usize,
}

/// 单个条目的删除失败
#[derive(Debug)]
pub struct DeleteFailure {
    pub path: PathBuf,
    pub error: io::Error,
}

impl fmt::Display for DeleteFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.error)
    }
}

/// 删除错误
#[derive(Error, Debug)]
pub enum FsError {
    #[error("删除不完整: {} 个条目失败", .0.len())]
    Incomplete(Vec<DeleteFailure>),
}

/// 删除结果汇总
///
/// 已经不存在的条目（例如被并发删除）既不算成功也不算失败。
#[derive(Debug, Default)]
pub struct DeleteReport {
    /// 已删除的路径，子项先于父目录
    pub removed: Vec<PathBuf>,
    /// 删除失败的条目
    pub failures: Vec<DeleteFailure>,
}

impl DeleteReport {
    /// 是否全部删除成功
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// 合并另一个结果
    pub fn merge(&mut self, other: DeleteReport) {
        self.removed.extend(other.removed);
        self.failures.extend(other.failures);
    }

    /// 转换为 Result，存在失败时返回 `FsError::Incomplete`
    pub fn into_result(self) -> Result<Vec<PathBuf>, FsError> {
        if self.failures.is_empty() {
            Ok(self.removed)
        } else {
            Err(FsError::Incomplete(self.failures))
        }
    }

    fn record(&mut self, path: &Path, result: io::Result<()>) {
        match result {
            Ok(()) => self.removed.push(path.to_path_buf()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => self.failures.push(DeleteFailure {
                path: path.to_path_buf(),
                error: e,
            }),
        }
    }
}

/// 使用默认选项递归删除
pub fn force_delete(path: impl AsRef<Path>) -> DeleteReport {
    force_delete_with(path, &ForceDeleteOptions::default())
}

/// 递归删除文件或目录
///
/// # 示例
///
/// ```no_run
/// use droidx::fs::force_delete;
///
/// let report = force_delete("/tmp/cache");
/// for failure in &report.failures {
///     eprintln!("{}", failure);
/// }
/// ```
pub fn force_delete_with(path: impl AsRef<Path>, options: &ForceDeleteOptions) -> DeleteReport {
    let mut report = DeleteReport::default();
    delete_entry(path.as_ref(), 0, options, &mut report);
    report
}

fn delete_entry(path: &Path, depth: usize, options: &ForceDeleteOptions, report: &mut DeleteReport) {
    let metadata = match std::fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) => {
            report.record(path, Err(e));
            return;
        }
    };

    if !metadata.is_dir() {
        report.record(path, std::fs::remove_file(path));
        return;
    }

    if depth >= options.max_depth {
        report.record(
            path,
            Err(io::Error::new(
                io::ErrorKind::Other,
                format!("超过最大递归深度 {}", options.max_depth),
            )),
        );
        return;
    }

    match std::fs::read_dir(path) {
        Ok(entries) => {
            for entry in entries {
                match entry {
                    Ok(entry) => delete_entry(&entry.path(), depth + 1, options, report),
                    Err(e) => report.record(path, Err(e)),
                }
            }
        }
        Err(e) => report.record(path, Err(e)),
    }

    report.record(path, std::fs::remove_dir(path));
}
