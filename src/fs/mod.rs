//! 文件系统操作模块
//!
//! 提供递归删除功能

pub mod force_delete;

pub use force_delete::{
    force_delete, force_delete_with, DeleteFailure, DeleteReport, ForceDeleteOptions, FsError,
};
