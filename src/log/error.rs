use thiserror::Error;

/// 本地日志读写错误
///
/// 前两个变体的文本与历史上返回的失败字符串保持一致
#[derive(Error, Debug)]
pub enum LogCatError {
    #[error("read fail, application is null.")]
    UnboundContext,

    #[error("read fail, file `{file}` non-existent.")]
    FileNotFound { file: String },

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
}
