//! 日志宏模块
//!
//! 以可变参数的形式向全局 LogCat 输出多行日志，每个参数为一行
//!
//! # 示例
//!
//! ```ignore
//! logcat_i!("request finished", format!("cost: {}ms", cost));
//! ```

/// 以指定级别输出多行日志
#[macro_export]
macro_rules! logcat {
    ($level:expr, $($line:expr),+ $(,)?) => {
        $crate::log::global::println(
            $level,
            vec![$(::std::string::ToString::to_string(&$line)),+],
        )
    };
}

/// 输出 VERBOSE 级别日志
#[macro_export]
macro_rules! logcat_v {
    ($($line:expr),+ $(,)?) => {
        $crate::logcat!($crate::log::LogLevel::Verbose, $($line),+)
    };
}

/// 输出 DEBUG 级别日志
#[macro_export]
macro_rules! logcat_d {
    ($($line:expr),+ $(,)?) => {
        $crate::logcat!($crate::log::LogLevel::Debug, $($line),+)
    };
}

/// 输出 INFO 级别日志
#[macro_export]
macro_rules! logcat_i {
    ($($line:expr),+ $(,)?) => {
        $crate::logcat!($crate::log::LogLevel::Info, $($line),+)
    };
}

/// 输出 WARN 级别日志
#[macro_export]
macro_rules! logcat_w {
    ($($line:expr),+ $(,)?) => {
        $crate::logcat!($crate::log::LogLevel::Warn, $($line),+)
    };
}

/// 输出 ERROR 级别日志
#[macro_export]
macro_rules! logcat_e {
    ($($line:expr),+ $(,)?) => {
        $crate::logcat!($crate::log::LogLevel::Error, $($line),+)
    };
}
