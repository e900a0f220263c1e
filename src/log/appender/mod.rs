mod daily_file_appender;

pub use daily_file_appender::{format_file_line, DailyFileAppender};
