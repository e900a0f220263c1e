mod console_sink;
mod memory_sink;
mod trait_;

pub use console_sink::{ConsoleSink, ConsoleSinkConfig, Target};
pub use memory_sink::{MemorySink, SinkLine};
pub use trait_::LogSink;
