mod box_formatter;

pub use box_formatter::{BorderStyle, BoxFormatter, BoxFormatterConfig, FormattedLine, LineKind};
