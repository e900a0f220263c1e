use smart_default::SmartDefault;

use crate::log::log_record::LogRecord;

/// 边框字符
#[derive(Debug, Clone, PartialEq, Eq, SmartDefault)]
pub struct BorderStyle {
    #[default = '╭']
    pub top_start: char,
    #[default = '╮']
    pub top_end: char,
    #[default = '╰']
    pub bottom_start: char,
    #[default = '╯']
    pub bottom_end: char,
    #[default = '│']
    pub bar: char,
    #[default = '├']
    pub start: char,
    #[default = '┤']
    pub end: char,
    #[default = '─']
    pub solid: char,
    #[default = '┄']
    pub dotted: char,
}

/// BoxFormatter 配置
#[derive(Debug, Clone, SmartDefault)]
pub struct BoxFormatterConfig {
    /// 边框最大长度；最长一行达到该长度时改用虚线边框
    #[default = 64]
    pub max_border_size: usize,
    /// 是否输出标题行（tag 与级别）
    #[default = false]
    pub show_title: bool,
    /// 多行之间是否输出分隔线
    #[default = false]
    pub show_divider: bool,
}

/// 输出行的类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    TopBorder,
    Title,
    TitleSeparator,
    /// 消息行，携带其在 `LogRecord::lines` 中的下标
    Content(usize),
    Divider,
    BottomBorder,
}

/// 格式化后的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedLine {
    pub kind: LineKind,
    pub text: String,
}

/// 盒式格式化器
///
/// 将一条多行日志渲染为带边框的若干行：
///
/// ```text
/// ╭──
/// │ APP ─ Level[Warn]
/// ├──
/// ├─A
/// ├─BB
/// ╰──
/// ```
pub struct BoxFormatter {
    config: BoxFormatterConfig,
    style: BorderStyle,
}

impl BoxFormatter {
    pub fn new(config: BoxFormatterConfig) -> Self {
        Self {
            config,
            style: BorderStyle::default(),
        }
    }

    pub fn with_style(mut self, style: BorderStyle) -> Self {
        self.style = style;
        self
    }

    /// 水平边框：短于上限时按最长行的字符数重复实线，否则重复上限次虚线
    pub fn border(&self, longest: usize) -> String {
        if longest < self.config.max_border_size {
            repeat(self.style.solid, longest)
        } else {
            repeat(self.style.dotted, self.config.max_border_size)
        }
    }

    /// 多行之间的分隔线，宽度规则与边框一致，总是虚线
    pub fn divider(&self, longest: usize) -> String {
        repeat(self.style.dotted, longest.min(self.config.max_border_size))
    }

    pub fn format(&self, record: &LogRecord) -> Vec<FormattedLine> {
        let style = &self.style;
        let longest = record.longest_line_len();
        let border = self.border(longest);
        let divider = self.divider(longest);

        let mut lines = Vec::with_capacity(record.lines.len() * 2 + 4);

        lines.push(FormattedLine {
            kind: LineKind::TopBorder,
            text: format!("{}{}", style.top_start, border),
        });

        if self.config.show_title {
            lines.push(FormattedLine {
                kind: LineKind::Title,
                text: format!(
                    "{} {} {} Level[{}]",
                    style.bar,
                    record.tag,
                    style.solid,
                    record.level.name()
                ),
            });
            lines.push(FormattedLine {
                kind: LineKind::TitleSeparator,
                text: format!("{}{}", style.start, border),
            });
        }

        let last = record.lines.len().saturating_sub(1);
        for (index, message) in record.lines.iter().enumerate() {
            lines.push(FormattedLine {
                kind: LineKind::Content(index),
                text: format!("{}{}{}", style.start, style.solid, message),
            });
            if index != last && self.config.show_divider {
                lines.push(FormattedLine {
                    kind: LineKind::Divider,
                    text: format!("{}{}{}", style.start, style.solid, divider),
                });
            }
        }

        lines.push(FormattedLine {
            kind: LineKind::BottomBorder,
            text: format!("{}{}", style.bottom_start, border),
        });

        lines
    }
}

fn repeat(glyph: char, count: usize) -> String {
    std::iter::repeat(glyph).take(count).collect()
}

crate::impl_from!(BoxFormatterConfig => BoxFormatter);
