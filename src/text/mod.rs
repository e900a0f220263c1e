//! 字符串工具
//!
//! 空判断会先去掉首尾空白；字面量 `"null"` 也视为空。

use std::num::{ParseFloatError, ParseIntError};

/// 是否为 None、空白字符串或 `"null"`
pub fn is_null_string_or_empty(text: Option<&str>) -> bool {
    match text {
        None => true,
        Some(s) => {
            let s = s.trim();
            s.is_empty() || s == "null"
        }
    }
}

pub fn is_not_empty(text: Option<&str>) -> bool {
    !is_null_string_or_empty(text)
}

/// 所有元素是否都为空；空列表返回 false
pub fn is_empties(texts: &[Option<&str>]) -> bool {
    !texts.is_empty() && texts.iter().all(|t| is_null_string_or_empty(*t))
}

pub fn is_not_empties(texts: &[Option<&str>]) -> bool {
    !is_empties(texts)
}

/// 是否包含所有给定子串；未给出子串时返回 false
pub fn contains_all(text: Option<&str>, needles: &[&str]) -> bool {
    match text {
        Some(s) if !needles.is_empty() => needles.iter().all(|n| s.contains(n)),
        _ => false,
    }
}

/// 去掉所有空白字符
pub fn trim_all(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

pub fn to_i32(text: &str) -> Result<i32, ParseIntError> {
    text.trim().parse()
}

pub fn to_i32_radix(text: &str, radix: u32) -> Result<i32, ParseIntError> {
    i32::from_str_radix(text, radix)
}

pub fn to_f32(text: &str) -> Result<f32, ParseFloatError> {
    text.trim().parse()
}

pub fn to_f64(text: &str) -> Result<f64, ParseFloatError> {
    text.trim().parse()
}

/// 字符串扩展
pub trait TextExt {
    fn is_null_string_or_empty(&self) -> bool;
    fn contains_all(&self, needles: &[&str]) -> bool;
    fn trim_all(&self) -> String;
}

impl TextExt for str {
    fn is_null_string_or_empty(&self) -> bool {
        is_null_string_or_empty(Some(self))
    }

    fn contains_all(&self, needles: &[&str]) -> bool {
        contains_all(Some(self), needles)
    }

    fn trim_all(&self) -> String {
        trim_all(self)
    }
}

impl TextExt for Option<&str> {
    fn is_null_string_or_empty(&self) -> bool {
        is_null_string_or_empty(*self)
    }

    fn contains_all(&self, needles: &[&str]) -> bool {
        contains_all(*self, needles)
    }

    fn trim_all(&self) -> String {
        self.map(trim_all).unwrap_or_default()
    }
}
