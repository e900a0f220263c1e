//! JSON 便捷封装
//!
//! 解析完全委托给 `serde_json`，这里只提供对象/数组的解析入口、空判断和带默认值的取值。

pub mod access;
pub mod parse;

pub use access::{
    get, get_bool, get_bool_or, get_f64, get_f64_or, get_i32, get_i32_or, get_i64, get_i64_or,
    get_object_array, get_string, get_string_or, has_key,
};
pub use parse::{
    is_empty, is_not_empty, parse, parse_array, JsonArray, JsonEmptiness, JsonError, JsonObject,
    JsonStrExt,
};
