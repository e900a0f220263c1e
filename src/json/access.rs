//! 按 key 取值
//!
//! key 不存在或值类型无法转换时返回默认值。数字字符串与数字之间的转换
//! 与 `org.json` 的宽松规则一致：`"12"` 可以按整数读取，`12` 可以按字符串读取。

use serde_json::Value;

use super::parse::JsonObject;

/// 判断 key 是否存在
pub fn has_key(object: &JsonObject, key: &str) -> bool {
    object.contains_key(key)
}

/// 获取原始值
pub fn get<'a>(object: &'a JsonObject, key: &str) -> Option<&'a Value> {
    object.get(key)
}

pub fn get_string(object: &JsonObject, key: &str) -> String {
    get_string_or(object, key, "")
}

pub fn get_string_or(object: &JsonObject, key: &str, default: &str) -> String {
    match object.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => default.to_string(),
        Some(other) => other.to_string(),
    }
}

pub fn get_bool(object: &JsonObject, key: &str) -> bool {
    get_bool_or(object, key, false)
}

pub fn get_bool_or(object: &JsonObject, key: &str, default: bool) -> bool {
    match object.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) if s.eq_ignore_ascii_case("true") => true,
        Some(Value::String(s)) if s.eq_ignore_ascii_case("false") => false,
        _ => default,
    }
}

pub fn get_i64(object: &JsonObject, key: &str) -> i64 {
    get_i64_or(object, key, 0)
}

pub fn get_i64_or(object: &JsonObject, key: &str, default: i64) -> i64 {
    object.get(key).and_then(coerce_i64).unwrap_or(default)
}

pub fn get_i32(object: &JsonObject, key: &str) -> i32 {
    get_i32_or(object, key, 0)
}

pub fn get_i32_or(object: &JsonObject, key: &str, default: i32) -> i32 {
    object
        .get(key)
        .and_then(coerce_i64)
        .and_then(|n| i32::try_from(n).ok())
        .unwrap_or(default)
}

pub fn get_f64(object: &JsonObject, key: &str) -> f64 {
    get_f64_or(object, key, 0.0)
}

pub fn get_f64_or(object: &JsonObject, key: &str, default: f64) -> f64 {
    object.get(key).and_then(coerce_f64).unwrap_or(default)
}

/// 获取数组字段中的所有对象，非对象元素被跳过
pub fn get_object_array(object: &JsonObject, key: &str) -> Vec<JsonObject> {
    match object.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_object().cloned())
            .collect(),
        _ => Vec::new(),
    }
}

fn coerce_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f as i64))
        }
        _ => None,
    }
}

fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
