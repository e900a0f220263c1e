use serde_json::{Map, Value};
use thiserror::Error;

/// JSON 对象
pub type JsonObject = Map<String, Value>;

/// JSON 数组
pub type JsonArray = Vec<Value>;

/// JSON 解析错误
#[derive(Error, Debug)]
pub enum JsonError {
    #[error("JSON 语法错误: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error("类型不匹配: 期望 {expected}, 实际为 {found}")]
    UnexpectedType {
        expected: &'static str,
        found: &'static str,
    },
}

/// 解析为 JSON 对象
pub fn parse(text: &str) -> Result<JsonObject, JsonError> {
    match serde_json::from_str::<Value>(text)? {
        Value::Object(object) => Ok(object),
        other => Err(JsonError::UnexpectedType {
            expected: "object",
            found: kind_of(&other),
        }),
    }
}

/// 解析为 JSON 数组
pub fn parse_array(text: &str) -> Result<JsonArray, JsonError> {
    match serde_json::from_str::<Value>(text)? {
        Value::Array(array) => Ok(array),
        other => Err(JsonError::UnexpectedType {
            expected: "array",
            found: kind_of(&other),
        }),
    }
}

pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// 字符串上的 JSON 解析扩展
///
/// ```
/// use droidx::json::JsonStrExt;
///
/// let user = r#"{"name":"alice"}"#.parse_json_object().unwrap();
/// assert_eq!(user["name"], "alice");
/// ```
pub trait JsonStrExt {
    fn parse_json_object(&self) -> Result<JsonObject, JsonError>;
    fn parse_json_array(&self) -> Result<JsonArray, JsonError>;
}

impl JsonStrExt for str {
    fn parse_json_object(&self) -> Result<JsonObject, JsonError> {
        parse(self)
    }

    fn parse_json_array(&self) -> Result<JsonArray, JsonError> {
        parse_array(self)
    }
}

/// JSON 容器的空判断
pub trait JsonEmptiness {
    fn is_json_empty(&self) -> bool;

    fn is_json_not_empty(&self) -> bool {
        !self.is_json_empty()
    }
}

impl JsonEmptiness for JsonObject {
    fn is_json_empty(&self) -> bool {
        self.is_empty()
    }
}

impl JsonEmptiness for JsonArray {
    fn is_json_empty(&self) -> bool {
        self.is_empty()
    }
}

impl JsonEmptiness for Value {
    /// null、空对象、空数组视为空；标量值不为空
    fn is_json_empty(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Object(object) => object.is_empty(),
            Value::Array(array) => array.is_empty(),
            _ => false,
        }
    }
}

impl<T: JsonEmptiness> JsonEmptiness for Option<T> {
    fn is_json_empty(&self) -> bool {
        self.as_ref().map_or(true, JsonEmptiness::is_json_empty)
    }
}

pub fn is_empty<T: JsonEmptiness + ?Sized>(value: &T) -> bool {
    value.is_json_empty()
}

pub fn is_not_empty<T: JsonEmptiness + ?Sized>(value: &T) -> bool {
    value.is_json_not_empty()
}
