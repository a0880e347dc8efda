//! # JSON Schema 子集解释器
//!
//! 把 JSON Schema 文档预编译为 `Schema` 树，之后可对任意实例重复校验。
//!
//! ## 支持的关键字
//! - `type`（字符串或字符串数组）
//! - `required`, `properties`, `additionalProperties`（仅 `false` 生效）
//! - `items`, `minItems`, `maxItems`
//! - `minimum`
//! - `enum`, `pattern`（正则搜索语义，需要锚点时由文档自行写 `^...$`）
//!
//! `pattern` 按 ECMA-262 解释：`\d` / `\D` 只匹配 ASCII 数字。
//!
//! 其余关键字（`$schema`, `title`, `description` 等）被忽略。
//!
//! ## 依赖关系
//! - 被 `schema/mod.rs` 使用
//! - 使用 `regex` crate

use regex::Regex;
use serde_json::{Map, Value};

/// JSON 基本类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonType {
    Object,
    Array,
    Number,
    Integer,
    String,
    Boolean,
    Null,
}

impl JsonType {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "object" => Some(JsonType::Object),
            "array" => Some(JsonType::Array),
            "number" => Some(JsonType::Number),
            "integer" => Some(JsonType::Integer),
            "string" => Some(JsonType::String),
            "boolean" => Some(JsonType::Boolean),
            "null" => Some(JsonType::Null),
            _ => None,
        }
    }

    fn matches(&self, value: &Value) -> bool {
        match self {
            JsonType::Object => value.is_object(),
            JsonType::Array => value.is_array(),
            JsonType::Number => value.is_number(),
            JsonType::Integer => match value {
                Value::Number(n) => {
                    n.is_i64() || n.is_u64() || n.as_f64().is_some_and(|f| f.fract() == 0.0)
                }
                _ => false,
            },
            JsonType::String => value.is_string(),
            JsonType::Boolean => value.is_boolean(),
            JsonType::Null => value.is_null(),
        }
    }
}

impl std::fmt::Display for JsonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            JsonType::Object => "object",
            JsonType::Array => "array",
            JsonType::Number => "number",
            JsonType::Integer => "integer",
            JsonType::String => "string",
            JsonType::Boolean => "boolean",
            JsonType::Null => "null",
        };
        write!(f, "{}", name)
    }
}

/// 一次校验失败的详细信息
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// 触发失败的 schema 关键字路径，如 `/properties/dos/items/properties/lineStyle/enum`
    pub schema_path: String,
    /// 实例中出错的位置，如 `/dos/0/lineStyle`
    pub instance_path: String,
    /// 出错值的 JSON 文本
    pub value: String,
    pub reason: String,
}

/// 编译后的 schema 节点
#[derive(Debug, Clone, Default)]
pub struct Schema {
    types: Vec<JsonType>,
    required: Vec<String>,
    properties: Vec<(String, Schema)>,
    additional_properties: bool,
    items: Option<Box<Schema>>,
    min_items: Option<usize>,
    max_items: Option<usize>,
    minimum: Option<f64>,
    enum_values: Option<Vec<Value>>,
    pattern: Option<Regex>,
}

impl Schema {
    /// 从 JSON Schema 文档编译
    pub fn compile(doc: &Value) -> Result<Schema, String> {
        Self::compile_at(doc, "")
    }

    fn compile_at(doc: &Value, path: &str) -> Result<Schema, String> {
        let obj = doc
            .as_object()
            .ok_or_else(|| format!("{}: schema must be an object", display_path(path)))?;

        let mut schema = Schema {
            additional_properties: true,
            ..Default::default()
        };

        if let Some(types) = obj.get("type") {
            schema.types = compile_types(types, path)?;
        }

        if let Some(required) = obj.get("required") {
            schema.required = required
                .as_array()
                .and_then(|names| {
                    names
                        .iter()
                        .map(|n| n.as_str().map(str::to_string))
                        .collect::<Option<Vec<_>>>()
                })
                .ok_or_else(|| {
                    format!("{}/required: expected an array of strings", display_path(path))
                })?;
        }

        if let Some(properties) = obj.get("properties") {
            let properties = properties.as_object().ok_or_else(|| {
                format!("{}/properties: expected an object", display_path(path))
            })?;
            for (name, sub) in properties {
                let sub_path = format!("{}/properties/{}", path, escape_pointer(name));
                schema
                    .properties
                    .push((name.clone(), Self::compile_at(sub, &sub_path)?));
            }
        }

        if let Some(Value::Bool(allowed)) = obj.get("additionalProperties") {
            schema.additional_properties = *allowed;
        }

        if let Some(items) = obj.get("items") {
            let items_path = format!("{}/items", path);
            schema.items = Some(Box::new(Self::compile_at(items, &items_path)?));
        }

        schema.min_items = compile_count(obj, "minItems", path)?;
        schema.max_items = compile_count(obj, "maxItems", path)?;

        if let Some(minimum) = obj.get("minimum") {
            schema.minimum = Some(minimum.as_f64().ok_or_else(|| {
                format!("{}/minimum: expected a number", display_path(path))
            })?);
        }

        if let Some(values) = obj.get("enum") {
            let values = values
                .as_array()
                .ok_or_else(|| format!("{}/enum: expected an array", display_path(path)))?;
            schema.enum_values = Some(values.clone());
        }

        if let Some(pattern) = obj.get("pattern") {
            let pattern = pattern
                .as_str()
                .ok_or_else(|| format!("{}/pattern: expected a string", display_path(path)))?;
            let regex = Regex::new(&ascii_digit_classes(pattern))
                .map_err(|e| format!("{}/pattern: {}", display_path(path), e))?;
            schema.pattern = Some(regex);
        }

        Ok(schema)
    }

    /// 校验实例，返回第一处违规
    pub fn validate(&self, instance: &Value) -> Result<(), Violation> {
        self.validate_at(instance, "", "")
    }

    fn validate_at(
        &self,
        instance: &Value,
        schema_path: &str,
        instance_path: &str,
    ) -> Result<(), Violation> {
        let fail = |keyword: &str, reason: String| Violation {
            schema_path: display_path(&format!("{}/{}", schema_path, keyword)),
            instance_path: display_path(instance_path),
            value: instance.to_string(),
            reason,
        };

        if !self.types.is_empty() && !self.types.iter().any(|t| t.matches(instance)) {
            let expected: Vec<String> = self.types.iter().map(|t| t.to_string()).collect();
            return Err(fail(
                "type",
                format!("{} is not of type {}", instance, expected.join(" or ")),
            ));
        }

        if let Some(allowed) = &self.enum_values {
            if !allowed.contains(instance) {
                let allowed: Vec<String> = allowed.iter().map(|v| v.to_string()).collect();
                return Err(fail(
                    "enum",
                    format!("{} is not one of [{}]", instance, allowed.join(", ")),
                ));
            }
        }

        if let (Some(minimum), Some(number)) = (self.minimum, instance.as_f64()) {
            if number < minimum {
                return Err(fail(
                    "minimum",
                    format!("{} is less than the minimum of {}", instance, minimum),
                ));
            }
        }

        if let (Some(regex), Some(text)) = (&self.pattern, instance.as_str()) {
            if !regex.is_match(text) {
                return Err(fail(
                    "pattern",
                    format!("'{}' does not match '{}'", text, regex.as_str()),
                ));
            }
        }

        if let Some(obj) = instance.as_object() {
            self.validate_object(obj, schema_path, instance_path, &fail)?;
        }

        if let Some(items) = instance.as_array() {
            if let Some(min) = self.min_items {
                if items.len() < min {
                    return Err(fail(
                        "minItems",
                        format!("expected at least {} items, found {}", min, items.len()),
                    ));
                }
            }
            if let Some(max) = self.max_items {
                if items.len() > max {
                    return Err(fail(
                        "maxItems",
                        format!("expected at most {} items, found {}", max, items.len()),
                    ));
                }
            }
            if let Some(item_schema) = &self.items {
                let item_schema_path = format!("{}/items", schema_path);
                for (i, item) in items.iter().enumerate() {
                    item_schema.validate_at(
                        item,
                        &item_schema_path,
                        &format!("{}/{}", instance_path, i),
                    )?;
                }
            }
        }

        Ok(())
    }

    fn validate_object(
        &self,
        obj: &Map<String, Value>,
        schema_path: &str,
        instance_path: &str,
        fail: &dyn Fn(&str, String) -> Violation,
    ) -> Result<(), Violation> {
        for name in &self.required {
            if !obj.contains_key(name) {
                return Err(fail(
                    "required",
                    format!("'{}' is a required property", name),
                ));
            }
        }

        for (name, sub) in &self.properties {
            if let Some(value) = obj.get(name) {
                let escaped = escape_pointer(name);
                sub.validate_at(
                    value,
                    &format!("{}/properties/{}", schema_path, escaped),
                    &format!("{}/{}", instance_path, escaped),
                )?;
            }
        }

        if !self.additional_properties {
            if let Some(extra) = obj
                .keys()
                .find(|key| !self.properties.iter().any(|(name, _)| name == *key))
            {
                return Err(fail(
                    "additionalProperties",
                    format!("additional property '{}' is not allowed", extra),
                ));
            }
        }

        Ok(())
    }
}

fn compile_types(types: &Value, path: &str) -> Result<Vec<JsonType>, String> {
    let names: Vec<&str> = match types {
        Value::String(name) => vec![name.as_str()],
        Value::Array(names) => names
            .iter()
            .map(|n| n.as_str())
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| format!("{}/type: expected strings", display_path(path)))?,
        _ => return Err(format!("{}/type: expected a string or array", display_path(path))),
    };

    names
        .into_iter()
        .map(|name| {
            JsonType::parse(name)
                .ok_or_else(|| format!("{}/type: unknown type '{}'", display_path(path), name))
        })
        .collect()
}

fn compile_count(obj: &Map<String, Value>, keyword: &str, path: &str) -> Result<Option<usize>, String> {
    match obj.get(keyword) {
        None => Ok(None),
        Some(value) => value
            .as_u64()
            .map(|n| Some(n as usize))
            .ok_or_else(|| {
                format!(
                    "{}/{}: expected a non-negative integer",
                    display_path(path),
                    keyword
                )
            }),
    }
}

/// `\d` -> `[0-9]`, `\D` -> `[^0-9]`，其余转义原样保留
fn ascii_digit_classes(pattern: &str) -> String {
    let mut result = String::with_capacity(pattern.len());
    let mut chars = pattern.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('d') => result.push_str("[0-9]"),
            Some('D') => result.push_str("[^0-9]"),
            Some(escaped) => {
                result.push('\\');
                result.push(escaped);
            }
            None => result.push('\\'),
        }
    }

    result
}

/// JSON Pointer 转义（`~` -> `~0`, `/` -> `~1`）
fn escape_pointer(key: &str) -> String {
    key.replace('~', "~0").replace('/', "~1")
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        "/".to_string()
    } else {
        path.to_string()
    }
}
