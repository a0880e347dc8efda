//! # 输入文件读取
//!
//! 读取能带 / DOS 的 JSON 文件，并按顶层键判断数据类型。
//!
//! ## 支持的文件内容
//! - 能带：单个 band set 对象，或 band set 对象数组
//! - DOS：含 `fermi_energy` 与 `dos` 的对象
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `serde_json`

use crate::error::{BandsplotError, Result};

use serde_json::Value;
use std::fs;
use std::path::Path;

/// 输入数据类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Bands,
    Dos,
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputKind::Bands => write!(f, "bands"),
            InputKind::Dos => write!(f, "dos"),
        }
    }
}

/// 读取并解析 JSON 文件
pub fn load_json(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(BandsplotError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| BandsplotError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| BandsplotError::JsonError {
        path: path.display().to_string(),
        source: e,
    })
}

/// 读取能带文件，统一为 band set 列表
pub fn load_bands(path: &Path) -> Result<Vec<Value>> {
    Ok(match load_json(path)? {
        Value::Array(items) => items,
        single => vec![single],
    })
}

/// 按顶层键判断数据类型
pub fn detect_kind(value: &Value) -> Option<InputKind> {
    match value {
        Value::Array(items) => items.first().and_then(detect_kind).filter(|k| *k == InputKind::Bands),
        Value::Object(obj) => {
            if obj.contains_key("dos") || obj.contains_key("fermi_energy") {
                Some(InputKind::Dos)
            } else if obj.contains_key("paths") || obj.contains_key("fermi_level") {
                Some(InputKind::Bands)
            } else {
                None
            }
        }
        _ => None,
    }
}
