//! # 统一错误处理模块
//!
//! 定义 bandsplot 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// bandsplot 统一错误类型
#[derive(Error, Debug)]
pub enum BandsplotError {
    // ─────────────────────────────────────────────────────────────
    // 输入数据错误
    // ─────────────────────────────────────────────────────────────
    #[error("{schema} validation failed at '{instance_path}' (schema: {schema_path}): {reason}\nValue: {value}")]
    Validation {
        schema: String,
        schema_path: String,
        instance_path: String,
        value: String,
        reason: String,
    },

    #[error("Band structure or DOS data is required")]
    MissingInput,

    #[error("Invalid color format: {0}")]
    Format(String),

    #[error("Series '{label}' is misaligned: expected {expected} points, found {found}")]
    Alignment {
        label: String,
        expected: usize,
        found: usize,
    },

    #[error("No points of '{label}' fall inside the energy window ({lower}, {upper})")]
    EmptyRange { label: String, lower: f64, upper: f64 },

    #[error("Invalid energy range: {0}")]
    InvalidRange(String),

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse JSON: {path}\nReason: {source}")]
    JsonError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, BandsplotError>;
