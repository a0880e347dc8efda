//! # 文件读写模块
//!
//! 读取能带 / DOS 输入文件，导出规范化结果。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: loader, export

pub mod export;
pub mod loader;

pub use loader::{detect_kind, load_bands, load_json, InputKind};
