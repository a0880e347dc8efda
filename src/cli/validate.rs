//! # validate 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/validate.rs`

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 输入文件类型
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum KindArg {
    /// Detect from the top-level keys
    #[default]
    Auto,
    /// Band structure (bands schema)
    Bands,
    /// Density of states (pdos schema)
    Dos,
}

/// validate 子命令参数
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Input file or directory
    pub input: PathBuf,

    /// Data kind of the input files
    #[arg(long, value_enum, default_value_t = KindArg::Auto)]
    pub kind: KindArg,

    /// File name patterns in directory mode, comma separated
    #[arg(long, default_value = "*.json")]
    pub pattern: String,

    /// Search directories recursively
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Number of parallel jobs (0 = all CPUs)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,
}
