//! # inspect 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/inspect.rs`

use clap::Args;
use std::path::PathBuf;

/// inspect 子命令参数
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Band structure JSON files
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Check a k-point path string against the loaded bands (e.g. 'GAMMA-X-M|R-GAMMA')
    #[arg(long)]
    pub path: Option<String>,
}
