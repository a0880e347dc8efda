//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `io/`, `pipeline/`, `models/`, `utils/`
//! - 子模块: build, validate, inspect

pub mod build;
pub mod inspect;
pub mod validate;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Build(args) => build::execute(args),
        Commands::Validate(args) => validate::execute(args),
        Commands::Inspect(args) => inspect::execute(args),
    }
}
