//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `build`: 校验并规范化能带 / DOS，写出前端属性表
//! - `validate`: 按 schema 校验单个文件或整个目录
//! - `inspect`: 查看能带文件的 k 路径与高对称点
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: build, validate, inspect

pub mod build;
pub mod inspect;
pub mod validate;

use clap::{Parser, Subcommand};

/// bandsplot - 能带 / DOS 绘图数据规范化工具
#[derive(Parser)]
#[command(name = "bandsplot")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Validate and normalize band structure and DOS data for plotting", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Normalize band structure and DOS data into plot properties
    Build(build::BuildArgs),

    /// Validate band structure or DOS files against their schemas
    Validate(validate::ValidateArgs),

    /// Show the k-point path and high-symmetry points of band files
    Inspect(inspect::InspectArgs),
}
