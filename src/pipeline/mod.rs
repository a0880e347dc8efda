//! # 规范化流程模块
//!
//! 把原始能带 / DOS 数据变换为前端可直接使用的 `NormalizedOutput`。
//!
//! ## 数据流
//! ```text
//!  原始 JSON ──► schema 校验 ──► aggregate (合并投影)
//!                                   │
//!                                   ▼
//!                        window (能量窗口截断) + color (RGBA)
//!                                   │
//!                                   ▼
//!                        compute_range ──► NormalizedOutput
//! ```
//!
//! ## 子模块
//! - `color`: 颜色编码与能带默认配色
//! - `window`: 能量窗口截断
//! - `aggregate`: 投影合并与 y 轴范围
//! - `builder`: 端到端流程
//!
//! ## 依赖关系
//! - 被 `commands/build.rs` 使用
//! - 使用 `schema/`, `models/`

pub mod aggregate;
pub mod builder;
pub mod color;
pub mod window;

pub use builder::{build, BuildOptions};
