//! # bandsplot - 能带 / DOS 绘图数据规范化
//!
//! 校验能带结构与态密度（DOS）JSON 数据，并变换为前端绘图组件
//! 直接使用的属性表。
//!
//! ## 主要功能
//! - 按内置 JSON Schema 校验输入，报告首个违反项的位置
//! - 合并同一元素、同一轨道的投影 DOS
//! - 按费米能附近的能量窗口截断 DOS 曲线
//! - 计算 DOS 轴范围，把填充色转换为 `rgba(...)`
//! - 为多组能带分配默认颜色
//!
//! ## 依赖关系
//! ```text
//! lib.rs
//!   ├── pipeline/   (规范化流程)
//!   │     ├── schema/    (输入校验)
//!   │     └── models/    (数据模型)
//!   ├── io/         (文件读写)
//!   ├── batch/      (批量校验)
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

pub mod batch;
pub mod cli;
pub mod commands;
pub mod error;
pub mod io;
pub mod models;
pub mod pipeline;
pub mod schema;
pub mod utils;

pub use error::{BandsplotError, Result};
pub use models::{BandSet, DosSeries, DosSet, EnergyRange, NormalizedOutput};
pub use pipeline::{build, BuildOptions};
