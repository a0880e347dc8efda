//! # 数据模型模块
//!
//! 定义能带结构、态密度以及规范化输出的数据模型。
//!
//! ## 依赖关系
//! - 被 `schema/`、`pipeline/` 和 `commands/` 使用
//! - 子模块: bands, dos, output, kpath

pub mod bands;
pub mod dos;
pub mod kpath;
pub mod output;

pub use bands::{BandPath, BandSet};
pub use dos::{DosSeries, DosSet, LineStyle};
pub use output::{EnergyRange, NormalizedOutput};
