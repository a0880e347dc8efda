//! # 能带结构数据模型
//!
//! 定义能带路径段 (`BandPath`) 与单组能带结构 (`BandSet`)。
//!
//! ## 数据格式
//! ```text
//! {
//!   "fermi_level": -7.0,
//!   "path": [["GAMMA", "Y"], ["Y", "C_0"]],
//!   "paths": [
//!     { "length": 3, "from": "GAMMA", "to": "Y",
//!       "values": [[...], [...]],     # 每条能带一个序列
//!       "x": [0.0, 1.0, 2.0] }
//!   ]
//! }
//! ```
//!
//! ## 依赖关系
//! - 被 `schema/`、`pipeline/builder.rs`、`models/kpath.rs` 使用
//! - 无外部模块依赖

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// 能带路径中的一段（两个高对称点之间）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandPath {
    /// 起点标签
    pub from: String,

    /// 终点标签
    pub to: String,

    /// 点数，输入中 `2.0` 这样的整数值浮点数也接受
    #[serde(deserialize_with = "deserialize_length")]
    pub length: usize,

    /// 能带本征值，每条能带一个序列，长度等于 `length`
    pub values: Vec<Vec<f64>>,

    /// 路径坐标
    pub x: Vec<f64>,

    /// 自旋极化计算时前一半能带为 up、后一半为 down
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub two_band_types: Option<bool>,

    /// 未识别的字段原样保留
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn deserialize_length<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 {
        Ok(value as usize)
    } else {
        Err(D::Error::custom(format!(
            "length must be a non-negative integer, found {}",
            value
        )))
    }
}

impl BandPath {
    /// 能带条数
    pub fn num_bands(&self) -> usize {
        self.values.len()
    }

    /// 该段是否连接两个给定点（任意方向）
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

/// 一组完整的能带结构
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandSet {
    /// 费米能级 (eV)
    pub fermi_level: f64,

    /// 默认绘图路径，每个元素为 (起点, 终点)
    pub path: Vec<(String, String)>,

    /// 全部路径段
    pub paths: Vec<BandPath>,

    /// y 轴标签
    #[serde(rename = "Y_label", default, skip_serializing_if = "Option::is_none")]
    pub y_label: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BandSet {
    /// 查找连接两点的路径段
    ///
    /// 返回 `(段, 是否需要反向遍历)`；正向匹配优先。
    pub fn find_segment(&self, from: &str, to: &str) -> Option<(&BandPath, bool)> {
        self.paths.iter().find_map(|segment| {
            if segment.from == from && segment.to == to {
                Some((segment, false))
            } else if segment.from == to && segment.to == from {
                Some((segment, true))
            } else {
                None
            }
        })
    }

    /// 所有路径段中的最大能带条数
    pub fn max_bands(&self) -> usize {
        self.paths.iter().map(BandPath::num_bands).max().unwrap_or(0)
    }

    /// 是否包含自旋极化的路径段
    pub fn is_spin_polarized(&self) -> bool {
        self.paths
            .iter()
            .any(|segment| segment.two_band_types.unwrap_or(false))
    }
}
