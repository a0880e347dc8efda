//! # 规范化输出数据模型
//!
//! 定义能量窗口 (`EnergyRange`) 以及交给前端绘图组件的 `NormalizedOutput`。
//! 前端按属性逐个同步，因此输出既可整体序列化，也可展开为属性表。
//!
//! ## 依赖关系
//! - 被 `pipeline/`、`io/export.rs`、`commands/` 使用
//! - 使用 `models/bands.rs`, `models/dos.rs`

use crate::error::{BandsplotError, Result};
use crate::models::{BandSet, DosSet};

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// 相对费米能的能量窗口
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyRange {
    pub ymin: f64,
    pub ymax: f64,
}

impl Default for EnergyRange {
    fn default() -> Self {
        EnergyRange {
            ymin: -10.0,
            ymax: 10.0,
        }
    }
}

impl EnergyRange {
    /// 创建并检查 `ymin < ymax`
    pub fn new(ymin: f64, ymax: f64) -> Result<Self> {
        let range = EnergyRange { ymin, ymax };
        range.check()?;
        Ok(range)
    }

    /// 检查窗口有效（NaN 视为无效）
    pub fn check(&self) -> Result<()> {
        if self.ymin < self.ymax {
            Ok(())
        } else {
            Err(BandsplotError::InvalidRange(format!(
                "ymin ({}) must be smaller than ymax ({})",
                self.ymin, self.ymax
            )))
        }
    }

    /// 平移到绝对能量后的开区间边界
    pub fn absolute_bounds(&self, fermi: f64) -> (f64, f64) {
        (self.ymin + fermi, self.ymax + fermi)
    }
}

/// 交给前端的规范化结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedOutput {
    /// 校验后的能带结构，原样传递
    pub bands: Vec<BandSet>,

    /// 每组能带的费米能级，顺序与 `bands` 一致
    pub band_fermienergy: Vec<f64>,

    /// 每组能带的颜色
    pub bands_color: Vec<String>,

    /// 截断并转换颜色后的 DOS
    pub dos: Option<DosSet>,

    pub dos_fermienergy: Option<f64>,

    /// y 轴范围 `[min, max]`（已含 5% 边距）
    pub dos_range: Option<[f64; 2]>,

    pub energy_range: EnergyRange,

    pub plot_fermilevel: bool,

    pub show_legend: bool,
}

impl NormalizedOutput {
    /// 同步属性名，顺序即前端声明顺序
    pub const PROPERTY_NAMES: [&'static str; 9] = [
        "bands",
        "dos",
        "band_fermienergy",
        "dos_fermienergy",
        "bands_color",
        "dos_range",
        "energy_range",
        "plot_fermilevel",
        "show_legend",
    ];

    /// 展开为逐项同步的属性表
    ///
    /// 缺失的 DOS 相关属性使用前端的默认值：`{}`、`0.0`、`[]`。
    pub fn properties(&self) -> Result<Map<String, Value>> {
        let mut props = Map::new();
        props.insert("bands".to_string(), to_value(&self.bands)?);
        props.insert(
            "dos".to_string(),
            match &self.dos {
                Some(dos) => to_value(dos)?,
                None => Value::Object(Map::new()),
            },
        );
        props.insert(
            "band_fermienergy".to_string(),
            to_value(&self.band_fermienergy)?,
        );
        props.insert(
            "dos_fermienergy".to_string(),
            json!(self.dos_fermienergy.unwrap_or(0.0)),
        );
        props.insert("bands_color".to_string(), to_value(&self.bands_color)?);
        props.insert(
            "dos_range".to_string(),
            match self.dos_range {
                Some(range) => json!(range),
                None => json!([]),
            },
        );
        props.insert("energy_range".to_string(), to_value(&self.energy_range)?);
        props.insert("plot_fermilevel".to_string(), json!(self.plot_fermilevel));
        props.insert("show_legend".to_string(), json!(self.show_legend));
        Ok(props)
    }
}

fn to_value<T: Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| BandsplotError::Other(e.to_string()))
}
