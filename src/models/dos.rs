//! # 态密度 (DOS) 数据模型
//!
//! 定义单条 DOS 曲线 (`DosSeries`) 与完整 DOS 数据 (`DosSet`)。
//! 第一条曲线按惯例为总态密度，其余为投影态密度 (PDOS)。
//!
//! ## 依赖关系
//! - 被 `schema/`、`pipeline/` 使用
//! - 无外部模块依赖

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 未指定 `backgroundColor` 时使用的填充色
pub const DEFAULT_BACKGROUND_COLOR: &str = "#DCDCDC";

/// 未指定 `backgroundAlpha` 时使用的透明度（完全透明）
pub const DEFAULT_BACKGROUND_ALPHA: &str = "0%";

/// 曲线线型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    Solid,
    Dash,
}

impl std::fmt::Display for LineStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineStyle::Solid => write!(f, "solid"),
            LineStyle::Dash => write!(f, "dash"),
        }
    }
}

/// 单条 DOS 曲线
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DosSeries {
    /// 图例标签
    pub label: String,

    /// 能量 (eV)
    pub x: Vec<f64>,

    /// 态密度，与 `x` 等长
    pub y: Vec<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,

    /// 输入为 `#RRGGBB`，规范化后为 RGBA 字符串
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    /// 百分比透明度，如 `"50%"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_alpha: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,

    /// 投影的原子种类（如 `"Co"`）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// 投影的轨道（如 `"d"`）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orbital: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DosSeries {
    /// 创建只含标签与数据的曲线
    pub fn new(label: impl Into<String>, x: Vec<f64>, y: Vec<f64>) -> Self {
        DosSeries {
            label: label.into(),
            x,
            y,
            border_color: None,
            background_color: None,
            background_alpha: None,
            line_style: None,
            kind: None,
            orbital: None,
            extra: Map::new(),
        }
    }

    /// 聚合键 (kind, orbital)，两者都存在时才有效
    pub fn projection_key(&self) -> Option<(&str, &str)> {
        match (&self.kind, &self.orbital) {
            (Some(kind), Some(orbital)) => Some((kind.as_str(), orbital.as_str())),
            _ => None,
        }
    }

    /// 填充色，缺省为 [`DEFAULT_BACKGROUND_COLOR`]
    pub fn background_color_or_default(&self) -> &str {
        self.background_color
            .as_deref()
            .unwrap_or(DEFAULT_BACKGROUND_COLOR)
    }

    /// 透明度百分比字符串，缺省为 [`DEFAULT_BACKGROUND_ALPHA`]
    pub fn background_alpha_or_default(&self) -> &str {
        self.background_alpha
            .as_deref()
            .unwrap_or(DEFAULT_BACKGROUND_ALPHA)
    }
}

/// 完整的 DOS 数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DosSet {
    /// 费米能 (eV)
    pub fermi_energy: f64,

    /// 所有曲线，顺序有意义
    pub dos: Vec<DosSeries>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_series_defaults() {
        let series: DosSeries = serde_json::from_value(json!({
            "label": "Total DOS",
            "x": [0.0, 0.1],
            "y": [1.2, 3.2]
        }))
        .unwrap();

        assert_eq!(series.background_color_or_default(), "#DCDCDC");
        assert_eq!(series.background_alpha_or_default(), "0%");
        assert!(series.projection_key().is_none());
    }

    #[test]
    fn test_series_camel_case_fields() {
        let series: DosSeries = serde_json::from_value(json!({
            "label": "Co_d(dn)",
            "x": [0.0],
            "y": [1.0],
            "borderColor": "#403bae",
            "backgroundAlpha": "50%",
            "lineStyle": "dash",
            "kind": "Co",
            "orbital": "d",
            "spin": "dn"
        }))
        .unwrap();

        assert_eq!(series.border_color.as_deref(), Some("#403bae"));
        assert_eq!(series.line_style, Some(LineStyle::Dash));
        assert_eq!(series.projection_key(), Some(("Co", "d")));
        assert_eq!(series.extra.get("spin"), Some(&json!("dn")));

        let value = serde_json::to_value(&series).unwrap();
        assert_eq!(value["lineStyle"], json!("dash"));
        assert_eq!(value["backgroundAlpha"], json!("50%"));
        assert!(value.get("backgroundColor").is_none());
    }
}
