//! # Schema 校验模块
//!
//! 在任何变换之前，按固定的 JSON Schema 文档校验原始输入。
//!
//! ## Schema 文档
//! - `schemas/bands.json`: 单组能带结构
//! - `schemas/pdos.json`: 完整 DOS 数据
//!
//! 两份文档在编译期嵌入，首次使用时编译为进程级只读单例。
//!
//! ## 依赖关系
//! - 被 `pipeline/builder.rs`、`commands/validate.rs` 使用
//! - 使用 `models/` 数据模型
//! - 子模块: validator

pub mod validator;

pub use validator::{Schema, Violation};

use crate::error::{BandsplotError, Result};
use crate::models::{BandSet, DosSet};

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::LazyLock;

/// 带名称的已编译 schema 文档
#[derive(Debug)]
pub struct SchemaDocument {
    name: &'static str,
    schema: Schema,
}

impl SchemaDocument {
    /// 从 JSON 文本编译
    pub fn from_source(name: &'static str, source: &str) -> Result<Self> {
        let doc: Value = serde_json::from_str(source).map_err(|e| BandsplotError::JsonError {
            path: name.to_string(),
            source: e,
        })?;
        let schema = Schema::compile(&doc)
            .map_err(|reason| BandsplotError::Other(format!("Invalid schema {}: {}", name, reason)))?;
        Ok(SchemaDocument { name, schema })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 校验实例
    pub fn validate(&self, instance: &Value) -> Result<()> {
        self.schema
            .validate(instance)
            .map_err(|violation| self.violation_error(violation))
    }

    fn violation_error(&self, violation: Violation) -> BandsplotError {
        BandsplotError::Validation {
            schema: self.name.to_string(),
            schema_path: violation.schema_path,
            instance_path: violation.instance_path,
            value: violation.value,
            reason: violation.reason,
        }
    }

    /// 校验通过后反序列化为类型化模型
    fn parse<T: DeserializeOwned>(&self, instance: &Value) -> Result<T> {
        self.validate(instance)?;
        serde_json::from_value(instance.clone()).map_err(|e| BandsplotError::Validation {
            schema: self.name.to_string(),
            schema_path: "/".to_string(),
            instance_path: "/".to_string(),
            value: truncate(&instance.to_string()),
            reason: e.to_string(),
        })
    }
}

/// 能带结构 schema
pub static BANDS_SCHEMA: LazyLock<SchemaDocument> = LazyLock::new(|| {
    SchemaDocument::from_source("bands.json", include_str!("../../schemas/bands.json"))
        .expect("embedded bands schema is valid")
});

/// DOS schema
pub static PDOS_SCHEMA: LazyLock<SchemaDocument> = LazyLock::new(|| {
    SchemaDocument::from_source("pdos.json", include_str!("../../schemas/pdos.json"))
        .expect("embedded pdos schema is valid")
});

/// 校验一组能带结构并检查各路径段的长度一致性
pub fn validate_bands(raw: &Value) -> Result<BandSet> {
    let bands: BandSet = BANDS_SCHEMA.parse(raw)?;
    check_band_lengths(&bands)?;
    Ok(bands)
}

/// 校验完整 DOS 数据
pub fn validate_dos(raw: &Value) -> Result<DosSet> {
    PDOS_SCHEMA.parse(raw)
}

/// `values[i]`、`x` 的长度必须等于 `length`
fn check_band_lengths(bands: &BandSet) -> Result<()> {
    let mismatch = |instance_path: String, expected: usize, found: usize| BandsplotError::Validation {
        schema: BANDS_SCHEMA.name().to_string(),
        schema_path: "/properties/paths/items/properties/length".to_string(),
        instance_path,
        value: found.to_string(),
        reason: format!("expected {} points to match 'length', found {}", expected, found),
    };

    for (i, segment) in bands.paths.iter().enumerate() {
        if segment.x.len() != segment.length {
            return Err(mismatch(
                format!("/paths/{}/x", i),
                segment.length,
                segment.x.len(),
            ));
        }
        for (j, band) in segment.values.iter().enumerate() {
            if band.len() != segment.length {
                return Err(mismatch(
                    format!("/paths/{}/values/{}", i, j),
                    segment.length,
                    band.len(),
                ));
            }
        }
    }

    Ok(())
}

fn truncate(text: &str) -> String {
    const MAX_CHARS: usize = 120;
    if text.chars().count() <= MAX_CHARS {
        text.to_string()
    } else {
        let head: String = text.chars().take(MAX_CHARS).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn segment(from: &str, to: &str) -> Value {
        json!({
            "length": 3,
            "from": from,
            "to": to,
            "values": [
                [0.0, 0.1, 0.2],
                [1.0, 1.1, 1.2],
                [2.0, 2.1, 2.2]
            ],
            "x": [0.0, 1.0, 2.0]
        })
    }

    fn valid_bands() -> Value {
        json!({
            "fermi_level": -7.0,
            "path": [["GAMMA", "Y"], ["Y", "C_0"], ["SIGMA_0", "GAMMA"]],
            "paths": [
                segment("GAMMA", "Y"),
                segment("Y", "C_0"),
                segment("SIGMA_0", "GAMMA")
            ]
        })
    }

    fn valid_pdos() -> Value {
        json!({
            "fermi_energy": -7.0,
            "dos": [
                {
                    "label": "Total DOS",
                    "x": [0.0, 0.1, 0.2],
                    "y": [1.2, 3.2, 0.0],
                    "borderColor": "#41e2b3",
                    "backgroundColor": "#51258b",
                    "backgroundAlpha": "50%",
                    "lineStyle": "dash"
                },
                {
                    "label": "Co_s(up)",
                    "x": [0.0, 0.1, 0.2],
                    "y": [1.2, 3.2, 0.0],
                    "lineStyle": "solid",
                    "borderColor": "#43ee8b",
                    "backgroundColor": "#59595c"
                },
                {
                    "label": "Co_d(dn)",
                    "x": [0.0, 0.1, 0.2],
                    "y": [1.2, 3.2, 0.0],
                    "lineStyle": "solid",
                    "borderColor": "#403bae",
                    "backgroundColor": "#a16c5e"
                }
            ]
        })
    }

    #[test]
    fn test_embedded_schemas_compile() {
        assert_eq!(BANDS_SCHEMA.name(), "bands.json");
        assert_eq!(PDOS_SCHEMA.name(), "pdos.json");
    }

    #[test]
    fn test_valid_bands_default() {
        let bands = validate_bands(&valid_bands()).unwrap();
        assert_eq!(bands.fermi_level, -7.0);
        assert_eq!(bands.paths.len(), 3);
        assert_eq!(bands.path[2], ("SIGMA_0".to_string(), "GAMMA".to_string()));
    }

    #[test]
    fn test_valid_pdos_default() {
        let dos = validate_dos(&valid_pdos()).unwrap();
        assert_eq!(dos.dos.len(), 3);
        assert_eq!(dos.dos[0].background_alpha.as_deref(), Some("50%"));
    }

    #[test]
    fn test_linestyle_typo_catch() {
        let mut data = valid_pdos();
        data["dos"][0]["lineStyle"] = json!("soild");

        match validate_dos(&data) {
            Err(BandsplotError::Validation {
                schema,
                schema_path,
                instance_path,
                value,
                ..
            }) => {
                assert_eq!(schema, "pdos.json");
                assert_eq!(schema_path, "/properties/dos/items/properties/lineStyle/enum");
                assert_eq!(instance_path, "/dos/0/lineStyle");
                assert_eq!(value, "\"soild\"");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_background_alpha() {
        for alpha in ["10.1%", "100%", "50", "%", "5 %"] {
            let data = json!({
                "fermi_energy": -7.0,
                "dos": [{
                    "label": "Total DOS",
                    "x": [0.0, 0.1, 0.2],
                    "y": [1.2, 3.2, 0.0],
                    "backgroundAlpha": alpha
                }]
            });
            assert!(
                matches!(validate_dos(&data), Err(BandsplotError::Validation { .. })),
                "alpha {alpha} should be rejected"
            );
        }
    }

    #[test]
    fn test_missing_required_fields() {
        let mut data = valid_bands();
        data.as_object_mut().unwrap().remove("fermi_level");
        assert!(matches!(
            validate_bands(&data),
            Err(BandsplotError::Validation { schema_path, .. }) if schema_path == "/required"
        ));

        let data = json!({"fermi_energy": 0.0, "dos": [{"label": "A", "x": [0.0]}]});
        assert!(validate_dos(&data).is_err());
    }

    #[test]
    fn test_non_numeric_values_rejected() {
        let mut data = valid_bands();
        data["paths"][1]["values"][0][2] = json!("0.2");

        match validate_bands(&data) {
            Err(BandsplotError::Validation { instance_path, .. }) => {
                assert_eq!(instance_path, "/paths/1/values/0/2");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_integral_float_length_accepted() {
        let mut data = valid_bands();
        data["paths"][0]["length"] = json!(3.0);

        let bands = validate_bands(&data).unwrap();
        assert_eq!(bands.paths[0].length, 3);
    }

    #[test]
    fn test_negative_length_reports_location() {
        let mut data = valid_bands();
        data["paths"][1]["length"] = json!(-3);

        match validate_bands(&data) {
            Err(BandsplotError::Validation {
                schema_path,
                instance_path,
                ..
            }) => {
                assert_eq!(schema_path, "/properties/paths/items/properties/length/minimum");
                assert_eq!(instance_path, "/paths/1/length");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_ascii_alpha_digits_rejected() {
        let mut data = valid_pdos();
        data["dos"][0]["backgroundAlpha"] = json!("\u{665}\u{660}%");

        match validate_dos(&data) {
            Err(BandsplotError::Validation {
                schema_path,
                instance_path,
                ..
            }) => {
                assert_eq!(
                    schema_path,
                    "/properties/dos/items/properties/backgroundAlpha/pattern"
                );
                assert_eq!(instance_path, "/dos/0/backgroundAlpha");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_band_length_mismatch() {
        let mut data = valid_bands();
        data["paths"][2]["values"][1] = json!([1.0, 1.1]);

        match validate_bands(&data) {
            Err(BandsplotError::Validation {
                instance_path,
                value,
                ..
            }) => {
                assert_eq!(instance_path, "/paths/2/values/1");
                assert_eq!(value, "2");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
