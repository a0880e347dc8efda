//! # 规范化结果导出
//!
//! ## 支持格式
//! - JSON: 前端属性表（`bands`, `dos`, `dos_range` ...）
//! - CSV: 截断后的 DOS 曲线，长格式 `label,x,y`
//!
//! ## 依赖关系
//! - 被 `commands/build.rs` 调用
//! - 使用 `models/output.rs` 的 `NormalizedOutput`
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{BandsplotError, Result};
use crate::models::{DosSet, NormalizedOutput};

use std::fs;
use std::path::Path;

/// 以属性表形式写出 JSON
pub fn write_output_json(output: &NormalizedOutput, output_path: &Path, pretty: bool) -> Result<()> {
    let props = serde_json::Value::Object(output.properties()?);

    let text = if pretty {
        serde_json::to_string_pretty(&props)
    } else {
        serde_json::to_string(&props)
    }
    .map_err(|e| BandsplotError::Other(e.to_string()))?;

    fs::write(output_path, text).map_err(|e| BandsplotError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })
}

/// 导出 DOS 曲线为 CSV
pub fn dos_to_csv(dos: &DosSet, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record(["label", "x", "y"])?;

    for series in &dos.dos {
        for (x, y) in series.x.iter().zip(&series.y) {
            wtr.write_record([series.label.as_str(), &x.to_string(), &y.to_string()])?;
        }
    }

    wtr.flush().map_err(|e| BandsplotError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
