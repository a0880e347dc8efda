//! # 能带路径字符串工具
//!
//! 在路径数组 `[["GAMMA","Y"],["Y","C_0"]]` 与紧凑字符串 `GAMMA-Y-C_0`
//! 之间转换，并收集可用的高对称点名称。
//!
//! ## 字符串格式
//! - `-` 连接相邻的点
//! - `|` 分隔不连续的路径片段
//! - 空白会被去掉，空名称会被忽略（`X--Y` 等价于 `X-Y`）
//!
//! ## 依赖关系
//! - 被 `commands/inspect.rs` 使用
//! - 使用 `models/bands.rs`

use crate::models::BandSet;

use std::collections::BTreeSet;

/// 路径数组 -> 紧凑字符串
pub fn path_to_string(path: &[(String, String)]) -> String {
    let mut result = String::new();
    let mut last_point: Option<&str> = None;

    for (from, to) in path {
        match last_point {
            None => result.push_str(from),
            Some(last) if last != from => {
                result.push('|');
                result.push_str(from);
            }
            Some(_) => {}
        }
        result.push('-');
        result.push_str(to);
        last_point = Some(to);
    }

    result
}

/// 紧凑字符串 -> 路径数组
pub fn path_from_string(path: &str) -> Vec<(String, String)> {
    let mut segments = Vec::new();

    for piece in path.split('|') {
        let points: Vec<&str> = piece
            .split('-')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect();

        for pair in points.windows(2) {
            segments.push((pair[0].to_string(), pair[1].to_string()));
        }
    }

    segments
}

/// 收集所有能带中出现的高对称点名称（排序去重）
pub fn valid_point_names(bands: &[BandSet]) -> Vec<String> {
    let names: BTreeSet<&str> = bands
        .iter()
        .flat_map(|set| set.paths.iter())
        .flat_map(|segment| [segment.from.as_str(), segment.to.as_str()])
        .collect();

    names.into_iter().map(str::to_string).collect()
}

/// 找出在任何一组能带中都不存在的路径段
pub fn missing_segments(
    bands: &[BandSet],
    path: &[(String, String)],
) -> Vec<(String, String)> {
    path.iter()
        .filter(|(from, to)| bands.iter().all(|set| set.find_segment(from, to).is_none()))
        .cloned()
        .collect()
}
