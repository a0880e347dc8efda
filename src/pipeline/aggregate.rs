//! # DOS 聚合
//!
//! - `aggregate`: 合并聚合键 (kind, orbital) 相同的投影曲线，y 逐点相加，
//!   结果放在首次出现的位置，后续重复项被丢弃
//! - `compute_range`: 所有曲线截断后的 y 轴范围，上下界各乘 1.05
//!
//! 只有同时带 `kind` 与 `orbital` 的曲线参与合并，其余原样保留。
//!
//! ## 依赖关系
//! - 被 `pipeline/builder.rs` 调用
//! - 使用 `pipeline/window.rs`

use crate::error::{BandsplotError, Result};
use crate::models::{DosSeries, EnergyRange};
use crate::pipeline::window::{extent, filter_by_energy_window};

use std::collections::HashMap;

/// y 轴范围的固定边距系数
pub const RANGE_PADDING: f64 = 1.05;

/// 合并重复的投影曲线
pub fn aggregate(series: Vec<DosSeries>) -> Result<Vec<DosSeries>> {
    let mut merged: Vec<DosSeries> = Vec::with_capacity(series.len());
    let mut first_seen: HashMap<(String, String), usize> = HashMap::new();

    for item in series {
        let key = item
            .projection_key()
            .map(|(kind, orbital)| (kind.to_string(), orbital.to_string()));

        let Some(key) = key else {
            merged.push(item);
            continue;
        };

        match first_seen.get(&key).copied() {
            Some(index) => {
                let target = &mut merged[index];
                let (expected, found) = if item.x.len() != target.x.len() {
                    (target.x.len(), item.x.len())
                } else {
                    (target.y.len(), item.y.len())
                };
                if expected != found {
                    return Err(BandsplotError::Alignment {
                        label: item.label,
                        expected,
                        found,
                    });
                }
                log::trace!(
                    "Merging '{}' into '{}' ({}/{})",
                    item.label,
                    target.label,
                    key.0,
                    key.1
                );
                for (acc, value) in target.y.iter_mut().zip(item.y) {
                    *acc += value;
                }
            }
            None => {
                first_seen.insert(key, merged.len());
                merged.push(item);
            }
        }
    }

    Ok(merged)
}

/// 计算所有曲线在能量窗口内的 y 轴范围（含 5% 边距）
///
/// 任一曲线截断后为空时返回 `EmptyRange`。
pub fn compute_range(series: &[DosSeries], fermi: f64, range: &EnergyRange) -> Result<(f64, f64)> {
    let (lower, upper) = range.absolute_bounds(fermi);

    if series.is_empty() {
        return Err(BandsplotError::EmptyRange {
            label: "dos".to_string(),
            lower,
            upper,
        });
    }

    let mut min_of_mins = f64::INFINITY;
    let mut max_of_maxes = f64::NEG_INFINITY;

    for item in series {
        let (_, y) = filter_by_energy_window(&item.label, &item.x, &item.y, fermi, range)?;
        let (min, max) = extent(&y).ok_or_else(|| BandsplotError::EmptyRange {
            label: item.label.clone(),
            lower,
            upper,
        })?;
        min_of_mins = min_of_mins.min(min);
        max_of_maxes = max_of_maxes.max(max);
    }

    Ok((min_of_mins * RANGE_PADDING, max_of_maxes * RANGE_PADDING))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projected(label: &str, kind: &str, orbital: &str, y: Vec<f64>) -> DosSeries {
        let x = (0..y.len()).map(|i| i as f64 * 0.1).collect();
        let mut series = DosSeries::new(label, x, y);
        series.kind = Some(kind.to_string());
        series.orbital = Some(orbital.to_string());
        series
    }

    #[test]
    fn test_aggregate_merges_at_first_position() {
        let series = vec![
            DosSeries::new("Total DOS", vec![0.0, 0.1], vec![5.0, 5.0]),
            projected("Co_d(up)", "Co", "d", vec![1.0, 2.0]),
            projected("O_p(up)", "O", "p", vec![0.5, 0.5]),
            projected("Co_d(dn)", "Co", "d", vec![3.0, 4.0]),
        ];

        let merged = aggregate(series).unwrap();
        let labels: Vec<&str> = merged.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Total DOS", "Co_d(up)", "O_p(up)"]);
        assert_eq!(merged[1].y, vec![4.0, 6.0]);
        assert_eq!(merged[2].y, vec![0.5, 0.5]);
    }

    #[test]
    fn test_aggregate_ignores_series_without_full_key() {
        let mut partial = DosSeries::new("Co", vec![0.0], vec![1.0]);
        partial.kind = Some("Co".to_string());
        let series = vec![partial.clone(), partial];

        assert_eq!(aggregate(series).unwrap().len(), 2);
    }

    #[test]
    fn test_aggregate_alignment_error() {
        let series = vec![
            projected("Co_s(up)", "Co", "s", vec![1.0, 2.0, 3.0]),
            projected("Co_s(dn)", "Co", "s", vec![1.0, 2.0]),
        ];

        match aggregate(series) {
            Err(BandsplotError::Alignment { label, expected, found }) => {
                assert_eq!(label, "Co_s(dn)");
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("expected alignment error, got {:?}", other),
        }
    }

    #[test]
    fn test_compute_range_padding() {
        let series = vec![DosSeries::new(
            "Total DOS",
            vec![0.0, 0.1, 0.2],
            vec![1.2, 3.2, 0.0],
        )];
        let (min, max) = compute_range(&series, -7.0, &EnergyRange::default()).unwrap();
        assert_eq!(min, 0.0);
        assert!((max - 3.36).abs() < 1e-12);
    }

    #[test]
    fn test_compute_range_negative_values_and_window() {
        let range = EnergyRange::new(-1.0, 1.0).unwrap();
        let series = vec![
            DosSeries::new("up", vec![-0.5, 0.0, 5.0], vec![2.0, 4.0, 100.0]),
            DosSeries::new("dn", vec![-0.5, 0.0, 5.0], vec![-2.0, -4.0, -100.0]),
        ];

        let (min, max) = compute_range(&series, 0.0, &range).unwrap();
        assert!((min - (-4.2)).abs() < 1e-12);
        assert!((max - 4.2).abs() < 1e-12);
    }

    #[test]
    fn test_compute_range_empty_window() {
        let range = EnergyRange::new(-1.0, 1.0).unwrap();
        let series = vec![
            DosSeries::new("inside", vec![0.0], vec![1.0]),
            DosSeries::new("outside", vec![3.0], vec![1.0]),
        ];

        match compute_range(&series, 0.0, &range) {
            Err(BandsplotError::EmptyRange { label, lower, upper }) => {
                assert_eq!(label, "outside");
                assert_eq!(lower, -1.0);
                assert_eq!(upper, 1.0);
            }
            other => panic!("expected empty range error, got {:?}", other),
        }

        assert!(matches!(
            compute_range(&[], 0.0, &range),
            Err(BandsplotError::EmptyRange { .. })
        ));
    }
}
