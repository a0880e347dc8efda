//! # 能量窗口截断
//!
//! 保留满足 `fermi + ymin < x < fermi + ymax` 的点（严格不等式，边界点被排除），
//! 并保持原有顺序。
//!
//! ## 依赖关系
//! - 被 `pipeline/aggregate.rs`, `pipeline/builder.rs` 调用
//! - 使用 `models/output.rs` 的 `EnergyRange`

use crate::error::{BandsplotError, Result};
use crate::models::EnergyRange;

/// 按能量窗口截断成对的 (x, y) 序列
pub fn filter_by_energy_window(
    label: &str,
    x: &[f64],
    y: &[f64],
    fermi: f64,
    range: &EnergyRange,
) -> Result<(Vec<f64>, Vec<f64>)> {
    if x.len() != y.len() {
        return Err(BandsplotError::Alignment {
            label: label.to_string(),
            expected: x.len(),
            found: y.len(),
        });
    }

    let (lower, upper) = range.absolute_bounds(fermi);

    Ok(x.iter()
        .zip(y.iter())
        .filter(|&(&xi, _)| lower < xi && xi < upper)
        .map(|(&xi, &yi)| (xi, yi))
        .unzip())
}

/// 序列的 (最小值, 最大值)；空序列返回 `None`
pub fn extent(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_points_inside_window() {
        let x = [0.0, 0.1, 0.2];
        let y = [1.2, 3.2, 0.0];
        let (fx, fy) =
            filter_by_energy_window("tdos", &x, &y, -7.0, &EnergyRange::default()).unwrap();
        assert_eq!(fx, x);
        assert_eq!(fy, y);
    }

    #[test]
    fn test_boundaries_are_excluded() {
        let range = EnergyRange::new(-1.0, 1.0).unwrap();
        let x = [-1.0, -0.5, 0.0, 0.5, 1.0, 1.5];
        let y = [10.0, 20.0, 30.0, 40.0, 50.0, 60.0];

        let (fx, fy) = filter_by_energy_window("pdos", &x, &y, 0.0, &range).unwrap();
        assert_eq!(fx, vec![-0.5, 0.0, 0.5]);
        assert_eq!(fy, vec![20.0, 30.0, 40.0]);

        // 窗口随费米能平移
        let (fx, _) = filter_by_energy_window("pdos", &x, &y, 0.5, &range).unwrap();
        assert_eq!(fx, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_order_preserved_for_unsorted_input() {
        let range = EnergyRange::new(-2.0, 2.0).unwrap();
        let x = [1.0, -5.0, -1.0, 0.5, 3.0];
        let y = [1.0, 2.0, 3.0, 4.0, 5.0];

        let (fx, fy) = filter_by_energy_window("pdos", &x, &y, 0.0, &range).unwrap();
        assert_eq!(fx, vec![1.0, -1.0, 0.5]);
        assert_eq!(fy, vec![1.0, 3.0, 4.0]);
    }

    #[test]
    fn test_empty_result_and_misaligned_input() {
        let range = EnergyRange::new(-1.0, 1.0).unwrap();
        let (fx, fy) = filter_by_energy_window("pdos", &[5.0, 6.0], &[1.0, 2.0], 0.0, &range).unwrap();
        assert!(fx.is_empty() && fy.is_empty());
        assert_eq!(extent(&fy), None);

        let err = filter_by_energy_window("Co_d", &[0.0, 0.1], &[1.0], 0.0, &range).unwrap_err();
        match err {
            BandsplotError::Alignment { label, expected, found } => {
                assert_eq!(label, "Co_d");
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_extent() {
        assert_eq!(extent(&[1.2, -3.0, 0.5]), Some((-3.0, 1.2)));
        assert_eq!(extent(&[2.0]), Some((2.0, 2.0)));
    }
}
