//! # 颜色编码
//!
//! `#RRGGBB` + 百分比透明度 -> 前端使用的 `rgba(r, g, b, a)` 字符串，
//! 以及能带的默认配色循环。
//!
//! ## 依赖关系
//! - 被 `pipeline/builder.rs` 调用
//! - 无外部模块依赖

use crate::error::{BandsplotError, Result};

/// 能带默认配色，按顺序循环使用
pub const DEFAULT_BAND_COLORS: [&str; 4] = ["black", "red", "blue", "yellow"];

/// 把十六进制颜色与 [0, 1] 的透明度组合为 RGBA 字符串
///
/// ```
/// use bandsplot::pipeline::color::hex_alpha_to_rgba;
/// assert_eq!(hex_alpha_to_rgba("#41e2b3", 0.5).unwrap(), "rgba(65, 226, 179, 0.5)");
/// ```
pub fn hex_alpha_to_rgba(color_hex: &str, alpha: f64) -> Result<String> {
    let digits = color_hex.strip_prefix('#').unwrap_or(color_hex);

    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(BandsplotError::Format(format!(
            "'{}' is not a #RRGGBB hex color",
            color_hex
        )));
    }
    if !(0.0..=1.0).contains(&alpha) {
        return Err(BandsplotError::Format(format!(
            "alpha {} is outside [0, 1]",
            alpha
        )));
    }

    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map_err(|e| BandsplotError::Format(format!("'{}': {}", color_hex, e)))
    };
    let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);

    Ok(format!("rgba({}, {}, {}, {})", r, g, b, alpha))
}

/// 百分比字符串 -> [0, 1] 透明度，如 `"50%"` -> `0.5`
pub fn parse_alpha_percent(alpha: &str) -> Result<f64> {
    let number = alpha
        .strip_suffix('%')
        .ok_or_else(|| BandsplotError::Format(format!("alpha '{}' must end with '%'", alpha)))?;

    let percent: u32 = number
        .parse()
        .map_err(|_| BandsplotError::Format(format!("alpha '{}' is not an integer percentage", alpha)))?;

    if percent > 100 {
        return Err(BandsplotError::Format(format!(
            "alpha '{}' exceeds 100%",
            alpha
        )));
    }

    Ok(percent as f64 / 100.0)
}

/// 为 `count` 组能带分配默认颜色
pub fn default_band_colors(count: usize) -> Vec<String> {
    DEFAULT_BAND_COLORS
        .iter()
        .cycle()
        .take(count)
        .map(|c| c.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_alpha_to_rgba() {
        assert_eq!(
            hex_alpha_to_rgba("#41e2b3", 0.5).unwrap(),
            "rgba(65, 226, 179, 0.5)"
        );
        assert_eq!(
            hex_alpha_to_rgba("#DCDCDC", 0.0).unwrap(),
            "rgba(220, 220, 220, 0)"
        );
        // 不带 '#' 也接受
        assert_eq!(hex_alpha_to_rgba("000000", 1.0).unwrap(), "rgba(0, 0, 0, 1)");
    }

    #[test]
    fn test_malformed_hex_rejected() {
        for bad in ["#fff", "#41e2b3ff", "#41e2bg", "", "#", "red", "#+1e2b3"] {
            assert!(
                matches!(hex_alpha_to_rgba(bad, 0.5), Err(BandsplotError::Format(_))),
                "{bad} should be rejected"
            );
        }
        assert!(hex_alpha_to_rgba("#41e2b3", 1.5).is_err());
        assert!(hex_alpha_to_rgba("#41e2b3", f64::NAN).is_err());
    }

    #[test]
    fn test_parse_alpha_percent() {
        assert_eq!(parse_alpha_percent("50%").unwrap(), 0.5);
        assert_eq!(parse_alpha_percent("0%").unwrap(), 0.0);
        assert_eq!(parse_alpha_percent("7%").unwrap(), 0.07);
        assert!(parse_alpha_percent("50").is_err());
        assert!(parse_alpha_percent("10.1%").is_err());
        assert!(parse_alpha_percent("-5%").is_err());
    }

    #[test]
    fn test_default_band_colors_cycle() {
        assert_eq!(
            default_band_colors(5),
            vec!["black", "red", "blue", "yellow", "black"]
        );
        assert!(default_band_colors(0).is_empty());
    }
}
