//! # 能带 / DOS 规范化流程
//!
//! 端到端变换：校验 -> 分配能带颜色 -> 合并投影 -> 截断能量窗口并转换填充色
//! -> 计算 y 轴范围 -> 组装 `NormalizedOutput`。
//!
//! 调用者传入的原始数据只读，所有变换都作用在新构造的值上。
//!
//! ## 依赖关系
//! - 被 `commands/build.rs` 调用
//! - 使用 `schema/` 校验输入
//! - 使用 `pipeline/color.rs`, `pipeline/window.rs`, `pipeline/aggregate.rs`

use crate::error::{BandsplotError, Result};
use crate::models::{BandSet, DosSeries, DosSet, EnergyRange, NormalizedOutput};
use crate::pipeline::aggregate::{aggregate, compute_range};
use crate::pipeline::color::{default_band_colors, hex_alpha_to_rgba, parse_alpha_percent};
use crate::pipeline::window::filter_by_energy_window;
use crate::schema;

use serde_json::Value;

/// 构建选项
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildOptions {
    /// 覆盖 DOS 自带的费米能
    pub fermi_energy: Option<f64>,

    pub show_legend: bool,

    pub plot_fermilevel: bool,

    /// 缺省为 `{ymin: -10.0, ymax: 10.0}`
    pub energy_range: Option<EnergyRange>,

    /// 每组能带的颜色，给定时原样使用
    pub bands_color: Option<Vec<String>>,
}

/// 规范化能带与 DOS 数据
pub fn build(
    bands: Option<&[Value]>,
    dos: Option<&Value>,
    options: &BuildOptions,
) -> Result<NormalizedOutput> {
    if bands.is_none() && dos.is_none() {
        return Err(BandsplotError::MissingInput);
    }

    let energy_range = options.energy_range.unwrap_or_default();
    energy_range.check()?;
    log::debug!(
        "Energy window: ymin = {}, ymax = {}",
        energy_range.ymin,
        energy_range.ymax
    );

    let (bands, band_fermienergy, bands_color) = match bands {
        Some(raw) => {
            let bands = normalize_bands(raw)?;
            let fermi: Vec<f64> = bands.iter().map(|set| set.fermi_level).collect();
            let colors = assign_band_colors(bands.len(), options.bands_color.as_deref());
            (bands, fermi, colors)
        }
        None => (Vec::new(), Vec::new(), Vec::new()),
    };

    let (dos, dos_fermienergy, dos_range) = match dos {
        Some(raw) => {
            let (dos, fermi, range) = normalize_dos(raw, options.fermi_energy, &energy_range)?;
            (Some(dos), Some(fermi), Some([range.0, range.1]))
        }
        None => (None, None, None),
    };

    Ok(NormalizedOutput {
        bands,
        band_fermienergy,
        bands_color,
        dos,
        dos_fermienergy,
        dos_range,
        energy_range,
        plot_fermilevel: options.plot_fermilevel,
        show_legend: options.show_legend,
    })
}

/// 逐组校验能带结构
fn normalize_bands(raw: &[Value]) -> Result<Vec<BandSet>> {
    raw.iter()
        .enumerate()
        .map(|(i, value)| {
            let bands = schema::validate_bands(value)?;
            log::debug!(
                "Band set {}: fermi level {} eV, {} segment(s)",
                i,
                bands.fermi_level,
                bands.paths.len()
            );
            Ok(bands)
        })
        .collect()
}

fn assign_band_colors(count: usize, custom: Option<&[String]>) -> Vec<String> {
    match custom {
        Some(colors) => {
            if colors.len() != count {
                log::warn!(
                    "{} band color(s) given for {} band set(s)",
                    colors.len(),
                    count
                );
            }
            colors.to_vec()
        }
        None => default_band_colors(count),
    }
}

/// 校验、合并、截断 DOS，返回 (DOS, 费米能, y 轴范围)
fn normalize_dos(
    raw: &Value,
    fermi_override: Option<f64>,
    energy_range: &EnergyRange,
) -> Result<(DosSet, f64, (f64, f64))> {
    let validated = schema::validate_dos(raw)?;
    let fermi = fermi_override.unwrap_or(validated.fermi_energy);
    log::debug!(
        "DOS: {} series, fermi energy {} eV",
        validated.dos.len(),
        fermi
    );

    let merged = aggregate(validated.dos)?;
    let series = merged
        .into_iter()
        .map(|series| normalize_series(series, fermi, energy_range))
        .collect::<Result<Vec<_>>>()?;

    let range = compute_range(&series, fermi, energy_range)?;
    log::debug!("DOS range: [{}, {}]", range.0, range.1);

    let dos = DosSet {
        fermi_energy: validated.fermi_energy,
        dos: series,
        extra: validated.extra,
    };

    Ok((dos, fermi, range))
}

/// 截断单条曲线并把填充色转换为 RGBA
fn normalize_series(series: DosSeries, fermi: f64, energy_range: &EnergyRange) -> Result<DosSeries> {
    let (x, y) = filter_by_energy_window(&series.label, &series.x, &series.y, fermi, energy_range)?;
    let alpha = parse_alpha_percent(series.background_alpha_or_default())?;
    let background = hex_alpha_to_rgba(series.background_color_or_default(), alpha)?;

    log::trace!(
        "Series '{}': kept {}/{} points, background {}",
        series.label,
        x.len(),
        series.x.len(),
        background
    );

    Ok(DosSeries {
        x,
        y,
        background_color: Some(background),
        ..series
    })
}
