//! # build 子命令实现
//!
//! 读取能带 / DOS 文件，规范化后写出前端属性表。
//!
//! ## 依赖关系
//! - 使用 `cli/build.rs` 定义的 BuildArgs
//! - 使用 `io/` 读写文件
//! - 使用 `pipeline/` 执行规范化

use crate::cli::build::BuildArgs;
use crate::error::{BandsplotError, Result};
use crate::io::{self, export};
use crate::models::{EnergyRange, NormalizedOutput};
use crate::pipeline::{self, BuildOptions};
use crate::utils::output;

use serde_json::Value;
use tabled::{Table, Tabled};

/// 能带概要行
#[derive(Debug, Clone, Tabled)]
struct BandRow {
    #[tabled(rename = "Set")]
    index: usize,
    #[tabled(rename = "Fermi (eV)")]
    fermi: String,
    #[tabled(rename = "Segments")]
    segments: usize,
    #[tabled(rename = "Bands")]
    bands: usize,
    #[tabled(rename = "Color")]
    color: String,
}

/// DOS 概要行
#[derive(Debug, Clone, Tabled)]
struct DosRow {
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Points")]
    points: usize,
    #[tabled(rename = "Fill")]
    fill: String,
}

/// 执行 build
pub fn execute(args: BuildArgs) -> Result<()> {
    output::print_header("Band Structure / DOS Normalization");

    let bands = load_band_files(&args)?;
    let dos = match &args.dos {
        Some(path) => {
            output::print_info(&format!("Reading DOS: '{}'", path.display()));
            Some(io::load_json(path)?)
        }
        None => None,
    };

    let options = BuildOptions {
        fermi_energy: args.fermi_energy,
        show_legend: args.show_legend,
        plot_fermilevel: args.plot_fermilevel,
        energy_range: Some(EnergyRange::new(args.ymin, args.ymax)?),
        bands_color: args.bands_color.clone(),
    };

    let normalized = pipeline::build(bands.as_deref(), dos.as_ref(), &options)?;
    print_summary(&normalized);

    export::write_output_json(&normalized, &args.output, !args.compact)?;
    output::print_written("Plot properties", &args.output.display().to_string());

    if let Some(csv_path) = &args.dos_csv {
        let dos = normalized.dos.as_ref().ok_or_else(|| {
            BandsplotError::InvalidArgument("--dos-csv requires --dos".to_string())
        })?;
        export::dos_to_csv(dos, csv_path)?;
        output::print_written("DOS curves", &csv_path.display().to_string());
    }

    Ok(())
}

/// 读取所有能带文件并展开为 band set 列表
fn load_band_files(args: &BuildArgs) -> Result<Option<Vec<Value>>> {
    if args.bands.is_empty() {
        return Ok(None);
    }

    let mut sets = Vec::new();
    for path in &args.bands {
        let loaded = io::load_bands(path)?;
        output::print_info(&format!(
            "Reading bands: '{}' ({} set(s))",
            path.display(),
            loaded.len()
        ));
        sets.extend(loaded);
    }
    Ok(Some(sets))
}

fn print_summary(normalized: &NormalizedOutput) {
    if !normalized.bands.is_empty() {
        let rows: Vec<BandRow> = normalized
            .bands
            .iter()
            .enumerate()
            .map(|(i, set)| BandRow {
                index: i,
                fermi: format!("{:.4}", set.fermi_level),
                segments: set.paths.len(),
                bands: set.max_bands(),
                color: normalized
                    .bands_color
                    .get(i)
                    .cloned()
                    .unwrap_or_else(|| "-".to_string()),
            })
            .collect();
        println!("{}", Table::new(&rows));
    }

    if let (Some(dos), Some([low, high])) = (&normalized.dos, normalized.dos_range) {
        let rows: Vec<DosRow> = dos
            .dos
            .iter()
            .map(|series| DosRow {
                label: series.label.clone(),
                points: series.x.len(),
                fill: series.background_color.clone().unwrap_or_default(),
            })
            .collect();
        println!("{}", Table::new(&rows));
        output::print_info(&format!("DOS range: [{:.4}, {:.4}]", low, high));
    }

    output::print_info(&format!(
        "Energy window: [{}, {}] eV around the Fermi level",
        normalized.energy_range.ymin, normalized.energy_range.ymax
    ));
}
