//! # inspect 子命令实现
//!
//! 打印能带文件的 k 路径、高对称点，并检查给定路径是否可由已有路径段拼出。
//!
//! ## 依赖关系
//! - 使用 `cli/inspect.rs` 定义的 InspectArgs
//! - 使用 `models/kpath.rs`

use crate::cli::inspect::InspectArgs;
use crate::error::{BandsplotError, Result};
use crate::io;
use crate::models::kpath;
use crate::models::BandSet;
use crate::schema;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 能带文件概要行
#[derive(Debug, Clone, Tabled)]
struct PathRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Set")]
    index: usize,
    #[tabled(rename = "Path")]
    path: String,
    #[tabled(rename = "Bands")]
    bands: usize,
    #[tabled(rename = "Spin")]
    spin: &'static str,
}

/// 执行 inspect
pub fn execute(args: InspectArgs) -> Result<()> {
    output::print_header("Band Path Inspection");

    let mut all_sets: Vec<BandSet> = Vec::new();
    let mut rows = Vec::new();

    for file in &args.files {
        for (i, raw) in io::load_bands(file)?.iter().enumerate() {
            let set = schema::validate_bands(raw)?;
            rows.push(PathRow {
                file: file.display().to_string(),
                index: i,
                path: kpath::path_to_string(&set.path),
                bands: set.max_bands(),
                spin: if set.is_spin_polarized() { "up/down" } else { "-" },
            });
            all_sets.push(set);
        }
    }

    println!("{}", Table::new(&rows));
    output::print_info(&format!(
        "High-symmetry points: {}",
        kpath::valid_point_names(&all_sets).join(", ")
    ));

    if let Some(path) = &args.path {
        check_path(&all_sets, path)?;
    }

    Ok(())
}

fn check_path(sets: &[BandSet], path: &str) -> Result<()> {
    let segments = kpath::path_from_string(path);
    if segments.is_empty() {
        return Err(BandsplotError::InvalidArgument(format!(
            "path '{}' contains no segments",
            path
        )));
    }

    let missing = kpath::missing_segments(sets, &segments);
    if missing.is_empty() {
        output::print_success(&format!(
            "Path '{}' is available ({} segment(s))",
            kpath::path_to_string(&segments),
            segments.len()
        ));
        return Ok(());
    }

    let names: Vec<String> = missing
        .iter()
        .map(|(from, to)| format!("{}-{}", from, to))
        .collect();
    Err(BandsplotError::InvalidArgument(format!(
        "path segment(s) not found in the band data: {}",
        names.join(", ")
    )))
}
