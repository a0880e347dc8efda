//! # build 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/build.rs`

use clap::Args;
use std::path::PathBuf;

/// build 子命令参数
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Band structure JSON files (one band set or a list of band sets per file)
    #[arg(long = "bands", num_args = 1..)]
    pub bands: Vec<PathBuf>,

    /// DOS JSON file
    #[arg(long)]
    pub dos: Option<PathBuf>,

    /// Override the Fermi energy stored in the DOS file (eV)
    #[arg(long, allow_hyphen_values = true)]
    pub fermi_energy: Option<f64>,

    /// Lower bound of the energy window, relative to the Fermi energy (eV)
    #[arg(long, env = "BANDSPLOT_YMIN", default_value_t = -10.0, allow_hyphen_values = true)]
    pub ymin: f64,

    /// Upper bound of the energy window, relative to the Fermi energy (eV)
    #[arg(long, env = "BANDSPLOT_YMAX", default_value_t = 10.0, allow_hyphen_values = true)]
    pub ymax: f64,

    /// Colors for the band sets, comma separated (default: black,red,blue,yellow cycle)
    #[arg(long, value_delimiter = ',')]
    pub bands_color: Option<Vec<String>>,

    /// Show the plot legend
    #[arg(long, default_value_t = false)]
    pub show_legend: bool,

    /// Draw a line at the Fermi level
    #[arg(long, default_value_t = false)]
    pub plot_fermilevel: bool,

    /// Output file for the normalized properties (JSON)
    #[arg(short, long, default_value = "bandsplot.json")]
    pub output: PathBuf,

    /// Also export the windowed DOS curves as CSV
    #[arg(long)]
    pub dos_csv: Option<PathBuf>,

    /// Write compact JSON instead of pretty-printed
    #[arg(long, default_value_t = false)]
    pub compact: bool,
}
