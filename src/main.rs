//! # bandsplot 命令行入口
//!
//! ## 子命令
//! - `build`    - 规范化能带 / DOS，写出绘图属性
//! - `validate` - 按 schema 校验输入文件
//! - `inspect`  - 查看能带 k 路径
//!
//! 日志级别由 `RUST_LOG` 控制（如 `RUST_LOG=bandsplot=debug`）。

use bandsplot::cli::Cli;
use bandsplot::{commands, utils};

use clap::Parser;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
