//! # 终端输出
//!
//! 统一的 `[OK]` / `[ERR]` / `[WARN]` / `[*]` / `[SKIP]` 前缀输出，
//! 以及标题栏、分隔线、失败文件列表。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 模块与 `main.rs` 使用
//! - 使用 `colored` crate

use colored::{ColoredString, Colorize};

const RULE_WIDTH: usize = 60;

fn tagged(tag: ColoredString, msg: &str) {
    println!("{} {}", tag, msg);
}

pub fn print_success(msg: &str) {
    tagged("[OK]".green().bold(), msg);
}

/// 写到 stderr
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

pub fn print_warning(msg: &str) {
    tagged("[WARN]".yellow().bold(), msg);
}

pub fn print_info(msg: &str) {
    tagged("[*]".blue().bold(), msg);
}

/// 无法识别数据类型而跳过的文件
pub fn print_skip(msg: &str) {
    tagged("[SKIP]".dimmed(), msg);
}

/// `[OK] <what> -> <path>`
pub fn print_written(what: &str, path: &str) {
    tagged(
        "[OK]".green().bold(),
        &format!("{} {} {}", what.dimmed(), "->".cyan(), path),
    );
}

/// 打印 (路径, 原因) 列表，超过 `limit` 条时只报告剩余数量
pub fn print_failures(title: &str, failures: &[(String, String)], limit: usize) {
    print_warning(title);
    let (shown, hidden) = failure_lines(failures, limit);
    for line in shown {
        print_error(&line);
    }
    if let Some(more) = hidden {
        print_warning(&more);
    }
}

fn failure_lines(failures: &[(String, String)], limit: usize) -> (Vec<String>, Option<String>) {
    let shown = failures
        .iter()
        .take(limit)
        .map(|(path, reason)| format!("  {}: {}", path, reason))
        .collect();
    let hidden = (failures.len() > limit)
        .then(|| format!("  ... and {} more", failures.len() - limit));
    (shown, hidden)
}

pub fn print_header(title: &str) {
    let rule = "─".repeat(RULE_WIDTH);
    println!("\n{}", rule.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", rule.dimmed());
}

pub fn print_separator() {
    println!("{}", "─".repeat(RULE_WIDTH).dimmed());
}
