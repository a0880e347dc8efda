//! # validate 子命令实现
//!
//! 按 bands / pdos schema 校验单个文件或目录中的文件。
//!
//! ## 功能
//! - 单文件模式：打印首个违反项的完整位置
//! - 目录模式：并行校验，汇总失败文件
//! - `--kind auto` 时按顶层键判断数据类型
//!
//! ## 依赖关系
//! - 使用 `cli/validate.rs` 定义的 ValidateArgs
//! - 使用 `batch/` 模块进行批量处理
//! - 使用 `schema/` 执行校验

use crate::batch::{BatchRunner, FileCollector, FileOutcome};
use crate::cli::validate::{KindArg, ValidateArgs};
use crate::error::{BandsplotError, Result};
use crate::io::{self, InputKind};
use crate::schema;
use crate::utils::output;

use serde_json::Value;
use std::path::Path;

/// 执行校验
pub fn execute(args: ValidateArgs) -> Result<()> {
    output::print_header("Schema Validation");

    if args.input.is_file() {
        execute_single_file(&args)
    } else if args.input.is_dir() {
        execute_batch(&args)
    } else {
        Err(BandsplotError::FileNotFound {
            path: args.input.display().to_string(),
        })
    }
}

fn execute_single_file(args: &ValidateArgs) -> Result<()> {
    output::print_info(&format!("Single file mode: '{}'", args.input.display()));

    match check_file(&args.input, args.kind) {
        FileOutcome::Valid(msg) => {
            output::print_success(&msg);
            Ok(())
        }
        FileOutcome::Unrecognized(msg) => {
            output::print_skip(&msg);
            Ok(())
        }
        FileOutcome::Invalid { reason, .. } => Err(BandsplotError::Other(reason)),
    }
}

fn execute_batch(args: &ValidateArgs) -> Result<()> {
    output::print_info(&format!("Batch mode: directory '{}'", args.input.display()));

    let files = FileCollector::new(args.input.clone())
        .with_pattern(&args.pattern)
        .recursive(args.recursive)
        .collect()?;

    if files.is_empty() {
        output::print_warning(&format!(
            "No matching files found with pattern '{}'",
            args.pattern
        ));
        return Ok(());
    }

    output::print_info(&format!("Found {} files", files.len()));

    let kind = args.kind;
    let result = BatchRunner::new(args.jobs).run(&files, |file| check_file(file, kind))?;

    output::print_separator();
    output::print_success(&format!(
        "Validation complete: {} valid, {} unrecognized, {} invalid",
        result.valid,
        result.unrecognized,
        result.invalid()
    ));

    if result.failures.is_empty() {
        return Ok(());
    }

    output::print_failures("Invalid files:", &result.failures, MAX_REPORTED);

    Err(BandsplotError::Other(format!(
        "{} of {} file(s) failed validation",
        result.invalid(),
        result.total()
    )))
}

/// 目录模式下逐条列出的失败文件数上限
const MAX_REPORTED: usize = 10;

/// 校验单个文件
fn check_file(path: &Path, kind: KindArg) -> FileOutcome {
    let display = path.display().to_string();

    let value = match io::load_json(path) {
        Ok(value) => value,
        Err(e) => {
            return FileOutcome::Invalid {
                path: display,
                reason: e.to_string(),
            }
        }
    };

    let kind = match kind {
        KindArg::Bands => InputKind::Bands,
        KindArg::Dos => InputKind::Dos,
        KindArg::Auto => match io::detect_kind(&value) {
            Some(kind) => kind,
            None => {
                return FileOutcome::Unrecognized(format!(
                    "{}: neither band structure nor DOS data",
                    display
                ))
            }
        },
    };

    match validate_value(&value, kind) {
        Ok(summary) => FileOutcome::Valid(format!("{} ({}): {}", display, kind, summary)),
        Err(e) => FileOutcome::Invalid {
            path: display,
            reason: e.to_string(),
        },
    }
}

/// 校验已解析的数据，返回简短概要
fn validate_value(value: &Value, kind: InputKind) -> Result<String> {
    match kind {
        InputKind::Bands => {
            let sets = match value {
                Value::Array(items) => items.iter().collect::<Vec<_>>(),
                single => vec![single],
            };
            let mut segments = 0;
            for set in &sets {
                segments += schema::validate_bands(set)?.paths.len();
            }
            Ok(format!("{} band set(s), {} segment(s)", sets.len(), segments))
        }
        InputKind::Dos => {
            let dos = schema::validate_dos(value)?;
            Ok(format!("{} DOS series", dos.dos.len()))
        }
    }
}
