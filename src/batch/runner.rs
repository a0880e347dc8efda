//! # 批量校验执行器
//!
//! 在 rayon 线程池中逐个校验文件，汇总为 `BatchResult`。
//! 结果顺序与输入文件顺序一致，便于按路径报告失败项。
//!
//! ## 依赖关系
//! - 被 `commands/validate.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon`、`num_cpus`

use crate::error::{BandsplotError, Result};
use crate::utils::progress;

use rayon::prelude::*;
use std::path::PathBuf;

/// 单个文件的校验结果
#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    /// 通过校验，附带数据概要
    Valid(String),
    /// 顶层键既不像能带也不像 DOS
    Unrecognized(String),
    Invalid { path: String, reason: String },
}

/// 批量校验统计
#[derive(Debug, Default)]
pub struct BatchResult {
    pub valid: usize,
    pub unrecognized: usize,
    /// 未通过校验的 (路径, 原因)，按输入顺序
    pub failures: Vec<(String, String)>,
}

impl BatchResult {
    fn record(mut self, outcome: FileOutcome) -> Self {
        match outcome {
            FileOutcome::Valid(_) => self.valid += 1,
            FileOutcome::Unrecognized(_) => self.unrecognized += 1,
            FileOutcome::Invalid { path, reason } => self.failures.push((path, reason)),
        }
        self
    }

    pub fn invalid(&self) -> usize {
        self.failures.len()
    }

    pub fn total(&self) -> usize {
        self.valid + self.unrecognized + self.invalid()
    }
}

/// 批量执行器
pub struct BatchRunner {
    threads: usize,
}

impl BatchRunner {
    /// `jobs == 0` 时使用全部 CPU
    pub fn new(jobs: usize) -> Self {
        let threads = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { threads }
    }

    /// 并行校验文件列表
    pub fn run<F>(&self, files: &[PathBuf], check: F) -> Result<BatchResult>
    where
        F: Fn(&PathBuf) -> FileOutcome + Sync + Send,
    {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build()
            .map_err(|e| BandsplotError::Other(format!("failed to start worker pool: {}", e)))?;
        log::debug!("Checking {} file(s) on {} thread(s)", files.len(), self.threads);

        let pb = progress::create_progress_bar(files.len() as u64, "Validating");
        let outcomes: Vec<FileOutcome> = pool.install(|| {
            files
                .par_iter()
                .map(|file| {
                    let outcome = check(file);
                    pb.inc(1);
                    outcome
                })
                .collect()
        });
        pb.finish_and_clear();

        Ok(outcomes
            .into_iter()
            .fold(BatchResult::default(), BatchResult::record))
    }
}
