//! # 输入文件收集器
//!
//! 根据输入路径和文件名模式收集待校验的 JSON 文件。
//!
//! ## 功能
//! - 单文件与目录输入
//! - 逗号分隔的多个 glob 模式（`*.json,bands_*`）
//! - 可选递归
//!
//! ## 依赖关系
//! - 被 `commands/validate.rs` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 匹配文件名

use crate::error::{BandsplotError, Result};

use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    input: PathBuf,
    patterns: Vec<String>,
    recursive: bool,
}

impl FileCollector {
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            patterns: vec!["*.json".to_string()],
            recursive: false,
        }
    }

    /// 设置匹配模式（逗号分隔的多模式）
    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.patterns = pattern
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if self.patterns.is_empty() {
            self.patterns = vec!["*".to_string()];
        }
        self
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 收集所有匹配的文件，按路径排序
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        if self.input.is_file() {
            return Ok(vec![self.input.clone()]);
        }

        if !self.input.is_dir() {
            return Err(BandsplotError::FileNotFound {
                path: self.input.display().to_string(),
            });
        }

        let patterns = self.compile_patterns()?;
        let max_depth = if self.recursive { usize::MAX } else { 1 };

        let mut files: Vec<PathBuf> = WalkDir::new(&self.input)
            .max_depth(max_depth)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|entry| Self::matches_any(&patterns, entry.path()))
            .map(|e| e.path().to_path_buf())
            .collect();

        files.sort();
        log::debug!(
            "Collected {} file(s) from '{}'",
            files.len(),
            self.input.display()
        );
        Ok(files)
    }

    fn compile_patterns(&self) -> Result<Vec<Pattern>> {
        self.patterns
            .iter()
            .map(|p| {
                Pattern::new(p).map_err(|e| {
                    BandsplotError::InvalidArgument(format!("invalid pattern '{}': {}", p, e))
                })
            })
            .collect()
    }

    fn matches_any(patterns: &[Pattern], path: &Path) -> bool {
        match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => patterns.iter().any(|p| p.matches(name)),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        fs::write(path, "{}").unwrap();
    }

    #[test]
    fn test_collect_with_patterns() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("bands.json"));
        touch(&dir.path().join("pdos.json"));
        touch(&dir.path().join("notes.txt"));
        fs::create_dir(dir.path().join("nested")).unwrap();
        touch(&dir.path().join("nested").join("bands_2.json"));

        let files = FileCollector::new(dir.path().to_path_buf()).collect().unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("bands.json"));
        assert!(files[1].ends_with("pdos.json"));

        let files = FileCollector::new(dir.path().to_path_buf())
            .recursive(true)
            .collect()
            .unwrap();
        assert_eq!(files.len(), 3);

        let files = FileCollector::new(dir.path().to_path_buf())
            .with_pattern("bands*, *.txt")
            .recursive(true)
            .collect()
            .unwrap();
        assert_eq!(files.len(), 3);
    }

    #[test]
    fn test_collect_single_and_missing() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("bands.dat");
        touch(&file);

        let files = FileCollector::new(file.clone()).collect().unwrap();
        assert_eq!(files, vec![file]);

        assert!(matches!(
            FileCollector::new(dir.path().join("nope")).collect(),
            Err(BandsplotError::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_invalid_pattern() {
        let dir = tempfile::tempdir().unwrap();
        let result = FileCollector::new(dir.path().to_path_buf())
            .with_pattern("[*.json")
            .collect();
        assert!(matches!(result, Err(BandsplotError::InvalidArgument(_))));
    }
}
