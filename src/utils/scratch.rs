//! # 临时编辑文件
//!
//! 在系统临时目录中创建唯一命名的文件，写入待编辑列表。
//! 文件在 `ScratchFile` 被丢弃时删除（成功、出错或 panic 展开时均如此）。
//!
//! ## 依赖关系
//! - 被 `commands/edit.rs` 使用
//! - 使用 `tempfile` crate

use crate::error::{EditdirError, Result};

use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::TempPath;

/// 临时文件名前缀
const SCRATCH_PREFIX: &str = "editdir.";

/// 待编辑的临时文件
#[derive(Debug)]
pub struct ScratchFile {
    path: TempPath,
}

impl ScratchFile {
    /// 创建临时文件并写入内容
    pub fn create(content: &str) -> Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix(SCRATCH_PREFIX)
            .suffix(".txt")
            .tempfile()
            .map_err(|e| EditdirError::TempFile { source: e })?;

        let write_err = |e: std::io::Error, path: &Path| EditdirError::FileWrite {
            path: path.display().to_string(),
            source: e,
        };
        file.write_all(content.as_bytes())
            .map_err(|e| write_err(e, file.path()))?;
        file.flush().map_err(|e| write_err(e, file.path()))?;

        // 关闭句柄，编辑器可以自由替换文件；路径仍由 TempPath 负责删除
        Ok(Self {
            path: file.into_temp_path(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 读回编辑后的内容
    pub fn read(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|e| EditdirError::FileRead {
            path: self.path.display().to_string(),
            source: e,
        })
    }
}
