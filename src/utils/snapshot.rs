//! # 目录快照
//!
//! 读取单个目录的直接子项名称（不递归），按文件名排序以保证顺序稳定。
//! 文件、目录和符号链接都包含在内。
//!
//! 无法原样写入列表的名称（非 UTF-8、首尾空格、含换行）不进入快照，
//! 单独返回给调用方提示；它们不会出现在计划中。
//!
//! ## 依赖关系
//! - 被 `commands/edit.rs` 使用
//! - 使用 `walkdir` 遍历目录
//! - 使用 `models/entry.rs` 的 `is_listable`

use crate::error::{EditdirError, Result};
use crate::models::is_listable;

use std::path::Path;
use walkdir::WalkDir;

/// 目录快照结果
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    /// 可编辑的名称，按文件名排序
    pub names: Vec<String>,
    /// 被跳过的名称（有损转换后的显示形式）
    pub skipped: Vec<String>,
}

/// 读取目录子项名称
pub fn snapshot_dir(dir: &Path) -> Result<Snapshot> {
    if !dir.is_dir() {
        return Err(EditdirError::DirectoryNotFound {
            path: dir.display().to_string(),
        });
    }

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    let mut snapshot = Snapshot::default();
    for entry in walker {
        let entry = entry.map_err(|e| EditdirError::DirectoryRead {
            path: dir.display().to_string(),
            source: e,
        })?;

        match entry.file_name().to_str() {
            Some(name) if is_listable(name) => snapshot.names.push(name.to_string()),
            _ => snapshot
                .skipped
                .push(entry.file_name().to_string_lossy().to_string()),
        }
    }

    Ok(snapshot)
}
