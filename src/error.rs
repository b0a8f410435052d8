//! # 统一错误处理模块
//!
//! 定义 editdir 的所有错误类型，使用 `thiserror` 派生。
//!
//! 取消操作（`cancel`/`abort` 行）不是错误，见 `parsers::listing::LoadOutcome`。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// editdir 统一错误类型
#[derive(Error, Debug)]
pub enum EditdirError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Failed to read directory {path}: {source}")]
    DirectoryRead {
        path: String,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file {path}: {source}")]
    FileWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create temporary file for edition: {source}")]
    TempFile {
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 编辑器错误
    // ─────────────────────────────────────────────────────────────
    #[error("No editor configured. Use --editor or set $EDITOR")]
    EditorNotConfigured,

    #[error("Failed to launch editor '{command}': {source}")]
    EditorLaunch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Canceling due to no clean exit of editor '{command}': Exit Message={status}, Return Code={}",
        display_exit_code(.code)
    )]
    EditorFailed {
        command: String,
        code: Option<i32>,
        status: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Error parsing the edited paths at line {line_number}: {reason} ({line:?})")]
    ParseError {
        line_number: usize,
        line: String,
        reason: String,
    },
}

/// 被信号终止的进程没有退出码
fn display_exit_code(code: &Option<i32>) -> String {
    match code {
        Some(c) => c.to_string(),
        None => "none".to_string(),
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, EditdirError>;
