//! # 可编辑列表
//!
//! 生成供用户编辑的列表文本，并把编辑后的文本读回为条目集合。
//!
//! ## 列表格式
//! ```text
//! # 说明注释（可选）
//! 1 file1.txt
//! 2 file 2.txt
//! ...
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/edit.rs` 使用
//! - 使用 `parsers/line.rs`, `models/`

use super::line::parse_line;
use crate::error::{EditdirError, Result};
use crate::models::{EntrySet, Status};
use std::fmt::Write;
use tracing::debug;

/// 列表开头的编辑说明
pub const EDIT_HINT: &str = "\
# Lines starting with # or empty are ignored.
# Lines starting with 'cancel' or 'abort' tell the program to do nothing on exit. As well as exiting the editor with non-zero return code.
# Valid path lines have the format 'ID<space>NewPath'. They must start with a number (no spaces before) followed by a space and the new path for that file.
# The number is the ID referencing to the original list so you can reorder the lines as long as the ID is kept.
# Deleted lines tell the program that it must delete that file from disk.
";

/// 读取编辑后列表的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// 解析完成，只包含 `Rename` 条目
    Loaded(EntrySet),
    /// 用户在第 `line` 行（从 1 开始）要求取消
    Cancelled { line: usize },
}

/// 生成列表文本：每行 `<ID> <Path>`，按 ID 升序
pub fn render_listing(entries: &EntrySet) -> String {
    let mut out = String::new();
    for entry in entries.iter() {
        // 写入 String 不会失败
        let _ = writeln!(out, "{} {}", entry.id, entry.path);
    }
    out
}

/// 生成写入临时文件的完整内容
pub fn render_scratch(entries: &EntrySet, hint: bool) -> String {
    let listing = render_listing(entries);
    if hint {
        format!("{}{}", EDIT_HINT, listing)
    } else {
        listing
    }
}

/// 读取编辑后的列表
///
/// `cancel`/`abort` 行立即结束读取并返回 `Cancelled`，
/// 即使之前已经遇到无法解析的行。没有取消时，第一个无法解析的行
/// 作为 `ParseError` 返回。同一 ID 出现多次时后者覆盖前者。
pub fn load_edited_list(text: &str) -> Result<LoadOutcome> {
    let mut edited = EntrySet::new();
    let mut first_error: Option<EditdirError> = None;

    for (idx, line) in text.lines().enumerate() {
        let line_number = idx + 1;
        let entry = parse_line(line);

        match entry.status {
            Status::Cancel => {
                debug!(line = line_number, "Cancel clause found");
                return Ok(LoadOutcome::Cancelled { line: line_number });
            }
            Status::Ignore => {
                debug!(line, "Ignored line");
            }
            Status::Rename => {
                if let Some(prev) = edited.insert(entry) {
                    debug!(
                        id = prev.id,
                        previous = %prev.path,
                        line = line_number,
                        "Duplicate ID, keeping the later line"
                    );
                }
            }
            _ => {
                if first_error.is_none() {
                    first_error = Some(EditdirError::ParseError {
                        line_number,
                        line: line.to_string(),
                        reason: entry.error.unwrap_or_else(|| format!("status {}", entry.status)),
                    });
                } else {
                    debug!(line = line_number, "Further unparsable line");
                }
            }
        }
    }

    match first_error {
        Some(err) => Err(err),
        None => Ok(LoadOutcome::Loaded(edited)),
    }
}
