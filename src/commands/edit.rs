//! # edit 命令实现
//!
//! 完整的一次编辑流程：
//! 1. 读取目录（或路径列表文件），按位置分配 ID
//! 2. 生成可编辑列表，写入临时文件
//! 3. 启动编辑器并等待退出
//! 4. 读回编辑结果，与原始列表对账
//! 5. 打印每个条目的计划动作（不修改磁盘上的文件）
//!
//! ## 依赖关系
//! - 使用 `cli/edit.rs` 定义的参数
//! - 使用 `models/`, `parsers/`
//! - 使用 `utils/`

use super::RunOutcome;
use crate::cli::edit::EditArgs;
use crate::error::{EditdirError, Result};
use crate::models::EntrySet;
use crate::parsers::{load_edited_list, render_scratch, LoadOutcome};
use crate::utils::editor::Editor;
use crate::utils::scratch::ScratchFile;
use crate::utils::{output, snapshot};

use std::fs;
use tracing::{debug, info, warn};

/// 一次编辑的结果
#[derive(Debug)]
pub enum Plan {
    /// 没有可编辑的条目，未启动编辑器
    Empty,
    /// 用户在编辑后列表的第 `line` 行要求取消
    Cancelled { line: usize },
    /// 对账完成
    Reconciled {
        entries: EntrySet,
        /// 编辑后列表中出现、原始列表中不存在的 ID
        unknown_ids: Vec<u64>,
    },
}

/// 执行 edit 命令
pub fn execute(args: EditArgs) -> Result<RunOutcome> {
    match plan(&args)? {
        Plan::Empty => {
            output::print_info("No entries to edit.");
            Ok(RunOutcome::Completed)
        }
        Plan::Cancelled { line } => Ok(RunOutcome::Cancelled { line }),
        Plan::Reconciled {
            entries,
            unknown_ids,
        } => {
            if !unknown_ids.is_empty() {
                let ids: Vec<String> = unknown_ids.iter().map(|id| id.to_string()).collect();
                output::print_warning(&format!(
                    "Ignoring IDs not present in the original list: {}",
                    ids.join(", ")
                ));
            }

            for entry in entries.iter() {
                println!("{}", entry);
            }

            let summary = entries.summary();
            output::print_done(&format!(
                "{} to rename, {} unchanged, {} to delete (no files were modified)",
                summary.renamed, summary.unchanged, summary.deleted
            ));
            Ok(RunOutcome::Completed)
        }
    }
}

/// 运行编辑流程并返回对账结果，不打印
pub fn plan(args: &EditArgs) -> Result<Plan> {
    let mut original = load_original(args)?;
    info!(entries = original.len(), "Original list loaded");

    if original.is_empty() {
        return Ok(Plan::Empty);
    }

    let editor = Editor::from_command(&args.editor)?;

    // 临时文件在本函数返回（包括出错返回）时删除
    let scratch = ScratchFile::create(&render_scratch(&original, !args.no_hint))?;
    debug!(path = %scratch.path().display(), "Temporary file created for edition");

    editor.edit(scratch.path())?;

    let edited = match load_edited_list(&scratch.read()?)? {
        LoadOutcome::Cancelled { line } => return Ok(Plan::Cancelled { line }),
        LoadOutcome::Loaded(edited) => edited,
    };

    let unknown_ids = original.update(&edited);
    for id in &unknown_ids {
        warn!(id, "Edited listing references an unknown ID");
    }

    let summary = original.summary();
    info!(
        renamed = summary.renamed,
        unchanged = summary.unchanged,
        deleted = summary.deleted,
        "Reconciliation finished"
    );

    Ok(Plan::Reconciled {
        entries: original,
        unknown_ids,
    })
}

/// 读取原始列表：目录子项，或 `--from-file` 指定文件中的每一行
fn load_original(args: &EditArgs) -> Result<EntrySet> {
    match &args.from_file {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|e| EditdirError::FileRead {
                path: path.display().to_string(),
                source: e,
            })?;
            Ok(EntrySet::from_lines(&text))
        }
        None => {
            let snapshot = snapshot::snapshot_dir(&args.dir)?;
            for name in &snapshot.skipped {
                warn!(%name, "Skipping entry that cannot be listed");
                output::print_warning(&format!(
                    "Skipping {:?}: name has surrounding spaces, a line break or is not valid UTF-8",
                    name
                ));
            }
            Ok(EntrySet::from_names(snapshot.names))
        }
    }
}
