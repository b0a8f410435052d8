//! # 命令执行模块
//!
//! 实现编辑流程的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `models/`, `utils/`
//! - 子模块: edit

pub mod edit;

use crate::cli::edit::EditArgs;
use crate::error::Result;

/// 一次运行的非错误结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// 已打印计划
    Completed,
    /// 用户在编辑后列表的第 `line` 行要求取消，未做任何修改
    Cancelled { line: usize },
}

/// 执行命令
pub fn run(args: EditArgs) -> Result<RunOutcome> {
    edit::execute(args)
}
