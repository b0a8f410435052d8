//! # 编辑参数定义
//!
//! 参数传递给 `commands/edit.rs`
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用

use crate::utils::editor::DEFAULT_EDITOR;
use clap::Args;
use std::path::PathBuf;

/// 编辑参数
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Directory whose entries will be listed for editing
    #[arg(default_value = ".", conflicts_with = "from_file")]
    pub dir: PathBuf,

    /// Editor command; the listing path is appended as the last argument
    #[arg(short, long, env = "EDITOR", default_value = DEFAULT_EDITOR)]
    pub editor: String,

    /// Read the original paths from a file (one per line) instead of a directory
    #[arg(short, long, value_name = "PATH")]
    pub from_file: Option<PathBuf>,

    /// Do not write the instructional comment block into the listing
    #[arg(long, default_value_t = false)]
    pub no_hint: bool,
}
