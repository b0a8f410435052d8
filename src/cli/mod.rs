//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: edit

pub mod edit;

use clap::Parser;

/// editdir - 在文本编辑器中批量重命名、删除文件
#[derive(Parser, Debug)]
#[command(name = "editdir")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Bulk rename or delete directory entries by editing a listing in your text editor",
    long_about = None
)]
pub struct Cli {
    #[command(flatten)]
    pub edit: edit::EditArgs,

    /// Increase diagnostic output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
