//! # editdir - 在文本编辑器中批量重命名、删除文件
//!
//! 将目录内容生成带 ID 的列表，交给用户的编辑器修改，
//! 再把编辑结果与原列表对账，得出每个文件的重命名/删除动作。
//! 目前只打印计划，不修改磁盘上的文件。
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (列表生成与解析)
//!   │     └── models/    (条目与对账)
//!   ├── utils/      (输出、日志、临时文件、编辑器、目录快照)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;
use commands::RunOutcome;
use utils::logging::{init_logging, LogConfig};

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();
    init_logging(LogConfig::from_verbosity(cli.verbose));

    match commands::run(cli.edit) {
        Ok(RunOutcome::Completed) => {}
        Ok(RunOutcome::Cancelled { line }) => {
            utils::output::print_info(&format!(
                "Operation cancelled by cancel/abort clause in line {}; no files were modified.",
                line
            ));
        }
        Err(e) => {
            utils::output::print_error(&format!("{}", e));
            std::process::exit(1);
        }
    }
}
