//! # 工具函数模块
//!
//! 提供美化输出、日志、临时文件、外部编辑器、目录快照等工具。
//!
//! ## 依赖关系
//! - 被 `main.rs` 和 `commands/` 模块使用
//! - 子模块: editor, logging, output, scratch, snapshot

pub mod editor;
pub mod logging;
pub mod output;
pub mod scratch;
pub mod snapshot;
